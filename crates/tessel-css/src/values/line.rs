//! Border line values
//!
//! [§ 3 Line Styles and Widths](https://www.w3.org/TR/css-backgrounds-3/#borders)

use core::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use super::length::{LengthValue, parse_single_length};
use crate::component::ComponentValue;

/// [§ 3.2 Line Patterns: the 'border-style' properties](https://www.w3.org/TR/css-backgrounds-3/#border-style)
///
/// "`<line-style>` = none | hidden | dotted | dashed | solid | double | groove
/// | ridge | inset | outset"
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum LineStyle {
    /// "No border. Color and width are ignored."
    #[default]
    None,
    /// "Same as none, but has different behavior in the border conflict
    /// resolution for border-collapsed tables."
    Hidden,
    /// "A series of round dots."
    Dotted,
    /// "A series of square-ended dashes."
    Dashed,
    /// "A single line segment."
    Solid,
    /// "Two parallel solid lines with some space between them."
    Double,
    /// "Looks as if it were carved in the canvas."
    Groove,
    /// "Looks as if it were coming out of the canvas."
    Ridge,
    /// "Looks as if the content on the inside of the border is sunken into the canvas."
    Inset,
    /// "Looks as if the content on the inside of the border is coming out of the canvas."
    Outset,
}

/// [§ 3.3 Line Thickness: the 'border-width' properties](https://www.w3.org/TR/css-backgrounds-3/#border-width)
///
/// "`<line-width>` = `<length [0,∞]>` | thin | medium | thick"
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub enum LineWidth {
    /// "thin ≤ medium ≤ thick"
    Thin,
    /// The initial value.
    #[default]
    Medium,
    /// The thickest keyword width.
    Thick,
    /// An explicit non-negative length.
    Length(LengthValue),
}

impl fmt::Display for LineWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Thin => f.write_str("thin"),
            Self::Medium => f.write_str("medium"),
            Self::Thick => f.write_str("thick"),
            Self::Length(len) => len.fmt(f),
        }
    }
}

/// Parse a single component value as a `<line-style>`.
#[must_use]
pub fn parse_line_style(v: &ComponentValue) -> Option<LineStyle> {
    match v {
        ComponentValue::Ident(ident) => ident.parse().ok(),
        _ => None,
    }
}

/// Parse a single component value as a `<line-width>`.
///
/// Percentages are not part of `<line-width>`, and negative lengths are invalid.
#[must_use]
pub fn parse_line_width(v: &ComponentValue) -> Option<LineWidth> {
    if let ComponentValue::Ident(ident) = v {
        return match ident.to_ascii_lowercase().as_str() {
            "thin" => Some(LineWidth::Thin),
            "medium" => Some(LineWidth::Medium),
            "thick" => Some(LineWidth::Thick),
            _ => None,
        };
    }
    match parse_single_length(v)? {
        LengthValue::Percent(_) => None,
        len if len.is_negative() => None,
        len => Some(LineWidth::Length(len)),
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_every_style_keyword_parses() {
        for style in LineStyle::iter() {
            let keyword = style.to_string();
            assert_eq!(parse_line_style(&ComponentValue::ident(&keyword)), Some(style));
        }
        assert_eq!(
            parse_line_style(&ComponentValue::ident("SOLID")),
            Some(LineStyle::Solid)
        );
        assert_eq!(parse_line_style(&ComponentValue::ident("wavy")), None);
        assert_eq!(parse_line_style(&ComponentValue::hash("solid")), None);
    }

    #[test]
    fn test_line_width() {
        assert_eq!(
            parse_line_width(&ComponentValue::ident("Thick")),
            Some(LineWidth::Thick)
        );
        assert_eq!(
            parse_line_width(&ComponentValue::dimension(2.0, "px")),
            Some(LineWidth::Length(LengthValue::Px(2.0)))
        );
        assert_eq!(parse_line_width(&ComponentValue::percentage(10.0)), None);
        assert_eq!(parse_line_width(&ComponentValue::dimension(-2.0, "px")), None);
    }
}
