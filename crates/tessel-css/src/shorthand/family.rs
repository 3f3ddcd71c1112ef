//! The concrete four-side shorthand families.
//!
//! Each family names its longhands and says how one component becomes one
//! side's value. The per-side validators are all the same generic
//! [`SideSlot`](super::SideSlot), tagged with a [`Side`].

use core::fmt;

use serde::Serialize;

use super::Side;
use crate::component::ComponentValue;
use crate::values::{
    AutoLength, BorderColor, LengthValue, LineStyle, LineWidth, parse_border_color,
    parse_line_style, parse_line_width, parse_non_negative_length, parse_single_auto_length,
};

/// A shorthand that sets one value on each of the four box sides.
pub trait ShorthandFamily {
    /// The shorthand property name, e.g. `border-color`.
    const NAME: &'static str;
    /// Longhand name before the side, e.g. `border` in `border-top-color`.
    const LONGHAND_PREFIX: &'static str;
    /// Longhand name after the side, e.g. `color` in `border-top-color`.
    /// Empty for `margin` and `padding`.
    const LONGHAND_SUFFIX: &'static str;

    /// The value stored per side.
    type Value: Clone + PartialEq + fmt::Debug + fmt::Display + Serialize;

    /// Parse one component as this family's side value.
    fn parse(component: &ComponentValue) -> Option<Self::Value>;

    /// The longhand's initial value.
    fn initial() -> Self::Value;

    /// The longhand property name for `side`.
    #[must_use]
    fn longhand_name(side: Side) -> String {
        if Self::LONGHAND_SUFFIX.is_empty() {
            format!("{}-{side}", Self::LONGHAND_PREFIX)
        } else {
            format!("{}-{side}-{}", Self::LONGHAND_PREFIX, Self::LONGHAND_SUFFIX)
        }
    }
}

/// [§ 3.1 'border-color'](https://www.w3.org/TR/css-backgrounds-3/#border-color)
///
/// "Value: `<color>`{1,4}"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderColorFamily;

impl ShorthandFamily for BorderColorFamily {
    const NAME: &'static str = "border-color";
    const LONGHAND_PREFIX: &'static str = "border";
    const LONGHAND_SUFFIX: &'static str = "color";
    type Value = BorderColor;

    fn parse(component: &ComponentValue) -> Option<BorderColor> {
        parse_border_color(component)
    }

    fn initial() -> BorderColor {
        BorderColor::CurrentColor
    }
}

/// [§ 3.3 'border-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
///
/// "Value: `<line-width>`{1,4}"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderWidthFamily;

impl ShorthandFamily for BorderWidthFamily {
    const NAME: &'static str = "border-width";
    const LONGHAND_PREFIX: &'static str = "border";
    const LONGHAND_SUFFIX: &'static str = "width";
    type Value = LineWidth;

    fn parse(component: &ComponentValue) -> Option<LineWidth> {
        parse_line_width(component)
    }

    fn initial() -> LineWidth {
        LineWidth::Medium
    }
}

/// [§ 3.2 'border-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
///
/// "Value: `<line-style>`{1,4}"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderStyleFamily;

impl ShorthandFamily for BorderStyleFamily {
    const NAME: &'static str = "border-style";
    const LONGHAND_PREFIX: &'static str = "border";
    const LONGHAND_SUFFIX: &'static str = "style";
    type Value = LineStyle;

    fn parse(component: &ComponentValue) -> Option<LineStyle> {
        parse_line_style(component)
    }

    fn initial() -> LineStyle {
        LineStyle::None
    }
}

/// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
///
/// "Value: `<margin-width>`{1,4} | inherit"
///
/// Margins may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarginFamily;

impl ShorthandFamily for MarginFamily {
    const NAME: &'static str = "margin";
    const LONGHAND_PREFIX: &'static str = "margin";
    const LONGHAND_SUFFIX: &'static str = "";
    type Value = AutoLength;

    fn parse(component: &ComponentValue) -> Option<AutoLength> {
        parse_single_auto_length(component)
    }

    fn initial() -> AutoLength {
        AutoLength::Length(LengthValue::ZERO)
    }
}

/// [§ 8.4 Padding properties](https://www.w3.org/TR/CSS2/box.html#padding-properties)
///
/// "Value: `<padding-width>`{1,4} | inherit"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddingFamily;

impl ShorthandFamily for PaddingFamily {
    const NAME: &'static str = "padding";
    const LONGHAND_PREFIX: &'static str = "padding";
    const LONGHAND_SUFFIX: &'static str = "";
    type Value = LengthValue;

    fn parse(component: &ComponentValue) -> Option<LengthValue> {
        parse_non_negative_length(component)
    }

    fn initial() -> LengthValue {
        LengthValue::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longhand_names() {
        assert_eq!(BorderColorFamily::longhand_name(Side::Top), "border-top-color");
        assert_eq!(BorderWidthFamily::longhand_name(Side::Left), "border-left-width");
        assert_eq!(BorderStyleFamily::longhand_name(Side::Right), "border-right-style");
        assert_eq!(MarginFamily::longhand_name(Side::Bottom), "margin-bottom");
        assert_eq!(PaddingFamily::longhand_name(Side::Top), "padding-top");
    }

    #[test]
    fn test_margin_allows_negative_padding_does_not() {
        let negative = ComponentValue::dimension(-4.0, "px");
        assert_eq!(
            MarginFamily::parse(&negative),
            Some(AutoLength::Length(LengthValue::Px(-4.0)))
        );
        assert_eq!(PaddingFamily::parse(&negative), None);
        assert_eq!(PaddingFamily::parse(&ComponentValue::ident("auto")), None);
    }
}
