//! CSS Length values and parsing
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

use core::fmt;

use serde::Serialize;
use tessel_common::warning::warn_once;

use crate::component::ComponentValue;

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
/// "Lengths refer to distance measurements and are denoted by `<length>` in the
/// property definitions."
///
/// Percentages are carried here too, since every box-side shorthand that takes
/// a length also takes a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum LengthValue {
    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// "1px = 1/96th of 1in"
    Px(f64),
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    /// "Equal to the computed value of the font-size property of the element"
    Em(f64),
    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    /// "1vw = 1% of viewport width"
    Vw(f64),
    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    /// "1vh = 1% of viewport height"
    Vh(f64),
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    Percent(f64),
}

impl LengthValue {
    /// The zero length.
    pub const ZERO: Self = Self::Px(0.0);

    /// The numeric part, whatever the unit.
    #[must_use]
    pub const fn magnitude(&self) -> f64 {
        match *self {
            Self::Px(v) | Self::Em(v) | Self::Vw(v) | Self::Vh(v) | Self::Percent(v) => v,
        }
    }

    /// Whether the value is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.magnitude() < 0.0
    }
}

impl Default for LengthValue {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for LengthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Em(v) => write!(f, "{v}em"),
            Self::Vw(v) => write!(f, "{v}vw"),
            Self::Vh(v) => write!(f, "{v}vh"),
            Self::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
///
/// "`<margin-width>` = `<length>` | `<percentage>` | auto"
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum AutoLength {
    /// "The keyword 'auto'... allows the user agent to compute the value
    /// based on other properties."
    Auto,
    /// A specific length value (px, em, etc.).
    Length(LengthValue),
}

impl Default for AutoLength {
    fn default() -> Self {
        Self::Length(LengthValue::ZERO)
    }
}

impl fmt::Display for AutoLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Length(len) => len.fmt(f),
        }
    }
}

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
/// Parse a single component value as a `<length>` or `<percentage>`.
///
/// "For zero lengths the unit identifier is optional."
#[must_use]
pub fn parse_single_length(v: &ComponentValue) -> Option<LengthValue> {
    match v {
        ComponentValue::Dimension { value, unit } => match unit.to_ascii_lowercase().as_str() {
            "px" => Some(LengthValue::Px(*value)),
            "em" => Some(LengthValue::Em(*value)),
            "vw" => Some(LengthValue::Vw(*value)),
            "vh" => Some(LengthValue::Vh(*value)),
            _ => {
                warn_once("CSS", &format!("unsupported unit '{unit}'"));
                None
            }
        },
        ComponentValue::Percentage(value) => Some(LengthValue::Percent(*value)),
        ComponentValue::Number(value) if *value == 0.0 => Some(LengthValue::ZERO),
        _ => None,
    }
}

/// Parse a single component value as a non-negative `<length>` or `<percentage>`.
///
/// [§ 8.4 Padding properties](https://www.w3.org/TR/CSS2/box.html#padding-properties)
/// "Unlike margin properties, values for padding values cannot be negative."
#[must_use]
pub fn parse_non_negative_length(v: &ComponentValue) -> Option<LengthValue> {
    parse_single_length(v).filter(|len| !len.is_negative())
}

/// Parse a single component value as 'auto' or a length.
#[must_use]
pub fn parse_single_auto_length(v: &ComponentValue) -> Option<AutoLength> {
    if v.is_keyword("auto") {
        return Some(AutoLength::Auto);
    }
    parse_single_length(v).map(AutoLength::Length)
}
