//! CSS Color values and parsing
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use core::fmt;

use serde::Serialize;

use crate::component::ComponentValue;

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
/// A color represented as RGBA components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorValue {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// "the alpha channel" (0-255, 255 = fully opaque)
    pub a: u8,
}

impl ColorValue {
    /// Black (#000000)
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    /// Transparent black
    pub const TRANSPARENT: Self = Self { r: 0, g: 0, b: 0, a: 0 };

    /// A fully opaque color.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    ///
    /// "The syntax of a <hex-color> is a <hash-token> token whose value consists of
    /// 3, 4, 6, or 8 hexadecimal digits."
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        // "The three-digit RGB notation (#RGB) is converted into six-digit form (#RRGGBB)
        // by replicating digits, not by adding zeros."
        let short = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
        let long = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => Some(Self::opaque(short(0)?, short(1)?, short(2)?)),
            4 => Some(Self {
                r: short(0)?,
                g: short(1)?,
                b: short(2)?,
                a: short(3)?,
            }),
            6 => Some(Self::opaque(long(0)?, long(2)?, long(4)?)),
            8 => Some(Self {
                r: long(0)?,
                g: long(2)?,
                b: long(4)?,
                a: long(6)?,
            }),
            _ => None,
        }
    }

    /// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
    ///
    /// The basic sixteen HTML colors plus a few common extras.
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "silver" => Self::opaque(192, 192, 192),
            "gray" | "grey" => Self::opaque(128, 128, 128),
            "white" => Self::opaque(255, 255, 255),
            "maroon" => Self::opaque(128, 0, 0),
            "red" => Self::opaque(255, 0, 0),
            "purple" => Self::opaque(128, 0, 128),
            "fuchsia" | "magenta" => Self::opaque(255, 0, 255),
            "green" => Self::opaque(0, 128, 0),
            "lime" => Self::opaque(0, 255, 0),
            "olive" => Self::opaque(128, 128, 0),
            "yellow" => Self::opaque(255, 255, 0),
            "navy" => Self::opaque(0, 0, 128),
            "blue" => Self::opaque(0, 0, 255),
            "teal" => Self::opaque(0, 128, 128),
            "aqua" | "cyan" => Self::opaque(0, 255, 255),
            "orange" => Self::opaque(255, 165, 0),
            "transparent" => Self::TRANSPARENT,
            _ => return None,
        };
        Some(color)
    }

    /// Convert to hex string notation (#RRGGBB or #RRGGBBAA if alpha != 255)
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

/// [§ 4.1 'border-color'](https://www.w3.org/TR/css-backgrounds-3/#border-color)
///
/// A per-side border color: either a concrete color or the element's
/// `color` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BorderColor {
    /// [§ 6.4 currentcolor](https://www.w3.org/TR/css-color-4/#currentcolor-color)
    ///
    /// "The keyword currentcolor represents value of the color property on
    /// the same element." This is the initial value of the longhands.
    #[default]
    CurrentColor,
    /// A concrete color.
    Color(ColorValue),
}

impl fmt::Display for BorderColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentColor => f.write_str("currentcolor"),
            Self::Color(color) => color.fmt(f),
        }
    }
}

/// Parse a single component value as a color.
#[must_use]
pub fn parse_single_color(v: &ComponentValue) -> Option<ColorValue> {
    match v {
        ComponentValue::Hash(value) => ColorValue::from_hex(value),
        ComponentValue::Ident(name) => ColorValue::from_named(name),
        ComponentValue::Function { name, args }
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            parse_rgb_function(args)
        }
        _ => None,
    }
}

/// Parse a single component value as a `border-*-color` longhand value.
#[must_use]
pub fn parse_border_color(v: &ComponentValue) -> Option<BorderColor> {
    if v.is_keyword("currentcolor") {
        return Some(BorderColor::CurrentColor);
    }
    parse_single_color(v).map(BorderColor::Color)
}

/// [§ 4.1 The RGB Functions](https://www.w3.org/TR/css-color-4/#rgb-functions)
///
/// "rgb() = rgb( <percentage>{3} [ / <alpha-value> ]? ) |
///          rgb( <number>{3} [ / <alpha-value> ]? )"
///
/// Legacy: "rgb( <percentage>#{3} , <alpha-value>? ) |
///          rgb( <number>#{3} , <alpha-value>? )"
///
/// Separators follow one syntax or the other, and the three channels share
/// one type. Channel values are clamped, not rejected.
fn parse_rgb_function(args: &[ComponentValue]) -> Option<ColorValue> {
    use ComponentValue::{Comma, Delim, Number, Percentage, Whitespace};

    let args: Vec<&ComponentValue> = args.iter().filter(|arg| !matches!(arg, Whitespace)).collect();
    let (channels, alpha) = match args.as_slice() {
        [r, Comma, g, Comma, b] | [r, g, b] => ([*r, *g, *b], None),
        [r, Comma, g, Comma, b, Comma, alpha] | [r, g, b, Delim('/'), alpha] => {
            ([*r, *g, *b], Some(*alpha))
        }
        _ => return None,
    };

    let [r, g, b] = match channels {
        [Number(r), Number(g), Number(b)] => [*r, *g, *b],
        // "100% = 255"
        [Percentage(r), Percentage(g), Percentage(b)] => [
            r * 255.0 / 100.0,
            g * 255.0 / 100.0,
            b * 255.0 / 100.0,
        ],
        _ => return None,
    };

    // "The final argument, <alpha-value>, specifies the alpha of the color."
    // "If omitted, it defaults to 100%."
    let a = match alpha {
        None => 255.0,
        Some(Number(value)) => value * 255.0,
        Some(Percentage(value)) => value * 255.0 / 100.0,
        Some(_) => return None,
    };

    Some(ColorValue {
        r: clamp_channel(r),
        g: clamp_channel(g),
        b: clamp_channel(b),
        a: clamp_channel(a),
    })
}

/// "Values outside these ranges are not invalid, but are clamped to the
/// ranges defined here at parsed-value time."
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_channel(value: f64) -> u8 {
    // Clamped to 0..=255 first, so the cast is exact.
    value.round().clamp(0.0, 255.0) as u8
}
