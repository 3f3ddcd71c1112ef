//! Typed per-side values and their component parsers
//!
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//! - [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/)

mod color;
mod length;
mod line;

pub use color::{BorderColor, ColorValue, parse_border_color, parse_single_color};
pub use length::{
    AutoLength, LengthValue, parse_non_negative_length, parse_single_auto_length,
    parse_single_length,
};
pub use line::{LineStyle, LineWidth, parse_line_style, parse_line_width};
