//! Box-side shorthand properties
//!
//! [§ 9.2 Shorthand properties](https://www.w3.org/TR/css-cascade-4/#shorthand)
//!
//! "Some properties are shorthand properties, meaning that they allow authors
//! to specify the values of several properties with a single property."
//!
//! `border-color`, `border-width`, `border-style`, `margin` and `padding` all
//! take one to four values and spread them over the four sides the same way.
//! [`expand`] implements that spreading once; [`ShorthandProperty`] holds the
//! committed result for one family.

mod expander;
mod family;
mod property;
mod side;
mod validator;

pub use expander::{Expansion, expand};
pub use family::{
    BorderColorFamily, BorderStyleFamily, BorderWidthFamily, MarginFamily, PaddingFamily,
    ShorthandFamily,
};
pub use property::ShorthandProperty;
pub use side::{Side, Sides};
pub use validator::{SideSlot, SideValidator};
