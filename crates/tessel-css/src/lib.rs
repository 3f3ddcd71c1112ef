//! Validation and four-side expansion of CSS box-model shorthands for the
//! Tessel style engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **Component values** ([§ 5.4.7](https://www.w3.org/TR/css-syntax-3/#consume-component-value))
//!   - The already-parsed units handed over by the value parser
//!   - Normalization of bare values, lists and `inherit`
//!
//! - **Side values** ([CSS Values Level 4](https://www.w3.org/TR/css-values-4/))
//!   - Colors (hex, named, `rgb()`), `currentcolor`
//!   - Lengths (px, em, vw, vh, %), `auto`
//!   - Line widths and line styles
//!
//! - **Shorthand expansion** ([§ 8.3](https://www.w3.org/TR/CSS2/box.html#margin-properties))
//!   - The 1/2/3/4 value rule shared by `border-color`, `border-width`,
//!     `border-style`, `margin` and `padding`
//!   - All-or-nothing commit of the four sides
//!
//! # Not Yet Implemented
//!
//! - Tokenizing CSS text (values arrive already parsed)
//! - Serializing shorthands back to their shortest form
//! - Cascade and inheritance resolution

/// Component values and shorthand input normalization.
pub mod component;
/// Routing declarations to the box-side shorthands.
pub mod declarations;
/// Expansion errors.
pub mod error;
/// Four-side shorthand expansion and committed state.
pub mod shorthand;
/// Typed per-side values.
pub mod values;

// Re-exports for convenience
pub use component::{ComponentValue, Declaration, ShorthandInput, ShorthandValue};
pub use declarations::{BoxShorthands, ShorthandName};
pub use error::ExpandError;
pub use shorthand::{
    BorderColorFamily, BorderStyleFamily, BorderWidthFamily, Expansion, MarginFamily,
    PaddingFamily, ShorthandFamily, ShorthandProperty, Side, SideSlot, SideValidator, Sides,
    expand,
};
pub use values::{AutoLength, BorderColor, ColorValue, LengthValue, LineStyle, LineWidth};
