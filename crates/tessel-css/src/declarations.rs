//! Routing declarations to the box-side shorthands.
//!
//! [§ 9.2 Shorthand properties](https://www.w3.org/TR/css-cascade-4/#shorthand)

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};
use tessel_common::warning::warn_once;

use crate::component::{Declaration, ShorthandValue};
use crate::shorthand::{
    BorderColorFamily, BorderStyleFamily, BorderWidthFamily, MarginFamily, PaddingFamily,
    ShorthandProperty,
};

/// The shorthand property names handled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ShorthandName {
    /// `border-color`
    BorderColor,
    /// `border-width`
    BorderWidth,
    /// `border-style`
    BorderStyle,
    /// `margin`
    Margin,
    /// `padding`
    Padding,
}

/// The box-side shorthands of one style rule.
///
/// Each property is re-validated for every declaration naming it; the last
/// accepted declaration wins.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BoxShorthands {
    /// [§ 3.1 'border-color'](https://www.w3.org/TR/css-backgrounds-3/#border-color)
    pub border_color: ShorthandProperty<BorderColorFamily>,
    /// [§ 3.3 'border-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    pub border_width: ShorthandProperty<BorderWidthFamily>,
    /// [§ 3.2 'border-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
    pub border_style: ShorthandProperty<BorderStyleFamily>,
    /// [§ 8.3 'margin'](https://www.w3.org/TR/CSS2/box.html#margin-properties)
    pub margin: ShorthandProperty<MarginFamily>,
    /// [§ 8.4 'padding'](https://www.w3.org/TR/CSS2/box.html#padding-properties)
    pub padding: ShorthandProperty<PaddingFamily>,
}

impl BoxShorthands {
    /// Every property at its initial value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one declaration.
    ///
    /// Returns whether it was accepted. Unknown property names and rejected
    /// values leave every property unchanged.
    pub fn apply_declaration(&mut self, decl: &Declaration) -> bool {
        let Ok(name) = decl.name.parse::<ShorthandName>() else {
            warn_once("CSS", &format!("unknown property '{}'", decl.name));
            return false;
        };
        let value = ShorthandValue::from_declaration(&decl.value);

        match name {
            ShorthandName::BorderColor => self.border_color.validate_and_apply(value),
            ShorthandName::BorderWidth => self.border_width.validate_and_apply(value),
            ShorthandName::BorderStyle => self.border_style.validate_and_apply(value),
            ShorthandName::Margin => self.margin.validate_and_apply(value),
            ShorthandName::Padding => self.padding.validate_and_apply(value),
        }
    }

    /// Apply declarations in order, returning how many were accepted.
    pub fn apply_all<'a>(&mut self, decls: impl IntoIterator<Item = &'a Declaration>) -> usize {
        decls
            .into_iter()
            .filter(|decl| self.apply_declaration(decl))
            .count()
    }

    /// Whether the named shorthand's last accepted value was `inherit`.
    #[must_use]
    pub const fn is_inherited(&self, name: ShorthandName) -> bool {
        match name {
            ShorthandName::BorderColor => self.border_color.is_inherited(),
            ShorthandName::BorderWidth => self.border_width.is_inherited(),
            ShorthandName::BorderStyle => self.border_style.is_inherited(),
            ShorthandName::Margin => self.margin.is_inherited(),
            ShorthandName::Padding => self.padding.is_inherited(),
        }
    }

    /// Every committed longhand as `(name, value text)`, grouped by shorthand
    /// in [`ShorthandName`] order.
    #[must_use]
    pub fn longhands(&self) -> Vec<(String, String)> {
        let mut out = self.border_color.longhands();
        out.extend(self.border_width.longhands());
        out.extend(self.border_style.longhands());
        out.extend(self.margin.longhands());
        out.extend(self.padding.longhands());
        out
    }
}
