//! Committed state for one shorthand property.

use core::marker::PhantomData;

use serde::Serialize;
use tessel_common::warning::warn_once;

use super::{Expansion, ShorthandFamily, Side, SideSlot, Sides, expand};
use crate::component::ShorthandValue;
use crate::error::ExpandError;

/// [§ 9.2 Shorthand properties](https://www.w3.org/TR/css-cascade-4/#shorthand)
///
/// The authoritative four-side value of one shorthand, e.g. `border-color`.
///
/// State only changes through a successful expansion, which replaces all
/// four sides and the inherited flag together. A rejected declaration leaves
/// everything as it was.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShorthandProperty<F: ShorthandFamily> {
    #[serde(skip)]
    family: PhantomData<F>,
    inherited: bool,
    sides: Sides<F::Value>,
}

impl<F: ShorthandFamily> Default for ShorthandProperty<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ShorthandFamily> ShorthandProperty<F> {
    /// A property with every side at the longhand's initial value.
    #[must_use]
    pub fn new() -> Self {
        Self {
            family: PhantomData,
            inherited: false,
            sides: Sides::splat(F::initial()),
        }
    }

    /// Whether the last accepted declaration was `inherit`.
    #[must_use]
    pub const fn is_inherited(&self) -> bool {
        self.inherited
    }

    /// The committed value for `side`.
    #[must_use]
    pub const fn side(&self, side: Side) -> &F::Value {
        self.sides.get(side)
    }

    /// The committed top value.
    #[must_use]
    pub const fn top(&self) -> &F::Value {
        &self.sides.top
    }

    /// The committed right value.
    #[must_use]
    pub const fn right(&self) -> &F::Value {
        &self.sides.right
    }

    /// The committed bottom value.
    #[must_use]
    pub const fn bottom(&self) -> &F::Value {
        &self.sides.bottom
    }

    /// The committed left value.
    #[must_use]
    pub const fn left(&self) -> &F::Value {
        &self.sides.left
    }

    /// All four committed values.
    #[must_use]
    pub const fn sides(&self) -> &Sides<F::Value> {
        &self.sides
    }

    /// Validate `value` and, if it expands, commit it.
    ///
    /// Accepts anything convertible to a [`ShorthandValue`]: a bare
    /// component, a component list, or a [`crate::ShorthandInput`].
    ///
    /// # Errors
    ///
    /// Returns the [`ExpandError`] that rejected the value. The committed
    /// state is unchanged in that case.
    pub fn try_apply(&mut self, value: impl Into<ShorthandValue>) -> Result<(), ExpandError> {
        let value = value.into();
        let [top, right, bottom, left] = SideSlot::<F>::fresh_set().into_array();

        match expand(&value, top, right, bottom, left)? {
            Expansion::Inherited => self.inherited = true,
            Expansion::Sides(sides) => {
                *self = Self {
                    family: PhantomData,
                    inherited: false,
                    sides,
                };
            }
        }
        Ok(())
    }

    /// Validate `value` and, if it expands, commit it.
    ///
    /// Returns whether the declaration was accepted. Rejections are reported
    /// once through the warning channel and otherwise ignored.
    pub fn validate_and_apply(&mut self, value: impl Into<ShorthandValue>) -> bool {
        match self.try_apply(value) {
            Ok(()) => true,
            Err(err) => {
                warn_once("CSS", &format!("invalid '{}' declaration: {err}", F::NAME));
                false
            }
        }
    }

    /// Every longhand this shorthand sets, as `(name, value text)` in
    /// top, right, bottom, left order. Inherited properties report
    /// `inherit` for each longhand.
    #[must_use]
    pub fn longhands(&self) -> Vec<(String, String)> {
        self.sides
            .entries()
            .map(|(side, value)| {
                let text = if self.inherited {
                    "inherit".to_string()
                } else {
                    value.to_string()
                };
                (F::longhand_name(side), text)
            })
            .collect()
    }
}
