//! Per-side validation.

use core::marker::PhantomData;

use super::{ShorthandFamily, Side, Sides};
use crate::component::ComponentValue;

/// Decides whether one component is acceptable for one box side, and keeps
/// it if so.
///
/// A failed [`try_accept`](SideValidator::try_accept) must leave the
/// validator exactly as it was, so a rejected trial leaves nothing behind.
pub trait SideValidator {
    /// The value kept on success.
    type Value: Clone;

    /// The side this validator stands for.
    fn side(&self) -> Side;

    /// Try to accept `component`, found at `position` in the shorthand.
    ///
    /// Returns `true` and stores the value on success. On failure returns
    /// `false` and changes nothing. `position` is informational.
    fn try_accept(&mut self, component: &ComponentValue, position: usize) -> bool;

    /// The accepted value, if any.
    fn value(&self) -> Option<&Self::Value>;

    /// Consume the validator, yielding the accepted value, if any.
    fn into_value(self) -> Option<Self::Value>;
}

/// The one validator used for every side of every [`ShorthandFamily`]:
/// a side tag plus an initially empty slot, filled through `F::parse`.
#[derive(Debug, Clone, PartialEq)]
pub struct SideSlot<F: ShorthandFamily> {
    side: Side,
    value: Option<F::Value>,
    family: PhantomData<F>,
}

impl<F: ShorthandFamily> SideSlot<F> {
    /// An empty slot for `side`.
    #[must_use]
    pub const fn new(side: Side) -> Self {
        Self {
            side,
            value: None,
            family: PhantomData,
        }
    }

    /// Four empty slots, one per side, for a trial expansion.
    #[must_use]
    pub const fn fresh_set() -> Sides<Self> {
        Sides::new(
            Self::new(Side::Top),
            Self::new(Side::Right),
            Self::new(Side::Bottom),
            Self::new(Side::Left),
        )
    }
}

impl<F: ShorthandFamily> SideValidator for SideSlot<F> {
    type Value = F::Value;

    fn side(&self) -> Side {
        self.side
    }

    fn try_accept(&mut self, component: &ComponentValue, _position: usize) -> bool {
        match F::parse(component) {
            Some(value) => {
                self.value = Some(value);
                true
            }
            None => false,
        }
    }

    fn value(&self) -> Option<&F::Value> {
        self.value.as_ref()
    }

    fn into_value(self) -> Option<F::Value> {
        self.value
    }
}
