//! Physical box sides and four-side containers.
//!
//! [§ 6 Box Edges](https://www.w3.org/TR/css-box-4/#box-edges)

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Physical side of a box
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Side {
    /// Top edge of the box
    Top,
    /// Right edge of the box
    Right,
    /// Bottom edge of the box
    Bottom,
    /// Left edge of the box
    Left,
}

impl Side {
    /// All four sides in shorthand order: top, right, bottom, left.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];
}

/// One value per box side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Sides<T> {
    /// Value for the top side.
    pub top: T,
    /// Value for the right side.
    pub right: T,
    /// Value for the bottom side.
    pub bottom: T,
    /// Value for the left side.
    pub left: T,
}

impl<T> Sides<T> {
    /// Build from the four values in top, right, bottom, left order.
    #[must_use]
    pub const fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The value for `side`.
    #[must_use]
    pub const fn get(&self, side: Side) -> &T {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }

    /// Iterate `(side, value)` in top, right, bottom, left order.
    pub fn entries(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().map(move |side| (side, self.get(side)))
    }

    /// The four values in top, right, bottom, left order.
    #[must_use]
    pub fn into_array(self) -> [T; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

impl<T: Clone> Sides<T> {
    /// The same value on every side.
    #[must_use]
    pub fn splat(value: T) -> Self {
        Self::new(value.clone(), value.clone(), value.clone(), value)
    }
}
