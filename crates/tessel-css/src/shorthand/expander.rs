//! The 1-to-4 value expansion shared by every box-side shorthand.
//!
//! [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
//!
//! "If there is only one component value, it applies to all sides.
//! If there are two values, the top and bottom margins are set to the
//! first value and the right and left margins are set to the second.
//! If there are three values, the top is set to the first value, the
//! left and right are set to the second, and the bottom is set to the
//! third. If there are four values, they apply to the top, right,
//! bottom, and left, respectively."

use serde::Serialize;

use super::{SideValidator, Sides};
use crate::component::{ComponentValue, ShorthandValue};
use crate::error::ExpandError;

/// A successful expansion: `inherit`, or a value for every side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expansion<T> {
    /// The value was `inherit`; no side was validated.
    Inherited,
    /// All four sides, each populated.
    Sides(Sides<T>),
}

/// Run `validator` over the component at `position`, failing the expansion
/// if it is rejected.
fn accept<V: SideValidator>(
    mut validator: V,
    components: &[ComponentValue],
    position: usize,
) -> Result<V::Value, ExpandError> {
    let rejected = ExpandError::InvalidComponentAtPosition {
        position,
        side: validator.side(),
    };
    let component = components.get(position).ok_or(rejected)?;
    if !validator.try_accept(component, position) {
        return Err(rejected);
    }
    validator.into_value().ok_or(rejected)
}

/// Expand `value` to four sides using fresh `top`, `right`, `bottom` and
/// `left` validators.
///
/// Validation runs in top, right, bottom, left order and stops at the first
/// rejection. Sides missing from a short list are copies of the already
/// validated partner side; their own validators are never consulted.
///
/// # Errors
///
/// [`ExpandError::InvalidComponentCount`] for zero or more than four
/// components, [`ExpandError::InvalidComponentAtPosition`] for the first
/// rejected component.
pub fn expand<V: SideValidator>(
    value: &ShorthandValue,
    top: V,
    right: V,
    bottom: V,
    left: V,
) -> Result<Expansion<V::Value>, ExpandError> {
    let components = match value {
        ShorthandValue::Inherit => return Ok(Expansion::Inherited),
        ShorthandValue::Components(components) => components.as_slice(),
    };

    let sides = match components.len() {
        // RULE 1-VALUE: "it applies to all sides."
        1 => Sides::splat(accept(top, components, 0)?),
        // RULE 2-VALUE: top and bottom from the first, right and left from the second.
        2 => {
            let vertical = accept(top, components, 0)?;
            let horizontal = accept(right, components, 1)?;
            Sides::new(vertical.clone(), horizontal.clone(), vertical, horizontal)
        }
        // RULE 3-VALUE: left copies right.
        3 => {
            let first = accept(top, components, 0)?;
            let horizontal = accept(right, components, 1)?;
            let third = accept(bottom, components, 2)?;
            Sides::new(first, horizontal.clone(), third, horizontal)
        }
        // RULE 4-VALUE: "they apply to the top, right, bottom, and left, respectively."
        4 => Sides::new(
            accept(top, components, 0)?,
            accept(right, components, 1)?,
            accept(bottom, components, 2)?,
            accept(left, components, 3)?,
        ),
        count => return Err(ExpandError::InvalidComponentCount(count)),
    };

    Ok(Expansion::Sides(sides))
}
