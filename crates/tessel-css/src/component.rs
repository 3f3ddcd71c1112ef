//! Component values handed over by the value parser.
//!
//! [§ 5.4.7 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
//!
//! The shorthand machinery never looks inside a [`ComponentValue`]; it only
//! counts them and passes each one to a side validator. The typed parsers in
//! [`crate::values`] are the only code that inspects their content.

use serde::Serialize;

/// [§ 5.4.7](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
///
/// One already-tokenized unit of a declaration value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ComponentValue {
    /// "`<ident-token>`"
    Ident(String),
    /// "`<hash-token>`", without the leading `#`.
    Hash(String),
    /// "`<number-token>`"
    Number(f64),
    /// "`<percentage-token>`"
    Percentage(f64),
    /// "`<dimension-token>`"
    Dimension {
        /// "a numeric value"
        value: f64,
        /// "a unit"
        unit: String,
    },
    /// A function with its contents, e.g. `rgb(1, 2, 3)`.
    Function {
        /// The function name.
        name: String,
        /// The function arguments.
        args: Vec<ComponentValue>,
    },
    /// "`<comma-token>`"
    Comma,
    /// "`<delim-token>`"
    Delim(char),
    /// "`<whitespace-token>`"
    Whitespace,
}

impl ComponentValue {
    /// Make an ident component.
    #[must_use]
    pub fn ident(name: &str) -> Self {
        Self::Ident(name.to_string())
    }

    /// Make a hash component. A leading `#` is accepted and dropped.
    #[must_use]
    pub fn hash(value: &str) -> Self {
        Self::Hash(value.strip_prefix('#').unwrap_or(value).to_string())
    }

    /// Make a unitless number component.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Make a percentage component.
    #[must_use]
    pub const fn percentage(value: f64) -> Self {
        Self::Percentage(value)
    }

    /// Make a dimension component such as `12px`.
    #[must_use]
    pub fn dimension(value: f64, unit: &str) -> Self {
        Self::Dimension {
            value,
            unit: unit.to_string(),
        }
    }

    /// Make a function component such as `rgb(...)`.
    #[must_use]
    pub fn function(name: &str, args: Vec<Self>) -> Self {
        Self::Function {
            name: name.to_string(),
            args,
        }
    }

    /// Whether this is an ident matching `keyword` ASCII case-insensitively.
    #[must_use]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, Self::Ident(name) if name.eq_ignore_ascii_case(keyword))
    }
}

/// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
///
/// A property declaration as produced by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The property name.
    pub name: String,
    /// The declaration value as component values.
    pub value: Vec<ComponentValue>,
}

impl Declaration {
    /// Make a declaration.
    #[must_use]
    pub fn new(name: &str, value: Vec<ComponentValue>) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}

/// What the value parser hands over for a shorthand declaration.
///
/// The parser may return a bare component when the declaration held a single
/// value, or a list when it held several.
#[derive(Debug, Clone, PartialEq)]
pub enum ShorthandInput {
    /// [§ 7.3.1 inherit](https://www.w3.org/TR/css-cascade-4/#inherit)
    Inherit,
    /// A bare component, not wrapped in a list.
    Single(ComponentValue),
    /// An ordered list of components.
    List(Vec<ComponentValue>),
}

/// A normalized shorthand value: the `inherit` sentinel or an ordered list
/// of components.
///
/// The component count is not checked here. Counts outside 1..=4 are invalid
/// input and are rejected by [`crate::shorthand::expand`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ShorthandValue {
    /// "The inherit keyword" - take the value from the parent.
    Inherit,
    /// Ordered components in declaration order.
    Components(Vec<ComponentValue>),
}

impl ShorthandValue {
    /// Normalize a raw declaration value.
    ///
    /// Whitespace tokens are dropped. A lone `inherit` ident becomes
    /// [`ShorthandValue::Inherit`]; `inherit` mixed with other components is
    /// left in the list, where validation rejects it.
    #[must_use]
    pub fn from_declaration(values: &[ComponentValue]) -> Self {
        let components: Vec<ComponentValue> = values
            .iter()
            .filter(|v| !matches!(v, ComponentValue::Whitespace))
            .cloned()
            .collect();

        match components.as_slice() {
            [only] if only.is_keyword("inherit") => Self::Inherit,
            _ => Self::Components(components),
        }
    }
}

impl From<ShorthandInput> for ShorthandValue {
    fn from(input: ShorthandInput) -> Self {
        match input {
            ShorthandInput::Inherit => Self::Inherit,
            ShorthandInput::Single(component) => Self::Components(vec![component]),
            ShorthandInput::List(components) => Self::Components(components),
        }
    }
}

impl From<ComponentValue> for ShorthandValue {
    fn from(component: ComponentValue) -> Self {
        ShorthandInput::Single(component).into()
    }
}

impl From<Vec<ComponentValue>> for ShorthandValue {
    fn from(components: Vec<ComponentValue>) -> Self {
        ShorthandInput::List(components).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_is_one_element_list() {
        let single: ShorthandValue = ShorthandInput::Single(ComponentValue::ident("red")).into();
        let list: ShorthandValue =
            ShorthandInput::List(vec![ComponentValue::ident("red")]).into();
        assert_eq!(single, list);
        assert_eq!(single, ShorthandValue::Components(vec![ComponentValue::ident("red")]));
    }

    #[test]
    fn test_from_declaration_drops_whitespace() {
        let value = ShorthandValue::from_declaration(&[
            ComponentValue::Whitespace,
            ComponentValue::dimension(1.0, "px"),
            ComponentValue::Whitespace,
            ComponentValue::dimension(2.0, "px"),
        ]);
        assert_eq!(
            value,
            ShorthandValue::Components(vec![
                ComponentValue::dimension(1.0, "px"),
                ComponentValue::dimension(2.0, "px"),
            ])
        );
    }

    #[test]
    fn test_from_declaration_inherit() {
        let value = ShorthandValue::from_declaration(&[
            ComponentValue::Whitespace,
            ComponentValue::ident("INHERIT"),
        ]);
        assert_eq!(value, ShorthandValue::Inherit);
    }

    #[test]
    fn test_from_declaration_inherit_in_list_stays_component() {
        let value = ShorthandValue::from_declaration(&[
            ComponentValue::ident("inherit"),
            ComponentValue::Whitespace,
            ComponentValue::ident("red"),
        ]);
        assert_eq!(
            value,
            ShorthandValue::Components(vec![
                ComponentValue::ident("inherit"),
                ComponentValue::ident("red"),
            ])
        );
    }

    #[test]
    fn test_empty_declaration_is_empty_list() {
        let value = ShorthandValue::from_declaration(&[ComponentValue::Whitespace]);
        assert_eq!(value, ShorthandValue::Components(Vec::new()));
    }
}
