//! Edit handling.
//!
//! Computes a descriptor's new stored value from raw control input and
//! writes it back into the list.

use crate::types::{PropType, PropertyDescriptor};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw input read from a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlInput {
    /// Checkbox state.
    Checked(bool),
    /// Text of an input, textarea or single select.
    Text(String),
    /// Selected values of a multi-select.
    Selection(Vec<String>),
}

impl From<bool> for ControlInput {
    #[inline]
    fn from(checked: bool) -> Self {
        Self::Checked(checked)
    }
}

impl From<&str> for ControlInput {
    #[inline]
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ControlInput {
    #[inline]
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// What happens to a descriptor whose edited value comes out null.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NullEditPolicy {
    /// Keep the descriptor with a null value, so the next apply removes the
    /// attribute and it can be corrected later.
    #[default]
    KeepDescriptor,
    /// Drop the descriptor from the list.
    DropDescriptor,
}

/// Compute the value to store for `kind` from raw control input.
///
/// Booleans take the checked state, objects are read as relaxed JSON (null
/// when the text does not parse), everything else keeps the raw text.
pub fn compute_value(kind: PropType, input: ControlInput) -> Value {
    match (kind, input) {
        (PropType::Boolean, ControlInput::Checked(checked)) => Value::Bool(checked),
        (PropType::Boolean, ControlInput::Text(text)) => Value::Bool(!text.is_empty()),
        (PropType::Object, ControlInput::Text(text)) => {
            maquette_relief::parse(&text).unwrap_or(Value::Null)
        }
        (_, ControlInput::Text(text)) => Value::String(text),
        (_, ControlInput::Checked(checked)) => Value::Bool(checked),
        (_, ControlInput::Selection(values)) => {
            Value::Array(values.into_iter().map(Value::String).collect())
        }
    }
}

/// Outcome of [`update_prop_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// No descriptor has that name.
    NotFound,
    /// The descriptor now holds a concrete value.
    Updated,
    /// The descriptor now holds null.
    Nulled,
    /// The descriptor was removed from the list.
    Dropped,
}

/// Store the edit for the descriptor called `name`, leaving every other
/// descriptor and the list order untouched.
pub fn update_prop_value(
    props: &mut Vec<PropertyDescriptor>,
    name: &str,
    input: ControlInput,
    policy: NullEditPolicy,
) -> EditOutcome {
    let Some(index) = props.iter().position(|p| p.name == name) else {
        return EditOutcome::NotFound;
    };

    let value = compute_value(props[index].kind, input);
    if !value.is_null() {
        props[index].value = value;
        return EditOutcome::Updated;
    }

    match policy {
        NullEditPolicy::KeepDescriptor => {
            props[index].value = Value::Null;
            EditOutcome::Nulled
        }
        NullEditPolicy::DropDescriptor => {
            props.remove(index);
            EditOutcome::Dropped
        }
    }
}
