//! Props panel.
//!
//! View-model for the configuration panel: one control per descriptor,
//! chosen from the descriptor's declared type. Edits come back as a
//! [`PanelEvent::PropChange`] carrying the whole revised list.

use crate::edit::{update_prop_value, ControlInput, EditOutcome, NullEditPolicy};
use crate::types::{PropType, PropertyDescriptor, SelectOption};
use crate::value::{display_value, is_truthy};
use serde::{Deserialize, Serialize};

/// Indentation of relaxed JSON shown in object/array editors.
pub const EDITOR_JSON_INDENT: usize = 2;

/// Control rendered for a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ControlKind {
    /// Text input.
    Text,
    /// Number input.
    Number,
    /// Checkbox.
    Checkbox,
    /// Relaxed JSON editor.
    Textarea,
    /// Single select.
    Select,
    /// Multiple select.
    MultiSelect,
}

impl ControlKind {
    /// Control for a declared type.
    #[inline]
    pub fn for_type(kind: PropType) -> Self {
        match kind {
            PropType::Number => Self::Number,
            PropType::Boolean => Self::Checkbox,
            PropType::Object | PropType::Array => Self::Textarea,
            PropType::Select => Self::Select,
            PropType::Multiselect => Self::MultiSelect,
            PropType::String | PropType::Unknown => Self::Text,
        }
    }

    /// `type` attribute of the `<input>` element, where one is used.
    #[inline]
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            Self::Text => Some("text"),
            Self::Number => Some("number"),
            Self::Checkbox => Some("checkbox"),
            Self::Textarea | Self::Select | Self::MultiSelect => None,
        }
    }
}

/// One option of a select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlOption {
    /// Option value. `null` is rendered as the text `null`.
    pub value: Option<String>,
    pub label: String,
    pub selected: bool,
}

/// Control definition for a single descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropControl {
    /// Descriptor name. Also the control key and element id.
    pub name: String,
    pub kind: ControlKind,
    /// Text shown in the input or editor.
    pub text: String,
    /// Checkbox state.
    pub checked: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub options: Vec<ControlOption>,
}

/// Build the control for one descriptor.
pub fn control_for(prop: &PropertyDescriptor) -> PropControl {
    let kind = ControlKind::for_type(prop.kind);

    let text = match kind {
        ControlKind::Checkbox => String::new(),
        _ if prop.value.is_null() => String::new(),
        ControlKind::Textarea => {
            maquette_relief::serialize_pretty(&prop.value, EDITOR_JSON_INDENT).unwrap_or_default()
        }
        _ => display_value(&prop.value),
    };

    let selected: Vec<String> = match &prop.value {
        serde_json::Value::Array(items) => items.iter().map(display_value).collect(),
        other => vec![display_value(other)],
    };

    let options = prop
        .options
        .iter()
        .flatten()
        .map(|option: &SelectOption| {
            let value = option.value().map(str::to_string);
            let shown = value.as_deref().unwrap_or("null");
            ControlOption {
                selected: selected.iter().any(|s| s == shown),
                label: option.label().to_string(),
                value,
            }
        })
        .collect();

    PropControl {
        name: prop.name.clone(),
        kind,
        text,
        checked: kind == ControlKind::Checkbox && is_truthy(&prop.value),
        options,
    }
}

/// Events emitted by the props panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    /// The full descriptor list after an edit.
    PropChange(Vec<PropertyDescriptor>),
}

/// The props panel sub-widget.
#[derive(Debug, Clone, Default)]
pub struct PropsPanel {
    pub policy: NullEditPolicy,
}

impl PropsPanel {
    #[inline]
    pub fn new(policy: NullEditPolicy) -> Self {
        Self { policy }
    }

    /// Controls for every descriptor, in list order.
    pub fn controls(&self, values: &[PropertyDescriptor]) -> Vec<PropControl> {
        values.iter().map(control_for).collect()
    }

    /// Apply one control edit to a copy of `values`.
    ///
    /// Returns `None` when no descriptor is called `name`.
    pub fn edit(
        &self,
        values: &[PropertyDescriptor],
        name: &str,
        input: ControlInput,
    ) -> Option<PanelEvent> {
        let mut revised = values.to_vec();
        match update_prop_value(&mut revised, name, input, self.policy) {
            EditOutcome::NotFound => None,
            _ => Some(PanelEvent::PropChange(revised)),
        }
    }
}
