//! Descriptor type definitions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared type of a property. Drives both the rendered control and the
/// usage serialization rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropType {
    #[default]
    String,
    Number,
    Boolean,
    Object,
    Array,
    Select,
    Multiselect,
    /// Any tag the playground does not know. Kept rather than rejected.
    #[serde(other)]
    Unknown,
}

impl PropType {
    /// Whether the value is written as relaxed JSON in the usage snippet.
    #[inline]
    pub fn is_structured(self) -> bool {
        matches!(self, Self::Object | Self::Array)
    }

    /// Whether descriptors of this type carry `options`.
    #[inline]
    pub fn has_options(self) -> bool {
        matches!(self, Self::Select | Self::Multiselect)
    }
}

/// One entry of a select/multiselect option list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectOption {
    /// `{ value, label }` pair. A null value means "no selection".
    Labeled {
        value: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    /// Bare option, shown and stored as-is. `null` is allowed.
    Plain(Option<String>),
}

impl SelectOption {
    /// Create a bare option.
    #[inline]
    pub fn plain(value: impl Into<String>) -> Self {
        Self::Plain(Some(value.into()))
    }

    /// Create a labeled option.
    #[inline]
    pub fn labeled(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Labeled {
            value: Some(value.into()),
            label: Some(label.into()),
        }
    }

    /// Stored value of this option.
    #[inline]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Plain(value) | Self::Labeled { value, .. } => value.as_deref(),
        }
    }

    /// Text shown for this option. Falls back to the value, then to `null`.
    #[inline]
    pub fn label(&self) -> &str {
        match self {
            Self::Labeled {
                label: Some(label), ..
            } if !label.is_empty() => label,
            _ => self.value().unwrap_or("null"),
        }
    }
}

/// One row in the configuration panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Property name on the target element.
    #[serde(default)]
    pub name: String,
    /// Current value. `null` removes the attribute from the target.
    #[serde(default)]
    pub value: Value,
    /// Declared type.
    #[serde(rename = "type", default)]
    pub kind: PropType,
    /// Value treated as "unset".
    #[serde(default)]
    pub default: Value,
    /// Allowed values for select/multiselect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
    /// Attribute name override. Defaults to the kebab-cased `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attr: Option<String>,
}

impl PropertyDescriptor {
    /// Create a descriptor with `value` as both current and default value.
    #[inline]
    pub fn new(name: impl Into<String>, kind: PropType, value: Value) -> Self {
        Self {
            name: name.into(),
            default: value.clone(),
            value,
            kind,
            options: None,
            attr: None,
        }
    }

    /// Create a string descriptor.
    #[inline]
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, PropType::String, Value::String(value.into())).with_default("")
    }

    /// Create a boolean descriptor.
    #[inline]
    pub fn boolean(name: impl Into<String>, value: bool) -> Self {
        Self::new(name, PropType::Boolean, Value::Bool(value)).with_default(false)
    }

    /// Create a select descriptor.
    #[inline]
    pub fn select(
        name: impl Into<String>,
        value: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        let mut descriptor = Self::new(name, PropType::Select, Value::String(value.into()));
        descriptor.options = Some(options);
        descriptor
    }

    /// Set the default value.
    #[inline]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = default.into();
        self
    }

    /// Set an attribute name override.
    #[inline]
    pub fn with_attr(mut self, attr: impl Into<String>) -> Self {
        self.attr = Some(attr.into());
        self
    }

    /// Attribute name used on the element and in the usage snippet.
    #[inline]
    pub fn attribute_name(&self) -> String {
        match self.attr.as_deref() {
            Some(attr) if !attr.is_empty() => attr.to_string(),
            _ => maquette_carton::to_kebab_case(&self.name),
        }
    }
}

/// A named slot of the target element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDescriptor {
    #[serde(default)]
    pub name: String,
    /// Help text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    /// Whether the example slot content is attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl SlotDescriptor {
    #[inline]
    pub fn is_checked(&self) -> bool {
        self.checked.unwrap_or(false)
    }

    /// Flip `checked`.
    #[inline]
    pub fn toggle(&mut self) {
        self.checked = Some(!self.is_checked());
    }
}

/// Descriptor input as given by the host page: either already structured
/// or relaxed JSON text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DescriptorInput<T> {
    Text(String),
    Structured(Vec<T>),
}

impl<T> From<Vec<T>> for DescriptorInput<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self::Structured(items)
    }
}

impl<T> From<&str> for DescriptorInput<T> {
    #[inline]
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl<T> From<String> for DescriptorInput<T> {
    #[inline]
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// `props` input.
pub type PropsInput = DescriptorInput<PropertyDescriptor>;

/// `slots` input.
pub type SlotsInput = DescriptorInput<SlotDescriptor>;
