//! Playground configuration.
//!
//! Mirrors the input props a host page sets on the playground element.
//! Can be read from a relaxed JSON file (see [`PlaygroundConfig::from_json5`]).

use crate::edit::NullEditPolicy;
use crate::types::{PropsInput, SlotsInput};
use serde::{Deserialize, Serialize};

/// Input props of a playground.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundConfig {
    /// Selector of the element to configure.
    pub tag: String,
    /// Property descriptors, structured or as relaxed JSON text.
    pub props: PropsInput,
    /// Slot descriptors, structured or as relaxed JSON text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<SlotsInput>,
    /// Stretch the demo content to the full width.
    #[serde(default)]
    pub block: bool,
    /// Example markup rendered into the demo area before the target is
    /// looked up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Forward debug diagnostics.
    #[serde(default)]
    pub debug: bool,
    /// Handling of edits that produce a null value.
    #[serde(default)]
    pub null_edit_policy: NullEditPolicy,
}

impl PlaygroundConfig {
    /// Minimal configuration: a selector and its props.
    pub fn new(tag: impl Into<String>, props: impl Into<PropsInput>) -> Self {
        Self {
            tag: tag.into(),
            props: props.into(),
            slots: None,
            block: false,
            code: None,
            debug: false,
            null_edit_policy: NullEditPolicy::default(),
        }
    }

    /// Set example markup.
    #[inline]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set slot descriptors.
    #[inline]
    pub fn with_slots(mut self, slots: impl Into<SlotsInput>) -> Self {
        self.slots = Some(slots.into());
        self
    }

    /// Set the null edit policy.
    #[inline]
    pub fn with_null_edit_policy(mut self, policy: NullEditPolicy) -> Self {
        self.null_edit_policy = policy;
        self
    }

    /// Read a configuration written as relaxed JSON.
    #[inline]
    pub fn from_json5(source: &str) -> maquette_relief::Json5Result<Self> {
        maquette_relief::from_str(source)
    }

    /// Example markup, if any was given and it is not blank.
    #[inline]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref().filter(|c| !c.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DescriptorInput;

    #[test]
    fn test_from_json5_defaults() {
        let config = PlaygroundConfig::from_json5(
            "{tag: 'my-button', props: \"[{name: 'label', value: 'Go', type: 'string'}]\"}",
        )
        .unwrap();

        assert_eq!(config.tag, "my-button");
        assert!(matches!(config.props, DescriptorInput::Text(_)));
        assert!(!config.block);
        assert!(!config.debug);
        assert_eq!(config.null_edit_policy, NullEditPolicy::KeepDescriptor);
        assert_eq!(config.code(), None);
    }

    #[test]
    fn test_from_json5_structured() {
        let config = PlaygroundConfig::from_json5(
            r#"{
  tag: 'my-card',
  props: [{name: 'heading', value: 'Hi', type: 'string'}],
  slots: [{name: 'footer'}],
  code: '<my-card></my-card>',
  nullEditPolicy: 'dropDescriptor',
  block: true,
}"#,
        )
        .unwrap();

        assert!(matches!(config.props, DescriptorInput::Structured(ref p) if p.len() == 1));
        assert!(matches!(config.slots, Some(DescriptorInput::Structured(_))));
        assert_eq!(config.null_edit_policy, NullEditPolicy::DropDescriptor);
        assert_eq!(config.code(), Some("<my-card></my-card>"));
        assert!(config.block);
    }

    #[test]
    fn test_blank_code_is_ignored() {
        let config = PlaygroundConfig::new("x-a", "[]").with_code("  \n");
        assert_eq!(config.code(), None);
    }
}
