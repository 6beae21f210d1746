//! Capabilities the playground needs from the UI toolkit.
//!
//! The playground never owns the element it configures. It talks to it
//! through [`TargetElement`] and finds it through an [`ElementHost`], so any
//! toolkit can be plugged in with a small adapter (see [`crate::memory`]).

use serde_json::Value;

/// The element instance being configured.
///
/// Implementations are cheap handles: cloning one must refer to the same
/// underlying element.
pub trait TargetElement: Clone {
    /// Tag name of the element.
    fn tag_name(&self) -> String;

    /// Read a property.
    fn get(&self, name: &str) -> Option<Value>;

    /// Read an attribute.
    fn get_attribute(&self, name: &str) -> Option<String>;

    /// Assign a property. The element's own setter decides how to
    /// interpret the value.
    fn set_property(&mut self, name: &str, value: &Value);

    /// Remove an attribute. Removing a missing attribute is a no-op.
    fn remove_attribute(&mut self, name: &str);
}

/// The playground's own rendered subtree, where the target is looked up.
pub trait ElementHost {
    type Element: TargetElement;

    /// First element matching `selector`.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// Replace the demo content with `markup`.
    fn set_inner_html(&mut self, markup: &str);
}
