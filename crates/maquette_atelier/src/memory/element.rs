//! Shared in-memory element.

use crate::target::TargetElement;
use crate::value::display_value;
use maquette_carton::{to_kebab_case, FxHashMap};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct ElementState {
    tag: String,
    /// Attributes in insertion order. Names are lowercase.
    attributes: Vec<(String, String)>,
    properties: FxHashMap<String, Value>,
    inner_html: String,
    /// Mirror property writes onto kebab-cased attributes.
    reflect: bool,
}

impl ElementState {
    fn set_attribute(&mut self, name: &str, value: String) {
        let name = name.to_ascii_lowercase();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    fn remove_attribute(&mut self, name: &str) -> bool {
        let name = name.to_ascii_lowercase();
        let before = self.attributes.len();
        self.attributes.retain(|(n, _)| *n != name);
        self.attributes.len() != before
    }
}

/// Handle to an in-memory element. Clones share the same element.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement(Rc<RefCell<ElementState>>);

impl MemoryElement {
    /// Create an element that keeps properties and attributes apart.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(ElementState {
            tag: tag.into().to_ascii_lowercase(),
            ..ElementState::default()
        })))
    }

    /// Create an element whose property setters reflect to attributes,
    /// like most design-system custom elements do.
    pub fn reflecting(tag: impl Into<String>) -> Self {
        let element = Self::new(tag);
        element.0.borrow_mut().reflect = true;
        element
    }

    /// Builder form of [`set_attribute`](Self::set_attribute).
    pub fn with_attribute(self, name: &str, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn set_attribute(&self, name: &str, value: impl Into<String>) {
        self.0.borrow_mut().set_attribute(name, value.into());
    }

    #[inline]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute(name).is_some()
    }

    /// All attributes in insertion order.
    pub fn attributes(&self) -> Vec<(String, String)> {
        self.0.borrow().attributes.clone()
    }

    /// All properties, sorted by name.
    pub fn properties(&self) -> Vec<(String, Value)> {
        let mut properties: Vec<_> = self
            .0
            .borrow()
            .properties
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        properties.sort_by(|a, b| a.0.cmp(&b.0));
        properties
    }

    pub fn inner_html(&self) -> String {
        self.0.borrow().inner_html.clone()
    }

    pub fn set_inner_html(&self, markup: impl Into<String>) {
        self.0.borrow_mut().inner_html = markup.into();
    }

    /// Whether both handles refer to the same element.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl TargetElement for MemoryElement {
    fn tag_name(&self) -> String {
        self.0.borrow().tag.clone()
    }

    fn get(&self, name: &str) -> Option<Value> {
        self.0.borrow().properties.get(name).cloned()
    }

    fn get_attribute(&self, name: &str) -> Option<String> {
        let name = name.to_ascii_lowercase();
        self.0
            .borrow()
            .attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.clone())
    }

    fn set_property(&mut self, name: &str, value: &Value) {
        let mut state = self.0.borrow_mut();
        state.properties.insert(name.to_string(), value.clone());

        if !state.reflect {
            return;
        }
        let attribute = to_kebab_case(name);
        match value {
            Value::Null | Value::Bool(false) => {
                state.remove_attribute(&attribute);
            }
            Value::Bool(true) => state.set_attribute(&attribute, String::new()),
            other => state.set_attribute(&attribute, display_value(other)),
        }
    }

    fn remove_attribute(&mut self, name: &str) {
        let mut state = self.0.borrow_mut();
        if state.remove_attribute(name) && state.reflect {
            // attributeChangedCallback resets the backing property
            let attribute = name.to_ascii_lowercase();
            state
                .properties
                .retain(|property, _| to_kebab_case(property) != attribute);
        }
    }
}
