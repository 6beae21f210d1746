//! Sync Engine.
//!
//! Two independent operations over the current descriptor list:
//! [`apply_props`] pushes values onto the live target element, and
//! [`get_usage`] derives the markup snippet shown to the reader.

use crate::target::TargetElement;
use crate::types::{PropType, PropertyDescriptor};
use crate::value::{display_value, is_null_value, is_truthy};

/// Indentation of relaxed JSON embedded in the usage snippet.
pub const USAGE_JSON_INDENT: usize = 4;

/// Separator before each attribute of a multi-line usage snippet.
const GLUE: &str = "\n  ";

/// Apply every descriptor to `target`, in list order.
///
/// Null values (including the text `"null"`) remove the attribute; anything
/// else is assigned as a property and left to the element's setter.
/// Re-applying an unchanged list leaves the element as it was.
pub fn apply_props<E: TargetElement>(target: &mut E, props: &[PropertyDescriptor]) {
    for prop in props {
        if is_null_value(&prop.value) {
            target.remove_attribute(&prop.attribute_name());
            continue;
        }
        target.set_property(&prop.name, &prop.value);
    }
}

/// The `attribute="value"` text for one descriptor, or `None` when the
/// descriptor is not active.
pub fn usage_attribute(prop: &PropertyDescriptor) -> Option<String> {
    if is_null_value(&prop.value) {
        return None;
    }
    if prop.kind == PropType::Boolean && !is_truthy(&prop.value) {
        return None;
    }

    let value = if prop.kind.is_structured() {
        maquette_relief::serialize_pretty(&prop.value, USAGE_JSON_INDENT).ok()?
    } else {
        display_value(&prop.value)
    };

    Some(format!("{}=\"{}\"", prop.attribute_name(), value))
}

/// Build the usage snippet for `tag` with the active descriptors.
///
/// ```
/// use maquette_atelier::{get_usage, PropertyDescriptor};
///
/// let props = vec![
///     PropertyDescriptor::string("label", "Go"),
///     PropertyDescriptor::boolean("disabled", false),
/// ];
/// assert_eq!(get_usage("my-button", &props), "<my-button\n  label=\"Go\"\n></my-button>");
/// ```
pub fn get_usage(tag: &str, props: &[PropertyDescriptor]) -> String {
    let attributes: Vec<String> = props.iter().filter_map(usage_attribute).collect();

    let mut usage = String::with_capacity(tag.len() * 2 + 5 + attributes.len() * 16);
    usage.push('<');
    usage.push_str(tag);
    for attribute in &attributes {
        usage.push_str(GLUE);
        usage.push_str(attribute);
    }
    if !attributes.is_empty() {
        usage.push('\n');
    }
    usage.push_str("></");
    usage.push_str(tag);
    usage.push('>');
    usage
}
