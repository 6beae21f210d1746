//! Prop Model Loader.
//!
//! Turns the `props`/`slots` input given by the host page into descriptor
//! lists. Structured input is taken as-is. Text is read as relaxed JSON and
//! any failure is returned to the caller: there is no fallback list.

use crate::types::{DescriptorInput, PropertyDescriptor, PropsInput, SlotDescriptor, SlotsInput};
use maquette_carton::FxHashSet;
use maquette_relief::Json5Error;
use serde::de::DeserializeOwned;

/// Result type for descriptor loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Error type for descriptor loading.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadError {
    #[error("Invalid `{field}` text: {source}")]
    Syntax {
        field: &'static str,
        #[source]
        source: Json5Error,
    },

    #[error("`{field}` text does not describe a descriptor list: {message}")]
    Shape { field: &'static str, message: String },
}

/// Load the property descriptor list.
///
/// ```
/// use maquette_atelier::{load_props, PropType};
///
/// let props = load_props("[{name: 'label', value: 'Go', type: 'string', default: ''}]".into()).unwrap();
/// assert_eq!(props[0].kind, PropType::String);
/// ```
#[inline]
pub fn load_props(input: PropsInput) -> LoadResult<Vec<PropertyDescriptor>> {
    load_descriptors(input, "props")
}

/// Load the slot descriptor list. Missing input yields an empty list.
#[inline]
pub fn load_slots(input: Option<SlotsInput>) -> LoadResult<Vec<SlotDescriptor>> {
    match input {
        Some(input) => load_descriptors(input, "slots"),
        None => Ok(Vec::new()),
    }
}

fn load_descriptors<T: DeserializeOwned>(
    input: DescriptorInput<T>,
    field: &'static str,
) -> LoadResult<Vec<T>> {
    match input {
        DescriptorInput::Structured(items) => Ok(items),
        DescriptorInput::Text(text) => {
            maquette_relief::from_str(&text).map_err(|error| match error {
                Json5Error::Deserialize(message) => LoadError::Shape { field, message },
                source => LoadError::Syntax { field, source },
            })
        }
    }
}

/// A descriptor list problem. Reported, never enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorIssue {
    DuplicateName(String),
    MissingOptions(String),
    UnexpectedOptions(String),
    UnknownType(String),
}

impl std::fmt::Display for DescriptorIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateName(name) => write!(f, "Duplicate prop name '{}'", name),
            Self::MissingOptions(name) => write!(f, "Prop '{}' is a select without options", name),
            Self::UnexpectedOptions(name) => {
                write!(f, "Prop '{}' has options but is not a select", name)
            }
            Self::UnknownType(name) => write!(f, "Prop '{}' has an unknown type", name),
        }
    }
}

/// Check the descriptor list invariants: unique names, and options present
/// exactly for select/multiselect.
pub fn validate_descriptors(props: &[PropertyDescriptor]) -> Vec<DescriptorIssue> {
    let mut issues = Vec::new();
    let mut seen = FxHashSet::default();

    for prop in props {
        if !seen.insert(prop.name.as_str()) {
            issues.push(DescriptorIssue::DuplicateName(prop.name.clone()));
        }
        if prop.kind == crate::types::PropType::Unknown {
            issues.push(DescriptorIssue::UnknownType(prop.name.clone()));
        }
        match (prop.kind.has_options(), prop.options.is_some()) {
            (true, false) => issues.push(DescriptorIssue::MissingOptions(prop.name.clone())),
            (false, true) => issues.push(DescriptorIssue::UnexpectedOptions(prop.name.clone())),
            _ => {}
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PropType, SelectOption};
    use serde_json::json;

    #[test]
    fn test_structured_input_is_used_as_is() {
        let props = vec![PropertyDescriptor::string("label", "Go")];
        assert_eq!(load_props(props.clone().into()).unwrap(), props);
    }

    #[test]
    fn test_text_input() {
        let text = r#"[
  {name: 'label', value: 'Go', type: 'string', default: ''},
  {name: 'size', value: 'md', type: 'select', default: 'md', options: ['sm', 'md', 'lg']},
  {name: 'items', value: [{id: 1}], type: 'array', default: [],},
]"#;
        let props = load_props(text.into()).unwrap();

        assert_eq!(props.len(), 3);
        assert_eq!(props[1].kind, PropType::Select);
        assert_eq!(
            props[1].options.as_deref(),
            Some(&[SelectOption::plain("sm"), SelectOption::plain("md"), SelectOption::plain("lg")][..])
        );
        assert_eq!(props[2].value, json!([{"id": 1}]));
    }

    #[test]
    fn test_syntax_error_propagates() {
        let err = load_props("[{name: 'label',".into()).unwrap_err();
        assert!(matches!(err, LoadError::Syntax { field: "props", .. }));
        assert!(err.to_string().starts_with("Invalid `props` text"));
    }

    #[test]
    fn test_shape_error_propagates() {
        let err = load_slots(Some("{name: 'icon'}".into())).unwrap_err();
        assert!(matches!(err, LoadError::Shape { field: "slots", .. }));
        assert!(err
            .to_string()
            .starts_with("`slots` text does not describe a descriptor list"));
    }

    #[test]
    fn test_deep_nesting_is_a_syntax_error() {
        let err = load_props("[".repeat(100_000).into()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Syntax {
                field: "props",
                source: Json5Error::RecursionLimit { .. }
            }
        ));
    }

    #[test]
    fn test_slots() {
        assert!(load_slots(None).unwrap().is_empty());
        let slots = load_slots(Some("[{name: 'icon', docs: 'Leading icon', checked: true}]".into()))
            .unwrap();
        assert_eq!(slots[0].name, "icon");
        assert!(slots[0].is_checked());
    }

    #[test]
    fn test_validate_descriptors() {
        let mut select = PropertyDescriptor::string("size", "md");
        select.kind = PropType::Select;
        let mut labeled = PropertyDescriptor::string("label", "Go");
        labeled.options = Some(vec![SelectOption::plain("Go")]);
        let mut odd = PropertyDescriptor::string("odd", "");
        odd.kind = PropType::Unknown;

        let issues = validate_descriptors(&[
            PropertyDescriptor::string("label", "x"),
            labeled,
            select,
            odd,
        ]);

        assert_eq!(
            issues,
            vec![
                DescriptorIssue::DuplicateName("label".to_string()),
                DescriptorIssue::UnexpectedOptions("label".to_string()),
                DescriptorIssue::MissingOptions("size".to_string()),
                DescriptorIssue::UnknownType("odd".to_string()),
            ]
        );
    }
}
