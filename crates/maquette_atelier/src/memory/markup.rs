//! Minimal markup reader for demo content.
//!
//! Only what a playground's example markup needs: element tags with their
//! attributes and inner markup. Text, comments and scripts are ignored.

use super::MemoryElement;
use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<(/?)([A-Za-z][A-Za-z0-9-]*)((?:[^>"']|"[^"]*"|'[^']*')*)>"#)
        .expect("valid tag regex")
});

static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("valid attribute regex")
});

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Read every element in `markup`, in document order.
///
/// ```
/// use maquette_atelier::memory::read_elements;
/// use maquette_atelier::TargetElement;
///
/// let elements = read_elements(r#"<my-button label="Go"><b>Hi</b></my-button>"#);
/// assert_eq!(elements.len(), 2);
/// assert_eq!(elements[0].get_attribute("label").as_deref(), Some("Go"));
/// assert_eq!(elements[0].inner_html(), "<b>Hi</b>");
/// ```
pub fn read_elements(markup: &str) -> Vec<MemoryElement> {
    let mut elements = Vec::new();
    // (tag, element, content start)
    let mut open: Vec<(String, MemoryElement, usize)> = Vec::new();

    for caps in TAG_RE.captures_iter(markup) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        let tag = name.as_str().to_ascii_lowercase();
        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());

        if closing {
            let Some(index) = open.iter().rposition(|(t, _, _)| *t == tag) else {
                continue;
            };
            // Unclosed children end where their parent does
            for (_, element, start) in open.drain(index..) {
                element.set_inner_html(markup[start..whole.start()].trim());
            }
            continue;
        }

        let attrs = caps.get(3).map_or("", |m| m.as_str());
        let element = MemoryElement::new(&tag);
        for attr in ATTR_RE.captures_iter(attrs) {
            let Some(attr_name) = attr.get(1) else {
                continue;
            };
            let value = attr
                .get(2)
                .or_else(|| attr.get(3))
                .or_else(|| attr.get(4))
                .map_or(String::new(), |m| unescape_attribute(m.as_str()));
            element.set_attribute(attr_name.as_str(), value);
        }
        elements.push(element.clone());

        let self_closing = attrs.trim_end().ends_with('/');
        if !self_closing && !VOID_ELEMENTS.contains(&tag.as_str()) {
            open.push((tag, element, whole.end()));
        }
    }

    for (_, element, start) in open {
        element.set_inner_html(markup[start..].trim());
    }

    elements
}

/// Decode the character references that show up in attribute values.
pub fn unescape_attribute(value: &str) -> String {
    if !value.contains('&') {
        return value.to_string();
    }
    value
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::TargetElement;

    #[test]
    fn test_attributes() {
        let elements = read_elements(
            r#"<my-input max-length=10 placeholder='Type "here"' disabled value="a &amp; b">"#,
        );
        let input = &elements[0];
        assert_eq!(input.get_attribute("max-length").as_deref(), Some("10"));
        assert_eq!(
            input.get_attribute("placeholder").as_deref(),
            Some("Type \"here\"")
        );
        assert_eq!(input.get_attribute("disabled").as_deref(), Some(""));
        assert_eq!(input.get_attribute("value").as_deref(), Some("a & b"));
    }

    #[test]
    fn test_nesting_and_void_elements() {
        let markup = r#"
<x-card heading="Hi">
  <img src="a.png">
  <x-card>inner</x-card>
  <span slot="footer">Foot</span>
</x-card>
"#;
        let elements = read_elements(markup);
        let tags: Vec<_> = elements.iter().map(|e| e.tag_name()).collect();
        assert_eq!(tags, vec!["x-card", "img", "x-card", "span"]);

        assert_eq!(elements[2].inner_html(), "inner");
        assert!(elements[0].inner_html().starts_with("<img src=\"a.png\">"));
        assert!(elements[0].inner_html().ends_with("<span slot=\"footer\">Foot</span>"));
        assert_eq!(elements[1].inner_html(), "");
    }

    #[test]
    fn test_unclosed_element() {
        let elements = read_elements("<my-tag>content");
        assert_eq!(elements[0].inner_html(), "content");
    }

    #[test]
    fn test_attribute_with_angle_bracket() {
        let elements = read_elements(r#"<x-code sample="a > b"></x-code>"#);
        assert_eq!(elements[0].get_attribute("sample").as_deref(), Some("a > b"));
    }
}
