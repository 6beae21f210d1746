//! In-memory element host.

use super::{read_elements, MemoryElement};
use crate::target::{ElementHost, TargetElement};

/// Holds the demo content as a flat, document-ordered element list.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    elements: Vec<MemoryElement>,
    markup: String,
}

impl MemoryHost {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose content is read from `markup`.
    pub fn from_markup(markup: &str) -> Self {
        let mut host = Self::new();
        host.set_inner_html(markup);
        host
    }

    /// Builder form of [`push`](Self::push).
    pub fn with_element(mut self, element: MemoryElement) -> Self {
        self.push(element);
        self
    }

    #[inline]
    pub fn push(&mut self, element: MemoryElement) {
        self.elements.push(element);
    }

    #[inline]
    pub fn elements(&self) -> &[MemoryElement] {
        &self.elements
    }

    /// Markup last written with `set_inner_html`.
    #[inline]
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

impl ElementHost for MemoryHost {
    type Element = MemoryElement;

    fn query_selector(&self, selector: &str) -> Option<MemoryElement> {
        let selector = Selector::parse(selector)?;
        self.elements.iter().find(|e| selector.matches(e)).cloned()
    }

    fn set_inner_html(&mut self, markup: &str) {
        self.markup = markup.to_string();
        self.elements = read_elements(markup);
    }
}

/// Compound selector: `tag`, `#id`, `.class` or a combination such as
/// `my-button.primary#main`.
#[derive(Debug, Default, PartialEq)]
struct Selector<'s> {
    tag: Option<&'s str>,
    id: Option<&'s str>,
    classes: Vec<&'s str>,
}

impl<'s> Selector<'s> {
    fn parse(selector: &'s str) -> Option<Self> {
        let selector = selector.trim();
        if selector.is_empty() || selector.contains(char::is_whitespace) {
            return None;
        }

        let mut parsed = Selector::default();
        let mut rest = selector;
        let tag_end = rest.find(['#', '.']).unwrap_or(rest.len());
        if tag_end > 0 {
            parsed.tag = Some(&rest[..tag_end]);
        }
        rest = &rest[tag_end..];

        while let Some(marker) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(['#', '.']).unwrap_or(body.len());
            let name = &body[..end];
            if name.is_empty() {
                return None;
            }
            match marker {
                '#' => parsed.id = Some(name),
                _ => parsed.classes.push(name),
            }
            rest = &body[end..];
        }

        Some(parsed)
    }

    fn matches(&self, element: &MemoryElement) -> bool {
        if let Some(tag) = self.tag {
            if !element.tag_name().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = self.id {
            if element.get_attribute("id").as_deref() != Some(id) {
                return false;
            }
        }
        if self.classes.is_empty() {
            return true;
        }
        let class_attr = element.get_attribute("class").unwrap_or_default();
        let classes: Vec<&str> = class_attr.split_whitespace().collect();
        self.classes.iter().all(|c| classes.contains(c))
    }
}
