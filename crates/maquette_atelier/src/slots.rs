//! Slot helpers for example markup.

use crate::types::SlotDescriptor;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

static SLOT_ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\sslot\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#)
        .expect("valid slot attribute regex")
});

/// Inner markup of the first `tag` element in `code`, trimmed.
///
/// ```
/// use maquette_atelier::extract_tag_content;
///
/// let code = r#"<my-card heading="Hi"><span slot="footer">Foot</span></my-card>"#;
/// assert_eq!(
///     extract_tag_content(code, "my-card").as_deref(),
///     Some(r#"<span slot="footer">Foot</span>"#)
/// );
/// ```
pub fn extract_tag_content(code: &str, tag: &str) -> Option<String> {
    let tag = regex::escape(tag);
    let pattern = format!(r"<{tag}(?:\s[^>]*)?>((?s).*?)</{tag}>");
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .ok()?;

    re.captures(code)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Names of the slots that `markup` fills, in order of first use.
pub fn filled_slots(markup: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in SLOT_ATTR_RE.captures_iter(markup) {
        let Some(name) = caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)) else {
            continue;
        };
        if !names.iter().any(|n| n == name.as_str()) {
            names.push(name.as_str().to_string());
        }
    }
    names
}

/// Set `checked` from the example markup for slots that have no explicit
/// state yet.
pub fn seed_slot_state(slots: &mut [SlotDescriptor], inner_markup: &str) {
    let filled = filled_slots(inner_markup);
    for slot in slots.iter_mut().filter(|s| s.checked.is_none()) {
        slot.checked = Some(filled.iter().any(|n| *n == slot.name));
    }
}

/// Flip the slot called `name`. Returns its new state, or `None` when no
/// slot has that name.
pub fn toggle_slot(slots: &mut [SlotDescriptor], name: &str) -> Option<bool> {
    let slot = slots.iter_mut().find(|s| s.name == name)?;
    slot.toggle();
    Some(slot.is_checked())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(name: &str, checked: Option<bool>) -> SlotDescriptor {
        SlotDescriptor {
            name: name.to_string(),
            docs: None,
            checked,
        }
    }

    #[test]
    fn test_extract_multiline_content() {
        let code = "<p>intro</p>\n<MY-CARD\n  heading=\"Hi\">\n  <b>body</b>\n</my-card>\n<my-card>second</my-card>";
        assert_eq!(extract_tag_content(code, "my-card").as_deref(), Some("<b>body</b>"));
    }

    #[test]
    fn test_extract_missing_tag() {
        assert_eq!(extract_tag_content("<my-card-list></my-card-list>", "my-card"), None);
        assert_eq!(extract_tag_content("", "my-card"), None);
    }

    #[test]
    fn test_filled_slots() {
        let markup = r#"<span slot="icon">*</span><b slot='footer'>a</b><i slot=icon>b</i>"#;
        assert_eq!(filled_slots(markup), vec!["icon", "footer"]);
    }

    #[test]
    fn test_seed_and_toggle() {
        let mut slots = vec![slot("icon", None), slot("footer", None), slot("extra", Some(true))];
        seed_slot_state(&mut slots, r#"<span slot="icon">*</span>"#);

        assert_eq!(slots[0].checked, Some(true));
        assert_eq!(slots[1].checked, Some(false));
        assert_eq!(slots[2].checked, Some(true));

        assert_eq!(toggle_slot(&mut slots, "footer"), Some(true));
        assert_eq!(toggle_slot(&mut slots, "missing"), None);
    }
}
