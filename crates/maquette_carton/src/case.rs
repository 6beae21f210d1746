//! Identifier case conversion.
//!
//! Custom element attributes are dash-separated while their properties are
//! camel-cased, so the playground converts names the way lodash's
//! `kebabCase` does: split into words, lowercase, join with `-`.

/// Character class used for word boundary detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
    Other,
}

#[inline]
fn classify(c: char) -> CharClass {
    if c.is_lowercase() {
        CharClass::Lower
    } else if c.is_uppercase() {
        CharClass::Upper
    } else if c.is_numeric() {
        CharClass::Digit
    } else if c.is_alphabetic() {
        // Caseless letters (CJK etc.) behave like lowercase
        CharClass::Lower
    } else {
        CharClass::Other
    }
}

/// Split an identifier into its words.
///
/// Boundaries are non-alphanumeric characters, lower-to-upper transitions,
/// the end of an acronym (`HTMLElement` -> `HTML`, `Element`) and
/// letter/digit transitions.
///
/// ```
/// use maquette_carton::split_words;
///
/// assert_eq!(split_words("innerHTMLValue"), vec!["inner", "HTML", "Value"]);
/// assert_eq!(split_words("--foo_bar--"), vec!["foo", "bar"]);
/// ```
pub fn split_words(s: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &(offset, c)) in chars.iter().enumerate() {
        let class = classify(c);

        if class == CharClass::Other {
            if let Some(begin) = start.take() {
                words.push(&s[begin..offset]);
            }
            continue;
        }

        let Some(begin) = start else {
            start = Some(offset);
            continue;
        };

        let prev = classify(chars[i - 1].1);
        let next = chars.get(i + 1).map(|&(_, n)| classify(n));

        let boundary = match (prev, class) {
            (CharClass::Lower, CharClass::Upper) => true,
            (CharClass::Digit, CharClass::Upper | CharClass::Lower) => true,
            (CharClass::Upper | CharClass::Lower, CharClass::Digit) => true,
            // "HTMLElement": the 'E' starts a new word when followed by lowercase
            (CharClass::Upper, CharClass::Upper) => next == Some(CharClass::Lower),
            _ => false,
        };

        if boundary {
            words.push(&s[begin..offset]);
            start = Some(offset);
        }
    }

    if let Some(begin) = start {
        words.push(&s[begin..]);
    }

    words
}

/// Convert an identifier to kebab-case.
/// Example: "maxLength" -> "max-length"
#[inline]
pub fn to_kebab_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);

    for (i, word) in split_words(s).into_iter().enumerate() {
        if i > 0 {
            result.push('-');
        }
        result.extend(word.chars().flat_map(char::to_lowercase));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_to_kebab() {
        assert_eq!(to_kebab_case("label"), "label");
        assert_eq!(to_kebab_case("maxLength"), "max-length");
        assert_eq!(to_kebab_case("ariaDescribedBy"), "aria-described-by");
    }

    #[test]
    fn test_pascal_and_acronyms() {
        assert_eq!(to_kebab_case("MyButton"), "my-button");
        assert_eq!(to_kebab_case("HTMLElement"), "html-element");
        assert_eq!(to_kebab_case("innerHTML"), "inner-html");
    }

    #[test]
    fn test_separators() {
        assert_eq!(to_kebab_case("foo_bar"), "foo-bar");
        assert_eq!(to_kebab_case("foo bar"), "foo-bar");
        assert_eq!(to_kebab_case("already-kebab"), "already-kebab");
        assert_eq!(to_kebab_case("__private__"), "private");
    }

    #[test]
    fn test_digits() {
        assert_eq!(to_kebab_case("size2x"), "size-2-x");
        assert_eq!(to_kebab_case("h1"), "h-1");
    }

    #[test]
    fn test_empty() {
        assert_eq!(to_kebab_case(""), "");
        assert!(split_words("-_-").is_empty());
    }
}
