//! Recipe name normalization.

use std::sync::LazyLock;

use regex::Regex;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("valid separator pattern"));
static NON_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z ]+").expect("valid letter pattern"));

/// Clean up a handwritten recipe name.
///
/// Runs of whitespace, underscores and hyphens become a single space, every
/// character other than an ASCII letter or space is dropped, and each word is
/// title-cased. Returns `None` if nothing is left.
///
/// Leading and trailing spaces are trimmed before that check, so input made
/// only of separators is rejected rather than normalized to blanks.
pub fn normalize_name(input: &str) -> Option<String> {
    let spaced = SEPARATORS.replace_all(input, " ");
    let letters = NON_LETTERS.replace_all(&spaced, "");
    let titled = title_case(letters.trim());

    (!titled.is_empty()).then_some(titled)
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.chars() {
        if c.is_ascii_alphabetic() {
            if word_start {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c.to_ascii_lowercase());
            }
            word_start = false;
        } else {
            out.push(c);
            word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_separators_and_title_cases() {
        assert_eq!(
            normalize_name("Riz@z RISO00tto!").as_deref(),
            Some("Rizz Risotto")
        );
        assert_eq!(
            normalize_name("meatball_-_sub").as_deref(),
            Some("Meatball Sub")
        );
        assert_eq!(
            normalize_name("alpHa-alFRedo").as_deref(),
            Some("Alpha Alfredo")
        );
    }

    #[test]
    fn trims_surrounding_separators() {
        assert_eq!(
            normalize_name("  skibidi  spaghetti__").as_deref(),
            Some("Skibidi Spaghetti")
        );
    }

    #[test]
    fn separators_are_collapsed_before_symbols_are_stripped() {
        assert_eq!(normalize_name("a 1 b").as_deref(), Some("A  B"));
    }

    #[test]
    fn rejects_names_without_letters() {
        assert_eq!(normalize_name(""), None);
        assert_eq!(normalize_name("123 !!"), None);
        assert_eq!(normalize_name("___"), None);
    }
}
