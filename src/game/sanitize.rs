//! Input sanitization
//!
//! Every word entering the session (dictionary entries, the secret, user
//! guesses) goes through [`sanitize`] before any comparison.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize a raw word for comparison
///
/// NFD-decomposes the string, drops combining marks (so "tûtüt" becomes
/// "tutut"), trims surrounding whitespace and uppercases. Total and
/// idempotent.
///
/// # Examples
/// ```
/// use wordle_game::game::sanitize;
///
/// assert_eq!(sanitize("  tûtüt "), "TUTUT");
/// assert_eq!(sanitize(&sanitize("animé")), sanitize("animé"));
/// ```
#[must_use]
pub fn sanitize(raw: &str) -> String {
    raw.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .chars()
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases() {
        assert_eq!(sanitize("hello"), "HELLO");
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(sanitize("  hello\t"), "HELLO");
    }

    #[test]
    fn strips_diacritics() {
        assert_eq!(sanitize("animé"), "ANIME");
        assert_eq!(sanitize("tûtüt"), "TUTUT");
        assert_eq!(sanitize("Ça"), "CA");
    }

    #[test]
    fn leaves_non_latin_scripts_alone() {
        // Not stripped, only normalized; the session rejects these later
        assert_eq!(sanitize("会"), "会");
    }

    #[test]
    fn empty_input() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   "), "");
    }

    #[test]
    fn idempotent() {
        for raw in ["animé", "  tûtüt ", "HELLO", "", "Straße", "déjà vu"] {
            assert_eq!(sanitize(&sanitize(raw)), sanitize(raw));
        }
    }
}
