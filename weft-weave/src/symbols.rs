//! Symbol normalization for code fragments
//!
//!     Before a code fragment is highlighted, a fixed set of ASCII operator
//!     tokens is rewritten into display glyphs so the woven page reads like
//!     the mathematical notation the law uses. The substitution is purely
//!     lexical: it does not understand string or comment context inside the
//!     fragment, so a literal `/` inside a string is converted too.
//!
//!     Date shapes (`DD/DD/DDDD`) are matched but substituted with themselves,
//!     which shields their slashes from the division-sign rule. The match is
//!     reserved for future locale-aware date rendering.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Alternation order is load-bearing: the date shape must win over the bare
// slash, and two-character operators over their one-character prefixes.
static SYMBOL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d\d/\d\d/\d{4}|!=|<=|>=|--|->|\*|/").expect("symbol pattern is well-formed")
});

/// Rewrite operator tokens in `code` into display glyphs.
///
/// Total over any input: unmatched text is returned byte-identical, and the
/// glyphs never re-match, so running the normalizer on its own output is a
/// no-op.
pub fn normalize_symbols(code: &str) -> String {
    SYMBOL_PATTERN
        .replace_all(code, |caps: &Captures<'_>| {
            match &caps[0] {
                "!=" => "≠",
                "<=" => "≤",
                ">=" => "≥",
                "--" => "—",
                "->" => "→",
                "*" => "×",
                "/" => "÷",
                // the date shape, kept verbatim
                date => date,
            }
            .to_string()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operators_become_glyphs() {
        assert_eq!(normalize_symbols("a != b -> c"), "a ≠ b → c");
        assert_eq!(normalize_symbols("x <= y >= z"), "x ≤ y ≥ z");
        assert_eq!(normalize_symbols("3 * 4 / 2"), "3 × 4 ÷ 2");
        assert_eq!(normalize_symbols("1 -- 2"), "1 — 2");
    }

    #[test]
    fn test_date_slashes_survive() {
        assert_eq!(normalize_symbols("due 01/02/2034"), "due 01/02/2034");
        // A one-digit day is not a date shape, so its slashes divide.
        assert_eq!(normalize_symbols("1/02/2034"), "1÷02÷2034");
    }

    #[test]
    fn test_plain_text_is_untouched() {
        let text = "montant de la prestation";
        assert_eq!(normalize_symbols(text), text);
    }

    #[test]
    fn test_normalized_output_is_stable() {
        let once = normalize_symbols("a != b, due 12/05/2034, x * y");
        assert_eq!(normalize_symbols(&once), once);
    }

    #[test]
    fn test_string_literals_are_not_spared() {
        // String/comment context inside the fragment is invisible to the
        // normalizer.
        assert_eq!(normalize_symbols("\"a/b\""), "\"a÷b\"");
    }
}
