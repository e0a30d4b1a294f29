// crates/geoseek-core/src/text.rs

//! Text utilities shared by the index builder and the scoring path.
//!
//! Two distinct normalizations live here on purpose:
//! - [`tokenize`] and the word-splitting helpers use plain lowercasing, so
//!   the scoring formulas stay reproducible against the indexed
//!   `search_name` strings.
//! - [`fold_key`]/[`equals_folded`] additionally transliterate Unicode to
//!   ASCII; they back filter evaluation and name lookups, where
//!   accent-insensitive equality is wanted.

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII.
///
/// # Examples
///
/// ```rust
/// use geoseek_core::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Straße"), "strasse");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding and normalization.
///
/// # Examples
///
/// ```rust
/// use geoseek_core::equals_folded;
///
/// assert!(equals_folded("Île-de-France", "ile-de-france"));
/// assert!(equals_folded("MÜNCHEN", "munchen"));
/// assert!(!equals_folded("Berlin", "Paris"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Characters that delimit words inside a location name.
#[inline]
pub(crate) fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '.' | '-')
}

/// Tokenize a name into lowercase words.
///
/// Splits on whitespace, comma, period and hyphen; empty fragments are
/// discarded. Empty input yields an empty sequence.
pub fn tokenize(name: &str) -> Vec<String> {
    name.to_lowercase()
        .split(is_word_separator)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Split a target string into words, collapsing separator runs.
///
/// Unlike [`tokenize`] this keeps a leading/trailing empty fragment when the
/// string starts or ends with a separator, so word positions are stable for
/// the word-boundary scoring tier.
pub(crate) fn split_words(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut last_was_sep = false;
    for (i, ch) in s.char_indices() {
        if is_word_separator(ch) {
            if !last_was_sep {
                out.push(&s[start..i]);
            }
            last_was_sep = true;
        } else {
            if last_was_sep {
                start = i;
            }
            last_was_sep = false;
        }
    }
    if last_was_sep {
        out.push("");
    } else {
        out.push(&s[start..]);
    }
    out
}

/// Parses an `Option<String>` into an `Option<f64>`.
///
/// Trims surrounding whitespace before parsing; returns `None` when the
/// input is absent or not a number. The source dataset stores coordinates as
/// strings, so this runs once per record at build time.
pub(crate) fn parse_opt_f64(s: &Option<String>) -> Option<f64> {
    s.as_ref().and_then(|v| v.trim().parse::<f64>().ok())
}
