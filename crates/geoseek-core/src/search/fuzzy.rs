// crates/geoseek-core/src/search/fuzzy.rs

//! Tiered fuzzy scoring of one keyword against one target string.
//!
//! Tiers are tried in order and the first hit wins. The constants encode
//! the ranking contract: exact beats prefix beats word-boundary beats
//! substring beats subsequence, with length ratios and positions breaking
//! ties inside a tier. Both inputs are expected to be lowercase already
//! (the index stores `search_name` pre-folded, the parser lowercases
//! keywords); lengths and indices are measured in characters.

use crate::text::{is_word_separator, split_words};

/// Score one keyword against one target string; `0.0` means no match.
pub fn fuzzy_score(keyword: &str, target: &str) -> f64 {
    if target.is_empty() || keyword.is_empty() {
        return 0.0;
    }

    let k_len = keyword.chars().count() as f64;
    let t_len = target.chars().count() as f64;

    // Exact match - highest score
    if target == keyword {
        return 1000.0;
    }

    // Starts with keyword - very high score
    if target.starts_with(keyword) {
        return 800.0 + (k_len / t_len) * 100.0;
    }

    // Word boundary match (keyword matches start of a word); earlier words
    // score higher.
    for (i, word) in split_words(target).iter().enumerate() {
        if word.starts_with(keyword) {
            let w_len = word.chars().count() as f64;
            return 600.0 + (k_len / w_len) * 50.0 - (i as f64) * 10.0;
        }
    }

    // Contains keyword as substring
    if let Some(byte_idx) = target.find(keyword) {
        let idx = target[..byte_idx].chars().count() as f64;
        return 400.0 + (k_len / t_len) * 50.0 - idx * 2.0;
    }

    // Fuzzy character sequence match
    match subsequence_score(keyword, target) {
        Some(score) => 100.0 + score,
        None => 0.0,
    }
}

/// Check whether the keyword's characters appear in order in the target.
///
/// Consecutive runs compound (+run length × 5 per continued character) and
/// matches on a word boundary earn +10; a completed match is scaled by the
/// keyword/target length ratio so sparse hits on long targets fade.
fn subsequence_score(keyword: &str, target: &str) -> Option<f64> {
    let k: Vec<char> = keyword.chars().collect();
    let t: Vec<char> = target.chars().collect();

    let mut k_idx = 0usize;
    let mut score = 0.0f64;
    let mut consecutive = 0i64;
    // Sentinel below -1 so the first character never reads as consecutive.
    let mut last_match = -2i64;

    for (t_idx, &tc) in t.iter().enumerate() {
        if k_idx >= k.len() {
            break;
        }
        if tc != k[k_idx] {
            continue;
        }
        if t_idx as i64 == last_match + 1 {
            consecutive += 1;
            score += consecutive as f64 * 5.0;
        } else {
            consecutive = 1;
            score += 1.0;
        }
        if t_idx == 0 || is_word_separator(t[t_idx - 1]) {
            score += 10.0;
        }
        last_match = t_idx as i64;
        k_idx += 1;
    }

    if k_idx < k.len() {
        return None;
    }

    Some(score * (k.len() as f64 / t.len() as f64))
}
