// crates/geoseek-core/src/search/query.rs

//! Query parsing: filter extraction plus residual free text.
//!
//! Filters take the form `key:value` or `key:"quoted value"` and may appear
//! anywhere in the query string. Extraction is a small hand-written scanner;
//! recognized keys become typed [`FilterKey`] entries, unrecognized keys are
//! captured but never evaluated (forward-compatible). Everything that is not
//! a filter is the free-text portion, lowercased and split on whitespace
//! into keywords.

use std::collections::BTreeMap;

/// The recognized filter keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKey {
    Iso2,
    Iso3,
    Region,
    Currency,
    Phone,
    Type,
    In,
}

impl FilterKey {
    pub const ALL: [FilterKey; 7] = [
        FilterKey::Iso2,
        FilterKey::Iso3,
        FilterKey::Region,
        FilterKey::Currency,
        FilterKey::Phone,
        FilterKey::Type,
        FilterKey::In,
    ];

    /// Parse an already-lowercased key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "iso2" => Some(FilterKey::Iso2),
            "iso3" => Some(FilterKey::Iso3),
            "region" => Some(FilterKey::Region),
            "currency" => Some(FilterKey::Currency),
            "phone" => Some(FilterKey::Phone),
            "type" => Some(FilterKey::Type),
            "in" => Some(FilterKey::In),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterKey::Iso2 => "iso2",
            FilterKey::Iso3 => "iso3",
            FilterKey::Region => "region",
            FilterKey::Currency => "currency",
            FilterKey::Phone => "phone",
            FilterKey::Type => "type",
            FilterKey::In => "in",
        }
    }

    /// Short usage hint, surfaced through the `GET_FILTERS` protocol
    /// message and the CLI.
    pub fn help(self) -> &'static str {
        match self {
            FilterKey::Iso2 => "Search by ISO2 country code (e.g. iso2:US)",
            FilterKey::Iso3 => "Search by ISO3 country code (e.g. iso3:USA)",
            FilterKey::Region => {
                "Search by region (e.g. region:Asia, region:\"North America\")"
            }
            FilterKey::Currency => "Search by currency code (e.g. currency:USD)",
            FilterKey::Phone => "Search by phone code (e.g. phone:1)",
            FilterKey::Type => {
                "Filter by location type (e.g. type:city, type:country, type:state)"
            }
            FilterKey::In => {
                "Find locations within a parent (e.g. hyderabad in:india, california in:\"united states\")"
            }
        }
    }
}

/// A parsed query: typed filters, ignored unknown filters, and the residual
/// free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Recognized filters. A repeated key keeps its last value.
    pub filters: BTreeMap<FilterKey, String>,
    /// Unrecognized `key:value` pairs: captured (and removed from the free
    /// text) but never evaluated.
    pub unknown_filters: BTreeMap<String, String>,
    /// Lowercased, trimmed free-text remainder after filter removal.
    pub text: String,
    /// `text` split on whitespace.
    pub keywords: Vec<String>,
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl Query {
    /// Scan the raw query string for filters and split off the keywords.
    pub fn parse(input: &str) -> Self {
        let mut query = Query::default();
        let chars: Vec<(usize, char)> = input.char_indices().collect();
        let n = chars.len();
        let mut remainder = String::new();
        let mut i = 0;

        while i < n {
            let (byte, c) = chars[i];
            if !is_key_char(c) {
                remainder.push(c);
                i += 1;
                continue;
            }

            // Maximal key-character run.
            while i < n && is_key_char(chars[i].1) {
                i += 1;
            }

            if i < n && chars[i].1 == ':' {
                let key = &input[byte..chars[i].0];
                let after_colon = i + 1;

                // `key:"quoted value"` — requires a closing quote and
                // non-empty content, otherwise falls through to the
                // unquoted form (which then keeps the quote characters).
                if after_colon < n && chars[after_colon].1 == '"' {
                    let mut k = after_colon + 1;
                    while k < n && chars[k].1 != '"' {
                        k += 1;
                    }
                    if k < n && k > after_colon + 1 {
                        let value = &input[chars[after_colon + 1].0..chars[k].0];
                        query.record_filter(key, value);
                        i = k + 1;
                        continue;
                    }
                }

                // `key:value` — value is a maximal non-whitespace run.
                let mut k = after_colon;
                while k < n && !chars[k].1.is_whitespace() {
                    k += 1;
                }
                if k > after_colon {
                    let end = if k < n { chars[k].0 } else { input.len() };
                    let value = &input[chars[after_colon].0..end];
                    query.record_filter(key, value);
                    i = k;
                    continue;
                }
            }

            // Not a filter: the word run stays in the free text.
            let end = if i < n { chars[i].0 } else { input.len() };
            remainder.push_str(&input[byte..end]);
        }

        query.text = remainder.trim().to_lowercase();
        query.keywords = query.text.split_whitespace().map(str::to_owned).collect();
        query
    }

    fn record_filter(&mut self, key: &str, value: &str) {
        let key = key.to_lowercase();
        let value = value.to_lowercase();
        match FilterKey::from_key(&key) {
            Some(k) => {
                self.filters.insert(k, value);
            }
            None => {
                self.unknown_filters.insert(key, value);
            }
        }
    }

    /// True when any `key:value` pair was present, recognized or not.
    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty() || !self.unknown_filters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_has_no_filters() {
        let q = Query::parse("New York");
        assert!(q.filters.is_empty());
        assert!(q.unknown_filters.is_empty());
        assert_eq!(q.text, "new york");
        assert_eq!(q.keywords, vec!["new", "york"]);
    }

    #[test]
    fn extracts_unquoted_filter() {
        let q = Query::parse("hyderabad in:india");
        assert_eq!(q.filters.get(&FilterKey::In).map(String::as_str), Some("india"));
        assert_eq!(q.keywords, vec!["hyderabad"]);
    }

    #[test]
    fn extracts_quoted_filter_with_spaces() {
        let q = Query::parse("california in:\"United States\"");
        assert_eq!(
            q.filters.get(&FilterKey::In).map(String::as_str),
            Some("united states")
        );
        assert_eq!(q.text, "california");
    }

    #[test]
    fn keys_are_case_insensitive_and_values_lowercased() {
        let q = Query::parse("ISO2:US paris");
        assert_eq!(q.filters.get(&FilterKey::Iso2).map(String::as_str), Some("us"));
        assert_eq!(q.keywords, vec!["paris"]);
    }

    #[test]
    fn unknown_keys_are_captured_but_separate() {
        let q = Query::parse("population:many berlin");
        assert!(q.filters.is_empty());
        assert_eq!(
            q.unknown_filters.get("population").map(String::as_str),
            Some("many")
        );
        assert!(q.has_filters());
        assert_eq!(q.keywords, vec!["berlin"]);
    }

    #[test]
    fn repeated_key_keeps_last_value() {
        let q = Query::parse("iso2:us iso2:fr");
        assert_eq!(q.filters.get(&FilterKey::Iso2).map(String::as_str), Some("fr"));
        assert!(q.keywords.is_empty());
    }

    #[test]
    fn unclosed_quote_falls_back_to_unquoted() {
        let q = Query::parse("in:\"united paris");
        assert_eq!(
            q.filters.get(&FilterKey::In).map(String::as_str),
            Some("\"united")
        );
        assert_eq!(q.keywords, vec!["paris"]);
    }

    #[test]
    fn bare_colon_stays_in_text() {
        let q = Query::parse("paris: rome");
        assert!(q.filters.is_empty());
        assert_eq!(q.text, "paris: rome");
        assert_eq!(q.keywords, vec!["paris:", "rome"]);
    }

    #[test]
    fn filter_only_query_is_valid() {
        let q = Query::parse("iso2:fr");
        assert!(q.keywords.is_empty());
        assert!(q.has_filters());
    }

    #[test]
    fn interior_spacing_survives_in_text() {
        let q = Query::parse("paris iso2:fr rome");
        // Filter removal does not collapse the gap it leaves behind.
        assert_eq!(q.text, "paris  rome");
        assert_eq!(q.keywords, vec!["paris", "rome"]);
    }
}
