// crates/geoseek-core/src/search/rank.rs

//! Query execution: filter, score, partition, sort, truncate.

use crate::api::CountryView;
use crate::model::{LocationRecord, PlaceKind, SearchIndex};
use crate::search::fuzzy::fuzzy_score;
use crate::search::query::{FilterKey, Query};
use crate::text::equals_folded;
use crate::traits::GeoBackend;
use std::cmp::Ordering;

/// Results returned when the caller does not say otherwise.
pub const DEFAULT_MAX_RESULTS: usize = 100;
/// Queries shorter than this (trimmed) produce no results at all.
pub const MIN_QUERY_CHARS: usize = 2;
/// Minimum aggregate fuzzy score for a candidate to be retained.
///
/// Tunable, not a wire contract; raising it trades recall for precision.
pub const MIN_SCORE: f64 = 30.0;
/// The scan stops once `OVERSCAN_FACTOR * max_results` candidates are
/// collected. Bounds worst-case latency on large indexes at the cost of
/// possibly missing a higher-scoring record later in scan order.
pub const OVERSCAN_FACTOR: usize = 3;

const FILTER_ONLY_SCORE: f64 = 1000.0;
const EXACT_BASE_SCORE: f64 = 10000.0;
const ALL_KEYWORDS_IN_NAME_BONUS: f64 = 50.0;
/// Parent-context hits count half of a direct name hit.
const PARENT_SCORE_FACTOR: f64 = 0.5;

/// A candidate surviving filters and scoring; lives only inside one search
/// call.
#[derive(Debug, Clone, Copy)]
pub struct ScoredMatch<'a, B: GeoBackend> {
    pub record: &'a LocationRecord<B>,
    pub score: f64,
    pub is_exact: bool,
}

fn passes_filters<B: GeoBackend>(record: &LocationRecord<B>, query: &Query) -> bool {
    query.filters.iter().all(|(key, value)| {
        let meta = &record.meta;
        match key {
            FilterKey::Iso2 => meta
                .iso2
                .as_ref()
                .is_some_and(|s| s.as_ref().eq_ignore_ascii_case(value)),
            FilterKey::Iso3 => meta
                .iso3
                .as_ref()
                .is_some_and(|s| s.as_ref().eq_ignore_ascii_case(value)),
            FilterKey::Region => meta
                .region
                .as_ref()
                .is_some_and(|s| equals_folded(s.as_ref(), value)),
            FilterKey::Currency => meta
                .currency
                .as_ref()
                .is_some_and(|s| equals_folded(s.as_ref(), value)),
            // Phone codes compare verbatim.
            FilterKey::Phone => meta
                .phone_code
                .as_ref()
                .is_some_and(|s| s.as_ref() == value.as_str()),
            FilterKey::Type => record.kind().as_str() == value.as_str(),
            FilterKey::In => record.is_within(value),
        }
    })
}

/// Exact hits favor the most general place, fuzzy hits the most specific.
fn type_bonus(kind: PlaceKind, is_exact: bool) -> f64 {
    if is_exact {
        match kind {
            PlaceKind::Country => 1000.0,
            PlaceKind::State => 500.0,
            PlaceKind::City => 100.0,
        }
    } else {
        match kind {
            PlaceKind::City => 20.0,
            PlaceKind::State => 10.0,
            PlaceKind::Country => 0.0,
        }
    }
}

fn by_score_desc<B: GeoBackend>(a: &ScoredMatch<'_, B>, b: &ScoredMatch<'_, B>) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}

/// Run a parsed query against the index.
///
/// Returns the exact-match partition first, then fuzzy matches, each sorted
/// by descending score (the sort is stable, so equal scores keep scan
/// order), truncated to `max_results`.
pub fn rank<'a, B: GeoBackend>(
    index: &'a SearchIndex<B>,
    query: &Query,
    max_results: usize,
) -> Vec<ScoredMatch<'a, B>> {
    if query.keywords.is_empty() && !query.has_filters() {
        return Vec::new();
    }

    let mut exact: Vec<ScoredMatch<'a, B>> = Vec::new();
    let mut fuzzy: Vec<ScoredMatch<'a, B>> = Vec::new();

    for record in index.records() {
        if !passes_filters(record, query) {
            continue;
        }

        // Filter-only matches all carry the same flat score and never
        // trigger early termination: the whole index is eligible.
        if query.keywords.is_empty() {
            fuzzy.push(ScoredMatch {
                record,
                score: FILTER_ONLY_SCORE,
                is_exact: false,
            });
            continue;
        }

        let search_name = record.search_name();
        let mut is_exact = false;
        let mut total = 0.0f64;
        let mut matched = 0usize;

        if search_name == query.text {
            // The full free-text portion equals the record's name.
            is_exact = true;
            total = EXACT_BASE_SCORE;
            matched = query.keywords.len();
        } else {
            for keyword in &query.keywords {
                let name_score = fuzzy_score(keyword, search_name);
                let parent_score = record
                    .parent_tokens()
                    .map(|tokens| {
                        tokens
                            .iter()
                            .map(|t| fuzzy_score(keyword, t) * PARENT_SCORE_FACTOR)
                            .fold(0.0, f64::max)
                    })
                    .unwrap_or(0.0);
                let keyword_score = name_score.max(parent_score);
                if keyword_score > 0.0 {
                    matched += 1;
                    total += keyword_score;
                }
            }
        }

        // Every keyword must land somewhere (AND semantics), and weak
        // aggregates are dropped.
        if is_exact || (matched == query.keywords.len() && total >= MIN_SCORE) {
            let mut score = total + type_bonus(record.kind(), is_exact);
            if query
                .keywords
                .iter()
                .all(|k| search_name.contains(k.as_str()))
            {
                score += ALL_KEYWORDS_IN_NAME_BONUS;
            }
            let hit = ScoredMatch {
                record,
                score,
                is_exact,
            };
            if is_exact {
                exact.push(hit);
            } else {
                fuzzy.push(hit);
            }
        }

        if exact.len() + fuzzy.len() >= max_results * OVERSCAN_FACTOR {
            break;
        }
    }

    exact.sort_by(by_score_desc);
    fuzzy.sort_by(by_score_desc);
    exact.append(&mut fuzzy);
    exact.truncate(max_results);
    exact
}

/// Full search entry point: guard, parse, rank, format.
///
/// A pure function of (index, query); the asynchronous boundary, if any,
/// belongs to the host (see [`crate::engine`]).
pub fn search<B: GeoBackend>(
    index: &SearchIndex<B>,
    raw_query: &str,
    max_results: usize,
) -> Vec<CountryView> {
    let trimmed = raw_query.trim();
    if trimmed.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let query = Query::parse(trimmed);
    rank(index, &query, max_results)
        .into_iter()
        .map(|m| CountryView::from_record(m.record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::DefaultIndex;
    use serde_json::json;

    fn index() -> DefaultIndex {
        let raw = serde_json::from_value(json!([
            {
                "name": "Georgia",
                "iso2": "GE",
                "iso3": "GEO",
                "region": "Asia",
                "currency": "GEL",
                "phonecode": "995",
                "states": [
                    { "name": "Tbilisi", "cities": [ { "name": "Tbilisi" } ] }
                ]
            },
            {
                "name": "United States",
                "iso2": "US",
                "iso3": "USA",
                "region": "Americas",
                "currency": "USD",
                "phonecode": "1",
                "states": [
                    {
                        "name": "Georgia",
                        "cities": [ { "name": "Atlanta" }, { "name": "Savannah" } ]
                    },
                    {
                        "name": "California",
                        "cities": [ { "name": "San Francisco" } ]
                    }
                ]
            },
            {
                "name": "France",
                "iso2": "FR",
                "iso3": "FRA",
                "region": "Europe",
                "currency": "EUR",
                "phonecode": "33",
                "states": [
                    {
                        "name": "Île-de-France",
                        "cities": [
                            { "name": "Paris", "latitude": "48.85", "longitude": "2.35" }
                        ]
                    }
                ]
            },
            {
                "name": "India",
                "iso2": "IN",
                "iso3": "IND",
                "region": "Asia",
                "currency": "INR",
                "phonecode": "91",
                "states": [
                    { "name": "Telangana", "cities": [ { "name": "Hyderabad" } ] }
                ]
            }
        ]))
        .unwrap();
        DefaultIndex::from_raw(raw)
    }

    fn run(index: &DefaultIndex, q: &str) -> Vec<String> {
        let query = Query::parse(q);
        rank(index, &query, DEFAULT_MAX_RESULTS)
            .iter()
            .map(|m| format!("{}:{}", m.record.kind(), m.record.name()))
            .collect()
    }

    #[test]
    fn short_query_yields_nothing() {
        let index = index();
        assert!(search(&index, "p", DEFAULT_MAX_RESULTS).is_empty());
        assert!(search(&index, "  f  ", DEFAULT_MAX_RESULTS).is_empty());
        assert!(search(&index, "", DEFAULT_MAX_RESULTS).is_empty());
    }

    #[test]
    fn exact_name_outranks_everything() {
        let index = index();
        let hits = run(&index, "georgia");
        // Country above state above any fuzzy hit, despite the state
        // sitting later in scan order.
        assert_eq!(hits[0], "country:Georgia");
        assert_eq!(hits[1], "state:Georgia");
    }

    #[test]
    fn exact_partition_precedes_fuzzy_partition() {
        let index = index();
        let query = Query::parse("georgia");
        let hits = rank(&index, &query, DEFAULT_MAX_RESULTS);
        assert!(hits[0].is_exact && hits[1].is_exact);
        assert!(hits.iter().skip(2).all(|m| !m.is_exact));
        // Partitions are internally sorted descending.
        assert!(hits[0].score >= hits[1].score);
    }

    #[test]
    fn prefix_query_finds_city() {
        let index = index();
        let hits = run(&index, "par");
        assert_eq!(hits[0], "city:Paris");
    }

    #[test]
    fn keywords_combine_with_parent_context() {
        let index = index();
        let hits = run(&index, "hyderabad india");
        assert_eq!(hits[0], "city:Hyderabad");
    }

    #[test]
    fn all_keywords_must_match() {
        let index = index();
        assert!(run(&index, "paris xyzqq").is_empty());
        assert!(run(&index, "xyzxyz").is_empty());
    }

    #[test]
    fn iso2_filter_restricts_results() {
        let index = index();
        let query = Query::parse("iso2:us");
        let hits = rank(&index, &query, DEFAULT_MAX_RESULTS);
        assert_eq!(hits.len(), 6); // country + 2 states + 3 cities
        assert!(hits
            .iter()
            .all(|m| m.record.meta.iso2.as_deref() == Some("US")));
        assert!(hits.iter().all(|m| m.score == 1000.0 && !m.is_exact));
        // Flat scores keep scan order.
        assert_eq!(hits[0].record.name(), "United States");
    }

    #[test]
    fn filters_and_keywords_are_anded() {
        let index = index();
        let hits = run(&index, "georgia iso2:us");
        // The Georgian country and its descendants fail the iso2 filter;
        // Atlanta and Savannah still ride in on parent-context scoring.
        assert_eq!(
            hits,
            vec!["state:Georgia", "city:Atlanta", "city:Savannah"]
        );
    }

    #[test]
    fn in_filter_checks_hierarchy() {
        let index = index();
        let query = Query::parse("in:\"united states\"");
        let hits = rank(&index, &query, DEFAULT_MAX_RESULTS);
        // Both states and their cities, but never the country itself.
        assert_eq!(hits.len(), 5);
        assert!(hits.iter().all(|m| m.record.kind() != PlaceKind::Country));

        // "georgia" names both a country and a US state; `in:` accepts
        // either parent.
        let by_state = run(&index, "in:georgia type:city");
        assert_eq!(
            by_state,
            vec!["city:Tbilisi", "city:Atlanta", "city:Savannah"]
        );
    }

    #[test]
    fn type_filter_excludes_other_kinds() {
        let index = index();
        let hits = run(&index, "georgia type:state");
        // The exact state hit leads; Tbilisi matches through its parent
        // country's name. The country "Georgia" itself is filtered out.
        assert_eq!(hits, vec!["state:Georgia", "state:Tbilisi"]);
    }

    #[test]
    fn unknown_filter_is_ignored_but_counts_as_filter() {
        let index = index();
        let query = Query::parse("altitude:high");
        let hits = rank(&index, &query, DEFAULT_MAX_RESULTS);
        // Unknown key constrains nothing: every record qualifies as a
        // filter-only match.
        assert_eq!(hits.len(), index.len());
    }

    #[test]
    fn search_is_idempotent() {
        let index = index();
        let a = search(&index, "georgia iso2:us", DEFAULT_MAX_RESULTS);
        let b = search(&index, "georgia iso2:us", DEFAULT_MAX_RESULTS);
        assert_eq!(a, b);
    }

    #[test]
    fn truncates_to_max_results() {
        let index = index();
        let query = Query::parse("iso2:us");
        let hits = rank(&index, &query, 2);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn early_termination_bounds_fuzzy_scans() {
        let raw = serde_json::from_value(json!([{
            "name": "Testland",
            "iso2": "TL",
            "states": (0..50).map(|i| json!({
                "name": format!("Aaville {i}"),
                "cities": []
            })).collect::<Vec<_>>()
        }]))
        .unwrap();
        let index = DefaultIndex::from_raw(raw);
        let query = Query::parse("aaville");
        let hits = rank(&index, &query, 2);
        assert_eq!(hits.len(), 2);
        // With max_results=2 the scan stops after 6 collected candidates,
        // so later, equally-scored records can never displace them.
        let all = rank(&index, &query, DEFAULT_MAX_RESULTS);
        assert_eq!(all.len(), 50);
    }

    #[test]
    fn formatted_city_result_nests_ancestors() {
        let index = index();
        let results = search(&index, "Paris", DEFAULT_MAX_RESULTS);
        let top = &results[0];
        assert_eq!(top.name, "France");
        let states = top.states.as_ref().unwrap();
        let cities = states[0].cities.as_ref().unwrap();
        assert_eq!(cities[0].name, "Paris");
        assert_eq!(cities[0].latitude, Some(48.85));
    }
}
