// crates/geoseek-core/src/model/record.rs
use crate::common::DbStats;
use crate::text::fold_key;
use crate::traits::{GeoBackend, NameMatch};

/// What kind of place a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceKind {
    Country,
    State,
    City,
}

impl PlaceKind {
    /// Stable lowercase form, used by the `type:` filter and display.
    pub fn as_str(self) -> &'static str {
        match self {
            PlaceKind::Country => "country",
            PlaceKind::State => "state",
            PlaceKind::City => "city",
        }
    }
}

impl std::fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Country-level metadata, denormalized onto every descendant record at
/// build time. The owning country is the single source of truth; these are
/// copies and are never mutated after the build.
#[derive(Debug, Clone)]
pub struct CountryMeta<B: GeoBackend> {
    pub region: Option<B::Str>,
    pub currency: Option<B::Str>,
    pub currency_name: Option<B::Str>,
    pub currency_symbol: Option<B::Str>,
    pub phone_code: Option<B::Str>,
    pub iso2: Option<B::Str>,
    pub iso3: Option<B::Str>,
}

/// Ancestor back-references for a record.
///
/// The variant shape carries exactly the invariant of the index: a city
/// always knows both its state and country, a state only its country, a
/// country neither. `parent_tokens` are the lowercase word tokens of the
/// immediate containing name(s), used for context scoring.
#[derive(Debug, Clone)]
pub enum Ancestry<B: GeoBackend> {
    Country,
    State {
        country_name: B::Str,
        parent_tokens: Vec<String>,
    },
    City {
        state_name: B::Str,
        country_name: B::Str,
        parent_tokens: Vec<String>,
    },
}

/// One flattened index entry: a country, state or city with its
/// pre-computed search strings and denormalized country metadata.
#[derive(Debug, Clone)]
pub struct LocationRecord<B: GeoBackend> {
    pub name: B::Str,
    /// Lowercased `name`; the string every scoring tier runs against.
    pub search_name: B::Str,
    /// Lowercase word tokens of `name`.
    pub name_tokens: Vec<String>,
    pub latitude: Option<B::Float>,
    pub longitude: Option<B::Float>,
    pub meta: CountryMeta<B>,
    pub ancestry: Ancestry<B>,
}

impl<B: GeoBackend> LocationRecord<B> {
    pub fn kind(&self) -> PlaceKind {
        match self.ancestry {
            Ancestry::Country => PlaceKind::Country,
            Ancestry::State { .. } => PlaceKind::State,
            Ancestry::City { .. } => PlaceKind::City,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn search_name(&self) -> &str {
        self.search_name.as_ref()
    }

    /// Tokens of the containing name(s); `None` for countries.
    pub fn parent_tokens(&self) -> Option<&[String]> {
        match &self.ancestry {
            Ancestry::Country => None,
            Ancestry::State { parent_tokens, .. } | Ancestry::City { parent_tokens, .. } => {
                Some(parent_tokens)
            }
        }
    }

    /// The containing country's display name, where applicable.
    pub fn country_name(&self) -> Option<&str> {
        match &self.ancestry {
            Ancestry::Country => None,
            Ancestry::State { country_name, .. } | Ancestry::City { country_name, .. } => {
                Some(country_name.as_ref())
            }
        }
    }

    /// The containing state's display name (cities only).
    pub fn state_name(&self) -> Option<&str> {
        match &self.ancestry {
            Ancestry::City { state_name, .. } => Some(state_name.as_ref()),
            _ => None,
        }
    }

    /// Hierarchical containment check backing the `in:` filter.
    ///
    /// A city is within its state or country, a state within its country; a
    /// country is within nothing. Comparison is accent- and
    /// case-insensitive.
    pub fn is_within(&self, parent: &str) -> bool {
        let parent = fold_key(parent);
        match &self.ancestry {
            Ancestry::Country => false,
            Ancestry::State { country_name, .. } => fold_key(country_name.as_ref()) == parent,
            Ancestry::City {
                state_name,
                country_name,
                ..
            } => {
                fold_key(state_name.as_ref()) == parent
                    || fold_key(country_name.as_ref()) == parent
            }
        }
    }
}

impl<B: GeoBackend> NameMatch for LocationRecord<B> {
    fn name_str(&self) -> &str {
        self.name.as_ref()
    }
}

/// The flat search index: an immutable ordered sequence of records.
///
/// Built exactly once from the raw dataset (see [`SearchIndex::from_raw`]);
/// scan order is the build order (depth-first country → state → that
/// state's cities), which the ranker's early-termination rule depends on.
/// Read-only after construction, so shared concurrent reads need no
/// locking.
#[derive(Debug, Clone)]
pub struct SearchIndex<B: GeoBackend> {
    pub(crate) records: Vec<LocationRecord<B>>,
}

impl<B: GeoBackend> SearchIndex<B> {
    /// All records in scan order.
    pub fn records(&self) -> &[LocationRecord<B>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LocationRecord<B>> {
        self.records.iter()
    }

    pub fn stats(&self) -> DbStats {
        let mut stats = DbStats {
            countries: 0,
            states: 0,
            cities: 0,
        };
        for r in &self.records {
            match r.kind() {
                PlaceKind::Country => stats.countries += 1,
                PlaceKind::State => stats.states += 1,
                PlaceKind::City => stats.cities += 1,
            }
        }
        stats
    }

    /// Find a country record by ISO2 code, case-insensitive (e.g. "DE", "us").
    pub fn find_country_by_iso2(&self, iso2: &str) -> Option<&LocationRecord<B>> {
        self.records
            .iter()
            .filter(|r| r.kind() == PlaceKind::Country)
            .find(|r| {
                r.meta
                    .iso2
                    .as_ref()
                    .is_some_and(|s| s.as_ref().eq_ignore_ascii_case(iso2))
            })
    }

    /// Find a country by code, trying ISO2 first and then ISO3.
    pub fn find_country_by_code(&self, code: &str) -> Option<&LocationRecord<B>> {
        let code = code.trim();
        self.find_country_by_iso2(code).or_else(|| {
            self.records
                .iter()
                .filter(|r| r.kind() == PlaceKind::Country)
                .find(|r| {
                    r.meta
                        .iso3
                        .as_ref()
                        .is_some_and(|s| s.as_ref().eq_ignore_ascii_case(code))
                })
        })
    }

    /// Find a country record by display name (accent/case-insensitive).
    pub fn find_country_by_name(&self, name: &str) -> Option<&LocationRecord<B>> {
        self.records
            .iter()
            .filter(|r| r.kind() == PlaceKind::Country)
            .find(|r| r.is_named(name))
    }
}
