// crates/geoseek-core/src/model/build.rs
use crate::model::record::{Ancestry, CountryMeta, LocationRecord, SearchIndex};
use crate::raw::{CountriesRaw, CountryRaw, StateRaw};
use crate::text::{parse_opt_f64, tokenize};
use crate::traits::GeoBackend;

/// A raw entry without a usable name cannot be indexed (nor can its
/// children, which would carry dangling back-references), so the whole
/// subtree is dropped.
fn usable_name(name: &Option<String>) -> Option<&str> {
    name.as_deref().map(str::trim).filter(|n| !n.is_empty())
}

fn meta_from_raw<B: GeoBackend>(c: &CountryRaw) -> CountryMeta<B> {
    CountryMeta {
        region: c.region.as_deref().map(B::str_from),
        currency: c.currency.as_deref().map(B::str_from),
        currency_name: c.currency_name.as_deref().map(B::str_from),
        currency_symbol: c.currency_symbol.as_deref().map(B::str_from),
        phone_code: c.phone_code.as_deref().map(B::str_from),
        iso2: c.iso2.as_deref().map(B::str_from),
        iso3: c.iso3.as_deref().map(B::str_from),
    }
}

fn record<B: GeoBackend>(
    name: &str,
    latitude: &Option<String>,
    longitude: &Option<String>,
    meta: CountryMeta<B>,
    ancestry: Ancestry<B>,
) -> LocationRecord<B> {
    LocationRecord {
        name: B::str_from(name),
        search_name: B::str_from(&name.to_lowercase()),
        name_tokens: tokenize(name),
        latitude: parse_opt_f64(latitude).map(B::float_from),
        longitude: parse_opt_f64(longitude).map(B::float_from),
        meta,
        ancestry,
    }
}

impl<B: GeoBackend> SearchIndex<B> {
    /// Flatten the raw hierarchical dataset into the search index.
    ///
    /// Emits one record per country, then per state, then per city of that
    /// state, propagating country-level metadata to every descendant. Runs
    /// once, synchronously, before any query is accepted.
    pub fn from_raw(raw: CountriesRaw) -> Self {
        let mut records = Vec::new();

        for c_raw in raw {
            let Some(c_name) = usable_name(&c_raw.name) else {
                continue;
            };

            records.push(record(
                c_name,
                &c_raw.latitude,
                &c_raw.longitude,
                meta_from_raw::<B>(&c_raw),
                Ancestry::Country,
            ));

            for s_raw in &c_raw.states {
                push_state(&mut records, &c_raw, c_name, s_raw);
            }
        }

        SearchIndex { records }
    }
}

fn push_state<B: GeoBackend>(
    records: &mut Vec<LocationRecord<B>>,
    c_raw: &CountryRaw,
    c_name: &str,
    s_raw: &StateRaw,
) {
    let Some(s_name) = usable_name(&s_raw.name) else {
        return;
    };

    records.push(record(
        s_name,
        &s_raw.latitude,
        &s_raw.longitude,
        meta_from_raw::<B>(c_raw),
        Ancestry::State {
            country_name: B::str_from(c_name),
            parent_tokens: tokenize(c_name),
        },
    ));

    // City context tokens cover both containing names.
    let city_parent_tokens = tokenize(&format!("{s_name} {c_name}"));

    for city_raw in &s_raw.cities {
        let Some(city_name) = usable_name(&city_raw.name) else {
            continue;
        };
        records.push(record(
            city_name,
            &city_raw.latitude,
            &city_raw.longitude,
            meta_from_raw::<B>(c_raw),
            Ancestry::City {
                state_name: B::str_from(s_name),
                country_name: B::str_from(c_name),
                parent_tokens: city_parent_tokens.clone(),
            },
        ));
    }
}
