// crates/geoseek-core/src/raw.rs
use serde::{Deserialize, Serialize};

/// Raw city structure as it comes from the JSON dataset.
///
/// Names are optional here: the builder skips malformed entries instead of
/// failing the whole load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityRaw {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
}

/// Raw state / region structure from the JSON dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateRaw {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default)]
    pub cities: Vec<CityRaw>,
}

/// Raw country structure from the JSON dataset.
///
/// NOTE: This type mirrors the external dataset and may be subject to that
/// dataset's license. We do *not* expose this type from the public API
/// beyond the `INIT` protocol payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryRaw {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub iso2: Option<String>,
    #[serde(default)]
    pub iso3: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub currency_name: Option<String>,
    #[serde(default)]
    pub currency_symbol: Option<String>,
    // The upstream dataset spells this "phonecode"; exported app bundles use
    // "phone_code". Accept both.
    #[serde(default, alias = "phonecode")]
    pub phone_code: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default)]
    pub states: Vec<StateRaw>,
}

/// The whole dataset: a sequence of countries.
pub type CountriesRaw = Vec<CountryRaw>;
