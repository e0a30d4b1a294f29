// crates/geoseek-core/src/api.rs

//! JSON views of matched records.
//!
//! A matched flat record is folded back into the nested country → state →
//! city shape the dataset came in. Only the matched entity's own ancestor
//! chain is included — sibling states and cities are never echoed back.

use crate::model::{Ancestry, LocationRecord};
use crate::traits::GeoBackend;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryCodeView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso3: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cities: Option<Vec<CityView>>,
}

/// The top-level result shape. A matched country is itself the view; a
/// matched state or city is wrapped in its country with a single-element
/// `states` (and `cities`) chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_code: Option<String>,
    pub country_code: CountryCodeView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<StateView>>,
}

impl CountryView {
    /// Fold a matched flat record back into the nested result shape.
    pub fn from_record<B: GeoBackend>(record: &LocationRecord<B>) -> Self {
        let meta = &record.meta;
        let mut view = CountryView {
            name: String::new(),
            latitude: None,
            longitude: None,
            region: meta.region.as_ref().map(B::str_to_string),
            currency: meta.currency.as_ref().map(B::str_to_string),
            currency_name: meta.currency_name.as_ref().map(B::str_to_string),
            currency_symbol: meta.currency_symbol.as_ref().map(B::str_to_string),
            phone_code: meta.phone_code.as_ref().map(B::str_to_string),
            country_code: CountryCodeView {
                iso2: meta.iso2.as_ref().map(B::str_to_string),
                iso3: meta.iso3.as_ref().map(B::str_to_string),
            },
            states: None,
        };

        let latitude = record.latitude.map(B::float_to_f64);
        let longitude = record.longitude.map(B::float_to_f64);

        match &record.ancestry {
            Ancestry::Country => {
                view.name = B::str_to_string(&record.name);
                view.latitude = latitude;
                view.longitude = longitude;
            }
            Ancestry::State { country_name, .. } => {
                view.name = B::str_to_string(country_name);
                view.states = Some(vec![StateView {
                    name: B::str_to_string(&record.name),
                    latitude,
                    longitude,
                    cities: None,
                }]);
            }
            Ancestry::City {
                state_name,
                country_name,
                ..
            } => {
                view.name = B::str_to_string(country_name);
                view.states = Some(vec![StateView {
                    name: B::str_to_string(state_name),
                    latitude: None,
                    longitude: None,
                    cities: Some(vec![CityView {
                        name: B::str_to_string(&record.name),
                        latitude,
                        longitude,
                    }]),
                }]);
            }
        }

        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::DefaultIndex;
    use serde_json::json;

    fn index() -> DefaultIndex {
        let raw = serde_json::from_value(json!([
            {
                "name": "France",
                "iso2": "FR",
                "iso3": "FRA",
                "region": "Europe",
                "currency": "EUR",
                "phonecode": "33",
                "latitude": "46.0",
                "longitude": "2.0",
                "states": [
                    {
                        "name": "Île-de-France",
                        "latitude": "48.8",
                        "longitude": "2.5",
                        "cities": [
                            { "name": "Paris", "latitude": "48.85", "longitude": "2.35" }
                        ]
                    }
                ]
            }
        ]))
        .unwrap();
        DefaultIndex::from_raw(raw)
    }

    #[test]
    fn country_formats_as_itself() {
        let index = index();
        let view = CountryView::from_record(&index.records()[0]);
        assert_eq!(view.name, "France");
        assert_eq!(view.latitude, Some(46.0));
        assert_eq!(view.country_code.iso2.as_deref(), Some("FR"));
        assert!(view.states.is_none());
    }

    #[test]
    fn state_formats_as_country_wrapper() {
        let index = index();
        let view = CountryView::from_record(&index.records()[1]);
        assert_eq!(view.name, "France");
        // Country coordinates are not carried on a state record.
        assert_eq!(view.latitude, None);
        let states = view.states.unwrap();
        assert_eq!(states.len(), 1);
        assert_eq!(states[0].name, "Île-de-France");
        assert_eq!(states[0].latitude, Some(48.8));
        assert!(states[0].cities.is_none());
    }

    #[test]
    fn city_formats_with_full_ancestor_chain() {
        let index = index();
        let view = CountryView::from_record(&index.records()[2]);
        assert_eq!(view.name, "France");
        assert_eq!(view.region.as_deref(), Some("Europe"));
        let states = view.states.unwrap();
        assert_eq!(states[0].name, "Île-de-France");
        assert_eq!(states[0].latitude, None);
        let cities = states[0].cities.as_ref().unwrap();
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].name, "Paris");
        assert_eq!(cities[0].latitude, Some(48.85));
    }

    #[test]
    fn serializes_without_absent_fields() {
        let index = index();
        let json = serde_json::to_value(CountryView::from_record(&index.records()[0])).unwrap();
        assert_eq!(json["country_code"]["iso2"], "FR");
        assert!(json.get("states").is_none());
        assert!(json.get("currency_name").is_none());
    }
}
