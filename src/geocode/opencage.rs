use bon::Builder;
use reqwest::Client;
use url::Url;

use crate::{
    geocode::{AddressComponents, LookupError, ReverseGeocoder},
    prelude::*,
};

/// [OpenCage][1] reverse-geocoding client.
///
/// [1]: https://opencagedata.com/api
#[must_use]
#[derive(Clone, Builder)]
pub struct OpenCage {
    client: Client,

    #[builder(into)]
    api_key: String,
}

impl ReverseGeocoder for OpenCage {
    async fn reverse(&self, lat: f64, lon: f64) -> Result<Option<AddressComponents>, LookupError> {
        info!(lat, lon, "🌍 Looking up the address…");
        let url = {
            let mut url = Url::parse("https://api.opencagedata.com/geocode/v1/json").unwrap();
            url.query_pairs_mut()
                .append_pair("q", &format!("{lat} {lon}"))
                .append_pair("key", &self.api_key)
                .append_pair("no_annotations", "1")
                .append_pair("limit", "1");
            url
        };
        let response: GeocodeResponse =
            self.client.get(url).send().await?.error_for_status()?.json().await?;
        Ok(response.into_components())
    }
}

#[derive(serde::Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(serde::Deserialize)]
struct GeocodeResult {
    components: Option<RawComponents>,
}

/// Heterogeneous, partially populated components payload as the service sends it.
#[derive(Default, serde::Deserialize)]
#[serde(default)]
struct RawComponents {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    hamlet: Option<String>,
    state_code: Option<String>,
    state: Option<String>,
    country: Option<String>,
    country_code: Option<String>,
    postcode: Option<String>,
    road: Option<String>,
    house_number: Option<String>,
    county: Option<String>,
}

impl GeocodeResponse {
    /// First result's components, normalized. `None` when the response carries
    /// no result or the result has no components payload.
    fn into_components(self) -> Option<AddressComponents> {
        self.results.into_iter().next()?.components.map(AddressComponents::from)
    }
}

impl From<RawComponents> for AddressComponents {
    fn from(raw: RawComponents) -> Self {
        Self {
            city: raw.city.or(raw.town).or(raw.village).or(raw.hamlet).unwrap_or_default(),
            state_abbr: raw.state_code.unwrap_or_default(),
            state: raw.state.unwrap_or_default(),
            country: raw.country.unwrap_or_default(),
            country_code: raw.country_code.unwrap_or_default().to_uppercase(),
            postcode: raw.postcode.unwrap_or_default(),
            road: raw.road.unwrap_or_default(),
            house_number: raw.house_number.unwrap_or_default(),
            county: raw.county.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_full_response_ok() -> Result {
        // language=json
        let response: GeocodeResponse = serde_json::from_str(
            r#"{
                "results": [{
                    "components": {
                        "city": "Berlin",
                        "state_code": "BE",
                        "state": "Berlin",
                        "country": "Germany",
                        "country_code": "de",
                        "postcode": "10117",
                        "road": "Unter den Linden",
                        "house_number": "77",
                        "county": "Berlin",
                        "political_union": "European Union"
                    }
                }]
            }"#,
        )?;
        let components = response.into_components().unwrap();
        assert_eq!(components.city, "Berlin");
        assert_eq!(components.state_abbr, "BE");
        assert_eq!(components.country_code, "DE");
        assert_eq!(components.road, "Unter den Linden");
        assert_eq!(components.house_number, "77");
        Ok(())
    }

    #[test]
    fn town_falls_back_to_city_ok() -> Result {
        // language=json
        let response: GeocodeResponse = serde_json::from_str(
            r#"{"results": [{"components": {"town": "Giethoorn", "country_code": "nl"}}]}"#,
        )?;
        let components = response.into_components().unwrap();
        assert_eq!(components.city, "Giethoorn");
        assert_eq!(components.country_code, "NL");
        assert_eq!(components.state, "");
        Ok(())
    }

    #[test]
    fn country_code_upper_cased_ok() -> Result {
        // language=json
        let response: GeocodeResponse =
            serde_json::from_str(r#"{"results": [{"components": {"country_code": "us"}}]}"#)?;
        assert_eq!(response.into_components().unwrap().country_code, "US");
        Ok(())
    }

    #[test]
    fn empty_results_are_absent_ok() -> Result {
        // language=json
        let response: GeocodeResponse = serde_json::from_str(r#"{"results": []}"#)?;
        assert!(response.into_components().is_none());
        Ok(())
    }

    #[test]
    fn missing_results_are_absent_ok() -> Result {
        // language=json
        let response: GeocodeResponse = serde_json::from_str(r#"{"status": {"code": 200}}"#)?;
        assert!(response.into_components().is_none());
        Ok(())
    }

    #[test]
    fn result_without_components_is_absent_ok() -> Result {
        // language=json
        let response: GeocodeResponse =
            serde_json::from_str(r#"{"results": [{"confidence": 9}]}"#)?;
        assert!(response.into_components().is_none());
        Ok(())
    }
}
