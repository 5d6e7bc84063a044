pub mod opencage;

use crate::prelude::*;

/// Structured address for a reverse-geocoded position.
///
/// All nine fields are always present; a field the lookup service did not supply
/// is an empty string, never absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct AddressComponents {
    pub city: String,
    pub state_abbr: String,
    pub state: String,
    pub country: String,
    pub country_code: String,
    pub postcode: String,
    pub road: String,
    pub house_number: String,
    pub county: String,
}

impl AddressComponents {
    /// Recognized placeholder names paired with their values.
    fn fields(&self) -> [(&'static str, &str); 9] {
        [
            ("city", &self.city),
            ("state_abbr", &self.state_abbr),
            ("state", &self.state),
            ("country", &self.country),
            ("country_code", &self.country_code),
            ("postcode", &self.postcode),
            ("road", &self.road),
            ("house_number", &self.house_number),
            ("county", &self.county),
        ]
    }
}

/// Reverse-geocoding capability: coordinates in, structured address out.
///
/// `Ok(None)` means the service had no result for the position, which is not
/// a failure.
#[expect(async_fn_in_trait)]
pub trait ReverseGeocoder {
    async fn reverse(&self, lat: f64, lon: f64) -> Result<Option<AddressComponents>, LookupError>;
}

/// Transport or decode failure while talking to the lookup service.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("address lookup failed: {0:#}")]
    Request(#[from] reqwest::Error),

    #[error(transparent)]
    Other(#[from] Error),
}

/// Render `components` into `format`, substituting `{field}` placeholders.
///
/// Every occurrence of a recognized placeholder is substituted, blank fields
/// included. Unknown placeholders are left untouched, and there is no escaping
/// for literal braces.
pub fn format_address(components: &AddressComponents, format: &str) -> String {
    let mut rendered = format.to_owned();
    for (name, value) in components.fields() {
        rendered = rendered.replace(&format!("{{{name}}}"), value);
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_field_renders_empty_ok() {
        let components =
            AddressComponents { city: "Paris".to_owned(), ..AddressComponents::default() };
        assert_eq!(format_address(&components, "{city}, {state_abbr}"), "Paris, ");
    }

    #[test]
    fn repeated_placeholder_substituted_globally_ok() {
        let components =
            AddressComponents { road: "Main St".to_owned(), ..AddressComponents::default() };
        assert_eq!(format_address(&components, "{road} {road}"), "Main St Main St");
    }

    #[test]
    fn unknown_placeholder_left_untouched_ok() {
        let components =
            AddressComponents { city: "Paris".to_owned(), ..AddressComponents::default() };
        assert_eq!(format_address(&components, "{city} {unknown_field}"), "Paris {unknown_field}");
    }
}
