use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::{
    position::{Coordinates, PositionSource},
    prelude::*,
};

const ENDPOINT: &str = "https://ipapi.co/json/";

/// Network-based positioning backed by an IP geolocation service.
///
/// This is the coarse tier of the accuracy spectrum: there is no high-accuracy
/// mode, so the hint is logged and otherwise ignored.
#[must_use]
#[derive(Clone)]
pub struct NetworkPositionSource(pub Client);

#[derive(Deserialize)]
struct IpLocation {
    latitude: f64,
    longitude: f64,
}

impl PositionSource for NetworkPositionSource {
    async fn acquire(&self, high_accuracy: bool, timeout: Duration) -> Result<Coordinates> {
        info!(high_accuracy, timeout_secs = timeout.as_secs(), "📡 Locating…");
        let location: IpLocation = self
            .0
            .get(ENDPOINT)
            .timeout(timeout)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("failed to parse the geolocation response")?;
        Ok(Coordinates { lat: location.latitude, lon: location.longitude })
    }
}
