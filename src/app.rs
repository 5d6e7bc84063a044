use std::path::Path;

use bon::Builder;

use crate::{
    frontmatter::{FrontmatterStore, LocationData},
    geocode::{ReverseGeocoder, format_address},
    position::{self, PositionError, PositionSource},
    prelude::*,
    settings::Settings,
};

/// Wires the settings and collaborators together and drives the two flows.
///
/// Generic over the store, the sensing capability and the geocoder so that
/// every seam takes an interchangeable implementation.
#[derive(Builder)]
#[must_use]
pub struct App<S, P, G> {
    settings: Settings,
    store: S,
    source: Option<P>,
    geocoder: Option<G>,
}

impl<S, P, G> App<S, P, G>
where
    S: FrontmatterStore,
    P: PositionSource,
    G: ReverseGeocoder,
{
    /// Manual flow: stamp the note, consulting `confirm` before overwriting
    /// existing location data.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub async fn add_location(
        &self,
        path: &Path,
        confirm: impl FnOnce() -> Result<bool>,
    ) -> Result {
        if self.store.has_location(path)? && !confirm()? {
            info!("Keeping the existing location");
            return Ok(());
        }
        self.stamp(path).await
    }

    /// Create-trigger flow: stamp a newly created note when it falls under an
    /// auto-add folder and does not carry location data yet.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub async fn auto_add_location(&self, path: &Path) -> Result {
        if !self.settings.is_auto_add_path(&path.to_string_lossy()) {
            debug!("Not under an auto-add folder, skipping");
            return Ok(());
        }
        if self.store.has_location(path)? {
            debug!("Already has location data, skipping");
            return Ok(());
        }
        self.stamp(path).await
    }

    /// Resolve the full location artifact: position first, then the optional
    /// formatted address when an API key is configured.
    ///
    /// A lookup failure propagates to the caller; nothing is written in that
    /// case, so a note never ends up with partially applied state.
    pub async fn resolve_location(&self) -> Result<LocationData> {
        let source = self.source.as_ref().ok_or(PositionError::Unsupported)?;
        let position = position::current_position(source).await?;
        let address = match &self.geocoder {
            Some(geocoder) => geocoder
                .reverse(position.lat, position.lon)
                .await?
                .map(|components| format_address(&components, &self.settings.address_format)),
            None => None,
        };
        Ok(LocationData::builder()
            .lat(position.lat)
            .lon(position.lon)
            .maybe_address(address)
            .build())
    }

    async fn stamp(&self, path: &Path) -> Result {
        let location = self.resolve_location().await?;
        self.store.write_location(path, &location)?;
        info!(
            location.lat,
            location.lon,
            address = location.address.as_deref().unwrap_or_default(),
            "📍 Location added",
        );
        Ok(())
    }
}
