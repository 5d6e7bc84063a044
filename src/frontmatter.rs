pub mod file;
pub mod memory;

use std::path::Path;

use bon::Builder;

use crate::prelude::*;

/// Location payload merged into a note's metadata header.
#[derive(Builder, Clone, Debug, PartialEq)]
#[must_use]
pub struct LocationData {
    pub lat: f64,
    pub lon: f64,

    #[builder(into)]
    pub address: Option<String>,
}

/// Read-modify-write access to a note's metadata header.
///
/// The store owns the consistency of the underlying medium; callers hand it a
/// fully resolved [`LocationData`] and never partially applied state.
pub trait FrontmatterStore {
    /// Whether the note already carries location data (a `lat` or `lon` key).
    fn has_location(&self, path: &Path) -> Result<bool>;

    /// Set `lat`, `lon` and, when present, `address`, preserving everything else.
    fn write_location(&self, path: &Path, data: &LocationData) -> Result;
}
