use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Mutex,
};

use crate::{
    frontmatter::{FrontmatterStore, LocationData},
    prelude::*,
};

/// In-memory store, for tests and dry runs.
#[derive(Default)]
#[must_use]
pub struct MemoryStore(Mutex<HashMap<PathBuf, LocationData>>);

impl MemoryStore {
    /// Last written location for the note, if any.
    pub fn location(&self, path: &Path) -> Option<LocationData> {
        self.0.lock().unwrap().get(path).cloned()
    }

    pub fn insert(&self, path: impl Into<PathBuf>, data: LocationData) {
        self.0.lock().unwrap().insert(path.into(), data);
    }
}

impl FrontmatterStore for MemoryStore {
    fn has_location(&self, path: &Path) -> Result<bool> {
        Ok(self.0.lock().unwrap().contains_key(path))
    }

    fn write_location(&self, path: &Path, data: &LocationData) -> Result {
        self.insert(path, data.clone());
        Ok(())
    }
}
