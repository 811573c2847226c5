//! Shared, swappable reference to the current catalog
//!
//! Readers take an `Arc` snapshot and keep querying it even if a reload
//! installs a newer catalog in the meantime.

use super::StationCatalog;
use std::sync::{Arc, RwLock};
use tracing::info;

/// Holder for the active catalog that supports wholesale replacement
#[derive(Debug)]
pub struct CatalogHandle {
    current: RwLock<Arc<StationCatalog>>,
}

impl CatalogHandle {
    pub fn new(catalog: StationCatalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Snapshot of the active catalog
    pub fn snapshot(&self) -> Arc<StationCatalog> {
        // The guarded value is a plain Arc, so a poisoned lock still holds a valid catalog
        let guard = self
            .current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// Install a new catalog and return the one it replaced
    pub fn replace(&self, catalog: StationCatalog) -> Arc<StationCatalog> {
        let incoming = Arc::new(catalog);
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        info!(
            "Replacing station catalog: {} -> {} stations",
            guard.station_count(),
            incoming.station_count()
        );
        std::mem::replace(&mut *guard, incoming)
    }
}

impl From<StationCatalog> for CatalogHandle {
    fn from(catalog: StationCatalog) -> Self {
        Self::new(catalog)
    }
}
