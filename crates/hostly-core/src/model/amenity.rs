// ── Amenity catalog ──
//
// The amenity catalog is global: properties and rooms store only id
// subsets, and display names resolve through one shared lookup.

use std::collections::HashMap;
use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmenityFeature {
    pub id: i64,
    pub name: String,
    pub active: bool,
}

/// Lock-free cached view of the global amenity catalog.
///
/// Replaced wholesale on refresh; readers resolve names against whatever
/// snapshot is current without blocking.
#[derive(Debug, Default)]
pub struct AmenityCatalog {
    features: ArcSwap<Vec<AmenityFeature>>,
}

impl AmenityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached catalog with a fresh fetch.
    pub fn replace(&self, features: Vec<AmenityFeature>) {
        self.features.store(Arc::new(features));
    }

    /// Current catalog snapshot (cheap, lock-free).
    pub fn snapshot(&self) -> Arc<Vec<AmenityFeature>> {
        self.features.load_full()
    }

    /// True once a catalog has been loaded.
    pub fn is_loaded(&self) -> bool {
        !self.features.load().is_empty()
    }

    /// Resolve a single amenity name.
    pub fn name_of(&self, id: i64) -> Option<String> {
        self.features
            .load()
            .iter()
            .find(|f| f.id == id)
            .map(|f| f.name.clone())
    }

    /// Resolve a set of ids to names, skipping ids the catalog doesn't
    /// know (stale references on old records).
    pub fn resolve_names(&self, ids: &[i64]) -> Vec<String> {
        let snapshot = self.features.load();
        let by_id: HashMap<i64, &str> = snapshot.iter().map(|f| (f.id, f.name.as_str())).collect();
        ids.iter()
            .filter_map(|id| by_id.get(id).map(|n| (*n).to_owned()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> AmenityCatalog {
        let cat = AmenityCatalog::new();
        cat.replace(vec![
            AmenityFeature {
                id: 2,
                name: "Wifi".into(),
                active: true,
            },
            AmenityFeature {
                id: 5,
                name: "Pool".into(),
                active: true,
            },
        ]);
        cat
    }

    #[test]
    fn resolves_known_ids_in_order() {
        assert_eq!(catalog().resolve_names(&[5, 2]), vec!["Pool", "Wifi"]);
    }

    #[test]
    fn skips_unknown_ids() {
        assert_eq!(catalog().resolve_names(&[2, 99]), vec!["Wifi"]);
    }

    #[test]
    fn empty_catalog_is_not_loaded() {
        assert!(!AmenityCatalog::new().is_loaded());
        assert!(catalog().is_loaded());
    }
}
