use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::product::ProductView;

/// Current schema version of the persisted snapshot.
pub const SNAPSHOT_VERSION: u32 = 2;

/// The durable subset of catalog state: liked/deleted id sets and locally
/// created items. Everything else (remote items, filters, request status)
/// starts from defaults on every session.
///
/// Id sets are stored as arrays because JSON has no set type; the loader
/// converts them back with [`StoredCatalog::liked_set`] /
/// [`StoredCatalog::deleted_set`]. Custom item order is significant
/// (newest first) and preserved as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCatalog {
    pub version: u32,
    #[serde(default)]
    pub liked_ids: Vec<i64>,
    #[serde(default)]
    pub deleted_ids: Vec<i64>,
    #[serde(default)]
    pub custom_items: Vec<ProductView>,
}

impl StoredCatalog {
    pub fn new(
        liked_ids: &HashSet<i64>,
        deleted_ids: &HashSet<i64>,
        custom_items: Vec<ProductView>,
    ) -> Self {
        let mut liked: Vec<i64> = liked_ids.iter().copied().collect();
        let mut deleted: Vec<i64> = deleted_ids.iter().copied().collect();
        // Deterministic output keeps repeated saves byte-identical.
        liked.sort_unstable();
        deleted.sort_unstable();
        Self {
            version: SNAPSHOT_VERSION,
            liked_ids: liked,
            deleted_ids: deleted,
            custom_items,
        }
    }

    /// A snapshot written by a newer client than this one is not trusted.
    /// Older versions are accepted as-is; the array-of-ids representation
    /// has been stable since version 1.
    pub fn is_loadable(&self) -> bool {
        self.version <= SNAPSHOT_VERSION
    }

    pub fn liked_set(&self) -> HashSet<i64> {
        self.liked_ids.iter().copied().collect()
    }

    pub fn deleted_set(&self) -> HashSet<i64> {
        self.deleted_ids.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::CreateProductInput;

    fn custom_item(id: i64, title: &str) -> ProductView {
        CreateProductInput {
            title: title.to_string(),
            description: "handmade".to_string(),
            price: 10.0,
            category: "misc".to_string(),
            brand: "me".to_string(),
            thumbnail: "https://example.com/x.png".to_string(),
        }
        .into_view(id)
    }

    #[test]
    fn round_trip_preserves_set_membership_and_item_order() {
        let liked: HashSet<i64> = [3, 1, 2].into_iter().collect();
        let deleted: HashSet<i64> = [4].into_iter().collect();
        let items = vec![custom_item(-2, "second"), custom_item(-1, "first")];

        let snapshot = StoredCatalog::new(&liked, &deleted, items.clone());
        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: StoredCatalog = serde_json::from_str(&json).unwrap();

        assert!(restored.is_loadable());
        assert_eq!(restored.liked_set(), liked);
        assert_eq!(restored.deleted_set(), deleted);
        assert_eq!(restored.custom_items, items);
    }

    #[test]
    fn sets_are_order_independent_on_load() {
        let json = r#"{"version":2,"likedIds":[9,1,5],"deletedIds":[],"customItems":[]}"#;
        let snapshot: StoredCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.liked_set(), [1, 5, 9].into_iter().collect());
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let snapshot: StoredCatalog = serde_json::from_str(r#"{"version":1}"#).unwrap();
        assert!(snapshot.is_loadable());
        assert!(snapshot.liked_set().is_empty());
        assert!(snapshot.custom_items.is_empty());
    }

    #[test]
    fn snapshot_from_the_future_is_rejected() {
        let snapshot: StoredCatalog = serde_json::from_str(r#"{"version":99}"#).unwrap();
        assert!(!snapshot.is_loadable());
    }
}
