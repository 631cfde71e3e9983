use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    error::{AppError, Result},
    models::Product,
    storage::KeyValueStore,
};

/// Serialized override entry: string-encoded product id to ordered image list.
pub type StoredOverrides = BTreeMap<String, Vec<String>>;

/// Owns every read and write of the image overrides and produces the
/// effective catalog from the compiled-in defaults.
pub struct CatalogStore {
    defaults: Vec<Product>,
    storage: Arc<dyn KeyValueStore>,
    overrides_key: String,
    /// Serializes the read-modify-write of the override entry.
    write_lock: Mutex<()>,
}

impl CatalogStore {
    pub fn new(
        defaults: Vec<Product>,
        storage: Arc<dyn KeyValueStore>,
        overrides_key: impl Into<String>,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        for product in &defaults {
            if !seen.insert(product.id) {
                return Err(AppError::ConfigError(format!(
                    "duplicate product id {} in default catalog",
                    product.id
                )));
            }
            product.validate().map_err(AppError::ConfigError)?;
        }

        Ok(Self {
            defaults,
            storage,
            overrides_key: overrides_key.into(),
            write_lock: Mutex::new(()),
        })
    }

    pub fn defaults(&self) -> &[Product] {
        &self.defaults
    }

    pub fn default_product(&self, id: i32) -> Option<&Product> {
        self.defaults.iter().find(|p| p.id == id)
    }

    pub async fn check_health(&self) -> Result<()> {
        self.storage.check_health().await
    }

    /// Default catalog with stored image overrides applied. Never fails: an
    /// unreadable or malformed entry means no overrides.
    pub async fn load_products(&self) -> Vec<Product> {
        let overrides = self.effective_overrides().await;

        self.defaults
            .iter()
            .map(|product| match overrides.get(&product.id) {
                Some(images) => product.with_images(images.clone()),
                None => product.clone(),
            })
            .collect()
    }

    pub async fn find_product(&self, id: i32) -> Option<Product> {
        let default = self.default_product(id)?;

        match self.effective_overrides().await.remove(&id) {
            Some(images) => Some(default.with_images(images)),
            None => Some(default.clone()),
        }
    }

    /// Persist `images` as the override for `id`. Returns `false` without
    /// writing when the list is empty, the id is unknown, or the existing entry
    /// cannot be read; returns `false` as well when the write fails.
    pub async fn update_product_images(&self, id: i32, images: Vec<String>) -> bool {
        if images.is_empty() {
            tracing::warn!(product_id = id, "Rejected empty image list");
            return false;
        }

        if self.default_product(id).is_none() {
            tracing::warn!(product_id = id, "Rejected image update for unknown product");
            return false;
        }

        let _guard = self.write_lock.lock().await;

        // A malformed entry is replaced; an unreadable one must not be overwritten.
        let mut stored = match self.read_stored().await {
            Ok(stored) => stored.unwrap_or_default(),
            Err(e) => {
                tracing::error!(product_id = id, "Image overrides unreadable, update aborted: {}", e);
                return false;
            }
        };
        let count = images.len();
        stored.insert(id.to_string(), images);

        let serialized = match serde_json::to_string(&stored) {
            Ok(serialized) => serialized,
            Err(e) => {
                tracing::error!("Failed to serialize image overrides: {}", e);
                return false;
            }
        };

        match self.storage.set_item(&self.overrides_key, &serialized).await {
            Ok(()) => {
                tracing::info!(product_id = id, images = count, "Product images updated");
                true
            }
            Err(e) => {
                tracing::error!(product_id = id, "Failed to persist image overrides: {}", e);
                false
            }
        }
    }

    /// Stored entry. `Ok(None)` when absent or not of the expected shape,
    /// `Err` when the storage itself could not be read.
    async fn read_stored(&self) -> Result<Option<StoredOverrides>> {
        let Some(raw) = self.storage.get_item(&self.overrides_key).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<StoredOverrides>(&raw) {
            Ok(stored) => Ok(Some(stored)),
            Err(e) => {
                tracing::warn!("Image overrides malformed, using defaults: {}", e);
                Ok(None)
            }
        }
    }

    async fn effective_overrides(&self) -> HashMap<i32, Vec<String>> {
        let stored = match self.read_stored().await {
            Ok(Some(stored)) => stored,
            Ok(None) => return HashMap::new(),
            Err(e) => {
                tracing::warn!("Image overrides unreadable, using defaults: {}", e);
                return HashMap::new();
            }
        };

        stored
            .into_iter()
            .filter_map(|(key, images)| {
                let id = key.parse::<i32>().ok()?;
                (!images.is_empty()).then_some((id, images))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::storage::MemoryStorage;

    /// Memory-backed storage whose reads can be switched to fail and which
    /// yields between read and return so concurrent updates interleave.
    #[derive(Default)]
    struct UnreliableStorage {
        inner: MemoryStorage,
        fail_reads: AtomicBool,
    }

    #[async_trait]
    impl KeyValueStore for UnreliableStorage {
        async fn get_item(&self, key: &str) -> Result<Option<String>> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(AppError::InternalError("disk unavailable".to_string()));
            }
            let value = self.inner.get_item(key).await;
            tokio::task::yield_now().await;
            value
        }

        async fn set_item(&self, key: &str, value: &str) -> Result<()> {
            self.inner.set_item(key, value).await
        }
    }

    const KEY: &str = "test.productImages";

    fn product(id: i32, category: &str, image: &str) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            description: String::new(),
            image: image.to_string(),
            images: None,
            category: category.to_string(),
            subcategories: vec![],
            capacity: None,
            weight: None,
            seasonality: None,
        }
    }

    fn fixture() -> (CatalogStore, MemoryStorage) {
        let storage = MemoryStorage::new();
        let defaults = vec![
            product(1, "Tents", "tent.jpg"),
            product(3, "Shade Structures", "a.jpg"),
        ];
        let store = CatalogStore::new(defaults, Arc::new(storage.clone()), KEY).unwrap();
        (store, storage)
    }

    fn images(paths: &[&str]) -> Vec<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[tokio::test]
    async fn without_overrides_defaults_are_returned_verbatim() {
        let (store, _) = fixture();
        assert_eq!(store.load_products().await, store.defaults().to_vec());
    }

    #[tokio::test]
    async fn override_replaces_images_and_cover() {
        let (store, _) = fixture();

        assert!(store.update_product_images(3, images(&["x.jpg", "y.jpg"])).await);

        let products = store.load_products().await;
        let shade = products.iter().find(|p| p.id == 3).unwrap();
        assert_eq!(shade.image, "x.jpg");
        assert_eq!(shade.images, Some(images(&["x.jpg", "y.jpg"])));

        let tent = products.iter().find(|p| p.id == 1).unwrap();
        assert_eq!(tent, store.default_product(1).unwrap());
    }

    #[tokio::test]
    async fn empty_list_is_rejected_and_keeps_previous_override() {
        let (store, storage) = fixture();
        assert!(store.update_product_images(1, images(&["keep.jpg"])).await);

        assert!(!store.update_product_images(1, vec![]).await);

        let raw = storage.get_item(KEY).await.unwrap().unwrap();
        assert_eq!(raw, r#"{"1":["keep.jpg"]}"#);
        assert_eq!(store.find_product(1).await.unwrap().image, "keep.jpg");
    }

    #[tokio::test]
    async fn unknown_id_is_rejected_without_writing() {
        let (store, storage) = fixture();

        assert!(!store.update_product_images(99, images(&["x.jpg"])).await);
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn corrupted_entry_falls_back_to_defaults() {
        let (store, storage) = fixture();
        storage.set_item(KEY, r#"["not", "a", "map"]"#).await.unwrap();

        assert_eq!(store.load_products().await, store.defaults().to_vec());

        storage.set_item(KEY, "{not json").await.unwrap();
        assert_eq!(store.load_products().await, store.defaults().to_vec());
    }

    #[tokio::test]
    async fn save_over_corrupted_entry_starts_fresh() {
        let (store, storage) = fixture();
        storage.set_item(KEY, "42").await.unwrap();

        assert!(store.update_product_images(1, images(&["new.jpg"])).await);
        assert_eq!(
            storage.get_item(KEY).await.unwrap().as_deref(),
            Some(r#"{"1":["new.jpg"]}"#)
        );
    }

    #[tokio::test]
    async fn bad_entries_are_skipped_individually() {
        let (store, storage) = fixture();
        storage
            .set_item(KEY, r#"{"abc":["x.jpg"],"1":[],"3":["b.jpg"],"77":["z.jpg"]}"#)
            .await
            .unwrap();

        let products = store.load_products().await;
        assert_eq!(products.len(), 2);
        assert_eq!(products[0], store.default_product(1).unwrap().clone());
        assert_eq!(products[1].image, "b.jpg");
    }

    #[tokio::test]
    async fn unreadable_storage_aborts_update_and_keeps_other_overrides() {
        let storage = Arc::new(UnreliableStorage::default());
        let defaults = vec![product(1, "Tents", "d.jpg"), product(2, "Tents", "e.jpg")];
        let store = CatalogStore::new(defaults, storage.clone(), KEY).unwrap();

        assert!(store.update_product_images(1, images(&["one.jpg"])).await);

        storage.fail_reads.store(true, Ordering::SeqCst);
        assert!(!store.update_product_images(2, images(&["two.jpg"])).await);
        assert_eq!(store.load_products().await, store.defaults().to_vec());

        storage.fail_reads.store(false, Ordering::SeqCst);
        assert_eq!(
            storage.inner.get_item(KEY).await.unwrap().as_deref(),
            Some(r#"{"1":["one.jpg"]}"#)
        );
        assert_eq!(store.find_product(1).await.unwrap().image, "one.jpg");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_updates_keep_every_override() {
        let defaults = (1..=8).map(|id| product(id, "Tents", "d.jpg")).collect();
        let store = Arc::new(
            CatalogStore::new(defaults, Arc::new(UnreliableStorage::default()), KEY).unwrap(),
        );

        let handles: Vec<_> = (1..=8)
            .map(|id| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .update_product_images(id, vec![format!("{}.jpg", id)])
                        .await
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.await.unwrap());
        }

        for product in store.load_products().await {
            assert_eq!(product.image, format!("{}.jpg", product.id));
        }
    }

    #[test]
    fn duplicate_default_ids_are_a_config_error() {
        let result = CatalogStore::new(
            vec![product(1, "Tents", "a.jpg"), product(1, "Tents", "b.jpg")],
            Arc::new(MemoryStorage::new()),
            KEY,
        );
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }
}
