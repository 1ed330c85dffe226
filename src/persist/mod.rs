//! Pluggable cart snapshot persistence.
//!
//! The cart actor treats durable storage as an injected collaborator: it
//! loads one snapshot when it starts and writes the whole line sequence
//! back after every effective mutation. Swapping implementations never
//! touches cart logic; [`NoopSnapshotStore`] disables persistence,
//! [`MemorySnapshotStore`] keeps it process-local for tests, and
//! [`JsonFileStore`] writes a single JSON document.
//!
//! There is no versioning or migration: the snapshot is overwritten
//! wholesale, and an absent snapshot means an empty cart.

use crate::model::CartLineItem;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::fs;
use tokio::sync::Mutex;

/// Failures while reading or writing a snapshot.
///
/// The cart actor logs these and keeps going; in-memory state stays
/// authoritative.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding error: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Storage seam for the cart line sequence.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// The previously saved sequence, or `None` when nothing was saved.
    async fn load(&self) -> Result<Option<Vec<CartLineItem>>, SnapshotError>;

    /// Overwrite the stored sequence wholesale.
    async fn save(&self, items: &[CartLineItem]) -> Result<(), SnapshotError>;
}

/// Persistence disabled: loads nothing, saves nowhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSnapshotStore;

#[async_trait]
impl SnapshotStore for NoopSnapshotStore {
    async fn load(&self) -> Result<Option<Vec<CartLineItem>>, SnapshotError> {
        Ok(None)
    }

    async fn save(&self, _items: &[CartLineItem]) -> Result<(), SnapshotError> {
        Ok(())
    }
}

/// Process-local snapshot cell. Clones share the same cell, so a test can
/// keep one handle and give another to the actor.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    cell: Arc<Mutex<Option<Vec<CartLineItem>>>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn load(&self) -> Result<Option<Vec<CartLineItem>>, SnapshotError> {
        Ok(self.cell.lock().await.clone())
    }

    async fn save(&self, items: &[CartLineItem]) -> Result<(), SnapshotError> {
        *self.cell.lock().await = Some(items.to_vec());
        Ok(())
    }
}

/// One JSON document at a fixed path, overwritten on every save. A
/// missing file loads as `None`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnapshotStore for JsonFileStore {
    async fn load(&self) -> Result<Option<Vec<CartLineItem>>, SnapshotError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SnapshotError::Io(e)),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    async fn save(&self, items: &[CartLineItem]) -> Result<(), SnapshotError> {
        let json = serde_json::to_vec_pretty(items)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    fn line(id: u32, quantity: u32) -> CartLineItem {
        CartLineItem {
            id: ProductId(id),
            title: format!("Item {id}"),
            category: "tools".to_string(),
            image: None,
            price: 4.5,
            quantity,
        }
    }

    #[test]
    fn snapshot_layout_is_the_six_field_tuple() {
        let item = CartLineItem {
            id: ProductId(3),
            title: "Widget".to_string(),
            category: "tools".to_string(),
            image: None,
            price: 4.5,
            quantity: 2,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 3,
                "title": "Widget",
                "category": "tools",
                "image": null,
                "price": 4.5,
                "quantity": 2,
            })
        );
    }

    #[tokio::test]
    async fn memory_store_round_trips_in_order() {
        let store = MemorySnapshotStore::new();
        assert!(store.load().await.unwrap().is_none());

        let items = vec![line(1, 2), line(2, 1)];
        store.save(&items).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(items));
    }

    #[tokio::test]
    async fn file_store_round_trips_and_treats_absence_as_none() {
        let path = std::env::temp_dir().join(format!(
            "storefront-snapshot-roundtrip-{}.json",
            std::process::id()
        ));
        let _ = tokio::fs::remove_file(&path).await;

        let store = JsonFileStore::new(&path);
        assert!(store.load().await.unwrap().is_none());

        let items = vec![line(7, 3)];
        store.save(&items).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(items));

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
