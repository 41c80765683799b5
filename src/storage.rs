//! Cart persistence adapters.
//!
//! The browser held the cart in a single local-storage slot; here the slot
//! is a pluggable adapter so the cart store can be tested without touching
//! disk. Loading is best-effort by contract: missing or malformed data
//! answers `None` and the session starts with an empty cart instead of
//! failing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::cart::Cart;

pub trait CartStorage {
    /// Previously saved cart, or `None` when the slot is empty or unreadable.
    fn load(&self) -> Option<Cart>;

    /// Overwrite the slot with the full serialized cart.
    fn save(&mut self, cart: &Cart) -> Result<(), StorageError>;
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not write cart slot: {0}")]
    Io(#[from] io::Error),
    #[error("could not serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// In-process slot for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the slot with a raw payload, valid or not.
    #[cfg(test)]
    fn with_payload(payload: impl Into<String>) -> Self {
        Self { slot: Some(payload.into()) }
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Option<Cart> {
        self.slot.as_deref().and_then(|raw| serde_json::from_str(raw).ok())
    }

    fn save(&mut self, cart: &Cart) -> Result<(), StorageError> {
        self.slot = Some(serde_json::to_string(cart)?);
        Ok(())
    }
}

/// One named JSON file holding the serialized cart line list.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> Option<Cart> {
        let raw = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&raw).ok()
    }

    fn save(&mut self, cart: &Cart) -> Result<(), StorageError> {
        let raw = serde_json::to_string(cart)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::CartLine;
    use crate::domain::catalog::{Product, Variant};
    use crate::domain::value_objects::{Money, Sku};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn one_line_cart() -> Cart {
        let product = Product {
            id: "P1".into(),
            name: "Court Classic".into(),
            slug: "court-classic".into(),
            description: String::new(),
            base_price: Money::inr(Decimal::from(2500)),
            is_active: true,
            category_id: None,
            brand_id: None,
            featured: false,
            created_at: Utc::now(),
        };
        let variant = Variant {
            id: "V1".into(),
            product_id: "P1".into(),
            size: "8".into(),
            color: "Black".into(),
            sku: Sku::new("CC-BK-8").unwrap(),
            stock: 5,
            price_override: None,
        };
        let mut cart = Cart::new();
        cart.add_line(CartLine { product, variant, quantity: 2, image_id: Some("img1".into()) });
        cart
    }

    #[test]
    fn test_memory_round_trip() {
        let mut storage = MemoryStorage::new();
        assert!(storage.load().is_none());
        storage.save(&one_line_cart()).unwrap();
        let loaded = storage.load().unwrap();
        assert_eq!(loaded.lines().len(), 1);
        assert_eq!(loaded.lines()[0].quantity, 2);
    }

    #[test]
    fn test_malformed_payload_loads_as_none() {
        let storage = MemoryStorage::with_payload("{not json");
        assert!(storage.load().is_none());
        let storage = MemoryStorage::with_payload(r#"{"wrong": "shape"}"#);
        assert!(storage.load().is_none());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonFileStorage::new(dir.path().join("cart.json"));
        assert!(storage.load().is_none());
        storage.save(&one_line_cart()).unwrap();
        let loaded = storage.load().unwrap();
        assert_eq!(loaded.lines()[0].image_id.as_deref(), Some("img1"));
    }

    #[test]
    fn test_corrupt_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        fs::write(&path, "][").unwrap();
        let storage = JsonFileStorage::new(&path);
        assert!(storage.load().is_none());
    }
}
