//! The session cart store.
//!
//! Owns the cart for one session and writes it through to its storage slot
//! after every mutation. Constructed at session start and injectable, so
//! the same code drives the real storefront and the unit tests. Two stores
//! sharing one slot are last-write-wins; there is no cross-store
//! coordination.

use tracing::{debug, warn};

use crate::domain::cart::{Cart, CartLine};
use crate::domain::value_objects::Money;
use crate::storage::CartStorage;

pub struct CartStore {
    cart: Cart,
    storage: Box<dyn CartStorage>,
}

impl CartStore {
    /// Open a store over `storage`, rehydrating any previously saved cart.
    /// An empty or unreadable slot starts an empty cart.
    pub fn open(storage: Box<dyn CartStorage>) -> Self {
        let cart = storage.load().unwrap_or_default();
        if !cart.is_empty() {
            debug!(lines = cart.lines().len(), "cart rehydrated");
        }
        Self { cart, storage }
    }

    pub fn add_line(&mut self, line: CartLine) {
        debug!(variant = %line.variant.id, quantity = line.quantity, "cart add");
        self.cart.add_line(line);
        self.persist();
    }

    pub fn remove_line(&mut self, variant_id: &str) -> bool {
        let removed = self.cart.remove_line(variant_id);
        if removed {
            debug!(variant = variant_id, "cart remove");
        }
        self.persist();
        removed
    }

    pub fn set_quantity(&mut self, variant_id: &str, quantity: i64) -> bool {
        let applied = self.cart.set_quantity(variant_id, quantity);
        if applied {
            debug!(variant = variant_id, quantity, "cart quantity set");
        }
        self.persist();
        applied
    }

    /// Empty the cart, e.g. after the backend accepts the order.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    pub fn total(&self) -> Money {
        self.cart.total()
    }

    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    // Persistence is best-effort: a failed write is logged and the
    // in-memory cart stays authoritative for the session.
    fn persist(&mut self) {
        if let Err(err) = self.storage.save(&self.cart) {
            warn!(error = %err, "cart persist failed");
        }
    }
}
