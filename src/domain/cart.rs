//! Session shopping cart.
//!
//! Pure state transitions only; persistence lives behind
//! [`crate::storage::CartStorage`] and is driven by [`crate::store::CartStore`].

use serde::{Deserialize, Serialize};

use super::catalog::{Product, Variant};
use super::value_objects::Money;

/// One product/variant entry in the cart.
///
/// Product and variant are snapshots captured at add time; later catalog
/// edits do not reach into an existing cart.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub variant: Variant,
    pub quantity: u32,
    #[serde(default)]
    pub image_id: Option<String>,
}

impl CartLine {
    pub fn unit_price(&self) -> Money {
        self.variant.effective_price(&self.product)
    }

    pub fn line_total(&self) -> Money {
        self.unit_price().multiply(self.quantity)
    }
}

/// Ordered line list, keyed by variant id: at most one line per variant.
///
/// No operation here can fail. Invalid input normalizes to a no-op or a
/// removal, and mutations report applied/no-op as a bool. Serializes
/// transparently as the bare line array, which is exactly the persisted
/// slot format.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a fully-resolved line. Re-adding a variant merges quantities into
    /// the existing line (first snapshot wins) instead of duplicating it.
    /// A zero-quantity candidate is ignored. Stock limits are the caller's
    /// concern, checked before the line is built.
    pub fn add_line(&mut self, line: CartLine) {
        if line.quantity == 0 {
            return;
        }
        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.variant.id == line.variant.id)
        {
            existing.quantity = existing.quantity.saturating_add(line.quantity);
        } else {
            self.lines.push(line);
        }
    }

    /// Remove the line for `variant_id`. Returns false if there was none.
    pub fn remove_line(&mut self, variant_id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.variant.id != variant_id);
        self.lines.len() != before
    }

    /// Set a line's quantity exactly (not additive). Anything at or below
    /// zero removes the line; zero-quantity lines never exist. Returns
    /// false if nothing changed.
    pub fn set_quantity(&mut self, variant_id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_line(variant_id);
        }
        match self.lines.iter_mut().find(|l| l.variant.id == variant_id) {
            Some(line) => {
                line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of line totals, recomputed from the lines on every call so it
    /// can never drift from them.
    pub fn total(&self) -> Money {
        let mut total = match self.lines.first() {
            Some(line) => Money::zero(line.unit_price().currency()),
            None => Money::default(),
        };
        for line in &self.lines {
            let line_total = line.line_total();
            total = total.add(&line_total).unwrap_or(total);
        }
        total
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Sku;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn product() -> Product {
        Product {
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
        }
    }

    fn variant(id: &str, override_price: Option<i64>) -> Variant {
        Variant {
            id: id.into(),
            product_id: "P1".into(),
            size: "8".into(),
            color: "Black".into(),
            sku: Sku::new(format!("CC-{id}")).unwrap(),
            stock: 10,
            price_override: override_price.map(|p| Money::inr(Decimal::from(p))),
        }
    }

    fn line(variant_id: &str, quantity: u32, override_price: Option<i64>) -> CartLine {
        CartLine {
            product: product(),
            variant: variant(variant_id, override_price),
            quantity,
            image_id: None,
        }
    }

    #[test]
    fn test_add_merges_same_variant() {
        let mut cart = Cart::new();
        cart.add_line(line("V1", 2, None));
        cart.add_line(line("V1", 3, None));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
    }

    #[test]
    fn test_add_keeps_distinct_variants_separate() {
        let mut cart = Cart::new();
        cart.add_line(line("V1", 1, None));
        cart.add_line(line("V2", 1, None));
        assert_eq!(cart.lines().len(), 2);
    }

    #[test]
    fn test_add_ignores_zero_quantity() {
        let mut cart = Cart::new();
        cart.add_line(line("V1", 0, None));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_is_noop_for_unknown_variant() {
        let mut cart = Cart::new();
        cart.add_line(line("V1", 1, None));
        assert!(!cart.remove_line("V9"));
        assert!(cart.remove_line("V1"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_floor_removes_line() {
        let mut cart = Cart::new();
        cart.add_line(line("V1", 2, None));
        assert!(cart.set_quantity("V1", 0));
        assert!(cart.is_empty());

        cart.add_line(line("V1", 2, None));
        assert!(cart.set_quantity("V1", -3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_is_exact_not_additive() {
        let mut cart = Cart::new();
        cart.add_line(line("V1", 2, None));
        assert!(cart.set_quantity("V1", 7));
        assert_eq!(cart.lines()[0].quantity, 7);
        assert!(!cart.set_quantity("V9", 7));
    }

    #[test]
    fn test_total_uses_override_then_base_price() {
        let mut cart = Cart::new();
        cart.add_line(line("V1", 2, Some(500)));
        cart.add_line(line("V2", 1, None));
        // 2 * 500 + 1 * 2500
        assert_eq!(cart.total().amount(), Decimal::from(3500));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_override_price_then_quantity_floor() {
        let mut cart = Cart::new();
        cart.add_line(line("V1", 2, Some(500)));
        assert_eq!(cart.total().amount(), Decimal::from(1000));
        assert_eq!(cart.item_count(), 2);
        cart.set_quantity("V1", 0);
        assert!(cart.is_empty());
        assert_eq!(cart.total().amount(), Decimal::ZERO);
    }

    #[test]
    fn test_total_matches_independent_recomputation() {
        let mut cart = Cart::new();
        cart.add_line(line("V1", 3, Some(750)));
        cart.add_line(line("V2", 1, None));
        cart.add_line(line("V3", 4, Some(1200)));
        cart.set_quantity("V2", 6);
        cart.remove_line("V3");
        cart.add_line(line("V1", 1, Some(750)));

        let expected: Decimal = cart
            .lines()
            .iter()
            .map(|l| l.unit_price().amount() * Decimal::from(l.quantity))
            .sum();
        assert_eq!(cart.total().amount(), expected);
    }

    #[test]
    fn test_serializes_as_bare_array() {
        let mut cart = Cart::new();
        cart.add_line(line("V1", 1, None));
        let json = serde_json::to_string(&cart).unwrap();
        assert!(json.starts_with('['));
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back.lines().len(), 1);
    }
}
