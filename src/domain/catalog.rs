//! Typed records for the catalog documents served by the external backend.
//!
//! The backend hands out loosely-typed documents; everything is mapped into
//! these records once at the boundary (serde defaults for optional fields,
//! SKU validation) so the rest of the crate never touches raw payloads.
//! Records captured into a cart are treated as immutable snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{Money, Sku};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub base_price: Money,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub brand_id: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

/// One purchasable size/color combination of a product.
///
/// SKU uniqueness within a product is enforced by the backend, not here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Variant {
    pub id: String,
    pub product_id: String,
    pub size: String,
    pub color: String,
    pub sku: Sku,
    /// Units available. Zero means out of stock, not unlisted.
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub price_override: Option<Money>,
}

impl Variant {
    /// Price the customer pays for this variant of `product`: the override
    /// when one is set, the product's base price otherwise.
    pub fn effective_price(&self, product: &Product) -> Money {
        self.price_override
            .clone()
            .unwrap_or_else(|| product.base_price.clone())
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: String,
    pub product_id: String,
    pub image_id: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub position: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_id: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub logo_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub product_id: String,
    pub user_id: String,
    pub user_name: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// URL slug for a product, category, or brand name: lowercased, word
/// characters kept, runs of whitespace and hyphens collapsed to one hyphen.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == '_' {
            slug.push(c);
        } else if (c.is_whitespace() || c == '-') && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(base: i64) -> Product {
        Product {
            id: "P1".into(),
            name: "Court Classic".into(),
            slug: "court-classic".into(),
            description: String::new(),
            base_price: Money::inr(Decimal::from(base)),
            is_active: true,
            category_id: None,
            brand_id: None,
            featured: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_effective_price_prefers_override() {
        let p = product(2500);
        let v = Variant {
            id: "V1".into(),
            product_id: "P1".into(),
            size: "8".into(),
            color: "Black".into(),
            sku: Sku::new("CC-BK-8").unwrap(),
            stock: 3,
            price_override: Some(Money::inr(Decimal::from(1999))),
        };
        assert_eq!(v.effective_price(&p).amount(), Decimal::from(1999));
    }

    #[test]
    fn test_effective_price_falls_back_to_base() {
        let p = product(2500);
        let v = Variant {
            id: "V1".into(),
            product_id: "P1".into(),
            size: "8".into(),
            color: "Black".into(),
            sku: Sku::new("CC-BK-8").unwrap(),
            stock: 3,
            price_override: None,
        };
        assert_eq!(v.effective_price(&p).amount(), Decimal::from(2500));
    }

    #[test]
    fn test_variant_ingress_defaults() {
        let json = r#"{
            "id": "V1",
            "product_id": "P1",
            "size": "9",
            "color": "White",
            "sku": "cc-wh-9"
        }"#;
        let v: Variant = serde_json::from_str(json).unwrap();
        assert_eq!(v.stock, 0);
        assert!(v.price_override.is_none());
        assert_eq!(v.sku.as_str(), "CC-WH-9");
        assert!(!v.in_stock());
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Air Max 90"), "air-max-90");
        assert_eq!(slugify("  Runner's Choice -- V2  "), "runners-choice-v2");
        assert_eq!(slugify("Trail_Pro"), "trail_pro");
    }
}
