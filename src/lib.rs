//! Storefront core for a footwear retailer.
//!
//! The heavy lifting of the shop (catalog queries, auth, file storage,
//! order persistence) lives in an external document backend; this crate
//! carries the client-side logic worth getting exactly right:
//!
//! - Typed records for the backend's catalog documents
//! - The session shopping cart: merge-on-add, quantity floors, derived
//!   totals, best-effort local persistence
//! - Size/color variant resolution for the product page
//! - Checkout order drafts with the free-shipping rule
//! - Catalog filtering and sorting
//!
//! ## Example
//!
//! ```
//! use solestore_core::{CartStore, MemoryStorage, OrderDraft, VariantSelection};
//! # use solestore_core::{CartLine, Money, Product, Sku, Variant};
//! # use chrono::Utc;
//! # use rust_decimal::Decimal;
//! # let product = Product {
//! #     id: "P1".into(), name: "Court Classic".into(), slug: "court-classic".into(),
//! #     description: String::new(), base_price: Money::inr(Decimal::from(2500)),
//! #     is_active: true, category_id: None, brand_id: None, featured: false,
//! #     created_at: Utc::now(),
//! # };
//! # let variants = vec![Variant {
//! #     id: "V1".into(), product_id: "P1".into(), size: "8".into(), color: "Black".into(),
//! #     sku: Sku::new("CC-BK-8").unwrap(), stock: 3, price_override: None,
//! # }];
//! let mut selection = VariantSelection::new();
//! selection.toggle_size(&variants, "8");
//! selection.toggle_color(&variants, "Black");
//! let resolved = selection.resolution(&product, &variants).unwrap();
//! assert!(resolved.can_add(2));
//!
//! let mut cart = CartStore::open(Box::new(MemoryStorage::new()));
//! cart.add_line(CartLine {
//!     product,
//!     variant: resolved.variant.clone(),
//!     quantity: 2,
//!     image_id: None,
//! });
//! assert_eq!(cart.item_count(), 2);
//! ```

pub mod domain;
pub mod filter;
pub mod selection;
pub mod storage;
pub mod store;

pub use domain::cart::{Cart, CartLine};
pub use domain::catalog::{slugify, Brand, Category, Product, ProductImage, Review, Variant};
pub use domain::order::{
    shipping_cost, CheckoutError, OrderDraft, OrderLine, OrderStatus, ShippingDetails,
    FLAT_SHIPPING_FEE, FREE_SHIPPING_THRESHOLD,
};
pub use domain::value_objects::{Money, MoneyError, Sku, SkuError, STORE_CURRENCY};
pub use filter::{price_bounds, ProductFilter, ProductSort};
pub use selection::{colors, sizes, Resolution, VariantSelection};
pub use storage::{CartStorage, JsonFileStorage, MemoryStorage, StorageError};
pub use store::CartStore;
