//! Catalog listing filters and sort orders.

use rust_decimal::Decimal;

use crate::domain::catalog::Product;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProductSort {
    /// Featured products first, otherwise catalog order.
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
    Name,
}

/// Brand and price constraints applied to a product list before sorting.
///
/// Price bounds are inclusive, in the store currency. An empty brand list
/// means no brand constraint.
#[derive(Clone, Debug, Default)]
pub struct ProductFilter {
    pub brand_ids: Vec<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sort: ProductSort,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if !self.brand_ids.is_empty() {
            match &product.brand_id {
                Some(id) if self.brand_ids.contains(id) => {}
                _ => return false,
            }
        }
        let price = product.base_price.amount();
        if self.min_price.is_some_and(|min| price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| price > max) {
            return false;
        }
        true
    }

    /// Filter then sort. Sorts are stable, so ties keep catalog order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut out: Vec<Product> = products.iter().filter(|p| self.matches(p)).cloned().collect();
        match self.sort {
            ProductSort::Featured => out.sort_by_key(|p| !p.featured),
            ProductSort::PriceLowToHigh => out.sort_by_key(|p| p.base_price.amount()),
            ProductSort::PriceHighToLow => {
                out.sort_by(|a, b| b.base_price.amount().cmp(&a.base_price.amount()));
            }
            ProductSort::Name => out.sort_by(|a, b| a.name.cmp(&b.name)),
        }
        out
    }
}

/// Min and max base price across `products`, rounded outward to the nearest
/// 100 for seeding a price-range control. `None` for an empty list.
pub fn price_bounds(products: &[Product]) -> Option<(Decimal, Decimal)> {
    let mut prices = products.iter().map(|p| p.base_price.amount());
    let first = prices.next()?;
    let (mut min, mut max) = (first, first);
    for price in prices {
        if price < min {
            min = price;
        }
        if price > max {
            max = price;
        }
    }
    let hundred = Decimal::from(100);
    Some(((min / hundred).floor() * hundred, (max / hundred).ceil() * hundred))
}
