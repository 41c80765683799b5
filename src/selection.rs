//! Size/color variant selection for the product page.
//!
//! Pure logic over `(variant list, current selection)`: which sizes and
//! colors are currently pickable, and which single variant (if any) the
//! selection resolves to. No I/O, no errors; a stale or impossible
//! selection just resolves to nothing.

use crate::domain::catalog::{Product, Variant};
use crate::domain::value_objects::Money;

/// Distinct sizes across `variants`, sorted ascending.
pub fn sizes(variants: &[Variant]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for v in variants {
        if !out.contains(&v.size) {
            out.push(v.size.clone());
        }
    }
    out.sort();
    out
}

/// Distinct colors across `variants`, in first-seen order.
pub fn colors(variants: &[Variant]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for v in variants {
        if !out.contains(&v.color) {
            out.push(v.color.clone());
        }
    }
    out
}

/// In-progress size/color choice.
///
/// The two axes are kept mutually consistent: after any toggle, the other
/// axis is cleared if its value no longer co-occurs with the new selection,
/// so the selection never describes a pair with zero matching variants.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariantSelection {
    size: Option<String>,
    color: Option<String>,
}

impl VariantSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn clear(&mut self) {
        self.size = None;
        self.color = None;
    }

    /// Select `size`, or deselect it if it is already selected.
    pub fn toggle_size(&mut self, variants: &[Variant], size: &str) {
        if self.size.as_deref() == Some(size) {
            self.size = None;
        } else {
            self.size = Some(size.to_string());
        }
        if let Some(color) = self.color.clone() {
            let still_valid = variants.iter().any(|v| {
                v.color == color && self.size.as_deref().map_or(true, |s| v.size == s)
            });
            if !still_valid {
                self.color = None;
            }
        }
    }

    /// Select `color`, or deselect it if it is already selected.
    pub fn toggle_color(&mut self, variants: &[Variant], color: &str) {
        if self.color.as_deref() == Some(color) {
            self.color = None;
        } else {
            self.color = Some(color.to_string());
        }
        if let Some(size) = self.size.clone() {
            let still_valid = variants.iter().any(|v| {
                v.size == size && self.color.as_deref().map_or(true, |c| v.color == c)
            });
            if !still_valid {
                self.size = None;
            }
        }
    }

    /// Sizes pickable under the current color selection, sorted ascending.
    pub fn selectable_sizes(&self, variants: &[Variant]) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for v in variants {
            if self.color.as_deref().map_or(true, |c| v.color == c) && !out.contains(&v.size) {
                out.push(v.size.clone());
            }
        }
        out.sort();
        out
    }

    /// Colors pickable under the current size selection, first-seen order.
    pub fn selectable_colors(&self, variants: &[Variant]) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for v in variants {
            if self.size.as_deref().map_or(true, |s| v.size == s) && !out.contains(&v.color) {
                out.push(v.color.clone());
            }
        }
        out
    }

    /// The single variant matching both selected axes. `None` unless both a
    /// size and a color are selected and exactly one variant matches.
    pub fn resolve<'a>(&self, variants: &'a [Variant]) -> Option<&'a Variant> {
        let size = self.size.as_deref()?;
        let color = self.color.as_deref()?;
        let mut matching = variants.iter().filter(|v| v.size == size && v.color == color);
        let found = matching.next()?;
        if matching.next().is_some() {
            return None;
        }
        Some(found)
    }

    /// Resolve together with what the page needs to render and to gate the
    /// add-to-cart button.
    pub fn resolution<'a>(
        &self,
        product: &Product,
        variants: &'a [Variant],
    ) -> Option<Resolution<'a>> {
        let variant = self.resolve(variants)?;
        Some(Resolution {
            price: variant.effective_price(product),
            stock: variant.stock,
            variant,
        })
    }
}

/// A fully-resolved variant with its effective price and stock.
///
/// A zero-stock variant still resolves, so "out of stock" can be shown,
/// but [`Resolution::can_add`] refuses it.
#[derive(Clone, Debug)]
pub struct Resolution<'a> {
    pub variant: &'a Variant,
    pub price: Money,
    pub stock: u32,
}

impl Resolution<'_> {
    pub fn can_add(&self, quantity: u32) -> bool {
        quantity >= 1 && quantity <= self.stock
    }
}
