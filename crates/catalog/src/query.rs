//! The two query operations over the catalog.
//!
//! Both are pure functions of (catalog, input); the HTTP layer does nothing
//! but decode the request, call these, and encode the result.

use boxfit_core::{VolumeM3, WeightKg};

use crate::{BoxTier, Catalog, Product};

/// Case-insensitive substring search over product code and name, preserving
/// catalog order.
///
/// An empty query returns an empty result, not the full catalog: the search
/// box autocompletes and must never dump the whole list.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Product> {
    if query.is_empty() {
        return Vec::new();
    }
    let q = query.to_lowercase();
    catalog.products().iter().filter(|p| p.matches(&q)).collect()
}

/// Outcome of a packing calculation: the selection's totals and the box
/// tiers able to hold them.
#[derive(Debug, Clone, PartialEq)]
pub struct PackingResult {
    pub total_volume: VolumeM3,
    pub total_weight: WeightKg,
    pub suitable_boxes: Vec<BoxTier>,
}

/// Sum volume and weight over the selected product codes and report which
/// box tiers fit, in catalog order.
///
/// The selection is a multiset: a code listed twice counts twice. Unknown
/// codes contribute nothing and are skipped silently; an empty selection
/// yields zero totals, which every tier trivially holds.
pub fn calculate(catalog: &Catalog, selection: &[String]) -> PackingResult {
    let mut total_volume = VolumeM3::default();
    let mut total_weight = WeightKg::default();

    for code in selection {
        match catalog.find_by_code(code) {
            Some(product) => {
                total_volume = total_volume + product.volume();
                total_weight = total_weight + product.weight();
            }
            None => tracing::debug!(%code, "unknown product code skipped"),
        }
    }

    let suitable_boxes = catalog
        .boxes()
        .iter()
        .filter(|tier| tier.fits(total_volume, total_weight))
        .cloned()
        .collect();

    PackingResult {
        total_volume,
        total_weight,
        suitable_boxes,
    }
}
