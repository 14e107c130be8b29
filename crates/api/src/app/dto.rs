use serde::{Deserialize, Serialize};
use serde_json::Value;

use boxfit_catalog::{BoxTier, PackingResult};
use boxfit_core::{DomainError, DomainResult, VolumeM3, WeightKg};

// -------------------------
// Request DTOs
// -------------------------

/// `GET /api/search` query string. An absent `q` means the empty query,
/// made explicit here instead of coerced in the handler.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Pull the selection codes out of a calculate request body.
///
/// `selectedProducts` must be present and be an array; anything else is the
/// one input error this service knows. Array elements that are not strings
/// cannot match any product code, so they are dropped like unknown codes
/// rather than rejected.
pub fn selection_codes(body: &Value) -> DomainResult<Vec<String>> {
    let items = body
        .get("selectedProducts")
        .and_then(Value::as_array)
        .ok_or_else(|| DomainError::invalid_input("selectedProducts must be an array"))?;

    Ok(items
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_owned)
        .collect())
}

// -------------------------
// Response DTOs
// -------------------------

/// Calculate response: volume as a 3-decimal string, weight as a plain
/// number, suitable tiers in catalog order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub total_volume: VolumeM3,
    pub total_weight: WeightKg,
    pub suitable_boxes: Vec<BoxTier>,
}

impl From<PackingResult> for CalculateResponse {
    fn from(result: PackingResult) -> Self {
        Self {
            total_volume: result.total_volume,
            total_weight: result.total_weight,
            suitable_boxes: result.suitable_boxes,
        }
    }
}
