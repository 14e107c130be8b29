use serde::{Deserialize, Serialize};

use boxfit_core::{VolumeM3, WeightKg};

/// A shipping container profile: maximum volume (m³) and weight (kg) it can
/// take. Tiers are kept smallest-to-largest by convention; nothing in the
/// suitability check depends on the ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxTier {
    pub nome: String,
    pub volume_max: f64,
    pub peso_max: f64,
}

impl BoxTier {
    /// Whether this tier can hold the given totals. Non-strict on both
    /// axes: a load exactly at capacity still fits.
    pub fn fits(&self, volume: VolumeM3, weight: WeightKg) -> bool {
        self.volume_max >= volume.value() && self.peso_max >= weight.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier() -> BoxTier {
        BoxTier {
            nome: "Caixa Pequena".to_string(),
            volume_max: 2.0,
            peso_max: 500.0,
        }
    }

    #[test]
    fn load_at_exact_capacity_fits() {
        assert!(tier().fits(VolumeM3::new(2.0), WeightKg::new(500.0)));
    }

    #[test]
    fn both_limits_must_hold() {
        assert!(!tier().fits(VolumeM3::new(2.1), WeightKg::new(100.0)));
        assert!(!tier().fits(VolumeM3::new(1.0), WeightKg::new(500.1)));
        assert!(tier().fits(VolumeM3::new(1.0), WeightKg::new(100.0)));
    }
}
