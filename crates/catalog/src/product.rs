use serde::{Deserialize, Serialize};

use boxfit_core::{VolumeM3, WeightKg};

/// A sellable unit with physical dimensions and weight.
///
/// Field names are the upstream dataset's Portuguese column names and double
/// as the JSON wire names, so the struct serializes to exactly the shape the
/// frontend consumes. Dimensions are centimeters, weight is kilograms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub codigo: String,
    pub nome: String,
    pub comprimento: f64,
    pub largura: f64,
    pub altura: f64,
    pub peso: f64,
}

impl Product {
    /// Gross volume of the unit, length × width × height.
    pub fn volume(&self) -> VolumeM3 {
        VolumeM3::from_cm3(self.comprimento * self.largura * self.altura)
    }

    pub fn weight(&self) -> WeightKg {
        WeightKg::new(self.peso)
    }

    /// Case-insensitive substring match against code or display name.
    pub fn matches(&self, lowercased_query: &str) -> bool {
        self.codigo.to_lowercase().contains(lowercased_query)
            || self.nome.to_lowercase().contains(lowercased_query)
    }
}
