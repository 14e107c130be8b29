use crate::{BoxTier, Product};

/// The static set of Product and BoxTier reference data.
///
/// Constructed once at startup and passed explicitly into the query
/// functions; there is no ambient global. All data is immutable, so the
/// catalog can be shared freely across request handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    boxes: Vec<BoxTier>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, boxes: Vec<BoxTier>) -> Self {
        Self { products, boxes }
    }

    /// The compiled-in production dataset: five jacuzzi models and three
    /// box tiers. Dimensions in cm, weights in kg, capacities in m³/kg.
    pub fn builtin() -> Self {
        let product = |codigo: &str, nome: &str, c: f64, l: f64, a: f64, peso: f64| Product {
            codigo: codigo.to_string(),
            nome: nome.to_string(),
            comprimento: c,
            largura: l,
            altura: a,
            peso,
        };
        let tier = |nome: &str, volume_max: f64, peso_max: f64| BoxTier {
            nome: nome.to_string(),
            volume_max,
            peso_max,
        };

        Self::new(
            vec![
                product("J-315", "Jacuzzi J-315", 213.0, 213.0, 91.0, 340.0),
                product("J-325", "Jacuzzi J-325", 229.0, 229.0, 94.0, 385.0),
                product("J-335", "Jacuzzi J-335", 244.0, 229.0, 97.0, 430.0),
                product("J-345", "Jacuzzi J-345", 244.0, 244.0, 97.0, 475.0),
                product("J-355", "Jacuzzi J-355", 244.0, 244.0, 97.0, 520.0),
            ],
            vec![
                tier("Caixa Pequena", 2.0, 500.0),
                tier("Caixa Média", 5.0, 1000.0),
                tier("Caixa Grande", 10.0, 2000.0),
            ],
        )
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn boxes(&self) -> &[BoxTier] {
        &self.boxes
    }

    /// First product with the given code. Codes are unique by convention
    /// (not enforced); a duplicate would be shadowed by the first entry.
    pub fn find_by_code(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.codigo == code)
    }
}
