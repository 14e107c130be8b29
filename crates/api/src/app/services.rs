use boxfit_catalog::Catalog;

/// Request-handler dependencies, built once in `build_app` and shared via
/// an `Extension`.
///
/// The catalog is immutable reference data, so sharing it across handlers
/// needs no locking.
#[derive(Debug)]
pub struct AppServices {
    catalog: Catalog,
}

impl AppServices {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
