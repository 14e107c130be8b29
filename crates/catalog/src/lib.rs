//! Catalog domain module.
//!
//! This crate contains the immutable product/box reference data and the two
//! query operations over it, implemented purely as deterministic domain
//! logic (no IO, no HTTP, no storage).

pub mod box_tier;
pub mod catalog;
pub mod product;
pub mod query;

pub use box_tier::BoxTier;
pub use catalog::Catalog;
pub use product::Product;
pub use query::{calculate, search, PackingResult};
