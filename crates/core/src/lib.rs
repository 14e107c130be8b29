//! `boxfit-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod measure;

pub use error::{DomainError, DomainResult};
pub use measure::{VolumeM3, WeightKg, CM3_PER_M3};
