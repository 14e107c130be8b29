//! Measurement value types shared by the catalog and the API surface.
//!
//! Product dimensions are recorded in centimeters; shipping capacity is
//! expressed in cubic meters and kilograms. The conversion and the
//! 3-decimal display rule live here so every layer reports the same number.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Cubic centimeters per cubic meter.
pub const CM3_PER_M3: f64 = 1_000_000.0;

/// A volume in cubic meters.
///
/// Displays (and serializes) rounded to 3 decimal places, which is the
/// precision the packing report promises.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct VolumeM3(f64);

impl VolumeM3 {
    pub fn new(m3: f64) -> Self {
        Self(m3)
    }

    /// Convert a raw cm³ figure (length × width × height of products
    /// measured in centimeters) into m³.
    pub fn from_cm3(cm3: f64) -> Self {
        Self(cm3 / CM3_PER_M3)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Add for VolumeM3 {
    type Output = VolumeM3;

    fn add(self, rhs: VolumeM3) -> VolumeM3 {
        VolumeM3(self.0 + rhs.0)
    }
}

impl fmt::Display for VolumeM3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl Serialize for VolumeM3 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A weight in kilograms. Reported exact, no rounding.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightKg(pub f64);

impl WeightKg {
    pub fn new(kg: f64) -> Self {
        Self(kg)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Add for WeightKg {
    type Output = WeightKg;

    fn add(self, rhs: WeightKg) -> WeightKg {
        WeightKg(self.0 + rhs.0)
    }
}

impl fmt::Display for WeightKg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
