//! Unit types for physical quantities.
//!
//! Provides type-safe representations of cable lengths, cable speeds and
//! encoder counts to prevent mixing the cable domain with the counts domain.

use core::ops::{Add, Neg, Sub};

use serde::Deserialize;

/// Cable length (or length offset) in meters.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl Meters {
    /// Create a new Meters value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to millimeters.
    #[inline]
    pub fn to_millimeters(self) -> f64 {
        self.0 * 1000.0
    }

    /// Create from millimeters.
    #[inline]
    pub fn from_millimeters(mm: f64) -> Self {
        Self(mm / 1000.0)
    }
}

impl Add for Meters {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Meters {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Meters {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// Cable speed in meters per second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct MetersPerSec(pub f64);

impl MetersPerSec {
    /// Create a new MetersPerSec value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Raw encoder position in counts, as reported by the servo drive.
///
/// Drives report 32-bit positions that roll over; differences between two
/// readings are taken with wrapping arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(transparent)]
pub struct Counts(pub i32);

impl Counts {
    /// Create a new Counts value.
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Signed displacement from `origin` to `self`, across a rollover if needed.
    #[inline]
    pub const fn since(self, origin: Counts) -> Counts {
        Counts(self.0.wrapping_sub(origin.0))
    }

    /// Offset this position by `delta`, rolling over like the drive does.
    #[inline]
    pub const fn offset(self, delta: Counts) -> Counts {
        Counts(self.0.wrapping_add(delta.0))
    }
}

impl Add for Counts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.offset(rhs)
    }
}

impl Sub for Counts {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.since(rhs)
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Meters.
    fn meters(self) -> Meters;
    /// Convert to MetersPerSec.
    fn meters_per_sec(self) -> MetersPerSec;
}

impl UnitExt for f64 {
    #[inline]
    fn meters(self) -> Meters {
        Meters(self)
    }

    #[inline]
    fn meters_per_sec(self) -> MetersPerSec {
        MetersPerSec(self)
    }
}
