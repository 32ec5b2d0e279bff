//! Mass units.
//!
//! The base unit for this kind is [`Kilogram`]. Atomic masses in POTCAR/setfl files are given in atomic mass
//! units; the factor used here is the four-significant-figure value carried by those tools.
//!
//! ```rust
//! use matqty_core::mass::{AtomicMassUnits, Kilogram};
//!
//! let fe = AtomicMassUnits::new(55.845);
//! assert!(fe.to::<Kilogram>().value() < 1e-25);
//! ```

use crate::Quantity;
use matqty_derive::Unit;

define_kind!(
    /// Kind tag for mass.
    Mass,
    MassUnit,
    name = "MassUnit",
    base = Kilogram
);

/// Kilogram (base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kg", kind = Mass, ratio = 1.0)]
pub struct Kilogram;
/// A quantity measured in kilograms.
pub type Kilograms = Quantity<Kilogram>;
/// One kilogram.
pub const KG: Kilograms = Kilograms::new(1.0);

/// Gram (`1e-3 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g", kind = Mass, ratio = 1e-3)]
pub struct Gram;
/// A quantity measured in grams.
pub type Grams = Quantity<Gram>;
/// One gram.
pub const G: Grams = Grams::new(1.0);

/// Unified atomic mass unit (u), a.k.a. dalton.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "u", kind = Mass, ratio = 1.660_54e-27)]
pub struct AtomicMassUnit;
/// A quantity measured in atomic mass units.
pub type AtomicMassUnits = Quantity<AtomicMassUnit>;
/// One atomic mass unit.
pub const U: AtomicMassUnits = AtomicMassUnits::new(1.0);

/// Picogram (`1e-15 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "pg", kind = Mass, ratio = 1e-15)]
pub struct Picogram;
/// A quantity measured in picograms.
pub type Picograms = Quantity<Picogram>;
/// One picogram.
pub const PG: Picograms = Picograms::new(1.0);

impl_unit_conversions!(Kilogram, Gram, AtomicMassUnit, Picogram);
