//! Distance units.
//!
//! The base unit for this kind is [`Meter`]. Atomic-scale units are the ones simulation inputs are written in:
//! POSCAR lattice vectors are in ångström, LAMMPS `metal` positions in ångström, `nano` in nanometres, and the
//! Bohr radius is the atomic unit of length used by many DFT codes.
//!
//! ```rust
//! use matqty_core::distance::{Angstroms, Picometer};
//!
//! let bond = Angstroms::new(1.54);
//! assert!((bond.to::<Picometer>().value() - 154.0).abs() < 1e-9);
//! ```

use crate::Quantity;
use matqty_derive::Unit;

define_kind!(
    /// Kind tag for distance.
    Distance,
    DistanceUnit,
    name = "DistanceUnit",
    base = Meter
);

/// Metre (base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", kind = Distance, ratio = 1.0)]
pub struct Meter;
/// A quantity measured in metres.
pub type Meters = Quantity<Meter>;
/// One metre.
pub const M: Meters = Meters::new(1.0);

/// Ångström (`1e-10 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Å", kind = Distance, ratio = 1e-10)]
pub struct Angstrom;
/// A quantity measured in ångström.
pub type Angstroms = Quantity<Angstrom>;
/// One ångström.
pub const ANGSTROM: Angstroms = Angstroms::new(1.0);

/// Nanometre (`1e-9 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "nm", kind = Distance, ratio = 1e-9)]
pub struct Nanometer;
/// A quantity measured in nanometres.
pub type Nanometers = Quantity<Nanometer>;
/// One nanometre.
pub const NM: Nanometers = Nanometers::new(1.0);

/// Picometre (`1e-12 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "pm", kind = Distance, ratio = 1e-12)]
pub struct Picometer;
/// A quantity measured in picometres.
pub type Picometers = Quantity<Picometer>;
/// One picometre.
pub const PM: Picometers = Picometers::new(1.0);

/// Bohr radius `a0` (CODATA 2018, `5.29177210903e-11 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "a0", kind = Distance, ratio = 5.291_772_109_03e-11)]
pub struct Bohr;
/// A quantity measured in Bohr radii.
pub type Bohrs = Quantity<Bohr>;
/// One Bohr radius.
pub const A0: Bohrs = Bohrs::new(1.0);

impl_unit_conversions!(Meter, Angstrom, Nanometer, Picometer, Bohr);
