//! Force units.
//!
//! The base unit for this kind is [`Newton`]. Forces on ions in OUTCAR are printed in `eV/Å`.

use crate::Quantity;
use matqty_derive::Unit;

define_kind!(
    /// Kind tag for force.
    Force,
    ForceUnit,
    name = "ForceUnit",
    base = Newton
);

/// Newton (base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "N", kind = Force, ratio = 1.0)]
pub struct Newton;
/// A quantity measured in newtons.
pub type Newtons = Quantity<Newton>;

/// Dyne (`1e-5 N`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "dyn", kind = Force, ratio = 1e-5)]
pub struct Dyne;
/// A quantity measured in dynes.
pub type Dynes = Quantity<Dyne>;

/// Electronvolt per ångström (`1.60218e-9 N`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "eV/Å", kind = Force, ratio = 1.602_18e-9)]
pub struct ElectronVoltPerAngstrom;
/// A quantity measured in electronvolts per ångström.
pub type ElectronVoltsPerAngstrom = Quantity<ElectronVoltPerAngstrom>;

impl_unit_conversions!(Newton, Dyne, ElectronVoltPerAngstrom);
