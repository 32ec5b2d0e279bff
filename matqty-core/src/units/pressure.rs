//! Pressure units. The base unit is [`Pascal`]; VASP reports stress in kilobar.

use crate::Quantity;
use matqty_derive::Unit;

define_kind!(
    /// Kind tag for pressure.
    Pressure,
    PressureUnit,
    name = "PressureUnit",
    base = Pascal
);

/// Pascal (base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Pa", kind = Pressure, ratio = 1.0)]
pub struct Pascal;
/// A quantity measured in pascals.
pub type Pascals = Quantity<Pascal>;

/// Bar (`1e5 Pa`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "bar", kind = Pressure, ratio = 1e5)]
pub struct Bar;
/// A quantity measured in bar.
pub type Bars = Quantity<Bar>;

/// Kilobar (`1e8 Pa`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kbar", kind = Pressure, ratio = 1e8)]
pub struct Kilobar;
/// A quantity measured in kilobar.
pub type Kilobars = Quantity<Kilobar>;

impl_unit_conversions!(Pascal, Bar, Kilobar);
