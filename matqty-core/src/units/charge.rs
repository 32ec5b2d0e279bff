//! Electric charge units. The base unit is [`Coulomb`].

use crate::Quantity;
use matqty_derive::Unit;

define_kind!(
    /// Kind tag for electric charge.
    Charge,
    ChargeUnit,
    name = "ChargeUnit",
    base = Coulomb
);

/// Coulomb (base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "C", kind = Charge, ratio = 1.0)]
pub struct Coulomb;
/// A quantity measured in coulombs.
pub type Coulombs = Quantity<Coulomb>;

/// Elementary charge `e` (`1.60218e-19 C`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "e", kind = Charge, ratio = 1.602_18e-19)]
pub struct ElectronCharge;
/// A quantity measured in elementary charges.
pub type ElectronCharges = Quantity<ElectronCharge>;

impl_unit_conversions!(Coulomb, ElectronCharge);
