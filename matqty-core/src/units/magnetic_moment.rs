//! Magnetic moment units. The base unit is [`JoulePerTesla`]; site moments are usually quoted in Bohr magnetons.

use crate::Quantity;
use matqty_derive::Unit;

define_kind!(
    /// Kind tag for magnetic moment.
    MagneticMoment,
    MagneticMomentUnit,
    name = "MagneticMomentUnit",
    base = JoulePerTesla
);

/// Joule per tesla (base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "J/T", kind = MagneticMoment, ratio = 1.0)]
pub struct JoulePerTesla;
/// A quantity measured in joules per tesla.
pub type JoulesPerTesla = Quantity<JoulePerTesla>;

/// Bohr magneton (`9.274009994e-24 J/T`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "μB", kind = MagneticMoment, ratio = 9.274_009_994e-24)]
pub struct BohrMagneton;
/// A quantity measured in Bohr magnetons.
pub type BohrMagnetons = Quantity<BohrMagneton>;

impl_unit_conversions!(JoulePerTesla, BohrMagneton);
