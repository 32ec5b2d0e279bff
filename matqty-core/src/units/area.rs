//! Area units.
//!
//! The base unit for this kind is [`MeterSquared`]. Each area unit is the square of the matching
//! [`distance`](crate::distance) unit, which is what
//! [`MetersSquared::from_distances`](crate::area::MetersSquared::from_distances) relies on.

use crate::Quantity;
use matqty_derive::Unit;

define_kind!(
    /// Kind tag for area.
    Area,
    AreaUnit,
    name = "AreaUnit",
    base = MeterSquared
);

/// Square metre (base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m²", kind = Area, ratio = 1.0)]
pub struct MeterSquared;
/// A quantity measured in square metres.
pub type MetersSquared = Quantity<MeterSquared>;

/// Square ångström (`1e-20 m²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Å²", kind = Area, ratio = 1e-20)]
pub struct AngstromSquared;
/// A quantity measured in square ångström.
pub type AngstromsSquared = Quantity<AngstromSquared>;

/// Square nanometre (`1e-18 m²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "nm²", kind = Area, ratio = 1e-18)]
pub struct NanometerSquared;
/// A quantity measured in square nanometres.
pub type NanometersSquared = Quantity<NanometerSquared>;

/// Square picometre (`1e-24 m²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "pm²", kind = Area, ratio = 1e-24)]
pub struct PicometerSquared;
/// A quantity measured in square picometres.
pub type PicometersSquared = Quantity<PicometerSquared>;

impl_unit_conversions!(MeterSquared, AngstromSquared, NanometerSquared, PicometerSquared);
