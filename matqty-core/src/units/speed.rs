//! Speed units.
//!
//! The base unit for this kind is [`MeterPerSecond`]. MD trajectories report atomic velocities in `Å/ps`, which is
//! exactly `100 m/s`.
//!
//! Typed speeds can be assembled from a distance and a time with
//! [`MetersPerSecond::from_distance_time`](crate::speed::MetersPerSecond::from_distance_time).

use crate::Quantity;
use matqty_derive::Unit;

define_kind!(
    /// Kind tag for speed.
    Speed,
    SpeedUnit,
    name = "SpeedUnit",
    base = MeterPerSecond
);

/// Metre per second (base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m/s", kind = Speed, ratio = 1.0)]
pub struct MeterPerSecond;
/// A quantity measured in metres per second.
pub type MetersPerSecond = Quantity<MeterPerSecond>;

/// Ångström per picosecond (`100 m/s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Å/ps", kind = Speed, ratio = 1e2)]
pub struct AngstromPerPicosecond;
/// A quantity measured in ångström per picosecond.
pub type AngstromsPerPicosecond = Quantity<AngstromPerPicosecond>;

impl_unit_conversions!(MeterPerSecond, AngstromPerPicosecond);
