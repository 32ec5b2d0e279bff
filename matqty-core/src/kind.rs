//! Unit kinds: the physical dimension a unit measures.

use crate::registry::UnitId;
use crate::unit::Unit;
use core::fmt;

/// Marker trait for **unit kinds** (Distance, Time, Mass …).
///
/// A kind is the category that distinguishes a metre from a second. Each kind is modelled as an empty enum that
/// is never instantiated; its associated items are queryable without constructing any value.
///
/// Every kind designates exactly one base unit, which converts to itself with factor `1.0`:
///
/// ```rust
/// use matqty_core::distance::{Distance, Meter};
/// use matqty_core::{Kind, KindId, Unit};
///
/// assert_eq!(<Distance as Kind>::ID, KindId::Distance);
/// assert_eq!(<<Distance as Kind>::Base as Unit>::ID, <Meter as Unit>::ID);
/// ```
pub trait Kind: Sized + 'static {
    /// Runtime tag for this kind.
    const ID: KindId;

    /// Human-readable name (e.g. `"DistanceUnit"`).
    const NAME: &'static str;

    /// The designated base unit of this kind.
    type Base: Unit<Kind = Self>;
}

/// Runtime tag identifying a [`Kind`].
///
/// Used as the equality key for kind-safety checks on runtime-typed values ([`crate::Measure`],
/// [`crate::Vector`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KindId {
    /// Length.
    Distance,
    /// Time.
    Time,
    /// Mass.
    Mass,
    /// Energy.
    Energy,
    /// Temperature.
    Temperature,
    /// Electric charge.
    Charge,
    /// Speed.
    Speed,
    /// Plane angle.
    Angle,
    /// Area.
    Area,
    /// Pressure.
    Pressure,
    /// Force.
    Force,
    /// Magnetic moment.
    MagneticMoment,
}

impl KindId {
    /// Every kind, in declaration order.
    pub const ALL: [KindId; 12] = [
        KindId::Distance,
        KindId::Time,
        KindId::Mass,
        KindId::Energy,
        KindId::Temperature,
        KindId::Charge,
        KindId::Speed,
        KindId::Angle,
        KindId::Area,
        KindId::Pressure,
        KindId::Force,
        KindId::MagneticMoment,
    ];

    /// The designated base unit of this kind.
    ///
    /// ```rust
    /// use matqty_core::{KindId, UnitId};
    /// assert_eq!(KindId::Temperature.base(), UnitId::Celsius);
    /// ```
    pub fn base(self) -> UnitId {
        use crate::units::*;
        match self {
            KindId::Distance => base_of::<distance::Distance>(),
            KindId::Time => base_of::<time::Time>(),
            KindId::Mass => base_of::<mass::Mass>(),
            KindId::Energy => base_of::<energy::Energy>(),
            KindId::Temperature => base_of::<temperature::Temperature>(),
            KindId::Charge => base_of::<charge::Charge>(),
            KindId::Speed => base_of::<speed::Speed>(),
            KindId::Angle => base_of::<angle::Angle>(),
            KindId::Area => base_of::<area::Area>(),
            KindId::Pressure => base_of::<pressure::Pressure>(),
            KindId::Force => base_of::<force::Force>(),
            KindId::MagneticMoment => base_of::<magnetic_moment::MagneticMoment>(),
        }
    }

    /// Human-readable name, matching [`Kind::NAME`].
    pub fn name(self) -> &'static str {
        match self {
            KindId::Distance => "DistanceUnit",
            KindId::Time => "TimeUnit",
            KindId::Mass => "MassUnit",
            KindId::Energy => "EnergyUnit",
            KindId::Temperature => "TemperatureUnit",
            KindId::Charge => "ChargeUnit",
            KindId::Speed => "SpeedUnit",
            KindId::Angle => "AngleUnit",
            KindId::Area => "AreaUnit",
            KindId::Pressure => "PressureUnit",
            KindId::Force => "ForceUnit",
            KindId::MagneticMoment => "MagneticMomentUnit",
        }
    }

    /// All registered units of this kind.
    pub fn units(self) -> impl Iterator<Item = UnitId> {
        UnitId::ALL.iter().copied().filter(move |u| u.kind() == self)
    }
}

impl fmt::Display for KindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn base_of<K: Kind>() -> UnitId {
    <K::Base as Unit>::ID
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::distance::Distance;

    #[test]
    fn base_unit_converts_identically() {
        for kind in KindId::ALL {
            let base = kind.base();
            for x in [-12.5, 0.0, 1.0, 3.75e8] {
                assert_eq!(base.to_base(x), x, "kind {kind}");
                assert_eq!(base.from_base(x), x, "kind {kind}");
            }
        }
    }

    #[test]
    fn every_kind_has_units() {
        for kind in KindId::ALL {
            assert!(kind.units().count() >= 2, "kind {kind}");
        }
    }

    #[test]
    fn base_unit_belongs_to_its_kind() {
        for kind in KindId::ALL {
            assert_eq!(kind.base().kind(), kind);
        }
    }

    #[test]
    fn static_and_runtime_names_agree() {
        assert_eq!(<Distance as Kind>::NAME, KindId::Distance.name());
        assert_eq!(
            <crate::units::magnetic_moment::MagneticMoment as Kind>::NAME,
            KindId::MagneticMoment.name()
        );
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(KindId::Pressure.to_string(), "PressureUnit");
    }
}
