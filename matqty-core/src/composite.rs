//! Construction of one kind from two others.
//!
//! Three products are supported: area from two distances, speed from a distance and a time, and pressure from an
//! area and a force. Both operands are normalised to their base units before the raw arithmetic, and the result is
//! expressed in the target kind's base unit. Convert it afterwards if another scale is wanted.
//!
//! ```rust
//! use matqty_core::area::{AngstromSquared, MetersSquared};
//! use matqty_core::distance::Angstroms;
//!
//! let a = MetersSquared::from_distances(Angstroms::new(2.0), Angstroms::new(3.0));
//! assert!((a.to::<AngstromSquared>().value() - 6.0).abs() < 1e-9);
//! ```

use crate::area::{AreaUnit, MeterSquared, MetersSquared};
use crate::distance::DistanceUnit;
use crate::error::Result;
use crate::force::ForceUnit;
use crate::kind::KindId;
use crate::measure::Measure;
use crate::pressure::{Pascal, Pascals};
use crate::quantity::Quantity;
use crate::registry::UnitId;
use crate::speed::{MeterPerSecond, MetersPerSecond};
use crate::time::TimeUnit;

impl Quantity<MeterSquared> {
    /// Area spanned by two distances, `d0 · d1` in square metres.
    pub fn from_distances<A: DistanceUnit, B: DistanceUnit>(d0: Quantity<A>, d1: Quantity<B>) -> MetersSquared {
        MetersSquared::new(d0.base_value() * d1.base_value())
    }
}

impl Quantity<MeterPerSecond> {
    /// Speed covering distance `d` in time `t`, in metres per second.
    ///
    /// ```rust
    /// use matqty_core::distance::Angstroms;
    /// use matqty_core::speed::MetersPerSecond;
    /// use matqty_core::time::Picoseconds;
    ///
    /// let v = MetersPerSecond::from_distance_time(Angstroms::new(5.0), Picoseconds::new(1.0));
    /// assert!((v.value() - 500.0).abs() < 1e-9);
    /// ```
    pub fn from_distance_time<D: DistanceUnit, T: TimeUnit>(d: Quantity<D>, t: Quantity<T>) -> MetersPerSecond {
        MetersPerSecond::new(d.base_value() / t.base_value())
    }
}

impl Quantity<Pascal> {
    /// Pressure of force `f` acting on area `a`, in pascals.
    pub fn from_area_force<A: AreaUnit, F: ForceUnit>(a: Quantity<A>, f: Quantity<F>) -> Pascals {
        Pascals::new(f.base_value() / a.base_value())
    }
}

impl Measure {
    /// Runtime form of [`MetersSquared::from_distances`].
    ///
    /// Both operands must be distances; the result is in [`UnitId::MeterSquared`].
    pub fn area_from_distances(d0: Measure, d1: Measure) -> Result<Measure> {
        let d0 = d0.require_kind(KindId::Distance, "area_from_distances")?;
        let d1 = d1.require_kind(KindId::Distance, "area_from_distances")?;
        Ok(Measure::new(UnitId::MeterSquared, d0.base_value() * d1.base_value()))
    }

    /// Runtime form of [`MetersPerSecond::from_distance_time`].
    pub fn speed_from_distance_time(d: Measure, t: Measure) -> Result<Measure> {
        let d = d.require_kind(KindId::Distance, "speed_from_distance_time")?;
        let t = t.require_kind(KindId::Time, "speed_from_distance_time")?;
        Ok(Measure::new(UnitId::MeterPerSecond, d.base_value() / t.base_value()))
    }

    /// Runtime form of [`Pascals::from_area_force`].
    pub fn pressure_from_area_force(a: Measure, f: Measure) -> Result<Measure> {
        let a = a.require_kind(KindId::Area, "pressure_from_area_force")?;
        let f = f.require_kind(KindId::Force, "pressure_from_area_force")?;
        Ok(Measure::new(UnitId::Pascal, f.base_value() / a.base_value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::{AngstromSquared, NanometersSquared};
    use crate::distance::{Angstroms, Meter, Nanometers, Picometers};
    use crate::error::UnitError;
    use crate::force::{ElectronVoltsPerAngstrom, Newtons};
    use crate::pressure::Kilobar;
    use crate::speed::AngstromPerPicosecond;
    use crate::time::{Femtoseconds, Seconds};
    use approx::assert_relative_eq;

    fn meters(v: f64) -> Measure {
        Measure::new(UnitId::Meter, v)
    }

    #[test]
    fn area_from_nanometer_and_picometer() {
        let area = MetersSquared::from_distances(Nanometers::new(1.0), Picometers::new(1.0));
        let expected = Nanometers::new(1.0).to::<Meter>().value() * Picometers::new(1.0).to::<Meter>().value();
        assert_relative_eq!(area.value(), expected, max_relative = 1e-12);
    }

    #[test]
    fn area_in_square_angstrom() {
        let area = MetersSquared::from_distances(Angstroms::new(4.0), Angstroms::new(2.5));
        assert_relative_eq!(area.to::<AngstromSquared>().value(), 10.0, max_relative = 1e-12);
    }

    #[test]
    fn speed_from_md_step() {
        let v = MetersPerSecond::from_distance_time(Angstroms::new(0.01), Femtoseconds::new(1.0));
        assert_relative_eq!(v.to::<AngstromPerPicosecond>().value(), 10.0, max_relative = 1e-12);
    }

    #[test]
    fn pressure_from_force_on_area() {
        let p = Pascals::from_area_force(NanometersSquared::new(1.0), ElectronVoltsPerAngstrom::new(1.0));
        assert_relative_eq!(p.value(), 1.60218e-9 / 1e-18, max_relative = 1e-12);
        assert_relative_eq!(p.to::<Kilobar>().value(), 16.0218, max_relative = 1e-9);
    }

    #[test]
    fn dynamic_area_matches_typed() {
        let m = Measure::area_from_distances(
            Measure::new(UnitId::Nanometer, 1.0),
            Measure::new(UnitId::Picometer, 1.0),
        )
        .unwrap();
        assert_eq!(m.unit(), UnitId::MeterSquared);
        let typed = MetersSquared::from_distances(Nanometers::new(1.0), Picometers::new(1.0));
        assert_relative_eq!(m.value(), typed.value(), max_relative = 1e-12);
    }

    #[test]
    fn dynamic_speed_and_pressure() {
        let v = Measure::speed_from_distance_time(meters(10.0), Seconds::new(4.0).into()).unwrap();
        assert_relative_eq!(v.value(), 2.5, max_relative = 1e-12);
        let p = Measure::pressure_from_area_force(
            Measure::new(UnitId::MeterSquared, 2.0),
            Newtons::new(10.0).into(),
        )
        .unwrap();
        assert_eq!(p.unit(), UnitId::Pascal);
        assert_relative_eq!(p.value(), 5.0, max_relative = 1e-12);
    }

    #[test]
    fn dynamic_factories_reject_wrong_kinds() {
        let t = Measure::new(UnitId::Second, 1.0);
        let err = Measure::area_from_distances(meters(1.0), t).unwrap_err();
        assert_eq!(
            err,
            UnitError::KindMismatch {
                operation: "area_from_distances",
                expected: KindId::Distance,
                found: KindId::Time,
            }
        );
        assert!(Measure::speed_from_distance_time(t, t).is_err());
        assert!(Measure::pressure_from_area_force(Newtons::new(1.0).into(), meters(1.0)).is_err());
    }
}
