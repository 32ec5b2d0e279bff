//! Physics helpers built on the unit types.
//!
//! Operands are normalised to SI base units with `to` before any raw arithmetic, and results come back typed.

use crate::distance::{DistanceUnit, Meter, Meters};
use crate::error::{Result, UnitError};
use crate::force::Newtons;
use crate::kind::KindId;
use crate::mass::{Kilogram, MassUnit};
use crate::quantity::Quantity;
use crate::registry::UnitId;
use crate::vector::Vector3D;

/// Newtonian constant of gravitation in `N·m²/kg²`.
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;

/// Magnitude of the gravitational force between two masses at distance `r`.
///
/// ```rust
/// use matqty_core::distance::Meters;
/// use matqty_core::equations::gravitational_force;
/// use matqty_core::mass::Kilograms;
///
/// let f = gravitational_force(Kilograms::new(1.0), Kilograms::new(1.0), Meters::new(1.0));
/// assert!((f.value() - 6.674_30e-11).abs() < 1e-20);
/// ```
pub fn gravitational_force<A, B, D>(m1: Quantity<A>, m2: Quantity<B>, r: Quantity<D>) -> Newtons
where
    A: MassUnit,
    B: MassUnit,
    D: DistanceUnit,
{
    let m1 = m1.to::<Kilogram>().value();
    let m2 = m2.to::<Kilogram>().value();
    let r = r.to::<Meter>().value();
    Newtons::new(GRAVITATIONAL_CONSTANT * m1 * m2 / (r * r))
}

/// Straight-line distance between two position vectors, in metres.
///
/// Fails if either vector is not a distance vector.
pub fn separation_distance(a: &Vector3D, b: &Vector3D) -> Result<Meters> {
    if a.kind() != KindId::Distance {
        return Err(UnitError::kind_mismatch("separation_distance", KindId::Distance, a.kind()));
    }
    let d = a.separation(b, UnitId::Meter)?;
    Ok(Meters::new(d.value()))
}
