//! Built-in unit modules, one per physical kind.
//!
//! Each module defines the kind tag (e.g. [`distance::Distance`]), its marker trait (e.g.
//! [`distance::DistanceUnit`]), the unit types and a `Quantity` alias for each unit.
//!
//! ## Modules
//!
//! - [`distance`]: metre (base), ångström, nanometre, picometre, bohr.
//! - [`time`]: second (base), picosecond, femtosecond.
//! - [`mass`]: kilogram (base), gram, atomic mass unit, picogram.
//! - [`energy`]: joule (base), electronvolt.
//! - [`temperature`]: Celsius (base), Fahrenheit, Kelvin. Affine conversions.
//! - [`charge`]: coulomb (base), elementary charge.
//! - [`speed`]: m/s (base), Å/ps.
//! - [`angle`]: radian (base), degree, plus trig and wrapping helpers.
//! - [`area`]: m² (base), Å², nm², pm².
//! - [`pressure`]: pascal (base), bar, kilobar.
//! - [`force`]: newton (base), dyne, eV/Å.
//! - [`magnetic_moment`]: J/T (base), Bohr magneton.

pub mod angle;
pub mod area;
pub mod charge;
pub mod distance;
pub mod energy;
pub mod force;
pub mod magnetic_moment;
pub mod mass;
pub mod pressure;
pub mod speed;
pub mod temperature;
pub mod time;
