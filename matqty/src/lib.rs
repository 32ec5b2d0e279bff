//! Kind-safe physical quantities for materials-simulation tooling.
//!
//! `matqty` is the user-facing crate in this workspace. It re-exports the full API from `matqty-core` plus every
//! predefined unit at the crate root.
//!
//! File readers turn raw numbers into unit values; writers turn them back with `to(...)` and `value()`. In between,
//! the unit system refuses conversions across kinds and arithmetic that has no meaning in a closed operator set.
//!
//! # Quick start
//!
//! Convert a POSCAR coordinate from ångström to nanometres:
//!
//! ```rust
//! use matqty::{Angstroms, Nanometer};
//!
//! let x = Angstroms::new(2.8665);
//! assert!((x.to::<Nanometer>().value() - 0.28665).abs() < 1e-12);
//! ```
//!
//! Build a position vector whose components use different distance units and measure it:
//!
//! ```rust
//! use matqty::{Measure, UnitId, Vector3D};
//!
//! let p = Vector3D::new([
//!     Measure::new(UnitId::Angstrom, 3.0),
//!     Measure::new(UnitId::Nanometer, 0.4),
//!     Measure::new(UnitId::Picometer, 0.0),
//! ])?;
//! assert!((p.magnitude(UnitId::Angstrom)?.value() - 5.0).abs() < 1e-9);
//! # Ok::<(), matqty::UnitError>(())
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use matqty::{Angstroms, Picoseconds};
//!
//! let _ = Angstroms::new(1.0) + Picoseconds::new(1.0); // cannot add different unit types
//! ```
//!
//! The same mistake with runtime-tagged values is an error instead:
//!
//! ```rust
//! use matqty::{Measure, UnitError, UnitId};
//!
//! let err = Measure::new(UnitId::Angstrom, 1.0)
//!     .try_add(Measure::new(UnitId::Picosecond, 1.0))
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "unsafe unit operation: cannot add Angstrom and Picosecond");
//! ```
//!
//! # Modules
//!
//! Units are grouped by kind under modules (also re-exported at the crate root):
//!
//! - `matqty::distance` (metres, ångström, nanometres, picometres, bohr)
//! - `matqty::time` (seconds, picoseconds, femtoseconds)
//! - `matqty::mass` (kilograms, grams, atomic mass units, picograms)
//! - `matqty::energy` (joules, electronvolts)
//! - `matqty::temperature` (Celsius, Fahrenheit, Kelvin)
//! - `matqty::charge` (coulombs, elementary charges)
//! - `matqty::speed` (m/s, Å/ps)
//! - `matqty::angle` (radians, degrees, trigonometry and wrapping helpers)
//! - `matqty::area` (m², Å², nm², pm²)
//! - `matqty::pressure` (pascals, bar, kilobar)
//! - `matqty::force` (newtons, dynes, eV/Å)
//! - `matqty::magnetic_moment` (J/T, Bohr magnetons)
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support in `matqty-core`.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use matqty_core::*;

pub use matqty_core::units::angle::*;
pub use matqty_core::units::area::*;
pub use matqty_core::units::charge::*;
pub use matqty_core::units::distance::*;
pub use matqty_core::units::energy::*;
pub use matqty_core::units::force::*;
pub use matqty_core::units::magnetic_moment::*;
pub use matqty_core::units::mass::*;
pub use matqty_core::units::pressure::*;
pub use matqty_core::units::speed::*;
pub use matqty_core::units::temperature::*;
pub use matqty_core::units::time::*;
