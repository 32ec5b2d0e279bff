//! Core type system for kind-safe physical quantities.
//!
//! `matqty-core` keeps the numbers that flow between simulation file readers and writers (POSCAR positions, OUTCAR
//! forces, setfl masses, LAMMPS velocities) tagged with their unit, so that a conversion or an arithmetic mistake
//! fails loudly instead of producing wrong physics.
//!
//! - A *kind* is a physical dimension implementing [`Kind`] (distance, time, mass, …). Each designates one base unit.
//! - A *unit* is a zero-sized marker type implementing [`Unit`], tied to exactly one kind.
//! - A value tagged with a unit known at compile time is a [`Quantity<U>`], backed by an `f64`.
//! - A value whose unit is only known at runtime is a [`Measure`], tagged with a [`UnitId`].
//! - A fixed-arity tuple of same-kind measures is a [`Vector`].
//!
//! # Quick start
//!
//! Convert between units of one kind:
//!
//! ```rust
//! use matqty_core::distance::{Angstroms, Nanometer};
//!
//! let bond = Angstroms::new(1.42);
//! let nm = bond.to::<Nanometer>();
//! assert!((nm.value() - 0.142).abs() < 1e-12);
//! ```
//!
//! Work with units chosen at runtime:
//!
//! ```rust
//! use matqty_core::{Measure, UnitError, UnitId};
//!
//! let e = Measure::new(UnitId::ElectronVolt, -4.28);
//! assert!(e.to(UnitId::Joule).is_ok());
//! assert!(matches!(e.to(UnitId::Newton), Err(UnitError::KindMismatch { .. })));
//! ```
//!
//! # Operator set
//!
//! The algebra is deliberately closed. There are no compound units beyond the fixed set in [`units`]:
//!
//! - `+`, `-` and comparisons only between values of the identical concrete unit. Normalise with `to` first.
//! - `*`, `/`, `%` and floor division only by a bare scalar.
//! - [`area`], [`speed`] and [`pressure`] values can be built from their constituents (see [`composite`]).
//!
//! [`Quantity`] enforces this at compile time; [`Measure`] returns [`UnitError::UnsafeOperation`].
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Quantity`] (raw `f64`), [`Measure`], [`Vector`], [`UnitId`] and
//!   [`KindId`], plus the [`serde_with_unit`] helper.
//!
//! # Errors and logging
//!
//! Contract violations are reported through [`UnitError`]; the only panicking entry point is `Vector`'s `Index`
//! impl. Rejected operations are logged at `debug` level through the `log` facade.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

#[macro_use]
mod macros;

pub mod composite;
pub mod equations;
mod error;
mod kind;
mod measure;
mod quantity;
mod registry;
mod unit;
mod vector;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use error::{Result, UnitError};
pub use kind::{Kind, KindId};
pub use measure::{Measure, Operand};
pub use quantity::Quantity;
pub use registry::UnitId;
pub use unit::Unit;
pub use vector::{Vector, Vector2D, Vector3D};

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (one per kind)
// ─────────────────────────────────────────────────────────────────────────────

pub mod units;

pub use units::angle;
pub use units::area;
pub use units::charge;
pub use units::distance;
pub use units::energy;
pub use units::force;
pub use units::magnetic_moment;
pub use units::mass;
pub use units::pressure;
pub use units::speed;
pub use units::temperature;
pub use units::time;
