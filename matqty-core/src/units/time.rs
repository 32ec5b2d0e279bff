//! Time units.
//!
//! The base unit for this kind is [`Second`]. Molecular-dynamics timesteps are usually given in picoseconds
//! (LAMMPS `metal`) or femtoseconds (LAMMPS `real`, VASP `POTIM`).
//!
//! ```rust
//! use matqty_core::time::{Femtosecond, Picoseconds};
//!
//! let dt = Picoseconds::new(0.002);
//! assert!((dt.to::<Femtosecond>().value() - 2.0).abs() < 1e-9);
//! ```

use crate::Quantity;
use matqty_derive::Unit;

define_kind!(
    /// Kind tag for time.
    Time,
    TimeUnit,
    name = "TimeUnit",
    base = Second
);

/// Second (base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "s", kind = Time, ratio = 1.0)]
pub struct Second;
/// A quantity measured in seconds.
pub type Seconds = Quantity<Second>;
/// One second.
pub const SEC: Seconds = Seconds::new(1.0);

/// Picosecond (`1e-12 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ps", kind = Time, ratio = 1e-12)]
pub struct Picosecond;
/// A quantity measured in picoseconds.
pub type Picoseconds = Quantity<Picosecond>;
/// One picosecond.
pub const PICOSEC: Picoseconds = Picoseconds::new(1.0);

/// Femtosecond (`1e-15 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "fs", kind = Time, ratio = 1e-15)]
pub struct Femtosecond;
/// A quantity measured in femtoseconds.
pub type Femtoseconds = Quantity<Femtosecond>;
/// One femtosecond.
pub const FEMTOSEC: Femtoseconds = Femtoseconds::new(1.0);

impl_unit_conversions!(Second, Picosecond, Femtosecond);
