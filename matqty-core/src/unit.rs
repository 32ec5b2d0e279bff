//! The unit trait.

use crate::kind::Kind;
use crate::registry::UnitId;
use core::fmt::Debug;

/// Trait implemented by every **concrete unit** type.
///
/// * `Kind` ties the unit to its [`Kind`]; conversions are only offered between units of the same kind.
/// * `ID` is the unit's runtime tag in the closed [`UnitId`] registry.
/// * `to_base` / `from_base` convert a value in this unit to and from the kind's base unit. They are arbitrary
///   functions rather than a single factor because temperature scales are affine.
///
/// Built-in units derive this trait with `#[derive(Unit)]` and a `#[unit(symbol, kind, ratio, offset)]` attribute.
///
/// # Invariants
///
/// - `from_base(to_base(x)) == x` for every finite `x`, up to floating-point rounding.
/// - The kind's base unit has `to_base(x) == x`.
/// - Implementations are zero-sized marker types.
pub trait Unit: Copy + PartialEq + PartialOrd + Debug + 'static {
    /// Kind to which this unit belongs.
    type Kind: Kind;

    /// Runtime tag of this unit.
    const ID: UnitId;

    /// Type name of the unit (e.g. `"Angstrom"`), used in error messages.
    const NAME: &'static str;

    /// Printable symbol, shown by [`core::fmt::Display`].
    const SYMBOL: &'static str;

    /// Converts a value expressed in this unit into the kind's base unit.
    fn to_base(value: f64) -> f64;

    /// Converts a value expressed in the kind's base unit into this unit.
    fn from_base(value: f64) -> f64;
}
