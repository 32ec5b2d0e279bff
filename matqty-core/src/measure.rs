//! Runtime-tagged unit values.

use crate::error::{Result, UnitError};
use crate::kind::{Kind, KindId};
use crate::quantity::Quantity;
use crate::registry::UnitId;
use crate::unit::Unit;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Div, Mul, Neg, Rem};

/// A unit value whose concrete unit is only known at runtime.
///
/// `Measure` is the dynamic counterpart of [`Quantity`]: it stores the [`UnitId`], the value in that unit's own
/// scale, and the same value expressed in the kind's base unit (computed once, at construction). Parsers that read
/// a unit from a file header produce these, and [`crate::Vector`] holds them so that one vector can mix concrete
/// units of the same kind.
///
/// The operator set is closed. Addition, subtraction and comparisons require the identical concrete unit; products
/// and quotients only accept a bare scalar. Everything else fails with [`UnitError::UnsafeOperation`]:
///
/// ```rust
/// use matqty_core::{Measure, UnitError, UnitId};
///
/// let a = Measure::new(UnitId::Angstrom, 1.0);
/// assert_eq!(a.try_add(a).unwrap(), Measure::new(UnitId::Angstrom, 2.0));
///
/// let nm = Measure::new(UnitId::Nanometer, 1.0);
/// assert!(matches!(a.try_add(nm), Err(UnitError::UnsafeOperation { .. })));
///
/// // normalise first
/// let sum = a.try_add(nm.to(UnitId::Angstrom).unwrap()).unwrap();
/// assert!((sum.value() - 11.0).abs() < 1e-9);
/// ```
///
/// The derived `PartialEq` is structural (same unit, same value); use [`Measure::try_eq`] for the checked form.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "RawMeasure", from = "RawMeasure")
)]
pub struct Measure {
    unit: UnitId,
    value: f64,
    base_value: f64,
}

/// Right-hand side of a multiplicative operation on a [`Measure`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    /// A bare number.
    Scalar(f64),
    /// Another unit value.
    Unit(Measure),
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<Measure> for Operand {
    fn from(value: Measure) -> Self {
        Operand::Unit(value)
    }
}

impl Measure {
    /// Creates a measure from a value in `unit`'s own scale.
    pub fn new(unit: UnitId, value: f64) -> Self {
        Self {
            unit,
            value,
            base_value: unit.to_base(value),
        }
    }

    /// Creates a measure in `unit` from a value already expressed in the kind's base unit.
    ///
    /// ```rust
    /// use matqty_core::{Measure, UnitId};
    /// let k = Measure::from_base(UnitId::Kelvin, 1.0);
    /// assert!((k.value() - 274.15).abs() < 1e-9);
    /// ```
    pub fn from_base(unit: UnitId, base_value: f64) -> Self {
        Self {
            unit,
            value: unit.from_base(base_value),
            base_value,
        }
    }

    /// Concrete unit of this measure.
    #[inline]
    pub fn unit(&self) -> UnitId {
        self.unit
    }

    /// Kind of this measure's unit.
    #[inline]
    pub fn kind(&self) -> KindId {
        self.unit.kind()
    }

    /// Value in the unit's own scale.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value expressed in the kind's base unit.
    #[inline]
    pub fn base_value(&self) -> f64 {
        self.base_value
    }

    /// Value truncated towards zero.
    #[inline]
    pub fn to_i64(&self) -> i64 {
        self.value as i64
    }

    /// Converts to another unit of the same kind.
    ///
    /// ```rust
    /// use matqty_core::{Measure, UnitError, UnitId};
    ///
    /// let c = Measure::new(UnitId::Celsius, 1.0);
    /// assert!((c.to(UnitId::Kelvin).unwrap().value() - 274.15).abs() < 1e-9);
    /// assert!(matches!(c.to(UnitId::Meter), Err(UnitError::KindMismatch { .. })));
    /// ```
    pub fn to(&self, target: UnitId) -> Result<Measure> {
        if target.kind() != self.kind() {
            return Err(UnitError::kind_mismatch("to", self.kind(), target.kind()));
        }
        Ok(Measure::from_base(target, self.base_value))
    }

    /// Converts to the kind's designated base unit.
    pub fn to_base(&self) -> Measure {
        Measure::from_base(self.kind().base(), self.base_value)
    }

    /// Converts into the statically typed unit `U`.
    ///
    /// Fails with [`UnitError::KindMismatch`] if `U` belongs to another kind.
    ///
    /// ```rust
    /// use matqty_core::distance::Nanometer;
    /// use matqty_core::{Measure, UnitId};
    ///
    /// let nm = Measure::new(UnitId::Angstrom, 10.0).to_quantity::<Nanometer>().unwrap();
    /// assert!((nm.value() - 1.0).abs() < 1e-12);
    /// ```
    pub fn to_quantity<U: Unit>(&self) -> Result<Quantity<U>> {
        let expected = <U::Kind as Kind>::ID;
        if expected != self.kind() {
            return Err(UnitError::kind_mismatch("to_quantity", expected, self.kind()));
        }
        Ok(Quantity::from_base(self.base_value))
    }

    /// Returns `self` if it belongs to `kind`, otherwise a kind mismatch for `operation`.
    pub(crate) fn require_kind(self, kind: KindId, operation: &'static str) -> Result<Self> {
        if self.kind() == kind {
            Ok(self)
        } else {
            Err(UnitError::kind_mismatch(operation, kind, self.kind()))
        }
    }

    fn require_same_unit(&self, rhs: &Measure, operation: &'static str) -> Result<()> {
        if self.unit == rhs.unit {
            Ok(())
        } else {
            Err(UnitError::unsafe_operation(operation, self.unit.name(), rhs.unit.name()))
        }
    }

    fn scalar(&self, rhs: Operand, operation: &'static str) -> Result<f64> {
        match rhs {
            Operand::Scalar(s) => Ok(s),
            Operand::Unit(m) => Err(UnitError::unsafe_operation(operation, self.unit.name(), m.unit.name())),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds a measure of the identical concrete unit.
    pub fn try_add(&self, rhs: Measure) -> Result<Measure> {
        self.require_same_unit(&rhs, "add")?;
        Ok(Measure::new(self.unit, self.value + rhs.value))
    }

    /// Subtracts a measure of the identical concrete unit.
    pub fn try_sub(&self, rhs: Measure) -> Result<Measure> {
        self.require_same_unit(&rhs, "subtract")?;
        Ok(Measure::new(self.unit, self.value - rhs.value))
    }

    /// Scales by a scalar. Multiplying by another unit value is rejected.
    ///
    /// ```rust
    /// use matqty_core::{Measure, UnitId};
    ///
    /// let a = Measure::new(UnitId::Angstrom, 2.0);
    /// assert_eq!(a.try_mul(3.0).unwrap(), Measure::new(UnitId::Angstrom, 6.0));
    /// assert_eq!(
    ///     a.try_mul(Measure::new(UnitId::Angstrom, 1.0)).unwrap_err().to_string(),
    ///     "unsafe unit operation: cannot multiply Angstrom and Angstrom"
    /// );
    /// ```
    pub fn try_mul(&self, rhs: impl Into<Operand>) -> Result<Measure> {
        let s = self.scalar(rhs.into(), "multiply")?;
        Ok(*self * s)
    }

    /// Divides by a scalar. Dividing by another unit value is rejected.
    pub fn try_div(&self, rhs: impl Into<Operand>) -> Result<Measure> {
        let s = self.scalar(rhs.into(), "divide")?;
        Ok(*self / s)
    }

    /// Divides by a scalar and floors the result.
    pub fn try_floor_div(&self, rhs: impl Into<Operand>) -> Result<Measure> {
        let s = self.scalar(rhs.into(), "floor-divide")?;
        Ok(Measure::new(self.unit, (self.value / s).floor()))
    }

    /// Remainder after division by a scalar.
    pub fn try_rem(&self, rhs: impl Into<Operand>) -> Result<Measure> {
        let s = self.scalar(rhs.into(), "take the modulus of")?;
        Ok(*self % s)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Comparison
    // ─────────────────────────────────────────────────────────────────────────

    /// Orders two measures of the identical concrete unit by value.
    ///
    /// `Ok(None)` means the values are unordered (a NaN is involved).
    pub fn try_cmp(&self, rhs: &Measure) -> Result<Option<Ordering>> {
        self.require_same_unit(rhs, "compare")?;
        Ok(self.value.partial_cmp(&rhs.value))
    }

    /// `self < rhs`, same concrete unit only.
    pub fn try_lt(&self, rhs: &Measure) -> Result<bool> {
        self.require_same_unit(rhs, "compare")?;
        Ok(self.value < rhs.value)
    }

    /// `self <= rhs`, same concrete unit only.
    pub fn try_le(&self, rhs: &Measure) -> Result<bool> {
        self.require_same_unit(rhs, "compare")?;
        Ok(self.value <= rhs.value)
    }

    /// `self > rhs`, same concrete unit only.
    pub fn try_gt(&self, rhs: &Measure) -> Result<bool> {
        self.require_same_unit(rhs, "compare")?;
        Ok(self.value > rhs.value)
    }

    /// `self >= rhs`, same concrete unit only.
    pub fn try_ge(&self, rhs: &Measure) -> Result<bool> {
        self.require_same_unit(rhs, "compare")?;
        Ok(self.value >= rhs.value)
    }

    /// `self == rhs`, same concrete unit only.
    pub fn try_eq(&self, rhs: &Measure) -> Result<bool> {
        self.require_same_unit(rhs, "compare")?;
        Ok(self.value == rhs.value)
    }

    /// `self != rhs`, same concrete unit only.
    pub fn try_ne(&self, rhs: &Measure) -> Result<bool> {
        self.try_eq(rhs).map(|eq| !eq)
    }
}

impl Mul<f64> for Measure {
    type Output = Measure;
    fn mul(self, rhs: f64) -> Measure {
        Measure::new(self.unit, self.value * rhs)
    }
}

impl Div<f64> for Measure {
    type Output = Measure;
    fn div(self, rhs: f64) -> Measure {
        Measure::new(self.unit, self.value / rhs)
    }
}

impl Rem<f64> for Measure {
    type Output = Measure;
    fn rem(self, rhs: f64) -> Measure {
        Measure::new(self.unit, self.value % rhs)
    }
}

impl Neg for Measure {
    type Output = Measure;
    fn neg(self) -> Measure {
        Measure::new(self.unit, -self.value)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        write!(f, " {}", self.unit.symbol())
    }
}

impl<U: Unit> From<Quantity<U>> for Measure {
    fn from(quantity: Quantity<U>) -> Self {
        Measure::new(U::ID, quantity.value())
    }
}

impl<U: Unit> TryFrom<Measure> for Quantity<U> {
    type Error = UnitError;

    fn try_from(measure: Measure) -> Result<Self> {
        measure.to_quantity()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawMeasure {
    unit: UnitId,
    value: f64,
}

#[cfg(feature = "serde")]
impl From<Measure> for RawMeasure {
    fn from(m: Measure) -> Self {
        RawMeasure {
            unit: m.unit,
            value: m.value,
        }
    }
}

#[cfg(feature = "serde")]
impl From<RawMeasure> for Measure {
    fn from(raw: RawMeasure) -> Self {
        Measure::new(raw.unit, raw.value)
    }
}
