//! Quantity type and its implementations.

use crate::kind::Kind;
use crate::unit::Unit;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value tagged with a concrete unit known at compile time.
///
/// `Quantity<U>` wraps an `f64` expressed *in `U`'s own scale* together with phantom type information about `U`.
/// Kind safety is enforced by the type system:
///
/// - [`Quantity::to`] only accepts a target unit of the same kind.
/// - `+`, `-`, `==` and `<` are only defined between quantities of the identical unit; normalise with `to` first.
/// - `*`, `/` and `%` only accept a bare `f64` scalar.
///
/// ```rust
/// use matqty_core::distance::{Angstroms, Nanometer};
///
/// let a = Angstroms::new(1.0) + Angstroms::new(1.0);
/// assert_eq!(a, Angstroms::new(2.0));
/// assert!((a.to::<Nanometer>().value() - 0.2).abs() < 1e-12);
/// ```
///
/// Different concrete units do not add, even within one kind:
///
/// ```compile_fail
/// use matqty_core::distance::{Angstroms, Nanometers};
/// let _ = Angstroms::new(1.0) + Nanometers::new(1.0);
/// ```
///
/// Two quantities never multiply:
///
/// ```compile_fail
/// use matqty_core::distance::Angstroms;
/// let _ = Angstroms::new(2.0) * Angstroms::new(1.0);
/// ```
///
/// Conversions across kinds do not compile:
///
/// ```compile_fail
/// use matqty_core::distance::Angstroms;
/// use matqty_core::time::Second;
/// let _ = Angstroms::new(1.0).to::<Second>();
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Quantity<U: Unit>(f64, PhantomData<U>);

impl<U: Unit> Quantity<U> {
    /// A constant representing NaN for this quantity type.
    pub const NAN: Self = Self::new(f64::NAN);

    /// Creates a new quantity from a value in `U`'s own scale.
    ///
    /// ```rust
    /// use matqty_core::distance::Angstroms;
    /// assert_eq!(Angstroms::new(5.0).value(), 5.0);
    /// ```
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value, PhantomData)
    }

    /// Creates a quantity from a value already expressed in the kind's base unit.
    ///
    /// ```rust
    /// use matqty_core::distance::Nanometers;
    /// let d = Nanometers::from_base(2e-9);
    /// assert!((d.value() - 2.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn from_base(base_value: f64) -> Self {
        Self::new(U::from_base(base_value))
    }

    /// Returns the raw numeric value in `U`'s own scale.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the same physical quantity expressed in the kind's base unit.
    ///
    /// ```rust
    /// use matqty_core::temperature::Kelvins;
    /// assert!((Kelvins::new(274.15).base_value() - 1.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn base_value(self) -> f64 {
        U::to_base(self.0)
    }

    /// Returns the value truncated towards zero, the integer coercion.
    #[inline]
    pub fn to_i64(self) -> i64 {
        self.0 as i64
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs())
    }

    /// Converts this quantity to another unit of the same kind.
    ///
    /// The value is reduced to the base unit with `U::to_base` and re-expressed with `T::from_base`, so affine
    /// scales convert correctly:
    ///
    /// ```rust
    /// use matqty_core::temperature::{DegreesCelsius, Kelvin};
    ///
    /// let k = DegreesCelsius::new(1.0).to::<Kelvin>();
    /// assert!((k.value() - 274.15).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn to<T: Unit<Kind = U::Kind>>(self) -> Quantity<T> {
        Quantity::<T>::new(T::from_base(U::to_base(self.0)))
    }

    /// Converts this quantity to the kind's designated base unit.
    ///
    /// ```rust
    /// use matqty_core::distance::{Angstroms, Meters};
    /// let m: Meters = Angstroms::new(1e10).to_base();
    /// assert!((m.value() - 1.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn to_base(self) -> Quantity<<U::Kind as Kind>::Base> {
        self.to()
    }

    /// Divides by a scalar and rounds the result towards negative infinity.
    ///
    /// ```rust
    /// use matqty_core::distance::Angstroms;
    /// assert_eq!(Angstroms::new(7.0).floor_div(2.0), Angstroms::new(3.0));
    /// ```
    #[inline]
    pub fn floor_div(self, rhs: f64) -> Self {
        Self::new((self.0 / rhs).floor())
    }

    /// Returns the minimum of this quantity and another.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.0.min(other.0))
    }

    /// Returns the maximum of this quantity and another.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.0.max(other.0))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Add for Quantity<U> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<U: Unit> AddAssign for Quantity<U> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<U: Unit> SubAssign for Quantity<U> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<U: Unit> Mul<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<U: Unit> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;
    #[inline]
    fn mul(self, rhs: Quantity<U>) -> Self::Output {
        rhs * self
    }
}

impl<U: Unit> MulAssign<f64> for Quantity<U> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.0 *= rhs;
    }
}

impl<U: Unit> Div<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<U: Unit> DivAssign<f64> for Quantity<U> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.0 /= rhs;
    }
}

impl<U: Unit> Rem<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: f64) -> Self {
        Self::new(self.0 % rhs)
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<U: Unit> From<f64> for Quantity<U> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl<U: Unit> From<Quantity<U>> for f64 {
    #[inline]
    fn from(quantity: Quantity<U>) -> f64 {
        quantity.value()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit> Serialize for Quantity<U> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> Deserialize<'de> for Quantity<U> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Ok(Quantity::new(value))
    }
}

/// Serde adapter that writes a quantity together with its unit symbol.
///
/// Plain `Quantity<U>` fields serialize as a bare number, which is compact but leaves the unit implicit. Job
/// metadata written next to simulation inputs (cutoffs, timesteps, smearing widths) is often read back by other
/// tools, so `#[serde(with = "matqty_core::serde_with_unit")]` emits `{"value": …, "unit": "<symbol>"}` instead.
///
/// On input the `unit` field may be omitted. When present it must match `U`'s symbol exactly: a cutoff stored
/// in nanometres is rejected by an ångström field rather than reinterpreted.
///
/// ```rust
/// use matqty_core::distance::Angstroms;
/// use matqty_core::time::Femtoseconds;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct MdSettings {
///     #[serde(with = "matqty_core::serde_with_unit")]
///     cutoff: Angstroms,
///     #[serde(with = "matqty_core::serde_with_unit")]
///     timestep: Femtoseconds,
/// }
///
/// let json = r#"{"cutoff":{"value":6.5,"unit":"Å"},"timestep":{"value":1.0}}"#;
/// let md: MdSettings = serde_json::from_str(json).unwrap();
/// assert_eq!(md.timestep, Femtoseconds::new(1.0));
///
/// let wrong = r#"{"cutoff":{"value":0.65,"unit":"nm"},"timestep":{"value":1.0}}"#;
/// assert!(serde_json::from_str::<MdSettings>(wrong).is_err());
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::Quantity;
    use crate::unit::Unit;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize)]
    struct Tagged {
        value: f64,
        unit: &'static str,
    }

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Untagged {
        value: f64,
        #[serde(default)]
        unit: Option<String>,
    }

    /// Writes `quantity` as `{"value": …, "unit": "<symbol>"}`.
    pub fn serialize<U, S>(quantity: &Quantity<U>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        S: Serializer,
    {
        Tagged {
            value: quantity.value(),
            unit: U::SYMBOL,
        }
        .serialize(serializer)
    }

    /// Reads `{"value": …}` or `{"value": …, "unit": "<symbol>"}`, rejecting any symbol other than `U`'s.
    pub fn deserialize<'de, U, D>(deserializer: D) -> Result<Quantity<U>, D::Error>
    where
        U: Unit,
        D: Deserializer<'de>,
    {
        let raw = Untagged::deserialize(deserializer)?;
        match raw.unit.as_deref() {
            Some(symbol) if symbol != U::SYMBOL => Err(D::Error::custom(format!(
                "unit mismatch: expected '{}', found '{}'",
                U::SYMBOL,
                symbol
            ))),
            _ => Ok(Quantity::new(raw.value)),
        }
    }

    #[cfg(test)]
    mod tests {
        use crate::distance::{Angstroms, Nanometers};
        use serde::{Deserialize, Serialize};

        #[derive(Serialize, Deserialize, Debug, PartialEq)]
        struct Cutoffs {
            #[serde(with = "crate::serde_with_unit")]
            pair: Angstroms,
            #[serde(with = "crate::serde_with_unit")]
            neighbour: Nanometers,
        }

        #[test]
        fn writes_symbol_next_to_value() {
            let c = Cutoffs {
                pair: Angstroms::new(6.5),
                neighbour: Nanometers::new(0.8),
            };
            let json = serde_json::to_string(&c).unwrap();
            assert_eq!(
                json,
                r#"{"pair":{"value":6.5,"unit":"Å"},"neighbour":{"value":0.8,"unit":"nm"}}"#
            );
            assert_eq!(serde_json::from_str::<Cutoffs>(&json).unwrap(), c);
        }

        #[test]
        fn unit_field_is_optional() {
            let json = r#"{"pair":{"value":6.5},"neighbour":{"value":0.8}}"#;
            let c: Cutoffs = serde_json::from_str(json).unwrap();
            assert_eq!(c.pair, Angstroms::new(6.5));
        }

        #[test]
        fn foreign_symbol_is_not_converted() {
            let json = r#"{"pair":{"value":0.65,"unit":"nm"},"neighbour":{"value":0.8}}"#;
            let err = serde_json::from_str::<Cutoffs>(json).unwrap_err();
            assert!(err.to_string().contains("unit mismatch: expected 'Å', found 'nm'"));
        }

        #[test]
        fn missing_value_is_rejected() {
            let json = r#"{"pair":{"unit":"Å"},"neighbour":{"value":0.8}}"#;
            assert!(serde_json::from_str::<Cutoffs>(json).is_err());
        }
    }
}
