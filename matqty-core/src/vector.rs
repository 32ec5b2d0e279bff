//! Fixed-arity vectors of same-kind unit values.

use crate::error::{Result, UnitError};
use crate::kind::KindId;
use crate::measure::Measure;
use crate::quantity::Quantity;
use crate::registry::UnitId;
use crate::unit::Unit;
use core::fmt;
use core::ops::Index;
use nalgebra::{Rotation3, SVector, Vector3};
use ndarray::Array1;

/// An ordered tuple of `N` unit values sharing one kind.
///
/// Components may use different concrete units of that kind (e.g. `[1 m, 0 m, 0 nm]`); every operation works on
/// base values and re-expresses results in each component's own unit. The kind is fixed at construction and
/// enforced by [`Vector::set`].
///
/// ```rust
/// use matqty_core::{Measure, UnitId, Vector3D};
///
/// let position = Vector3D::new([
///     Measure::new(UnitId::Angstrom, 1.0),
///     Measure::new(UnitId::Angstrom, 1.0),
///     Measure::new(UnitId::Angstrom, 1.0),
/// ])
/// .unwrap();
/// let length = position.magnitude(UnitId::Nanometer).unwrap();
/// assert!((length.value() - 0.173_205_08).abs() < 1e-8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Vec<Measure>", try_from = "Vec<Measure>")
)]
pub struct Vector<const N: usize> {
    components: [Measure; N],
    kind: KindId,
}

/// A two-component vector.
pub type Vector2D = Vector<2>;
/// A three-component vector (positions, velocities, Euler-angle triples).
pub type Vector3D = Vector<3>;

impl<const N: usize> Vector<N> {
    /// Builds a vector, checking that every component has the same kind.
    ///
    /// ```rust
    /// use matqty_core::{Measure, UnitError, UnitId, Vector3D};
    ///
    /// let angles = [
    ///     Measure::new(UnitId::Radian, 1.0),
    ///     Measure::new(UnitId::Radian, 1.0),
    ///     Measure::new(UnitId::Degree, 1.0),
    /// ];
    /// assert!(Vector3D::new(angles).is_ok());
    ///
    /// let mixed = [
    ///     Measure::new(UnitId::Radian, 1.0),
    ///     Measure::new(UnitId::Radian, 1.0),
    ///     Measure::new(UnitId::Angstrom, 1.0),
    /// ];
    /// assert!(matches!(Vector3D::new(mixed), Err(UnitError::KindMismatch { .. })));
    /// ```
    pub fn new(components: [Measure; N]) -> Result<Self> {
        let kind = components.first().ok_or(UnitError::EmptyVector)?.kind();
        if let Some(other) = components.iter().find(|c| c.kind() != kind) {
            return Err(UnitError::kind_mismatch("vector construction", kind, other.kind()));
        }
        Ok(Self { components, kind })
    }

    /// Builds a vector from statically typed quantities of one unit.
    pub fn from_quantities<U: Unit>(quantities: [Quantity<U>; N]) -> Result<Self> {
        Self::new(quantities.map(Measure::from))
    }

    /// Builds a vector from a slice, failing with [`UnitError::ArityMismatch`] unless it holds exactly `N` items.
    pub fn try_from_slice(components: &[Measure]) -> Result<Self> {
        let components: [Measure; N] = components.try_into().map_err(|_| UnitError::ArityMismatch {
            expected: N,
            found: components.len(),
        })?;
        Self::new(components)
    }

    /// Kind shared by every component.
    #[inline]
    pub fn kind(&self) -> KindId {
        self.kind
    }

    /// Number of components.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Always `false` for a constructed vector.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Iterates over the components.
    pub fn iter(&self) -> core::slice::Iter<'_, Measure> {
        self.components.iter()
    }

    /// Component at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Measure> {
        self.components.get(index)
    }

    /// All components.
    pub fn components(&self) -> &[Measure; N] {
        &self.components
    }

    /// Replaces the component at `index`.
    ///
    /// The replacement may use any unit of the vector's kind.
    pub fn set(&mut self, index: usize, value: Measure) -> Result<()> {
        let slot = self
            .components
            .get_mut(index)
            .ok_or(UnitError::IndexOutOfBounds { index, len: N })?;
        if value.kind() != self.kind {
            return Err(UnitError::kind_mismatch("set", self.kind, value.kind()));
        }
        *slot = value;
        Ok(())
    }

    fn target_or_base(&self, target: Option<UnitId>, operation: &'static str) -> Result<UnitId> {
        let target = target.unwrap_or_else(|| self.kind.base());
        if target.kind() != self.kind {
            return Err(UnitError::kind_mismatch(operation, self.kind, target.kind()));
        }
        Ok(target)
    }

    /// Components as plain numbers in `target` (the kind's base unit when `None`).
    ///
    /// ```rust
    /// use matqty_core::{Measure, UnitId, Vector2D};
    ///
    /// let v = Vector2D::new([Measure::new(UnitId::Nanometer, 1.0), Measure::new(UnitId::Angstrom, 5.0)]).unwrap();
    /// let [x, y] = v.to_array(Some(UnitId::Angstrom)).unwrap();
    /// assert!((x - 10.0).abs() < 1e-9 && (y - 5.0).abs() < 1e-9);
    /// ```
    pub fn to_array(&self, target: Option<UnitId>) -> Result<[f64; N]> {
        let target = self.target_or_base(target, "to_array")?;
        Ok(self.components.map(|c| target.from_base(c.base_value())))
    }

    /// Components as an `ndarray` in `target` (the kind's base unit when `None`).
    pub fn to_ndarray(&self, target: Option<UnitId>) -> Result<Array1<f64>> {
        Ok(Array1::from(self.to_array(target)?.to_vec()))
    }

    fn require_linear(&self, operation: &'static str) -> Result<()> {
        if self.kind == KindId::Temperature {
            log::debug!("rejecting {operation} of a {} vector", self.kind);
            return Err(UnitError::UnsupportedKind {
                operation,
                kind: self.kind,
            });
        }
        Ok(())
    }

    /// Euclidean norm of the components expressed in `target`.
    ///
    /// Temperature vectors are rejected with [`UnitError::UnsupportedKind`]: a norm taken on an affine scale
    /// depends on the target unit's zero point.
    pub fn magnitude(&self, target: UnitId) -> Result<Measure> {
        self.require_linear("take the magnitude of")?;
        let target = self.target_or_base(Some(target), "magnitude")?;
        let v = SVector::<f64, N>::from(self.to_array(Some(target))?);
        Ok(Measure::new(target, v.norm()))
    }

    /// Euclidean distance `sqrt(Σ(aᵢ - bᵢ)²)` to `other`, expressed in `target`.
    ///
    /// Like [`Vector::magnitude`], not defined for temperature vectors.
    ///
    /// ```rust
    /// use matqty_core::distance::Angstroms;
    /// use matqty_core::{UnitId, Vector3D};
    ///
    /// let a = Vector3D::from_quantities([Angstroms::new(0.0), Angstroms::new(0.0), Angstroms::new(0.0)]).unwrap();
    /// let b = Vector3D::from_quantities([Angstroms::new(3.0), Angstroms::new(4.0), Angstroms::new(0.0)]).unwrap();
    /// assert!((a.separation(&b, UnitId::Angstrom).unwrap().value() - 5.0).abs() < 1e-9);
    /// ```
    pub fn separation(&self, other: &Vector<N>, target: UnitId) -> Result<Measure> {
        if other.kind != self.kind {
            return Err(UnitError::kind_mismatch("separation", self.kind, other.kind));
        }
        self.require_linear("measure the separation of")?;
        let target = self.target_or_base(Some(target), "separation")?;
        let a = SVector::<f64, N>::from(self.to_array(Some(target))?);
        let b = SVector::<f64, N>::from(other.to_array(Some(target))?);
        Ok(Measure::new(target, (a - b).norm()))
    }

    /// Adds `other` component-wise, keeping each component in its own unit.
    ///
    /// Each offset is converted into the unit of the component it shifts and added on that scale, so affine
    /// temperature components translate as `10 K + 10 K = 20 K`.
    pub fn translate(&mut self, other: &Vector<N>) -> Result<()> {
        if other.kind != self.kind {
            return Err(UnitError::kind_mismatch("translate", self.kind, other.kind));
        }
        log::trace!("translating {self} by {other}");
        let mut shifted = self.components;
        for (c, d) in shifted.iter_mut().zip(other.components.iter()) {
            *c = Measure::new(c.unit(), c.value() + d.to(c.unit())?.value());
        }
        self.components = shifted;
        Ok(())
    }
}

impl Vector<3> {
    /// Rotates a distance or speed vector by a rotation vector of angles.
    ///
    /// `angles` is read as an axis-angle rotation vector (direction is the axis, norm is the angle in radians).
    /// Each rotated component is re-expressed in its original unit.
    ///
    /// ```rust
    /// use matqty_core::{Measure, UnitId, Vector3D};
    ///
    /// let mut p = Vector3D::new([
    ///     Measure::new(UnitId::Meter, 1.0),
    ///     Measure::new(UnitId::Meter, 0.0),
    ///     Measure::new(UnitId::Nanometer, 0.0),
    /// ])
    /// .unwrap();
    /// let quarter = Vector3D::new([
    ///     Measure::new(UnitId::Degree, 0.0),
    ///     Measure::new(UnitId::Radian, 0.0),
    ///     Measure::new(UnitId::Radian, core::f64::consts::FRAC_PI_4),
    /// ])
    /// .unwrap();
    /// p.rotate(&quarter).unwrap();
    /// assert!((p[0].value() - 0.707_106_78).abs() < 1e-8);
    /// assert_eq!(p[2].unit(), UnitId::Nanometer);
    /// ```
    pub fn rotate(&mut self, angles: &Vector3D) -> Result<()> {
        if !matches!(self.kind, KindId::Distance | KindId::Speed) {
            log::debug!("rejecting rotate of a {} vector", self.kind);
            return Err(UnitError::UnsupportedKind {
                operation: "rotate",
                kind: self.kind,
            });
        }
        if angles.kind != KindId::Angle {
            return Err(UnitError::kind_mismatch("rotate", KindId::Angle, angles.kind));
        }
        log::trace!("rotating {self} by {angles}");

        let axis = Vector3::from(angles.components.map(|a| a.base_value()));
        let rotated = Rotation3::new(axis) * Vector3::from(self.components.map(|c| c.base_value()));
        for (c, r) in self.components.iter_mut().zip(rotated.iter()) {
            *c = Measure::from_base(c.unit(), *r);
        }
        Ok(())
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = Measure;

    fn index(&self, index: usize) -> &Measure {
        &self.components[index]
    }
}

impl<'a, const N: usize> IntoIterator for &'a Vector<N> {
    type Item = &'a Measure;
    type IntoIter = core::slice::Iter<'a, Measure>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl<const N: usize> TryFrom<&[Measure]> for Vector<N> {
    type Error = UnitError;

    fn try_from(components: &[Measure]) -> Result<Self> {
        Self::try_from_slice(components)
    }
}

impl<const N: usize> TryFrom<Vec<Measure>> for Vector<N> {
    type Error = UnitError;

    fn try_from(components: Vec<Measure>) -> Result<Self> {
        Self::try_from_slice(&components)
    }
}

impl<const N: usize> From<Vector<N>> for Vec<Measure> {
    fn from(vector: Vector<N>) -> Self {
        vector.components.to_vec()
    }
}

impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("]")
    }
}
