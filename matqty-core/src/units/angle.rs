//! Plane angle units and helpers.
//!
//! The base unit for this kind is [`Radian`]; [`Degree`] is `π/180` radians. Lattice angles (α, β, γ) in cell
//! files and Euler-angle triples are usually written in degrees.
//!
//! Angle quantities also expose trigonometry (converted to radians internally) and wrapping into a canonical range:
//!
//! ```rust
//! use matqty_core::angle::{Degrees, Radian};
//!
//! let gamma = Degrees::new(120.0);
//! assert!((gamma.cos() + 0.5).abs() < 1e-12);
//! assert!((gamma.to::<Radian>().value() - 2.0 * core::f64::consts::FRAC_PI_3).abs() < 1e-12);
//! assert!((Degrees::new(370.0).wrap_signed().value() - 10.0).abs() < 1e-9);
//! ```

use crate::Quantity;
use core::f64::consts::{PI, TAU};
use matqty_derive::Unit;

define_kind!(
    /// Kind tag for plane angles.
    Angle,
    AngleUnit,
    name = "AngleUnit",
    base = Radian
);

/// Radian (base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rad", kind = Angle, ratio = 1.0)]
pub struct Radian;
/// A quantity measured in radians.
pub type Radians = Quantity<Radian>;
/// One radian.
pub const RAD: Radians = Radians::new(1.0);

/// Degree (`π/180 rad`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "°", kind = Angle, ratio = PI / 180.0)]
pub struct Degree;
/// A quantity measured in degrees.
pub type Degrees = Quantity<Degree>;
/// One degree.
pub const DEG: Degrees = Degrees::new(1.0);

impl_unit_conversions!(Radian, Degree);

impl<U: AngleUnit> Quantity<U> {
    /// One full revolution expressed in `U`.
    #[inline]
    pub fn full_turn() -> Self {
        Self::from_base(TAU)
    }

    /// Sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        self.base_value().sin()
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        self.base_value().cos()
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(self) -> f64 {
        self.base_value().tan()
    }

    /// Simultaneously compute sine and cosine.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.base_value().sin_cos()
    }

    /// Wrap into the positive range `[0, full turn)`.
    #[inline]
    pub fn wrap_pos(self) -> Self {
        let full = Self::full_turn().value();
        let r = self.value().rem_euclid(full);
        // rem_euclid rounds up to `full` for tiny negative inputs
        Self::new(if r >= full { 0.0 } else { r })
    }

    /// Wrap into the signed range `(-half turn, half turn]`.
    #[inline]
    pub fn wrap_signed(self) -> Self {
        let full = Self::full_turn().value();
        let half = 0.5 * full;
        let y = (self.value() + half).rem_euclid(full) - half;
        Self::new(if y <= -half { y + full } else { y })
    }
}

impl Degrees {
    /// Construct from degree, arcminute and arcsecond components.
    ///
    /// Sign is taken from `deg`; `min` and `sec` are magnitudes.
    ///
    /// ```rust
    /// use matqty_core::angle::Degrees;
    /// let beta = Degrees::from_dms(-109, 28, 16.4);
    /// assert!((beta.value() + 109.471_222).abs() < 1e-6);
    /// ```
    pub fn from_dms(deg: i32, min: u32, sec: f64) -> Self {
        let sign = if deg < 0 { -1.0 } else { 1.0 };
        let d_abs = f64::from(deg.unsigned_abs());
        Self::new(sign * (d_abs + f64::from(min) / 60.0 + sec / 3600.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn degrees_to_radians() {
        let rad = Degrees::new(180.0).to::<Radian>();
        assert_abs_diff_eq!(rad.value(), PI, epsilon = 1e-12);
    }

    #[test]
    fn radians_to_degrees() {
        let deg = Radians::new(FRAC_PI_2).to::<Degree>();
        assert_abs_diff_eq!(deg.value(), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn full_turn_in_each_unit() {
        assert_abs_diff_eq!(Degrees::full_turn().value(), 360.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Radians::full_turn().value(), TAU, epsilon = 1e-12);
    }

    #[test]
    fn trig_uses_radians() {
        assert_abs_diff_eq!(Degrees::new(90.0).sin(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Degrees::new(60.0).cos(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(Radians::new(PI / 4.0).tan(), 1.0, epsilon = 1e-12);
        let (s, c) = Degrees::new(30.0).sin_cos();
        assert_abs_diff_eq!(s, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(c, 3f64.sqrt() / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn wrap_pos_degrees() {
        assert_abs_diff_eq!(Degrees::new(-90.0).wrap_pos().value(), 270.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Degrees::new(725.0).wrap_pos().value(), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn wrap_pos_tiny_negative_stays_below_full_turn() {
        let deg = Degrees::new(-1e-20).wrap_pos().value();
        assert!((0.0..360.0).contains(&deg), "got {deg}");
        let rad = Radians::new(-1e-20).wrap_pos().value();
        assert!((0.0..Radians::full_turn().value()).contains(&rad), "got {rad}");
    }

    #[test]
    fn wrap_signed_degrees() {
        assert_abs_diff_eq!(Degrees::new(190.0).wrap_signed().value(), -170.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Degrees::new(180.0).wrap_signed().value(), 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Degrees::new(-180.0).wrap_signed().value(), 180.0, epsilon = 1e-12);
    }

    #[test]
    fn from_dms_positive() {
        let a = Degrees::from_dms(90, 30, 0.0);
        assert_abs_diff_eq!(a.value(), 90.5, epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_roundtrip_deg_rad(x in -1e6..1e6f64) {
            let back = Degrees::new(x).to::<Radian>().to::<Degree>();
            prop_assert!((back.value() - x).abs() < 1e-9 * x.abs().max(1.0));
        }

        #[test]
        fn prop_wrap_pos_range(x in -1e4..1e4f64) {
            let w = Degrees::new(x).wrap_pos().value();
            prop_assert!(w >= 0.0 && w < Degrees::full_turn().value());
        }

        #[test]
        fn prop_wrap_pos_range_near_zero(x in -1e-12..0.0f64) {
            let w = Radians::new(x).wrap_pos().value();
            prop_assert!(w >= 0.0 && w < Radians::full_turn().value());
        }
    }
}
