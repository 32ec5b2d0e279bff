//! Temperature units.
//!
//! The base unit for this kind is [`Celsius`]. Temperature is the one kind whose conversions are affine rather than
//! a pure scale factor, so these units carry an `offset` that is applied before scaling:
//!
//! | Unit | to Celsius | from Celsius |
//! |---|---|---|
//! | [`Fahrenheit`] | `(x - 32) * 5/9` | `x * 9/5 + 32` |
//! | [`Kelvin`] | `x - 273.15` | `x + 273.15` |
//!
//! Scaling by a scalar multiplies the value in the unit's own scale, so `Kelvins::new(300.0) * 2.0` is 600 K,
//! while the same operation on 26.85 °C gives 53.7 °C. Normalise before scaling if that matters.
//!
//! ```rust
//! use matqty_core::temperature::{DegreesCelsius, Kelvin, Kelvins, Celsius};
//!
//! assert!((DegreesCelsius::new(1.0).to::<Kelvin>().value() - 274.15).abs() < 1e-9);
//! assert!((Kelvins::new(274.15).to::<Celsius>().value() - 1.0).abs() < 1e-9);
//! ```

use crate::Quantity;
use matqty_derive::Unit;

define_kind!(
    /// Kind tag for temperature.
    Temperature,
    TemperatureUnit,
    name = "TemperatureUnit",
    base = Celsius
);

/// Degree Celsius (base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "°C", kind = Temperature, ratio = 1.0)]
pub struct Celsius;
/// A temperature in degrees Celsius.
pub type DegreesCelsius = Quantity<Celsius>;

/// Degree Fahrenheit.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "°F", kind = Temperature, ratio = 5.0 / 9.0, offset = -32.0)]
pub struct Fahrenheit;
/// A temperature in degrees Fahrenheit.
pub type DegreesFahrenheit = Quantity<Fahrenheit>;

/// Kelvin.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "K", kind = Temperature, ratio = 1.0, offset = -273.15)]
pub struct Kelvin;
/// A temperature in kelvin.
pub type Kelvins = Quantity<Kelvin>;

impl_unit_conversions!(Celsius, Fahrenheit, Kelvin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn celsius_to_kelvin() {
        let k = DegreesCelsius::new(1.0).to::<Kelvin>();
        assert_abs_diff_eq!(k.value(), 274.15, epsilon = 1e-9);
    }

    #[test]
    fn kelvin_to_celsius() {
        let c = Kelvins::new(274.15).to::<Celsius>();
        assert_abs_diff_eq!(c.value(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn fahrenheit_fixed_points() {
        assert_abs_diff_eq!(DegreesFahrenheit::new(32.0).to::<Celsius>().value(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(DegreesFahrenheit::new(212.0).to::<Celsius>().value(), 100.0, epsilon = 1e-12);
        assert_abs_diff_eq!(DegreesFahrenheit::new(-40.0).to::<Celsius>().value(), -40.0, epsilon = 1e-12);
    }

    #[test]
    fn celsius_to_fahrenheit() {
        let f = DegreesCelsius::new(37.0).to::<Fahrenheit>();
        assert_abs_diff_eq!(f.value(), 98.6, epsilon = 1e-9);
    }

    #[test]
    fn kelvin_to_fahrenheit() {
        let f = Kelvins::new(0.0).to::<Fahrenheit>();
        assert_abs_diff_eq!(f.value(), -459.67, epsilon = 1e-9);
    }

    #[test]
    fn conversion_functions_match_documented_formulas() {
        for x in [-40.0, 0.0, 1.0, 98.6, 1500.0] {
            assert_relative_eq!(Fahrenheit::to_base(x), (x - 32.0) * 5.0 / 9.0, epsilon = 1e-12, max_relative = 1e-12);
            assert_relative_eq!(Fahrenheit::from_base(x), x * 9.0 / 5.0 + 32.0, epsilon = 1e-12, max_relative = 1e-12);
            assert_relative_eq!(Kelvin::to_base(x), x - 273.15, epsilon = 1e-12, max_relative = 1e-12);
            assert_relative_eq!(Kelvin::from_base(x), x + 273.15, epsilon = 1e-12, max_relative = 1e-12);
        }
    }

    #[test]
    fn scaling_acts_on_own_scale() {
        let doubled = Kelvins::new(300.0) * 2.0;
        assert_eq!(doubled.value(), 600.0);
    }

    proptest! {
        #[test]
        fn prop_roundtrip_kelvin_fahrenheit(x in 0.0..1e5f64) {
            let back = Kelvins::new(x).to::<Fahrenheit>().to::<Kelvin>();
            prop_assert!((back.value() - x).abs() < 1e-9 * x.abs().max(1.0));
        }

        #[test]
        fn prop_kelvin_celsius_offset(x in -1e5..1e5f64) {
            let c = Kelvins::new(x).to::<Celsius>();
            prop_assert!((x - c.value() - 273.15).abs() < 1e-9 * x.abs().max(1.0));
        }
    }
}
