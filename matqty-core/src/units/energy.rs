//! Energy units.
//!
//! The base unit for this kind is [`Joule`]. Total energies in OSZICAR/OUTCAR and cohesive energies in setfl
//! tables are reported in electronvolts.

use crate::Quantity;
use matqty_derive::Unit;

define_kind!(
    /// Kind tag for energy.
    Energy,
    EnergyUnit,
    name = "EnergyUnit",
    base = Joule
);

/// Joule (base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "J", kind = Energy, ratio = 1.0)]
pub struct Joule;
/// A quantity measured in joules.
pub type Joules = Quantity<Joule>;

/// Electronvolt (`1.60218e-19 J`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "eV", kind = Energy, ratio = 1.602_18e-19)]
pub struct ElectronVolt;
/// A quantity measured in electronvolts.
pub type ElectronVolts = Quantity<ElectronVolt>;

impl_unit_conversions!(Joule, ElectronVolt);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn electronvolt_to_joule() {
        let j = ElectronVolts::new(1.0).to::<Joule>();
        assert_relative_eq!(j.value(), 1.60218e-19, max_relative = 1e-12);
    }

    #[test]
    fn joule_to_electronvolt() {
        let ev = Joules::new(3.20436e-19).to::<ElectronVolt>();
        assert_relative_eq!(ev.value(), 2.0, max_relative = 1e-12);
    }

    #[test]
    fn cohesive_energy_sign_is_kept() {
        let ev = ElectronVolts::new(-4.28);
        let back = ev.to_base().to::<ElectronVolt>();
        assert_relative_eq!(back.value(), -4.28, max_relative = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_roundtrip_ev_j(x in -1e6..1e6f64) {
            let back = ElectronVolts::new(x).to::<Joule>().to::<ElectronVolt>();
            prop_assert!((back.value() - x).abs() < 1e-9 * x.abs().max(1.0));
        }
    }
}
