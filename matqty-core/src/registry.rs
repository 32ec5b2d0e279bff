//! Runtime registry of every concrete unit.
//!
//! [`UnitId`] is the closed set of units known to this crate. Each variant dispatches to the matching marker type's
//! [`Unit`] impl, so the runtime layer ([`crate::Measure`], [`crate::Vector`]) and the compile-time layer
//! ([`crate::Quantity`]) share one set of conversion functions.

use crate::kind::{Kind, KindId};
use crate::unit::Unit;
use crate::units::*;
use core::fmt;

macro_rules! unit_registry {
    ($($name:ident => $ty:ty),+ $(,)?) => {
        /// Runtime tag identifying a concrete unit.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum UnitId {
            $(
                #[doc = concat!("The `", stringify!($name), "` unit.")]
                $name,
            )+
        }

        impl UnitId {
            /// Every registered unit, grouped by kind.
            pub const ALL: &'static [UnitId] = &[$(UnitId::$name),+];

            /// Kind this unit belongs to.
            pub fn kind(self) -> KindId {
                match self {
                    $(UnitId::$name => <<$ty as Unit>::Kind as Kind>::ID,)+
                }
            }

            /// Type name of the unit (e.g. `"Angstrom"`).
            pub fn name(self) -> &'static str {
                match self {
                    $(UnitId::$name => <$ty as Unit>::NAME,)+
                }
            }

            /// Printable symbol (e.g. `"Å"`).
            pub fn symbol(self) -> &'static str {
                match self {
                    $(UnitId::$name => <$ty as Unit>::SYMBOL,)+
                }
            }

            /// Converts a value expressed in this unit into the kind's base unit.
            pub fn to_base(self, value: f64) -> f64 {
                match self {
                    $(UnitId::$name => <$ty as Unit>::to_base(value),)+
                }
            }

            /// Converts a value expressed in the kind's base unit into this unit.
            pub fn from_base(self, value: f64) -> f64 {
                match self {
                    $(UnitId::$name => <$ty as Unit>::from_base(value),)+
                }
            }
        }
    };
}

unit_registry! {
    Meter => distance::Meter,
    Angstrom => distance::Angstrom,
    Nanometer => distance::Nanometer,
    Picometer => distance::Picometer,
    Bohr => distance::Bohr,

    Second => time::Second,
    Picosecond => time::Picosecond,
    Femtosecond => time::Femtosecond,

    Kilogram => mass::Kilogram,
    Gram => mass::Gram,
    AtomicMassUnit => mass::AtomicMassUnit,
    Picogram => mass::Picogram,

    Joule => energy::Joule,
    ElectronVolt => energy::ElectronVolt,

    Celsius => temperature::Celsius,
    Fahrenheit => temperature::Fahrenheit,
    Kelvin => temperature::Kelvin,

    Coulomb => charge::Coulomb,
    ElectronCharge => charge::ElectronCharge,

    MeterPerSecond => speed::MeterPerSecond,
    AngstromPerPicosecond => speed::AngstromPerPicosecond,

    Radian => angle::Radian,
    Degree => angle::Degree,

    MeterSquared => area::MeterSquared,
    AngstromSquared => area::AngstromSquared,
    NanometerSquared => area::NanometerSquared,
    PicometerSquared => area::PicometerSquared,

    Pascal => pressure::Pascal,
    Bar => pressure::Bar,
    Kilobar => pressure::Kilobar,

    Newton => force::Newton,
    Dyne => force::Dyne,
    ElectronVoltPerAngstrom => force::ElectronVoltPerAngstrom,

    JoulePerTesla => magnetic_moment::JoulePerTesla,
    BohrMagneton => magnetic_moment::BohrMagneton,
}

impl UnitId {
    /// Whether this is the designated base unit of its kind.
    pub fn is_base(self) -> bool {
        self.kind().base() == self
    }

    /// Converts `value` from this unit into `target`, or `None` if the kinds differ.
    ///
    /// ```rust
    /// use matqty_core::UnitId;
    /// let nm = UnitId::Angstrom.convert(10.0, UnitId::Nanometer).unwrap();
    /// assert!((nm - 1.0).abs() < 1e-12);
    /// assert!(UnitId::Angstrom.convert(1.0, UnitId::Second).is_none());
    /// ```
    pub fn convert(self, value: f64, target: UnitId) -> Option<f64> {
        (self.kind() == target.kind()).then(|| target.from_base(self.to_base(value)))
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
