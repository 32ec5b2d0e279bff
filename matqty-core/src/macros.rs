//! Macros for defining kinds and conversions.

/// Declares a kind marker enum, its [`Kind`](crate::Kind) impl and the blanket per-kind unit trait.
macro_rules! define_kind {
    (
        $(#[$meta:meta])*
        $kind:ident, $marker:ident, name = $name:literal, base = $base:ty
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub enum $kind {}

        impl $crate::Kind for $kind {
            const ID: $crate::KindId = $crate::KindId::$kind;
            const NAME: &'static str = $name;
            type Base = $base;
        }

        #[doc = concat!("Marker trait for any [`Unit`](crate::Unit) whose kind is [`", stringify!($kind), "`].")]
        pub trait $marker: $crate::Unit<Kind = $kind> {}
        impl<T: $crate::Unit<Kind = $kind>> $marker for T {}
    };
}

/// Generates `From` trait implementations for all pairs of units within a kind.
macro_rules! impl_unit_conversions {
    // Base case: single unit, no conversions needed
    ($unit:ty) => {};

    // Recursive case: implement conversions from first to all others, then recurse
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<$crate::Quantity<$first>> for $crate::Quantity<$rest> {
                fn from(value: $crate::Quantity<$first>) -> Self {
                    value.to::<$rest>()
                }
            }

            impl From<$crate::Quantity<$rest>> for $crate::Quantity<$first> {
                fn from(value: $crate::Quantity<$rest>) -> Self {
                    value.to::<$first>()
                }
            }
        )+

        impl_unit_conversions!($($rest),+);
    };
}
