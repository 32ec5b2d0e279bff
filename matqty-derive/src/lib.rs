//! Derive macro implementation used by `matqty-core`.
//!
//! `matqty-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::Unit`, `crate::UnitId` and `crate::Quantity`, so it is intended to be used by `matqty-core` (or by crates
//! that expose an identical crate-root API).
//!
//! Most users should depend on `matqty` instead and use the predefined units.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements:
//!
//! - `crate::Unit for MyUnit`, tagged with the runtime id `crate::UnitId::MyUnit`
//! - `core::fmt::Display for crate::Quantity<MyUnit>` (formats as `<value> <symbol>`)
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "Å"`: displayed unit symbol
//! - `kind = Distance`: kind marker type
//! - `ratio = 1e-10`: how many base units one of this unit scales to
//! - `offset = -32.0` (optional): added to the value *before* scaling, for affine units such as Fahrenheit
//!
//! With an offset the generated conversion pair is `to_base(x) = (x + offset) * ratio` and
//! `from_base(y) = y / ratio - offset`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Token,
};

/// Derive `crate::Unit` and a `Display` impl for `crate::Quantity<ThisUnit>`.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol`, `kind` and `ratio`, and
/// optionally `offset`. The type name must match a variant of `crate::UnitId`.
///
/// This macro is intended for use by `matqty-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let name_lit = LitStr::new(&name.to_string(), name.span());

    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let kind = &unit_attr.kind;
    let ratio = &unit_attr.ratio;

    let (to_base, from_base) = match &unit_attr.offset {
        Some(offset) => (
            quote! { (value + (#offset)) * (#ratio) },
            quote! { value / (#ratio) - (#offset) },
        ),
        None => (quote! { value * (#ratio) }, quote! { value / (#ratio) }),
    };

    let expanded = quote! {
        impl crate::Unit for #name {
            type Kind = #kind;
            const ID: crate::UnitId = crate::UnitId::#name;
            const NAME: &'static str = #name_lit;
            const SYMBOL: &'static str = #symbol;

            #[inline]
            fn to_base(value: f64) -> f64 {
                #to_base
            }

            #[inline]
            fn from_base(value: f64) -> f64 {
                #from_base
            }
        }

        impl ::core::fmt::Display for crate::Quantity<#name> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.value(), f)?;
                write!(f, " {}", <#name as crate::Unit>::SYMBOL)
            }
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    kind: Expr,
    ratio: Expr,
    offset: Option<Expr>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut kind: Option<Expr> = None;
        let mut ratio: Option<Expr> = None;
        let mut offset: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "kind" => {
                    kind = Some(input.parse()?);
                }
                "ratio" => {
                    ratio = Some(input.parse()?);
                }
                "offset" => {
                    offset = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let kind =
            kind.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `kind`"))?;
        let ratio = ratio
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `ratio`"))?;

        Ok(UnitAttribute {
            symbol,
            kind,
            ratio,
            offset,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn parse_complete_attribute() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", kind = Distance, ratio = 1.0)]
            pub struct Meter;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "m");
        assert!(attr.offset.is_none());
    }

    #[test]
    fn parse_attribute_with_offset() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "K", kind = Temperature, ratio = 1.0, offset = -273.15)]
            pub struct Kelvin;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "K");
        assert!(attr.offset.is_some());
    }

    #[test]
    fn missing_attribute_is_rejected() {
        let input: DeriveInput = parse_quote! {
            pub struct Meter;
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing #[unit(...)] attribute"));
    }

    #[test]
    fn missing_symbol_is_rejected() {
        let input: DeriveInput = parse_quote! {
            #[unit(kind = Distance, ratio = 1.0)]
            pub struct Meter;
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `symbol`"));
    }

    #[test]
    fn missing_kind_is_rejected() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", ratio = 1.0)]
            pub struct Meter;
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `kind`"));
    }

    #[test]
    fn missing_ratio_is_rejected() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", kind = Distance)]
            pub struct Meter;
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `ratio`"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", kind = Distance, ratio = 1.0, dimension = Length)]
            pub struct Meter;
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("unknown attribute `dimension`"));
    }

    #[test]
    fn derive_linear_unit() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "nm", kind = Distance, ratio = 1e-9)]
            pub struct Nanometer;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: Unit for Nanometer"));
        assert!(code.contains("type Kind = Distance"));
        assert!(code.contains("const ID : crate :: UnitId = crate :: UnitId :: Nanometer"));
        assert!(code.contains("const NAME : & 'static str = \"Nanometer\""));
        assert!(code.contains("const SYMBOL : & 'static str = \"nm\""));
        assert!(code.contains("value * (1e-9)"));
        assert!(code.contains("value / (1e-9)"));
    }

    #[test]
    fn derive_affine_unit() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "K", kind = Temperature, ratio = 1.0, offset = -273.15)]
            pub struct Kelvin;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("(value + (- 273.15)) * (1.0)"));
        assert!(code.contains("value / (1.0) - (- 273.15)"));
    }

    #[test]
    fn trailing_comma_is_accepted() {
        let tokens = quote! {
            symbol = "m", kind = Distance, ratio = 1.0,
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "m");
    }

    #[test]
    fn empty_attribute_is_rejected() {
        let tokens = quote! {};
        let result: syn::Result<UnitAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn derive_error_becomes_compile_error() {
        let input: DeriveInput = parse_quote! {
            pub struct Meter;
        };
        let err = derive_unit_impl(input).err().unwrap();
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }
}
