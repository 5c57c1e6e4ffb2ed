//! Procedural macros for the `reflexible` structural reflection crate.
//!
//! A single derive is exported:
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Reflexible)]` | struct | Count members, emit the destructuring path |
//!
//! The interesting work lives in the `count` module: the member count is
//! recovered by binary search over a monotone constructibility oracle
//! rather than read off the declaration, and the search result is what
//! selects the emitted destructuring path.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod count;
mod derive;

/// Derive structural reflection for an aggregate struct.
///
/// Emits an implementation of `reflexible::Reflexible` providing
/// `MEMBER_COUNT`, the `Fields`/`FieldsMut` reference-tuple types, and the
/// `reflect`/`reflect_mut` accessors. Rejects enums and unions, structs
/// without a `Default` impl, and structs with more than 127 members — all
/// at compile time.
#[proc_macro_derive(Reflexible)]
pub fn derive_reflexible(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand_derive_reflexible(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
