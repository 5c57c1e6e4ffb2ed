//! Expansion logic for `#[derive(Reflexible)]`.
//!
//! The derive validates that the input is an aggregate (a struct), recovers
//! the member count via the binary search in [`crate::count`], and emits the
//! one destructuring path selected by that count: an exhaustive pattern
//! binding exactly N positionally-named members, immediately re-packaged as
//! a tuple of references.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Ident, Result, Type};

use crate::count;

pub fn expand_derive_reflexible(input: DeriveInput) -> Result<TokenStream> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(data) => {
            return Err(Error::new_spanned(
                data.enum_token,
                "`Reflexible` can only be derived for structs: \
                 an enum is not an aggregate with positionally accessible members",
            ));
        }
        Data::Union(data) => {
            return Err(Error::new_spanned(
                data.union_token,
                "`Reflexible` can only be derived for structs: \
                 a union is not an aggregate with positionally accessible members",
            ));
        }
    };

    let name = &input.ident;
    let n = count::count_members(fields, name);
    if n > count::MAX_ARITY {
        return Err(Error::new_spanned(
            name,
            format!(
                "`{name}` has {n} non-static data members, \
                 which exceeds the supported maximum of {}",
                count::MAX_ARITY
            ),
        ));
    }

    // Hex-numbered binding names, one per member slot found by the search.
    // The pattern below carries no rest form, so a count that disagreed with
    // the declaration would make it non-exhaustive and fail to compile.
    let bindings: Vec<Ident> = (0..n)
        .map(|i| Ident::new(&format!("e{i:02x}"), Span::call_site()))
        .collect();
    let types: Vec<&Type> = fields.iter().take(n).map(|f| &f.ty).collect();

    let pattern = match fields {
        Fields::Named(f) => {
            let names: Vec<&Ident> = f
                .named
                .iter()
                .take(n)
                .filter_map(|field| field.ident.as_ref())
                .collect();
            quote! { Self { #(#names: #bindings),* } }
        }
        Fields::Unnamed(_) => quote! { Self(#(#bindings),*) },
        Fields::Unit => quote! { Self },
    };
    let tuple = quote! { ( #(#bindings,)* ) };

    // The impl is conditional on `Self: Default`, the trait's supertrait
    // obligation. A struct without a `Default` impl fails right here at the
    // derive site.
    let self_ty = {
        let (_, ty_generics, _) = input.generics.split_for_impl();
        quote! { #name #ty_generics }
    };
    let mut generics = input.generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(syn::parse_quote! { #self_ty: ::core::default::Default });
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::reflexible::Reflexible for #name #ty_generics #where_clause {
            const MEMBER_COUNT: usize = #n;

            type Fields<'__reflect> = ( #(&'__reflect #types,)* )
            where
                Self: '__reflect;

            type FieldsMut<'__reflect> = ( #(&'__reflect mut #types,)* )
            where
                Self: '__reflect;

            fn reflect(&self) -> Self::Fields<'_> {
                // Obtain references to member objects via destructuring.
                let #pattern = self;

                // Construct a tuple from these references.
                #tuple
            }

            fn reflect_mut(&mut self) -> Self::FieldsMut<'_> {
                let #pattern = self;
                #tuple
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(src: &str) -> Result<TokenStream> {
        expand_derive_reflexible(syn::parse_str(src).unwrap())
    }

    #[test]
    fn expands_named_struct() {
        let out = expand("struct Point { x: i32, y: i32 }").unwrap().to_string();
        assert!(out.contains("MEMBER_COUNT"));
        assert!(out.contains("2usize"));
        assert!(out.contains("e00"));
        assert!(out.contains("e01"));
        assert!(!out.contains("e02"));
    }

    #[test]
    fn expands_tuple_struct() {
        let out = expand("struct Pair(u8, u16);").unwrap().to_string();
        assert!(out.contains("2usize"));
        assert!(out.contains("e00"));
    }

    #[test]
    fn expands_unit_struct_with_empty_tuple() {
        let out = expand("struct Nothing;").unwrap().to_string();
        assert!(out.contains("0usize"));
        assert!(!out.contains("e00"));
    }

    #[test]
    fn expands_generic_struct() {
        let out = expand("struct Wrap<T> { inner: T, tag: u8 }")
            .unwrap()
            .to_string();
        assert!(out.contains("2usize"));
        assert!(out.contains("Default"));
    }

    #[test]
    fn rejects_enum() {
        let err = expand("enum E { A, B }").unwrap_err();
        assert!(err.to_string().contains("aggregate"));
    }

    #[test]
    fn rejects_union() {
        let err = expand("union U { a: u32, b: f32 }").unwrap_err();
        assert!(err.to_string().contains("aggregate"));
    }

    #[test]
    fn rejects_counts_above_the_ceiling() {
        let members: String = (0..=count::MAX_ARITY)
            .map(|i| format!("m{i:02x}: u8,"))
            .collect();
        let err = expand(&format!("struct Big {{ {members} }}")).unwrap_err();
        assert!(err.to_string().contains("exceeds"));
        assert!(err.to_string().contains("127"));
    }
}
