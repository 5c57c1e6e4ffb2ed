//! Non-static data member counting.
//!
//! The count is not read off the declaration directly. It is recovered by
//! binary search over a constructibility oracle, the same way the facility
//! would probe an opaque aggregate: a positional prefix of `k` universal
//! probe values either binds or it does not, and the predicate is monotone
//! in `k`. The search result is what drives code generation downstream, so
//! a wrong count cannot survive — the emitted destructuring pattern would
//! be non-exhaustive and the build would break.

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{Fields, Ident, Type};

/// Maximum number of non-static data members a reflected type may have.
/// Keep in sync with `reflexible::MAX_ARITY` and the arity table in
/// `reflexible::tuple`.
pub const MAX_ARITY: usize = 127;

/// Probe value for a single member slot.
///
/// A probe binds to a field of any type except the reflected type itself
/// (a by-value self field cannot be modeled, and such a struct is
/// infinitely sized anyway).
pub struct Universal<'a> {
    #[allow(dead_code)]
    pub slot: usize,
    reflected: &'a Ident,
}

impl<'a> Universal<'a> {
    pub fn new(slot: usize, reflected: &'a Ident) -> Self {
        Universal { slot, reflected }
    }

    /// Whether this probe can bind to a field of the given type.
    pub fn binds_to(&self, ty: &Type) -> bool {
        !self.is_reflected(ty)
    }

    fn is_reflected(&self, ty: &Type) -> bool {
        match ty {
            Type::Path(p) if p.qself.is_none() => {
                p.path.is_ident("Self") || p.path.is_ident(self.reflected)
            }
            _ => false,
        }
    }
}

/// The constructibility oracle: can a positional prefix of length `k` be
/// bound, one probe per slot `0..k`?
///
/// Monotone in `k` by construction: success at `k` implies success at every
/// shorter prefix. Deliberately never consults a length.
pub fn is_constructible(fields: &Fields, reflected: &Ident, k: usize) -> bool {
    let mut members = fields.iter();
    for slot in 0..k {
        let probe = Universal::new(slot, reflected);
        match members.next() {
            Some(field) if probe.binds_to(&field.ty) => {}
            _ => return false,
        }
    }
    true
}

/// Conservative upper bound for the search: the token measure of the field
/// list. Every field contributes at least one token to its declaration, so
/// the measure can never undercount the member total.
pub fn upper_bound(fields: &Fields) -> usize {
    let stream = match fields {
        Fields::Named(f) => f.named.to_token_stream(),
        Fields::Unnamed(f) => f.unnamed.to_token_stream(),
        Fields::Unit => TokenStream::new(),
    };
    stream.into_iter().count()
}

/// A median between two values.
pub const fn median(l: usize, r: usize) -> usize {
    (l / 2) + (r / 2) + ((1 + (l % 2) + (r % 2)) / 2)
}

/// Classic binary search over `[l, r]` with `m` as the current probe point.
/// The oracle is true for every `k <= N` and false above, so the interval
/// collapses onto `N`.
fn bisect(fields: &Fields, reflected: &Ident, l: usize, m: usize, r: usize) -> usize {
    if l == r {
        l
    } else if is_constructible(fields, reflected, m) {
        bisect(fields, reflected, m, median(m, r), r)
    } else {
        bisect(fields, reflected, l, median(l, m - 1), m - 1)
    }
}

/// Counts the number of non-static data members in the given declaration.
pub fn count_members(fields: &Fields, reflected: &Ident) -> usize {
    let bound = upper_bound(fields);
    bisect(fields, reflected, 0, median(0, bound), bound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::{Data, DeriveInput};

    fn parse(src: &str) -> (Fields, Ident) {
        let input: DeriveInput = syn::parse_str(src).unwrap();
        match input.data {
            Data::Struct(s) => (s.fields, input.ident),
            _ => panic!("test input must be a struct"),
        }
    }

    #[test]
    fn counts_named_fields() {
        let (fields, ident) = parse("struct S { a: u32, b: String, c: [u8; 4] }");
        assert_eq!(count_members(&fields, &ident), 3);
    }

    #[test]
    fn counts_tuple_fields() {
        let (fields, ident) = parse("struct S(u8, Vec<u32>);");
        assert_eq!(count_members(&fields, &ident), 2);
    }

    #[test]
    fn counts_unit_struct_as_zero() {
        let (fields, ident) = parse("struct S;");
        assert_eq!(count_members(&fields, &ident), 0);
    }

    #[test]
    fn counts_empty_braced_struct_as_zero() {
        let (fields, ident) = parse("struct S {}");
        assert_eq!(count_members(&fields, &ident), 0);
    }

    #[test]
    fn counts_single_field() {
        let (fields, ident) = parse("struct S { only: bool }");
        assert_eq!(count_members(&fields, &ident), 1);
    }

    #[test]
    fn oracle_is_monotone() {
        let (fields, ident) =
            parse("struct S { a: u8, b: (u16, u16), c: Option<Box<S2>>, d: &'static str }");
        let n = count_members(&fields, &ident);
        let bound = upper_bound(&fields);
        assert_eq!(n, 4);
        for k in 0..=bound {
            assert_eq!(
                is_constructible(&fields, &ident, k),
                k <= n,
                "oracle must hold exactly for k <= {n}, failed at k = {k}"
            );
        }
    }

    #[test]
    fn upper_bound_dominates_count() {
        for src in [
            "struct S;",
            "struct S { a: u8 }",
            "struct S(u8, u8, u8);",
            "struct S { x: Vec<Option<(u8, u8)>>, y: u32 }",
        ] {
            let (fields, ident) = parse(src);
            assert!(upper_bound(&fields) >= count_members(&fields, &ident));
        }
    }

    #[test]
    fn probe_refuses_reflected_type() {
        let ident: Ident = syn::parse_str("Foo").unwrap();
        let probe = Universal::new(0, &ident);
        assert!(!probe.binds_to(&syn::parse_str("Foo").unwrap()));
        assert!(!probe.binds_to(&syn::parse_str("Self").unwrap()));
        assert!(probe.binds_to(&syn::parse_str("u32").unwrap()));
        assert!(probe.binds_to(&syn::parse_str("Box<Foo>").unwrap()));
        assert!(probe.binds_to(&syn::parse_str("&'a Foo").unwrap()));
    }

    #[test]
    fn median_collapses_interval() {
        assert_eq!(median(0, 0), 0);
        assert_eq!(median(0, 1), 1);
        assert_eq!(median(3, 3), 3);
        assert_eq!(median(2, 7), 5);
        // Never leaves the interval.
        for l in 0..16usize {
            for r in l..16 {
                let m = median(l, r);
                assert!(m >= l && m <= r);
            }
        }
    }
}
