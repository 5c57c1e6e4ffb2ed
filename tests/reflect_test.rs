//! Integration tests for member counting and reference-tuple reflection.

use core::ptr;
use reflexible::prelude::*;

#[derive(Reflexible, Default)]
struct Nothing;

#[derive(Reflexible, Default)]
struct AlsoNothing {}

#[derive(Reflexible, Default)]
struct Single {
    only: bool,
}

#[derive(Reflexible, Default)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Reflexible)]
struct Sample {
    a: i32,
    b: i32,
    c: i32,
}

impl Default for Sample {
    fn default() -> Self {
        Sample { a: 1, b: 2, c: 3 }
    }
}

#[derive(Reflexible, Default)]
struct Pair(u8, String);

#[derive(Reflexible, Default)]
struct Wrap<T> {
    inner: T,
    tag: u8,
}

#[test]
fn member_counts_are_exact() {
    assert_eq!(member_count::<Nothing>(), 0);
    assert_eq!(member_count::<AlsoNothing>(), 0);
    assert_eq!(member_count::<Single>(), 1);
    assert_eq!(member_count::<Point>(), 2);
    assert_eq!(member_count::<Sample>(), 3);
    assert_eq!(member_count::<Pair>(), 2);
    assert_eq!(member_count::<Wrap<Vec<u64>>>(), 2);
}

#[test]
fn member_count_is_a_const() {
    const N: usize = member_count::<Sample>();
    assert_eq!(N, 3);
}

#[test]
fn tuple_arity_matches_member_count() {
    assert_eq!(
        <<Point as Reflexible>::Fields<'static> as FieldTuple>::ARITY,
        member_count::<Point>()
    );
    assert_eq!(
        <<Nothing as Reflexible>::Fields<'static> as FieldTuple>::ARITY,
        0
    );
    assert_eq!(
        <<Sample as Reflexible>::FieldsMut<'static> as FieldTuple>::ARITY,
        3
    );
}

#[test]
fn empty_aggregates_reflect_to_the_empty_tuple() {
    let n = Nothing;
    assert_eq!(reflect(&n), ());
    let b = AlsoNothing {};
    assert_eq!(reflect(&b), ());
}

#[test]
fn references_preserve_declaration_order() {
    let s = Sample::default();
    let (a, b, c) = reflect(&s);
    assert_eq!((*a, *b, *c), (1, 2, 3));
}

#[test]
fn tuple_struct_members_are_positional() {
    let p = Pair(7, String::from("seven"));
    let (first, second) = reflect(&p);
    assert_eq!(*first, 7);
    assert_eq!(second, "seven");
}

#[test]
fn mutating_one_reference_leaves_the_rest_untouched() {
    let mut s = Sample::default();
    {
        let (_, b, _) = reflect_mut(&mut s);
        *b = 42;
    }
    assert_eq!((s.a, s.b, s.c), (1, 42, 3));

    {
        let (a, _, _) = reflect_mut(&mut s);
        *a = 5;
    }
    assert_eq!((s.a, s.b, s.c), (5, 42, 3));
}

#[test]
fn repeated_reflection_aliases_identical_storage() {
    let s = Sample::default();
    let first = reflect(&s);
    let second = reflect(&s);
    assert!(ptr::eq(first.0, second.0));
    assert!(ptr::eq(first.1, second.1));
    assert!(ptr::eq(first.2, second.2));
    assert!(ptr::eq(first.0, &s.a));
    assert!(ptr::eq(first.2, &s.c));
}

#[test]
fn generic_structs_reflect_through_their_parameters() {
    let mut w = Wrap {
        inner: vec![1u64, 2],
        tag: 9,
    };
    let (inner, tag) = reflect(&w);
    assert_eq!(inner.len(), 2);
    assert_eq!(*tag, 9);

    *reflect_mut(&mut w).1 = 10;
    assert_eq!(w.tag, 10);
}

#[test]
fn trait_method_form_matches_the_free_functions() {
    let s = Sample::default();
    let via_trait = s.reflect();
    let via_free = reflect(&s);
    assert!(ptr::eq(via_trait.0, via_free.0));
    assert_eq!(Sample::MEMBER_COUNT, member_count::<Sample>());
}
