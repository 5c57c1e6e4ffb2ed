//! Tests for the `is_reflexible!` compile-time query.

use reflexible::is_reflexible;
use reflexible::prelude::*;

#[derive(Reflexible, Default)]
struct Opted {
    value: u32,
}

#[allow(dead_code)]
struct NeverOptedIn {
    value: u32,
}

#[derive(Reflexible, Default)]
struct OptedUnit;

#[test]
fn detects_derived_types() {
    assert!(is_reflexible!(Opted));
    assert!(is_reflexible!(OptedUnit));
}

#[test]
fn rejects_types_that_never_opted_in() {
    // Same member layout as `Opted`, but no derive: not reflexible.
    assert!(!is_reflexible!(NeverOptedIn));
    assert!(!is_reflexible!(i32));
    assert!(!is_reflexible!(String));
    assert!(!is_reflexible!((u8, u8)));
}

#[test]
fn answer_is_usable_in_const_context() {
    const OPTED: bool = is_reflexible!(Opted);
    const PLAIN: bool = is_reflexible!(u64);
    assert!(OPTED);
    assert!(!PLAIN);
}
