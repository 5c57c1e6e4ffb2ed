//! Boundary test: a type at exactly `MAX_ARITY` members reflects.
//!
//! The matching over-the-ceiling case (128 members) is exercised as a
//! rejection unit test inside `reflexible-macros`, since the derive refuses
//! to expand at all for it.

use reflexible::prelude::*;

#[derive(Reflexible, Default)]
struct AtTheCeiling {
    m00: u8,
    m01: u8,
    m02: u8,
    m03: u8,
    m04: u8,
    m05: u8,
    m06: u8,
    m07: u8,
    m08: u8,
    m09: u8,
    m0a: u8,
    m0b: u8,
    m0c: u8,
    m0d: u8,
    m0e: u8,
    m0f: u8,
    m10: u8,
    m11: u8,
    m12: u8,
    m13: u8,
    m14: u8,
    m15: u8,
    m16: u8,
    m17: u8,
    m18: u8,
    m19: u8,
    m1a: u8,
    m1b: u8,
    m1c: u8,
    m1d: u8,
    m1e: u8,
    m1f: u8,
    m20: u8,
    m21: u8,
    m22: u8,
    m23: u8,
    m24: u8,
    m25: u8,
    m26: u8,
    m27: u8,
    m28: u8,
    m29: u8,
    m2a: u8,
    m2b: u8,
    m2c: u8,
    m2d: u8,
    m2e: u8,
    m2f: u8,
    m30: u8,
    m31: u8,
    m32: u8,
    m33: u8,
    m34: u8,
    m35: u8,
    m36: u8,
    m37: u8,
    m38: u8,
    m39: u8,
    m3a: u8,
    m3b: u8,
    m3c: u8,
    m3d: u8,
    m3e: u8,
    m3f: u8,
    m40: u8,
    m41: u8,
    m42: u8,
    m43: u8,
    m44: u8,
    m45: u8,
    m46: u8,
    m47: u8,
    m48: u8,
    m49: u8,
    m4a: u8,
    m4b: u8,
    m4c: u8,
    m4d: u8,
    m4e: u8,
    m4f: u8,
    m50: u8,
    m51: u8,
    m52: u8,
    m53: u8,
    m54: u8,
    m55: u8,
    m56: u8,
    m57: u8,
    m58: u8,
    m59: u8,
    m5a: u8,
    m5b: u8,
    m5c: u8,
    m5d: u8,
    m5e: u8,
    m5f: u8,
    m60: u8,
    m61: u8,
    m62: u8,
    m63: u8,
    m64: u8,
    m65: u8,
    m66: u8,
    m67: u8,
    m68: u8,
    m69: u8,
    m6a: u8,
    m6b: u8,
    m6c: u8,
    m6d: u8,
    m6e: u8,
    m6f: u8,
    m70: u8,
    m71: u8,
    m72: u8,
    m73: u8,
    m74: u8,
    m75: u8,
    m76: u8,
    m77: u8,
    m78: u8,
    m79: u8,
    m7a: u8,
    m7b: u8,
    m7c: u8,
    m7d: u8,
    m7e: u8,
}

#[test]
fn member_count_at_the_ceiling() {
    assert_eq!(member_count::<AtTheCeiling>(), MAX_ARITY);
    assert_eq!(MAX_ARITY, 127);
}

#[test]
fn reflection_at_the_ceiling() {
    let mut big = AtTheCeiling::default();
    big.m00 = 1;
    big.m7e = 255;

    let members = reflect(&big);
    assert_eq!(*members.0, 1);
    assert_eq!(*members.126, 255);

    *reflect_mut(&mut big).1 = 7;
    assert_eq!(big.m01, 7);
    assert_eq!(big.m00, 1);
}

#[test]
fn ceiling_tuple_arity() {
    assert_eq!(
        <<AtTheCeiling as Reflexible>::Fields<'static> as FieldTuple>::ARITY,
        MAX_ARITY
    );
}
