//! Reflection interface: the [`Reflexible`] trait and its free-function
//! surface.

use crate::tuple::FieldTuple;

/// Maximum number of non-static data members a reflected type may have.
///
/// The arity table in [`crate::tuple`] enumerates exactly this many tuple
/// impls; raising the ceiling means extending the table (and the matching
/// constant in `reflexible-macros`), strictly mechanical work.
pub const MAX_ARITY: usize = 127;

/// Types which can be structurally reflected.
///
/// Implemented only through `#[derive(Reflexible)]`. A type qualifies iff it
/// is an aggregate (a struct — Rust structs have no user-declared
/// constructors), can be value-initialized with all members defaulted
/// (the `Default` supertrait), and has at most [`MAX_ARITY`] members.
///
/// Everything here is resolved at compile time; the accessors compile down
/// to the borrows they return.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be structurally reflected",
    label = "`{Self}` does not implement `Reflexible`",
    note = "add `#[derive(Reflexible)]` to the type definition; \
            only structs with a `Default` impl are eligible"
)]
pub trait Reflexible: Default + Sized {
    /// Count of the non-static data members.
    const MEMBER_COUNT: usize;

    /// Tuple of shared references to the members, in declaration order.
    type Fields<'a>: FieldTuple
    where
        Self: 'a;

    /// Tuple of mutable references to the members, in declaration order.
    type FieldsMut<'a>: FieldTuple
    where
        Self: 'a;

    /// Destructures `self` into references to its members.
    fn reflect(&self) -> Self::Fields<'_>;

    /// Destructures `self` into mutable references to its members.
    fn reflect_mut(&mut self) -> Self::FieldsMut<'_>;
}

/// Count of the non-static data members in the given type.
///
/// ```
/// use reflexible::prelude::*;
///
/// #[derive(Reflexible, Default)]
/// struct Point { x: i32, y: i32 }
///
/// const N: usize = member_count::<Point>();
/// assert_eq!(N, 2);
/// ```
pub const fn member_count<T: Reflexible>() -> usize {
    T::MEMBER_COUNT
}

/// Returns a tuple of references to non-static data members of the given
/// object, in declaration order.
///
/// The tuple owns nothing: element `i` aliases the `i`-th declared member
/// and lives no longer than the borrow of `x`.
///
/// ```
/// use reflexible::prelude::*;
///
/// #[derive(Reflexible, Default)]
/// struct Triple { a: i32, b: i32, c: i32 }
///
/// let t = Triple { a: 1, b: 2, c: 3 };
/// let (a, b, c) = reflect(&t);
/// assert_eq!((*a, *b, *c), (1, 2, 3));
/// ```
pub fn reflect<T: Reflexible>(x: &T) -> T::Fields<'_> {
    x.reflect()
}

/// Returns a tuple of mutable references to non-static data members of the
/// given object, in declaration order.
///
/// ```
/// use reflexible::prelude::*;
///
/// #[derive(Reflexible, Default)]
/// struct Pair { a: u32, b: u32 }
///
/// let mut p = Pair { a: 1, b: 2 };
/// *reflect_mut(&mut p).0 = 5;
/// assert_eq!((p.a, p.b), (5, 2));
/// ```
pub fn reflect_mut<T: Reflexible>(x: &mut T) -> T::FieldsMut<'_> {
    x.reflect_mut()
}
