//! Compile-time detection of `Reflexible` on concrete types.
//!
//! This module implements the "Inherent Const Fallback" pattern so that
//! [`is_reflexible!`](crate::is_reflexible) answers `false` for types that
//! never opted in, instead of breaking the build.
//!
//! ## How it works
//!
//! 1. A fallback trait carries `const IS_REFLEXIBLE: bool = false`
//! 2. The fallback is implemented for `Detect<T>` for all `T`
//! 3. An inherent const `IS_REFLEXIBLE = true` exists on `Detect<T>` where
//!    `T: Reflexible`
//!
//! When resolving `Detect::<Concrete>::IS_REFLEXIBLE`, the compiler prefers
//! the inherent const when the bound holds and falls back to the trait
//! const otherwise.
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site. It does
//! NOT work in generic contexts like `fn foo<T>()`.

use core::marker::PhantomData;

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T>(PhantomData<T>);

/// Generate fallback trait + inherent const for a detectable trait.
macro_rules! impl_detect {
    ($Trait:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Trait Fallback>] { const [<IS_ $Trait:upper>]: bool = false; }
            impl<T> [<$Trait Fallback>] for Detect<T> {}
            impl<T: crate::$Trait> Detect<T> { pub const [<IS_ $Trait:upper>]: bool = true; }
        }
    };
}

impl_detect!(Reflexible);

/// Check whether a concrete type is reflexible, at compile time.
///
/// Evaluates to a `bool` usable in const context. Unlike the `Reflexible`
/// bound itself, a negative answer is a value, not a build break.
///
/// ```
/// use reflexible::{Reflexible, is_reflexible};
///
/// #[derive(Reflexible, Default)]
/// struct Opted { value: u32 }
///
/// struct NotOpted;
///
/// assert!(is_reflexible!(Opted));
/// assert!(!is_reflexible!(NotOpted));
/// assert!(!is_reflexible!(i32));
/// ```
#[macro_export]
macro_rules! is_reflexible {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::ReflexibleFallback as _;
        $crate::detect::Detect::<$T>::IS_REFLEXIBLE
    }};
}
