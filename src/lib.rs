#![cfg_attr(not(feature = "std"), no_std)]

//! # reflexible
//!
//! **Compile-time structural reflection for aggregate types.**
//!
//! Given an eligible ("reflexible") struct, this crate computes the number
//! of its non-static data members and produces a fixed-size ordered tuple
//! of references to those members — in declaration order, with zero runtime
//! cost, and without the type author writing any member list by hand.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Arity Table (tuple)                                     |
//! |  - FieldTuple, sealed, one impl per arity 0..=127                 |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Reflection Interface (reflect)                          |
//! |  - Reflexible trait, member_count, reflect, reflect_mut           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Derive + Detection                                      |
//! |  - #[derive(Reflexible)] (counting search + destructuring path)   |
//! |  - is_reflexible! (inherent const fallback)                       |
//! +-------------------------------------------------------------------+
//! ```
//!
//! The member count is recovered by a binary search over a monotone
//! constructibility oracle inside the derive (see `reflexible-macros`), and
//! the search result selects the one destructuring path emitted for the
//! type. The arity table pins the ceiling: a reference tuple wider than
//! [`MAX_ARITY`] has no `FieldTuple` impl and cannot exist.
//!
//! ## Quick Start
//!
//! ```
//! use reflexible::prelude::*;
//!
//! #[derive(Reflexible, Default)]
//! struct Point { x: i32, y: i32 }
//!
//! let mut p = Point { x: 1, y: 2 };
//! assert_eq!(member_count::<Point>(), 2);
//!
//! // References alias the instance's members, in declaration order.
//! let (x, y) = reflect(&p);
//! assert_eq!((*x, *y), (1, 2));
//!
//! // Mutation through element i touches only the i-th declared member.
//! *reflect_mut(&mut p).0 = 5;
//! assert_eq!((p.x, p.y), (5, 2));
//! ```
//!
//! ## Rejections
//!
//! Every failure is a build break; nothing is reported at runtime.
//!
//! An enum is not an aggregate with positionally accessible members:
//!
//! ```compile_fail
//! use reflexible::Reflexible;
//!
//! #[derive(Reflexible)]
//! enum NotAnAggregate { A, B }
//! ```
//!
//! A struct without a `Default` impl cannot be value-initialized with all
//! members defaulted:
//!
//! ```compile_fail
//! use reflexible::Reflexible;
//!
//! #[derive(Reflexible)]
//! struct Opaque {
//!     handle: core::num::NonZeroU32,
//! }
//! ```

// =============================================================================
// Layer 0: Arity Table
// =============================================================================
pub mod tuple;

// =============================================================================
// Layer 1: Reflection Interface
// =============================================================================
pub mod reflect;

// =============================================================================
// Layer 2: Detection
// =============================================================================
pub mod detect;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use reflect::{MAX_ARITY, Reflexible, member_count, reflect, reflect_mut};
pub use tuple::FieldTuple;

// Re-export the derive alongside the trait of the same name.
pub use macros::Reflexible;

/// Common items for structural reflection.
pub mod prelude {
    pub use crate::reflect::{MAX_ARITY, Reflexible, member_count, reflect, reflect_mut};
    pub use crate::tuple::FieldTuple;
    // The derive lives in the macro namespace; importing both is fine.
    pub use crate::is_reflexible;
    pub use macros::Reflexible;
}
