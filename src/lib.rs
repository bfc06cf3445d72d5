//! # Subobject Algebra
//!
//! A generic algebra of [subobjects](crate::subobject::Subobject) for an
//! arbitrary category with enough limits and colimits.
//!
//! A subobject of an object `X` is (an equivalence class of) a
//! monomorphism into `X`; the subobjects of `X` form a lattice, ordered by
//! inclusion. This crate computes that lattice uniformly, without knowing
//! anything about the category's objects or morphisms beyond a small set
//! of capabilities:
//!
//! - **meet** `A ∧ B` is the pullback of the monomorphisms,
//! - **join** `A ∨ B` is the pushout of that pullback's projections,
//!   mediated back into `X`,
//! - **top** `⊤` is the identity on `X`,
//! - **bottom** `⊥` is the unique morphism out of the initial object.
//!
//! The capabilities a category must supply are the traits in
//! [`category`]: [`Arrow`](crate::category::Arrow) for composition and
//! identities, [`HasPullbacks`](crate::category::HasPullbacks),
//! [`HasPushouts`](crate::category::HasPushouts) and
//! [`HasInitial`](crate::category::HasInitial) for the limit and colimit
//! machinery. Every operation takes the algorithm to use as an explicit
//! value; [`FromLimits`](crate::algebra::FromLimits) is the limit-based
//! one, and categories with a cheaper direct presentation of their
//! subobjects can install another next to it.
//!
//! # Example
//!
//! The crate ships one concrete category, a skeletal category of finite
//! sets ([`finite_set`]), used here to carve up `X = {1, 2, 3}`
//! (represented as the object `3`):
//!
//! ```rust
//! use subobject_algebra::prelude::*;
//!
//! // A = {1, 2} and B = {2, 3}, as inclusions into X.
//! let a = Subobject::new(FinFunction::inclusion(vec![0, 1], 3).unwrap());
//! let b = Subobject::new(FinFunction::inclusion(vec![1, 2], 3).unwrap());
//!
//! // A ∧ B = {2}
//! let both = meet(FromLimits, &a, &b).unwrap();
//! assert_eq!(both.hom().image(), vec![1]);
//!
//! // A ∨ B = X = ⊤
//! let either = join(FromLimits, &a, &b).unwrap();
//! assert!(either.is_same_subobject(&top(FromLimits, &3)));
//!
//! // ⊥ is the empty subobject
//! let nothing: Subobject<FinFunction> = bottom(FromLimits, &3);
//! assert_eq!(nothing.hom().image(), vec![]);
//! ```
//!
//! Categories that also support relative pseudo-complements can implement
//! the [`SubobjectHeytingAlgebra`](crate::algebra::SubobjectHeytingAlgebra)
//! and
//! [`SubobjectBiHeytingAlgebra`](crate::algebra::SubobjectBiHeytingAlgebra)
//! contracts; no generic algorithm is provided for those layers.

pub mod category;
pub mod subobject;

pub mod algebra;

pub mod finite_set;

pub mod prelude {
    //! The common surface of the crate under one import.
    pub use crate::algebra::*;
    pub use crate::category::*;
    pub use crate::finite_set::*;
    pub use crate::subobject::{Ambient, Subobject};
}
