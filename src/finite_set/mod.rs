//! A skeletal category of finite sets: objects are sizes `n`, standing for
//! the set `{0..n}`, and morphisms are index tables ([`FinFunction`]).
//!
//! This is the one concrete category shipped with the crate. It supplies
//! every capability the generic algebra needs (pullbacks, pushouts, an
//! initial object) and implements the
//! [`SubobjectLattice`](crate::algebra::SubobjectLattice) contract for
//! [`Subobject<FinFunction>`](crate::subobject::Subobject) by delegating
//! to [`FromLimits`](crate::algebra::FromLimits).
pub mod arrow;
mod limits;
mod subobject;

pub use arrow::*;
