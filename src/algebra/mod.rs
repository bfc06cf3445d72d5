//! The algebra of subobjects: the layered contracts
//! ([`SubobjectLattice`], [`SubobjectHeytingAlgebra`],
//! [`SubobjectBiHeytingAlgebra`]) and the generic algorithm computing the
//! lattice operations from limits and colimits ([`FromLimits`]).
pub mod from_limits;
pub mod traits;

pub use from_limits::*;
pub use traits::*;
