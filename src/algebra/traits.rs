use crate::subobject::Ambient;

/// The lattice of subobjects of a fixed ambient object.
///
/// Binary operations require both operands to be subobjects of the same
/// ambient object; this is a caller precondition, and what happens on a
/// mismatch is up to the implementing category (the morphism operations it
/// delegates to will generally reject the mismatch rather than detect it
/// up front).
pub trait SubobjectLattice: Ambient + Sized {
    /// Greatest lower bound `self ∧ other`.
    fn meet(&self, other: &Self) -> Option<Self>;

    /// Least upper bound `self ∨ other`.
    fn join(&self, other: &Self) -> Option<Self>;

    /// The greatest subobject `⊤` of `object`: the object as a subobject
    /// of itself.
    fn top(object: &Self::Object) -> Self;

    /// The least subobject `⊥` of `object`.
    fn bottom(object: &Self::Object) -> Self;
}

/// A Heyting algebra of subobjects.
///
/// No generic implementation is provided: a category satisfies this
/// contract by supplying its own operations on top of a
/// [`SubobjectLattice`].
pub trait SubobjectHeytingAlgebra: SubobjectLattice {
    /// Relative pseudo-complement `self ⟹ other`: the largest subobject
    /// whose meet with `self` lies below `other`.
    fn implies(&self, other: &Self) -> Option<Self>;

    /// Negation `¬self`, i.e. `self ⟹ ⊥`.
    fn negate(&self) -> Option<Self>;
}

/// A bi-Heyting algebra of subobjects: a Heyting algebra whose order dual
/// is one as well.
pub trait SubobjectBiHeytingAlgebra: SubobjectHeytingAlgebra {
    /// Dual pseudo-difference `self \ other`: the smallest subobject whose
    /// join with `other` lies above `self`.
    fn subtract(&self, other: &Self) -> Option<Self>;

    /// Dual negation `~self`, i.e. `⊤ \ self`.
    fn non(&self) -> Option<Self>;
}
