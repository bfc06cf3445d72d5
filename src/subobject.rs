//! Subobjects of an object in an arbitrary category.
//!
//! A subobject of `X` is an equivalence class of monomorphisms into `X`;
//! this module represents one by a single canonical monomorphism, wrapped
//! in [`Subobject`]. Categories with a different presentation of
//! subobjects (e.g. via a subobject classifier) can supply their own
//! representation by implementing [`Ambient`] and the contracts in
//! [`crate::algebra`] for it.

use crate::algebra::SubobjectLattice;
use crate::category::Arrow;

use core::ops::{BitAnd, BitOr};

/// Interface common to every subobject representation: each determines the
/// ambient object it is a subobject of.
pub trait Ambient {
    type Object;

    /// The ambient object.
    fn object(&self) -> Self::Object;
}

/// A subobject presented by a monomorphism into its ambient object.
///
/// Equality and hashing are structural: two values are equal exactly when
/// their stored morphisms are.
///
/// ```rust
/// use subobject_algebra::prelude::*;
///
/// let f = FinFunction::inclusion(vec![0, 2], 4).unwrap();
/// let s = Subobject::new(f.clone());
/// assert_eq!(s.object(), 4);
/// assert_eq!(s.hom(), &f);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subobject<A: Arrow> {
    hom: A,
}

impl<A: Arrow> Subobject<A> {
    /// Wrap a morphism as a subobject of its target.
    ///
    /// Monicity of `hom` is a caller precondition, not checked here: a
    /// non-monic morphism yields a value that does not behave as a
    /// subobject under the algebra.
    pub fn new(hom: A) -> Self {
        Self { hom }
    }

    /// The canonical monomorphism into [`Ambient::object`].
    pub fn hom(&self) -> &A {
        &self.hom
    }

    pub fn into_hom(self) -> A {
        self.hom
    }
}

impl<A: Arrow> Ambient for Subobject<A> {
    type Object = A::Object;

    fn object(&self) -> A::Object {
        self.hom.target()
    }
}

// Syntactic sugar for the lattice operations: `&a & &b` is meet, `&a | &b`
// is join.
impl<A: Arrow> BitAnd<&Subobject<A>> for &Subobject<A>
where
    Subobject<A>: SubobjectLattice,
{
    type Output = Option<Subobject<A>>;

    fn bitand(self, rhs: &Subobject<A>) -> Option<Subobject<A>> {
        self.meet(rhs)
    }
}

impl<A: Arrow> BitOr<&Subobject<A>> for &Subobject<A>
where
    Subobject<A>: SubobjectLattice,
{
    type Output = Option<Subobject<A>>;

    fn bitor(self, rhs: &Subobject<A>) -> Option<Subobject<A>> {
        self.join(rhs)
    }
}
