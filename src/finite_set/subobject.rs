use super::arrow::FinFunction;
use crate::algebra::{self, FromLimits, SubobjectLattice};
use crate::subobject::{Ambient, Subobject};

impl SubobjectLattice for Subobject<FinFunction> {
    fn meet(&self, other: &Self) -> Option<Self> {
        algebra::meet(FromLimits, self, other)
    }

    fn join(&self, other: &Self) -> Option<Self> {
        algebra::join(FromLimits, self, other)
    }

    fn top(object: &usize) -> Self {
        algebra::top(FromLimits, object)
    }

    fn bottom(object: &usize) -> Self {
        algebra::bottom(FromLimits, object)
    }
}

impl Subobject<FinFunction> {
    /// Whether two finite-set subobjects are the same subobject, i.e.
    /// isomorphic over their shared ambient object. For injections this is
    /// exactly equality of images.
    pub fn is_same_subobject(&self, other: &Self) -> bool {
        self.object() == other.object() && self.hom().image() == other.hom().image()
    }
}
