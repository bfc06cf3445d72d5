use crate::category::{Arrow, HasInitial, HasPullbacks, HasPushouts};
use crate::subobject::Subobject;

/// Algorithm marker: compute the lattice operations from the ambient
/// category's limits and colimits.
///
/// A stateless tag passed alongside the operands of [`meet`], [`join`],
/// [`top`] and [`bottom`] to select the algorithm. It is the only
/// algorithm in this crate; categories with a cheaper direct presentation
/// of their subobjects can add their own [`LatticeAlgorithm`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FromLimits;

/// A strategy for computing the subobject lattice of a category with
/// arrows `A`.
///
/// Meet and join take the whole family at once; the binary forms are the
/// two-element special case, exposed as the free functions [`meet`] and
/// [`join`]. All subobjects of a family must share an ambient object.
pub trait LatticeAlgorithm<A: Arrow> {
    fn meet(&self, family: &[Subobject<A>]) -> Option<Subobject<A>>;
    fn join(&self, family: &[Subobject<A>]) -> Option<Subobject<A>>;
    fn top(&self, object: &A::Object) -> Subobject<A>;
    fn bottom(&self, object: &A::Object) -> Subobject<A>;
}

impl<A> LatticeAlgorithm<A> for FromLimits
where
    A: Clone + HasPullbacks + HasPushouts + HasInitial,
{
    /// Meet as the pullback of the family `fᵢ : Pᵢ → X`: the result is
    /// `π₀ ; f₀`, the first projection out of the apex composed with the
    /// first input. Every choice of `i` agrees by the universal property
    /// of the pullback.
    fn meet(&self, family: &[Subobject<A>]) -> Option<Subobject<A>> {
        let homs: Vec<A> = family.iter().map(|s| s.hom().clone()).collect();
        let span = A::pullback(&homs)?;
        let hom = span.legs.first()?.compose(homs.first()?)?;
        Some(Subobject::new(hom))
    }

    /// Join as the pushout of the pullback: the projections `πᵢ` of the
    /// meet's apex are pushed out to a coapex `J` with injections `ιᵢ`,
    /// and the result is the mediating morphism `J → X` copaired from the
    /// original family.
    fn join(&self, family: &[Subobject<A>]) -> Option<Subobject<A>> {
        let homs: Vec<A> = family.iter().map(|s| s.hom().clone()).collect();
        let span = A::pullback(&homs)?;
        let cospan = A::pushout(&span)?;
        let hom = A::copair(&cospan, &homs)?;
        Some(Subobject::new(hom))
    }

    /// `⊤` is the identity on `object`: an object is the largest subobject
    /// of itself.
    fn top(&self, object: &A::Object) -> Subobject<A> {
        Subobject::new(A::identity(object))
    }

    /// `⊥` is the unique morphism out of the initial object.
    fn bottom(&self, object: &A::Object) -> Subobject<A> {
        Subobject::new(A::initial(object))
    }
}

/// Binary meet `lhs ∧ rhs` computed by `algorithm`.
///
/// ```rust
/// use subobject_algebra::prelude::*;
///
/// let a = Subobject::new(FinFunction::inclusion(vec![0, 1], 3).unwrap());
/// let b = Subobject::new(FinFunction::inclusion(vec![1, 2], 3).unwrap());
/// let c = meet(FromLimits, &a, &b).unwrap();
/// assert_eq!(c.hom().image(), vec![1]);
/// ```
pub fn meet<A, L>(algorithm: L, lhs: &Subobject<A>, rhs: &Subobject<A>) -> Option<Subobject<A>>
where
    A: Arrow + Clone,
    L: LatticeAlgorithm<A>,
{
    algorithm.meet(&[lhs.clone(), rhs.clone()])
}

/// Meet of a finite family of subobjects of a shared ambient object.
///
/// # Errors
///
/// Returns None on the empty family: without an operand there is no
/// ambient object to bound.
pub fn meet_all<A, L>(algorithm: L, family: &[Subobject<A>]) -> Option<Subobject<A>>
where
    A: Arrow,
    L: LatticeAlgorithm<A>,
{
    algorithm.meet(family)
}

/// Binary join `lhs ∨ rhs` computed by `algorithm`.
pub fn join<A, L>(algorithm: L, lhs: &Subobject<A>, rhs: &Subobject<A>) -> Option<Subobject<A>>
where
    A: Arrow + Clone,
    L: LatticeAlgorithm<A>,
{
    algorithm.join(&[lhs.clone(), rhs.clone()])
}

/// Join of a finite family of subobjects of a shared ambient object.
///
/// # Errors
///
/// Returns None on the empty family.
pub fn join_all<A, L>(algorithm: L, family: &[Subobject<A>]) -> Option<Subobject<A>>
where
    A: Arrow,
    L: LatticeAlgorithm<A>,
{
    algorithm.join(family)
}

/// The greatest subobject of `object` computed by `algorithm`.
pub fn top<A, L>(algorithm: L, object: &A::Object) -> Subobject<A>
where
    A: Arrow,
    L: LatticeAlgorithm<A>,
{
    algorithm.top(object)
}

/// The least subobject of `object` computed by `algorithm`.
pub fn bottom<A, L>(algorithm: L, object: &A::Object) -> Subobject<A>
where
    A: Arrow,
    L: LatticeAlgorithm<A>,
{
    algorithm.bottom(object)
}
