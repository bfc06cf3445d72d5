use super::traits::Arrow;

use core::fmt::Debug;

/// A finite family of morphisms `legs[i] : apex → Pᵢ` out of a shared apex.
///
/// Pullbacks produce spans: the legs are the projections out of the limit.
pub struct Span<A: Arrow> {
    pub apex: A::Object,
    pub legs: Vec<A>,
}

/// A finite family of morphisms `legs[i] : Pᵢ → coapex` into a shared coapex.
///
/// Pushouts produce cospans: the legs are the injections into the colimit.
pub struct Cospan<A: Arrow> {
    pub coapex: A::Object,
    pub legs: Vec<A>,
}

/// A category with an initial object `0`.
pub trait HasInitial: Arrow {
    /// The initial object of the category.
    fn initial_object() -> Self::Object;

    /// The unique morphism `0 → a`.
    fn initial(a: &Self::Object) -> Self;
}

/// A category with wide pullbacks of finite families.
pub trait HasPullbacks: Arrow {
    /// The pullback of a family of morphisms `fᵢ : Pᵢ → X` sharing a
    /// codomain: an apex `L` and projections `πᵢ : L → Pᵢ` such that all
    /// composites `πᵢ ; fᵢ` agree, universal among such cones.
    ///
    /// # Errors
    ///
    /// Returns None if the family is empty, if the codomains disagree, or
    /// if the category cannot supply the limit.
    fn pullback(cospan: &[Self]) -> Option<Span<Self>>;
}

/// A category with wide pushouts of finite families.
pub trait HasPushouts: Arrow {
    /// The pushout of a family of morphisms `πᵢ : L → Pᵢ` sharing a
    /// domain: a coapex `J` and injections `ιᵢ : Pᵢ → J` such that all
    /// composites `πᵢ ; ιᵢ` agree, universal among such cocones.
    ///
    /// # Errors
    ///
    /// Returns None if the family is empty, if the domains disagree, or if
    /// the category cannot supply the colimit.
    fn pushout(span: &Span<Self>) -> Option<Cospan<Self>>;

    /// The mediating morphism out of a pushout: given injections
    /// `ιᵢ : Pᵢ → J` and a family `fᵢ : Pᵢ → X` with all `πᵢ ; fᵢ` equal,
    /// the unique `u : J → X` with `ιᵢ ; u = fᵢ` for every `i`.
    ///
    /// # Errors
    ///
    /// Returns None if the family does not commute with the injections,
    /// i.e. no mediating morphism exists.
    fn copair(cospan: &Cospan<Self>, family: &[Self]) -> Option<Self>;
}

// Can't derive Clone/Debug: the derived bounds constrain `A` but not `A::Object`.
impl<A: Arrow + Clone> Clone for Span<A>
where
    A::Object: Clone,
{
    fn clone(&self) -> Self {
        Self {
            apex: self.apex.clone(),
            legs: self.legs.clone(),
        }
    }
}

impl<A: Arrow + Clone> Clone for Cospan<A>
where
    A::Object: Clone,
{
    fn clone(&self) -> Self {
        Self {
            coapex: self.coapex.clone(),
            legs: self.legs.clone(),
        }
    }
}

impl<A: Arrow + Debug> Debug for Span<A>
where
    A::Object: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("apex", &self.apex)
            .field("legs", &self.legs)
            .finish()
    }
}

impl<A: Arrow + Debug> Debug for Cospan<A>
where
    A::Object: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cospan")
            .field("coapex", &self.coapex)
            .field("legs", &self.legs)
            .finish()
    }
}
