use {
    proptest::prelude::{Just, Strategy},
    subobject_algebra::{finite_set::FinFunction, subobject::Subobject},
};

pub(crate) const MAX_OBJECT: usize = 6;

/// A nonempty ambient object.
pub(crate) fn object_strategy() -> impl Strategy<Value = usize> {
    1usize..MAX_OBJECT
}

/// An arbitrary arrow `source → target`, for a nonzero `target`.
pub(crate) fn arrow_with(source: usize, target: usize) -> impl Strategy<Value = FinFunction> {
    proptest::collection::vec(0..target, source)
        .prop_map(move |table| FinFunction::new(table, target).expect("by construction"))
}

/// An arbitrary arrow into a nonzero `target`, with a random source.
pub(crate) fn arrow_into(target: usize) -> impl Strategy<Value = FinFunction> {
    (0..MAX_OBJECT).prop_flat_map(move |source| arrow_with(source, target))
}

/// The inclusion of a uniformly random subset of `{0..target}`.
pub(crate) fn inclusion_into(target: usize) -> impl Strategy<Value = FinFunction> {
    proptest::collection::vec(proptest::bool::ANY, target).prop_map(move |mask| {
        let elements = (0..target).filter(|&value| mask[value]).collect();
        FinFunction::inclusion(elements, target).expect("by construction")
    })
}

pub(crate) fn subobject_of(target: usize) -> impl Strategy<Value = Subobject<FinFunction>> {
    inclusion_into(target).prop_map(Subobject::new)
}

/// A shared ambient object together with `N` subobjects of it.
pub(crate) fn subobjects<const N: usize>(
) -> impl Strategy<Value = (usize, [Subobject<FinFunction>; N])> {
    object_strategy().prop_flat_map(|object| {
        (
            Just(object),
            proptest::array::uniform(subobject_of(object)),
        )
    })
}

/// A pair `A ⊆ B` of nested subobjects of a shared ambient object: `B` is
/// a random subset and `A` a random subset of `B`.
pub(crate) fn nested_subobjects(
) -> impl Strategy<Value = (usize, Subobject<FinFunction>, Subobject<FinFunction>)> {
    object_strategy().prop_flat_map(|object| {
        let masks = (
            proptest::collection::vec(proptest::bool::ANY, object),
            proptest::collection::vec(proptest::bool::ANY, object),
        );
        masks.prop_map(move |(outer, keep)| {
            let larger: Vec<usize> = (0..object).filter(|&value| outer[value]).collect();
            let smaller: Vec<usize> = larger
                .iter()
                .copied()
                .filter(|&value| keep[value])
                .collect();
            let smaller = Subobject::new(
                FinFunction::inclusion(smaller, object).expect("by construction"),
            );
            let larger = Subobject::new(
                FinFunction::inclusion(larger, object).expect("by construction"),
            );
            (object, smaller, larger)
        })
    })
}
