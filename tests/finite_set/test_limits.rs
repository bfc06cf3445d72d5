use subobject_algebra::{category::*, finite_set::*};

use super::strategy::{arrow_into, arrow_with, object_strategy, MAX_OBJECT};

use proptest::prelude::{Just, Strategy};
use proptest::{prop_assert, prop_assert_eq, proptest};

/// A pair of arrows sharing a codomain.
fn cospan_pair() -> impl Strategy<Value = (FinFunction, FinFunction)> {
    object_strategy().prop_flat_map(|x| (arrow_into(x), arrow_into(x)))
}

/// A span: an apex with two legs out of it.
fn span_pair() -> impl Strategy<Value = Span<FinFunction>> {
    (0..MAX_OBJECT, 1..MAX_OBJECT, 1..MAX_OBJECT).prop_flat_map(|(apex, p, q)| {
        (Just(apex), arrow_with(apex, p), arrow_with(apex, q))
            .prop_map(|(apex, f, g)| Span {
                apex,
                legs: vec![f, g],
            })
    })
}

proptest! {
    #[test]
    fn pullback_square_commutes((f, g) in cospan_pair()) {
        let span = FinFunction::pullback(&[f.clone(), g.clone()])
            .expect("codomains agree by construction");
        prop_assert_eq!(span.legs.len(), 2);
        prop_assert!(span.legs.iter().all(|leg| leg.source() == span.apex));

        let left = (&span.legs[0] >> &f).expect("leg targets f's source");
        let right = (&span.legs[1] >> &g).expect("leg targets g's source");
        prop_assert_eq!(left, right);
    }

    #[test]
    fn pullback_apex_counts_matching_pairs((f, g) in cospan_pair()) {
        let span = FinFunction::pullback(&[f.clone(), g.clone()])
            .expect("codomains agree by construction");

        let mut matching = 0;
        for &a in &f.table {
            for &b in &g.table {
                if a == b {
                    matching += 1;
                }
            }
        }
        prop_assert_eq!(span.apex, matching);
    }

    #[test]
    fn pullback_rejects_mismatched_codomains(
        (x, y) in (object_strategy(), object_strategy()),
        sources in (0..MAX_OBJECT, 0..MAX_OBJECT),
    ) {
        if x != y {
            let f = FinFunction::new(vec![0; sources.0], x).expect("constant table in range");
            let g = FinFunction::new(vec![0; sources.1], y).expect("constant table in range");
            prop_assert!(FinFunction::pullback(&[f, g]).is_none());
        }
    }

    #[test]
    fn pushout_square_commutes(span in span_pair()) {
        let cospan = FinFunction::pushout(&span).expect("span is well formed by construction");
        prop_assert_eq!(cospan.legs.len(), 2);
        prop_assert!(cospan.legs.iter().all(|leg| leg.target() == cospan.coapex));

        let left = (&span.legs[0] >> &cospan.legs[0]).expect("injection targets the coapex");
        let right = (&span.legs[1] >> &cospan.legs[1]).expect("injection targets the coapex");
        prop_assert_eq!(left, right);
    }

    #[test]
    fn pushout_injections_jointly_surjective(span in span_pair()) {
        let cospan = FinFunction::pushout(&span).expect("span is well formed by construction");

        let mut hit = vec![false; cospan.coapex];
        for leg in &cospan.legs {
            for &value in &leg.table {
                hit[value] = true;
            }
        }
        prop_assert!(hit.into_iter().all(|covered| covered));
    }

    #[test]
    fn copair_of_injections_is_identity(span in span_pair()) {
        let cospan = FinFunction::pushout(&span).expect("span is well formed by construction");
        let mediator = FinFunction::copair(&cospan, &cospan.legs)
            .expect("the injections commute with themselves");
        prop_assert_eq!(mediator, FinFunction::identity(&cospan.coapex));
    }

    #[test]
    fn copair_is_the_unique_mediator((span, h) in span_with_mediator()) {
        // Any commuting family arises as `ιᵢ ; h` for some `h` out of the
        // coapex, and its copair must recover exactly that `h`.
        let cospan = FinFunction::pushout(&span).expect("span is well formed by construction");
        let family: Vec<FinFunction> = cospan
            .legs
            .iter()
            .map(|leg| (leg >> &h).expect("h's source is the coapex"))
            .collect();
        prop_assert_eq!(FinFunction::copair(&cospan, &family), Some(h));
    }
}

/// A span together with an arrow out of its pushout's coapex.
fn span_with_mediator() -> impl Strategy<Value = (Span<FinFunction>, FinFunction)> {
    span_pair().prop_flat_map(|span| {
        let coapex = FinFunction::pushout(&span)
            .expect("span is well formed by construction")
            .coapex;
        (Just(span), arrow_with(coapex, MAX_OBJECT))
    })
}

#[test]
fn pullback_rejects_empty_family() {
    assert!(FinFunction::pullback(&[]).is_none());
}

#[test]
fn pushout_rejects_empty_family() {
    let span: Span<FinFunction> = Span {
        apex: 2,
        legs: vec![],
    };
    assert!(FinFunction::pushout(&span).is_none());
}

#[test]
fn pushout_rejects_mismatched_domains() {
    let span = Span {
        apex: 2,
        legs: vec![
            FinFunction::new(vec![0, 1], 2).unwrap(),
            FinFunction::new(vec![0], 3).unwrap(),
        ],
    };
    assert!(FinFunction::pushout(&span).is_none());
}

#[test]
fn copair_rejects_non_commuting_family() {
    // Both legs collapse the point to the same class, so a family that
    // disagrees on it admits no mediator.
    let span = Span {
        apex: 1,
        legs: vec![
            FinFunction::new(vec![0], 1).unwrap(),
            FinFunction::new(vec![0], 1).unwrap(),
        ],
    };
    let cospan = FinFunction::pushout(&span).unwrap();
    let family = [
        FinFunction::new(vec![0], 2).unwrap(),
        FinFunction::new(vec![1], 2).unwrap(),
    ];
    assert!(FinFunction::copair(&cospan, &family).is_none());
}
