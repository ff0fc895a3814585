//! Property-based tests for the reduction engine.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use noema_core::{Atom, AtomStore, Handle};

    use crate::additive;

    fn leaf() -> impl Strategy<Value = Handle> {
        prop_oneof![
            "[xyz]".prop_map(|name| Atom::variable(name)),
            prop::collection::vec(0.0..100.0f64, 1..3).prop_map(Atom::number_from_values),
        ]
    }

    fn expr() -> impl Strategy<Value = Handle> {
        leaf().prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 2..4)
                    .prop_map(|children| Atom::plus(children)),
                prop::collection::vec(inner, 2..4).prop_map(|children| Atom::times(children)),
            ]
        })
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(e in expr()) {
            let once = additive::normalize(&e).unwrap();
            let twice = additive::normalize(&once).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn normalize_matches_reduce_without_store(e in expr()) {
            let normalized = additive::normalize(&e).unwrap();
            let reduced = additive::reduce(&e, None).unwrap();
            prop_assert_eq!(normalized, reduced);
        }

        #[test]
        fn reduce_result_is_stored(e in expr()) {
            let store = AtomStore::new();
            let reduced = additive::reduce(&e, Some(&store)).unwrap();
            prop_assert!(store.contains(&reduced));

            // Re-reducing an equal expression converges on one instance.
            let again = additive::reduce(&e, Some(&store)).unwrap();
            prop_assert!(std::sync::Arc::ptr_eq(&reduced, &again));
        }

        #[test]
        fn fully_numeric_sums_collapse_to_a_leaf(
            values in prop::collection::vec(0.0..100.0f64, 2..6)
        ) {
            let sum = Atom::plus(
                values
                    .iter()
                    .map(|v| Atom::number_from_values(vec![*v]))
                    .collect::<Vec<_>>(),
            );
            let reduced = additive::normalize(&sum).unwrap();
            prop_assert!(reduced.is_number());
        }
    }
}
