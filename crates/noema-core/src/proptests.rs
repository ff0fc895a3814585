//! Property-based tests for numeric parsing and vector arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::number::{parse, serialize};
    use crate::vector;

    // Strategy for finite non-negative doubles (the scanner never
    // produces a sign, so round-trip properties live in this domain).
    fn non_negative() -> impl Strategy<Value = f64> {
        0.0..1.0e12f64
    }

    fn value_vec() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(non_negative(), 0..8)
    }

    proptest! {
        #[test]
        fn parse_is_stable_under_reserialization(values in value_vec()) {
            let text = serialize(&values);
            let parsed = parse(&text);
            prop_assert_eq!(&parsed, &values);

            // A second round trip changes nothing.
            let again = parse(&serialize(&parsed));
            prop_assert_eq!(again, parsed);
        }

        #[test]
        fn parse_round_trips_arbitrary_text(text in "[ a-z0-9.]{0,40}") {
            let once = parse(&text);
            let twice = parse(&serialize(&once));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn parse_never_panics(text in ".*") {
            let _ = parse(&text);
        }

        #[test]
        fn elementwise_add_truncates(a in value_vec(), b in value_vec()) {
            let sum = vector::add(&a, &b);
            prop_assert_eq!(sum.len(), a.len().min(b.len()));
            for (i, s) in sum.values().iter().enumerate() {
                prop_assert_eq!(*s, a[i] + b[i]);
            }
        }

        #[test]
        fn scalar_add_matches_elementwise(s in non_negative(), v in value_vec()) {
            let broadcast = vector::scalar_add(s, &v);
            let expanded = vec![s; v.len()];
            prop_assert_eq!(broadcast, vector::add(&expanded, &v));
        }
    }
}
