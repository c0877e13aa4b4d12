use assert_facade::{assert, Truthiness};
use proptest::prelude::*;
use serde_json::{json, Value};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_equals_is_reflexive(v in arb_json()) {
        prop_assert!(assert::equals(&v, &v, None).is_ok());
        prop_assert!(assert::not_equals(&v, &v, None).is_err());
    }

    #[test]
    fn prop_not_equals_complements_equals(a in arb_json(), b in arb_json()) {
        let equal = assert::equals(&a, &b, None).is_ok();
        let not_equal_fails = assert::not_equals(&a, &b, None).is_err();
        prop_assert_eq!(equal, not_equal_fails);
    }

    #[test]
    fn prop_strict_equals_same_reference(v in arb_json()) {
        prop_assert!(assert::strict_equals(&v, &v, None).is_ok());
    }

    #[test]
    fn prop_strict_equals_rejects_distinct_containers(items in prop::collection::vec(any::<i32>(), 0..8)) {
        let copy = items.clone();
        prop_assert!(assert::strict_equals(&items, &copy, None).is_err());
    }

    #[test]
    fn prop_truthy_and_falsey_are_complements(v in arb_json()) {
        let truthy = assert::truthy(&v, None).is_ok();
        let falsey = assert::falsey(&v, None).is_ok();
        prop_assert_ne!(truthy, falsey);
        prop_assert_eq!(truthy, v.is_truthy());
    }

    #[test]
    fn prop_truthy_and_falsey_on_numbers(n in any::<i64>()) {
        prop_assert_ne!(assert::truthy(n, None).is_ok(), assert::falsey(n, None).is_ok());
    }

    #[test]
    fn prop_object_matches_itself_and_subsets(
        m in prop::collection::btree_map("[a-z]{1,4}", any::<i32>(), 1..6)
    ) {
        let full = Value::Object(m.iter().map(|(k, v)| (k.clone(), json!(v))).collect());
        prop_assert!(assert::match_object(&full, &full, None).is_ok());

        let (first_key, first_value) = m.iter().next().unwrap();
        let subset = Value::Object([(first_key.clone(), json!(first_value))].into_iter().collect());
        prop_assert!(assert::match_object(&full, &subset, None).is_ok());
    }

    #[test]
    fn prop_array_includes_own_elements(items in prop::collection::vec(any::<u16>(), 1..10), idx in any::<prop::sample::Index>()) {
        let picked = items[idx.index(items.len())];
        prop_assert!(assert::array_includes(&items, &[picked], None).is_ok());
    }

    #[test]
    fn prop_almost_equals_within_tolerance(x in -1.0e6f64..1.0e6, delta in 0.0f64..0.5) {
        prop_assert!(assert::almost_equals(x, x + delta, Some(1.0), None).is_ok());
    }

    #[test]
    fn prop_unconditional_always_fail(msg in proptest::option::of("[ -~]{0,20}")) {
        prop_assert!(assert::fail(msg.as_deref()).is_err());
        prop_assert!(assert::unimplemented(msg.as_deref()).is_err());
        prop_assert!(assert::unreachable(msg.as_deref()).is_err());
    }

    #[test]
    fn prop_throws_iff_function_errs(fails in any::<bool>()) {
        let outcome = assert::throws(
            || if fails { Err(std::fmt::Error) } else { Ok(()) },
            &assert_facade::ErrorExpectation::new(),
        );
        prop_assert_eq!(outcome.is_ok(), fails);
    }
}
