//! Property-based tests for the currying and applicative combinators.
use fnk_comb::{apply, curry2, curry3};
use proptest::prelude::*;

proptest! {
    #[test]
    fn curry2_equivalent_to_direct_call(a in any::<i64>(), b in any::<i64>()) {
        let f = |a: i64, b: i64| a.wrapping_mul(31).wrapping_add(b);
        prop_assert_eq!(curry2(f)(a)(b), f(a, b));
    }

    #[test]
    fn curry3_equivalent_to_direct_call(
        a in any::<i32>(),
        b in "[a-z]{0,12}",
        c in any::<char>(),
    ) {
        let f = |a: i32, b: String, c: char| format!("{} {} {}", a, b, c);
        prop_assert_eq!(curry3(f)(a)(b.clone())(c), f(a, b, c));
    }

    #[test]
    fn partial_applications_do_not_share_state(
        a1 in any::<i64>(),
        a2 in any::<i64>(),
        b in any::<i64>(),
    ) {
        let f = |a: i64, b: i64| a.wrapping_sub(b);
        let curried = curry2(f);
        let first = curried(a1);
        let second = curried(a2);

        // Interleave invocations; each chain must keep its own bound argument.
        prop_assert_eq!(second(b), f(a2, b));
        prop_assert_eq!(first(b), f(a1, b));
        prop_assert_eq!(second(b), f(a2, b));
    }

    #[test]
    fn apply_matches_plain_application_when_present(x in any::<i32>()) {
        let f = |x: i32| x.wrapping_add(1);
        prop_assert_eq!(apply(Some(f), Some(x)), Some(f(x)));
    }

    #[test]
    fn apply_is_absent_when_either_operand_is(x in any::<i32>()) {
        let f = |x: i32| x.wrapping_add(1);
        prop_assert_eq!(apply(None::<fn(i32) -> i32>, Some(x)), None);
        prop_assert_eq!(apply(Some(f), None), None);
    }

    #[test]
    fn chained_apply_succeeds_only_on_full_presence(
        a in proptest::option::of(any::<i16>()),
        b in proptest::option::of(any::<i16>()),
        c in proptest::option::of(any::<i16>()),
    ) {
        let mk = curry3(|a: i16, b: i16, c: i16| (a, b, c));
        let result = apply(apply(apply(Some(mk), a), b), c);

        match (a, b, c) {
            (Some(a), Some(b), Some(c)) => prop_assert_eq!(result, Some((a, b, c))),
            _ => prop_assert_eq!(result, None),
        }
    }
}
