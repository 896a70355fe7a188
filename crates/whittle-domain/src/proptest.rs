//! Property-based tests for the evaluation engine.
//!
//! These verify the run-level invariants:
//! - accepted candidates always satisfy the configured length bounds
//! - accepted candidates never contain a checkable account-name fragment
//! - complexity-only policies never accept single-category candidates
//! - counters stay balanced and filtering is idempotent

use crate::engine::evaluate;
use crate::policy::Policy;
use crate::report::{RunStats, Verdict};
use ::proptest::prelude::*;

/// Strategy for candidate strings: ASCII letters, digits, and the special
/// set, mixed with occasional Greek/Cyrillic letters.
fn arb_candidate() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9!#$%&*?@^_абвгАБВГαβγδΑΒΓΔ]{0,24}").unwrap()
}

/// Strategy for account names long enough to be checked.
fn arb_account_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{3,8}").unwrap()
}

/// Strategy for length bounds with `max >= min` guaranteed.
fn arb_length_bounds() -> impl Strategy<Value = (usize, usize)> {
    (0usize..12, 0usize..12).prop_map(|(min, extra)| (min, min + extra))
}

proptest! {
    #[test]
    fn accepted_candidates_satisfy_length_bounds(
        candidate in arb_candidate(),
        (min, max) in arb_length_bounds(),
    ) {
        let policy = Policy::new(min, Some(max), false, Vec::new(), Vec::new()).unwrap();
        if evaluate(&candidate, &policy) == Verdict::Accepted {
            let len = candidate.chars().count();
            prop_assert!(len >= min && len <= max);
        }
    }

    #[test]
    fn accepted_candidates_contain_no_account_fragment(
        candidate in arb_candidate(),
        names in prop::collection::vec(arb_account_name(), 1..4),
    ) {
        let policy = Policy::new(0, None, false, names.clone(), Vec::new()).unwrap();
        if evaluate(&candidate, &policy) == Verdict::Accepted {
            let haystack = candidate.to_lowercase();
            for name in &names {
                prop_assert!(!haystack.contains(&name.to_lowercase()));
            }
        }
    }

    #[test]
    fn single_category_candidates_fail_complexity(
        candidate in prop::string::string_regex("[a-z]{7,20}").unwrap(),
    ) {
        let policy = Policy::new(7, None, true, Vec::new(), Vec::new()).unwrap();
        prop_assert_eq!(evaluate(&candidate, &policy), Verdict::Rejected);
    }

    #[test]
    fn counters_stay_balanced_over_a_run(
        candidates in prop::collection::vec(arb_candidate(), 0..32),
    ) {
        let policy = Policy::default();
        let mut stats = RunStats::default();
        for candidate in &candidates {
            stats.record(evaluate(candidate, &policy));
        }
        prop_assert_eq!(stats.processed, candidates.len() as u64);
        prop_assert_eq!(stats.processed, stats.accepted + stats.rejected);
    }

    #[test]
    fn filtering_accepted_output_is_idempotent(
        candidates in prop::collection::vec(arb_candidate(), 0..32),
        (min, max) in arb_length_bounds(),
        complexity in any::<bool>(),
        names in prop::collection::vec(arb_account_name(), 0..3),
    ) {
        let policy = Policy::new(min, Some(max), complexity, names, Vec::new()).unwrap();
        let accepted: Vec<&String> = candidates
            .iter()
            .filter(|c| evaluate(c, &policy) == Verdict::Accepted)
            .collect();
        let refiltered: Vec<&String> = accepted
            .iter()
            .copied()
            .filter(|c| evaluate(c, &policy) == Verdict::Accepted)
            .collect();
        prop_assert_eq!(accepted, refiltered);
    }
}
