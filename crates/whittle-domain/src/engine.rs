use crate::checks;
use crate::policy::Policy;
use crate::report::Verdict;

/// Run the full check chain over one trimmed candidate.
///
/// The chain order (length, personal information, complexity) is fixed:
/// cheapest and most frequent rejector first. Each check is a pure predicate,
/// so reordering would not change which candidates survive, only how much
/// work rejected ones cost.
pub fn evaluate(candidate: &str, policy: &Policy) -> Verdict {
    checks::run_all(candidate, policy)
}
