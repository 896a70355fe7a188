use crate::policy::Policy;

/// Length bounds, counted in Unicode scalar values rather than bytes.
pub fn run(candidate: &str, policy: &Policy) -> bool {
    let len = candidate.chars().count();
    len >= policy.min_length && policy.max_length.map(|max| len <= max).unwrap_or(true)
}
