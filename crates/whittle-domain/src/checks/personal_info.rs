use crate::policy::Policy;

/// Display names are split on these before token matching.
const DISPLAY_NAME_DELIMITERS: [char; 8] = [',', '.', '\\', '-', '_', ' ', '\t', '#'];

/// Account names and display-name tokens shorter than this never reject.
const MIN_FRAGMENT_LEN: usize = 3;

/// Passes when no supplied account name or display-name token is a
/// case-insensitive substring of the candidate. Account names are tested
/// first; the display-name scan is skipped once one already matched.
pub fn run(candidate: &str, policy: &Policy) -> bool {
    if policy.account_names.is_empty() && policy.display_names.is_empty() {
        return true;
    }

    let haystack = candidate.to_lowercase();

    if policy
        .account_names
        .iter()
        .any(|name| contains_fragment(&haystack, name))
    {
        return false;
    }

    !policy.display_names.iter().any(|name| {
        name.split(DISPLAY_NAME_DELIMITERS)
            .any(|token| contains_fragment(&haystack, token))
    })
}

fn contains_fragment(haystack: &str, fragment: &str) -> bool {
    fragment.chars().count() >= MIN_FRAGMENT_LEN
        && haystack.contains(&fragment.to_lowercase())
}
