use super::{complexity, length, personal_info, run_all};
use crate::policy::Policy;
use crate::report::Verdict;

fn policy_with_lengths(min: usize, max: Option<usize>) -> Policy {
    Policy::new(min, max, false, Vec::new(), Vec::new()).unwrap()
}

fn policy_with_names(account: Vec<&str>, display: Vec<&str>) -> Policy {
    Policy::new(
        0,
        None,
        false,
        account.into_iter().map(String::from).collect(),
        display.into_iter().map(String::from).collect(),
    )
    .unwrap()
}

#[test]
fn length_enforces_lower_bound() {
    let policy = policy_with_lengths(7, None);
    assert!(!length::run("abcdef", &policy));
    assert!(length::run("abcdefg", &policy));
}

#[test]
fn length_enforces_upper_bound_when_present() {
    let policy = policy_with_lengths(3, Some(5));
    assert!(length::run("abc", &policy));
    assert!(length::run("abcde", &policy));
    assert!(!length::run("abcdef", &policy));
}

#[test]
fn length_counts_scalar_values_not_bytes() {
    // Six Cyrillic letters, twelve bytes.
    let policy = policy_with_lengths(6, Some(6));
    assert!(length::run("пароль", &policy));

    let policy = policy_with_lengths(7, None);
    assert!(!length::run("пароль", &policy));
}

#[test]
fn complexity_counts_ascii_categories() {
    // upper + lower + digit + special = 4 categories.
    assert!(complexity::run("Passw0rd!"));
    // lower only.
    assert!(!complexity::run("password"));
    // upper + lower.
    assert!(!complexity::run("Password"));
    // upper + lower + digit.
    assert!(complexity::run("Password1"));
}

#[test]
fn complexity_accepts_greek_and_cyrillic_case_ranges() {
    // Cyrillic upper + Cyrillic lower + digit.
    assert!(complexity::run("Пароль7"));
    // Greek upper + Greek lower + digit.
    assert!(complexity::run("Αλφα123"));
}

#[test]
fn complexity_scores_other_letters_outside_latin() {
    // CJK letters + digit + special.
    assert!(complexity::run("汉字密码1!"));
    // Hebrew letters alone are a single category.
    assert!(!complexity::run("שלוםשלום"));
}

#[test]
fn complexity_digit_category_is_unicode_aware() {
    // Arabic-Indic digits count as digits, Arabic letters as other letters,
    // plus a special character: three categories.
    assert!(complexity::run("كلمة٣!"));
}

#[test]
fn complexity_special_set_is_literal() {
    assert!(complexity::run("Ab<"));
    assert!(complexity::run("Ab~"));
    assert!(complexity::run("Ab`"));
    // Space and apostrophe are not in the special set.
    assert!(!complexity::run("ab c"));
    assert!(!complexity::run("ab'c"));
}

#[test]
fn personal_info_account_match_is_case_insensitive() {
    let policy = policy_with_names(vec!["jdoe"], vec![]);
    assert!(!personal_info::run("myJDoe123", &policy));
    assert!(personal_info::run("unrelated", &policy));
}

#[test]
fn personal_info_short_account_names_are_ignored() {
    let policy = policy_with_names(vec!["jd"], vec![]);
    assert!(personal_info::run("jdpassword", &policy));

    let policy = policy_with_names(vec!["jdo"], vec![]);
    assert!(!personal_info::run("jdopassword", &policy));
}

#[test]
fn personal_info_display_name_tokens_match() {
    let policy = policy_with_names(vec![], vec!["John Doe"]);
    assert!(!personal_info::run("iloveDOEtown", &policy));
    assert!(!personal_info::run("johnny", &policy));
    assert!(personal_info::run("unrelated", &policy));
}

#[test]
fn personal_info_short_display_tokens_are_ignored() {
    let policy = policy_with_names(vec![], vec!["Jo Al"]);
    assert!(personal_info::run("joalpass1", &policy));
}

#[test]
fn personal_info_splits_on_every_delimiter() {
    let policy = policy_with_names(vec![], vec!["Doe#Smith.Ann,Lee\\Kim-Day_Fox\tOrr"]);
    for fragment in ["doe", "smith", "ann", "lee", "kim", "day", "fox", "orr"] {
        let candidate = format!("xx{fragment}xx");
        assert!(!personal_info::run(&candidate, &policy), "{fragment}");
    }
}

#[test]
fn personal_info_lowercases_unicode() {
    let policy = policy_with_names(vec!["JOSÉ"], vec![]);
    assert!(!personal_info::run("xxjoséxx", &policy));
}

#[test]
fn personal_info_empty_lists_always_pass() {
    let policy = policy_with_names(vec![], vec![]);
    assert!(personal_info::run("anything", &policy));
}

#[test]
fn run_all_rejects_on_any_failing_check() {
    // Too short and containing an account fragment: still a single rejection.
    let policy = Policy::new(
        7,
        None,
        false,
        vec!["doe".to_string()],
        Vec::new(),
    )
    .unwrap();
    assert_eq!(run_all("doe", &policy), Verdict::Rejected);
    assert_eq!(run_all("doe12345", &policy), Verdict::Rejected);
    assert_eq!(run_all("clean123", &policy), Verdict::Accepted);
}
