use regex::Regex;
use std::sync::LazyLock;

/// Categories required before a candidate passes.
const REQUIRED_CATEGORIES: usize = 3;

/// Character categories approximating the Windows "password must meet
/// complexity requirements" rule. A category scores one point when any of
/// its characters appears anywhere in the candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Category {
    Upper,
    Lower,
    Digit,
    Special,
    OtherLetter,
}

impl Category {
    const ALL: [Category; 5] = [
        Category::Upper,
        Category::Lower,
        Category::Digit,
        Category::Special,
        Category::OtherLetter,
    ];

    fn pattern(self) -> &'static Regex {
        // Upper/lower cover ASCII plus the Greek and Cyrillic case ranges.
        // OtherLetter is any letter outside the Latin script and outside the
        // four ranges already counted, so CJK, Arabic, Hebrew and the like
        // still score a category.
        static UPPER: LazyLock<Regex> = LazyLock::new(|| compile(r"[A-ZΑ-ΩА-Я]"));
        static LOWER: LazyLock<Regex> = LazyLock::new(|| compile(r"[a-zα-ωа-я]"));
        static DIGIT: LazyLock<Regex> = LazyLock::new(|| compile(r"\d"));
        static SPECIAL: LazyLock<Regex> =
            LazyLock::new(|| compile(r##"[-!"#$%&()*,./:;?@\[\]^_`{|}~+<>]"##));
        static OTHER_LETTER: LazyLock<Regex> =
            LazyLock::new(|| compile(r"[[\p{L}--\p{Latin}]--[Α-Ωα-ωА-Яа-я]]"));

        match self {
            Category::Upper => &UPPER,
            Category::Lower => &LOWER,
            Category::Digit => &DIGIT,
            Category::Special => &SPECIAL,
            Category::OtherLetter => &OTHER_LETTER,
        }
    }

    fn is_met(self, candidate: &str) -> bool {
        self.pattern().is_match(candidate)
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("category patterns are fixed and must compile")
}

/// Passes when at least three of the five categories are present.
pub fn run(candidate: &str) -> bool {
    let met = Category::ALL
        .iter()
        .filter(|category| category.is_met(candidate))
        .count();
    met >= REQUIRED_CATEGORIES
}
