//! Regexes used by the case transformations, compiled once per encoding.

use crate::encoding::Encoding;
use regex::Regex;
use std::sync::LazyLock;

/// Compiled patterns for one encoding.
pub(super) struct Patterns {
    /// A run of `-`, `_` or whitespace, capturing the code point after it.
    pub separator_run: Regex,
    /// A run of digits, optionally followed by one code point.
    pub digit_run: Regex,
    /// One upper-case letter.
    pub upper: Regex,
    /// A run of `-`, `_` or whitespace.
    pub delimiter_run: Regex,
    /// One non-whitespace code point.
    pub non_space: Regex,
    /// A maximal run of non-whitespace code points.
    pub word: Regex,
}

impl Patterns {
    fn compile(encoding: Encoding) -> Self {
        let space = encoding.space_class();
        let non_space = encoding.non_space_class();
        let build = |pattern: String| {
            Regex::new(&pattern).expect("case transformation regexes are built from static classes")
        };

        Self {
            separator_run: build(format!(r"(?:[-_]|{space})+(.)?")),
            digit_run: build(format!(r"{}+(.)?", encoding.digit_class())),
            upper: build(encoding.upper_class().to_string()),
            delimiter_run: build(format!(r"(?:[-_]|{space})+")),
            non_space: build(non_space.to_string()),
            word: build(format!("{non_space}+")),
        }
    }
}

static UTF8: LazyLock<Patterns> = LazyLock::new(|| Patterns::compile(Encoding::Utf8));
static ASCII: LazyLock<Patterns> = LazyLock::new(|| Patterns::compile(Encoding::Ascii));
static LATIN1: LazyLock<Patterns> = LazyLock::new(|| Patterns::compile(Encoding::Latin1));

/// Patterns that match under `encoding`.
pub(super) fn patterns(encoding: Encoding) -> &'static Patterns {
    match encoding {
        Encoding::Utf8 => &UTF8,
        Encoding::Ascii => &ASCII,
        Encoding::Latin1 => &LATIN1,
    }
}
