//! Case conversion transformations: camelize, dasherize, underscored, swap case, titleize.
//!
//! Every function takes the encoding explicitly; nothing here reads ambient state.

use super::patterns::patterns;
use crate::encoding::Encoding;
use regex::{Captures, NoExpand};

/// Upper-case the first code point, leaving the rest untouched.
pub fn upper_case_first(input: &str, encoding: Encoding) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(input.len());
            encoding.push_upper(first, &mut result);
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}

/// Lower-case the first code point, leaving the rest untouched.
pub fn lower_case_first(input: &str, encoding: Encoding) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(input.len());
            encoding.push_lower(first, &mut result);
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}

/// Convert to camelCase.
///
/// Separators (`-`, `_`, whitespace) are removed and the code point after each
/// run is upper-cased. A second pass upper-cases the code point following
/// every digit run, keeping the digits.
pub fn camelize(input: &str, encoding: Encoding) -> String {
    let patterns = patterns(encoding);
    let lowered = lower_case_first(encoding.trim(input), encoding);

    let joined = patterns
        .separator_run
        .replace_all(&lowered, |caps: &Captures<'_>| {
            caps.get(1)
                .map_or_else(String::new, |next| encoding.to_upper(next.as_str()))
        });

    patterns
        .digit_run
        .replace_all(&joined, |caps: &Captures<'_>| encoding.to_upper(&caps[0]))
        .into_owned()
}

/// Convert to UpperCamelCase.
pub fn upper_camelize(input: &str, encoding: Encoding) -> String {
    upper_case_first(&camelize(input, encoding), encoding)
}

/// Convert to dash-separated lower case.
pub fn dasherize(input: &str, encoding: Encoding) -> String {
    delimit(input, encoding, "-")
}

/// Convert to underscore-separated lower case.
pub fn underscored(input: &str, encoding: Encoding) -> String {
    delimit(input, encoding, "_")
}

/// Split on upper-case letters and separator runs, joining with `delimiter`.
fn delimit(input: &str, encoding: Encoding, delimiter: &str) -> String {
    let patterns = patterns(encoding);
    let trimmed = encoding.trim(input);

    // Only split where the upper-case letter continues a word.
    let mut split = String::with_capacity(trimmed.len() + 8);
    let mut last = 0;
    for upper in patterns.upper.find_iter(trimmed) {
        let before = &trimmed[last..upper.start()];
        split.push_str(before);
        if trimmed[..upper.start()]
            .chars()
            .next_back()
            .is_some_and(|prev| encoding.is_word(prev))
        {
            split.push_str(delimiter);
        }
        split.push_str(upper.as_str());
        last = upper.end();
    }
    split.push_str(&trimmed[last..]);

    let collapsed = patterns
        .delimiter_run
        .replace_all(&split, NoExpand(delimiter));
    encoding.to_lower(&collapsed)
}

/// Swap the case of every non-whitespace code point.
///
/// A code point equal to its own upper-case form is lower-cased, so caseless
/// code points take the lower-case branch and come out unchanged.
pub fn swap_case(input: &str, encoding: Encoding) -> String {
    patterns(encoding)
        .non_space
        .replace_all(input, |caps: &Captures<'_>| {
            let ch = &caps[0];
            let upper = encoding.to_upper(ch);
            if upper == ch {
                encoding.to_lower(ch)
            } else {
                upper
            }
        })
        .into_owned()
}

/// Upper-case the first code point of every word not listed in `ignore`.
///
/// Words are maximal runs of non-whitespace. Ignored words must match exactly.
pub fn titleize<S: AsRef<str>>(input: &str, encoding: Encoding, ignore: &[S]) -> String {
    let trimmed = encoding.trim(input);
    patterns(encoding)
        .word
        .replace_all(trimmed, |caps: &Captures<'_>| {
            let word = &caps[0];
            if ignore.iter().any(|ignored| ignored.as_ref() == word) {
                word.to_string()
            } else {
                upper_case_first(word, encoding)
            }
        })
        .into_owned()
}
