//! Locale probing for the process-wide default encoding.
//!
//! POSIX locale strings have the shape `language[_territory][.codeset][@modifier]`.
//! Only the codeset matters here.

/// Locale variables consulted in priority order, as the C library does for `LC_CTYPE`.
pub const LOCALE_ENV_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

/// Codeset reported by the C library for the `C` and `POSIX` locales.
const POSIX_CODESET: &str = "ANSI_X3.4-1968";

/// Return the first non-empty locale value reported by `lookup`.
pub fn locale_with<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_ENV_VARS
        .iter()
        .filter_map(|&key| lookup(key))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Extract the codeset from a locale string.
///
/// `en_US.UTF-8@euro` yields `UTF-8`; `C` and `POSIX` yield the ASCII codeset
/// name; a locale without a codeset yields `None`.
pub fn codeset_from_locale(locale: &str) -> Option<&str> {
    let locale = locale.trim();
    if locale == "C" || locale == "POSIX" {
        return Some(POSIX_CODESET);
    }

    let without_modifier = locale.split('@').next().unwrap_or(locale);
    without_modifier
        .split_once('.')
        .map(|(_, codeset)| codeset)
        .filter(|codeset| !codeset.is_empty())
}
