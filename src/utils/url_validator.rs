//! URL normalization, syntactic validation and redirect target rendering.
//!
//! All functions are pure and total: they never fail or panic, whatever the
//! input looks like.

use url::Url;

/// Schemes a candidate URL may already carry.
const KNOWN_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Scheme prepended to inputs that carry no recognised scheme.
const DEFAULT_PREFIX: &str = "https://";

/// Ensures the URL carries an `http://` or `https://` prefix.
///
/// The check is case-sensitive and nothing else about the input changes:
/// no trimming, no lowercasing, no percent-encoding.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("example.com"), "https://example.com");
/// assert_eq!(normalize_url("http://example.com"), "http://example.com");
/// ```
pub fn normalize_url(raw: &str) -> String {
    if KNOWN_PREFIXES.iter().any(|prefix| raw.starts_with(prefix)) {
        raw.to_string()
    } else {
        format!("{DEFAULT_PREFIX}{raw}")
    }
}

/// Returns `true` if `candidate` looks like a usable absolute web URL.
///
/// # Rules
///
/// - Scheme is `http` or `https` (case-insensitive)
/// - Authority is present and non-empty
/// - Authority contains at least one `.`
/// - Authority does not start or end with `.`
/// - Authority contains no `..`
///
/// Tabs and line breaks anywhere in the input are ignored, as are leading
/// spaces and control characters. Ports and host characters are not checked.
///
/// This is a sanity check, not DNS or reachability validation.
pub fn is_valid_url(candidate: &str) -> bool {
    let cleaned: String = candidate
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();

    let Some((scheme, authority)) = split_scheme_and_authority(&cleaned) else {
        return false;
    };

    if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
        return false;
    }

    if authority.is_empty()
        || !authority.contains('.')
        || authority.starts_with('.')
        || authority.ends_with('.')
        || authority.contains("..")
    {
        return false;
    }

    true
}

/// Renders a stored URL as a `Location` header value.
///
/// URLs free of control characters are returned unchanged. Otherwise the URL
/// is re-serialized by `url::Url`, which drops tabs and line breaks and
/// percent-encodes the rest; if it does not parse, control characters are
/// removed. The result never contains control characters.
pub fn redirect_location(stored: &str) -> String {
    if !stored.chars().any(char::is_control) {
        return stored.to_string();
    }

    match Url::parse(stored) {
        Ok(url) if !url.as_str().chars().any(char::is_control) => url.into(),
        _ => stored.chars().filter(|c| !c.is_control()).collect(),
    }
}

/// Splits `scheme://authority/...` into its scheme and authority parts.
///
/// Returns `None` when there is no syntactically valid scheme, no `//`
/// authority marker, or the authority has unbalanced IPv6 brackets. The
/// authority runs up to the first `/`, `?` or `#`.
fn split_scheme_and_authority(candidate: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = candidate.split_once(':')?;

    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic()
        || !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        return None;
    }

    let rest = rest.strip_prefix("//")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];

    if authority.contains('[') != authority.contains(']') {
        return None;
    }

    Some((scheme, authority))
}
