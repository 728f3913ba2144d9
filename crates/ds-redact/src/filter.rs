//! Field-value substitution over semi-structured messages.
//!
//! A message is zero or more `name=value` segments, each terminated by a
//! separator character. Masking replaces the shortest run between
//! `name=` and the next separator, so a matched value can never swallow
//! the segments after it. A value that legitimately contains the
//! separator is masked only up to its first occurrence; callers that
//! need such values kept whole must pre-escape them.

use std::borrow::Cow;

use regex::{Captures, Regex};

/// Compile the segment pattern for a set of field names.
///
/// The name must sit at a word boundary, so `name` does not match inside
/// `nickname` or `user_name`. Field names and the separator are escaped
/// before they reach the pattern.
pub(crate) fn segment_pattern<S: AsRef<str>>(
    fields: &[S],
    separator: char,
) -> Result<Regex, regex::Error> {
    let names = fields
        .iter()
        .map(|f| regex::escape(f.as_ref()))
        .collect::<Vec<_>>()
        .join("|");
    let sep = regex::escape(&separator.to_string());
    Regex::new(&format!(r"\b(?P<name>{names})=[^{sep}]*{sep}"))
}

/// Replace every matched segment value with the token.
///
/// The token is inserted verbatim; `$` has no replacement meaning here.
pub(crate) fn substitute<'a>(
    pattern: &Regex,
    token: &str,
    separator: char,
    message: &'a str,
) -> Cow<'a, str> {
    pattern.replace_all(message, |caps: &Captures<'_>| {
        format!("{}={}{}", &caps["name"], token, separator)
    })
}

/// Mask the values of `fields` in `message`.
///
/// Pure function of its four inputs. Messages with no matching segment
/// pass through unchanged, and re-running over already-masked output is
/// a no-op.
pub fn redact_fields<S: AsRef<str>>(
    fields: &[S],
    token: &str,
    message: &str,
    separator: char,
) -> String {
    if fields.is_empty() {
        return message.to_string();
    }
    let pattern =
        segment_pattern(fields, separator).expect("escaped field pattern always compiles");
    substitute(&pattern, token, separator, message).into_owned()
}
