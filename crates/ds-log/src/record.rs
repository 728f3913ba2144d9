//! Rendering row data into log messages.

use std::fmt::Write;

/// Join `(field, value)` pairs into `field=value<sep> ` segments.
///
/// This is the shape the redactor matches on: every segment is
/// terminated by the separator. Values must not themselves contain the
/// separator (see `ds_redact::redact_fields` for what happens then).
pub fn render_row<'a, I>(pairs: I, separator: char) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut message = String::new();
    for (name, value) in pairs {
        let _ = write!(message, "{}={}{} ", name, value, separator);
    }
    if message.ends_with(' ') {
        message.pop();
    }
    message
}
