//! Integration tests for ds-redact.
//!
//! These tests pin the redaction contract:
//! - Masked values never appear in output
//! - Non-matching content is preserved byte-for-byte
//! - Redaction is idempotent
//! - Shortest-match keeps a value from swallowing later segments

use ds_redact::{redact_fields, FieldSet, RedactionConfig, Redactor, DEFAULT_PII_FIELDS};

/// Values that must never survive redaction of their field.
const PII_VALUES: &[(&str, &str)] = &[
    ("email", "alice@example.com"),
    ("name", "Alice Liddell"),
    ("password", "hunter2"),
    ("phone", "555-1234"),
    ("ssn", "123-45-6789"),
];

fn pii_redactor() -> Redactor {
    Redactor::new(RedactionConfig::default()).unwrap()
}

#[test]
fn example_row_masks_only_listed_fields() {
    let fields = FieldSet::new(["email", "phone"]).unwrap();
    let redactor = Redactor::new(RedactionConfig::new(fields, "***", ';')).unwrap();

    let out = redactor.redact("name=Alice;email=alice@example.com;phone=555-1234;");
    assert_eq!(out, "name=Alice;email=***;phone=***;");
}

#[test]
fn default_fields_never_leak() {
    let redactor = pii_redactor();
    let row: String = PII_VALUES
        .iter()
        .map(|(field, value)| format!("{}={}; ", field, value))
        .collect();

    let out = redactor.redact(&row);
    for (field, value) in PII_VALUES {
        assert!(
            !out.contains(value),
            "value of '{}' leaked in output: {}",
            field,
            out
        );
    }
}

#[test]
fn default_field_list_matches_deployment_rules() {
    for field in DEFAULT_PII_FIELDS {
        let redactor = pii_redactor();
        let msg = format!("{}=sensitive;", field);
        assert_eq!(redactor.redact(&msg), format!("{}=***;", field));
    }
}

#[test]
fn non_matching_segments_preserved_exactly() {
    let redactor = pii_redactor();
    let out = redactor.redact("uid=42;email=alice@example.com;last_login=2026-08-06;");
    assert_eq!(out, "uid=42;email=***;last_login=2026-08-06;");
}

#[test]
fn no_match_is_pass_through() {
    let redactor = pii_redactor();
    let msg = "uid=42;status=active;";
    assert_eq!(redactor.redact(msg), msg);
}

#[test]
fn shortest_match_keeps_following_segments() {
    let redactor = pii_redactor();
    let out = redactor.redact("password=a;b;name=Bob;");
    assert_eq!(out, "password=***;b;name=***;");
}

#[test]
fn redaction_is_idempotent() {
    let redactor = pii_redactor();
    let msg = "name=Alice; email=alice@example.com; phone=555-1234;";
    let once = redactor.redact(msg).into_owned();
    let twice = redactor.redact(&once);
    assert_eq!(twice, once);
}

#[test]
fn whole_rendered_line_is_covered() {
    // PII leaking through any rendered component is still caught as long
    // as it keeps the field=value; shape.
    let redactor = pii_redactor();
    let line = "[DATASHIELD] user_data INFO 2026-08-06T10:00:00+00:00: name=Alice; email=alice@example.com;";
    let out = redactor.redact(line);
    assert_eq!(
        out,
        "[DATASHIELD] user_data INFO 2026-08-06T10:00:00+00:00: name=***; email=***;"
    );
}

#[test]
fn pure_function_agrees_with_engine() {
    let msg = "name=Alice;email=alice@example.com;uid=7;";
    let fields: Vec<&str> = DEFAULT_PII_FIELDS.to_vec();

    let from_fn = redact_fields(&fields, "***", msg, ';');
    let from_engine = pii_redactor().redact(msg);
    assert_eq!(from_fn, from_engine);
}
