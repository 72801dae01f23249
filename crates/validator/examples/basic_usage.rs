//! Basic usage example for tagcheck-validator
//!
//! Walks a record's fields and applies `name=param` rules the way a caller
//! reading struct annotations would.

use tagcheck_validator::prelude::*;

/// Splits `"min=3,max=20"` into `(name, param)` pairs.
fn parse_rules(tag: &str) -> Vec<(&str, &str)> {
    tag.split(',')
        .filter(|part| !part.is_empty())
        .map(|part| part.split_once('=').unwrap_or((part, "")))
        .collect()
}

fn validate(record: &Record, tags: &[(&str, &str)]) -> Vec<(String, RuleError)> {
    let mut failures = Vec::new();
    for (field, tag) in tags {
        let value = record.field(field).cloned().unwrap_or_default();
        for (name, param) in parse_rules(tag) {
            let Some(rule) = builtin(name) else {
                println!("  ? unknown rule `{name}` on {field}");
                continue;
            };
            if let Err(err) = rule(&value, param) {
                failures.push(((*field).to_owned(), err));
            }
        }
    }
    failures
}

fn main() {
    let tags = [
        ("name", "nonzero,max=16"),
        ("age", "min=18,max=130"),
        ("email", r"regexp=^[^@\s]+@[^@\s]+$"),
        ("roles", "min=1"),
    ];

    let good = Record::new("User")
        .with_field("name", "alice")
        .with_field("age", 30u8)
        .with_field("email", "alice@example.com")
        .with_field("roles", vec!["admin"]);

    let bad = Record::new("User")
        .with_field("name", "")
        .with_field("age", 7i32)
        .with_field("email", "not-an-email")
        .with_field("roles", Vec::<String>::new());

    for record in [&good, &bad] {
        let failures = validate(record, &tags);
        if failures.is_empty() {
            println!("✓ record is valid");
            continue;
        }
        println!("✗ record has {} problem(s):", failures.len());
        for (field, err) in failures {
            println!("  {field}: [{}] {err}", err.code());
        }
    }
}
