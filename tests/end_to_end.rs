use std::fs;
use std::sync::Arc;
use std::thread;

use celplate::evaluator::LookupEvaluator;
use celplate::scanner::Scanner;
use celplate::value::{Bindings, Value};
use chrono::{TimeDelta, TimeZone, Utc};
use pretty_assertions::assert_eq;

fn evaluator() -> LookupEvaluator {
    let json = fs::read_to_string("tests/fixtures/bindings.json").expect("bindings fixture");
    let mut bindings: Bindings = serde_json::from_str(&json).expect("bindings should parse");

    let deployed_at = Utc.with_ymd_and_hms(2022, 4, 10, 1, 1, 1).unwrap() + TimeDelta::nanoseconds(1);
    let context: Value = [
        ("deployed_at", Value::from(deployed_at)),
        ("timeout", Value::from(TimeDelta::seconds(90))),
    ]
    .into_iter()
    .collect();
    bindings.insert("context".to_string(), context);

    LookupEvaluator::new(bindings).expect("bindings should be valid")
}

#[test]
fn yaml_document_is_expanded() {
    let input = fs::read("tests/fixtures/input.yaml").expect("input fixture");
    let output = fs::read_to_string("tests/fixtures/output.yaml").expect("output fixture");

    let out = Scanner::new(evaluator()).transform_bytes(&input).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), output);
}

#[test]
fn every_problem_in_a_document_is_reported() {
    let input = "\
name: ${{ inputs.nope }}
region: ${{ input.region }}
zones: ${{ inputs.zones.9 }}
id: ${{ inputs.id }
";

    let err = Scanner::new(evaluator()).transform(input).unwrap_err();

    assert_eq!(
        err.to_string(),
        "line 1, column 24: failed to evaluate expression: no such key: nope; \
         line 2, column 13: undeclared reference to 'input'; \
         line 3, column 28: failed to evaluate expression: index out of range: 9; \
         line 4, column 20: unexpected character '\\n', expected '}'; \
         line 5, column 1: unexpected end of input"
    );
}

#[test]
fn shared_scanner_transforms_documents_concurrently() {
    let scanner = Arc::new(Scanner::new(evaluator()));

    thread::scope(|s| {
        for i in 0..4 {
            let scanner = Arc::clone(&scanner);
            s.spawn(move || {
                let input = format!("{i}: ${{{{ inputs.region }}}}");
                assert_eq!(scanner.transform(&input).unwrap(), format!("{i}: us-east-1"));
            });
        }
    });
}
