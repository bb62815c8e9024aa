use celplate::EvalError;
use celplate::evaluator::{Operation, Operations};
use celplate::value::Value;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

fn call(name: &str, receiver: impl Into<Value>, args: &[&str]) -> Result<Value, EvalError> {
    let args: Vec<Value> = args.iter().map(|a| Value::from(*a)).collect();
    Operations::standard().call(name, &receiver.into(), &args)
}

#[test]
fn standard_registry_lists_builtins_in_order() {
    let ops = Operations::standard();
    let names: Vec<_> = ops.names().collect();
    assert_eq!(
        names,
        ["join", "format", "split", "replace", "lowerAscii", "upperAscii", "trim"]
    );
    assert!(ops.contains("join"));
    assert!(!ops.contains("size"));
}

#[test]
fn join_renders_each_element() {
    let list = Value::List(vec![Value::from(1), Value::from("two"), Value::from(vec![3, 4])]);
    assert_eq!(call("join", list, &[", "]).unwrap(), Value::from("1, two, [3 4]"));
}

#[test]
fn join_rejects_non_list_receiver() {
    let err = call("join", "abc", &[","]).unwrap_err();
    assert_eq!(err.to_string(), "join: unsupported receiver of type string");
}

#[test]
fn join_checks_argument_count() {
    let err = call("join", vec![1], &[]).unwrap_err();
    assert_eq!(err.to_string(), "join: expected 1 argument(s), got 0");
}

#[test]
fn format_renders_timestamp_with_pattern() {
    let ts = Utc.with_ymd_and_hms(2022, 4, 10, 1, 1, 1).unwrap();
    assert_eq!(
        call("format", ts, &["%Y-%m-%d %H:%M"]).unwrap(),
        Value::from("2022-04-10 01:01")
    );
}

#[test]
fn format_reports_invalid_pattern() {
    let ts = Utc.with_ymd_and_hms(2022, 4, 10, 1, 1, 1).unwrap();
    let err = call("format", ts, &["%Q"]).unwrap_err();
    assert!(matches!(err, EvalError::Operation { ref name, .. } if name == "format"));
}

#[test]
fn string_helpers() {
    assert_eq!(
        call("split", "a,b,c", &[","]).unwrap(),
        Value::from(vec!["a", "b", "c"])
    );
    assert_eq!(call("replace", "a-b-c", &["-", "+"]).unwrap(), Value::from("a+b+c"));
    assert_eq!(call("lowerAscii", "MiXeD", &[]).unwrap(), Value::from("mixed"));
    assert_eq!(call("upperAscii", "MiXeD", &[]).unwrap(), Value::from("MIXED"));
    assert_eq!(call("trim", "  x  ", &[]).unwrap(), Value::from("x"));
}

#[test]
fn unknown_operation_is_an_error() {
    let err = call("size", "abc", &[]).unwrap_err();
    assert_eq!(err.to_string(), "unknown operation 'size'");
}

fn shout(receiver: &Value, _args: &[Value]) -> Result<Value, EvalError> {
    Ok(Value::String(format!("{}!", receiver.as_str().unwrap_or_default())))
}

#[test]
fn custom_operations_are_registered_at_construction() {
    let ops = Operations::standard().with("shout", shout as Operation);
    assert_eq!(
        ops.call("shout", &Value::from("hey"), &[]).unwrap(),
        Value::from("hey!")
    );

    let only = Operations::new([("shout", shout as Operation)]);
    assert!(only.get("join").is_none());
    assert!(only.get("shout").is_some());
}
