//! Domain tests for tool schema construction and argument validation.

use crate::tool::domain::{
    ParameterKind, ToolDomainError, ToolParameter, ToolSchema, ToolValidationError,
};
use rstest::{fixture, rstest};
use serde_json::{Map, Value, json};

#[fixture]
fn multiplier() -> ToolSchema {
    ToolSchema::new("multiplier_tool", "Calculate the product of two numbers")
        .expect("valid schema")
        .with_parameter(ToolParameter::required("a", ParameterKind::Integer))
        .with_parameter(ToolParameter::required("b", ParameterKind::Integer))
}

fn args(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[rstest]
fn schema_rejects_empty_name() {
    assert_eq!(
        ToolSchema::new("   ", "purpose").unwrap_err(),
        ToolDomainError::EmptyToolName
    );
}

#[rstest]
fn schema_rejects_empty_purpose() {
    assert_eq!(
        ToolSchema::new("tool", "  ").unwrap_err(),
        ToolDomainError::EmptyToolPurpose
    );
}

#[rstest]
fn schema_trims_name_and_purpose() {
    let schema = ToolSchema::new("  echo  ", " Echo back ").expect("valid schema");
    assert_eq!(schema.name(), "echo");
    assert_eq!(schema.purpose(), "Echo back");
}

#[rstest]
fn validate_accepts_well_typed_arguments(multiplier: ToolSchema) {
    assert!(multiplier.validate(&args(json!({"a": 5, "b": 7}))).is_ok());
}

#[rstest]
fn validate_reports_missing_required_parameter(multiplier: ToolSchema) {
    let error = multiplier
        .validate(&args(json!({"a": 5})))
        .unwrap_err();
    assert_eq!(
        error,
        ToolValidationError::MissingParameter { name: "b".into() }
    );
}

#[rstest]
fn validate_reports_type_mismatch_for_non_integer(multiplier: ToolSchema) {
    let error = multiplier
        .validate(&args(json!({"a": 5, "b": "seven"})))
        .unwrap_err();
    assert_eq!(
        error,
        ToolValidationError::WrongParameterType {
            name: "b".into(),
            expected: "integer".into(),
            actual: "string".into(),
        }
    );
}

#[rstest]
fn validate_rejects_fractional_value_for_integer_parameter(multiplier: ToolSchema) {
    let error = multiplier
        .validate(&args(json!({"a": 5, "b": 7.5})))
        .unwrap_err();
    assert!(matches!(
        error,
        ToolValidationError::WrongParameterType { name, .. } if name == "b"
    ));
}

#[rstest]
fn validate_rejects_undeclared_argument(multiplier: ToolSchema) {
    let error = multiplier
        .validate(&args(json!({"a": 5, "b": 7, "c": 9})))
        .unwrap_err();
    assert_eq!(
        error,
        ToolValidationError::UnknownParameter { name: "c".into() }
    );
}

#[rstest]
fn optional_parameter_may_be_absent() {
    let schema = ToolSchema::new("greeter", "Greet someone")
        .expect("valid schema")
        .with_parameter(ToolParameter::optional("name", ParameterKind::String));
    assert!(schema.validate(&Map::new()).is_ok());
}

#[rstest]
#[case(ParameterKind::String, json!("x"), true)]
#[case(ParameterKind::String, json!(1), false)]
#[case(ParameterKind::Integer, json!(3), true)]
#[case(ParameterKind::Integer, json!(3.5), false)]
#[case(ParameterKind::Number, json!(3.5), true)]
#[case(ParameterKind::Number, json!(true), false)]
#[case(ParameterKind::Boolean, json!(false), true)]
#[case(ParameterKind::Boolean, json!("false"), false)]
fn parameter_kind_matching(
    #[case] kind: ParameterKind,
    #[case] value: Value,
    #[case] matches: bool,
) {
    assert_eq!(kind.matches(&value), matches);
}
