//! Table-driven tests for the builtin rules, through the public API only.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tagcheck_validator::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

fn int(expected: i128, actual: i128) -> Comparison {
    Comparison::Integer { expected, actual }
}

// ============================================================================
// NONZERO
// ============================================================================

#[rstest]
#[case::empty_string(Value::from(""), RuleError::EmptyValue)]
#[case::null_pointer(Value::from(None::<String>), RuleError::EmptyValue)]
#[case::empty_vec(Value::from(Vec::<i32>::new()), RuleError::EmptyValue)]
#[case::empty_array(Value::array::<u8, 0>([]), RuleError::EmptyValue)]
#[case::empty_map(Value::from(std::collections::HashMap::<String, i32>::new()), RuleError::EmptyValue)]
#[case::zero_i16(Value::from(0i16), RuleError::ZeroNumber)]
#[case::zero_usize(Value::from(0usize), RuleError::ZeroNumber)]
#[case::zero_f64(Value::from(0.0f64), RuleError::ZeroNumber)]
#[case::false_bool(Value::from(false), RuleError::FalseBool)]
#[case::untyped_nil(Value::Invalid, RuleError::ZeroValue)]
#[case::function(Value::Unsupported("func"), RuleError::Unsupported)]
fn nonzero_rejects_zero_values(#[case] value: Value, #[case] expected: RuleError) {
    init_tracing();
    assert_eq!(nonzero(&value, ""), Err(expected));
}

#[rstest]
#[case::string(Value::from("a"))]
#[case::pointer(Value::from(Some(0i32)))]
#[case::vec(Value::from(vec![String::new()]))]
#[case::negative(Value::from(-1i64))]
#[case::unsigned(Value::from(1u8))]
#[case::float(Value::from(0.5f32))]
#[case::true_bool(Value::from(true))]
#[case::record(Value::Record(Record::new("Empty")))]
fn nonzero_accepts_non_zero_values(#[case] value: Value) {
    assert_eq!(nonzero(&value, ""), Ok(()));
}

// ============================================================================
// LEN / MIN / MAX
// ============================================================================

#[test]
fn len_of_three_element_vec() {
    init_tracing();
    let v = Value::from(vec![1, 2, 3]);
    assert_eq!(len(&v, "3"), Ok(()));
    assert_eq!(
        len(&v, "2"),
        Err(RuleError::Length(Comparison::CollectionLength {
            expected: 2,
            actual: 3
        }))
    );
}

#[test]
fn min_of_integers() {
    assert_eq!(min(&Value::from(5), "10"), Err(RuleError::BelowMin(int(10, 5))));
    assert_eq!(min(&Value::from(15), "10"), Ok(()));
}

#[rstest]
#[case::string_equal(Value::from("abc"), "3")]
#[case::string_multibyte(Value::from("日本語"), "3")]
#[case::map(Value::Map(vec![(Value::from(1), Value::from(2))]), "1")]
#[case::int(Value::from(-7i32), "-7")]
#[case::uint_hex(Value::from(255u8), "0xff")]
#[case::float(Value::from(0.5f64), "0.5")]
fn boundary_equality_satisfies_all_three(#[case] value: Value, #[case] param: &str) {
    assert_eq!(len(&value, param), Ok(()));
    assert_eq!(min(&value, param), Ok(()));
    assert_eq!(max(&value, param), Ok(()));
}

#[rstest]
#[case::string(Value::from("abc"), "4", Comparison::StringLength { expected: 4, actual: 3 })]
#[case::seq(Value::from(vec![true]), "2", Comparison::CollectionLength { expected: 2, actual: 1 })]
#[case::int(Value::from(1i8), "2", int(2, 1))]
#[case::uint(Value::from(1u32), "2", int(2, 1))]
#[case::float(Value::from(1.0f64), "1.5", Comparison::Float { expected: 1.5, actual: 1.0 })]
fn below_parameter(#[case] value: Value, #[case] param: &str, #[case] cmp: Comparison) {
    assert_eq!(len(&value, param), Err(RuleError::Length(cmp)));
    assert_eq!(min(&value, param), Err(RuleError::BelowMin(cmp)));
    assert_eq!(max(&value, param), Ok(()));
}

#[rstest]
#[case::string(Value::from("abc"), "2", Comparison::StringLength { expected: 2, actual: 3 })]
#[case::int(Value::from(3i64), "-2", int(-2, 3))]
#[case::float(Value::from(2.5f32), "2", Comparison::Float { expected: 2.0, actual: 2.5 })]
fn above_parameter(#[case] value: Value, #[case] param: &str, #[case] cmp: Comparison) {
    assert_eq!(len(&value, param), Err(RuleError::Length(cmp)));
    assert_eq!(min(&value, param), Ok(()));
    assert_eq!(max(&value, param), Err(RuleError::AboveMax(cmp)));
}

#[test]
fn unsigned_max_against_zero() {
    let v = Value::from(u64::MAX);
    assert_eq!(min(&v, "0"), Ok(()));
    assert_eq!(max(&v, "0"), Err(RuleError::AboveMax(int(0, i128::from(u64::MAX)))));
}

#[test]
fn code_points_not_bytes() {
    let v = Value::from("é");
    assert_eq!(len(&v, "1"), Ok(()));
    assert!(len(&v, "2").is_err());
    assert_eq!(max(&Value::from("🦀🦀"), "2"), Ok(()));
}

#[rstest]
#[case::non_numeric("abc")]
#[case::empty("")]
#[case::trailing_garbage("10px")]
#[case::float_for_int("1.5e")]
fn malformed_parameters_are_bad(#[case] param: &str) {
    let values = [
        Value::from("abc"),
        Value::from(vec![1]),
        Value::from(1i32),
        Value::from(1u32),
        Value::from(1.0f64),
    ];
    let rules: [(&str, RuleFn); 3] = [("len", len), ("min", min), ("max", max)];
    for value in &values {
        for (name, rule) in rules {
            let err = rule(value, param).unwrap_err();
            assert_eq!(err, RuleError::BadParameter, "{name} {value:?}");
            assert!(err.is_misconfiguration());
        }
    }
}

#[rstest]
#[case::null(Value::null())]
#[case::non_null(Value::pointer(vec![1, 2, 3]))]
fn pointers_pass_len_min_max(#[case] value: Value) {
    for param in ["0", "100", "-1", "garbage"] {
        assert_eq!(len(&value, param), Ok(()));
        assert_eq!(min(&value, param), Ok(()));
        assert_eq!(max(&value, param), Ok(()));
    }
}

#[test]
fn null_pointer_still_fails_nonzero() {
    assert_eq!(nonzero(&Value::null(), ""), Err(RuleError::EmptyValue));
}

// ============================================================================
// REGEXP
// ============================================================================

const EMAIL: &str = "^[^@]+@[^@]+$";

#[test]
fn regexp_scenarios() {
    init_tracing();
    assert_eq!(regexp(&Value::from("hello@example.com"), EMAIL), Ok(()));
    assert_eq!(
        regexp(&Value::from("not-an-email"), EMAIL),
        Err(RuleError::PatternMismatch {
            pattern: EMAIL.to_owned()
        })
    );
    assert_eq!(regexp(&Value::from(42), ".*"), Err(RuleError::Unsupported));
    assert_eq!(regexp(&Value::from("x"), "(unclosed"), Err(RuleError::BadParameter));
}

// ============================================================================
// DISPATCH
// ============================================================================

#[rstest]
#[case("nonzero", Value::from(1), "", true)]
#[case("len", Value::from("ab"), "2", true)]
#[case("min", Value::from(3), "4", false)]
#[case("max", Value::from(vec![1, 2]), "1", false)]
#[case("regexp", Value::from("abc"), "^a", true)]
fn dispatch_by_name(
    #[case] name: &str,
    #[case] value: Value,
    #[case] param: &str,
    #[case] passes: bool,
) {
    let rule = builtin(name).expect("builtin rule");
    assert_eq!(rule(&value, param).is_ok(), passes);
    assert_eq!(rule.check(&value, param).is_ok(), passes);
}

#[test]
fn caller_composes_sequential_rules() {
    let username = Value::from("al");
    let errors: Vec<RuleError> = [("nonzero", ""), ("min", "3"), ("max", "20")]
        .into_iter()
        .filter_map(|(name, param)| builtin(name)?(&username, param).err())
        .collect();
    assert_eq!(
        errors,
        vec![RuleError::BelowMin(Comparison::StringLength {
            expected: 3,
            actual: 2
        })]
    );
}
