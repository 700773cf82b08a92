use std::fs::{self};

use rpncalc::{
    error::{EvaluationError, SyntaxError, TypeError},
    evaluate_expression,
    interpreter::value::core::Value,
    operator::Operator,
};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (expression, expected)) in extract_cases(&content).into_iter().enumerate() {
            count += 1;
            let outcome = match evaluate_expression(&expression) {
                Ok(value) => value.to_string(),
                Err(EvaluationError::Syntax(_)) => "SyntaxError".to_string(),
                Err(EvaluationError::Type(_)) => "TypeError".to_string(),
            };
            assert_eq!(outcome,
                       expected,
                       "Case {} in {:?} failed: {}",
                       i + 1,
                       path,
                       expression);
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn extract_cases(content: &str) -> Vec<(String, String)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .filter_map(|line| line.rsplit_once("=>"))
           .map(|(expression, expected)| {
               (expression.trim().to_string(), expected.trim().to_string())
           })
           .collect()
}

fn assert_value(src: &str, expected: Value) {
    match evaluate_expression(src) {
        Ok(value) => assert_eq!(value, expected, "Expression {src:?} gave the wrong value"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_syntax_error(src: &str) {
    match evaluate_expression(src) {
        Err(EvaluationError::Syntax(_)) => {},
        other => panic!("Expression {src:?} should be a syntax error, got {other:?}"),
    }
}

fn assert_type_error(src: &str) {
    match evaluate_expression(src) {
        Err(EvaluationError::Type(_)) => {},
        other => panic!("Expression {src:?} should be a type error, got {other:?}"),
    }
}

#[test]
fn standard_precedence() {
    assert_value("2 + 3 * 4", Value::Number(14.0));
    assert_value("(2 + 3) * 4", Value::Number(20.0));
    assert_value("10 - 2 * 3 ^ 2", Value::Number(-8.0));
    assert_value("7 % 4 * 2", Value::Number(6.0));
}

#[test]
fn equal_precedence_groups_left() {
    assert_value("2 ^ 3 ^ 2", Value::Number(64.0));
    assert_value("100 / 10 / 5", Value::Number(2.0));
}

#[test]
fn unary_minus_is_a_multiplication() {
    assert_value("-2 ^ 2", Value::Number(-4.0));
    assert_value("-2 + 5", Value::Number(3.0));
    assert_value("3 * -(2 + 1)", Value::Number(-9.0));
}

#[test]
fn boolean_logic() {
    assert_value("true and false or true", Value::Boolean(true));
    assert_value("!true", Value::Boolean(false));
    assert_value("!!false", Value::Boolean(false));
    assert_value("!!!false", Value::Boolean(true));
}

#[test]
fn comparisons() {
    assert_value("1 == 1", Value::Boolean(true));
    assert_value("1.5 > 1", Value::Boolean(true));
    assert_value("2 + 2 != 4", Value::Boolean(false));
    assert_value("true == true", Value::Boolean(true));
}

#[test]
fn comparisons_require_same_type() {
    assert_type_error("1 == true");
    assert_type_error("false < 0");
    assert_eq!(evaluate_expression("1 == true"),
               Err(EvaluationError::Type(TypeError::Comparison { operator: Operator::Equal,
                                                                 left:     "NUMBER",
                                                                 right:    "BOOLEAN", })));
}

#[test]
fn operators_check_operand_types() {
    assert_type_error("true + 1");
    assert_type_error("!0");
    assert_type_error("1 or false");
}

#[test]
fn mismatched_parentheses_are_syntax_errors() {
    assert_syntax_error("(1 + 2");
    assert_syntax_error("1 + 2)");
    assert_eq!(evaluate_expression("((1)"),
               Err(EvaluationError::Syntax(SyntaxError::MismatchedParentheses)));
}

#[test]
fn unknown_tokens_are_syntax_errors() {
    assert_syntax_error("1 & 2");
    assert_syntax_error("foo + 1");
    assert_eq!(evaluate_expression("foo + 1"),
               Err(EvaluationError::Syntax(SyntaxError::UnknownKeyword { keyword:  "foo".to_string(),
                                                                         position: 0, })));
}

#[test]
fn malformed_numbers_are_syntax_errors() {
    assert_syntax_error("1.2.3");
    assert_syntax_error("3..");
}

#[test]
fn empty_expression_is_syntax_error() {
    assert_eq!(evaluate_expression(""),
               Err(EvaluationError::Syntax(SyntaxError::EmptyExpression)));
    assert_syntax_error("   ");
}

#[test]
fn malformed_sequences_are_syntax_errors() {
    assert_syntax_error("1 +");
    assert_syntax_error("* 2");
    assert_syntax_error("1 2");
    assert_syntax_error("(1) (2)");
}

#[test]
fn error_messages_name_the_culprit() {
    let message = |src: &str| evaluate_expression(src).unwrap_err().to_string();

    assert!(message("1 # 2").contains("'#'"));
    assert!(message("1 + bar").contains("'bar'"));
    assert!(message("1 + true").contains("NUMBER and BOOLEAN"));
    assert!(message("1 + true").contains("'+'"));
}

#[test]
fn evaluation_is_repeatable() {
    for src in ["2 + 3 * 4", "!true or 1 < 2", "1 == true", "(1"] {
        assert_eq!(evaluate_expression(src), evaluate_expression(src));
    }
}

#[test]
fn errors_leave_no_state_behind() {
    assert_type_error("1 + true");
    assert_value("1 + 1", Value::Number(2.0));
    assert_syntax_error("(");
    assert_value("(1)", Value::Number(1.0));
}
