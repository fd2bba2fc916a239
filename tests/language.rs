use std::fs;

use symbex::{
    Expression,
    error::{EvalError, ParseError, RuntimeError},
    get_result,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, block) in extract_blocks(&content).into_iter().enumerate() {
            count += 1;
            match get_result(&block.expression, &block.values) {
                Ok(value) => assert!(same_value(value, block.expected),
                                     "Example {} in {:?} evaluated {} to {value}, expected {}",
                                     i + 1,
                                     path,
                                     block.expression,
                                     block.expected),
                Err(e) => panic!("Example {} in {:?} failed:\n{}\nError: {:?}",
                                 i + 1,
                                 path,
                                 block.expression,
                                 e),
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

struct Block {
    expression: String,
    values:     String,
    expected:   f64,
}

/// Collects ```` ```symbex ```` blocks: the first line is the expression, a
/// `=> <number>` line is the expected result, all other lines are value
/// records.
fn extract_blocks(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut lines: Vec<&str> = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```symbex") {
            inside = true;
            lines.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(to_block(&lines));
            continue;
        }
        if inside {
            lines.push(line);
        }
    }

    blocks
}

fn to_block(lines: &[&str]) -> Block {
    let (expression, rest) = lines.split_first().expect("empty example block");
    let mut values = String::new();
    let mut expected = None;

    for line in rest {
        if let Some(result) = line.trim().strip_prefix("=>") {
            expected = Some(result.trim().parse().expect("expected result is not a number"));
        } else {
            values.push_str(line);
            values.push('\n');
        }
    }

    Block { expression: (*expression).to_string(),
            values,
            expected: expected.expect("example block has no '=>' line") }
}

fn same_value(actual: f64, expected: f64) -> bool {
    if expected.is_nan() {
        actual.is_nan()
    } else {
        actual == expected || (actual - expected).abs() < 1e-9
    }
}

fn assert_result(expression: &str, values: &str, expected: f64) {
    match get_result(expression, values) {
        Ok(value) => assert!(same_value(value, expected),
                             "'{expression}' evaluated to {value}, expected {expected}"),
        Err(e) => panic!("'{expression}' failed: {e}"),
    }
}

fn assert_failure(expression: &str, values: &str) {
    if let Ok(value) = get_result(expression, values) {
        panic!("'{expression}' evaluated to {value} but was expected to fail")
    }
}

fn eval_error(expression: &str, values: &str) -> EvalError {
    let mut expr = Expression::new(expression);
    expr.build_symbols();
    expr.load_symbol_values(values.as_bytes())
        .expect("values should bind");
    expr.evaluate()
        .expect_err("evaluation should fail")
}

#[test]
fn documented_examples() {
    assert_result("a+b*2", "a 3\nb 4", 11.0);
    assert_result("(a+b)*2", "a 3\nb 4", 14.0);
    assert_result("arr[2]+1", "arr 5 (2,10)", 11.0);
    assert_result("arr[a]", "a 3\narr 5 (3,7)", 7.0);
    assert_result("10/4", "", 2.5);
    assert_result("y+1", "x", 1.0);
}

#[test]
fn constant_arithmetic_and_precedence() {
    assert_result("2+3*4", "", 14.0);
    assert_result("2*3+4*5", "", 26.0);
    assert_result("10-4-3", "", 3.0);
    assert_result("8/4/2", "", 1.0);
    assert_result("100/8*2", "", 25.0);
    assert_result("1-2", "", -1.0);
    assert_result("7", "", 7.0);
}

#[test]
fn whitespace_is_insignificant() {
    assert_result("  a +\tb * 2 ", "a 3\nb 4", 11.0);
    assert_result("1 2+3", "", 15.0);
    assert_result("a b+1", "ab 4", 5.0);
}

#[test]
fn groups_truncate_toward_zero() {
    assert_result("(10/4)", "", 2.0);
    assert_result("(7/2)*2", "", 6.0);
    assert_result("((1+2)*(3+4))", "", 21.0);
    assert_result("(1-8)/2", "", -3.5);
    assert_result("(1-(15/2))", "", -6.0);
    assert_result("10/(3)", "", 10.0 / 3.0);
}

#[test]
fn indices_truncate_toward_zero() {
    assert_result("arr[6/4]", "arr 5 (1,42)", 42.0);
    assert_result("arr[(5/2)*2]", "arr 5 (4,9)", 9.0);
    assert_result("arr[1/3]", "arr 2 (0,5) (1,6)", 5.0);
}

#[test]
fn nested_indices_and_groups() {
    assert_result("a[b[1]+1]", "a 3 (2,9)\nb 2 (1,1)", 9.0);
    assert_result("arr[(a+1)*2]", "a 1\narr 5 (4,3)", 3.0);
    assert_result("(arr[a]+a)*arr[arr[0]]", "a 1\narr 4 (0,3) (1,5) (3,2)", 12.0);
}

#[test]
fn negative_values() {
    assert_result("a-b", "a -3\nb -5", 2.0);
    assert_result("arr[0]*2", "arr 1 (0,-4)", -8.0);
}

#[test]
fn unbound_symbols_read_as_zero() {
    assert_result("x+1", "", 1.0);
    assert_result("x*y+3", "z 9", 3.0);
}

#[test]
fn division_by_zero_follows_floating_point() {
    assert!(get_result("1/0", "").unwrap().is_infinite());
    assert!(get_result("0-1/0", "").unwrap() < 0.0);
    assert!(get_result("0/0", "").unwrap().is_nan());
    assert!(get_result("(1/0)+1", "").unwrap().is_infinite());
}

#[test]
fn evaluation_is_repeatable() {
    let mut expr = Expression::new("arr[a]*b/3");
    expr.build_symbols();
    expr.load_symbol_values("a 1\nb 2\narr 2 (1,5)".as_bytes())
        .unwrap();

    let first = expr.evaluate().unwrap();
    let second = expr.evaluate().unwrap();
    assert_eq!(first, second);
    assert!((first - 10.0 / 3.0).abs() < 1e-12);
}

#[test]
fn evaluation_before_binding_uses_defaults() {
    let mut expr = Expression::new("a*3+4");
    expr.build_symbols();
    assert_eq!(expr.evaluate().unwrap(), 4.0);
}

#[test]
fn malformed_expressions_are_errors() {
    assert_failure("(a+b", "");
    assert_failure("a+b)", "");
    assert_failure("arr[1", "arr 3");
    assert_failure("arr[1)", "arr 3");
    assert_failure("a+", "");
    assert_failure("+a", "");
    assert_failure("-3+1", "");
    assert_failure("a**b", "");
    assert_failure("()", "");
    assert_failure("", "");
    assert_failure("   ", "");
}

#[test]
fn parse_errors_carry_positions() {
    assert_eq!(eval_error("(a+b", ""),
               EvalError::Parse(ParseError::ExpectedClosingParen { position: 0 }));
    assert_eq!(eval_error("a+arr[1", "arr 3"),
               EvalError::Parse(ParseError::ExpectedClosingBracket { position: 5 }));
    assert_eq!(eval_error("a+b)", ""),
               EvalError::Parse(ParseError::UnexpectedTrailingTokens { token:    ")".to_string(),
                                                                       position: 3, }));
    assert_eq!(eval_error("a*/b", ""),
               EvalError::Parse(ParseError::UnexpectedToken { token:    "/".to_string(),
                                                              position: 2, }));
    assert_eq!(eval_error("a+", ""),
               EvalError::Parse(ParseError::UnexpectedEndOfInput));
    assert_eq!(eval_error("", ""), EvalError::Parse(ParseError::EmptyExpression));
    assert_eq!(eval_error("1+99999999999999999999", ""),
               EvalError::Parse(ParseError::LiteralTooLarge { position: 2 }));
}

fn nested_groups(depth: usize) -> String {
    format!("{}1{}", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn nesting_is_limited() {
    assert_result(&nested_groups(256), "", 1.0);
    assert_eq!(eval_error(&nested_groups(257), ""),
               EvalError::Parse(ParseError::NestingTooDeep { position: 256 }));
    assert_eq!(eval_error(&nested_groups(6000), ""),
               EvalError::Parse(ParseError::NestingTooDeep { position: 256 }));

    let indices = format!("{}0{}", "a[".repeat(300), "]".repeat(300));
    assert!(matches!(eval_error(&indices, "a 1 (0,0)"),
                     EvalError::Parse(ParseError::NestingTooDeep { .. })));
}

#[test]
fn long_operator_chains_are_limited() {
    assert_result(&vec!["1"; 1000].join("+"), "", 1000.0);
    assert!(matches!(eval_error(&vec!["1"; 5000].join("+"), ""),
                     EvalError::Parse(ParseError::NestingTooDeep { .. })));
}

#[test]
fn out_of_bounds_access_is_error() {
    assert_failure("arr[5]", "arr 5");
    assert_failure("arr[0-1]", "arr 5");
    assert_failure("arr[0]", "");
    assert_failure("arr[1/0]", "arr 5");

    assert_eq!(eval_error("1+arr[2*3]", "arr 5"),
               EvalError::Runtime(RuntimeError::IndexOutOfBounds { name:     "arr".to_string(),
                                                                   length:   5,
                                                                   found:    6.0,
                                                                   position: 2, }));
}

#[test]
fn evaluating_without_discovery_is_error() {
    let expr = Expression::new("a+1");
    assert_eq!(expr.evaluate().unwrap_err(),
               EvalError::Runtime(RuntimeError::UnknownVariable { name:     "a".to_string(),
                                                                  position: 0, }));

    let expr = Expression::new("arr[0]");
    assert!(matches!(expr.evaluate(),
                     Err(EvalError::Runtime(RuntimeError::UnknownArray { .. }))));
}

#[test]
fn malformed_values_are_errors() {
    assert_failure("a", "a x");
    assert_failure("a", "a 1 2");
    assert_failure("a", "a");
    assert_failure("arr[0]", "arr 3 (3,1)");
    assert_failure("arr[0]", "arr 3 (-1,1)");
    assert_failure("arr[0]", "arr -1");
    assert_failure("arr[0]", "arr 3 (1 2)");
    assert_failure("arr[0]", "arr 3 (1,2");
    assert_failure("arr[0]", "arr three");
}

#[test]
fn example_files_work() {
    let expression = fs::read_to_string("tests/example.expr").expect("missing expression file");
    let values = fs::read_to_string("tests/example.values").expect("missing values file");

    assert_result(&expression, &values, 47.0);
}
