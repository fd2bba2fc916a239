//! # symbex
//!
//! symbex evaluates arithmetic expressions over named integer symbols.
//! Expressions may use scalar variables, one-dimensional arrays indexed by
//! arbitrary sub-expressions, parentheses and the operators `+ - * /`.
//! Values are bound from a simple line-oriented record format.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent an expression as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines node types for literals, variables, array accesses, binary
///   operations and groups.
/// - Attaches source positions to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing, binding and evaluation.
///
/// This module defines all errors that can be raised while lexing or parsing
/// an expression, loading symbol values, or evaluating. Each error carries the
/// position or line where it happened.
///
/// # Responsibilities
/// - Defines error enums for every failure mode.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates discovery, binding and evaluation.
///
/// This module ties together the lexer, parser, symbol table, value binding
/// and evaluator, and exposes the `Expression` engine.
pub mod interpreter;
/// General utilities for numeric conversion.
///
/// # Responsibilities
/// - Promote stored integers to floating point.
/// - Truncate evaluated indices and check them against array bounds.
pub mod util;

pub use interpreter::expression::Expression;

/// Evaluates an expression against a block of value records.
///
/// This runs all three phases on a fresh [`Expression`]: symbol discovery,
/// value binding from `values` (one record per line), and evaluation.
///
/// # Errors
/// Returns an error if a value record is malformed, or if parsing or
/// evaluation fails.
///
/// # Examples
/// ```
/// use symbex::get_result;
///
/// let result = get_result("a + b * 2", "a 3\nb 4").unwrap();
/// assert_eq!(result, 11.0);
///
/// // Indices are truncated: 6 / 4 = 1.5 reads element 1.
/// let result = get_result("arr[6 / 4]", "arr 3 (1,8)").unwrap();
/// assert_eq!(result, 8.0);
///
/// // Unbalanced parentheses are rejected.
/// assert!(get_result("(a + b", "").is_err());
/// ```
pub fn get_result(expression: &str, values: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let mut expression = Expression::new(expression);
    expression.build_symbols();
    expression.load_symbol_values(values.as_bytes())?;

    Ok(expression.evaluate()?)
}
