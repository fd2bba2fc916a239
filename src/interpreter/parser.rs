/// Core parsing entry points.
///
/// Provides the top-level `parse` function that turns a full token sequence
/// into one expression tree, and `parse_expression`, the recursive entry used
/// for parenthesized and bracketed sub-expressions.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two precedence levels: `*` and `/` above `+` and `-`, both
/// left-associative.
pub mod binary;

/// Primary expression parsing.
///
/// Handles integer literals, scalar identifiers, array accesses and
/// parenthesized groups.
pub mod primary;
