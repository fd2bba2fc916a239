/// Core evaluation logic for expressions.
///
/// Contains the evaluation context and the dispatch over expression variants.
pub mod core;

/// Binary operator evaluation.
///
/// Implements floating-point evaluation of `+`, `-`, `*` and `/`.
pub mod binary;

/// Symbol access and grouping.
///
/// Reads scalar and array values from the symbol table and applies the
/// truncation rules for array indices and parenthesized groups.
pub mod access;
