/// The binding module loads symbol values from text records.
///
/// Value records name a discovered symbol and supply either a scalar value or
/// an array length with sparse `(index,value)` pairs. Records for unknown
/// names are skipped.
///
/// # Responsibilities
/// - Parses scalar and array records, including whitespace inside pairs.
/// - Allocates array stores and bounds-checks every pair.
/// - Reports malformed records with their line number.
pub mod binding;
/// The evaluator module computes the value of a parsed expression.
///
/// The evaluator walks the AST against a symbol table, resolving groups and
/// array indices recursively and applying floating-point arithmetic.
///
/// # Responsibilities
/// - Evaluates literals, variables, array accesses, binary operations and
///   groups.
/// - Truncates group and index values toward zero.
/// - Reports unknown symbols and out-of-bounds accesses.
pub mod evaluator;
/// The expression module ties discovery, binding and evaluation together.
///
/// It exposes `Expression`, the public engine that owns an expression's text
/// and its symbol table.
pub mod expression;
/// The lexer module tokenizes expression text for further parsing.
///
/// # Responsibilities
/// - Converts the input into integer, identifier, operator and delimiter
///   tokens with their positions.
/// - Reports oversized literals and unrecognized input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes with correct precedence and
///   associativity.
/// - Rejects malformed input such as unbalanced parentheses or brackets,
///   dangling operators and trailing tokens.
pub mod parser;
/// The symbols module stores and discovers variables.
///
/// # Responsibilities
/// - Defines scalar and array symbols and the ordered table holding them.
/// - Classifies each identifier as scalar or array during discovery.
pub mod symbols;
