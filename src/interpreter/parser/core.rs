use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A parsed subtree together with its height.
///
/// A leaf has height `1`; every group, array access or binary operation adds
/// one to the tallest of its children.
pub type Parsed = (Expr, usize);

/// How many groups and array indices may enclose one another.
pub const MAX_NESTING: usize = 256;

/// The tallest expression tree the parser will build.
///
/// Evaluation recurses once per level, so this also bounds the evaluator's
/// stack use. Long operator chains count toward it because they nest to the
/// left.
pub const MAX_HEIGHT: usize = 1024;

/// Rejects a nesting level or tree height past its limit.
///
/// # Errors
/// `ParseError::NestingTooDeep` at `position` when `depth` exceeds `limit`.
pub(crate) const fn check_depth(depth: usize, limit: usize, position: usize) -> ParseResult<()> {
    if depth > limit {
        Err(ParseError::NestingTooDeep { position })
    } else {
        Ok(())
    }
}

/// Parses a full expression.
///
/// This is the entry point for recursive expression parsing, used both for
/// the whole input and for the interiors of parentheses and brackets.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `nesting`: How many groups and indices enclose this expression.
///
/// # Returns
/// The parsed expression node and its height.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, nesting: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens, nesting)
}

/// Parses a complete token sequence into a single expression tree.
///
/// Unlike [`parse_expression`], this requires that every token is consumed,
/// so input such as `a+b)` or `2 3` is rejected instead of being silently
/// truncated.
///
/// # Errors
/// - `ParseError::EmptyExpression` if `tokens` is empty.
/// - `ParseError::UnexpectedTrailingTokens` if tokens remain after a complete
///   expression.
/// - `ParseError::NestingTooDeep` if groups and indices nest more than
///   [`MAX_NESTING`] levels or the tree grows taller than [`MAX_HEIGHT`].
/// - Any error raised while parsing sub-expressions.
///
/// # Example
/// ```
/// use symbex::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("(a+b)*c[2]").unwrap();
/// let expr = parse(&tokens).unwrap();
/// assert_eq!(expr.to_string(), "(a+b)*c[2]");
///
/// let tokens = tokenize("a+b)").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut iter = tokens.iter().peekable();
    let (expr, _) = parse_expression(&mut iter, 0)?;

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                          position: *position, });
    }

    Ok(expr)
}
