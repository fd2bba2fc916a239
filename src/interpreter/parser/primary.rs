use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_HEIGHT, MAX_NESTING, ParseResult, Parsed, check_depth, parse_expression},
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - integer literals
/// - scalar identifiers
/// - array accesses, an identifier immediately followed by `[`
/// - parenthesized expressions
///
/// There are no unary operators, so a leading `-` or `+` is rejected here.
///
/// Grammar:
/// ```text
///     primary := INTEGER
///              | IDENTIFIER "[" expression "]"
///              | IDENTIFIER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `nesting`: How many groups and indices enclose this expression.
///
/// # Returns
/// The parsed primary [`Expr`] and its height, or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, nesting: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(value), position)) => Ok((Expr::Literal { value:    *value,
                                                                       position: *position, },
                                                       1)),
        Some((Token::Identifier(name), position)) => {
            parse_identifier_or_access(tokens, name, *position, nesting)
        },
        Some((Token::LParen, position)) => parse_grouping(tokens, *position, nesting),
        Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                                   position: *position, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses the remainder of an identifier.
///
/// An identifier immediately followed by `[` is an array access whose index
/// is a full expression, so indices may nest arbitrarily (`a[b[c[0]]]`).
/// Any other identifier is a scalar variable.
///
/// # Parameters
/// - `tokens`: Token iterator positioned right after the identifier.
/// - `name`: The identifier.
/// - `position`: Where the identifier starts.
/// - `nesting`: How many groups and indices enclose the identifier.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the index expression fails to parse,
/// - the `[` is not closed with `]`,
/// - the index nests too deeply.
fn parse_identifier_or_access<'a, I>(tokens: &mut Peekable<I>,
                                     name: &str,
                                     position: usize,
                                     nesting: usize)
                                     -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::LBracket, bracket)) = tokens.peek() else {
        return Ok((Expr::Variable { name: name.to_string(),
                                    position },
                   1));
    };
    let bracket = *bracket;
    tokens.next();

    check_depth(nesting + 1, MAX_NESTING, bracket)?;
    let (index, height) = parse_expression(tokens, nesting + 1)?;
    check_depth(height + 1, MAX_HEIGHT, bracket)?;

    match tokens.next() {
        Some((Token::RBracket, _)) => Ok((Expr::ArrayAccess { name: name.to_string(),
                                                              index: Box::new(index),
                                                              position },
                                          height + 1)),
        _ => Err(ParseError::ExpectedClosingBracket { position: bracket }),
    }
}

/// Parses a parenthesized expression of the form `( expression )`.
///
/// The opening `(` has already been consumed. The inner expression is wrapped
/// in an [`Expr::Group`] node because a group's value is truncated when it is
/// evaluated.
///
/// # Parameters
/// - `tokens`: Token iterator positioned right after `(`.
/// - `position`: Where the `(` starts.
/// - `nesting`: How many groups and indices enclose the `(`.
///
/// # Errors
/// - `ExpectedClosingParen` if the group is not closed with `)`.
/// - `NestingTooDeep` if the group nests too deeply.
/// - Propagates any errors from sub-expression parsing.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, position: usize, nesting: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    check_depth(nesting + 1, MAX_NESTING, position)?;
    let (expr, height) = parse_expression(tokens, nesting + 1)?;
    check_depth(height + 1, MAX_HEIGHT, position)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok((Expr::Group { expr: Box::new(expr),
                                                      position },
                                        height + 1)),
        _ => Err(ParseError::ExpectedClosingParen { position }),
    }
}
