use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{MAX_HEIGHT, ParseResult, Parsed, check_depth},
            primary::parse_primary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`, so `a-b-c` parses
/// as `(a-b)-c`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `nesting`: How many groups and indices enclose this expression.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression, with its
/// height.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, nesting: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (mut left, mut height) = parse_multiplicative(tokens, nesting)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let (right, right_height) = parse_multiplicative(tokens, nesting)?;
            height = height.max(right_height) + 1;
            check_depth(height, MAX_HEIGHT, *position)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: *position };
            continue;
        }
        break;
    }
    Ok((left, height))
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`, so `8/4/2` parses as
/// `(8/4)/2`.
///
/// The rule is: `multiplicative := primary (("*" | "/") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `nesting`: How many groups and indices enclose this expression.
///
/// # Returns
/// A binary expression tree combining primary nodes, with its height.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, nesting: usize) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (mut left, mut height) = parse_primary(tokens, nesting)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let (right, right_height) = parse_primary(tokens, nesting)?;
            height = height.max(right_height) + 1;
            check_depth(height, MAX_HEIGHT, *position)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: *position };
            continue;
        }
        break;
    }
    Ok((left, height))
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token is one of `+`, `-`, `*` or
/// `/`, and `None` for all other tokens.
///
/// # Example
/// ```
/// use symbex::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Slash),
///            Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
