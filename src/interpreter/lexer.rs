use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in an expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Whitespace carries no meaning and is skipped.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Identifier tokens; any run of characters that are not digits,
    /// whitespace, operators, parentheses or brackets, such as `x` or `total`.
    /// A digit ends the identifier, so `a1` lexes as `a` followed by `1`.
    #[regex(r"[^ \t\r\n\f0-9+\-*/()\[\]]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit into an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Tokenizes an expression into `(Token, position)` pairs.
///
/// `position` is the byte offset of the token in `source`. Lexing stops at the
/// first slice that cannot be turned into a token.
///
/// # Errors
/// - `ParseError::LiteralTooLarge` if an integer literal overflows `i64`.
/// - `ParseError::UnexpectedToken` for any other unrecognized slice.
///
/// # Example
/// ```
/// use symbex::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("arr[i]+2").unwrap();
/// assert_eq!(tokens[0], (Token::Identifier("arr".to_string()), 0));
/// assert_eq!(tokens[1], (Token::LBracket, 3));
/// assert_eq!(tokens[5], (Token::Integer(2), 7));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(tok) = token {
            tokens.push((tok, position));
        } else {
            let slice = lexer.slice();
            if slice.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::LiteralTooLarge { position });
            }
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     position });
        }
    }

    Ok(tokens)
}
