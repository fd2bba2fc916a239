use logos::Logos;

use crate::error::BindingError;

/// Represents a lexical token in the `(index,value)` list of an array record.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum PairToken {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// An optionally signed integer, kept as text so overflow can be reported
    /// with the offending token.
    #[regex(r"[+-]?[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// Whitespace, allowed anywhere between pairs and inside them.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for PairToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Integer(text) => write!(f, "{text}"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Parses an integer token of a value record.
///
/// # Errors
/// `BindingError::InvalidInteger` if `token` is not an `i64`.
///
/// # Example
/// ```
/// use symbex::interpreter::binding::pairs::parse_integer;
///
/// assert_eq!(parse_integer("-17", 3).unwrap(), -17);
/// assert!(parse_integer("1.5", 3).is_err());
/// ```
pub fn parse_integer(token: &str, line: usize) -> Result<i64, BindingError> {
    token.parse()
         .map_err(|_| BindingError::InvalidInteger { token: token.to_string(),
                                                     line })
}

/// Parses the `(index,value)` list that follows an array length.
///
/// Pairs are parenthesized and comma-separated; whitespace may appear
/// anywhere, so `(2,10)`, `( 2 , 10 )` and `(2,10)(3,4)` are all accepted. An
/// empty or whitespace-only input yields no pairs.
///
/// # Parameters
/// - `input`: The record text after the length token.
/// - `line`: Source line for error reporting.
///
/// # Returns
/// The pairs in input order. Bounds are not checked here.
///
/// # Errors
/// - `BindingError::UnexpectedToken` if the list is not a sequence of
///   well-formed pairs.
/// - `BindingError::InvalidInteger` if a component does not fit into `i64`.
///
/// # Example
/// ```
/// use symbex::interpreter::binding::pairs::parse_pairs;
///
/// let pairs = parse_pairs("(0,5) ( 3 , -2 )", 1).unwrap();
/// assert_eq!(pairs, vec![(0, 5), (3, -2)]);
///
/// assert!(parse_pairs("(0,5", 1).is_err());
/// assert!(parse_pairs("0,5", 1).is_err());
/// ```
pub fn parse_pairs(input: &str, line: usize) -> Result<Vec<(i64, i64)>, BindingError> {
    let mut tokens = Vec::new();
    let mut lexer = PairToken::lexer(input);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            return Err(BindingError::UnexpectedToken { token: lexer.slice().to_string(),
                                                       line });
        }
    }

    let mut iter = tokens.into_iter();
    let mut pairs = Vec::new();

    while let Some(token) = iter.next() {
        expect(Some(token), &PairToken::LParen, line)?;
        let index = expect_integer(iter.next(), line)?;
        expect(iter.next(), &PairToken::Comma, line)?;
        let value = expect_integer(iter.next(), line)?;
        expect(iter.next(), &PairToken::RParen, line)?;
        pairs.push((index, value));
    }

    Ok(pairs)
}

fn expect(token: Option<PairToken>, expected: &PairToken, line: usize) -> Result<(), BindingError> {
    match token {
        Some(tok) if &tok == expected => Ok(()),
        Some(tok) => Err(BindingError::UnexpectedToken { token: tok.to_string(),
                                                         line }),
        None => Err(BindingError::UnexpectedToken { token: format!("end of line, expected '{expected}'"),
                                                    line }),
    }
}

fn expect_integer(token: Option<PairToken>, line: usize) -> Result<i64, BindingError> {
    match token {
        Some(PairToken::Integer(text)) => parse_integer(&text, line),
        Some(tok) => Err(BindingError::UnexpectedToken { token: tok.to_string(),
                                                         line }),
        None => Err(BindingError::UnexpectedToken { token: "end of line, expected an integer".to_string(),
                                                    line }),
    }
}
