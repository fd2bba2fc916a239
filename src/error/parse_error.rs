#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing of an
/// expression.
///
/// Positions are byte offsets into the whitespace-free expression text.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Where the matching `(` starts.
        position: usize,
    },
    /// A closing bracket `]` was expected but not found.
    ExpectedClosingBracket {
        /// Where the matching `[` starts.
        position: usize,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// A literal value was too large to be represented safely.
    LiteralTooLarge {
        /// Where the literal starts.
        position: usize,
    },
    /// The expression contains no tokens at all.
    EmptyExpression,
    /// Groups, indices or operator chains nest past the parser's limit.
    NestingTooDeep {
        /// Where the construct that crossed the limit starts.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at position {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Error: Unexpected end of input."),

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at position {position}: Expected closing parenthesis ')' but none found."),

            Self::ExpectedClosingBracket { position } => write!(f,
                                                                "Error at position {position}: Expected closing bracket ']' but none found."),

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Error at position {position}: Extra tokens after expression. Check your input: {token}"),

            Self::LiteralTooLarge { position } => {
                write!(f, "Error at position {position}: Literal is too large.")
            },

            Self::EmptyExpression => write!(f, "Error: Expression is empty."),

            Self::NestingTooDeep { position } => {
                write!(f, "Error at position {position}: Expression is nested too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
