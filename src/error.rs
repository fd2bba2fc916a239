/// Value binding errors.
///
/// Defines all error types that can occur while reading symbol values: bad
/// integers, malformed `(index,value)` pairs, out-of-range indices and I/O
/// failures of the underlying reader.
pub mod binding_error;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include unbalanced parentheses or brackets,
/// dangling operators and oversized literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unknown symbols and out-of-bounds array accesses.
pub mod runtime_error;

pub use binding_error::BindingError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq)]
/// Any error that `Expression::evaluate` can return.
pub enum EvalError {
    /// The expression text is malformed.
    Parse(ParseError),
    /// The expression is well-formed but could not be evaluated.
    Runtime(RuntimeError),
}

impl From<ParseError> for EvalError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
