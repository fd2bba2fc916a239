#[derive(Debug)]
/// Represents all errors that can occur while binding symbol values.
///
/// Line numbers are 1-based and count every line read from the input,
/// including blank and ignored ones.
pub enum BindingError {
    /// A token that should be an integer is not one.
    InvalidInteger {
        /// The offending token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A known symbol was named without a value or length.
    MissingValue {
        /// The name of the symbol.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found a token that does not belong in the record.
    UnexpectedToken {
        /// The offending token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An array was declared with a negative length.
    NegativeLength {
        /// The name of the array.
        name:   String,
        /// The declared length.
        length: i64,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// An array length is too large to allocate.
    LengthTooLarge {
        /// The name of the array.
        name:   String,
        /// The declared length.
        length: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// An `(index,value)` pair points outside the allocated array.
    IndexOutOfBounds {
        /// The name of the array.
        name:   String,
        /// The allocated length of the array.
        length: usize,
        /// The index that was actually requested.
        found:  i64,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Reading from the underlying input failed.
    Io {
        /// The I/O failure.
        source: std::io::Error,
        /// The line that was being read.
        line:   usize,
    },
}

impl std::fmt::Display for BindingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInteger { token, line } => {
                write!(f, "Error on line {line}: '{token}' is not a valid integer.")
            },
            Self::MissingValue { name, line } => {
                write!(f, "Error on line {line}: Symbol '{name}' has no value.")
            },
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },
            Self::NegativeLength { name, length, line } => write!(f,
                                                                  "Error on line {line}: Array '{name}' cannot have negative length {length}."),
            Self::LengthTooLarge { name, length, line } => write!(f,
                                                                  "Error on line {line}: Array '{name}' length {length} is too large to allocate."),
            Self::IndexOutOfBounds { name,
                                     length,
                                     found,
                                     line, } => write!(f,
                                                       "Error on line {line}: Index out of bounds for '{name}'. Length is {length}, but found {found} instead."),
            Self::Io { source, line } => {
                write!(f, "Error on line {line}: Failed to read input: {source}.")
            },
        }
    }
}

impl std::error::Error for BindingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
