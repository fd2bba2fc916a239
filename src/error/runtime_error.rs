#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating a parsed expression.
pub enum RuntimeError {
    /// Tried to read a scalar that was never discovered.
    UnknownVariable {
        /// The name of the variable.
        name:     String,
        /// Where the variable appears in the expression.
        position: usize,
    },
    /// Tried to index an array that was never discovered.
    UnknownArray {
        /// The name of the array.
        name:     String,
        /// Where the array appears in the expression.
        position: usize,
    },
    /// Tried to access an array element outside the allocated bounds.
    IndexOutOfBounds {
        /// The name of the array.
        name:     String,
        /// The allocated length of the array.
        length:   usize,
        /// The requested index, after truncation toward zero.
        found:    f64,
        /// Where the array access appears in the expression.
        position: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, position } => {
                write!(f, "Error at position {position}: Unknown variable '{name}'.")
            },
            Self::UnknownArray { name, position } => {
                write!(f, "Error at position {position}: Unknown array '{name}'.")
            },
            Self::IndexOutOfBounds { name,
                                     length,
                                     found,
                                     position, } => write!(f,
                                                           "Error at position {position}: Index out of bounds for '{name}'. Length is {length}, but found {found} instead."),
        }
    }
}

impl std::error::Error for RuntimeError {}
