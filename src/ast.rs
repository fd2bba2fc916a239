/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every construct the expression language knows: integer
/// literals, scalar variables, array element accesses, binary arithmetic and
/// parenthesized groups. Each variant records the byte position in the
/// whitespace-free source text where it starts, for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The constant value.
        value:    i64,
        /// Position in the source text.
        position: usize,
    },
    /// Reference to a scalar variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Position in the source text.
        position: usize,
    },
    /// Array element access (e.g., `arr[i + 1]`).
    ArrayAccess {
        /// Name of the array.
        name:     String,
        /// The index expression.
        index:    Box<Self>,
        /// Position in the source text.
        position: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator in the source text.
        position: usize,
    },
    /// A parenthesized expression. Its value is truncated toward zero.
    Group {
        /// The enclosed expression.
        expr:     Box<Self>,
        /// Position of the opening parenthesis.
        position: usize,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use symbex::ast::Expr;
    ///
    /// let expr = Expr::Variable { name:     "x".to_string(),
    ///                             position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::Variable { position, .. }
            | Self::ArrayAccess { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::Group { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::ArrayAccess { name, index, .. } => write!(f, "{name}[{index}]"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "{left}{op}{right}"),
            Self::Group { expr, .. } => write!(f, "({expr})"),
        }
    }
}

/// Represents a binary operator.
///
/// Only the four basic arithmetic operators exist. `Mul` and `Div` bind
/// tighter than `Add` and `Sub`; operators of equal precedence associate to
/// the left.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
