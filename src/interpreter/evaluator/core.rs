use crate::{
    ast::Expr, error::RuntimeError, interpreter::symbols::table::SymbolTable, util::num::i64_to_f64,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context borrows the symbol table of the expression being evaluated.
/// Evaluation never modifies symbols, so a shared borrow is enough and the
/// same table may be evaluated any number of times.
///
/// ## Usage
///
/// ```
/// use symbex::interpreter::{
///     evaluator::core::Context,
///     lexer::tokenize,
///     parser::core::parse,
///     symbols::table::SymbolTable,
/// };
///
/// let mut table = SymbolTable::discover("a*2");
/// table.load_values("a 21".as_bytes()).unwrap();
///
/// let expr = parse(&tokenize("a*2").unwrap()).unwrap();
/// let context = Context::new(&table);
/// assert_eq!(context.eval(&expr).unwrap(), 42.0);
/// ```
pub struct Context<'a> {
    /// The scalar and array values visible to the expression.
    pub symbols: &'a SymbolTable,
}

impl<'a> Context<'a> {
    /// Creates an evaluation context over `symbols`.
    #[must_use]
    pub const fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant: literals,
    /// scalar variables, array accesses, binary operations and groups.
    /// Groups and array indices are resolved by recursive calls, innermost
    /// first.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of `expr`. Only groups and indices are truncated; the value
    /// returned for the outermost node keeps its fractional part.
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        let position = expr.position();
        match expr {
            Expr::Literal { value, .. } => Ok(i64_to_f64(*value)),
            Expr::Variable { name, .. } => self.eval_variable(name, position),
            Expr::ArrayAccess { name, index, .. } => self.eval_array_access(name, index, position),
            Expr::BinaryOp { left, op, right, .. } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(Self::eval_binary(*op, left, right))
            },
            Expr::Group { expr, .. } => self.eval_group(expr),
        }
    }
}
