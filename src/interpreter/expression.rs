use std::io::BufRead;

use crate::{
    ast::Expr,
    error::{BindingError, EvalError, ParseError},
    interpreter::{
        evaluator::core::Context,
        lexer::tokenize,
        parser::core::parse,
        symbols::table::{ArraySymbol, ScalarSymbol, SymbolTable},
    },
};

/// An arithmetic expression together with the symbols it references.
///
/// The lifecycle has three steps:
/// 1. [`Expression::build_symbols`] discovers scalar and array names,
/// 2. [`Expression::load_symbol_values`] binds values to them,
/// 3. [`Expression::evaluate`] computes the result.
///
/// Evaluating before binding is allowed; every variable then reads as `0`.
///
/// # Example
/// ```
/// use symbex::Expression;
///
/// let mut expr = Expression::new("(a + b) * arr[2]");
/// expr.build_symbols();
/// expr.load_symbol_values("a 3\nb 4\narr 5 (2,10)".as_bytes())
///     .unwrap();
///
/// assert_eq!(expr.evaluate().unwrap(), 70.0);
/// ```
#[derive(Debug, Clone)]
pub struct Expression {
    text:    String,
    symbols: SymbolTable,
}

impl Expression {
    /// Creates an expression from its source text.
    ///
    /// Whitespace carries no meaning and is removed, so `a b` names the single
    /// identifier `ab`. The symbol table starts empty.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { text:    text.chars().filter(|c| !c.is_whitespace()).collect(),
               symbols: SymbolTable::new(), }
    }

    /// The whitespace-free expression text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Discovers the scalar and array symbols of the expression.
    ///
    /// Replaces the current table with a fresh one in which every symbol holds
    /// its default value, so calling this twice yields the same table.
    pub fn build_symbols(&mut self) {
        self.symbols = SymbolTable::discover(&self.text);
    }

    /// Binds values to discovered symbols.
    ///
    /// May be called several times; later records overwrite earlier ones and
    /// records for unknown names are skipped. See
    /// [`SymbolTable::load_values`] for the record format.
    ///
    /// # Errors
    /// Returns a `BindingError` for malformed records, out-of-range array
    /// indices, or a failing reader.
    pub fn load_symbol_values<R: BufRead>(&mut self, reader: R) -> Result<(), BindingError> {
        self.symbols.load_values(reader)
    }

    /// Parses the expression into a syntax tree.
    ///
    /// # Errors
    /// Returns a `ParseError` if the text is empty or malformed, for example
    /// with unbalanced parentheses or brackets or a dangling operator.
    pub fn parse(&self) -> Result<Expr, ParseError> {
        parse(&tokenize(&self.text)?)
    }

    /// Evaluates the expression against the current symbol values.
    ///
    /// Calling this repeatedly without rebinding always gives the same result.
    ///
    /// # Errors
    /// - `EvalError::Parse` if the text is malformed.
    /// - `EvalError::Runtime` if a symbol is unknown (for instance because
    ///   [`Expression::build_symbols`] was never called) or an array index is
    ///   out of bounds.
    pub fn evaluate(&self) -> Result<f64, EvalError> {
        let expr = self.parse()?;
        let value = Context::new(&self.symbols).eval(&expr)?;

        tracing::debug!(expression = %self.text, value, "evaluated expression");
        Ok(value)
    }

    /// The full symbol table.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Scalar symbols in first-occurrence order.
    #[must_use]
    pub fn scalars(&self) -> &[ScalarSymbol] {
        self.symbols.scalars.as_slice()
    }

    /// Array symbols in first-occurrence order.
    #[must_use]
    pub fn arrays(&self) -> &[ArraySymbol] {
        self.symbols.arrays.as_slice()
    }

    /// Looks up a scalar symbol by name.
    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<&ScalarSymbol> {
        self.symbols.scalar(name)
    }

    /// Looks up an array symbol by name.
    #[must_use]
    pub fn array(&self, name: &str) -> Option<&ArraySymbol> {
        self.symbols.array(name)
    }
}
