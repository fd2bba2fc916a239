use logos::Logos;

use crate::interpreter::{lexer::Token, symbols::table::SymbolTable};

impl SymbolTable {
    /// Builds the symbol table of an expression.
    ///
    /// Walks the token stream once, left to right. An identifier immediately
    /// followed by `[` is registered as an array; every other identifier is
    /// registered as a scalar. Names inside index expressions are found by the
    /// same walk. Repeated names are registered once, in first-occurrence
    /// order, with default values.
    ///
    /// Discovery never fails. Slices the lexer cannot turn into tokens (for
    /// example integer literals that overflow `i64`) are not names and are
    /// skipped; evaluation reports them.
    ///
    /// # Example
    /// ```
    /// use symbex::interpreter::symbols::table::SymbolTable;
    ///
    /// let table = SymbolTable::discover("a+arr[b*a]-c/arr[2]");
    ///
    /// let scalars: Vec<_> = table.scalars.iter().map(|s| s.name.as_str()).collect();
    /// let arrays: Vec<_> = table.arrays.iter().map(|a| a.name.as_str()).collect();
    /// assert_eq!(scalars, ["a", "b", "c"]);
    /// assert_eq!(arrays, ["arr"]);
    /// ```
    #[must_use]
    pub fn discover(source: &str) -> Self {
        let mut table = Self::new();
        let mut tokens = Token::lexer(source).filter_map(Result::ok).peekable();

        while let Some(token) = tokens.next() {
            let Token::Identifier(name) = token else {
                continue;
            };

            let is_array = matches!(tokens.peek(), Some(Token::LBracket));
            let inserted = if is_array {
                table.arrays.insert(&name)
            } else {
                table.scalars.insert(&name)
            };

            if inserted {
                tracing::trace!(name = %name, is_array, "registered symbol");
            }
        }

        tracing::debug!(scalars = table.scalars.len(),
                        arrays = table.arrays.len(),
                        "discovered symbols");
        table
    }
}
