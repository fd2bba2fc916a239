use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::{f64_to_index_checked, i64_to_f64},
};

impl Context<'_> {
    /// Reads the value of a scalar variable.
    ///
    /// Every scalar found by discovery exists in the table, bound or not;
    /// unbound scalars read as `0`.
    ///
    /// # Errors
    /// `RuntimeError::UnknownVariable` if `name` is not a discovered scalar.
    pub fn eval_variable(&self, name: &str, position: usize) -> EvalResult<f64> {
        self.symbols
            .scalar(name)
            .map(|symbol| i64_to_f64(symbol.value))
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           position })
    }

    /// Reads one element of an array.
    ///
    /// The index expression is evaluated recursively and truncated toward
    /// zero before the lookup, so `arr[6/4]` reads `arr[1]`.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownArray` if `name` is not a discovered array.
    /// - `RuntimeError::IndexOutOfBounds` if the truncated index is negative,
    ///   not finite, or not below the array's length. An array that was never
    ///   bound has length zero.
    /// - Any error raised while evaluating the index.
    pub fn eval_array_access(&self, name: &str, index: &Expr, position: usize) -> EvalResult<f64> {
        let array = self.symbols
                        .array(name)
                        .ok_or_else(|| RuntimeError::UnknownArray { name: name.to_string(),
                                                                    position })?;

        let index = self.eval(index)?;
        let slot = f64_to_index_checked(index, array.values.len()).ok_or_else(|| {
                                                                      RuntimeError::IndexOutOfBounds {
                name: name.to_string(),
                length: array.values.len(),
                found: index.trunc(),
                position,
            }
                                                                  })?;

        Ok(i64_to_f64(array.values[slot]))
    }

    /// Evaluates a parenthesized group.
    ///
    /// The result is truncated toward zero, so `(7/2)*2` is `6` and `(10/4)`
    /// is `2`. Infinities and NaN pass through unchanged.
    pub fn eval_group(&self, expr: &Expr) -> EvalResult<f64> {
        Ok(self.eval(expr)?.trunc())
    }
}
