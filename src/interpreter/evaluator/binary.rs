use crate::{ast::BinaryOperator, interpreter::evaluator::core::Context};

impl Context<'_> {
    /// Evaluates a binary arithmetic operation.
    ///
    /// All arithmetic happens in `f64`. Division by zero is not checked: it
    /// yields an infinity, or NaN for `0/0`, exactly as floating-point
    /// division does.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Example
    /// ```
    /// use symbex::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, 10.0, 4.0), 2.5);
    /// assert!(Context::eval_binary(BinaryOperator::Div, 1.0, 0.0).is_infinite());
    /// assert!(Context::eval_binary(BinaryOperator::Div, 0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
        }
    }
}
