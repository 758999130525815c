/// Evaluation errors.
///
/// Contains the errors that can be raised while evaluating an expression tree
/// against a binding. Numeric edge results such as `NaN` or infinities are
/// ordinary values and never show up here.
pub mod eval_error;

pub use eval_error::{EvalError, EvalResult};
