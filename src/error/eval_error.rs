use thiserror::Error;

/// Result type used by expression evaluation.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Represents all errors that can occur during evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A variable node referenced a name missing from the binding.
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_variable_message_names_the_variable() {
        let err = EvalError::UndefinedVariable { name: "z".to_string() };
        assert_eq!(err.to_string(), "Undefined variable 'z'.");
    }
}
