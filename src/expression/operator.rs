use std::fmt::Display;

use crate::complex::Complex;

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-`).
    Negate,
    /// Complex conjugation (`~`).
    Conjugate,
}

impl BinaryOperator {
    /// Applies the operator to two already evaluated operands.
    ///
    /// # Example
    /// ```
    /// use complexpr::{Complex, expression::BinaryOperator};
    ///
    /// let result = BinaryOperator::Multiply.apply(Complex::new(0.0, 1.0), Complex::new(0.0, 1.0));
    /// assert_eq!(result, Complex::new(-1.0, 0.0));
    /// ```
    #[must_use]
    pub fn apply(self, left: Complex, right: Complex) -> Complex {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
        }
    }

    /// Returns the symbol used when rendering the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

impl UnaryOperator {
    /// Applies the operator to an already evaluated operand.
    ///
    /// # Example
    /// ```
    /// use complexpr::{Complex, expression::UnaryOperator};
    ///
    /// let z = Complex::new(3.0, -4.0);
    /// assert_eq!(UnaryOperator::Conjugate.apply(z), Complex::new(3.0, 4.0));
    /// assert_eq!(UnaryOperator::Negate.apply(z), Complex::new(-3.0, 4.0));
    /// ```
    #[must_use]
    pub fn apply(self, operand: Complex) -> Complex {
        match self {
            Self::Negate => -operand,
            Self::Conjugate => !operand,
        }
    }

    /// Returns the symbol used when rendering the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Conjugate => "~",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_match_catalogue() {
        use BinaryOperator::{Add, Divide, Multiply, Subtract};
        use UnaryOperator::{Conjugate, Negate};

        let binary: Vec<String> = [Add, Subtract, Multiply, Divide].iter()
                                                                   .map(ToString::to_string)
                                                                   .collect();
        let unary: Vec<String> = [Negate, Conjugate].iter().map(ToString::to_string).collect();

        assert_eq!(binary, ["+", "-", "*", "/"]);
        assert_eq!(unary, ["-", "~"]);
    }

    #[test]
    fn division_by_zero_propagates_non_finite_values() {
        let result = BinaryOperator::Divide.apply(Complex::new(1.0, 1.0), Complex::new(0.0, 0.0));
        assert!(!result.is_finite());
    }
}
