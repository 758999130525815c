use std::ops;

use crate::expression::{
    core::Expression,
    operator::{BinaryOperator, UnaryOperator},
};

macro_rules! binary_sugar {
    ($trait:ident, $method:ident, $op:expr) => {
        /// Deep-copies both operands into a new node.
        impl ops::$trait<&Expression> for &Expression {
            type Output = Expression;

            fn $method(self, rhs: &Expression) -> Self::Output {
                Expression::binary($op, self, rhs)
            }
        }

        /// Moves both operands into a new node.
        impl ops::$trait for Expression {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self::Binary { op:    $op,
                               left:  Box::new(self),
                               right: Box::new(rhs), }
            }
        }
    };
}

binary_sugar!(Add, add, BinaryOperator::Add);
binary_sugar!(Sub, sub, BinaryOperator::Subtract);
binary_sugar!(Mul, mul, BinaryOperator::Multiply);
binary_sugar!(Div, div, BinaryOperator::Divide);

impl ops::Neg for &Expression {
    type Output = Expression;

    fn neg(self) -> Self::Output {
        Expression::negate(self)
    }
}

impl ops::Neg for Expression {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::Unary { op:      UnaryOperator::Negate,
                      operand: Box::new(self), }
    }
}

/// `!expr` builds the conjugate node, mirroring `!` on [`crate::Complex`].
impl ops::Not for &Expression {
    type Output = Expression;

    fn not(self) -> Self::Output {
        Expression::conjugate(self)
    }
}

impl ops::Not for Expression {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::Unary { op:      UnaryOperator::Conjugate,
                      operand: Box::new(self), }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrowed_sugar_leaves_operands_usable() {
        let x = Expression::variable("x");
        let y = Expression::variable("y");

        let sum = &x + &y;
        let quotient = &sum / &x;

        assert_eq!(quotient.str(), "((x + y) / x)");
        assert_eq!(x.str(), "x");
    }

    #[test]
    fn owned_and_borrowed_sugar_agree() {
        let x = Expression::variable("x");
        let y = Expression::variable("y");

        assert_eq!(&x - &y, x.clone() - y.clone());
        assert_eq!(&x * &y, x.clone() * y.clone());
        assert_eq!(-&x, -x.clone());
        assert_eq!(!&y, !y);
    }

    #[test]
    fn unary_sugar_renders_prefix() {
        let z = Expression::variable("z");
        assert_eq!((-!z).str(), "(-(~z))");
    }
}
