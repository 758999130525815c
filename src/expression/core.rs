use std::{
    collections::{BTreeSet, HashMap},
    fmt::Display,
};

use crate::{
    complex::Complex,
    error::{EvalError, EvalResult},
    expression::operator::{BinaryOperator, UnaryOperator},
};

/// Maps variable names to the values they take during one evaluation.
pub type Binding = HashMap<String, Complex>;

/// A node of an immutable expression tree over complex numbers.
///
/// Every composite node owns its children exclusively. The constructors taking
/// `&Expression` deep-copy their operands, so a tree never shares a subtree
/// with the expressions it was built from, and `clone` is likewise a full
/// structural copy.
///
/// `eval`, `str` and `clone` all recurse once per level, so their stack usage
/// grows with [`Expression::depth`].
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A complex literal.
    Const(Complex),
    /// A reference to a variable resolved through the binding.
    Variable(String),
    /// A binary operation (addition, subtraction, etc.).
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A unary operation (negation or conjugation).
    Unary {
        /// The operator.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
}

impl Expression {
    /// Creates a constant leaf.
    #[must_use]
    pub fn constant(value: impl Into<Complex>) -> Self {
        Self::Const(value.into())
    }

    /// Creates a variable leaf.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates a binary node over deep copies of `left` and `right`.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: &Self, right: &Self) -> Self {
        Self::Binary { op,
                       left: Box::new(left.clone()),
                       right: Box::new(right.clone()) }
    }

    /// Creates a unary node over a deep copy of `operand`.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: &Self) -> Self {
        Self::Unary { op,
                      operand: Box::new(operand.clone()) }
    }

    /// Creates `left + right`.
    #[must_use]
    pub fn add(left: &Self, right: &Self) -> Self {
        Self::binary(BinaryOperator::Add, left, right)
    }

    /// Creates `left - right`.
    #[must_use]
    pub fn subtract(left: &Self, right: &Self) -> Self {
        Self::binary(BinaryOperator::Subtract, left, right)
    }

    /// Creates `left * right`.
    #[must_use]
    pub fn multiply(left: &Self, right: &Self) -> Self {
        Self::binary(BinaryOperator::Multiply, left, right)
    }

    /// Creates `left / right`.
    #[must_use]
    pub fn divide(left: &Self, right: &Self) -> Self {
        Self::binary(BinaryOperator::Divide, left, right)
    }

    /// Creates the negation of `operand`.
    #[must_use]
    pub fn negate(operand: &Self) -> Self {
        Self::unary(UnaryOperator::Negate, operand)
    }

    /// Creates the complex conjugate of `operand`.
    #[must_use]
    pub fn conjugate(operand: &Self) -> Self {
        Self::unary(UnaryOperator::Conjugate, operand)
    }

    /// Evaluates the tree against a binding.
    ///
    /// Both operands of a binary node are always evaluated. Division by zero
    /// is not an error; it yields non-finite components like any other IEEE
    /// operation.
    ///
    /// # Errors
    /// Returns [`EvalError::UndefinedVariable`] as soon as a variable is
    /// missing from `binding`.
    ///
    /// # Example
    /// ```
    /// use complexpr::{Binding, Complex, EvalError, Expression};
    ///
    /// let expr = Expression::variable("x") * Expression::constant(2.0);
    ///
    /// let mut binding = Binding::new();
    /// binding.insert("x".to_string(), Complex::new(1.0, 1.0));
    /// assert_eq!(expr.eval(&binding).unwrap(), Complex::new(2.0, 2.0));
    ///
    /// let err = expr.eval(&Binding::new()).unwrap_err();
    /// assert_eq!(err, EvalError::UndefinedVariable { name: "x".to_string() });
    /// ```
    pub fn eval(&self, binding: &Binding) -> EvalResult<Complex> {
        match self {
            Self::Const(value) => Ok(*value),
            Self::Variable(name) => Self::eval_variable(name, binding),
            Self::Binary { op, left, right } => {
                let left = left.eval(binding)?;
                let right = right.eval(binding)?;
                Ok(op.apply(left, right))
            },
            Self::Unary { op, operand } => Ok(op.apply(operand.eval(binding)?)),
        }
    }

    fn eval_variable(name: &str, binding: &Binding) -> EvalResult<Complex> {
        if let Some(value) = binding.get(name) {
            log::trace!("resolved variable '{name}' to {value}");
            return Ok(*value);
        }

        log::debug!("variable '{name}' is missing from a binding of {} names",
                    binding.len());
        Err(EvalError::UndefinedVariable { name: name.to_owned() })
    }

    /// Returns the fully parenthesized rendering of the tree.
    ///
    /// # Example
    /// ```
    /// use complexpr::Expression;
    ///
    /// let z = Expression::variable("z");
    /// let expr = Expression::negate(&Expression::conjugate(&z));
    /// assert_eq!(expr.str(), "(-(~z))");
    /// ```
    #[must_use]
    pub fn str(&self) -> String {
        self.to_string()
    }

    /// Returns the sorted, deduplicated names of all variables in the tree.
    ///
    /// A binding containing every returned name is guaranteed not to fail
    /// evaluation.
    ///
    /// # Example
    /// ```
    /// use complexpr::Expression;
    ///
    /// let expr = (Expression::variable("y") + Expression::variable("x")) / Expression::variable("y");
    /// assert_eq!(expr.variables(), ["x", "y"]);
    /// ```
    #[must_use]
    pub fn variables(&self) -> Vec<&str> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names.into_iter().collect()
    }

    fn collect_variables<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        match self {
            Self::Const(_) => {},
            Self::Variable(name) => {
                names.insert(name.as_str());
            },
            Self::Binary { left, right, .. } => {
                left.collect_variables(names);
                right.collect_variables(names);
            },
            Self::Unary { operand, .. } => operand.collect_variables(names),
        }
    }

    /// Returns the height of the tree. A leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Const(_) | Self::Variable(_) => 1,
            Self::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
            Self::Unary { operand, .. } => 1 + operand.depth(),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Const(value) => write!(f, "{value}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::Unary { op, operand } => write!(f, "({op}{operand})"),
        }
    }
}

impl From<Complex> for Expression {
    fn from(value: Complex) -> Self {
        Self::Const(value)
    }
}
