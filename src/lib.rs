//! # complexpr
//!
//! complexpr provides a complex number type with approximate equality and
//! immutable symbolic expression trees over complex numbers. Trees can be
//! rendered to a fully parenthesized text form and evaluated against a binding
//! of variable names to values.
//!
//! ```
//! use complexpr::{Binding, Complex, Expression};
//!
//! let x = Expression::variable("x");
//! let expr = &(&x + &Expression::constant(1.0)) * &Expression::conjugate(&x);
//! assert_eq!(expr.str(), "((x + (1; 0)) * (~x))");
//!
//! let binding = Binding::from([("x".to_string(), Complex::new(0.0, 1.0))]);
//! assert_eq!(expr.eval(&binding).unwrap(), Complex::new(1.0, -1.0));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Complex number support.
///
/// Defines the `Complex` value type with its arithmetic operators, conjugate,
/// inverse, magnitude and the canonical `(<real>; <imag>)` rendering.
///
/// # Responsibilities
/// - Implements compound assignment operators and derives the binary operators
///   from them.
/// - Divides with Smith's algorithm to limit overflow and underflow.
/// - Compares values approximately, with a tolerance of [`complex::EPSILON`].
pub mod complex;
/// Provides the error types for evaluation.
///
/// Evaluation only fails when a variable has no value in the supplied binding.
/// The error is returned to the direct caller of `eval` and never replaced by a
/// default value.
pub mod error;
/// Defines the expression tree.
///
/// This module declares the `Expression` enum, the operation catalogue and the
/// operator sugar used to build trees.
///
/// # Responsibilities
/// - Evaluates trees against a `Binding`.
/// - Renders trees in their fully parenthesized form.
/// - Guarantees that trees never share subtrees with their sources.
pub mod expression;

pub use crate::{
    complex::Complex,
    error::{EvalError, EvalResult},
    expression::{Binding, Expression},
};
