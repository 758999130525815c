/// The expression tree itself.
///
/// Declares the `Expression` enum with its leaf (`Const`, `Variable`) and
/// composite (`Binary`, `Unary`) variants, plus evaluation against a binding,
/// deep duplication and the fully parenthesized rendering.
pub mod core;

/// Operation catalogue.
///
/// Maps every binary and unary operation kind to its compute rule and its
/// display symbol.
pub mod operator;

/// Operator sugar.
///
/// Implements `+ - * /` between expressions, and `-`/`!` on a single
/// expression, by building the corresponding operation node.
pub mod sugar;

pub use self::{
    core::{Binding, Expression},
    operator::{BinaryOperator, UnaryOperator},
};
