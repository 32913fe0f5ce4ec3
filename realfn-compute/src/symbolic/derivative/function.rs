//! Symbolic derivatives of the named elementary functions.

use crate::symbolic::expr::{Expr, Named};

/// Computes the derivative of a named function of the bare variable. The chain rule is applied
/// by [`Node::Composition`](crate::symbolic::Node::Composition), not here.
///
/// `expr` must be the expression holding `named`; the exponential returns it unchanged.
pub(super) fn named_derivative(expr: &Expr, named: Named) -> Expr {
    match named {
        // exp' = exp
        Named::Exp => expr.clone(),

        // log' = x^-1
        Named::Log => Expr::new_power(-1.0),

        // sin' = cos
        Named::Sin => Expr::cos(),

        // cos' = -sin
        Named::Cos => -Expr::sin(),
    }
}
