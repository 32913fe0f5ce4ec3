//! Numerical evaluation of expressions.
//!
//! Evaluation never fails. Points outside the domain of a function produce the usual IEEE-754
//! results, such as `log(-1) = NaN` or `log(0) = -inf`.

use super::{Expr, Named, Node};

impl Named {
    /// Evaluates the named function at `x`.
    pub fn eval(self, x: f64) -> f64 {
        match self {
            Self::Exp => x.exp(),
            Self::Log => x.ln(),
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
        }
    }
}

impl Expr {
    /// Evaluates the function at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        match self.node() {
            Node::Constant(c) => *c,
            Node::Identity => x,
            Node::Named(named) => named.eval(x),
            Node::Sum(f, g) => f.eval(x) + g.eval(x),
            Node::Product(product) => {
                if product.is_zero() {
                    0.0
                } else {
                    product.lhs().eval(x) * product.rhs().eval(x)
                }
            },
            Node::Composition(f, g) => f.eval(g.eval(x)),
            Node::Power(e) => x.powf(*e),
        }
    }
}
