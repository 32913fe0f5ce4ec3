//! Canonical singleton expressions shared by the whole library.
//!
//! The simplifier and the renderer check whether an expression **is** one of these instances
//! (pointer identity), not whether it evaluates to the same value. A freshly constructed
//! [`Expr::constant(0.0)`](Expr::constant) is therefore not [`ZERO`] until it has gone through
//! [`simplify`](crate::symbolic::simplify()).

use once_cell::sync::Lazy;
use crate::symbolic::expr::{Expr, Named, Node};

/// The constant `0`.
pub static ZERO: Lazy<Expr> = Lazy::new(|| Expr::new(Node::Constant(0.0)));

/// The constant `1`.
pub static ONE: Lazy<Expr> = Lazy::new(|| Expr::new(Node::Constant(1.0)));

/// The constant `-1`.
pub static MINUS_ONE: Lazy<Expr> = Lazy::new(|| Expr::new(Node::Constant(-1.0)));

/// The identity function, `x`.
pub static ID: Lazy<Expr> = Lazy::new(|| Expr::new(Node::Identity));

/// The exponential function, `exp(x)`.
pub static EXP: Lazy<Expr> = Lazy::new(|| Expr::new(Node::Named(Named::Exp)));

/// The natural logarithm, `log(x)`.
pub static LOG: Lazy<Expr> = Lazy::new(|| Expr::new(Node::Named(Named::Log)));

/// The sine function, `sin(x)`.
pub static SINE: Lazy<Expr> = Lazy::new(|| Expr::new(Node::Named(Named::Sin)));

/// The cosine function, `cos(x)`.
pub static COSINE: Lazy<Expr> = Lazy::new(|| Expr::new(Node::Named(Named::Cos)));
