//! The expression tree.
//!
//! An expression is an [`Expr`] handle to an immutable [`Node`]. Handles are reference counted,
//! so sub-trees are shared freely between an expression and, for example, its derivative.
//!
//! # Singleton identity
//!
//! The constants `0`, `1` and `-1`, the identity function, and the named elementary functions
//! each have a canonical instance in [`crate::consts`]. Methods such as [`Expr::is_zero`] check
//! whether an expression **is** that instance, by pointer identity. They do not evaluate
//! anything, and an expression that merely evaluates to zero everywhere is not considered zero:
//!
//! ```
//! use realfn_compute::symbolic::Expr;
//!
//! assert!(Expr::zero().is_zero());
//! assert!(!Expr::constant(0.0).is_zero());
//! assert!(Expr::constant(0.0).simplify().is_zero());
//! ```
//!
//! # Strict equality
//!
//! The [`PartialEq`] implementation for [`Expr`] compares trees **structurally**: two
//! expressions are equal if they have the same shape and the same constants, regardless of
//! whether they share nodes. Structural equality never reports false positives, but it is much
//! weaker than mathematical equality; `x + x` and `2 * x` are not equal.

mod eval;
mod iter;
mod render;

use crate::consts::{COSINE, EXP, ID, LOG, MINUS_ONE, ONE, SINE, ZERO};
use std::{ops::{Add, Mul, Neg}, sync::Arc};

pub use iter::ExprIter;
pub use render::ExprFormatter;

/// A named elementary function of the bare variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Named {
    /// The exponential function, `exp(x)`.
    Exp,

    /// The natural logarithm, `log(x)`.
    Log,

    /// The sine function, `sin(x)`.
    Sin,

    /// The cosine function, `cos(x)`.
    Cos,
}

impl Named {
    /// Returns the name of the function, as it is rendered.
    pub fn name(self) -> &'static str {
        match self {
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Sin => "sin",
            Self::Cos => "cos",
        }
    }
}

/// A product of two factors.
///
/// Whether either factor is the zero singleton is decided once, when the product is created. A
/// product marked as zero evaluates to `0` and differentiates to the zero singleton without
/// looking at its factors.
#[derive(Debug, Clone)]
pub struct Product {
    lhs: Expr,
    rhs: Expr,
    is_zero: bool,
}

impl Product {
    /// Creates a new product of the two factors.
    pub fn new(lhs: Expr, rhs: Expr) -> Self {
        let is_zero = lhs.is_zero() || rhs.is_zero();
        Self { lhs, rhs, is_zero }
    }

    /// Returns the left-hand factor.
    pub fn lhs(&self) -> &Expr {
        &self.lhs
    }

    /// Returns the right-hand factor.
    pub fn rhs(&self) -> &Expr {
        &self.rhs
    }

    /// Returns true if either factor was the zero singleton when the product was created.
    pub fn is_zero(&self) -> bool {
        self.is_zero
    }
}

/// The flag is derived from the factors, so it does not take part in equality.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.lhs == other.lhs && self.rhs == other.rhs
    }
}

/// A single node of the expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A constant function, such as `2` or `0.5`.
    Constant(f64),

    /// The identity function, `x`.
    Identity,

    /// A named elementary function, such as `sin`.
    Named(Named),

    /// The sum of two functions, `f + g`.
    Sum(Expr, Expr),

    /// The product of two functions, `f * g`.
    Product(Product),

    /// The composition of two functions, `f(g(x))`. The outer function comes first.
    Composition(Expr, Expr),

    /// The power function `x^e`, with a real exponent. Apply it to another function with
    /// [`Expr::power`].
    Power(f64),
}

/// A handle to an immutable expression tree.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, PartialEq)]
pub struct Expr(Arc<Node>);

impl Expr {
    /// Wraps the given node in a new expression.
    pub fn new(node: Node) -> Self {
        Self(Arc::new(node))
    }

    /// Returns the node at the root of this expression.
    pub fn node(&self) -> &Node {
        &self.0
    }

    /// Creates a new constant function. The result is never one of the canonical singletons; use
    /// [`Expr::zero`], [`Expr::one`] or [`Expr::minus_one`] for those.
    pub fn constant(c: f64) -> Self {
        Self::new(Node::Constant(c))
    }

    /// The zero singleton.
    pub fn zero() -> Self {
        ZERO.clone()
    }

    /// The one singleton.
    pub fn one() -> Self {
        ONE.clone()
    }

    /// The minus-one singleton.
    pub fn minus_one() -> Self {
        MINUS_ONE.clone()
    }

    /// The identity function, `x`.
    pub fn identity() -> Self {
        ID.clone()
    }

    /// The exponential function, `exp(x)`.
    pub fn exp() -> Self {
        EXP.clone()
    }

    /// The natural logarithm, `log(x)`.
    pub fn log() -> Self {
        LOG.clone()
    }

    /// The sine function, `sin(x)`.
    pub fn sin() -> Self {
        SINE.clone()
    }

    /// The cosine function, `cos(x)`.
    pub fn cos() -> Self {
        COSINE.clone()
    }

    /// Creates the sum `f + g`.
    pub fn new_sum(f: Expr, g: Expr) -> Self {
        Self::new(Node::Sum(f, g))
    }

    /// Creates the product `f * g`.
    pub fn new_product(f: Expr, g: Expr) -> Self {
        Self::new(Node::Product(Product::new(f, g)))
    }

    /// Creates the composition `f(g(x))`.
    pub fn new_composition(outer: Expr, inner: Expr) -> Self {
        Self::new(Node::Composition(outer, inner))
    }

    /// Creates the bare power function `x^e`.
    pub fn new_power(e: f64) -> Self {
        Self::new(Node::Power(e))
    }

    /// Composes this function with `inner`, producing `self(inner(x))`.
    pub fn compose(self, inner: Expr) -> Self {
        Self::new_composition(self, inner)
    }

    /// Adds `other` to this function.
    pub fn sum(self, other: Expr) -> Self {
        Self::new_sum(self, other)
    }

    /// Multiplies this function by `other`.
    pub fn product(self, other: Expr) -> Self {
        Self::new_product(self, other)
    }

    /// Raises this function to the power `e`, producing `Power(e)(self(x))`.
    pub fn power(self, e: f64) -> Self {
        Self::new_power(e).compose(self)
    }

    /// Returns true if this expression **is** the zero singleton.
    pub fn is_zero(&self) -> bool {
        Arc::ptr_eq(&self.0, &ZERO.0)
    }

    /// Returns true if this expression **is** the one singleton.
    pub fn is_one(&self) -> bool {
        Arc::ptr_eq(&self.0, &ONE.0)
    }

    /// Returns true if this expression **is** the minus-one singleton.
    pub fn is_minus_one(&self) -> bool {
        Arc::ptr_eq(&self.0, &MINUS_ONE.0)
    }

    /// If the expression is a [`Node::Constant`], returns the contained value.
    pub fn as_constant(&self) -> Option<f64> {
        match self.node() {
            Node::Constant(c) => Some(*c),
            _ => None,
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }

    /// Returns the number of nodes in the tree. Shared sub-trees are counted once per occurrence.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }
}

/// Adds two [`Expr`]s together. No simplification is done.
impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new_sum(self, rhs)
    }
}

/// Multiplies two [`Expr`]s together. No simplification is done.
impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new_product(self, rhs)
    }
}

/// Multiplies this expression by the minus-one singleton.
impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new_product(Self::minus_one(), self)
    }
}
