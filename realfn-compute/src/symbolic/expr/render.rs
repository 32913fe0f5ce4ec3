//! Rendering of expressions as text.
//!
//! Rendering works by substitution: every node is rendered as a function of the text of its
//! argument, which starts out as `x`. A [`Node::Composition`] renders its outer function using
//! the rendering of its inner function as the argument, so `sin ∘ cos` renders as `sin(cos(x))`.
//!
//! Parentheses are only inserted where precedence requires them. Products also follow a few
//! conventions that make unsimplified derivatives readable, without changing the tree:
//!
//! - a factor that is the one singleton is omitted: `1 * f` renders as `f`
//! - a factor that is the minus-one singleton becomes a sign: `-1 * f` renders as `-f`
//! - a product marked as zero renders as `0`

use crate::numerical::fmt::{format_number, FormatOptions};
use std::fmt::{Display, Formatter};
use super::{Expr, Node};

/// The binding strength of a rendered expression, from loosest to tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Sum,
    Product,
    Power,
    Primary,
}

/// A rendered expression, along with its precedence.
#[derive(Debug, Clone)]
struct Rendered {
    text: String,
    precedence: Precedence,
}

impl Rendered {
    fn new(text: String, precedence: Precedence) -> Self {
        Self { text, precedence }
    }

    /// Returns the text, wrapped in parentheses if it binds less tightly than `min`.
    fn at_least(&self, min: Precedence) -> String {
        if self.precedence < min {
            format!("({})", self.text)
        } else {
            self.text.clone()
        }
    }

    /// Returns this expression with a leading minus sign.
    fn negate(&self) -> Self {
        let text = if self.precedence < Precedence::Product || self.text.starts_with('-') {
            format!("-({})", self.text)
        } else {
            format!("-{}", self.text)
        };
        Self::new(text, Precedence::Product)
    }
}

/// Renders `expr` as a function applied to `arg`.
fn render(expr: &Expr, arg: &Rendered, options: FormatOptions) -> Rendered {
    match expr.node() {
        Node::Constant(c) => {
            let text = format_number(*c, options);
            let precedence = if text.starts_with('-') {
                Precedence::Product
            } else {
                Precedence::Primary
            };
            Rendered::new(text, precedence)
        },
        Node::Identity => arg.clone(),
        Node::Named(named) => Rendered::new(
            format!("{}({})", named.name(), arg.text),
            Precedence::Primary,
        ),
        Node::Power(e) => {
            if *e == 1.0 {
                return arg.clone();
            }

            // exponents associate to the right, so a power base always needs parentheses
            let base = if arg.precedence <= Precedence::Power {
                format!("({})", arg.text)
            } else {
                arg.text.clone()
            };
            Rendered::new(format!("{}^{}", base, format_number(*e, options)), Precedence::Power)
        },
        Node::Sum(f, g) => {
            let f = render(f, arg, options);
            let g = render(g, arg, options);
            Rendered::new(format!("{} + {}", f.text, g.text), Precedence::Sum)
        },
        Node::Product(product) => {
            let (lhs, rhs) = (product.lhs(), product.rhs());
            if product.is_zero() {
                Rendered::new(format_number(0.0, options), Precedence::Primary)
            } else if lhs.is_one() {
                render(rhs, arg, options)
            } else if rhs.is_one() {
                render(lhs, arg, options)
            } else if lhs.is_minus_one() {
                render(rhs, arg, options).negate()
            } else if rhs.is_minus_one() {
                render(lhs, arg, options).negate()
            } else {
                let lhs = render(lhs, arg, options);
                let rhs = render(rhs, arg, options);
                Rendered::new(
                    format!("{} * {}", lhs.at_least(Precedence::Product), rhs.at_least(Precedence::Product)),
                    Precedence::Product,
                )
            }
        },
        Node::Composition(outer, inner) => {
            let inner = render(inner, arg, options);
            render(outer, &inner, options)
        },
    }
}

/// Formatter for an [`Expr`].
#[derive(Debug, Clone, Copy)]
pub struct ExprFormatter<'a> {
    /// The expression to format.
    pub expr: &'a Expr,

    /// The options to use when formatting numbers.
    pub options: FormatOptions,
}

impl Display for ExprFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let variable = Rendered::new(String::from("x"), Precedence::Primary);
        write!(f, "{}", render(self.expr, &variable, self.options).text)
    }
}

impl Expr {
    /// Returns a formatter that renders this expression with the given options.
    ///
    /// The [`Display`] implementation of [`Expr`] uses the default [`FormatOptions`].
    pub fn fmt(&self, options: FormatOptions) -> ExprFormatter<'_> {
        ExprFormatter { expr: self, options }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ExprFormatter { expr: self, options: FormatOptions::default() })
    }
}
