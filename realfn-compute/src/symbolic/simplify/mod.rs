//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which produces an equivalent expression with
//! fewer nodes. Simplification works bottom-up: the children of a node are simplified first, then
//! the rules for the node's kind are tried on the simplified children. Each node is visited once.
//!
//! The rules are deliberately small:
//!
//! - constants equal to `0`, `1` or `-1` become the canonical singletons
//! - sums of two constants, and products of two constants, are folded
//! - `0` is absorbed by sums, and absorbs products
//! - `1` is absorbed by products
//! - `x^0` becomes `1`, and `x^1` becomes `x`
//!
//! Compositions only have their children simplified. The result of [`simplify`] is a fixed point:
//! simplifying it again produces an equal expression.

pub mod rules;
pub mod step;

use log::debug;
use step::Step;
use super::{expr::{Expr, Node}, step_collector::StepCollector};

/// Base implementation of the simplification algorithm.
fn inner_simplify(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match expr.node() {
        Node::Constant(_) => rules::constant::canonical_constant(expr, step_collector)
            .unwrap_or_else(|| expr.clone()),
        Node::Identity | Node::Named(_) => expr.clone(),
        Node::Sum(f, g) => {
            let f = inner_simplify(f, step_collector);
            let g = inner_simplify(g, step_collector);
            rules::add::all(&f, &g, step_collector)
                .unwrap_or_else(|| Expr::new_sum(f, g))
        },
        Node::Product(product) => {
            let f = inner_simplify(product.lhs(), step_collector);
            let g = inner_simplify(product.rhs(), step_collector);
            rules::multiply::all(&f, &g, step_collector)
                .unwrap_or_else(|| Expr::new_product(f, g))
        },
        Node::Composition(outer, inner) => Expr::new_composition(
            inner_simplify(outer, step_collector),
            inner_simplify(inner, step_collector),
        ),
        Node::Power(e) => rules::power::all(*e, step_collector)
            .unwrap_or_else(|| expr.clone()),
    }
}

/// Simplifies the given expression.
pub fn simplify(expr: &Expr) -> Expr {
    let simplified = inner_simplify(expr, &mut ());
    debug!("simplified {} nodes into {}", expr.node_count(), simplified.node_count());
    simplified
}

/// Simplifies the given expression. The steps taken by the simplifier will also be collected and
/// returned, in the order they were applied. This is useful for debugging, and also for
/// displaying the steps taken to the user.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps: Vec<Step> = Vec::new();
    let simplified = inner_simplify(expr, &mut steps);
    debug!(
        "simplified {} nodes into {} in {} steps",
        expr.node_count(),
        simplified.node_count(),
        steps.len(),
    );
    (simplified, steps)
}

impl Expr {
    /// Simplifies this expression. See [`simplify`] for details.
    pub fn simplify(&self) -> Expr {
        simplify(self)
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::identity()
    }

    /// The example functions used throughout the tests, along with their first few derivatives.
    fn corpus() -> Vec<Expr> {
        let functions = vec![
            Expr::constant(2.0).product(x().power(2.0)).sum(x()),
            x().power(3.0).sum(Expr::log().compose(Expr::sin().compose(x()))),
            Expr::sin().compose(Expr::cos().compose(Expr::log())),
            Expr::cos().power(-1.0).product(Expr::sin()),
            Expr::sin().power(2.0).product(Expr::cos().compose(x().power(2.0))),
            Expr::constant(1.0) + Expr::constant(-1.0),
            Expr::constant(0.0) * Expr::exp() + Expr::new_power(0.0),
        ];

        functions.iter()
            .flat_map(|f| (0..4).map(move |n| f.nth_derivative(n)))
            .collect()
    }

    #[test]
    fn idempotent() {
        for expr in corpus() {
            let once = expr.simplify();
            let twice = once.simplify();
            assert_eq!(twice, once);
            assert_eq!(twice.to_string(), once.to_string());

            let (_, steps) = simplify_with_steps(&once);
            assert_eq!(steps, vec![], "{} is not a fixed point", once);
        }
    }

    #[test]
    fn preserves_values() {
        for expr in corpus() {
            let simplified = expr.simplify();
            assert!(simplified.node_count() <= expr.node_count());
            for point in [0.3, 0.7, 1.2, 2.9] {
                let a = expr.eval(point);
                let b = simplified.eval(point);
                assert_float_absolute_eq!(a, b, 1e-9 * a.abs().max(1.0));
            }
        }
    }

    #[test]
    fn zero_absorption() {
        let g = Expr::sin().compose(x() + Expr::exp());
        let simplified = Expr::new_product(Expr::zero(), g.clone()).simplify();
        assert!(simplified.is_zero());
        assert_eq!(simplified.to_string(), Expr::zero().to_string());

        let simplified = Expr::new_product(g, Expr::constant(0.0)).simplify();
        assert!(simplified.is_zero());
    }

    #[test]
    fn identity_absorption() {
        let g = Expr::constant(1.0) * Expr::cos().power(1.0) + Expr::constant(0.0);
        let simplified = Expr::new_product(Expr::one(), g.clone()).simplify();
        assert_eq!(simplified.to_string(), g.simplify().to_string());
        assert_eq!(simplified.to_string(), "cos(x)");
    }

    #[test]
    fn constant_folding() {
        let sum = (Expr::constant(2.0) + Expr::constant(3.0)).simplify();
        let product = (Expr::constant(2.0) * Expr::constant(3.0)).simplify();
        for point in [-10.0, 0.0, 1.0, 42.0] {
            assert_eq!(sum.eval(point), 5.0);
            assert_eq!(product.eval(point), 6.0);
        }
        assert_eq!(sum, Expr::constant(5.0));
        assert_eq!(product, Expr::constant(6.0));
    }

    #[test]
    fn folded_constants_are_canonical() {
        let (simplified, steps) = simplify_with_steps(&(Expr::one() + Expr::minus_one()));
        assert!(simplified.is_zero());
        assert_eq!(steps, vec![Step::AddConstants, Step::CanonicalConstant]);

        // the canonical zero then absorbs the enclosing product
        let f = (Expr::one() + Expr::minus_one()) * Expr::log();
        assert!(f.simplify().is_zero());
    }

    #[test]
    fn nested_folding() {
        // (2 * 3) * (1 + 4) folds all the way down
        let f = (Expr::constant(2.0) * Expr::constant(3.0))
            * (Expr::constant(1.0) + Expr::constant(4.0));
        assert_eq!(f.simplify(), Expr::constant(30.0));
    }

    #[test]
    fn powers() {
        assert!(Expr::new_power(0.0).simplify().is_one());
        assert_eq!(Expr::new_power(1.0).simplify(), x());
        assert_eq!(Expr::new_power(2.5).simplify(), Expr::new_power(2.5));
        assert_eq!(Expr::sin().power(1.0).simplify().to_string(), "sin(x)");
    }

    #[test]
    fn compositions_are_not_folded() {
        let f = x().compose(x());
        assert_eq!(f.simplify(), f);

        let g = Expr::sin().compose(Expr::constant(1.0) * x());
        assert_eq!(g.simplify(), Expr::sin().compose(x()));
    }

    #[test]
    fn leaves_are_unchanged() {
        for leaf in [x(), Expr::exp(), Expr::log(), Expr::sin(), Expr::cos(), Expr::constant(2.0)] {
            assert_eq!(leaf.simplify(), leaf);
        }
    }

    #[test]
    fn derivative_of_polynomial() {
        // (2x^2 + x)' = 4x + 1
        let f = Expr::constant(2.0).product(x().power(2.0)).sum(x());
        let (df, steps) = simplify_with_steps(&f.derivative());
        assert_eq!(df.to_string(), "2 * 2 * x + 1");
        assert_eq!(df.eval(1.0), 5.0);
        assert_eq!(steps, vec![
            Step::MultiplyZero,
            Step::PowerOne,
            Step::MultiplyOne,
            Step::AddZero,
        ]);
    }

    #[test]
    fn cosine_derivative() {
        let (d, steps) = simplify_with_steps(&Expr::cos().derivative());
        assert_eq!(d.to_string(), "-sin(x)");
        assert_eq!(steps, vec![]);
    }
}
