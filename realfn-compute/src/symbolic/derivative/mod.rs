//! Symbolic differentiation.
//!
//! Each kind of node has its own rule, and combinators apply their rule recursively to their
//! children. The returned tree reuses sub-trees of the original, which is never modified.
//!
//! Derivatives are **not** simplified while they are built. Every sum, product and composition
//! roughly doubles in size with each derivative, so for higher-order derivatives, prefer
//! [`Expr::nth_derivative_simplified`].

mod function;

use log::debug;
use crate::symbolic::expr::{Expr, Node, Product};

/// `(f + g)' = f' + g'`
fn sum_rule(f: &Expr, g: &Expr) -> Expr {
    Expr::new_sum(f.derivative(), g.derivative())
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(product: &Product) -> Expr {
    if product.is_zero() {
        return Expr::zero();
    }

    let (f, g) = (product.lhs(), product.rhs());
    Expr::new_sum(
        Expr::new_product(f.derivative(), g.clone()),
        Expr::new_product(f.clone(), g.derivative()),
    )
}

/// `f(g(x))' = f'(g(x)) * g'(x)`
fn chain_rule(f: &Expr, g: &Expr) -> Expr {
    Expr::new_product(
        Expr::new_composition(f.derivative(), g.clone()),
        g.derivative(),
    )
}

/// `(x^e)' = e * x^(e - 1)`
fn power_rule(e: f64) -> Expr {
    // `x^0` is the constant 1
    if e == 0.0 {
        return Expr::zero();
    }

    Expr::new_product(Expr::constant(e), Expr::new_power(e - 1.0))
}

impl Expr {
    /// Computes the derivative of this function.
    pub fn derivative(&self) -> Expr {
        match self.node() {
            Node::Constant(_) => Expr::zero(),
            Node::Identity => Expr::one(),
            Node::Named(named) => function::named_derivative(self, *named),
            Node::Sum(f, g) => sum_rule(f, g),
            Node::Product(product) => product_rule(product),
            Node::Composition(f, g) => chain_rule(f, g),
            Node::Power(e) => power_rule(*e),
        }
    }

    /// Computes the `n`-th derivative of this function, without simplifying. The 0th derivative
    /// is the function itself.
    pub fn nth_derivative(&self, n: usize) -> Expr {
        let mut expr = self.clone();
        for _ in 0..n {
            expr = expr.derivative();
        }
        debug!("derivative of order {} has {} nodes", n, expr.node_count());
        expr
    }

    /// Computes the `n`-th derivative of this function, simplifying after every differentiation
    /// to keep the size of the tree under control.
    pub fn nth_derivative_simplified(&self, n: usize) -> Expr {
        let mut expr = self.clone();
        for order in 1..=n {
            expr = expr.derivative().simplify();
            debug!("simplified derivative of order {} has {} nodes", order, expr.node_count());
        }
        expr
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use super::*;

    /// Performs finite difference to approximate the derivative of the provided expression.
    fn finite_difference(e: &Expr, x: f64) -> f64 {
        const DX: f64 = 1e-6;
        (e.eval(x + DX) - e.eval(x - DX)) / (2.0 * DX)
    }

    fn test_for_function(f: &Expr, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 1e-4;

        let symbolic = f.derivative();
        let simplified = symbolic.simplify();
        for point in points.into_iter() {
            let symbolically_computed = symbolic.eval(point);
            let numerically_computed = finite_difference(f, point);

            assert!((symbolically_computed - numerically_computed).abs() < TOL, "For \"{f}\" at x={point}, symbolically computed derivative was {symbolically_computed} but numerically computed derivative was {numerically_computed}, which was out of tolerance {TOL}");
            assert_abs_diff_eq!(simplified.eval(point), symbolically_computed, epsilon = 1e-9);
        }
    }

    fn x() -> Expr {
        Expr::identity()
    }

    #[test]
    fn power_rule() {
        // 2x^2 + x
        let f = Expr::constant(2.0).product(x().power(2.0)).sum(x());
        test_for_function(&f, [0., 1., 2., 5., 8.]);
        assert_eq!(f.derivative().eval(1.0), 5.0);
    }

    #[test]
    fn cubic() {
        let df = x().power(3.0).derivative();
        assert_eq!(df.eval(0.0), 0.0);
        assert_eq!(df.eval(1.0), 3.0);
        assert_eq!(df.eval(2.0), 12.0);
    }

    #[test]
    fn fractional_and_negative_powers() {
        test_for_function(&x().power(0.5), [0.5, 1., 4., 9.]);
        test_for_function(&x().power(-2.0), [0.5, 1., 3.]);
        test_for_function(&Expr::sin().power(-1.0), [0.5, 1., 2.]);
    }

    #[test]
    fn named_functions() {
        test_for_function(&Expr::exp(), [-1., 0., 1., 2.]);
        test_for_function(&Expr::log(), [0.5, 1., 2., 10.]);
        test_for_function(&Expr::sin(), [-1., 0., 1., 2.]);
        test_for_function(&Expr::cos(), [-1., 0., 1., 2.]);
    }

    #[test]
    fn chain_rule() {
        // sin(cos(log(x)))
        let f = Expr::sin().compose(Expr::cos().compose(Expr::log()));
        test_for_function(&f, [0.5, 1., 2., 3.]);

        // x^3 + log(sin(x))
        let g = x().power(3.0).sum(Expr::log().compose(Expr::sin().compose(x())));
        test_for_function(&g, [0.5, 1., 1.5, 2.5]);
    }

    #[test]
    fn product_rule() {
        // tan(x) = cos(x)^-1 * sin(x)
        let tan = Expr::cos().power(-1.0).product(Expr::sin());
        test_for_function(&tan, [-1., 0., 0.5, 1.]);

        // sin(x)^2 * cos(x^2)
        let f = Expr::sin().power(2.0).product(Expr::cos().compose(x().power(2.0)));
        test_for_function(&f, [-1., 0., 0.5, 1., 2.]);
    }

    #[test]
    fn second_derivative_of_tangent() {
        let tan = Expr::cos().power(-1.0).product(Expr::sin());
        let d2 = tan.nth_derivative(2);
        let d1 = tan.derivative();
        for point in [-1., 0., 0.5, 1.] {
            assert_abs_diff_eq!(d2.eval(point), finite_difference(&d1, point), epsilon = 1e-4);
        }
    }

    #[test]
    fn derivatives_do_not_mutate() {
        let f = Expr::sin().power(2.0).product(Expr::exp());
        let before = f.to_string();
        let _ = f.nth_derivative(3);
        assert_eq!(f.to_string(), before);
    }

    #[test]
    fn leaf_derivatives_are_singletons() {
        assert!(Expr::constant(5.0).derivative().is_zero());
        assert!(x().derivative().is_one());
        assert!(Expr::new_power(0.0).derivative().is_zero());
        assert!(Expr::new_power(0.0).derivative().simplify().is_zero());
        assert!(Expr::zero().product(Expr::log()).derivative().is_zero());
    }

    #[test]
    fn power_derivative_shape() {
        let df = Expr::new_power(3.0).derivative();
        assert_eq!(df, Expr::new_product(Expr::constant(3.0), Expr::new_power(2.0)));
        assert_eq!(df.to_string(), "3 * x^2");
    }

    #[test]
    fn derivative_of_constant_sum() {
        let f = Expr::constant(2.0) + Expr::constant(3.0);
        let df = f.derivative();
        assert_eq!(df.to_string(), "0 + 0");
        assert!(df.simplify().is_zero());
    }

    #[test]
    fn repeated_differentiation() {
        let f = Expr::sin().power(2.0).product(Expr::cos().compose(x().power(2.0)));
        let unsimplified = f.nth_derivative(4);
        let simplified = f.nth_derivative_simplified(4);

        assert!(simplified.node_count() < unsimplified.node_count());
        for point in [-1., 0., 0.5, 1.] {
            let a = unsimplified.eval(point);
            let b = simplified.eval(point);
            assert_abs_diff_eq!(a, b, epsilon = 1e-9 * a.abs().max(1.0));
        }
    }

    #[test]
    fn zeroth_derivative_is_identity() {
        let f = Expr::exp() + Expr::sin();
        assert_eq!(f.nth_derivative(0), f);
        assert_eq!(f.nth_derivative_simplified(0), f);
    }
}
