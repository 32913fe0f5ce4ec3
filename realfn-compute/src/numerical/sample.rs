//! Numerical estimation and sampling of expressions.

use crate::symbolic::Expr;
use rayon::prelude::*;

/// Estimates the derivative of `expr` at `x` with a forward difference of step `dx`.
///
/// This is useful to check a symbolic derivative against the function it was computed from.
pub fn finite_difference(expr: &Expr, x: f64, dx: f64) -> f64 {
    (expr.eval(x + dx) - expr.eval(x)) / dx
}

/// Evaluates `expr` at `steps + 1` evenly spaced points from `from` to `to`, both inclusive.
///
/// Points are evaluated in parallel, and returned in order as `(x, y)` pairs. If `steps` is zero,
/// only `from` is sampled. Points outside the domain of the function are returned as-is, with a
/// non-finite `y`.
pub fn sample(expr: &Expr, from: f64, to: f64, steps: usize) -> Vec<(f64, f64)> {
    if steps == 0 {
        return vec![(from, expr.eval(from))];
    }

    let step_len = (to - from) / steps as f64;
    (0..=steps)
        .into_par_iter()
        .map(|i| {
            let x = if i == steps { to } else { from + step_len * i as f64 };
            (x, expr.eval(x))
        })
        .collect()
}
