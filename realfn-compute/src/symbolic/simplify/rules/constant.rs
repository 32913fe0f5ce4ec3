//! Canonicalization of constants.

use log::trace;
use crate::symbolic::{expr::Expr, simplify::step::Step, step_collector::StepCollector};

/// Returns the canonical instance for the given value, if there is one.
fn canonical_instance(c: f64) -> Option<Expr> {
    // `-0.0 == 0.0`, so negative zero also becomes the zero singleton
    if c == 0.0 {
        Some(Expr::zero())
    } else if c == 1.0 {
        Some(Expr::one())
    } else if c == -1.0 {
        Some(Expr::minus_one())
    } else {
        None
    }
}

/// Replaces a constant equal to `0`, `1` or `-1` with the matching singleton. Does nothing if
/// `expr` already is that singleton.
pub fn canonical_constant(
    expr: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    if expr.is_zero() || expr.is_one() || expr.is_minus_one() {
        return None;
    }

    let canonical = canonical_instance(expr.as_constant()?)?;
    trace!("{} is a canonical constant", canonical);
    step_collector.push(Step::CanonicalConstant);
    Some(canonical)
}

/// Creates a constant holding the result of a fold, canonicalized if possible.
pub fn folded(c: f64, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match canonical_instance(c) {
        Some(canonical) => {
            step_collector.push(Step::CanonicalConstant);
            canonical
        },
        None => Expr::constant(c),
    }
}
