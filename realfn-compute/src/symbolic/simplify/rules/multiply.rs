//! Simplification rules for products.

use log::trace;
use crate::symbolic::{expr::Expr, simplify::step::Step, step_collector::StepCollector};
use super::constant::folded;

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(
    f: &Expr,
    g: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    if f.is_zero() || g.is_zero() {
        step_collector.push(Step::MultiplyZero);
        Some(Expr::zero())
    } else {
        None
    }
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(
    f: &Expr,
    g: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    let other = if f.is_one() {
        g
    } else if g.is_one() {
        f
    } else {
        return None;
    };

    step_collector.push(Step::MultiplyOne);
    Some(other.clone())
}

/// `2*3 = 6`
pub fn multiply_constants(
    f: &Expr,
    g: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    let product = f.as_constant()? * g.as_constant()?;
    trace!("folding {} * {} into {}", f, g, product);
    step_collector.push(Step::MultiplyConstants);
    Some(folded(product, step_collector))
}

/// Applies all multiplication rules to the simplified factors `f` and `g`.
pub fn all(f: &Expr, g: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_zero(f, g, step_collector)
        .or_else(|| multiply_one(f, g, step_collector))
        .or_else(|| multiply_constants(f, g, step_collector))
}
