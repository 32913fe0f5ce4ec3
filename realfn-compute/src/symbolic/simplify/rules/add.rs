//! Simplification rules for sums.

use log::trace;
use crate::symbolic::{expr::Expr, simplify::step::Step, step_collector::StepCollector};
use super::constant::folded;

/// `2+3 = 5`
pub fn add_constants(
    f: &Expr,
    g: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    let sum = f.as_constant()? + g.as_constant()?;
    trace!("folding {} + {} into {}", f, g, sum);
    step_collector.push(Step::AddConstants);
    Some(folded(sum, step_collector))
}

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(
    f: &Expr,
    g: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    let other = if f.is_zero() {
        g
    } else if g.is_zero() {
        f
    } else {
        return None;
    };

    step_collector.push(Step::AddZero);
    Some(other.clone())
}

/// Applies all addition rules to the simplified terms `f` and `g`.
pub fn all(f: &Expr, g: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_constants(f, g, step_collector)
        .or_else(|| add_zero(f, g, step_collector))
}
