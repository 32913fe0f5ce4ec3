//! Simplification rules for the power function.

use crate::symbolic::{expr::Expr, simplify::step::Step, step_collector::StepCollector};

/// `x^0 = 1`
pub fn power_zero(e: f64, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if e == 0.0 {
        step_collector.push(Step::PowerZero);
        Some(Expr::one())
    } else {
        None
    }
}

/// `x^1 = x`
pub fn power_one(e: f64, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if e == 1.0 {
        step_collector.push(Step::PowerOne);
        Some(Expr::identity())
    } else {
        None
    }
}

/// Applies all power rules to `x^e`.
pub fn all(e: f64, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    power_zero(e, step_collector)
        .or_else(|| power_one(e, step_collector))
}
