//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the already simplified parts of the
//! expression as arguments, and returns `Some(expr)` with the simplified expression if the rule
//! applies, or `None` if the rule does not apply. The caller rebuilds the node from its parts
//! when no rule applies.

pub mod add;
pub mod constant;
pub mod multiply;
pub mod power;
