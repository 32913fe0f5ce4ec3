/// Receives each rewrite the simplifier applies, in the order it applies them.
///
/// Pass `()` to [`simplify`](super::simplify::simplify) the tree without keeping a record of the
/// rewrites, as [`Expr::nth_derivative_simplified`](super::Expr::nth_derivative_simplified) does
/// after every differentiation. Pass a `Vec` to keep the record, as the `steps` command of the
/// explorer does through [`simplify_with_steps`](super::simplify::simplify_with_steps).
pub trait StepCollector<S> {
    /// Records one rewrite.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
