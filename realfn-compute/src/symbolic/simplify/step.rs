/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `0`, `1` and `-1` are replaced by their canonical instances
    CanonicalConstant,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `2+3 = 5`
    AddConstants,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `2*3 = 6`
    MultiplyConstants,

    /// `x^0 = 1`
    PowerZero,

    /// `x^1 = x`
    PowerOne,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::CanonicalConstant => "use the canonical constant",
            Self::AddZero => "0 + a = a",
            Self::AddConstants => "fold the sum of two constants",
            Self::MultiplyZero => "0 * a = 0",
            Self::MultiplyOne => "1 * a = a",
            Self::MultiplyConstants => "fold the product of two constants",
            Self::PowerZero => "x^0 = 1",
            Self::PowerOne => "x^1 = x",
        };
        f.write_str(text)
    }
}
