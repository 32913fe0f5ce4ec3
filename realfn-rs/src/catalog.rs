//! The example functions available in the explorer.

use realfn_compute::symbolic::Expr;

/// An example function.
#[derive(Debug, Clone)]
pub struct Function {
    /// The name used to refer to the function in commands.
    pub name: &'static str,

    /// The function itself.
    pub expr: Expr,
}

fn x() -> Expr {
    Expr::identity()
}

/// `2x^2 + x`
fn poly() -> Expr {
    Expr::constant(2.0).product(x().power(2.0)).sum(x())
}

/// `x^3 + log(sin(x))`
fn cubic_log() -> Expr {
    x().power(3.0).sum(Expr::log().compose(Expr::sin().compose(x())))
}

/// `sin(cos(log(x)))`
fn nested() -> Expr {
    Expr::sin().compose(Expr::cos().compose(Expr::log()))
}

/// `tan(x)`, as `cos(x)^-1 * sin(x)`
fn tangent() -> Expr {
    Expr::cos().power(-1.0).product(Expr::sin())
}

/// `sin(x)^2 * cos(x^2)`
fn three() -> Expr {
    Expr::sin().power(2.0).product(Expr::cos().compose(x().power(2.0)))
}

const CATALOG: [(&str, fn() -> Expr); 5] = [
    ("poly", poly),
    ("cubic-log", cubic_log),
    ("nested", nested),
    ("tangent", tangent),
    ("three", three),
];

/// Returns the names of all functions in the catalog, in order.
pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(name, _)| *name)
}

/// Returns all functions in the catalog, in order.
pub fn all() -> Vec<Function> {
    CATALOG.iter()
        .map(|(name, build)| Function { name: *name, expr: build() })
        .collect()
}

/// Returns the function with the given name.
pub fn get(name: &str) -> Option<Function> {
    CATALOG.iter()
        .find(|(n, _)| *n == name)
        .map(|(name, build)| Function { name: *name, expr: build() })
}
