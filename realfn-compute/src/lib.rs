//! Symbolic computation on single-variable real functions.
//!
//! Functions are built as immutable expression trees out of constants, the identity function,
//! the named elementary functions (`exp`, `log`, `sin`, `cos`), and the combinators sum,
//! product, composition and power. Every tree can be evaluated at a point, differentiated
//! symbolically, simplified, and rendered as text.
//!
//! ```
//! use realfn_compute::symbolic::Expr;
//!
//! // 2x^2 + x
//! let f = Expr::constant(2.0)
//!     .product(Expr::identity().power(2.0))
//!     .sum(Expr::identity());
//! assert_eq!(f.to_string(), "2 * x^2 + x");
//!
//! let df = f.derivative().simplify();
//! assert_eq!(df.eval(1.0), 5.0);
//! ```
//!
//! # Features
//!
//! - `numerical` (default): numerical helpers such as finite differences and parallel sampling
//! of an expression over an interval.

pub mod consts;
pub mod numerical;
pub mod symbolic;
