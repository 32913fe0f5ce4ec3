//! Symbolic manipulation of single-variable real functions.
//!
//! # Expression representation
//!
//! Functions are represented as a tree of [`Expr`] handles, each pointing at an immutable
//! [`Node`]. Unlike a general computer-algebra expression, there are no named variables: every
//! node is itself a function of one real argument, and trees are combined with sums, products
//! and compositions. For example, `sin(x^2)` is the composition of [`Expr::sin`] with the square
//! of the identity function:
//!
//! ```
//! use realfn_compute::symbolic::Expr;
//!
//! let f = Expr::sin().compose(Expr::identity().power(2.0));
//! assert_eq!(f.to_string(), "sin(x^2)");
//! assert_eq!(f.eval(0.0), 0.0);
//! ```
//!
//! Children are shared through reference counting, so cloning an [`Expr`] is cheap and trees
//! can be evaluated from several threads at once.
//!
//! # Differentiation
//!
//! [`Expr::derivative`] returns a brand new tree built with the sum, product and chain rules. The
//! receiver is never modified. Derivative trees are not simplified as they are built, so
//! repeated differentiation grows quickly unless [`simplify()`] is applied in between (see
//! [`Expr::nth_derivative_simplified`]).
//!
//! # Simplification
//!
//! [`simplify()`] rewrites a tree bottom-up, absorbing multiplications by `0` and `1`, additions
//! of `0`, and folding arithmetic on constants. It is a single pass and is idempotent: simplifying
//! an already simplified tree returns an equivalent tree that renders identically.
//!
//! ```
//! use realfn_compute::symbolic::{simplify, Expr};
//!
//! let f = Expr::constant(2.0) * Expr::constant(3.0) + Expr::zero();
//! assert_eq!(simplify(&f).to_string(), "6");
//! ```
//!
//! For more information, see the [`mod@simplify`] module.

pub mod derivative;
pub mod expr;
pub mod simplify;
pub mod step_collector;

pub use expr::{Expr, Named, Node};
pub use simplify::{simplify, simplify_with_steps};
pub use step_collector::StepCollector;
