use super::{Expr, Node};

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    /// Expressions left to visit, along with whether their children were already pushed.
    stack: Vec<(&'a Expr, bool)>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![(expr, false)],
        }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (expr, expanded) = self.stack.pop()?;
            if expanded {
                return Some(expr);
            }

            match expr.node() {
                Node::Constant(_) | Node::Identity | Node::Named(_) | Node::Power(_) => {
                    return Some(expr);
                },
                Node::Sum(lhs, rhs) | Node::Composition(lhs, rhs) => {
                    self.stack.push((expr, true));
                    self.stack.push((rhs, false));
                    self.stack.push((lhs, false));
                },
                Node::Product(product) => {
                    self.stack.push((expr, true));
                    self.stack.push((product.rhs(), false));
                    self.stack.push((product.lhs(), false));
                },
            }
        }
    }
}
