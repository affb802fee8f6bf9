use smol_str::SmolStr;

use crate::arena::{Arena, ArenaId};
use crate::node::{Bindings, BinaryOp, EvalError, Expr, UnaryOp};

/// Index of a [`FlatExpr`] inside its pool.
pub type ExprId = ArenaId<FlatExpr>;

/// Pool of flattened expression nodes.
pub type ExprPool = Arena<FlatExpr>;

/// A boolean expression node whose children are pool indices.
///
/// Ids are only handed out by [`Arena::alloc`], so every child exists before
/// the parent that refers to it and the pool stays tree-shaped. The index
/// gives each self-referential field a fixed size, like the `Box` in
/// [`Expr`], while keeping all nodes in one contiguous allocation.
#[derive(Debug, Clone, PartialEq)]
pub enum FlatExpr {
    Var(SmolStr),
    Lit(bool),
    Unary(UnaryOp, ExprId),
    Binary(BinaryOp, ExprId, ExprId),
}

impl Arena<FlatExpr> {
    /// Copies a boxed expression tree into the pool, children first, and
    /// returns the id of the root.
    pub fn lower(&mut self, expr: &Expr) -> ExprId {
        match expr {
            Expr::Var(name) => self.alloc(FlatExpr::Var(name.clone())),
            Expr::Lit(value) => self.alloc(FlatExpr::Lit(*value)),
            Expr::Unary(op, operand) => {
                let operand = self.lower(operand);
                self.alloc(FlatExpr::Unary(*op, operand))
            }
            Expr::Binary(op, left, right) => {
                let left = self.lower(left);
                let right = self.lower(right);
                self.alloc(FlatExpr::Binary(*op, left, right))
            }
        }
    }

    /// Evaluates the subtree rooted at `root` under `env`.
    ///
    /// Traversal is iterative and visits each reachable node once, so cost
    /// is linear in subtree size and nesting depth never touches the call
    /// stack.
    ///
    /// # Panics
    ///
    /// Panics if `root` or any child id does not belong to this pool.
    pub fn eval(&self, root: ExprId, env: &Bindings) -> Result<bool, EvalError> {
        enum Frame {
            Enter(ExprId),
            ExitUnary(UnaryOp),
            ExitBinary(BinaryOp),
        }

        let mut frames = vec![Frame::Enter(root)];
        let mut values: Vec<bool> = Vec::new();

        while let Some(frame) = frames.pop() {
            match frame {
                Frame::Enter(id) => match &self[id] {
                    FlatExpr::Var(name) => {
                        let value = env
                            .get(name)
                            .copied()
                            .ok_or_else(|| EvalError::Unbound(name.clone()))?;
                        values.push(value);
                    }
                    FlatExpr::Lit(value) => values.push(*value),
                    FlatExpr::Unary(op, operand) => {
                        frames.push(Frame::ExitUnary(*op));
                        frames.push(Frame::Enter(*operand));
                    }
                    FlatExpr::Binary(op, left, right) => {
                        frames.push(Frame::ExitBinary(*op));
                        frames.push(Frame::Enter(*right));
                        frames.push(Frame::Enter(*left));
                    }
                },
                // Exit frames run after their children, so the value stack
                // holds one value per completed subtree.
                Frame::ExitUnary(UnaryOp::Not) => {
                    let value = values.pop().unwrap();
                    values.push(!value);
                }
                Frame::ExitBinary(op) => {
                    let right = values.pop().unwrap();
                    let left = values.pop().unwrap();
                    values.push(match op {
                        BinaryOp::And => left && right,
                        BinaryOp::Iff => left == right,
                    });
                }
            }
        }

        Ok(values.pop().unwrap())
    }
}
