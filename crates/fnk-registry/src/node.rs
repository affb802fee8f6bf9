use std::fmt;

use itertools::Itertools;
use miette::Diagnostic;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use smol_str::SmolStr;
use thiserror::Error;

/// Variable bindings visible during evaluation and execution.
pub type Bindings = FxHashMap<SmolStr, bool>;

/// Iteration cap for [`Stmt::exec`] loops, keeping execution total.
pub const MAX_LOOP_ITERATIONS: u32 = 100_000;

#[derive(Debug, Error, Diagnostic, PartialEq)]
pub enum EvalError {
    #[error("variable \"{0}\" is not bound")]
    #[diagnostic(code(fnk::node::unbound))]
    Unbound(SmolStr),
    #[error("loop exceeded {0} iterations")]
    #[diagnostic(
        code(fnk::node::loop_limit),
        help("the guard expression never became false")
    )]
    LoopLimit(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    And,
    Iff,
}

/// A boolean expression tree.
///
/// Self-referential cases hold their children through `Box`, giving the
/// field a fixed size no matter how deep the tree grows. Each node owns its
/// boxed children exclusively; trees are acyclic by construction since a
/// child must exist before the node that takes ownership of it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Var(SmolStr),
    Lit(bool),
    Unary(UnaryOp, Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<SmolStr>) -> Self {
        Expr::Var(name.into())
    }

    pub fn lit(value: bool) -> Self {
        Expr::Lit(value)
    }

    pub fn not(operand: Expr) -> Self {
        Expr::Unary(UnaryOp::Not, Box::new(operand))
    }

    pub fn and(left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryOp::And, Box::new(left), Box::new(right))
    }

    pub fn iff(left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryOp::Iff, Box::new(left), Box::new(right))
    }

    /// Evaluates the expression under `env`.
    ///
    /// Both operands of a binary node are evaluated, so cost is linear in
    /// [`Expr::size`] and an unbound variable is reported wherever it
    /// appears.
    pub fn eval(&self, env: &Bindings) -> Result<bool, EvalError> {
        match self {
            Expr::Var(name) => env
                .get(name)
                .copied()
                .ok_or_else(|| EvalError::Unbound(name.clone())),
            Expr::Lit(value) => Ok(*value),
            Expr::Unary(UnaryOp::Not, operand) => Ok(!operand.eval(env)?),
            Expr::Binary(op, left, right) => {
                let left = left.eval(env)?;
                let right = right.eval(env)?;
                Ok(match op {
                    BinaryOp::And => left && right,
                    BinaryOp::Iff => left == right,
                })
            }
        }
    }

    /// Number of self-referential hops on the longest path to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Var(_) | Expr::Lit(_) => 0,
            Expr::Unary(_, operand) => 1 + operand.depth(),
            Expr::Binary(_, left, right) => 1 + left.depth().max(right.depth()),
        }
    }

    /// Total node count.
    pub fn size(&self) -> usize {
        match self {
            Expr::Var(_) | Expr::Lit(_) => 1,
            Expr::Unary(_, operand) => 1 + operand.size(),
            Expr::Binary(_, left, right) => 1 + left.size() + right.size(),
        }
    }

    /// Distinct variable names referenced, in first-use order.
    pub fn vars(&self) -> SmallVec<[SmolStr; 4]> {
        fn collect(expr: &Expr, into: &mut SmallVec<[SmolStr; 4]>) {
            match expr {
                Expr::Var(name) => into.push(name.clone()),
                Expr::Lit(_) => {}
                Expr::Unary(_, operand) => collect(operand, into),
                Expr::Binary(_, left, right) => {
                    collect(left, into);
                    collect(right, into);
                }
            }
        }

        let mut names = SmallVec::new();
        collect(self, &mut names);
        names.into_iter().unique().collect()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Lit(value) => write!(f, "{}", value),
            Expr::Unary(UnaryOp::Not, operand) => write!(f, "!{}", operand),
            Expr::Binary(op, left, right) => {
                let op = match op {
                    BinaryOp::And => "&",
                    BinaryOp::Iff => "<->",
                };
                write!(f, "({} {} {})", left, op, right)
            }
        }
    }
}

/// A statement tree over boolean expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Nop,
    Assign(SmolStr, Expr),
    If(Expr, Box<Stmt>, Box<Stmt>),
    While(Expr, Box<Stmt>),
    Seq(Vec<Stmt>),
}

impl Stmt {
    pub fn assign(name: impl Into<SmolStr>, value: Expr) -> Self {
        Stmt::Assign(name.into(), value)
    }

    pub fn if_else(cond: Expr, then_branch: Stmt, else_branch: Stmt) -> Self {
        Stmt::If(cond, Box::new(then_branch), Box::new(else_branch))
    }

    pub fn while_loop(cond: Expr, body: Stmt) -> Self {
        Stmt::While(cond, Box::new(body))
    }

    pub fn seq(stmts: impl IntoIterator<Item = Stmt>) -> Self {
        Stmt::Seq(stmts.into_iter().collect())
    }

    /// Executes the statement, mutating `env`.
    ///
    /// Loops are capped at [`MAX_LOOP_ITERATIONS`] so execution stays total
    /// even for a guard that never turns false.
    pub fn exec(&self, env: &mut Bindings) -> Result<(), EvalError> {
        match self {
            Stmt::Nop => Ok(()),
            Stmt::Assign(name, value) => {
                let value = value.eval(env)?;
                env.insert(name.clone(), value);
                Ok(())
            }
            Stmt::If(cond, then_branch, else_branch) => {
                if cond.eval(env)? {
                    then_branch.exec(env)
                } else {
                    else_branch.exec(env)
                }
            }
            Stmt::While(cond, body) => {
                let mut iterations = 0u32;
                while cond.eval(env)? {
                    if iterations == MAX_LOOP_ITERATIONS {
                        return Err(EvalError::LoopLimit(MAX_LOOP_ITERATIONS));
                    }
                    iterations += 1;
                    body.exec(env)?;
                }
                Ok(())
            }
            Stmt::Seq(stmts) => {
                for stmt in stmts {
                    stmt.exec(env)?;
                }
                Ok(())
            }
        }
    }

    /// Total statement count, counting nested statements.
    pub fn size(&self) -> usize {
        match self {
            Stmt::Nop | Stmt::Assign(_, _) => 1,
            Stmt::If(_, then_branch, else_branch) => 1 + then_branch.size() + else_branch.size(),
            Stmt::While(_, body) => 1 + body.size(),
            Stmt::Seq(stmts) => 1 + stmts.iter().map(Stmt::size).sum::<usize>(),
        }
    }
}
