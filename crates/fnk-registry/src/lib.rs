//! `fnk-registry` stores heterogeneous values behind one erased
//! representation with type-checked recovery at lookup time, and provides
//! the indirection — boxed or arena-backed — that lets a variant type
//! contain itself.
//!
//! Absence is the uniform failure mode: a missing key and a stored value of
//! a different type both come back as `None` from [`Registry::get`]. Hosts
//! that need the cause use [`Registry::try_get`].
//!
//! ## Examples
//!
//! ```
//! use fnk_registry::Registry;
//!
//! fn increment(a: i32) -> i32 {
//!     a + 100
//! }
//!
//! let mut registry = Registry::new();
//! registry.store("f", increment as fn(i32) -> i32);
//!
//! let f = registry.get::<fn(i32) -> i32>("f").unwrap();
//! assert_eq!(f(42), 142);
//! assert!(registry.get::<fn(String) -> String>("f").is_none());
//! assert!(registry.get::<fn(i32) -> i32>("g").is_none());
//! ```
//!
//! Recursive trees use fixed-size indirection per self-referential field:
//!
//! ```
//! use fnk_registry::{Bindings, Expr};
//!
//! let rule = Expr::not(Expr::and(Expr::var("a"), Expr::var("b")));
//! let mut bindings = Bindings::default();
//! bindings.insert("a".into(), true);
//! bindings.insert("b".into(), false);
//!
//! assert_eq!(rule.eval(&bindings), Ok(true));
//! ```
mod arena;
mod erased;
mod flat;
mod key;
mod node;
mod registry;

pub use arena::{Arena, ArenaId};
pub use erased::Erased;
pub use flat::{ExprId, ExprPool, FlatExpr};
pub use key::Key;
pub use node::{Bindings, BinaryOp, EvalError, Expr, MAX_LOOP_ITERATIONS, Stmt, UnaryOp};
pub use registry::{LookupError, Registry};

#[cfg(not(feature = "sync"))]
pub type Shared<T> = std::rc::Rc<T>;

#[cfg(feature = "sync")]
pub type Shared<T> = std::sync::Arc<T>;

#[cfg(not(feature = "sync"))]
pub type SharedCell<T> = std::cell::RefCell<T>;

#[cfg(feature = "sync")]
pub type SharedCell<T> = std::sync::RwLock<T>;

/// A registry behind shared ownership and interior mutability.
///
/// The registry is the only stateful component here; a concurrent host must
/// serialize access to it. Built with the `sync` feature this alias becomes
/// `Arc<RwLock<Registry>>` and stored values must be `Send + Sync`.
pub type SharedRegistry = Shared<SharedCell<Registry>>;
