//! `fnk-comb` provides currying combinators and an applicative combinator
//! over optional values.
//!
//! A curried function takes its arguments one at a time, each partial
//! application returning a standalone callable that can be stored, passed
//! around, and invoked later. The applicative combinator [`apply`] feeds
//! optional arguments into such a chain, producing a value only if every
//! operand is present.
//!
//! ## Examples
//!
//! ```
//! use fnk_comb::{apply, curry2, curry3};
//!
//! let triple = |a: i32, b: String, c: char| format!("{} {} {}", a, b, c);
//! let curried = curry3(triple);
//! assert_eq!(curried(101)("love".to_string())('!'), "101 love !");
//!
//! // Assemble a result only if every field is present.
//! let sum = apply(apply(Some(curry2(|a: i32, b: i32| a + b)), Some(1)), Some(2));
//! assert_eq!(sum, Some(3));
//!
//! let missing = apply(apply(Some(curry2(|a: i32, b: i32| a + b)), None), Some(2));
//! assert_eq!(missing, None);
//! ```
mod applicative;
mod curry;

pub use applicative::apply;
pub use curry::{Fun, curry2, curry3, curry4, curry5};
