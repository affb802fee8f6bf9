/// Applies an optional function to an optional argument.
///
/// Returns `Some(f(x))` if and only if both operands are present; otherwise
/// `None`, without ever invoking `f`. Chained left-to-right over a curried
/// constructor, this assembles a multi-field value that exists only when
/// every field does.
///
/// Presence is the only concern here: a function that is present but panics
/// when called is the caller's problem, not this combinator's.
///
/// # Examples
///
/// ```
/// use fnk_comb::{apply, curry2};
///
/// let mk_pair = curry2(|a: i32, b: i32| (a, b));
/// assert_eq!(apply(apply(Some(mk_pair), Some(1)), Some(2)), Some((1, 2)));
///
/// let mk_pair = curry2(|a: i32, b: i32| (a, b));
/// assert_eq!(apply(apply(Some(mk_pair), None), Some(2)), None);
/// ```
pub fn apply<A, B, F>(f: Option<F>, x: Option<A>) -> Option<B>
where
    F: FnOnce(A) -> B,
{
    match (f, x) {
        (Some(f), Some(x)) => Some(f(x)),
        _ => None,
    }
}
