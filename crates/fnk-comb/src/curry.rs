/// A boxed single-argument callable, the link type of a curried chain.
///
/// An N-ary function curries into `Fun<A1, Fun<A2, ... Fun<AN, R>>>`;
/// supplying all N arguments in order reproduces the direct call.
pub type Fun<A, B> = Box<dyn Fn(A) -> B>;

/// Curries a binary function into a chain of two single-argument calls.
///
/// Arguments bound so far are captured by value and cloned on every
/// invocation, so each partial application is an independent chain that can
/// be called any number of times. `f` itself runs only once the final
/// argument arrives.
///
/// # Examples
///
/// ```
/// use fnk_comb::curry2;
///
/// let concat = curry2(|a: i32, b: String| format!("{} and {}", a, b));
/// assert_eq!(concat(99)("love".to_string()), "99 and love");
/// ```
pub fn curry2<A, B, R, F>(f: F) -> Fun<A, Fun<B, R>>
where
    F: Fn(A, B) -> R + Clone + 'static,
    A: Clone + 'static,
    B: 'static,
    R: 'static,
{
    Box::new(move |a: A| -> Fun<B, R> {
        let f = f.clone();
        Box::new(move |b: B| f(a.clone(), b))
    })
}

/// Curries a ternary function into a chain of three single-argument calls.
pub fn curry3<A, B, C, R, F>(f: F) -> Fun<A, Fun<B, Fun<C, R>>>
where
    F: Fn(A, B, C) -> R + Clone + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    R: 'static,
{
    Box::new(move |a: A| -> Fun<B, Fun<C, R>> {
        let f = f.clone();
        Box::new(move |b: B| -> Fun<C, R> {
            let f = f.clone();
            let a = a.clone();
            Box::new(move |c: C| f(a.clone(), b.clone(), c))
        })
    })
}

/// Curries a 4-ary function into a chain of four single-argument calls.
pub fn curry4<A, B, C, D, R, F>(f: F) -> Fun<A, Fun<B, Fun<C, Fun<D, R>>>>
where
    F: Fn(A, B, C, D) -> R + Clone + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    D: 'static,
    R: 'static,
{
    Box::new(move |a: A| -> Fun<B, Fun<C, Fun<D, R>>> {
        let f = f.clone();
        Box::new(move |b: B| -> Fun<C, Fun<D, R>> {
            let f = f.clone();
            let a = a.clone();
            Box::new(move |c: C| -> Fun<D, R> {
                let f = f.clone();
                let a = a.clone();
                let b = b.clone();
                Box::new(move |d: D| f(a.clone(), b.clone(), c.clone(), d))
            })
        })
    })
}

/// Curries a 5-ary function into a chain of five single-argument calls.
pub fn curry5<A, B, C, D, E, R, F>(f: F) -> Fun<A, Fun<B, Fun<C, Fun<D, Fun<E, R>>>>>
where
    F: Fn(A, B, C, D, E) -> R + Clone + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    D: Clone + 'static,
    E: 'static,
    R: 'static,
{
    Box::new(move |a: A| -> Fun<B, Fun<C, Fun<D, Fun<E, R>>>> {
        let f = f.clone();
        Box::new(move |b: B| -> Fun<C, Fun<D, Fun<E, R>>> {
            let f = f.clone();
            let a = a.clone();
            Box::new(move |c: C| -> Fun<D, Fun<E, R>> {
                let f = f.clone();
                let a = a.clone();
                let b = b.clone();
                Box::new(move |d: D| -> Fun<E, R> {
                    let f = f.clone();
                    let a = a.clone();
                    let b = b.clone();
                    let c = c.clone();
                    Box::new(move |e: E| f(a.clone(), b.clone(), c.clone(), d.clone(), e))
                })
            })
        })
    })
}
