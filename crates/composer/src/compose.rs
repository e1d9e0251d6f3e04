/// Composes two functions right-to-left: `compose(f, g)` is the function `x -> f(g(x))`.
///
/// Composing performs no calls itself. The supplied functions run only when the
/// returned closure is invoked, innermost (last argument) first.
pub fn compose<F, G, T, U, V>(f: F, g: G) -> impl Fn(T) -> V
where
    F: Fn(U) -> V,
    G: Fn(T) -> U,
{
    move |t: T| {
        let u: U = g(t);
        f(u)
    }
}

/// Three-stage [`compose`]: `compose3(f, g, h)` is `x -> f(g(h(x)))`.
pub fn compose3<F, G, H, T, U, V, W>(f: F, g: G, h: H) -> impl Fn(T) -> W
where
    F: Fn(V) -> W,
    G: Fn(U) -> V,
    H: Fn(T) -> U,
{
    compose(compose(f, g), h)
}

/// Four-stage [`compose`]: `compose4(f, g, h, i)` is `x -> f(g(h(i(x))))`.
pub fn compose4<F, G, H, I, T, U, V, W, X>(f: F, g: G, h: H, i: I) -> impl Fn(T) -> X
where
    F: Fn(W) -> X,
    G: Fn(V) -> W,
    H: Fn(U) -> V,
    I: Fn(T) -> U,
{
    compose(compose3(f, g, h), i)
}

/// [`compose`] over fallible functions. A stage that fails aborts the chain and
/// its error is returned to the caller unchanged; later (outer) stages never run.
pub fn try_compose<F, G, T, U, V, E>(f: F, g: G) -> impl Fn(T) -> Result<V, E>
where
    F: Fn(U) -> Result<V, E>,
    G: Fn(T) -> Result<U, E>,
{
    move |t: T| {
        let u: U = g(t)?;
        f(u)
    }
}
