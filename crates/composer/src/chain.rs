/// A single step in a homogeneous chain.
pub type Stage<T> = Box<dyn Fn(T) -> T>;

/// Collapses an ordered list of stages into one function that applies them
/// right-to-left (last stage first), like nested [`compose`](crate::compose) calls.
///
/// An empty list yields the identity function and a single stage behaves as that
/// stage alone. The list is captured by value, so mutating the variable it came
/// from afterwards cannot change a chain that was already built.
pub fn compose_all<T>(stages: Vec<Stage<T>>) -> impl Fn(T) -> T {
    move |x: T| stages.iter().rev().fold(x, |acc, stage| stage(acc))
}

/// Left-to-right counterpart of [`compose_all`]: the first stage in the list runs first.
pub fn pipe_all<T>(stages: Vec<Stage<T>>) -> impl Fn(T) -> T {
    move |x: T| stages.iter().fold(x, |acc, stage| stage(acc))
}
