//! Building blocks for chaining unary functions.
//!
//! Two evaluation orders are offered: [`compose`] and friends apply
//! right-to-left (mathematical `f ∘ g`), while [`Pipe::pipe`] and [`pipe`]
//! apply left-to-right. [`chain`] covers variable-length lists of same-typed
//! stages. All of it is synchronous and pure; a failing stage in a fallible
//! chain surfaces its error to the caller unchanged.

pub mod chain;
pub mod compose;

pub use chain::{compose_all, pipe_all, Stage};
pub use compose::{compose, compose3, compose4, try_compose};

impl<T> Pipe for T {}
pub trait Pipe {
    /// Applies `f` to `self`. Chaining calls reads left-to-right:
    /// `x.pipe(g).pipe(f)` is `f(g(x))`.
    fn pipe<F, R>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
        Self: Sized,
    {
        f(self)
    }
}

/// Folds `value` through `stages` left-to-right, invoking each stage exactly
/// once. No stages returns `value` unchanged.
pub fn pipe<T, F, I>(value: T, stages: I) -> T
where
    F: Fn(T) -> T,
    I: IntoIterator<Item = F>,
{
    stages.into_iter().fold(value, |acc, stage| stage(acc))
}

/// [`pipe`] over fallible stages. The first failure aborts the remaining chain
/// and is returned as-is.
pub fn try_pipe<T, E, F, I>(value: T, stages: I) -> Result<T, E>
where
    F: Fn(T) -> Result<T, E>,
    I: IntoIterator<Item = F>,
{
    stages.into_iter().try_fold(value, |acc, stage| stage(acc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::proptest;

    fn add_tag1(s: String) -> String {
        s + " - A"
    }
    fn add_tag2(s: String) -> String {
        s + " - B"
    }
    fn add_tag3(s: String) -> String {
        s + " - C"
    }

    proptest! {
        #[test]
        fn pipe_without_stages_is_identity(x: i64) {
            let no_stages: [fn(i64) -> i64; 0] = [];
            assert_eq!(pipe(x, no_stages), x);

            let no_stages: [fn(i64) -> Result<i64, ()>; 0] = [];
            assert_eq!(try_pipe(x, no_stages), Ok(x));
        }

        #[test]
        fn pipe_single_stage_behaves_as_the_stage(x: i64) {
            assert_eq!(pipe(x, [|x: i64| x.wrapping_mul(2)]), x.wrapping_mul(2));
            assert_eq!(x.pipe(|x: i64| x.wrapping_mul(2)), x.wrapping_mul(2));
        }
    }

    #[test]
    fn tag_pipeline_applies_left_to_right() {
        let stages = [add_tag1 as fn(String) -> String, add_tag2, add_tag3];
        assert_eq!(pipe("start".to_string(), stages), "start - A - B - C");

        let stages = [add_tag3 as fn(String) -> String, add_tag2, add_tag1];
        assert_eq!(pipe("start".to_string(), stages), "start - C - B - A");
    }

    #[test]
    fn pipe_trait_changes_type_freely() {
        let out = "4"
            .pipe(|s: &str| s.parse::<i32>().unwrap())
            .pipe(|n| n * n)
            .pipe(|n| format!("{n}!"));
        assert_eq!(out, "16!");
    }

    #[test]
    fn try_pipe_stops_at_first_failure() {
        let ok = |x: i32| -> Result<i32, &'static str> { Ok(x + 1) };
        let fail = |_: i32| -> Result<i32, &'static str> { Err("boom") };
        let explode = |_: i32| -> Result<i32, &'static str> { panic!("must not run") };

        let stages = [ok as fn(i32) -> Result<i32, &'static str>, fail, explode];
        assert_eq!(try_pipe(0, stages), Err("boom"));

        let stages = [ok as fn(i32) -> Result<i32, &'static str>, ok, ok];
        assert_eq!(try_pipe(0, stages), Ok(3));
    }
}
