//! Stage trait and combinators.

/// A stage turns an upstream iterator into a (lazy) downstream one.
///
/// Implementations must not pull from `input` in [Stage::apply]:
/// work happens when the returned iterator is advanced.
///
/// Closures taking an iterator and returning anything iterable are stages too,
/// which makes writing one-off stages easy:
///
/// ```
/// use calabash::pipeline::Pipeline;
///
/// let summer = |input: std::ops::Range<u32>| {
///     input.scan(0, |sum, item| {
///         *sum += item;
///         Some(*sum)
///     })
/// };
/// let sums: Vec<u32> = (Pipeline::new(1..5) | summer).collect();
/// assert_eq!(sums, vec![1, 3, 6, 10]);
/// ```
pub trait Stage<I: Iterator> {
    type Output: Iterator;

    fn apply(self, input: I) -> Self::Output;

    /// name shown in the pipeline representation.
    fn name(&self) -> String {
        "<fn>".to_string()
    }
}

impl<I, F, J> Stage<I> for F
where
    I: Iterator,
    F: FnOnce(I) -> J,
    J: IntoIterator,
{
    type Output = J::IntoIter;

    fn apply(self, input: I) -> Self::Output {
        self(input).into_iter()
    }
}

/// Passes items through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

/// Shorthand for [Identity].
pub fn identity() -> Identity {
    Identity
}

impl<I: Iterator> Stage<I> for Identity {
    type Output = I;

    fn apply(self, input: I) -> I {
        input
    }

    fn name(&self) -> String {
        "identity".to_string()
    }
}

/// Two stages fused together. See [compose].
#[derive(Debug, Clone)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

/// Fuse two stages into one: `first` runs, then `second` runs on its output.
///
/// `(p | a) | b` and `p | compose(a, b)` yield the same items.
pub fn compose<A, B>(first: A, second: B) -> Then<A, B> {
    Then { first, second }
}

impl<I, A, B> Stage<I> for Then<A, B>
where
    I: Iterator,
    A: Stage<I>,
    B: Stage<A::Output>,
{
    type Output = B::Output;

    fn apply(self, input: I) -> Self::Output {
        self.second.apply(self.first.apply(input))
    }

    fn name(&self) -> String {
        format!(
            "{} | {}",
            <A as Stage<I>>::name(&self.first),
            <B as Stage<A::Output>>::name(&self.second)
        )
    }
}

/// A stage with a custom name. See [named].
#[derive(Debug, Clone)]
pub struct Named<S> {
    name: String,
    stage: S,
}

/// Give `stage` a name. Mostly useful for closures, which are otherwise shown as `<fn>`.
pub fn named<S>(name: &str, stage: S) -> Named<S> {
    Named {
        name: name.to_string(),
        stage,
    }
}

impl<I, S> Stage<I> for Named<S>
where
    I: Iterator,
    S: Stage<I>,
{
    type Output = S::Output;

    fn apply(self, input: I) -> Self::Output {
        self.stage.apply(input)
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}
