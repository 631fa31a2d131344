//! map and filter stages.
use crate::pipeline::Stage;

/// Maps each item through a function. See [super::map].
#[derive(Debug, Clone)]
pub struct Map<F> {
    func: F,
}

impl<F> Map<F> {
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<I, F, U> Stage<I> for Map<F>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
{
    type Output = std::iter::Map<I, F>;

    fn apply(self, input: I) -> Self::Output {
        input.map(self.func)
    }

    fn name(&self) -> String {
        "map".to_string()
    }
}

/// Only passes through items for which the predicate holds. See [super::filter].
#[derive(Debug, Clone)]
pub struct Select<P> {
    predicate: P,
}

impl<P> Select<P> {
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<I, P> Stage<I> for Select<P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Output = std::iter::Filter<I, P>;

    fn apply(self, input: I) -> Self::Output {
        input.filter(self.predicate)
    }

    fn name(&self) -> String {
        "filter".to_string()
    }
}
