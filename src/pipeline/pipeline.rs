//! Pipeline type.
use std::fmt;
use std::ops::BitOr;

use super::Stage;

/// A lazy, single-pass sequence that can be chained into [Stage]s with `|`.
///
/// Chaining moves the pipeline into the new one: the resulting [Pipeline]
/// pulls from the upstream one only when it is itself iterated.
pub struct Pipeline<I> {
    name: String,
    iter: I,
}

impl<I: Iterator> Pipeline<I> {
    /// Wrap any iterable.
    pub fn new<T>(source: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self::named("<iter>", source)
    }

    /// Wrap any iterable, giving the source a name.
    pub fn named<T>(name: &str, source: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            name: name.to_string(),
            iter: source.into_iter(),
        }
    }

    /// Plug `stage` after the pipeline. Equivalent to `self | stage`.
    pub fn pipe<S>(self, stage: S) -> Pipeline<S::Output>
    where
        S: Stage<I>,
    {
        let name = format!("{} | {}", self.name, stage.name());
        debug!("building {}", name);
        Pipeline {
            name,
            iter: stage.apply(self.iter),
        }
    }

    /// Get the name of the pipeline, listing every stage.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Erase the iterator type.
    ///
    /// Useful when stages are only known at runtime and pipelines are built in a loop.
    pub fn boxed<'a>(self) -> Pipeline<Box<dyn Iterator<Item = I::Item> + 'a>>
    where
        I: 'a,
    {
        Pipeline {
            name: self.name,
            iter: Box::new(self.iter),
        }
    }
}

impl<I: Iterator> Iterator for Pipeline<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, S> BitOr<S> for Pipeline<I>
where
    I: Iterator,
    S: Stage<I>,
{
    type Output = Pipeline<S::Output>;

    fn bitor(self, stage: S) -> Self::Output {
        self.pipe(stage)
    }
}

impl<I> fmt::Display for Pipeline<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Pipeline: {}>", self.name)
    }
}

impl<I> fmt::Debug for Pipeline<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Conversion into a [Pipeline] for anything iterable.
///
/// ```
/// use calabash::pipeline::IntoPipeline;
///
/// let evens: Vec<_> = (0..5).into_pipeline().filter(|x| x % 2 == 0).collect();
/// assert_eq!(evens, vec![0, 2, 4]);
/// ```
pub trait IntoPipeline: IntoIterator + Sized {
    fn into_pipeline(self) -> Pipeline<Self::IntoIter> {
        Pipeline::new(self)
    }
}

impl<T: IntoIterator> IntoPipeline for T {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::vec::IntoIter;

    use super::*;
    use crate::pipeline::{compose, identity, named};

    #[test]
    fn identity_yields_source() {
        let items = vec![3, 1, 4, 1, 5, 9, 2, 6];
        let out: Vec<_> = (Pipeline::new(items.clone()) | identity()).collect();
        assert_eq!(out, items);
    }

    #[test]
    fn chain_in_order() {
        let add_one = |input: IntoIter<i32>| input.map(|x| x + 1).collect::<Vec<_>>();
        let double = |input: IntoIter<i32>| input.map(|x| x * 2);
        let out: Vec<_> = (Pipeline::new(vec![1, 2, 3]) | add_one | double).collect();
        assert_eq!(out, vec![4, 6, 8]);
    }

    #[test]
    fn associative() {
        let add_one = |input: IntoIter<i32>| input.map(|x| x + 1).collect::<Vec<_>>();
        let double = |input: IntoIter<i32>| input.map(|x| x * 2).collect::<Vec<_>>();

        let left: Vec<_> = ((Pipeline::new(vec![1, 2, 3]) | add_one) | double).collect();
        let right: Vec<_> = (Pipeline::new(vec![1, 2, 3]) | compose(add_one, double)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn composing_is_lazy() {
        let pulls = Cell::new(0);
        let source = (0..10).inspect(|_| pulls.set(pulls.get() + 1));
        let mut pipeline = Pipeline::new(source) | identity() | identity();
        assert_eq!(pulls.get(), 0);

        assert_eq!(pipeline.next(), Some(0));
        assert_eq!(pulls.get(), 1);
    }

    #[test]
    fn single_pass() {
        let mut pipeline = Pipeline::new(vec![1, 2]);
        assert_eq!(pipeline.by_ref().count(), 2);
        assert_eq!(pipeline.next(), None);
    }

    #[test]
    fn infinite_source() {
        let out: Vec<_> = (Pipeline::new(0..) | identity()).take(3).collect();
        assert_eq!(out, vec![0, 1, 2]);
    }

    #[test]
    fn repr() {
        let pipeline = Pipeline::named("numbers", 0..3)
            | named("summer", identity())
            | identity();
        assert_eq!(
            pipeline.to_string(),
            "<Pipeline: numbers | summer | identity>"
        );
        assert_eq!(format!("{:?}", pipeline), pipeline.to_string());
    }

    #[test]
    fn boxed_keeps_name_and_items() {
        let pipeline = Pipeline::named("numbers", vec![1, 2, 3]).boxed();
        assert_eq!(pipeline.name(), "numbers");
        assert_eq!(pipeline.collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn size_hint_forwarded() {
        let pipeline = Pipeline::new(vec![1, 2, 3]) | identity();
        assert_eq!(pipeline.size_hint(), (3, Some(3)));
    }
}
