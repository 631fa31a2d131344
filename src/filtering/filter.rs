//! Filtering traits.

/// immutable, pure filter (2 successive equal inputs -> 2 equal outputs)
pub trait Filter<T> {
    fn detect(&self, item: T) -> bool;
}

/// Any predicate is a filter.
impl<T, F> Filter<T> for F
where
    F: Fn(T) -> bool,
{
    fn detect(&self, item: T) -> bool {
        self(item)
    }
}
