//! echo source.
use std::iter::Once;

use crate::pipeline::Pipeline;

/// Yield a single item. Equivalent to `Pipeline::new(std::iter::once(item))`, but nicer-looking.
pub fn echo<T>(item: T) -> Pipeline<Once<T>> {
    Pipeline::named("echo", std::iter::once(item))
}

/// Yield every item of `items`, in order.
pub fn echo_all<T>(items: T) -> Pipeline<T::IntoIter>
where
    T: IntoIterator,
{
    Pipeline::named("echo", items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single() {
        assert_eq!(echo(1).collect::<Vec<_>>(), vec![1]);
        assert_eq!(echo("hello").collect::<Vec<_>>(), vec!["hello"]);
    }

    #[test]
    fn several() {
        assert_eq!(echo_all(vec!["a", "b"]).collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(echo_all(vec!["a", "b"]).name(), "echo");
    }
}
