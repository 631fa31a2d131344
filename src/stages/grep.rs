//! grep stage.
use crate::filtering::{Filter, Pattern};
use crate::pipeline::Stage;

use super::Line;

/// Keeps the lines detected by a [Filter]. Items that do not hold a line are kept too.
///
/// Built by [super::grep] for the common regex case.
#[derive(Debug, Clone)]
pub struct Grep<F = Pattern> {
    filter: F,
}

impl<F> Grep<F>
where
    F: for<'a> Filter<&'a str>,
{
    /// Grep with any line filter.
    pub fn with_filter(filter: F) -> Self {
        Self { filter }
    }
}

/// Iterator returned by [Grep].
#[derive(Debug)]
pub struct GrepIter<I, F> {
    input: I,
    filter: F,
}

impl<I, F> Iterator for GrepIter<I, F>
where
    I: Iterator,
    I::Item: Line,
    F: for<'a> Filter<&'a str>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let filter = &self.filter;
        self.input
            .find(|item| item.line().map_or(true, |line| filter.detect(line)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.input.size_hint().1)
    }
}

impl<I, F> Stage<I> for Grep<F>
where
    I: Iterator,
    I::Item: Line,
    F: for<'a> Filter<&'a str>,
{
    type Output = GrepIter<I, F>;

    fn apply(self, input: I) -> Self::Output {
        GrepIter {
            input,
            filter: self.filter,
        }
    }

    fn name(&self) -> String {
        "grep".to_string()
    }
}
