//! sed stage.
use crate::error::Error;
use crate::pipeline::Stage;
use crate::transformers::{Substitution, Transform};

use super::Line;

/// Applies a [Transform] to each line.
///
/// Lines the transform does not apply to are passed through as-is,
/// unless the stage is [exclusive](Sed::exclusive), in which case they are dropped.
#[derive(Debug, Clone)]
pub struct Sed<T = Substitution> {
    transform: T,
    exclusive: bool,
}

impl Sed<Substitution> {
    /// Replace the first match of `pattern` by `replacement` in every line.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, Error> {
        Ok(Self::with_transform(Substitution::new(pattern, replacement)?))
    }
}

impl<T: Transform> Sed<T> {
    pub fn with_transform(transform: T) -> Self {
        Self {
            transform,
            exclusive: false,
        }
    }

    /// Only yield the lines that were transformed.
    pub fn exclusive(mut self) -> Self {
        self.exclusive = true;
        self
    }
}

/// Iterator returned by [Sed].
#[derive(Debug)]
pub struct SedIter<I, T> {
    input: I,
    transform: T,
    exclusive: bool,
}

impl<I, T> Iterator for SedIter<I, T>
where
    I: Iterator,
    I::Item: Line,
    T: Transform,
{
    type Item = <I::Item as Line>::Edited;

    fn next(&mut self) -> Option<Self::Item> {
        let transform = &self.transform;
        let exclusive = self.exclusive;
        for item in self.input.by_ref() {
            let edited = item.edit(|line| match transform.transform(line) {
                Some(replaced) => Some(replaced),
                None if exclusive => None,
                None => Some(line.to_string()),
            });
            if edited.is_some() {
                return edited;
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exclusive {
            (0, self.input.size_hint().1)
        } else {
            self.input.size_hint()
        }
    }
}

impl<I, T> Stage<I> for Sed<T>
where
    I: Iterator,
    I::Item: Line,
    T: Transform,
{
    type Output = SedIter<I, T>;

    fn apply(self, input: I) -> Self::Output {
        SedIter {
            input,
            transform: self.transform,
            exclusive: self.exclusive,
        }
    }

    fn name(&self) -> String {
        "sed".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::IntoPipeline;
    use crate::stages::sed;

    #[test]
    fn substitute() {
        let out: Vec<_> =
            (vec!["cat", "cabbage"].into_pipeline() | sed(r"^ca", "fu").unwrap()).collect();
        assert_eq!(out, vec!["fut", "fubbage"]);
    }

    #[test]
    fn non_matching_pass_through() {
        let out: Vec<_> =
            (vec!["cat", "nomatch"].into_pipeline() | sed(r"^ca", "fu").unwrap()).collect();
        assert_eq!(out, vec!["fut", "nomatch"]);
    }

    #[test]
    fn exclusive() {
        let stage = sed(r"^ca", "fu").unwrap().exclusive();
        let out: Vec<_> = (vec!["cat", "nomatch"].into_pipeline() | stage).collect();
        assert_eq!(out, vec!["fut"]);
    }

    #[test]
    fn errors_pass_through() {
        let src: Vec<Result<&str, Error>> =
            vec![Err(Error::EmptyCommand), Ok("nomatch"), Ok("cat")];
        let stage = sed(r"^ca", "fu").unwrap().exclusive();
        let out: Vec<_> = (src.into_pipeline() | stage).collect();
        assert_eq!(out.len(), 2);
        assert!(matches!(out[0], Err(Error::EmptyCommand)));
        assert_eq!(out[1].as_ref().unwrap(), "fut");
    }

    struct Upper;

    impl Transform for Upper {
        fn transform(&self, line: &str) -> Option<String> {
            line.starts_with('u').then(|| line.to_uppercase())
        }
    }

    #[test]
    fn custom_transform() {
        let stage = Sed::with_transform(Upper);
        let out: Vec<_> = (vec!["up", "down"].into_pipeline() | stage).collect();
        assert_eq!(out, vec!["UP", "down"]);
    }
}
