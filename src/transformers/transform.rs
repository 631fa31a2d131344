//! Transform trait.

pub trait Transform {
    /// Rewrites `line`, or returns [None] if the transform does not apply to it.
    fn transform(&self, line: &str) -> Option<String>;
}
