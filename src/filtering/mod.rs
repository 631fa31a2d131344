/*! Filtering utilities

Filters decide whether an item is kept or not.

Filters implement [filter::Filter]: they do not hold state, so that two successive equal inputs give two equal outputs.
The [grep](crate::stages::grep) stage is built on top of the regex-backed [Pattern].
! */
mod filter;
mod pattern;

pub use filter::Filter;
pub use pattern::Pattern;
