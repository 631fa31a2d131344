//! Pipelines.
//!
//! A [Pipeline] wraps a lazy source and can be plugged into any [Stage] with the `|` operator,
//! yielding a new [Pipeline]. Nothing is pulled from the source until the final pipeline is iterated.
//!
//! ```
//! use calabash::pipeline::IntoPipeline;
//! use calabash::stages::grep;
//!
//! let langs = vec!["python", "ruby", "jython"].into_pipeline() | grep("yt").unwrap();
//! assert_eq!(langs.collect::<Vec<_>>(), vec!["python", "jython"]);
//! ```
#[allow(clippy::module_inception)]
mod pipeline;
mod stage;

pub use pipeline::{IntoPipeline, Pipeline};
pub use stage::{compose, identity, named, Identity, Named, Stage, Then};
