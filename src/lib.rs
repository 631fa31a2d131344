//! # Calabash
//!
//! Bash-style pipelining syntax for Rust iterators.
//!
//! Wrap any iterable in a [pipeline::Pipeline], then chain [stages](stages) with `|`:
//! the output of each stage becomes the input of the next one.
//!
//! ```
//! use calabash::pipeline::IntoPipeline;
//! use calabash::stages::{grep, sed};
//!
//! let animals = vec!["cat", "cabbage", "conundrum", "cathedral"];
//! let pipeline = animals.into_pipeline() | grep(r"^ca").unwrap() | sed(r"^ca", "fu").unwrap();
//! assert_eq!(pipeline.collect::<Vec<_>>(), vec!["fut", "fubbage", "futhedral"]);
//! ```
//!
//! Nothing happens before the final pipeline is iterated:
//! files are opened, requests sent and commands spawned on the first pull.
#[macro_use]
extern crate log;

pub mod error;
pub mod filtering;
pub mod pipeline;
pub mod stages;
pub mod transformers;
