/*! Common pipeline components.

Sources build a [Pipeline] from the outside world, stages plug into one with `|`.

Sources:
- [echo] / [echo_all] yield literal values,
- [cat] / [cat_all] read files,
- [curl] fetches a URL,
- [Sh::run] runs a command without input.

Stages:
- [filter] / [grep] keep matching items,
- [map] / [sed] rewrite items,
- [sh] pipes items through a command,
- [pretty_printer] / [pretty_json] print items and pass them through.

Text stages work on [Line]s, so that errors yielded by I/O sources reach the end of the pipeline untouched:

```no_run
use calabash::stages::{cat, grep, sed};

let pipeline = cat("Cargo.toml") | grep("^name").unwrap() | sed("name = ", "").unwrap();
for name in pipeline {
    println!("{}", name.unwrap());
}
```
!*/
use std::path::PathBuf;

use crate::error::Error;
use crate::pipeline::Pipeline;

mod cat;
mod curl;
mod echo;
mod grep;
mod line;
mod map;
mod pretty;
mod sed;
mod sh;

pub use cat::Cat;
pub use curl::Curl;
pub use echo::{echo, echo_all};
pub use grep::{Grep, GrepIter};
pub use line::{Feed, Line};
pub use map::{Map, Select};
pub use pretty::{JsonPrinter, PrettyPrinter, Printed, PrintedJson};
pub use sed::{Sed, SedIter};
pub use sh::{split_command, Sh, ShOutput};

/// Read a file, line by line.
pub fn cat<P: Into<PathBuf>>(path: P) -> Pipeline<Cat> {
    Pipeline::named("cat", Cat::new(Some(path)))
}

/// Read several files, one after the other.
pub fn cat_all<P, T>(paths: T) -> Pipeline<Cat>
where
    P: Into<PathBuf>,
    T: IntoIterator<Item = P>,
{
    Pipeline::named("cat", Cat::new(paths))
}

/// Fetch a URL, yielding the body line by line.
pub fn curl(url: &str) -> Pipeline<Curl> {
    Pipeline::named("curl", Curl::new(url))
}

/// Keep lines matching the `pattern` regex (searching anywhere in the line).
pub fn grep(pattern: &str) -> Result<Grep, Error> {
    let pattern = crate::filtering::Pattern::new(pattern)?;
    debug!("grep {:?}", pattern.as_str());
    Ok(Grep::with_filter(pattern))
}

/// Replace the first match of `pattern` with `replacement` in each line.
///
/// Non-matching lines are passed through as-is, unless [Sed::exclusive] is used.
pub fn sed(pattern: &str, replacement: &str) -> Result<Sed, Error> {
    debug!("sed {:?} -> {:?}", pattern, replacement);
    Sed::new(pattern, replacement)
}

/// Map each item through `func`.
pub fn map<F>(func: F) -> Map<F> {
    Map::new(func)
}

/// Only pass through items for which `predicate` holds.
pub fn filter<P>(predicate: P) -> Select<P> {
    Select::new(predicate)
}

/// Run a command, feeding it the items on stdin and yielding its output.
pub fn sh(command: &str) -> Result<Sh, Error> {
    Sh::new(command)
}

/// Pretty print each item on stdout, and pass it straight through.
pub fn pretty_printer() -> PrettyPrinter {
    PrettyPrinter::stdout()
}

/// Pretty print each item to `out`, and pass it straight through.
pub fn pretty_printer_to<W: std::io::Write>(out: W) -> PrettyPrinter<W> {
    PrettyPrinter::to_writer(out)
}

/// Print each item on stdout as pretty JSON, and pass it straight through.
pub fn pretty_json() -> JsonPrinter {
    JsonPrinter::stdout()
}
