//! # Calabash
//!
//! Bash-style pipelines over lines of text.
//!
//! ```sh
//! calabash 0.1.0
//! Bash-style pipelines over lines of text.
//!
//! USAGE:
//!     calabash <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     cat     Read files, line by line
//!     curl    Fetch a URL, line by line
//!     echo    Emit literal values
//!     help    Prints this message or the help of the given subcommand(s)
//!     sh      Run a command and read its output
//! ```
//!
//! Stages are given with `-s`, and applied in order:
//!
//! ```sh
//! calabash cat Cargo.toml -s 'grep:^name' -s 'sed:/name = //'
//! ```

use std::io::{self, Write};

use calabash::error::Error;
use calabash::pipeline::Pipeline;
use calabash::stages;
use cli::StageSpec;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

type Lines = Pipeline<Box<dyn Iterator<Item = Result<String, Error>>>>;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Calabash::from_args();
    debug!("cli args\n{:#?}", opt);

    let pipeline = build(&opt)?;
    info!("running {}", pipeline);

    let stdout = io::stdout();
    run(pipeline, &mut stdout.lock())
}

/// build the source, then plug the stages in the order they were given.
fn build(opt: &cli::Calabash) -> Result<Lines, Error> {
    let source: Lines = match opt {
        cli::Calabash::Cat(c) => stages::cat_all(c.paths.clone()).boxed(),
        cli::Calabash::Curl(c) => stages::curl(&c.url).boxed(),
        cli::Calabash::Sh(s) => stages::sh(&s.command)?.run().boxed(),
        cli::Calabash::Echo(e) => {
            stages::echo_all(e.values.clone().into_iter().map(Ok)).boxed()
        }
    };

    opt.stages()
        .iter()
        .try_fold(source, |pipeline, spec| plug(pipeline, spec))
}

/// write each line to `out`. The first error item stops the run.
fn run<W: Write>(pipeline: Lines, out: &mut W) -> Result<(), Error> {
    for line in pipeline {
        writeln!(out, "{}", line?)?;
    }
    out.flush()?;
    Ok(())
}

/// plug the stage described by `spec` after `pipeline`.
fn plug(pipeline: Lines, spec: &StageSpec) -> Result<Lines, Error> {
    let pipeline = match spec {
        StageSpec::Grep(pattern) => (pipeline | stages::grep(pattern)?).boxed(),
        StageSpec::Sed {
            pattern,
            replacement,
            exclusive,
        } => {
            let sed = stages::sed(pattern, replacement)?;
            let sed = if *exclusive { sed.exclusive() } else { sed };
            (pipeline | sed).boxed()
        }
        StageSpec::Sh(command) => (pipeline | stages::sh(command)?).boxed(),
        // stdout holds the results
        StageSpec::Pretty => (pipeline | stages::pretty_printer_to(io::stderr())).boxed(),
    };
    Ok(pipeline)
}
