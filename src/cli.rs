//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;
use std::str::FromStr;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "calabash", about = "Bash-style pipelines over lines of text.")]
/// Holds every source that is callable by the `calabash` command.
pub enum Calabash {
    #[structopt(about = "Read files, line by line")]
    Cat(Cat),
    #[structopt(about = "Fetch a URL, line by line")]
    Curl(Curl),
    #[structopt(about = "Run a command and read its output")]
    Sh(Sh),
    #[structopt(about = "Emit literal values")]
    Echo(Echo),
}

impl Calabash {
    /// Get the stages to apply after the source.
    pub fn stages(&self) -> &[StageSpec] {
        match self {
            Calabash::Cat(c) => &c.stages.stages,
            Calabash::Curl(c) => &c.stages.stages,
            Calabash::Sh(s) => &s.stages.stages,
            Calabash::Echo(e) => &e.stages.stages,
        }
    }
}

#[derive(Debug, StructOpt)]
pub struct Stages {
    #[structopt(
        short = "s",
        long = "stage",
        number_of_values = 1,
        help = "stage to apply, in order. One of grep:PATTERN, sed:/PATTERN/REPLACEMENT/[x], sh:COMMAND, pp"
    )]
    pub stages: Vec<StageSpec>,
}

#[derive(Debug, StructOpt)]
/// Cat command and parameters.
///
/// ```sh
/// calabash-cat 0.1.0
/// Read files, line by line
///
/// USAGE:
///     calabash cat [OPTIONS] <paths>...
///
/// FLAGS:
///     -h, --help       Prints help information
///     -V, --version    Prints version information
///
/// OPTIONS:
///     -s, --stage <stages>...    stage to apply, in order. One of grep:PATTERN, sed:/PATTERN/REPLACEMENT/[x], sh:COMMAND, pp
///
/// ARGS:
///     <paths>...    files to read
/// ```
pub struct Cat {
    #[structopt(parse(from_os_str), required = true, help = "files to read")]
    pub paths: Vec<PathBuf>,
    #[structopt(flatten)]
    pub stages: Stages,
}

#[derive(Debug, StructOpt)]
pub struct Curl {
    #[structopt(help = "url to fetch")]
    pub url: String,
    #[structopt(flatten)]
    pub stages: Stages,
}

#[derive(Debug, StructOpt)]
pub struct Sh {
    #[structopt(help = "command to run (quote it)")]
    pub command: String,
    #[structopt(flatten)]
    pub stages: Stages,
}

#[derive(Debug, StructOpt)]
pub struct Echo {
    #[structopt(help = "values to emit")]
    pub values: Vec<String>,
    #[structopt(flatten)]
    pub stages: Stages,
}

/// A stage, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageSpec {
    Grep(String),
    Sed {
        pattern: String,
        replacement: String,
        exclusive: bool,
    },
    Sh(String),
    Pretty,
}

impl FromStr for StageSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "pp" {
            return Ok(StageSpec::Pretty);
        }

        let (kind, arg) = s
            .split_once(':')
            .ok_or_else(|| format!("invalid stage {:?}: expected KIND:ARGUMENT or pp", s))?;

        match kind {
            "grep" => Ok(StageSpec::Grep(arg.to_string())),
            "sh" => Ok(StageSpec::Sh(arg.to_string())),
            "sed" => parse_sed(arg),
            other => Err(format!("unknown stage kind {:?}", other)),
        }
    }
}

/// parse `/pattern/replacement/flags`, where `/` can be any delimiter.
fn parse_sed(arg: &str) -> Result<StageSpec, String> {
    let mut chars = arg.chars();
    let delim = chars
        .next()
        .ok_or_else(|| "empty sed expression".to_string())?;
    let parts: Vec<&str> = chars.as_str().splitn(3, delim).collect();

    match parts.as_slice() {
        [pattern, replacement, flags] => {
            let exclusive = match *flags {
                "" => false,
                "x" => true,
                other => return Err(format!("unknown sed flags {:?}", other)),
            };
            Ok(StageSpec::Sed {
                pattern: pattern.to_string(),
                replacement: replacement.to_string(),
                exclusive,
            })
        }
        _ => Err(format!(
            "invalid sed expression {:?}: expected {d}PATTERN{d}REPLACEMENT{d}",
            arg,
            d = delim
        )),
    }
}
