//! sh stage.
//!
//! Runs a command, feeds it the upstream items on stdin and yields its stdout line by line.
//! No shell is involved: the command line is split into arguments with [split_command].
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Lines, Seek, SeekFrom, Write};
use std::iter::Empty;
use std::process::{Child, ChildStdout, Command, Stdio};

use crate::error::Error;
use crate::pipeline::{Pipeline, Stage};

use super::Feed;

/// A command to run.
///
/// Used as a [Stage], every upstream item is spooled to a temporary file (one per line)
/// that becomes the command's stdin, then its stdout is read lazily. Used as a source (see [Sh::run]), stdin is empty.
#[derive(Debug, Clone)]
pub struct Sh {
    argv: Vec<String>,
    check_success: bool,
}

impl Sh {
    /// Split `command` into arguments.
    pub fn new(command: &str) -> Result<Self, Error> {
        Self::from_argv(split_command(command)?)
    }

    /// Use already split arguments.
    pub fn from_argv<I, S>(argv: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        if argv.is_empty() {
            return Err(Error::EmptyCommand);
        }
        Ok(Self {
            argv,
            check_success: false,
        })
    }

    /// Yield an [Error::Command] as the last item if the command exits unsuccessfully.
    pub fn check_success(mut self) -> Self {
        self.check_success = true;
        self
    }

    /// Get a reference to the command's arguments.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// Run the command without input.
    pub fn run(self) -> Pipeline<ShOutput<Empty<String>>> {
        Pipeline::named("sh", self)
    }
}

impl IntoIterator for Sh {
    type Item = Result<String, Error>;
    type IntoIter = ShOutput<Empty<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.apply(std::iter::empty())
    }
}

impl<I> Stage<I> for Sh
where
    I: Iterator,
    I::Item: Feed,
{
    type Output = ShOutput<I>;

    fn apply(self, input: I) -> Self::Output {
        ShOutput {
            argv: self.argv,
            check_success: self.check_success,
            state: State::Pending(input),
        }
    }

    fn name(&self) -> String {
        "sh".to_string()
    }
}

enum State<I> {
    Pending(I),
    Running {
        child: Child,
        lines: Lines<BufReader<ChildStdout>>,
    },
    Done,
}

/// Output lines of a command. The command is spawned on the first pull.
///
/// Dropping the iterator before the end kills the command.
pub struct ShOutput<I> {
    argv: Vec<String>,
    check_success: bool,
    state: State<I>,
}

impl<I> ShOutput<I>
where
    I: Iterator,
    I::Item: Feed,
{
    fn spawn(&self, input: I) -> Result<(Child, Lines<BufReader<ChildStdout>>), Error> {
        let stdin = spool(input)?;
        debug!("spawning {:?}", self.argv);
        let mut child = Command::new(&self.argv[0])
            .args(&self.argv[1..])
            .stdin(Stdio::from(stdin))
            .stdout(Stdio::piped())
            .spawn()?;

        match child.stdout.take() {
            Some(stdout) => Ok((child, BufReader::new(stdout).lines())),
            None => {
                kill(&mut child);
                Err(Error::Custom(format!("no stdout for {:?}", self.argv)))
            }
        }
    }

    /// reap the child once its output is exhausted.
    fn finish(&self, mut child: Child) -> Option<Result<String, Error>> {
        match child.wait() {
            Ok(status) => {
                debug!("{:?} exited with {}", self.argv, status);
                if self.check_success && !status.success() {
                    Some(Err(Error::Command {
                        argv: self.argv.clone(),
                        status,
                    }))
                } else {
                    None
                }
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}

impl<I> Iterator for ShOutput<I>
where
    I: Iterator,
    I::Item: Feed,
{
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match std::mem::replace(&mut self.state, State::Done) {
                State::Pending(input) => match self.spawn(input) {
                    Ok((child, lines)) => self.state = State::Running { child, lines },
                    Err(e) => {
                        error!("could not run {:?}: {}", self.argv, e);
                        return Some(Err(e));
                    }
                },
                State::Running { child, mut lines } => match lines.next() {
                    Some(line) => {
                        self.state = State::Running { child, lines };
                        return Some(line.map_err(Error::from));
                    }
                    None => return self.finish(child),
                },
                State::Done => return None,
            }
        }
    }
}

impl<I> Drop for ShOutput<I> {
    fn drop(&mut self) {
        if let State::Running { mut child, .. } = std::mem::replace(&mut self.state, State::Done)
        {
            debug!("output of {:?} dropped early", self.argv);
            kill(&mut child);
        }
    }
}

/// Write every item to an anonymous temporary file, one per line, and rewind it.
///
/// The command reads its stdin from the file, so it never waits on us while we wait on its stdout.
fn spool<I>(input: I) -> Result<File, Error>
where
    I: Iterator,
    I::Item: Feed,
{
    let mut spooled = BufWriter::new(tempfile::tempfile()?);
    let mut count = 0usize;
    for item in input {
        writeln!(spooled, "{}", item.feed()?)?;
        count += 1;
    }
    let mut file = spooled.into_inner().map_err(|e| e.into_error())?;
    file.seek(SeekFrom::Start(0))?;
    debug!("spooled {} lines", count);
    Ok(file)
}

fn kill(child: &mut Child) {
    // the child may already be gone
    if let Err(e) = child.kill() {
        debug!("could not kill {}: {}", child.id(), e);
    }
    if let Err(e) = child.wait() {
        warn!("could not reap {}: {}", child.id(), e);
    }
}

/// Split a command line into arguments, the way a POSIX shell would (without expansions).
///
/// Single quotes keep everything literally, double quotes allow `\"`, `\\`, `\$` and `` \` `` escapes,
/// and a backslash outside of quotes escapes the next character.
pub fn split_command(command: &str) -> Result<Vec<String>, Error> {
    let unbalanced = || Error::UnbalancedQuote(command.to_string());

    let mut argv = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = command.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(c) => current.push(c),
                        None => return Err(unbalanced()),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(c @ ('"' | '\\' | '$' | '`')) => current.push(c),
                            Some(c) => {
                                current.push('\\');
                                current.push(c);
                            }
                            None => return Err(unbalanced()),
                        },
                        Some(c) => current.push(c),
                        None => return Err(unbalanced()),
                    }
                }
            }
            '\\' => {
                in_word = true;
                current.push(chars.next().ok_or_else(unbalanced)?);
            }
            c if c.is_whitespace() => {
                if in_word {
                    argv.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }

    if in_word {
        argv.push(current);
    }
    Ok(argv)
}
