//! cat source.
//!
//! Reads files line by line, one after the other.
//! Files are opened when the iteration reaches them, not before.
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::PathBuf;

use crate::error::Error;

/// Line iterator over a list of files.
#[derive(Debug)]
pub struct Cat {
    pending: VecDeque<PathBuf>,
    current: Option<Lines<BufReader<File>>>,
}

impl Cat {
    pub fn new<P>(paths: impl IntoIterator<Item = P>) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            pending: paths.into_iter().map(Into::into).collect(),
            current: None,
        }
    }

    /// open the next file, if any.
    fn open_next(&mut self) -> Option<Result<(), Error>> {
        let path = self.pending.pop_front()?;
        debug!("opening {:?}", path);
        match File::open(&path) {
            Ok(f) => {
                self.current = Some(BufReader::new(f).lines());
                Some(Ok(()))
            }
            Err(e) => {
                error!("could not open {:?}: {}", path, e);
                Some(Err(e.into()))
            }
        }
    }
}

impl Iterator for Cat {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(lines) = self.current.as_mut() {
                match lines.next() {
                    Some(line) => return Some(line.map_err(Error::from)),
                    None => self.current = None,
                }
            }

            // current file is exhausted (or there was none): go to the next one
            if let Err(e) = self.open_next()? {
                return Some(Err(e));
            }
        }
    }
}
