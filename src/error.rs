//! Error enum
use std::fmt;
use std::process::ExitStatus;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Http(reqwest::Error),
    Url(url::ParseError),
    Regex(regex::Error),
    Serde(serde_json::Error),
    /// A command ran to completion but exited unsuccessfully.
    Command {
        argv: Vec<String>,
        status: ExitStatus,
    },
    EmptyCommand,
    UnbalancedQuote(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Http(e) => write!(f, "http error: {}", e),
            Error::Url(e) => write!(f, "invalid url: {}", e),
            Error::Regex(e) => write!(f, "invalid pattern: {}", e),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::Command { argv, status } => {
                write!(f, "command {:?} returned {}", argv, status)
            }
            Error::EmptyCommand => write!(f, "empty command"),
            Error::UnbalancedQuote(cmd) => write!(f, "unbalanced quote in {:?}", cmd),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Http(e) => Some(e),
            Error::Url(e) => Some(e),
            Error::Regex(e) => Some(e),
            Error::Serde(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Http(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::Url(e)
    }
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Error {
        Error::Regex(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
