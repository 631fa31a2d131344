//! Line-like items.
//!
//! Text stages work on anything that can be viewed as a line of text.
//! I/O sources yield `Result<String, Error>`: errors are not lines, and are passed through as-is.
use crate::error::Error;

/// An item that may hold a line of text.
pub trait Line: Sized {
    /// Item type after an edit.
    type Edited;

    /// Get the line, or [None] for items that do not hold one (errors).
    fn line(&self) -> Option<&str>;

    /// Rewrite the line with `f`. A [None] from `f` drops the item.
    ///
    /// Items that do not hold a line are kept untouched.
    fn edit<F>(self, f: F) -> Option<Self::Edited>
    where
        F: FnOnce(&str) -> Option<String>;
}

impl Line for String {
    type Edited = String;

    fn line(&self) -> Option<&str> {
        Some(self.as_str())
    }

    fn edit<F>(self, f: F) -> Option<String>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        f(self.as_str())
    }
}

impl<'a> Line for &'a str {
    type Edited = String;

    fn line(&self) -> Option<&str> {
        Some(*self)
    }

    fn edit<F>(self, f: F) -> Option<String>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        f(self)
    }
}

impl<T: Line, E> Line for Result<T, E> {
    type Edited = Result<T::Edited, E>;

    fn line(&self) -> Option<&str> {
        self.as_ref().ok().and_then(Line::line)
    }

    fn edit<F>(self, f: F) -> Option<Self::Edited>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match self {
            Ok(line) => line.edit(f).map(Ok),
            Err(e) => Some(Err(e)),
        }
    }
}

/// An item that can be written to a process' stdin.
pub trait Feed {
    fn feed(self) -> Result<String, Error>;
}

impl Feed for String {
    fn feed(self) -> Result<String, Error> {
        Ok(self)
    }
}

impl<'a> Feed for &'a str {
    fn feed(self) -> Result<String, Error> {
        Ok(self.to_string())
    }
}

impl<T, E> Feed for Result<T, E>
where
    T: Feed,
    E: Into<Error>,
{
    fn feed(self) -> Result<String, Error> {
        self.map_err(Into::into).and_then(Feed::feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_items_are_not_lines() {
        let item: Result<String, Error> = Err(Error::Custom("oops".to_string()));
        assert_eq!(item.line(), None);
        let edited = item.edit(|_| None);
        assert!(matches!(edited, Some(Err(Error::Custom(_)))));
    }

    #[test]
    fn edit_ok_item() {
        let item: Result<&str, Error> = Ok("cat");
        let edited = item.edit(|l| Some(l.to_uppercase()));
        assert!(matches!(edited, Some(Ok(ref s)) if s == "CAT"));
    }

    #[test]
    fn edit_can_drop() {
        assert_eq!("cat".edit(|_| None), None);
        assert_eq!("cat".to_string().line(), Some("cat"));
    }

    #[test]
    fn feed_error() {
        let item: Result<String, std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "broken"));
        assert!(matches!(item.feed(), Err(Error::Io(_))));
        assert_eq!("line".feed().unwrap(), "line");
    }
}
