//! Pretty printers.
//!
//! Sinks that print every item as it goes by, then pass it straight through.
//! Printing failures are logged and do not interrupt the pipeline.
use std::fmt::Debug;
use std::io::{self, Stdout, Write};

use serde::Serialize;

use crate::error::Error;
use crate::pipeline::Stage;

const DEFAULT_WIDTH: usize = 80;

/// Pretty printer stage for [Debug] items. See [super::pretty_printer].
///
/// Items are printed on one line when they fit, and with `{:#?}` otherwise.
#[derive(Debug)]
pub struct PrettyPrinter<W = Stdout> {
    out: W,
    width: usize,
}

impl PrettyPrinter<Stdout> {
    pub fn stdout() -> Self {
        Self::to_writer(io::stdout())
    }
}

impl<W: Write> PrettyPrinter<W> {
    /// Print to any writer.
    pub fn to_writer(out: W) -> Self {
        Self {
            out,
            width: DEFAULT_WIDTH,
        }
    }

    /// Items whose compact representation is longer than `width` are printed on several lines.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

/// Iterator returned by [PrettyPrinter] for [Debug] items.
pub struct Printed<I, W> {
    input: I,
    out: W,
    width: usize,
}

impl<I, W> Iterator for Printed<I, W>
where
    I: Iterator,
    I::Item: Debug,
    W: Write,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.input.next()?;
        let compact = format!("{:?}", item);
        let written = if compact.chars().count() <= self.width {
            writeln!(self.out, "{}", compact)
        } else {
            writeln!(self.out, "{:#?}", item)
        };
        if let Err(e) = written {
            error!("could not print item: {}", e);
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.input.size_hint()
    }
}

impl<I, W> Stage<I> for PrettyPrinter<W>
where
    I: Iterator,
    I::Item: Debug,
    W: Write,
{
    type Output = Printed<I, W>;

    fn apply(self, input: I) -> Self::Output {
        Printed {
            input,
            out: self.out,
            width: self.width,
        }
    }

    fn name(&self) -> String {
        "pretty_printer".to_string()
    }
}

/// Pretty printer for [Serialize] items. See [super::pretty_json].
#[derive(Debug)]
pub struct JsonPrinter<W = Stdout> {
    out: W,
}

impl JsonPrinter<Stdout> {
    pub fn stdout() -> Self {
        Self::to_writer(io::stdout())
    }
}

impl<W: Write> JsonPrinter<W> {
    pub fn to_writer(out: W) -> Self {
        Self { out }
    }
}

/// Iterator returned by [JsonPrinter].
pub struct PrintedJson<I, W> {
    input: I,
    out: W,
}

impl<I, W> PrintedJson<I, W>
where
    W: Write,
{
    fn print<T: Serialize>(&mut self, item: &T) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut self.out, item)?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<I, W> Iterator for PrintedJson<I, W>
where
    I: Iterator,
    I::Item: Serialize,
    W: Write,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.input.next()?;
        if let Err(e) = self.print(&item) {
            error!("could not print item: {}", e);
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.input.size_hint()
    }
}

impl<I, W> Stage<I> for JsonPrinter<W>
where
    I: Iterator,
    I::Item: Serialize,
    W: Write,
{
    type Output = PrintedJson<I, W>;

    fn apply(self, input: I) -> Self::Output {
        PrintedJson {
            input,
            out: self.out,
        }
    }

    fn name(&self) -> String {
        "pretty_json".to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;
    use crate::pipeline::IntoPipeline;
    use crate::stages::{pretty_json, pretty_printer_to};

    #[test]
    fn print_and_pass_through() {
        let mut out = Vec::new();
        let mut map = BTreeMap::new();
        map.insert("a", 1);

        let items: Vec<_> = (vec![map.clone()].into_pipeline() | pretty_printer_to(&mut out))
            .collect();
        assert_eq!(items, vec![map]);
        assert_eq!(String::from_utf8(out).unwrap(), "{\"a\": 1}\n");
    }

    #[test]
    fn print_several() {
        let mut out = Vec::new();
        let items: Vec<_> =
            (vec![vec!["b", "c"], vec!["d"]].into_pipeline() | pretty_printer_to(&mut out))
                .collect();
        assert_eq!(items.len(), 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[\"b\", \"c\"]\n[\"d\"]\n"
        );
    }

    #[test]
    fn wide_items_on_several_lines() {
        let mut out = Vec::new();
        let stage = pretty_printer_to(&mut out).width(5);
        let _: Vec<_> = (vec![vec![1, 2, 3]].into_pipeline() | stage).collect();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[\n    1,\n    2,\n    3,\n]\n"
        );
    }

    #[test]
    fn lazy_printing() {
        let mut out = Vec::new();
        {
            let mut pipeline = (1..).into_pipeline() | pretty_printer_to(&mut out);
            assert_eq!(pipeline.next(), Some(1));
            assert_eq!(pipeline.next(), Some(2));
        }
        assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n");
    }

    #[test]
    fn json() {
        let mut out = Vec::new();
        let items: Vec<_> =
            (vec![json!({"a": 1})].into_pipeline() | JsonPrinter::to_writer(&mut out)).collect();
        assert_eq!(items, vec![json!({"a": 1})]);
        assert_eq!(String::from_utf8(out).unwrap(), "{\n  \"a\": 1\n}\n");
    }

    #[test]
    fn json_factory_name() {
        let pipeline = vec![json!(null)].into_pipeline() | pretty_json();
        assert_eq!(pipeline.name(), "<iter> | pretty_json");
    }
}
