use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::cli::Report;

/// The answer produced for a single dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer<'a> {
    /// Name of the dataset.
    pub dataset: &'a str,
    /// Sum of all part numbers.
    pub sum: u64,
    /// Number of part numbers found.
    pub count: usize,
}

/// How output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// One JSON object per line.
    Json,
    /// Plain text.
    Normal,
}

/// Writes answers, reports and messages.
pub struct Output<O> {
    out: O,
    kind: OutputKind,
}

impl<O> Output<O>
where
    O: Write,
{
    /// Construct a new output around the given writer.
    pub fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    /// Get the underlying writer back.
    pub fn into_inner(self) -> O {
        self.out
    }

    pub fn info(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Info, m)
    }

    pub fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Error, m)
    }

    /// Write the answer for a dataset.
    ///
    /// In plain text this is only the sum.
    pub fn answer(&mut self, answer: &Answer<'_>) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => self.json(LineType::Answer, answer),
            OutputKind::Normal => writeln!(self.out, "{}", answer.sum),
        }
    }

    /// Write a benchmark report for the named dataset.
    pub fn report(&mut self, dataset: &str, report: &Report) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => self.json(LineType::Report, &Named { dataset, report }),
            OutputKind::Normal => writeln!(self.out, "{dataset}: {report}"),
        }
    }

    fn message(&mut self, kind: MessageKind, m: impl fmt::Display) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => self.json(
                LineType::Message,
                &Message {
                    kind,
                    output: m.to_string(),
                },
            ),
            OutputKind::Normal => writeln!(self.out, "{kind}: {m}"),
        }
    }

    fn json<T>(&mut self, ty: LineType, data: &T) -> io::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer(&mut self.out, &Line { ty, data })?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct Line<T> {
    #[serde(rename = "type")]
    ty: LineType,
    data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum LineType {
    Answer,
    Message,
    Report,
}

#[derive(Serialize)]
struct Named<'a, T> {
    dataset: &'a str,
    #[serde(flatten)]
    report: &'a T,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "kebab-case")]
enum MessageKind {
    Info,
    Error,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Info => write!(f, "info"),
            MessageKind::Error => write!(f, "error"),
        }
    }
}

#[derive(Serialize)]
struct Message {
    kind: MessageKind,
    output: String,
}
