//! Sinks: stages that consume the stream and forward nothing.
//!
//! A sink's continuation is [`Terminal`], which accepts no messages, so a
//! sink that tries to forward is rejected by the compiler. Fixing the
//! continuation type also pins a sink to the last chain position.
//!
//! [`LineWriter`] is the exception: it is a tee, not a true sink. It
//! observes the stream on its way past, so it composes mid-chain and needs
//! a real sink after it.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::message::{Begin, End, Item};
use crate::pipeline::{Push, Terminal};
use crate::stage::{Stage, forward_markers};

/// Accepts and discards every message shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hole;

/// Creates a sink that swallows the whole stream.
pub fn hole() -> Hole {
    Hole
}

impl<M> Stage<Terminal, M> for Hole {
    fn process(&mut self, _next: &mut Terminal, _msg: M) {}
}

/// Writes each value as one line on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Print;

/// Creates a sink that prints every value.
pub fn print() -> Print {
    Print
}

impl Stage<Terminal, Begin> for Print {
    fn process(&mut self, _next: &mut Terminal, _marker: Begin) {}
}

impl Stage<Terminal, End> for Print {
    fn process(&mut self, _next: &mut Terminal, _marker: End) {}
}

impl<T: fmt::Display> Stage<Terminal, Item<T>> for Print {
    fn process(&mut self, _next: &mut Terminal, item: Item<T>) {
        println!("{}", item.0);
    }
}

/// Accumulates values into a vector.
///
/// Mount it by `&mut` to read the result once the traversal is done. The
/// sink also polices the stream bracket: a value outside a `Begin`/`End`
/// pair, a second `Begin` before an `End`, or a stray `End` is a broken
/// upstream stage, and each panics rather than corrupting the result.
#[derive(Debug, Clone)]
pub struct Collect<T> {
    items: Vec<T>,
    open: bool,
}

impl<T> Collect<T> {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            open: false,
        }
    }

    /// The values collected so far, in arrival order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the sink, returning the collected values.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Collect<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stage<Terminal, Begin> for Collect<T> {
    fn process(&mut self, _next: &mut Terminal, _marker: Begin) {
        assert!(!self.open, "stream pushed a second Begin before an End");
        self.open = true;
    }
}

impl<T> Stage<Terminal, End> for Collect<T> {
    fn process(&mut self, _next: &mut Terminal, _marker: End) {
        assert!(self.open, "stream pushed End without a matching Begin");
        self.open = false;
    }
}

impl<T> Stage<Terminal, Item<T>> for Collect<T> {
    fn process(&mut self, _next: &mut Terminal, item: Item<T>) {
        assert!(
            self.open,
            "stream pushed a value outside its Begin/End bracket"
        );
        self.items.push(item.0);
    }
}

/// Writes each string value as one line to a file, forwarding the stream
/// untouched.
///
/// Creation reports failure immediately. The first write failure is kept,
/// further writing stops, and [`finish`](LineWriter::finish) surfaces the
/// failure after flushing. The file handle is released when the stage is
/// dropped, whether or not it ever saw a value.
#[derive(Debug)]
pub struct LineWriter {
    path: PathBuf,
    out: BufWriter<File>,
    error: Option<io::Error>,
}

impl LineWriter {
    /// Creates or truncates the file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = PathBuf::from(path.as_ref());
        let file = File::create(&path).map_err(|source| Error::Open {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            path,
            out: BufWriter::new(file),
            error: None,
        })
    }

    /// Opens the file at `path` for appending, creating it if absent.
    pub fn append(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = PathBuf::from(path.as_ref());
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .map_err(|source| Error::Open {
                path: path.clone(),
                source,
            })?;
        Ok(Self {
            path,
            out: BufWriter::new(file),
            error: None,
        })
    }

    /// The write failure recorded during traversal, if any.
    pub fn io_error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    /// Flushes and surfaces the first failure, consuming the writer.
    pub fn finish(mut self) -> Result<(), Error> {
        let flushed = self.out.flush();
        if let Some(source) = self.error.take() {
            return Err(Error::Write {
                path: self.path,
                source,
            });
        }
        flushed.map_err(|source| Error::Write {
            path: self.path,
            source,
        })
    }
}

forward_markers!(LineWriter);

impl<K, T> Stage<K, Item<T>> for LineWriter
where
    T: AsRef<str>,
    K: Push<Item<T>>,
{
    fn process(&mut self, next: &mut K, item: Item<T>) {
        if self.error.is_none() {
            if let Err(e) = writeln!(self.out, "{}", item.0.as_ref()) {
                self.error = Some(e);
            }
        }
        next.push(item);
    }
}
