//! Sources: stages that manufacture a stream from no upstream input.
//!
//! A source handles the unit driver message and pushes `Begin`, zero or
//! more values, then `End`, in that order, exactly once per traversal, and
//! nothing else.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::message::{Begin, End, Item};
use crate::pipeline::Push;
use crate::stage::Stage;

/// Streams the elements of a cloneable iterator.
///
/// The iterator is cloned for every traversal, so the same chain replays
/// the same sequence each run.
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iter: I,
}

/// Creates a source from anything iterable, such as a range, an array, or
/// a `Vec`.
pub fn from_iter<I: IntoIterator>(items: I) -> IterSource<I::IntoIter> {
    IterSource {
        iter: items.into_iter(),
    }
}

impl<K, I> Stage<K, ()> for IterSource<I>
where
    I: Iterator + Clone,
    K: Push<Begin> + Push<Item<I::Item>> + Push<End>,
{
    fn process(&mut self, next: &mut K, _drive: ()) {
        next.push(Begin);
        for value in self.iter.clone() {
            next.push(Item(value));
        }
        next.push(End);
    }
}

/// Streams a text file line by line, terminators stripped.
///
/// Opening reports failure immediately, so a missing file is handled
/// before any chain is composed around it. The reader is consumed by the
/// first traversal; later runs push an empty stream. A read failure in the
/// middle of a traversal ends the value sequence (the closing `End` is
/// still pushed) and is kept for the caller to inspect afterwards.
#[derive(Debug)]
pub struct LineSource {
    reader: BufReader<File>,
    error: Option<io::Error>,
}

impl LineSource {
    /// Opens a text file for streaming.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Open {
            path: PathBuf::from(path),
            source,
        })?;
        Ok(Self {
            reader: BufReader::new(file),
            error: None,
        })
    }

    /// Opens a text file and discards its first line.
    pub fn open_skip_header(path: impl AsRef<Path>) -> Result<Self, Error> {
        let mut source = Self::open(&path)?;
        let mut header = String::new();
        source
            .reader
            .read_line(&mut header)
            .map_err(|source| Error::Open {
                path: PathBuf::from(path.as_ref()),
                source,
            })?;
        Ok(source)
    }

    /// The read failure that ended the last traversal early, if any.
    pub fn io_error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }
}

impl<K> Stage<K, ()> for LineSource
where
    K: Push<Begin> + Push<Item<String>> + Push<End>,
{
    fn process(&mut self, next: &mut K, _drive: ()) {
        next.push(Begin);
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {
                    while line.ends_with('\n') || line.ends_with('\r') {
                        line.pop();
                    }
                    next.push(Item(std::mem::take(&mut line)));
                }
                Err(e) => {
                    self.error = Some(e);
                    break;
                }
            }
        }
        next.push(End);
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::pipeline::pipeline;
    use crate::sink::Collect;

    #[test]
    fn test_from_iter_streams_a_range() {
        let mut out = Collect::new();
        let mut chain = pipeline() | from_iter(1..5) | &mut out;
        chain.run();
        assert_eq!(out.items(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_from_iter_streams_a_vec() {
        let mut out = Collect::new();
        let mut chain = pipeline() | from_iter(vec!["a", "b"]) | &mut out;
        chain.run();
        assert_eq!(out.items(), ["a", "b"]);
    }

    #[test]
    fn test_from_iter_replays_on_every_run() {
        let mut out = Collect::new();
        let mut chain = pipeline() | from_iter(1..3) | &mut out;
        chain.run();
        chain.run();
        assert_eq!(out.items(), [1, 2, 1, 2]);
    }

    #[test]
    fn test_line_source_reads_lines_without_terminators() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "alpha\nbeta\ngamma\n").unwrap();

        let mut out = Collect::new();
        let mut chain = pipeline() | LineSource::open(&path).unwrap() | &mut out;
        chain.run();
        assert_eq!(out.items(), ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_line_source_strips_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dos.txt");
        fs::write(&path, "one\r\ntwo\r\n").unwrap();

        let mut out = Collect::new();
        let mut chain = pipeline() | LineSource::open(&path).unwrap() | &mut out;
        chain.run();
        assert_eq!(out.items(), ["one", "two"]);
    }

    #[test]
    fn test_line_source_reads_a_final_unterminated_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.txt");
        fs::write(&path, "first\nlast").unwrap();

        let mut out = Collect::new();
        let mut chain = pipeline() | LineSource::open(&path).unwrap() | &mut out;
        chain.run();
        assert_eq!(out.items(), ["first", "last"]);
    }

    #[test]
    fn test_line_source_skip_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("with_header.txt");
        fs::write(&path, "HEADER\nrow one\nrow two\n").unwrap();

        let mut out = Collect::new();
        let mut chain = pipeline() | LineSource::open_skip_header(&path).unwrap() | &mut out;
        chain.run();
        assert_eq!(out.items(), ["row one", "row two"]);
    }

    #[test]
    fn test_line_source_open_failure_is_reported_before_composition() {
        let err = LineSource::open("/no/such/dir/input.txt").unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
    }

    #[test]
    fn test_line_source_is_consumed_by_the_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("once.txt");
        fs::write(&path, "only\n").unwrap();

        let mut out = Collect::new();
        let mut chain = pipeline() | LineSource::open(&path).unwrap() | &mut out;
        chain.run();
        chain.run();
        // The second traversal is a well-formed empty stream.
        assert_eq!(out.items(), ["only"]);
    }
}
