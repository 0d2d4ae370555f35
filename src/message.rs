//! Message shapes that travel between pipeline stages.
//!
//! A stage receives one of three shapes: the `Begin` marker, the `End`
//! marker, or an `Item` carrying an ordinary value. Keeping the three as
//! distinct types (rather than one enum) lets each stage implement handling
//! for exactly the shapes it cares about, and lets different positions of
//! the same chain carry different value types.

/// Marks the start of a stream traversal.
///
/// Pushed exactly once per traversal, before any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Begin;

/// Marks the end of a stream traversal.
///
/// Pushed exactly once per traversal, after the last value. A stage may
/// also push a premature `End` to terminate the stream early; this is the
/// only termination signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct End;

/// One ordinary value at a stage boundary.
///
/// `T` may be a tuple when several values arrive together, as produced by
/// [`enumerate`](crate::adapter::enumerate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item<T>(pub T);
