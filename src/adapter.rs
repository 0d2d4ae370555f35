//! Stage adapters: the building blocks between a source and a sink.
//!
//! Every adapter forwards `Begin` and `End` untouched unless documented
//! otherwise, so the bracket around the value sequence survives any
//! combination of them. Constructors are free functions, so a chain reads
//! as a single expression:
//!
//! ```text
//! pipeline() | from_iter(1..100) | skip(20) | take(20) | print()
//! ```

use crate::message::{Begin, End, Item};
use crate::pipeline::Push;
use crate::stage::{Stage, forward_markers};

/// Suppresses the first `count` values, forwarding the rest.
///
/// `End` is forwarded unconditionally, so the bracket closes even when the
/// stream runs out before the budget does.
#[derive(Debug, Clone)]
pub struct Skip {
    remaining: usize,
}

/// Creates a stage that drops the first `count` values.
pub fn skip(count: usize) -> Skip {
    Skip { remaining: count }
}

forward_markers!(Skip);

impl<K, T> Stage<K, Item<T>> for Skip
where
    K: Push<Item<T>>,
{
    fn process(&mut self, next: &mut K, item: Item<T>) {
        if self.remaining > 0 {
            self.remaining -= 1;
            return;
        }
        next.push(item);
    }
}

/// Forwards the first `count` values, then ends the stream.
///
/// The moment the budget is spent this stage pushes `End` itself and
/// suppresses everything that still arrives from upstream, including the
/// stream's own `End`. The budget is not replenished between runs.
#[derive(Debug, Clone)]
pub struct Take {
    remaining: usize,
}

/// Creates a stage that keeps only the first `count` values.
pub fn take(count: usize) -> Take {
    Take { remaining: count }
}

impl<K> Stage<K, Begin> for Take
where
    K: Push<Begin> + Push<End>,
{
    fn process(&mut self, next: &mut K, marker: Begin) {
        next.push(marker);
        // An exhausted budget ends the stream before any value flows.
        if self.remaining == 0 {
            next.push(End);
        }
    }
}

impl<K> Stage<K, End> for Take
where
    K: Push<End>,
{
    fn process(&mut self, next: &mut K, marker: End) {
        if self.remaining > 0 {
            next.push(marker);
        }
    }
}

impl<K, T> Stage<K, Item<T>> for Take
where
    K: Push<Item<T>> + Push<End>,
{
    fn process(&mut self, next: &mut K, item: Item<T>) {
        if self.remaining == 0 {
            return;
        }
        next.push(item);
        self.remaining -= 1;
        if self.remaining == 0 {
            next.push(End);
        }
    }
}

/// Forwards only the values the predicate accepts.
#[derive(Debug, Clone)]
pub struct Filter<F> {
    predicate: F,
}

/// Creates a stage that keeps values satisfying `predicate`.
pub fn filter<F>(predicate: F) -> Filter<F> {
    Filter { predicate }
}

forward_markers!(<F> Filter<F>);

impl<K, T, F> Stage<K, Item<T>> for Filter<F>
where
    K: Push<Item<T>>,
    F: FnMut(&T) -> bool,
{
    fn process(&mut self, next: &mut K, item: Item<T>) {
        if (self.predicate)(&item.0) {
            next.push(item);
        }
    }
}

/// Forwards `f(value)` for every value, one output per input.
#[derive(Debug, Clone)]
pub struct Map<F> {
    f: F,
}

/// Creates a stage that transforms every value with `f`.
pub fn map<F>(f: F) -> Map<F> {
    Map { f }
}

forward_markers!(<F> Map<F>);

impl<K, T, U, F> Stage<K, Item<T>> for Map<F>
where
    K: Push<Item<U>>,
    F: FnMut(T) -> U,
{
    fn process(&mut self, next: &mut K, item: Item<T>) {
        next.push(Item((self.f)(item.0)));
    }
}

/// Observes every value without changing the stream.
#[derive(Debug, Clone)]
pub struct Inspect<F> {
    f: F,
}

/// Creates a stage that calls `f` on a reference to every value and
/// forwards the value unchanged.
pub fn inspect<F>(f: F) -> Inspect<F> {
    Inspect { f }
}

forward_markers!(<F> Inspect<F>);

impl<K, T, F> Stage<K, Item<T>> for Inspect<F>
where
    K: Push<Item<T>>,
    F: FnMut(&T),
{
    fn process(&mut self, next: &mut K, item: Item<T>) {
        (self.f)(&item.0);
        next.push(item);
    }
}

/// Tags each value with its position in the stream.
///
/// The index keeps counting across runs of the same chain.
#[derive(Debug, Clone, Default)]
pub struct Enumerate {
    index: usize,
}

/// Creates a stage that forwards `(index, value)` pairs.
pub fn enumerate() -> Enumerate {
    Enumerate { index: 0 }
}

forward_markers!(Enumerate);

impl<K, T> Stage<K, Item<T>> for Enumerate
where
    K: Push<Item<(usize, T)>>,
{
    fn process(&mut self, next: &mut K, item: Item<T>) {
        let tagged = Item((self.index, item.0));
        self.index += 1;
        next.push(tagged);
    }
}

/// Forwards every element of `f(value)`, so one input may become zero, one,
/// or many outputs of a single shape.
#[derive(Debug, Clone)]
pub struct FlatMap<F> {
    f: F,
}

/// Creates a stage that expands every value into the elements `f` returns.
pub fn flat_map<F>(f: F) -> FlatMap<F> {
    FlatMap { f }
}

forward_markers!(<F> FlatMap<F>);

impl<K, T, I, F> Stage<K, Item<T>> for FlatMap<F>
where
    K: Push<Item<I::Item>>,
    I: IntoIterator,
    F: FnMut(T) -> I,
{
    fn process(&mut self, next: &mut K, item: Item<T>) {
        for value in (self.f)(item.0) {
            next.push(Item(value));
        }
    }
}

/// Per-value logic with direct access to the continuation.
///
/// This is the escape hatch for stages whose output shape depends on the
/// value at hand: the implementation pushes whatever the downstream chain
/// accepts, zero or more times per input. Markers are forwarded by the
/// surrounding [`Expand`] stage, so an injector only deals with values. A
/// stage that needs to end the stream early must control the markers too,
/// so it implements [`Stage`] directly, the way [`Take`] does.
pub trait Inject<K, T> {
    /// Handle one value, pushing any number of messages to `next`.
    fn inject(&mut self, next: &mut K, value: T);
}

/// Runs an [`Inject`] implementation on every value, forwarding markers
/// around it.
#[derive(Debug, Clone)]
pub struct Expand<J> {
    injector: J,
}

/// Creates a stage around a continuation-injecting transform.
pub fn expand<J>(injector: J) -> Expand<J> {
    Expand { injector }
}

forward_markers!(<J> Expand<J>);

impl<K, T, J> Stage<K, Item<T>> for Expand<J>
where
    J: Inject<K, T>,
{
    fn process(&mut self, next: &mut K, item: Item<T>) {
        self.injector.inject(next, item.0);
    }
}
