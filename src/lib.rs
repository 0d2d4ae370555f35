//! # pushpipe
//!
//! A push-based stream-processing pipeline library.
//!
//! A pipeline is a fixed, statically ordered chain of small stateful
//! stages. A source stage manufactures values and pushes them down the
//! chain; every later stage receives what its predecessor forwarded and
//! decides what its own successor sees. There is no intermediate buffering:
//! each value travels the whole chain, depth first, before the next one is
//! produced.
//!
//! ## Model
//!
//! - **Messages**: a traversal is bracketed by the `Begin` and `End`
//!   markers; ordinary values travel as `Item<T>`, where `T` may differ
//!   from one stage boundary to the next.
//! - **Stages**: one unit of logic plus private state. A stage may forward
//!   a message untouched, suppress it, reshape it, expand it into several
//!   pushes, or end the stream early by pushing `End` itself.
//! - **Composition**: chains are built left to right with `|` and checked
//!   entirely at compile time; a stage that cannot handle what reaches its
//!   position is a type error, not a runtime surprise.
//! - **State**: each position owns its stage for the chain's lifetime.
//!   Counters and indexes are not reset between runs; rebuild or clone a
//!   chain when a fresh traversal matters.
//!
//! ## Example
//!
//! ```
//! use pushpipe::{Collect, filter, from_iter, map, pipeline};
//!
//! let mut evens = Collect::new();
//! let mut chain = pipeline()
//!     | from_iter(1..11)
//!     | filter(|n: &i32| n % 2 == 0)
//!     | map(|n: i32| n * 10)
//!     | &mut evens;
//! chain.run();
//! assert_eq!(evens.items(), [20, 40, 60, 80, 100]);
//! ```

pub mod adapter;
pub mod error;
pub mod message;
pub mod pipeline;
pub mod sink;
pub mod source;
pub mod stage;

pub use adapter::{
    Enumerate, Expand, Filter, FlatMap, Inject, Inspect, Map, Skip, Take, enumerate, expand,
    filter, flat_map, inspect, map, skip, take,
};
pub use error::Error;
pub use message::{Begin, End, Item};
pub use pipeline::{Append, Builder, Pipeline, Push, Terminal, pipeline};
pub use sink::{Collect, Hole, LineWriter, Print, hole, print};
pub use source::{IterSource, LineSource, from_iter};
pub use stage::Stage;
