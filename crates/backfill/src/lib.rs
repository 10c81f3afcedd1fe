//! Array helpers that are missing from the rust standard library in this shape.
//!
//! Every helper is a pure function over a [Container], an insertion-ordered collection
//! that represents both ordered sequences and keyed mappings. Inputs are never mutated,
//! results are always new containers.
//!
//! | Helper | Purpose |
//! |--------|---------|
//! | [some], [every], [find] | predicate scans |
//! | [sort()], [sort_by] | stable sort that keeps keys attached to their values |
//! | [flatten()] | depth-limited flattening of nested sequences |
//! | [entries()], [from_entries] | conversion to and from `(key, value)` pairs |
//!
//! Data whose element types are only known at runtime can be expressed through [Value].

pub mod container;
pub mod entries;
pub mod flatten;
pub mod ordering;
pub mod predicate;
pub mod sort;
pub mod value;

pub use container::{Container, Key};
pub use entries::{entries, from_entries};
pub use flatten::{flatten, flatten_container, Depth, Nest, Nested};
pub use ordering::Orderable;
pub use predicate::{every, every_entry, find, find_entry, position, some, some_entry};
pub use sort::{sort, sort_by, sort_by_key};
pub use value::{EntryError, ParseError, ParseErrorKind, Value};
