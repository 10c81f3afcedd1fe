//! Depth-limited flattening of nested sequences

use std::{fmt, num::ParseIntError, str::FromStr};

use crate::Container;

/// How many levels of nesting [flatten()] removes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Depth {
    Levels(usize),
    /// Keep flattening until no nested element is left
    Unbounded,
}

impl Depth {
    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Levels(0))
    }

    #[must_use]
    const fn decrement(self) -> Self {
        match self {
            Self::Levels(levels) => Self::Levels(levels.saturating_sub(1)),
            Self::Unbounded => Self::Unbounded,
        }
    }
}

impl Default for Depth {
    fn default() -> Self {
        Self::Levels(1)
    }
}

impl From<usize> for Depth {
    fn from(value: usize) -> Self {
        Self::Levels(value)
    }
}

impl FromStr for Depth {
    type Err = ParseIntError;

    /// Parses either a number of levels or one of `inf`, `infinite` and `unbounded`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "inf" | "INF" | "infinite" | "unbounded" => Ok(Self::Unbounded),
            levels => levels.parse().map(Self::Levels),
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Levels(levels) => write!(f, "{levels}"),
            Self::Unbounded => f.write_str("inf"),
        }
    }
}

/// Elements that may themselves hold a sequence of elements
pub trait Nest: Sized {
    fn is_nested(&self) -> bool;

    /// Split a nested element into its children
    ///
    /// Elements that are not nested are handed back unchanged.
    fn into_children(self) -> Result<Vec<Self>, Self>;
}

/// A generic tree of values, for flattening data without a nested representation of its own
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    #[must_use]
    pub fn into_item(self) -> Option<T> {
        match self {
            Self::Item(item) => Some(item),
            Self::List(_) => None,
        }
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(value: Vec<Nested<T>>) -> Self {
        Self::List(value)
    }
}

impl<T> Nest for Nested<T> {
    fn is_nested(&self) -> bool {
        matches!(self, Self::List(_))
    }

    fn into_children(self) -> Result<Vec<Self>, Self> {
        match self {
            Self::List(children) => Ok(children),
            item @ Self::Item(_) => Err(item),
        }
    }
}

/// Concatenate nested elements into their parent, up to the given depth
///
/// Each level is one full pass over the whole (growing) sequence. Flattening
/// stops early once no nested element is left.
///
/// Examples
///
/// ```
/// # use backfill::{flatten, Depth, Nested::{Item, List}};
/// let data = vec![Item(1), List(vec![Item(2), List(vec![Item(3)])])];
///
/// assert_eq!(
///     flatten(data.clone(), Depth::default()),
///     vec![Item(1), Item(2), List(vec![Item(3)])]
/// );
/// assert_eq!(
///     flatten(data, Depth::Unbounded),
///     vec![Item(1), Item(2), Item(3)]
/// );
/// ```
pub fn flatten<T, I>(items: I, depth: Depth) -> Vec<T>
where
    T: Nest,
    I: IntoIterator<Item = T>,
{
    let mut items: Vec<T> = items.into_iter().collect();
    let mut remaining = depth;
    let mut level = 0;

    while !remaining.is_exhausted() && items.iter().any(Nest::is_nested) {
        items = flatten_once(items);
        remaining = remaining.decrement();
        level += 1;

        log::trace!("Flattened level {level}, {} elements", items.len());
    }

    items
}

/// Flatten the values of a container into a new sequence
///
/// Keys of the outer container and of every flattened child are discarded.
#[must_use]
pub fn flatten_container<T>(container: &Container<T>, depth: Depth) -> Container<T>
where
    T: Nest + Clone,
{
    Container::from_values(flatten(container.values().cloned(), depth))
}

fn flatten_once<T: Nest>(items: Vec<T>) -> Vec<T> {
    let mut flattened = Vec::with_capacity(items.len());

    for item in items {
        match item.into_children() {
            Ok(children) => flattened.extend(children),
            Err(item) => flattened.push(item),
        }
    }

    flattened
}

#[cfg(test)]
mod tests {
    use super::{flatten, flatten_container, Depth, Nested};
    use crate::{Container, Value};

    fn items(literal: &str) -> Vec<Value> {
        match literal.parse() {
            Ok(Value::Array(array)) => array.into_values().collect(),
            other => panic!("{literal:?} is not an array literal: {other:?}"),
        }
    }

    const DATA: &str = "[1, 2, [3, 4, [5, 6, [7, 8]]]]";

    #[test]
    fn explicit_depth() {
        assert_eq!(
            flatten(items(DATA), Depth::Levels(2)),
            items("[1, 2, 3, 4, 5, 6, [7, 8]]")
        );
    }

    #[test]
    fn implicit_depth() {
        assert_eq!(
            flatten(items(DATA), Depth::default()),
            items("[1, 2, 3, 4, [5, 6, [7, 8]]]")
        );
    }

    #[test]
    fn infinite_depth() {
        assert_eq!(
            flatten(items(DATA), Depth::Unbounded),
            items("[1, 2, 3, 4, 5, 6, 7, 8]")
        );
    }

    #[test]
    fn zero_depth_is_identity() {
        assert_eq!(flatten(items(DATA), Depth::Levels(0)), items(DATA));
    }

    #[test]
    fn stops_when_nothing_is_nested() {
        assert_eq!(
            flatten(items("[[1], [2, 3]]"), Depth::Levels(100)),
            items("[1, 2, 3]")
        );
        assert!(flatten(Vec::<Value>::new(), Depth::Unbounded).is_empty());
    }

    #[test]
    fn keyed_children_contribute_values() {
        let data = items("[{a: 1, b: 2}, 3]");
        assert_eq!(flatten(data, Depth::default()), items("[1, 2, 3]"));
    }

    #[test]
    fn generic_nesting() {
        let data = vec![
            Nested::List(vec![Nested::Item('a'), Nested::List(vec![])]),
            Nested::Item('b'),
        ];
        let flat: Vec<_> = flatten(data, Depth::Unbounded)
            .into_iter()
            .filter_map(Nested::into_item)
            .collect();

        assert_eq!(flat, vec!['a', 'b']);
    }

    #[test]
    fn container_becomes_sequence() {
        let data: Container<Value> = match "{x: [1, 2], y: 3}".parse() {
            Ok(Value::Array(array)) => array,
            other => panic!("unexpected {other:?}"),
        };

        let flat = flatten_container(&data, Depth::default());
        assert!(flat.is_sequence());
        assert_eq!(flat, Container::from(items("[1, 2, 3]")));
    }

    #[test]
    fn parse_depth() {
        assert_eq!("2".parse::<Depth>(), Ok(Depth::Levels(2)));
        assert_eq!("inf".parse::<Depth>(), Ok(Depth::Unbounded));
        assert!("-1".parse::<Depth>().is_err());
    }
}
