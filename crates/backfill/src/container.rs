//! An insertion-ordered collection that covers both ordered sequences and keyed mappings.
//!
//! A [Container] is always a list of `(key, value)` entries. An ordered sequence is
//! nothing more than a container whose keys happen to be `0, 1, ..., n - 1` in order,
//! so every helper in this crate handles both shapes through the same code path.

use std::fmt;

use indexmap::{map, IndexMap};

/// The key of a single [Container] entry
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    #[inline]
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(int) => Some(*int),
            Self::Str(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Str(string) => Some(string),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(int) => write!(f, "{int}"),
            Self::Str(string) => f.write_str(string),
        }
    }
}

macro_rules! impl_key_from_int {
    ($($int: ty,)*) => {
        $(
            impl From<$int> for Key {
                fn from(value: $int) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_key_from_int!(i8, i16, i32, i64, u8, u16, u32,);

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        // Positions index into a Vec, which never holds more than isize::MAX elements
        Self::Int(value as i64)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

pub type Iter<'a, T> = map::Iter<'a, Key, T>;
pub type IntoIter<T> = map::IntoIter<Key, T>;

/// An ordered collection of uniquely keyed values
///
/// Iteration always follows insertion order. Inserting a key that is already present
/// replaces its value but keeps the position of the original entry.
///
/// Examples
///
/// ```
/// # use backfill::{keyed, Container, Key};
/// let sequence = Container::from(vec![15, 185, 23]);
/// assert!(sequence.is_sequence());
///
/// let mapping = keyed! { "a" => 15, "b" => 185, "c" => 23 };
/// assert!(!mapping.is_sequence());
/// assert_eq!(mapping.get("b"), Some(&185));
/// ```
#[derive(Clone, Debug)]
pub struct Container<T> {
    elements: IndexMap<Key, T>,
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Self {
            elements: IndexMap::default(),
        }
    }
}

impl<T> Container<T> {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: IndexMap::with_capacity(capacity),
        }
    }

    /// Create an ordered sequence, keying each value by its position
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .enumerate()
            .map(|(position, value)| (Key::from(position), value))
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Insert a value, returning the previous value for that key
    ///
    /// An existing entry keeps its position.
    pub fn insert<K>(&mut self, key: K, value: T) -> Option<T>
    where
        K: Into<Key>,
    {
        self.elements.insert(key.into(), value)
    }

    /// Append a value under the next free integer key
    ///
    /// The next free key is one past the largest non-negative integer key,
    /// or `0` if there is none.
    pub fn push(&mut self, value: T) {
        let next_index = self
            .keys()
            .filter_map(Key::as_int)
            .filter(|index| *index >= 0)
            .max()
            .map_or(0, |max| max + 1);

        self.elements.insert(Key::Int(next_index), value);
    }

    #[must_use]
    pub fn get<K>(&self, key: K) -> Option<&T>
    where
        K: Into<Key>,
    {
        self.elements.get(&key.into())
    }

    /// Return the entry at the given iteration position
    #[inline]
    #[must_use]
    pub fn get_index(&self, position: usize) -> Option<(&Key, &T)> {
        self.elements.get_index(position)
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.elements.iter()
    }

    #[inline]
    pub fn keys(&self) -> map::Keys<'_, Key, T> {
        self.elements.keys()
    }

    #[inline]
    pub fn values(&self) -> map::Values<'_, Key, T> {
        self.elements.values()
    }

    #[inline]
    pub fn into_values(self) -> map::IntoValues<Key, T> {
        self.elements.into_values()
    }

    /// Return `true` if the keys are exactly `0..len` in iteration order
    ///
    /// Any gap, any string key and any start other than zero make the
    /// container a keyed mapping instead.
    #[must_use]
    pub fn is_sequence(&self) -> bool {
        self.keys()
            .zip(0_i64..)
            .all(|(key, index)| key.as_int() == Some(index))
    }

    /// Consume the container, returning its `(key, value)` entries in order
    #[must_use]
    pub fn into_entries(self) -> Vec<(Key, T)> {
        self.elements.into_iter().collect()
    }
}

impl<T> PartialEq for Container<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        // Unlike IndexMap, two containers are only equal if their entries are in the same order
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for Container<T> where T: Eq {}

impl<T> From<Vec<T>> for Container<T> {
    fn from(value: Vec<T>) -> Self {
        Self::from_values(value)
    }
}

impl<T, const N: usize> From<[T; N]> for Container<T> {
    fn from(value: [T; N]) -> Self {
        Self::from_values(value)
    }
}

impl<K, T> FromIterator<(K, T)> for Container<T>
where
    K: Into<Key>,
{
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut container = Self::new();
        container.extend(iter);
        container
    }
}

impl<K, T> Extend<(K, T)> for Container<T>
where
    K: Into<Key>,
{
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<T> IntoIterator for Container<T> {
    type Item = (Key, T);
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = (&'a Key, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Build a keyed [Container] from `key => value` pairs
///
/// Later duplicate keys overwrite earlier ones.
#[macro_export]
macro_rules! keyed {
    () => {
        $crate::Container::new()
    };
    ($($key: expr => $value: expr),+ $(,)?) => {{
        let mut container = $crate::Container::new();
        $(
            container.insert($key, $value);
        )+
        container
    }};
}
