//! Conversion between containers and lists of `(key, value)` entries

use crate::{Container, Key};

/// Return the `(key, value)` entries of a container in iteration order
///
/// Examples
///
/// ```
/// # use backfill::{entries, keyed, Key};
/// let pairs = entries(&keyed! { "a" => 1, 5 => 2 });
/// assert_eq!(pairs, vec![(Key::from("a"), 1), (Key::Int(5), 2)]);
/// ```
#[must_use]
pub fn entries<T>(container: &Container<T>) -> Vec<(Key, T)>
where
    T: Clone,
{
    container
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Build a container from `(key, value)` entries
///
/// Later duplicate keys overwrite the value of earlier ones, the entry keeps
/// the position at which its key first appeared.
pub fn from_entries<K, T, I>(entries: I) -> Container<T>
where
    K: Into<Key>,
    I: IntoIterator<Item = (K, T)>,
{
    entries.into_iter().collect()
}
