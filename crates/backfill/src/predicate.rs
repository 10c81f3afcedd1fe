//! Existential, universal and linear-search scans over a [Container]
//!
//! The plain variants hand the predicate each value together with its iteration
//! position, regardless of the container's keys. The `_entry` variants hand it
//! the actual key instead.

use crate::{Container, Key};

/// Return `true` if the predicate holds for at least one value
///
/// Stops at the first match. An empty container never matches.
///
/// Examples
///
/// ```
/// # use backfill::{keyed, some};
/// let ages = keyed! { "Kate" => 31, "Sam" => 17 };
/// assert!(some(|age, _| *age < 18, &ages));
/// ```
pub fn some<T, P>(mut predicate: P, container: &Container<T>) -> bool
where
    P: FnMut(&T, usize) -> bool,
{
    container
        .values()
        .enumerate()
        .any(|(position, value)| predicate(value, position))
}

/// Return `true` if the predicate holds for every value
///
/// Stops at the first failure. An empty container always matches.
pub fn every<T, P>(mut predicate: P, container: &Container<T>) -> bool
where
    P: FnMut(&T, usize) -> bool,
{
    container
        .values()
        .enumerate()
        .all(|(position, value)| predicate(value, position))
}

/// Return the first value for which the predicate holds
pub fn find<T, P>(mut predicate: P, container: &Container<T>) -> Option<&T>
where
    P: FnMut(&T, usize) -> bool,
{
    container
        .values()
        .enumerate()
        .find(|&(position, value)| predicate(value, position))
        .map(|(_, value)| value)
}

/// Return the iteration position of the first value for which the predicate holds
pub fn position<T, P>(mut predicate: P, container: &Container<T>) -> Option<usize>
where
    P: FnMut(&T, usize) -> bool,
{
    container
        .values()
        .enumerate()
        .find(|&(position, value)| predicate(value, position))
        .map(|(position, _)| position)
}

/// Like [some], except that the predicate receives the key of each entry
pub fn some_entry<T, P>(mut predicate: P, container: &Container<T>) -> bool
where
    P: FnMut(&Key, &T) -> bool,
{
    container.iter().any(|(key, value)| predicate(key, value))
}

/// Like [every], except that the predicate receives the key of each entry
pub fn every_entry<T, P>(mut predicate: P, container: &Container<T>) -> bool
where
    P: FnMut(&Key, &T) -> bool,
{
    container.iter().all(|(key, value)| predicate(key, value))
}

/// Return the first entry for which the predicate holds
pub fn find_entry<T, P>(mut predicate: P, container: &Container<T>) -> Option<(&Key, &T)>
where
    P: FnMut(&Key, &T) -> bool,
{
    container.iter().find(|&(key, value)| predicate(key, value))
}
