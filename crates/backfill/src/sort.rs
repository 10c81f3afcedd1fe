//! A stable comparison sort that keeps every key attached to its value

use std::cmp::Ordering;

use crate::{ordering::Orderable, Container};

/// Sort a container by the natural [Orderable] ordering of its values
///
/// Sequences stay sequences and are indexed from zero again. Keyed mappings
/// keep every key attached to its value.
///
/// Examples
///
/// ```
/// # use backfill::{keyed, sort, Container};
/// let sorted = sort(&Container::from(vec![1, 7, 3, 2, 8]));
/// assert_eq!(sorted, Container::from(vec![1, 2, 3, 7, 8]));
///
/// let sorted = sort(&keyed! { "a" => "pear", "b" => "apple" });
/// assert_eq!(sorted, keyed! { "b" => "apple", "a" => "pear" });
/// ```
#[must_use]
pub fn sort<T>(container: &Container<T>) -> Container<T>
where
    T: Orderable + Clone,
{
    sort_by(container, T::compare)
}

/// Sort a container with an explicit comparator
///
/// Returning [Ordering::Greater] from the comparator moves the left value
/// behind the right one. Values that compare equal are never swapped,
/// so the sort is stable.
///
/// Examples
///
/// ```
/// # use backfill::{keyed, sort_by};
/// let descending = sort_by(&keyed! { "a" => 15, "b" => 185, "c" => 23 }, |a, b| b.cmp(a));
/// assert_eq!(descending, keyed! { "b" => 185, "c" => 23, "a" => 15 });
/// ```
#[must_use]
pub fn sort_by<T, F>(container: &Container<T>, mut compare: F) -> Container<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut entries = crate::entries(container);
    let mut passes = 0;

    loop {
        let mut swapped = false;

        for i in 1..entries.len() {
            if compare(&entries[i - 1].1, &entries[i].1) == Ordering::Greater {
                entries.swap(i - 1, i);
                swapped = true;
            }
        }

        passes += 1;
        log::trace!("Sort pass {passes} finished (swapped: {swapped})");

        if !swapped {
            break;
        }
    }

    log::debug!("Sorted {} elements in {passes} passes", entries.len());

    if container.is_sequence() {
        Container::from_values(entries.into_iter().map(|(_, value)| value))
    } else {
        // Keys are unique, so collecting them again preserves the new order
        entries.into_iter().collect()
    }
}

/// Sort a container by a key extracted from each value
#[must_use]
pub fn sort_by_key<T, K, F>(container: &Container<T>, mut key: F) -> Container<T>
where
    T: Clone,
    K: Orderable,
    F: FnMut(&T) -> K,
{
    sort_by(container, |a, b| key(a).compare(&key(b)))
}
