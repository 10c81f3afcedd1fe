//! The ordering used by [sort](crate::sort()) when no comparator is given

use std::cmp::Ordering;

/// Types with a natural three-way ordering
///
/// Unlike [Ord], this is also implemented for floating point numbers, where
/// incomparable values (`NaN`) are treated as equal to everything. A sort
/// therefore never moves them.
pub trait Orderable {
    fn compare(&self, other: &Self) -> Ordering;
}

macro_rules! impl_orderable_via_ord {
    ($($name: ty,)*) => {
        $(
            impl Orderable for $name {
                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

// Strings compare byte-wise, which is the same as comparing their code points
impl_orderable_via_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String,
);

macro_rules! impl_orderable_for_float {
    ($($name: ty,)*) => {
        $(
            impl Orderable for $name {
                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    self.partial_cmp(other).unwrap_or(Ordering::Equal)
                }
            }
        )*
    };
}

impl_orderable_for_float!(f32, f64,);

impl<T> Orderable for &T
where
    T: Orderable + ?Sized,
{
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(*other)
    }
}
