use std::ops::Range;

use combidex_core::{CombinatoricsError, RankInt};

use crate::{Iter, iter};

/// A finite family of instances in a fixed total order, addressable by rank.
///
/// Implementors compute [`count`](Combinatorics::count) once at construction
/// and answer every [`lookup`](Combinatorics::lookup) independently, so any
/// rank can be visited without visiting the ones before it.
///
/// # Examples
///
/// ```
/// use combidex::{Combinatorics, Combination, Permutation};
///
/// fn last<C: Combinatorics<Rank = u64>>(c: &C) -> C::Item {
///     c.lookup(&(c.count() - 1)).unwrap()
/// }
///
/// let p = Permutation::<_, u64>::new(vec![1, 2, 3], 2)?;
/// let c = Combination::<_, u64>::new(vec![1, 2, 3], 2)?;
/// assert_eq!(last(&p), vec![3, 2]);
/// assert_eq!(last(&c), vec![2, 3]);
/// # Ok::<(), combidex::CombinatoricsError>(())
/// ```
pub trait Combinatorics {
    /// The instance type produced by a lookup.
    type Item;
    /// The integer type used for ranks and the count.
    type Rank: RankInt;

    /// Returns the number of distinct instances.
    fn count(&self) -> &Self::Rank;

    /// Returns the instance at `rank`.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatoricsError::IndexOutOfRange`] unless `0 <= rank < count`.
    fn lookup(&self, rank: &Self::Rank) -> Result<Self::Item, CombinatoricsError>;

    /// Returns an iterator over every instance in rank order.
    fn iter(&self) -> Iter<'_, Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }

    /// Returns an iterator over the instances whose ranks lie in `range`.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatoricsError::IndexOutOfRange`] if `range` is not within
    /// `0..=count` or is reversed.
    fn iter_range(
        &self,
        range: Range<Self::Rank>,
    ) -> Result<Iter<'_, Self>, CombinatoricsError>
    where
        Self: Sized,
    {
        Iter::from_range(self, range)
    }

    /// Splits `0..count` into at most `parts` contiguous ranges of near-equal size.
    ///
    /// # Errors
    ///
    /// Returns an error if `parts` is zero.
    fn partition(&self, parts: usize) -> Result<Vec<Range<Self::Rank>>, CombinatoricsError> {
        iter::partition(self.count(), parts)
    }
}
