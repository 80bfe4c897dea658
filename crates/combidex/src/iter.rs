//! Rank-order iteration and rank range partitioning.

use std::{fmt, iter::FusedIterator, ops::Range};

use combidex_core::{
    ArgumentError, CombinatoricsError, RankInt,
    num::{from_usize, to_usize},
};
use num_traits::{CheckedAdd as _, One as _, ToPrimitive as _, Zero as _};

use crate::Combinatorics;

/// Iterator over the instances of a [`Combinatorics`] structure in rank order.
///
/// Each item is computed from its rank alone, so the iterator holds only two
/// rank cursors. Calling [`Combinatorics::iter`] again restarts from rank `0`.
///
/// # Examples
///
/// ```
/// use combidex::{Combinatorics, PowerSet};
///
/// let set = PowerSet::<_, u32>::new(vec!['a', 'b'])?;
/// let all: Vec<_> = set.iter().collect();
/// assert_eq!(all, [vec![], vec!['a'], vec!['b'], vec!['a', 'b']]);
///
/// let reversed: Vec<_> = set.iter().rev().take(1).collect();
/// assert_eq!(reversed, [vec!['a', 'b']]);
/// # Ok::<(), combidex::CombinatoricsError>(())
/// ```
pub struct Iter<'a, C: Combinatorics> {
    source: &'a C,
    front: C::Rank,
    back: C::Rank,
}

impl<'a, C: Combinatorics> Iter<'a, C> {
    /// Creates an iterator over every rank of `source`.
    #[must_use]
    pub fn new(source: &'a C) -> Self {
        Self {
            source,
            front: <C::Rank>::zero(),
            back: source.count().clone(),
        }
    }

    /// Creates an iterator over the ranks in `range`.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatoricsError::IndexOutOfRange`] if `range` is reversed or
    /// not within `0..=count`.
    pub fn from_range(
        source: &'a C,
        range: Range<C::Rank>,
    ) -> Result<Self, CombinatoricsError> {
        let Range { start, end } = range;
        if start < <C::Rank>::zero() || end > *source.count() || start > end {
            return Err(CombinatoricsError::IndexOutOfRange);
        }
        Ok(Self {
            source,
            front: start,
            back: end,
        })
    }

    /// Returns the number of ranks not yet visited.
    #[must_use]
    pub fn remaining(&self) -> C::Rank {
        self.back.clone() - self.front.clone()
    }

    fn take_at(&mut self, rank: &C::Rank) -> Option<C::Item> {
        match self.source.lookup(rank) {
            Ok(item) => Some(item),
            Err(err) => {
                log::error!("lookup failed at rank {rank}: {err}");
                self.front = self.back.clone();
                None
            }
        }
    }
}

impl<C: Combinatorics> Clone for Iter<'_, C> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<C: Combinatorics> fmt::Debug for Iter<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish_non_exhaustive()
    }
}

impl<C: Combinatorics> Iterator for Iter<'_, C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let rank = self.front.clone();
        self.front = rank.clone() + <C::Rank>::one();
        self.take_at(&rank)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining().to_usize() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let target = from_usize::<C::Rank>(n)
            .ok()
            .and_then(|n| self.front.checked_add(&n));
        match target {
            Some(target) if target < self.back => {
                self.front = target;
                self.next()
            }
            _ => {
                self.front = self.back.clone();
                None
            }
        }
    }
}

impl<C: Combinatorics> DoubleEndedIterator for Iter<'_, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back = self.back.clone() - <C::Rank>::one();
        let rank = self.back.clone();
        self.take_at(&rank)
    }
}

impl<C: Combinatorics> FusedIterator for Iter<'_, C> {}

/// Splits `0..count` into at most `parts` contiguous, non-empty ranges.
///
/// Ranges are returned in rank order, cover `0..count` exactly, and differ in
/// length by at most one. Fewer than `parts` ranges are returned when `count`
/// is smaller than `parts`.
///
/// # Errors
///
/// Returns [`ArgumentError::ZeroParts`] if `parts` is zero.
///
/// # Examples
///
/// ```
/// use combidex::partition;
///
/// assert_eq!(partition(&10_u32, 3)?, [0..4, 4..7, 7..10]);
/// assert_eq!(partition(&2_u32, 4)?, [0..1, 1..2]);
/// # Ok::<(), combidex::CombinatoricsError>(())
/// ```
pub fn partition<I: RankInt>(
    count: &I,
    parts: usize,
) -> Result<Vec<Range<I>>, CombinatoricsError> {
    if parts == 0 {
        return Err(ArgumentError::ZeroParts.into());
    }
    if *count <= I::zero() {
        return Ok(Vec::new());
    }
    let parts = match count.to_usize() {
        Some(count) => parts.min(count),
        None => parts,
    };
    let divisor = from_usize::<I>(parts)?;
    let base = count.clone() / divisor.clone();
    let longer = to_usize(&(count.clone() % divisor))?;

    let mut ranges = Vec::with_capacity(parts);
    let mut start = I::zero();
    for i in 0..parts {
        let mut end = start.clone() + base.clone();
        if i < longer {
            end = end + I::one();
        }
        ranges.push(start..end.clone());
        start = end;
    }
    log::trace!("partitioned {count} ranks into {ranges:?}");
    Ok(ranges)
}
