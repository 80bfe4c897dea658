use combidex_core::{
    ArgumentError, CombinatoricsError, RankInt,
    combinadic::{combinadic, combinadic_rank},
    num::{check_rank, combination_count},
};

use crate::{Combinatorics, Iter};

/// The `k`-element subsets of a seed, each kept in seed order.
///
/// Subsets are ranked lexicographically by their seed positions through the
/// combinatorial number system. Every instance is a subsequence of the seed.
///
/// # Examples
///
/// ```
/// use combidex::Combination;
///
/// let comb = Combination::<_, u32>::of("abcd".chars(), 2)?;
/// assert_eq!(*comb.count(), 6);
/// assert_eq!(comb.lookup(&0)?, ['a', 'b']);
/// assert_eq!(comb.lookup(&5)?, ['c', 'd']);
/// assert_eq!(comb.rank_of(&['b', 'd']), Some(4));
/// # Ok::<(), combidex::CombinatoricsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination<T, I = u64> {
    seed: Vec<T>,
    size: usize,
    count: I,
}

impl<T, I: RankInt> Combination<T, I> {
    /// Creates the `size`-element subsets of `seed`.
    ///
    /// A `size` larger than the seed is clamped to the seed length.
    ///
    /// # Errors
    ///
    /// - [`ArgumentError::EmptySeed`] if `seed` is empty.
    /// - [`ArgumentError::ZeroSize`] if `size` is zero.
    /// - [`CombinatoricsError::Overflow`] if the count does not fit in `I`.
    pub fn new(seed: Vec<T>, size: usize) -> Result<Self, CombinatoricsError> {
        if seed.is_empty() {
            return Err(ArgumentError::EmptySeed.into());
        }
        if size == 0 {
            return Err(ArgumentError::ZeroSize.into());
        }
        let size = size.min(seed.len());
        let count = combination_count(seed.len(), size)?;
        log::debug!(
            "combination: n={}, k={size}, count={count}",
            seed.len()
        );
        Ok(Self { seed, size, count })
    }

    /// Creates the single subset holding the whole seed.
    ///
    /// # Errors
    ///
    /// See [`Combination::new`].
    pub fn full(seed: Vec<T>) -> Result<Self, CombinatoricsError> {
        let size = seed.len();
        Self::new(seed, size)
    }

    /// Creates the `size`-element subsets of the elements of `iter`.
    ///
    /// # Errors
    ///
    /// See [`Combination::new`].
    pub fn of<S>(iter: S, size: usize) -> Result<Self, CombinatoricsError>
    where
        S: IntoIterator<Item = T>,
    {
        Self::new(iter.into_iter().collect(), size)
    }

    /// Returns the seed elements.
    #[must_use]
    pub fn seed(&self) -> &[T] {
        &self.seed
    }

    /// Returns the number of elements in each subset.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of subsets, `C(n, k)`.
    #[must_use]
    pub fn count(&self) -> &I {
        &self.count
    }
}

impl<T: Clone, I: RankInt> Combination<T, I> {
    /// Returns the subset at `rank`, in seed order.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatoricsError::IndexOutOfRange`] unless `0 <= rank < count`.
    pub fn lookup(&self, rank: &I) -> Result<Vec<T>, CombinatoricsError> {
        check_rank(rank, &self.count)?;
        let positions = combinadic(self.seed.len(), self.size, rank)?;
        Ok(positions
            .into_iter()
            .map(|p| self.seed[p].clone())
            .collect())
    }
}

impl<T: PartialEq, I: RankInt> Combination<T, I> {
    /// Returns the smallest rank whose subset equals `item`.
    ///
    /// Returns `None` unless `item` is a seed-order subsequence of length `size`.
    #[must_use]
    pub fn rank_of(&self, item: &[T]) -> Option<I> {
        if item.len() != self.size {
            return None;
        }
        let mut positions = Vec::with_capacity(self.size);
        let mut start = 0;
        for element in item {
            let offset = self.seed[start..].iter().position(|e| e == element)?;
            positions.push(start + offset);
            start += offset + 1;
        }
        combinadic_rank(self.seed.len(), self.size, &positions).ok()
    }
}

impl<T: Clone, I: RankInt> Combinatorics for Combination<T, I> {
    type Item = Vec<T>;
    type Rank = I;

    fn count(&self) -> &I {
        &self.count
    }

    fn lookup(&self, rank: &I) -> Result<Vec<T>, CombinatoricsError> {
        Combination::lookup(self, rank)
    }
}

impl<'a, T: Clone, I: RankInt> IntoIterator for &'a Combination<T, I> {
    type Item = Vec<T>;
    type IntoIter = Iter<'a, Combination<T, I>>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}
