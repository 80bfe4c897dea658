use std::iter;

use combidex_core::{
    ArgumentError, CombinatoricsError, RankInt,
    num::{check_rank, from_usize, power},
};

use crate::{Combinatorics, Iter, radix};

/// Every subset of a seed, including the empty one.
///
/// Bit `i` of a rank selects seed element `i`; selected elements appear in
/// seed order.
///
/// # Examples
///
/// ```
/// use combidex::PowerSet;
///
/// let set = PowerSet::<_, u32>::new(vec![1, 2, 3])?;
/// assert_eq!(*set.count(), 8);
/// assert_eq!(set.lookup(&0)?, []);
/// assert_eq!(set.lookup(&5)?, [1, 3]);
/// assert_eq!(set.lookup(&7)?, [1, 2, 3]);
/// # Ok::<(), combidex::CombinatoricsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PowerSet<T, I = u64> {
    seed: Vec<T>,
    count: I,
}

impl<T, I: RankInt> PowerSet<T, I> {
    /// Creates the power set of `seed`.
    ///
    /// # Errors
    ///
    /// - [`ArgumentError::EmptySeed`] if `seed` is empty.
    /// - [`CombinatoricsError::Overflow`] if `2^n` does not fit in `I`.
    pub fn new(seed: Vec<T>) -> Result<Self, CombinatoricsError> {
        if seed.is_empty() {
            return Err(ArgumentError::EmptySeed.into());
        }
        let count = power(&from_usize(2)?, seed.len())?;
        log::debug!("power set: n={}, count={count}", seed.len());
        Ok(Self { seed, count })
    }

    /// Creates the power set of the elements of `iter`.
    ///
    /// # Errors
    ///
    /// See [`PowerSet::new`].
    pub fn of<S>(iter: S) -> Result<Self, CombinatoricsError>
    where
        S: IntoIterator<Item = T>,
    {
        Self::new(iter.into_iter().collect())
    }

    /// Returns the seed elements.
    #[must_use]
    pub fn seed(&self) -> &[T] {
        &self.seed
    }

    /// Returns the seed length, which is the length of the largest subset.
    #[must_use]
    pub fn size(&self) -> usize {
        self.seed.len()
    }

    /// Returns the number of subsets, `2^n`.
    #[must_use]
    pub fn count(&self) -> &I {
        &self.count
    }
}

impl<T: Clone, I: RankInt> PowerSet<T, I> {
    /// Returns the subset at `rank`.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatoricsError::IndexOutOfRange`] unless `0 <= rank < count`.
    pub fn lookup(&self, rank: &I) -> Result<Vec<T>, CombinatoricsError> {
        check_rank(rank, &self.count)?;
        let bits = radix::digits(rank, iter::repeat_n(2, self.seed.len()))?;
        Ok(self
            .seed
            .iter()
            .zip(bits)
            .filter(|&(_, bit)| bit == 1)
            .map(|(e, _)| e.clone())
            .collect())
    }
}

impl<T: PartialEq, I: RankInt> PowerSet<T, I> {
    /// Returns the smallest rank whose subset equals `item`.
    ///
    /// Returns `None` unless `item` is a seed-order subsequence.
    #[must_use]
    pub fn rank_of(&self, item: &[T]) -> Option<I> {
        let mut bits = vec![0; self.seed.len()];
        let mut start = 0;
        for element in item {
            let offset = self.seed[start..].iter().position(|e| e == element)?;
            bits[start + offset] = 1;
            start += offset + 1;
        }
        radix::value(&bits, &vec![2; self.seed.len()]).ok()
    }
}

impl<T: Clone, I: RankInt> Combinatorics for PowerSet<T, I> {
    type Item = Vec<T>;
    type Rank = I;

    fn count(&self) -> &I {
        &self.count
    }

    fn lookup(&self, rank: &I) -> Result<Vec<T>, CombinatoricsError> {
        PowerSet::lookup(self, rank)
    }
}

impl<'a, T: Clone, I: RankInt> IntoIterator for &'a PowerSet<T, I> {
    type Item = Vec<T>;
    type IntoIter = Iter<'a, PowerSet<T, I>>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use num_bigint::BigUint;

    use super::*;
    use crate::testing;

    #[test]
    fn test_extreme_ranks() {
        let set = PowerSet::<_, u32>::of("abcd".chars()).unwrap();
        assert_eq!(*set.count(), 16);
        assert_eq!(set.lookup(&0), Ok(vec![]));
        assert_eq!(set.lookup(&1), Ok(vec!['a']));
        assert_eq!(set.lookup(&8), Ok(vec!['d']));
        assert_eq!(set.lookup(&15), Ok(vec!['a', 'b', 'c', 'd']));
        assert_eq!(set.lookup(&16), Err(CombinatoricsError::IndexOutOfRange));
    }

    #[test]
    fn test_all_subsets_are_distinct_subsequences() {
        let seed: Vec<u8> = (0..7).collect();
        let set = PowerSet::<_, u16>::new(seed.clone()).unwrap();
        let all: Vec<_> = set.iter().collect();
        assert_eq!(all.len(), 128);
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), 128);
        for (rank, subset) in (0..).zip(&all) {
            assert!(testing::is_subsequence(subset, &seed), "{subset:?}");
            assert_eq!(set.rank_of(subset), Some(rank));
        }
    }

    #[test]
    fn test_invalid_construction() {
        assert_eq!(
            PowerSet::<u8, u32>::new(vec![]),
            Err(CombinatoricsError::InvalidArgument(ArgumentError::EmptySeed))
        );
        assert_eq!(
            PowerSet::<_, u8>::of(0..8),
            Err(CombinatoricsError::Overflow)
        );
        assert!(PowerSet::<_, u8>::of(0..7).is_ok());
    }

    #[test]
    fn test_rank_of_rejects_out_of_order() {
        let set = PowerSet::<_, u32>::new(vec![1, 2, 3]).unwrap();
        assert_eq!(set.rank_of(&[]), Some(0));
        assert_eq!(set.rank_of(&[2, 3]), Some(6));
        assert_eq!(set.rank_of(&[3, 2]), None);
        assert_eq!(set.rank_of(&[4]), None);
    }

    #[test]
    fn test_big_seed() {
        let set = PowerSet::<_, BigUint>::of(0..200).unwrap();
        assert_eq!(*set.count(), BigUint::from(1_u8) << 200_u32);
        let last = set.count().clone() - 1_u8;
        let full: Vec<_> = (0..200).collect();
        assert_eq!(set.lookup(&last).unwrap(), full);
        assert_eq!(set.rank_of(&full), Some(last));
    }
}
