use combidex_core::{
    ArgumentError, CombinatoricsError, RankInt,
    factoradic::{factoradic_prefix, factoradic_prefix_value},
    num::{check_rank, falling_factorial, to_usize},
};

use crate::{Combinatorics, Iter};

/// The ordered `k`-selections of a seed, ranked by Lehmer code.
///
/// The instance at rank `r` is built by removing elements one at a time from a
/// working copy of the seed. The `j`-th factoradic digit of `r · (n − k)!`
/// is a position into what is left of the copy after the first `j` removals,
/// so the order is lexicographic in seed positions: rank `0` is the first `k`
/// seed elements and the last rank is the last `k` seed elements reversed.
///
/// # Examples
///
/// ```
/// use combidex::Permutation;
///
/// let perm = Permutation::<_, u32>::new(vec![0, 1, 2, 3], 2)?;
/// assert_eq!(*perm.count(), 12);
/// assert_eq!(perm.lookup(&0)?, [0, 1]);
/// assert_eq!(perm.lookup(&1)?, [0, 2]);
/// assert_eq!(perm.lookup(&11)?, [3, 2]);
/// assert_eq!(perm.rank_of(&[3, 2]), Some(11));
/// # Ok::<(), combidex::CombinatoricsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation<T, I = u64> {
    seed: Vec<T>,
    size: usize,
    count: I,
}

impl<T, I: RankInt> Permutation<T, I> {
    /// Creates the permutations of `size` elements drawn from `seed`.
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
        let count = falling_factorial(seed.len(), size)?;
        log::debug!(
            "permutation: n={}, k={size}, count={count}",
            seed.len()
        );
        Ok(Self { seed, size, count })
    }

    /// Creates the full-length permutations of `seed`.
    ///
    /// # Errors
    ///
    /// See [`Permutation::new`].
    pub fn full(seed: Vec<T>) -> Result<Self, CombinatoricsError> {
        let size = seed.len();
        Self::new(seed, size)
    }

    /// Creates the permutations of `size` elements drawn from `iter`.
    ///
    /// # Errors
    ///
    /// See [`Permutation::new`].
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

    /// Returns the number of elements in each permutation.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of permutations, `n! / (n − k)!`.
    #[must_use]
    pub fn count(&self) -> &I {
        &self.count
    }
}

impl<T: Clone, I: RankInt> Permutation<T, I> {
    /// Returns the permutation at `rank`.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatoricsError::IndexOutOfRange`] unless `0 <= rank < count`.
    pub fn lookup(&self, rank: &I) -> Result<Vec<T>, CombinatoricsError> {
        check_rank(rank, &self.count)?;
        if self.size == 1 {
            return Ok(vec![self.seed[to_usize(rank)?].clone()]);
        }
        let digits = factoradic_prefix(rank, self.seed.len(), self.size)?;
        let mut source = self.seed.clone();
        Ok(digits.into_iter().map(|d| source.remove(d)).collect())
    }
}

impl<T: PartialEq, I: RankInt> Permutation<T, I> {
    /// Returns the smallest rank whose permutation equals `item`.
    ///
    /// Returns `None` if `item` has the wrong length or cannot be drawn from the seed.
    #[must_use]
    pub fn rank_of(&self, item: &[T]) -> Option<I> {
        if item.len() != self.size {
            return None;
        }
        let mut remaining: Vec<&T> = self.seed.iter().collect();
        let mut digits = Vec::with_capacity(self.size);
        for element in item {
            let position = remaining.iter().position(|e| *e == element)?;
            remaining.remove(position);
            digits.push(position);
        }
        factoradic_prefix_value(&digits, self.seed.len()).ok()
    }
}

impl<T: Clone, I: RankInt> Combinatorics for Permutation<T, I> {
    type Item = Vec<T>;
    type Rank = I;

    fn count(&self) -> &I {
        &self.count
    }

    fn lookup(&self, rank: &I) -> Result<Vec<T>, CombinatoricsError> {
        Permutation::lookup(self, rank)
    }
}

impl<'a, T: Clone, I: RankInt> IntoIterator for &'a Permutation<T, I> {
    type Item = Vec<T>;
    type IntoIter = Iter<'a, Permutation<T, I>>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use combidex_core::num::factorial;
    use num_bigint::BigUint;
    use proptest::prelude::*;

    use super::*;
    use crate::testing;

    #[test]
    fn test_small_scenario() {
        let perm = Permutation::<_, u32>::new(vec![0, 1, 2, 3], 2).unwrap();
        assert_eq!(*perm.count(), 12);
        assert_eq!(perm.size(), 2);
        assert_eq!(perm.lookup(&0), Ok(vec![0, 1]));
        assert_eq!(perm.lookup(&11), Ok(vec![3, 2]));
        assert_eq!(perm.lookup(&12), Err(CombinatoricsError::IndexOutOfRange));
    }

    #[test]
    fn test_matches_brute_force() {
        for n in 1..=6 {
            let seed: Vec<u8> = (0..n).collect();
            for k in 1..=n {
                let perm = Permutation::<_, u32>::new(seed.clone(), usize::from(k)).unwrap();
                let expected = testing::permutations(&seed, usize::from(k));
                assert_eq!(*perm.count() as usize, expected.len(), "n={n} k={k}");
                let actual: Vec<_> = perm.iter().collect();
                assert_eq!(actual, expected, "n={n} k={k}");
                let unique: HashSet<_> = actual.iter().collect();
                assert_eq!(unique.len(), actual.len());
            }
        }
    }

    #[test]
    fn test_size_one_selects_seed_element() {
        let perm = Permutation::<_, u8>::new(vec!['a', 'b', 'c'], 1).unwrap();
        assert_eq!(*perm.count(), 3);
        assert_eq!(perm.lookup(&2), Ok(vec!['c']));
        assert_eq!(perm.rank_of(&['b']), Some(1));
    }

    #[test]
    fn test_size_is_clamped() {
        let perm = Permutation::<_, u32>::new(vec![1, 2, 3], 10).unwrap();
        assert_eq!(perm.size(), 3);
        assert_eq!(*perm.count(), 6);
        let full = Permutation::<_, u32>::full(vec![1, 2, 3]).unwrap();
        assert_eq!(perm, full);
    }

    #[test]
    fn test_invalid_construction() {
        assert_eq!(
            Permutation::<i32, u32>::new(vec![], 1),
            Err(CombinatoricsError::InvalidArgument(ArgumentError::EmptySeed))
        );
        assert_eq!(
            Permutation::<_, u32>::new(vec![1], 0),
            Err(CombinatoricsError::InvalidArgument(ArgumentError::ZeroSize))
        );
        assert_eq!(
            Permutation::<_, u64>::full((0..21).collect::<Vec<i32>>()),
            Err(CombinatoricsError::Overflow)
        );
    }

    #[test]
    fn test_negative_rank() {
        let perm = Permutation::<_, i64>::of("abc".chars(), 2).unwrap();
        assert_eq!(perm.lookup(&-1), Err(CombinatoricsError::IndexOutOfRange));
        assert_eq!(perm.lookup(&5), Ok(vec!['c', 'b']));
    }

    #[test]
    fn test_seed_is_not_mutated() {
        let perm = Permutation::<_, u32>::new(vec![5, 6, 7, 8], 3).unwrap();
        let _ = perm.lookup(&17).unwrap();
        assert_eq!(perm.seed(), [5, 6, 7, 8]);
    }

    #[test]
    fn test_partial_permutation_near_u64_limit() {
        // Scaling by 19! would overflow, the lookup itself must not.
        let perm = Permutation::<_, u64>::new((0..21).collect::<Vec<u8>>(), 2).unwrap();
        assert_eq!(*perm.count(), 420);
        assert_eq!(perm.lookup(&419), Ok(vec![20, 19]));
        assert_eq!(perm.rank_of(&[20, 19]), Some(419));
    }

    #[test]
    fn test_hundred_elements_with_big_ranks() {
        let perm = Permutation::<_, BigUint>::of(0..100, 100).unwrap();
        assert_eq!(*perm.count(), factorial::<BigUint>(100).unwrap());
        let last = perm.count().clone() - 1_u8;
        let expected: Vec<_> = (0..100).rev().collect();
        assert_eq!(perm.lookup(&last).unwrap(), expected);
        assert_eq!(perm.rank_of(&expected), Some(last));
    }

    #[test]
    fn test_rank_of_rejects_foreign_items() {
        let perm = Permutation::<_, u32>::new(vec![1, 2, 3], 2).unwrap();
        assert_eq!(perm.rank_of(&[1]), None);
        assert_eq!(perm.rank_of(&[1, 4]), None);
        assert_eq!(perm.rank_of(&[2, 2]), None);
    }

    #[test]
    fn test_rank_of_with_repeated_seed_elements() {
        let perm = Permutation::<_, u32>::new(vec!['a', 'a', 'b'], 2).unwrap();
        let rank = perm.rank_of(&['a', 'b']).unwrap();
        assert_eq!(rank, 1);
        assert_eq!(perm.lookup(&rank), Ok(vec!['a', 'b']));
    }

    proptest! {
        #[test]
        fn test_rank_of_inverts_lookup(n in 1_usize..12, k in 1_usize..12, rank in any::<u64>()) {
            let perm = Permutation::<_, u64>::of(0..n, k).unwrap();
            let rank = rank % perm.count();
            let item = perm.lookup(&rank).unwrap();
            prop_assert_eq!(item.len(), perm.size());
            prop_assert_eq!(perm.rank_of(&item), Some(rank));
        }
    }
}
