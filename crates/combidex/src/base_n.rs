use std::iter;

use combidex_core::{
    ArgumentError, CombinatoricsError, RankInt,
    num::{check_rank, from_usize, power},
};

use crate::{Combinatorics, Iter, radix};

/// Length-`k` sequences over a seed alphabet, repetition allowed.
///
/// Ranks are read as base-`n` numbers with the first position least
/// significant, so consecutive ranks change the first element fastest.
/// Unlike [`Permutation`](crate::Permutation), `k` may exceed the seed length.
///
/// # Examples
///
/// ```
/// use combidex::BaseN;
///
/// let words = BaseN::<_, u32>::of("ab".chars(), 3)?;
/// assert_eq!(*words.count(), 8);
/// assert_eq!(words.lookup(&0)?, ['a', 'a', 'a']);
/// assert_eq!(words.lookup(&1)?, ['b', 'a', 'a']);
/// assert_eq!(words.lookup(&7)?, ['b', 'b', 'b']);
/// # Ok::<(), combidex::CombinatoricsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseN<T, I = u64> {
    seed: Vec<T>,
    size: usize,
    count: I,
}

impl<T, I: RankInt> BaseN<T, I> {
    /// Creates the length-`size` sequences over `seed`.
    ///
    /// # Errors
    ///
    /// - [`ArgumentError::EmptySeed`] if `seed` is empty.
    /// - [`ArgumentError::ZeroSize`] if `size` is zero.
    /// - [`CombinatoricsError::Overflow`] if `n^k` does not fit in `I`.
    pub fn new(seed: Vec<T>, size: usize) -> Result<Self, CombinatoricsError> {
        if seed.is_empty() {
            return Err(ArgumentError::EmptySeed.into());
        }
        if size == 0 {
            return Err(ArgumentError::ZeroSize.into());
        }
        let count = power(&from_usize(seed.len())?, size)?;
        log::debug!("base-n: n={}, k={size}, count={count}", seed.len());
        Ok(Self { seed, size, count })
    }

    /// Creates the sequences as long as the seed itself.
    ///
    /// # Errors
    ///
    /// See [`BaseN::new`].
    pub fn full(seed: Vec<T>) -> Result<Self, CombinatoricsError> {
        let size = seed.len();
        Self::new(seed, size)
    }

    /// Creates the length-`size` sequences over the elements of `iter`.
    ///
    /// # Errors
    ///
    /// See [`BaseN::new`].
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

    /// Returns the sequence length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of sequences, `n^k`.
    #[must_use]
    pub fn count(&self) -> &I {
        &self.count
    }
}

impl<T: Clone, I: RankInt> BaseN<T, I> {
    /// Returns the sequence at `rank`.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatoricsError::IndexOutOfRange`] unless `0 <= rank < count`.
    pub fn lookup(&self, rank: &I) -> Result<Vec<T>, CombinatoricsError> {
        check_rank(rank, &self.count)?;
        let digits = radix::digits(rank, iter::repeat_n(self.seed.len(), self.size))?;
        Ok(digits.into_iter().map(|d| self.seed[d].clone()).collect())
    }
}

impl<T: PartialEq, I: RankInt> BaseN<T, I> {
    /// Returns the smallest rank whose sequence equals `item`.
    #[must_use]
    pub fn rank_of(&self, item: &[T]) -> Option<I> {
        if item.len() != self.size {
            return None;
        }
        let digits = item
            .iter()
            .map(|element| self.seed.iter().position(|e| e == element))
            .collect::<Option<Vec<_>>>()?;
        let radices = vec![self.seed.len(); self.size];
        radix::value(&digits, &radices).ok()
    }
}

impl<T: Clone, I: RankInt> Combinatorics for BaseN<T, I> {
    type Item = Vec<T>;
    type Rank = I;

    fn count(&self) -> &I {
        &self.count
    }

    fn lookup(&self, rank: &I) -> Result<Vec<T>, CombinatoricsError> {
        BaseN::lookup(self, rank)
    }
}

impl<'a, T: Clone, I: RankInt> IntoIterator for &'a BaseN<T, I> {
    type Item = Vec<T>;
    type IntoIter = Iter<'a, BaseN<T, I>>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}
