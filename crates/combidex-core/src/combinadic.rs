//! Combinatorial number system encoding.
//!
//! Maps a rank in `0..C(n, k)` to the `k` strictly increasing positions of the
//! subset at that rank, with subsets of `{0, …, n−1}` ordered lexicographically.

use crate::{
    ArgumentError, CombinatoricsError,
    num::{RankInt, check_rank, checked_add, combination_count, mul_div_exact},
};

/// Returns the positions of the `rank`-th `k`-subset of `{0, …, n−1}`.
///
/// Subsets are ordered lexicographically by their increasing position lists, so
/// rank `0` is `[0, 1, …, k−1]` and the last rank is `[n−k, …, n−1]`.
///
/// # Errors
///
/// Returns [`CombinatoricsError::IndexOutOfRange`] unless `0 <= rank < C(n, k)`.
///
/// # Examples
///
/// ```
/// use combidex_core::combinadic::combinadic;
///
/// assert_eq!(combinadic(4, 2, &0_u32)?, vec![0, 1]);
/// assert_eq!(combinadic(4, 2, &1_u32)?, vec![0, 2]);
/// assert_eq!(combinadic(4, 2, &5_u32)?, vec![2, 3]);
/// # Ok::<(), combidex_core::CombinatoricsError>(())
/// ```
pub fn combinadic<T: RankInt>(
    n: usize,
    k: usize,
    rank: &T,
) -> Result<Vec<usize>, CombinatoricsError> {
    let count = combination_count::<T>(n, k)?;
    check_rank(rank, &count)?;

    // Greedy extraction works on the complement rank.
    let mut residual = count.clone() - T::one() - rank.clone();
    let mut a = n;
    let mut b = k;
    let mut coefficient = count;
    let mut result = Vec::with_capacity(k);
    for _ in 0..k {
        // C(a, b) > residual implies a >= b >= 1.
        while coefficient > residual {
            // C(a - 1, b) = C(a, b) · (a - b) / a
            coefficient = mul_div_exact(&coefficient, a - b, a)?;
            a -= 1;
        }
        result.push(n - 1 - a);
        residual = residual - coefficient.clone();
        b -= 1;
        // C(a, b) = C(a, b + 1) · (b + 1) / (a - b), and a >= b here.
        coefficient = if a == b {
            T::one()
        } else {
            mul_div_exact(&coefficient, b + 1, a - b)?
        };
    }
    Ok(result)
}

/// Returns the rank of the subset with the given strictly increasing `positions`.
///
/// This is the inverse of [`combinadic`].
///
/// # Errors
///
/// Returns [`ArgumentError::InvalidPositions`] if `positions` does not hold
/// exactly `k` strictly increasing values below `n`.
///
/// # Examples
///
/// ```
/// use combidex_core::combinadic::combinadic_rank;
///
/// assert_eq!(combinadic_rank::<u32>(4, 2, &[0, 2])?, 1);
/// # Ok::<(), combidex_core::CombinatoricsError>(())
/// ```
pub fn combinadic_rank<T: RankInt>(
    n: usize,
    k: usize,
    positions: &[usize],
) -> Result<T, CombinatoricsError> {
    let increasing = positions.windows(2).all(|w| w[0] < w[1]);
    let in_bounds = positions.last().is_none_or(|&last| last < n);
    if positions.len() != k || !increasing || !in_bounds {
        return Err(ArgumentError::InvalidPositions.into());
    }

    let count = combination_count::<T>(n, k)?;
    let complement = positions
        .iter()
        .enumerate()
        .try_fold(T::zero(), |acc, (j, &p)| {
            checked_add(&acc, &combination_count(n - 1 - p, k - j)?)
        })?;
    Ok(count - T::one() - complement)
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use proptest::prelude::*;

    use super::*;

    /// All increasing `k`-position lists over `0..n`, in lexicographic order.
    fn brute_force(n: usize, k: usize) -> Vec<Vec<usize>> {
        fn go(
            start: usize,
            n: usize,
            k: usize,
            prefix: &mut Vec<usize>,
            out: &mut Vec<Vec<usize>>,
        ) {
            if prefix.len() == k {
                out.push(prefix.clone());
                return;
            }
            for p in start..n {
                prefix.push(p);
                go(p + 1, n, k, prefix, out);
                prefix.pop();
            }
        }
        let mut out = Vec::new();
        go(0, n, k, &mut Vec::new(), &mut out);
        out
    }

    #[test]
    fn test_matches_brute_force_enumeration() {
        for n in 0..=7 {
            for k in 0..=n {
                let expected = brute_force(n, k);
                let count: u32 = combination_count(n, k).unwrap();
                assert_eq!(expected.len(), count as usize, "n={n} k={k}");
                for (rank, positions) in (0_u32..).zip(&expected) {
                    assert_eq!(
                        &combinadic(n, k, &rank).unwrap(),
                        positions,
                        "n={n} k={k} rank={rank}"
                    );
                    assert_eq!(combinadic_rank::<u32>(n, k, positions), Ok(rank));
                }
            }
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            combinadic(4, 2, &6_u32),
            Err(CombinatoricsError::IndexOutOfRange)
        );
        assert_eq!(
            combinadic(4, 2, &-1_i32),
            Err(CombinatoricsError::IndexOutOfRange)
        );
        assert_eq!(
            combinadic(3, 4, &0_u32),
            Err(CombinatoricsError::IndexOutOfRange)
        );
    }

    #[test]
    fn test_rank_rejects_invalid_positions() {
        let invalid = Err(CombinatoricsError::InvalidArgument(
            ArgumentError::InvalidPositions,
        ));
        assert_eq!(combinadic_rank::<u32>(4, 2, &[1, 1]), invalid);
        assert_eq!(combinadic_rank::<u32>(4, 2, &[2, 1]), invalid);
        assert_eq!(combinadic_rank::<u32>(4, 2, &[1, 4]), invalid);
        assert_eq!(combinadic_rank::<u32>(4, 2, &[1]), invalid);
    }

    #[test]
    fn test_big_extremes() {
        let count: BigUint = combination_count(200, 100).unwrap();
        let last = count - 1_u8;
        assert_eq!(
            combinadic(200, 100, &last).unwrap(),
            (100..200).collect::<Vec<_>>()
        );
        assert_eq!(
            combinadic(200, 100, &BigUint::from(0_u8)).unwrap(),
            (0..100).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_extremes_near_type_limit() {
        // C(66, 33) is close to the top of u64.
        let count: u64 = combination_count(66, 33).unwrap();
        assert_eq!(count, 7_219_428_434_016_265_740);
        assert_eq!(
            combinadic(66, 33, &(count - 1)).unwrap(),
            (33..66).collect::<Vec<_>>()
        );
    }

    proptest! {
        #[test]
        fn test_round_trip(rank in 0_u64..184_756) {
            let positions = combinadic(20, 10, &rank).unwrap();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(combinadic_rank::<u64>(20, 10, &positions).unwrap(), rank);
        }
    }
}
