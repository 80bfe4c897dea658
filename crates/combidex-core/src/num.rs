//! Rank integer capability and exact counting primitives.
//!
//! Every count and rank in this workspace is expressed through [`RankInt`], a
//! trait alias for integer types with exact arithmetic. Machine integers
//! (`u64`, `i128`, ...) and arbitrary-precision integers (`BigUint`, `BigInt`)
//! share the same code paths.
//!
//! Fixed-width types never wrap: any product that does not fit yields
//! [`CombinatoricsError::Overflow`].
//!
//! # Examples
//!
//! ```
//! use combidex_core::num::{combination_count, factorial, falling_factorial};
//!
//! assert_eq!(factorial::<u64>(10)?, 3_628_800);
//! assert_eq!(falling_factorial::<u64>(10, 5)?, 30_240);
//! assert_eq!(combination_count::<u64>(10, 5)?, 252);
//!
//! // 21! does not fit in a u64.
//! assert!(factorial::<u64>(21).is_err());
//! # Ok::<(), combidex_core::CombinatoricsError>(())
//! ```

use std::fmt;

use num_traits::{CheckedAdd, CheckedMul, CheckedSub, FromPrimitive, Num, ToPrimitive};

use crate::CombinatoricsError;

/// Integer types usable as ranks and counts.
///
/// Requires exact `+ - * / %`, checked addition, subtraction and multiplication,
/// ordering, and conversion from and to machine integers. Implemented for all
/// primitive integers and, through `num-bigint`, for `BigUint` and `BigInt`.
pub trait RankInt:
    Num
    + CheckedAdd
    + CheckedSub
    + CheckedMul
    + FromPrimitive
    + ToPrimitive
    + Ord
    + Clone
    + fmt::Debug
    + fmt::Display
{
}

impl<T> RankInt for T where
    T: Num
        + CheckedAdd
        + CheckedSub
        + CheckedMul
        + FromPrimitive
        + ToPrimitive
        + Ord
        + Clone
        + fmt::Debug
        + fmt::Display
{
}

/// Converts a machine `usize` into the rank type.
///
/// # Errors
///
/// Returns [`CombinatoricsError::Overflow`] if `value` does not fit in `T`.
#[inline]
pub fn from_usize<T: RankInt>(value: usize) -> Result<T, CombinatoricsError> {
    T::from_usize(value).ok_or(CombinatoricsError::Overflow)
}

/// Converts a rank value into a machine `usize`.
///
/// # Errors
///
/// Returns [`CombinatoricsError::Overflow`] if `value` is negative or does not fit in `usize`.
#[inline]
pub fn to_usize<T: RankInt>(value: &T) -> Result<usize, CombinatoricsError> {
    value.to_usize().ok_or(CombinatoricsError::Overflow)
}

/// Multiplies two rank values, reporting overflow instead of wrapping.
///
/// # Errors
///
/// Returns [`CombinatoricsError::Overflow`] if the product does not fit in `T`.
#[inline]
pub fn checked_mul<T: RankInt>(lhs: &T, rhs: &T) -> Result<T, CombinatoricsError> {
    lhs.checked_mul(rhs).ok_or(CombinatoricsError::Overflow)
}

/// Adds two rank values, reporting overflow instead of wrapping.
///
/// # Errors
///
/// Returns [`CombinatoricsError::Overflow`] if the sum does not fit in `T`.
#[inline]
pub fn checked_add<T: RankInt>(lhs: &T, rhs: &T) -> Result<T, CombinatoricsError> {
    lhs.checked_add(rhs).ok_or(CombinatoricsError::Overflow)
}

/// Returns `value · mul / div` for a product known to be divisible by `div`.
///
/// The quotient and remainder of `value / div` are scaled separately, so no
/// intermediate exceeds the result by more than `mul · div`.
///
/// # Errors
///
/// Returns [`CombinatoricsError::Overflow`] if the result does not fit in `T`.
pub fn mul_div_exact<T: RankInt>(
    value: &T,
    mul: usize,
    div: usize,
) -> Result<T, CombinatoricsError> {
    let mul = from_usize::<T>(mul)?;
    let div = from_usize::<T>(div)?;
    let quotient = value.clone() / div.clone();
    let remainder = value.clone() % div.clone();
    let high = checked_mul(&quotient, &mul)?;
    let low = checked_mul(&remainder, &mul)? / div;
    checked_add(&high, &low)
}

/// Checks that `rank` lies in `0..count`.
///
/// # Errors
///
/// Returns [`CombinatoricsError::IndexOutOfRange`] otherwise.
#[inline]
pub fn check_rank<T: RankInt>(rank: &T, count: &T) -> Result<(), CombinatoricsError> {
    if *rank < T::zero() || rank >= count {
        return Err(CombinatoricsError::IndexOutOfRange);
    }
    Ok(())
}

/// Returns `n!`.
///
/// `0!` and `1!` are both `1`.
///
/// # Errors
///
/// Returns [`CombinatoricsError::Overflow`] if the result does not fit in `T`.
pub fn factorial<T: RankInt>(n: usize) -> Result<T, CombinatoricsError> {
    (2..=n).try_fold(T::one(), |acc, i| checked_mul(&acc, &from_usize(i)?))
}

/// Returns the falling factorial `n·(n−1)·…·(n−k+1)`, the number of ordered
/// `k`-selections from `n` items.
///
/// Returns `1` when `k == 0` and `0` when `n < k`.
///
/// # Errors
///
/// Returns [`CombinatoricsError::Overflow`] if the result does not fit in `T`.
pub fn falling_factorial<T: RankInt>(n: usize, k: usize) -> Result<T, CombinatoricsError> {
    if k == 0 {
        return Ok(T::one());
    }
    if n < k {
        return Ok(T::zero());
    }
    (n - k + 1..=n).try_fold(T::one(), |acc, i| checked_mul(&acc, &from_usize(i)?))
}

/// Returns the binomial coefficient `C(n, k)`.
///
/// Returns `1` when `k == 0` or `k == n` and `0` when `n < k`. The value equals
/// `falling_factorial(n, k) / k!`; it is evaluated on the smaller of `k` and
/// `n − k` with a running exact division so intermediates never exceed the result.
///
/// # Errors
///
/// Returns [`CombinatoricsError::Overflow`] if the result does not fit in `T`.
pub fn combination_count<T: RankInt>(n: usize, k: usize) -> Result<T, CombinatoricsError> {
    if n < k {
        return Ok(T::zero());
    }
    let k = k.min(n - k);
    // After step i the accumulator holds C(n - k + i, i).
    (1..=k).try_fold(T::one(), |acc, i| mul_div_exact(&acc, n - k + i, i))
}

/// Returns `base` raised to `exp`.
///
/// # Errors
///
/// Returns [`CombinatoricsError::Overflow`] if the result does not fit in `T`.
pub fn power<T: RankInt>(base: &T, exp: usize) -> Result<T, CombinatoricsError> {
    num_traits::checked_pow(base.clone(), exp).ok_or(CombinatoricsError::Overflow)
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_factorial_small_values() {
        assert_eq!(factorial::<u32>(0), Ok(1));
        assert_eq!(factorial::<u32>(1), Ok(1));
        assert_eq!(factorial::<u32>(5), Ok(120));
        assert_eq!(factorial::<i64>(10), Ok(3_628_800));
    }

    #[test]
    fn test_factorial_overflow_is_reported() {
        assert_eq!(factorial::<u64>(20), Ok(2_432_902_008_176_640_000));
        assert_eq!(factorial::<u64>(21), Err(CombinatoricsError::Overflow));
        assert_eq!(factorial::<u8>(6), Err(CombinatoricsError::Overflow));
    }

    #[test]
    fn test_factorial_big() {
        let f: BigUint = factorial(100).unwrap();
        let digits = f.to_string();
        assert_eq!(digits.len(), 158);
        assert!(digits.starts_with("93326215443944"));
        assert!(digits.ends_with(&"0".repeat(24)));
    }

    #[test]
    fn test_falling_factorial_edges() {
        assert_eq!(falling_factorial::<u32>(5, 0), Ok(1));
        assert_eq!(falling_factorial::<u32>(0, 0), Ok(1));
        assert_eq!(falling_factorial::<u32>(3, 4), Ok(0));
        assert_eq!(falling_factorial::<u32>(4, 2), Ok(12));
        assert_eq!(falling_factorial::<u32>(10, 5), Ok(30_240));
    }

    #[test]
    fn test_combination_count_edges() {
        assert_eq!(combination_count::<u32>(4, 0), Ok(1));
        assert_eq!(combination_count::<u32>(4, 4), Ok(1));
        assert_eq!(combination_count::<u32>(3, 4), Ok(0));
        assert_eq!(combination_count::<u32>(4, 2), Ok(6));
        assert_eq!(combination_count::<u32>(10, 5), Ok(252));
        // C(66, 33) fits a u64 even though the falling factorial does not.
        assert_eq!(
            combination_count::<u64>(66, 33),
            Ok(7_219_428_434_016_265_740)
        );
        assert_eq!(
            combination_count::<u64>(68, 34),
            Err(CombinatoricsError::Overflow)
        );
    }

    #[test]
    fn test_power() {
        assert_eq!(power(&2_u32, 0), Ok(1));
        assert_eq!(power(&2_u32, 10), Ok(1024));
        assert_eq!(power(&3_u64, 4), Ok(81));
        assert_eq!(power(&2_u8, 8), Err(CombinatoricsError::Overflow));
    }

    #[test]
    fn test_mul_div_exact() {
        // C(6, 3) · 3 / 6 = C(5, 3)
        assert_eq!(mul_div_exact(&20_u8, 3, 6), Ok(10));
        // 250 · 4 does not fit a u8, the split computation does.
        assert_eq!(mul_div_exact(&250_u8, 4, 5), Ok(200));
    }

    #[test]
    fn test_check_rank() {
        assert_eq!(check_rank(&0_i32, &3), Ok(()));
        assert_eq!(check_rank(&2_i32, &3), Ok(()));
        assert_eq!(
            check_rank(&3_i32, &3),
            Err(CombinatoricsError::IndexOutOfRange)
        );
        assert_eq!(
            check_rank(&-1_i32, &3),
            Err(CombinatoricsError::IndexOutOfRange)
        );
    }

    proptest! {
        #[test]
        fn test_factorial_is_running_product(n in 0_usize..30) {
            let expected = (1..=n).fold(BigUint::from(1_u8), |acc, i| acc * BigUint::from(i));
            prop_assert_eq!(factorial::<BigUint>(n).unwrap(), expected);
        }

        #[test]
        fn test_falling_times_rest_is_factorial(n in 0_usize..40, k in 0_usize..40) {
            prop_assume!(k <= n);
            let falling: BigUint = falling_factorial(n, k).unwrap();
            let rest: BigUint = factorial(n - k).unwrap();
            prop_assert_eq!(falling * rest, factorial::<BigUint>(n).unwrap());
        }

        #[test]
        fn test_combination_count_is_symmetric(n in 0_usize..60, k in 0_usize..60) {
            prop_assume!(k <= n);
            let lhs: BigUint = combination_count(n, k).unwrap();
            let rhs: BigUint = combination_count(n, n - k).unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn test_combination_count_matches_definition(n in 0_usize..40, k in 0_usize..40) {
            prop_assume!(k <= n);
            let falling: BigUint = falling_factorial(n, k).unwrap();
            let expected = falling / factorial::<BigUint>(k).unwrap();
            prop_assert_eq!(combination_count::<BigUint>(n, k).unwrap(), expected);
        }
    }
}
