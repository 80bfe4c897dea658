//! Factorial number system encoding.
//!
//! A rank below `c!` is written as `c` digits where the digit `i` places from
//! the least significant end is below `i + 1`. Read most significant first,
//! these digits are the Lehmer code of the permutation at that rank: each digit
//! is a position into the elements not yet chosen.
//!
//! # Examples
//!
//! ```
//! use combidex_core::factoradic::{factoradic, factoradic_value};
//!
//! // 22 = 3·3! + 2·2! + 0·1! + 0·0!
//! assert_eq!(factoradic(&22_u32, 4)?, vec![3, 2, 0, 0]);
//! assert_eq!(factoradic_value::<u32>(&[3, 2, 0, 0])?, 22);
//! # Ok::<(), combidex_core::CombinatoricsError>(())
//! ```

use crate::{
    ArgumentError, CombinatoricsError,
    num::{RankInt, checked_add, checked_mul, from_usize, to_usize},
};

/// Encodes `rank` as exactly `digits` factoradic digits, most significant first.
///
/// Short encodings are padded with leading zeros.
///
/// # Errors
///
/// - [`ArgumentError::NegativeRank`] if `rank` is negative.
/// - [`ArgumentError::RankExceedsDigits`] if `rank >= digits!`.
pub fn factoradic<T: RankInt>(
    rank: &T,
    digits: usize,
) -> Result<Vec<usize>, CombinatoricsError> {
    factoradic_prefix(rank, digits, digits)
}

/// Returns the leading `len` digits of `factoradic(rank · (digits − len)!, digits)`.
///
/// The product is never formed. Its trailing `digits − len` digits are zero and
/// its leading digits are `rank` written in the mixed radix
/// `digits − len + 1, …, digits`, so the result is computed by division alone
/// and cannot overflow for any `rank` below the falling factorial of `digits` and `len`.
///
/// # Errors
///
/// - [`ArgumentError::PrefixExceedsDigits`] if `len > digits`.
/// - [`ArgumentError::NegativeRank`] if `rank` is negative.
/// - [`ArgumentError::RankExceedsDigits`] if `rank` does not fit in `len` digits.
///
/// # Examples
///
/// ```
/// use combidex_core::factoradic::{factoradic, factoradic_prefix};
///
/// // 11 · 2! = 22
/// assert_eq!(factoradic_prefix(&11_u32, 4, 2)?, vec![3, 2]);
/// assert_eq!(factoradic(&22_u32, 4)?[..2], [3, 2]);
/// # Ok::<(), combidex_core::CombinatoricsError>(())
/// ```
pub fn factoradic_prefix<T: RankInt>(
    rank: &T,
    digits: usize,
    len: usize,
) -> Result<Vec<usize>, CombinatoricsError> {
    if len > digits {
        return Err(ArgumentError::PrefixExceedsDigits { len, digits }.into());
    }
    if *rank < T::zero() {
        return Err(ArgumentError::NegativeRank.into());
    }
    let mut quotient = rank.clone();
    let mut result = Vec::with_capacity(len);
    for radix in digits - len + 1..=digits {
        if quotient.is_zero() {
            break;
        }
        let radix = from_usize::<T>(radix)?;
        let remainder = quotient.clone() % radix.clone();
        quotient = quotient / radix;
        result.push(to_usize(&remainder)?);
    }
    if !quotient.is_zero() {
        return Err(ArgumentError::RankExceedsDigits { digits }.into());
    }
    result.resize(len, 0);
    result.reverse();
    Ok(result)
}

/// Decodes most-significant-first factoradic digits back into a rank.
///
/// # Errors
///
/// - [`ArgumentError::DigitOutOfRange`] if a digit is not below its radix.
/// - [`CombinatoricsError::Overflow`] if the value does not fit in `T`.
pub fn factoradic_value<T: RankInt>(digits: &[usize]) -> Result<T, CombinatoricsError> {
    factoradic_prefix_value(digits, digits.len())
}

/// Inverse of [`factoradic_prefix`]: decodes the leading digits of a
/// `digits`-digit encoding back into the rank before scaling.
///
/// # Errors
///
/// - [`ArgumentError::PrefixExceedsDigits`] if `prefix` is longer than `digits`.
/// - [`ArgumentError::DigitOutOfRange`] if a digit is not below its radix.
/// - [`CombinatoricsError::Overflow`] if the value does not fit in `T`.
pub fn factoradic_prefix_value<T: RankInt>(
    prefix: &[usize],
    digits: usize,
) -> Result<T, CombinatoricsError> {
    let len = prefix.len();
    if len > digits {
        return Err(ArgumentError::PrefixExceedsDigits { len, digits }.into());
    }
    prefix
        .iter()
        .enumerate()
        .try_fold(T::zero(), |acc, (position, &digit)| {
            let radix = digits - position;
            if digit >= radix {
                return Err(ArgumentError::DigitOutOfRange { position, digit }.into());
            }
            let scaled = checked_mul(&acc, &from_usize(radix)?)?;
            checked_add(&scaled, &from_usize(digit)?)
        })
}
