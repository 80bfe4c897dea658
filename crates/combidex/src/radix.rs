//! Mixed-radix rank decomposition shared by [`BaseN`], [`ProductSet`] and
//! [`CartesianProduct`].
//!
//! The first radix is the least significant: the first division of a rank
//! yields the first digit.
//!
//! [`BaseN`]: crate::BaseN
//! [`ProductSet`]: crate::ProductSet
//! [`CartesianProduct`]: crate::CartesianProduct

use combidex_core::{
    CombinatoricsError, RankInt,
    num::{checked_add, checked_mul, from_usize, to_usize},
};

/// Returns the product of all radices.
pub(crate) fn radix_count<I, R>(radices: R) -> Result<I, CombinatoricsError>
where
    I: RankInt,
    R: IntoIterator<Item = usize>,
{
    radices
        .into_iter()
        .try_fold(I::one(), |acc, radix| checked_mul(&acc, &from_usize(radix)?))
}

/// Splits `rank` into one digit per radix, least significant first.
pub(crate) fn digits<I, R>(rank: &I, radices: R) -> Result<Vec<usize>, CombinatoricsError>
where
    I: RankInt,
    R: IntoIterator<Item = usize>,
{
    let mut quotient = rank.clone();
    radices
        .into_iter()
        .map(|radix| {
            let radix = from_usize::<I>(radix)?;
            let remainder = quotient.clone() % radix.clone();
            quotient = quotient.clone() / radix;
            to_usize(&remainder)
        })
        .collect()
}

/// Folds least-significant-first `digits` back into a rank.
///
/// `digits` and `radices` must have the same length and every digit must be
/// below its radix.
pub(crate) fn value<I: RankInt>(
    digits: &[usize],
    radices: &[usize],
) -> Result<I, CombinatoricsError> {
    debug_assert_eq!(digits.len(), radices.len());
    digits
        .iter()
        .zip(radices)
        .rev()
        .try_fold(I::zero(), |acc, (&digit, &radix)| {
            debug_assert!(digit < radix);
            let scaled = checked_mul(&acc, &from_usize(radix)?)?;
            checked_add(&scaled, &from_usize(digit)?)
        })
}
