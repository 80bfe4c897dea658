//! Random-access combinatorial structures.
//!
//! Each structure computes its exact instance count up front and maps any rank
//! in `0..count` straight to the instance at that position, without visiting
//! the ones before it. Ranks use any [`RankInt`] type: fixed-width integers
//! report [`CombinatoricsError::Overflow`] when a count does not fit, and
//! [`BigUint`] (with the default `bigint` feature) never overflows.
//!
//! | Structure               | Instances                          | Count            |
//! |-------------------------|------------------------------------|------------------|
//! | [`Permutation`]         | ordered `k`-selections             | `n! / (n − k)!`  |
//! | [`Combination`]         | `k`-subsets in seed order          | `C(n, k)`        |
//! | [`BaseN`]               | length-`k` words over the seed     | `n^k`            |
//! | [`PowerSet`]            | all subsets in seed order          | `2^n`            |
//! | [`ProductSet`]          | one element per component, `Vec`   | `∏ len`          |
//! | [`CartesianProduct`]    | one element per component, tuple   | `∏ len`          |
//!
//! All of them implement [`Combinatorics`], which adds restartable rank-order
//! iteration and [`partition`]ing of the rank space for parallel workers.
//!
//! # Examples
//!
//! ```
//! use combidex::{BigPermutation, Combinatorics, Permutation};
//!
//! let perm = Permutation::<_, u64>::new(vec!['a', 'b', 'c'], 3)?;
//! let words: Vec<String> = perm.iter().map(String::from_iter).collect();
//! assert_eq!(words, ["abc", "acb", "bac", "bca", "cab", "cba"]);
//!
//! let big = BigPermutation::full((0..50).collect())?;
//! let last = big.count().clone() - 1_u8;
//! assert_eq!(big.lookup(&last)?[0], 49);
//! # Ok::<(), combidex::CombinatoricsError>(())
//! ```

mod base_n;
mod combination;
mod iter;
mod permutation;
mod power_set;
mod product;
mod radix;
#[cfg(test)]
mod testing;
mod traits;

pub use combidex_core::{
    ArgumentError, CombinatoricsError, RankInt, combinadic, factoradic, num,
};
#[cfg(feature = "bigint")]
pub use combidex_core::{BigInt, BigUint};

pub use self::{
    base_n::BaseN,
    combination::Combination,
    iter::{Iter, partition},
    permutation::Permutation,
    power_set::PowerSet,
    product::{CartesianProduct, Components, ProductSet},
    traits::Combinatorics,
};

/// [`Permutation`] with arbitrary-precision ranks.
#[cfg(feature = "bigint")]
pub type BigPermutation<T> = Permutation<T, BigUint>;

/// [`Combination`] with arbitrary-precision ranks.
#[cfg(feature = "bigint")]
pub type BigCombination<T> = Combination<T, BigUint>;

/// [`BaseN`] with arbitrary-precision ranks.
#[cfg(feature = "bigint")]
pub type BigBaseN<T> = BaseN<T, BigUint>;

/// [`PowerSet`] with arbitrary-precision ranks.
#[cfg(feature = "bigint")]
pub type BigPowerSet<T> = PowerSet<T, BigUint>;

/// [`ProductSet`] with arbitrary-precision ranks.
#[cfg(feature = "bigint")]
pub type BigProductSet<T> = ProductSet<T, BigUint>;

/// [`CartesianProduct`] with arbitrary-precision ranks.
#[cfg(feature = "bigint")]
pub type BigCartesianProduct<C> = CartesianProduct<C, BigUint>;
