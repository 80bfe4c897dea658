//! Exact counting and rank encoders for combinatorial structures.
//!
//! This crate provides the arithmetic that the `combidex` structures are built
//! on. Everything is generic over [`RankInt`], so the same code serves `u64`
//! ranks and arbitrary-precision `BigUint` ranks.
//!
//! # Overview
//!
//! - [`num`]: the [`RankInt`] capability trait and the counting primitives
//!   [`factorial`], [`falling_factorial`], [`combination_count`] and [`power`].
//! - [`factoradic`]: rank ↔ factorial-number-system digits (Lehmer codes),
//!   the basis of permutation unranking.
//! - [`combinadic`]: rank ↔ increasing subset positions in the combinatorial
//!   number system, the basis of combination unranking.
//! - [`error`]: [`CombinatoricsError`] and [`ArgumentError`].
//!
//! [`factorial`]: num::factorial
//! [`falling_factorial`]: num::falling_factorial
//! [`combination_count`]: num::combination_count
//! [`power`]: num::power
//!
//! # Examples
//!
//! ```
//! use combidex_core::{combinadic::combinadic, factoradic::factoradic, num::factorial};
//! use num_bigint::BigUint;
//!
//! let count: BigUint = factorial(30)?;
//! let last = factoradic(&(count - 1_u8), 30)?;
//! assert_eq!(last[0], 29);
//!
//! assert_eq!(combinadic(5, 3, &9_u8)?, vec![2, 3, 4]);
//! # Ok::<(), combidex_core::CombinatoricsError>(())
//! ```

pub mod combinadic;
pub mod error;
pub mod factoradic;
pub mod num;

#[cfg(feature = "bigint")]
pub use num_bigint::{BigInt, BigUint};

pub use self::{
    error::{ArgumentError, CombinatoricsError},
    num::RankInt,
};
