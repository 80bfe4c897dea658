//! Error types shared by every ranking structure.

/// Reasons a construction or encoder argument is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ArgumentError {
    /// The seed has no elements.
    #[display("seed must not be empty")]
    EmptySeed,
    /// A selection size of zero was requested.
    #[display("size must be at least 1")]
    ZeroSize,
    /// A product was built from zero components.
    #[display("product must have at least one component")]
    NoComponents,
    /// A product component has no elements.
    #[display("product component {index} is empty")]
    EmptyComponent {
        /// Position of the empty component.
        index: usize,
    },
    /// A rank range was split into zero parts.
    #[display("number of parts must be at least 1")]
    ZeroParts,
    /// A rank does not fit in the requested number of factoradic digits.
    #[display("rank does not fit in {digits} factoradic digits")]
    RankExceedsDigits {
        /// Requested digit count.
        digits: usize,
    },
    /// A factoradic prefix is longer than the full encoding.
    #[display("prefix of {len} digits exceeds {digits} digits")]
    PrefixExceedsDigits {
        /// Requested prefix length.
        len: usize,
        /// Full digit count.
        digits: usize,
    },
    /// A negative rank was passed to an encoder.
    #[display("rank must not be negative")]
    NegativeRank,
    /// A factoradic digit is not below its radix.
    #[display("factoradic digit {digit} at position {position} exceeds its radix")]
    DigitOutOfRange {
        /// Position of the digit, most significant first.
        position: usize,
        /// The offending digit.
        digit: usize,
    },
    /// Combinadic positions are not strictly increasing, out of bounds, or of the wrong length.
    #[display("positions do not describe a subset")]
    InvalidPositions,
}

/// Errors returned by ranking, unranking and counting operations.
///
/// # Examples
///
/// ```
/// use combidex_core::{ArgumentError, CombinatoricsError, factoradic};
///
/// let err = factoradic::factoradic(&6_u32, 3).unwrap_err();
/// assert_eq!(
///     err,
///     CombinatoricsError::InvalidArgument(ArgumentError::RankExceedsDigits { digits: 3 })
/// );
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum CombinatoricsError {
    /// An argument was rejected.
    #[display("invalid argument: {_0}")]
    InvalidArgument(#[from] ArgumentError),
    /// A rank lies outside `0..count`.
    #[display("rank is out of range")]
    IndexOutOfRange,
    /// A value does not fit in the chosen rank integer type.
    #[display("arithmetic overflow in rank type")]
    Overflow,
}
