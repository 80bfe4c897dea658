//! Cartesian products over a list of component sequences.
//!
//! [`ProductSet`] is homogeneous and yields a `Vec`; [`CartesianProduct`]
//! accepts a tuple of differently typed components and yields a tuple.
//! Both decompose a rank with the first component least significant.

use combidex_core::{ArgumentError, CombinatoricsError, RankInt, num::check_rank};

use crate::{Combinatorics, Iter, radix};

fn check_lengths(lengths: &[usize]) -> Result<(), ArgumentError> {
    if lengths.is_empty() {
        return Err(ArgumentError::NoComponents);
    }
    if let Some(index) = lengths.iter().position(|&len| len == 0) {
        return Err(ArgumentError::EmptyComponent { index });
    }
    Ok(())
}

/// One element from each of several same-typed components.
///
/// # Examples
///
/// ```
/// use combidex::ProductSet;
///
/// let set = ProductSet::<_, u32>::new(vec![vec!['a', 'b'], vec!['x', 'y', 'z']])?;
/// assert_eq!(*set.count(), 6);
/// assert_eq!(set.lookup(&0)?, ['a', 'x']);
/// assert_eq!(set.lookup(&1)?, ['b', 'x']);
/// assert_eq!(set.lookup(&5)?, ['b', 'z']);
/// # Ok::<(), combidex::CombinatoricsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductSet<T, I = u64> {
    components: Vec<Vec<T>>,
    lengths: Vec<usize>,
    count: I,
}

impl<T, I: RankInt> ProductSet<T, I> {
    /// Creates the product of `components`.
    ///
    /// # Errors
    ///
    /// - [`ArgumentError::NoComponents`] if `components` is empty.
    /// - [`ArgumentError::EmptyComponent`] if any component is empty.
    /// - [`CombinatoricsError::Overflow`] if the count does not fit in `I`.
    pub fn new(components: Vec<Vec<T>>) -> Result<Self, CombinatoricsError> {
        let lengths: Vec<usize> = components.iter().map(Vec::len).collect();
        check_lengths(&lengths)?;
        let count = radix::radix_count(lengths.iter().copied())?;
        log::debug!("product set: lengths={lengths:?}, count={count}");
        Ok(Self {
            components,
            lengths,
            count,
        })
    }

    /// Returns the components.
    #[must_use]
    pub fn components(&self) -> &[Vec<T>] {
        &self.components
    }

    /// Returns the number of components, which is the length of every instance.
    #[must_use]
    pub fn size(&self) -> usize {
        self.components.len()
    }

    /// Returns the number of instances, the product of the component lengths.
    #[must_use]
    pub fn count(&self) -> &I {
        &self.count
    }
}

impl<T: Clone, I: RankInt> ProductSet<T, I> {
    /// Returns the instance at `rank`.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatoricsError::IndexOutOfRange`] unless `0 <= rank < count`.
    pub fn lookup(&self, rank: &I) -> Result<Vec<T>, CombinatoricsError> {
        check_rank(rank, &self.count)?;
        let digits = radix::digits(rank, self.lengths.iter().copied())?;
        Ok(self
            .components
            .iter()
            .zip(digits)
            .map(|(component, d)| component[d].clone())
            .collect())
    }
}

impl<T: PartialEq, I: RankInt> ProductSet<T, I> {
    /// Returns the smallest rank whose instance equals `item`.
    #[must_use]
    pub fn rank_of(&self, item: &[T]) -> Option<I> {
        if item.len() != self.components.len() {
            return None;
        }
        let digits = self
            .components
            .iter()
            .zip(item)
            .map(|(component, element)| component.iter().position(|e| e == element))
            .collect::<Option<Vec<_>>>()?;
        radix::value(&digits, &self.lengths).ok()
    }
}

impl<T: Clone, I: RankInt> Combinatorics for ProductSet<T, I> {
    type Item = Vec<T>;
    type Rank = I;

    fn count(&self) -> &I {
        &self.count
    }

    fn lookup(&self, rank: &I) -> Result<Vec<T>, CombinatoricsError> {
        ProductSet::lookup(self, rank)
    }
}

impl<'a, T: Clone, I: RankInt> IntoIterator for &'a ProductSet<T, I> {
    type Item = Vec<T>;
    type IntoIter = Iter<'a, ProductSet<T, I>>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

/// A tuple of component sequences usable by [`CartesianProduct`].
///
/// Implemented for tuples of `Vec`s with one to eight elements.
pub trait Components {
    /// A tuple holding one element from each component.
    type Item;

    /// Returns the length of each component, in tuple order.
    fn lengths(&self) -> Vec<usize>;

    /// Builds the tuple of elements at `positions`, one per component.
    ///
    /// `positions` must hold one in-bounds index per component.
    fn pick(&self, positions: &[usize]) -> Self::Item;
}

macro_rules! impl_components {
    ($(($ty:ident, $idx:tt)),+) => {
        impl<$($ty: Clone),+> Components for ($(Vec<$ty>,)+) {
            type Item = ($($ty,)+);

            fn lengths(&self) -> Vec<usize> {
                vec![$(self.$idx.len()),+]
            }

            fn pick(&self, positions: &[usize]) -> Self::Item {
                ($(self.$idx[positions[$idx]].clone(),)+)
            }
        }
    };
}

impl_components!((A, 0));
impl_components!((A, 0), (B, 1));
impl_components!((A, 0), (B, 1), (C, 2));
impl_components!((A, 0), (B, 1), (C, 2), (D, 3));
impl_components!((A, 0), (B, 1), (C, 2), (D, 3), (E, 4));
impl_components!((A, 0), (B, 1), (C, 2), (D, 3), (E, 4), (F, 5));
impl_components!((A, 0), (B, 1), (C, 2), (D, 3), (E, 4), (F, 5), (G, 6));
impl_components!((A, 0), (B, 1), (C, 2), (D, 3), (E, 4), (F, 5), (G, 6), (H, 7));

/// One element from each of several differently typed components.
///
/// # Examples
///
/// ```
/// use combidex::{CartesianProduct, Combinatorics};
///
/// let product = CartesianProduct::<_, u32>::new((vec![1, 2], vec!["x", "y", "z"]))?;
/// assert_eq!(*product.count(), 6);
/// assert_eq!(product.lookup(&0)?, (1, "x"));
/// assert_eq!(product.lookup(&5)?, (2, "z"));
/// assert_eq!(product.iter().nth(2), Some((1, "y")));
/// # Ok::<(), combidex::CombinatoricsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CartesianProduct<C, I = u64> {
    components: C,
    lengths: Vec<usize>,
    count: I,
}

impl<C: Components, I: RankInt> CartesianProduct<C, I> {
    /// Creates the product of the tuple `components`.
    ///
    /// # Errors
    ///
    /// - [`ArgumentError::EmptyComponent`] if any component is empty.
    /// - [`CombinatoricsError::Overflow`] if the count does not fit in `I`.
    pub fn new(components: C) -> Result<Self, CombinatoricsError> {
        let lengths = components.lengths();
        check_lengths(&lengths)?;
        let count = radix::radix_count(lengths.iter().copied())?;
        log::debug!("cartesian product: lengths={lengths:?}, count={count}");
        Ok(Self {
            components,
            lengths,
            count,
        })
    }

    /// Returns the component tuple.
    #[must_use]
    pub fn components(&self) -> &C {
        &self.components
    }

    /// Returns the number of components.
    #[must_use]
    pub fn size(&self) -> usize {
        self.lengths.len()
    }

    /// Returns the number of instances.
    #[must_use]
    pub fn count(&self) -> &I {
        &self.count
    }

    /// Returns the tuple at `rank`.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatoricsError::IndexOutOfRange`] unless `0 <= rank < count`.
    pub fn lookup(&self, rank: &I) -> Result<C::Item, CombinatoricsError> {
        check_rank(rank, &self.count)?;
        let digits = radix::digits(rank, self.lengths.iter().copied())?;
        Ok(self.components.pick(&digits))
    }
}

impl<C: Components, I: RankInt> Combinatorics for CartesianProduct<C, I> {
    type Item = C::Item;
    type Rank = I;

    fn count(&self) -> &I {
        &self.count
    }

    fn lookup(&self, rank: &I) -> Result<C::Item, CombinatoricsError> {
        CartesianProduct::lookup(self, rank)
    }
}

impl<'a, C: Components, I: RankInt> IntoIterator for &'a CartesianProduct<C, I> {
    type Item = C::Item;
    type IntoIter = Iter<'a, CartesianProduct<C, I>>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}
