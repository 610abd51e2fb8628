//! Cartesian-product expansion
//!
//! The engine accumulates right to left: it seeds one record per
//! candidate of the last position, then for each remaining position
//! multiplies the accumulated set by that position's sequence. The loop
//! is the iterative equivalent of an odometer with the leftmost digit
//! slowest; the resulting order is part of the contract, not an
//! implementation detail.

use std::ops::Index;

use tracing::{debug, trace};

use crate::space::CombinationSpace;
use crate::tuple::{Combination, PositionSlots};

/// The materialized product: every fully-assigned record, in enumeration
/// order.
///
/// Produced once and immutable afterwards; any number of readers may
/// iterate it without coordination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationSet<T> {
    records: Vec<Combination<T>>,
}

impl<T> CombinationSet<T> {
    /// Number of records; equal to the space's cardinality.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the product is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in enumeration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Combination<T>> {
        self.records.iter()
    }

    /// Records in enumeration order, as a slice.
    pub fn records(&self) -> &[Combination<T>] {
        &self.records
    }
}

impl<T> Index<usize> for CombinationSet<T> {
    type Output = Combination<T>;

    fn index(&self, index: usize) -> &Combination<T> {
        &self.records[index]
    }
}

impl<T> IntoIterator for CombinationSet<T> {
    type Item = Combination<T>;
    type IntoIter = std::vec::IntoIter<Combination<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a CombinationSet<T> {
    type Item = &'a Combination<T>;
    type IntoIter = std::slice::Iter<'a, Combination<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Expand a combination space into its full Cartesian product.
///
/// Position 0 varies slowest, position N-1 fastest. An empty candidate
/// sequence at any position empties the whole result. Repeated expansion
/// of the same space yields an identical set in identical order.
///
/// ```
/// use tessera_combine::{all_combinations, CombinationSpace};
///
/// let set = all_combinations(vec![vec!['a', 'b'], vec!['x', 'y', 'z']]);
/// assert_eq!(set.len(), 6);
/// assert_eq!(set[0].as_slice(), ['a', 'x']);
/// assert_eq!(set[5].as_slice(), ['b', 'z']);
///
/// // Bare values normalize to a single 1-slot record.
/// let unit = all_combinations(CombinationSpace::scalar(7));
/// assert_eq!(unit.len(), 1);
/// assert_eq!(unit[0].as_slice(), [7]);
/// ```
pub fn all_combinations<T, S>(space: S) -> CombinationSet<T>
where
    T: Clone + Default,
    S: Into<CombinationSpace<T>>,
{
    CombinationSet {
        records: expand_into(&space.into()),
    }
}

/// Expand a space into any container honoring the positional contract.
///
/// Correctness relies only on [`PositionSlots::seeded`],
/// [`PositionSlots::with`], and the container keeping `dim` slots.
/// Partially-assigned intermediates never leave this function.
pub fn expand_into<C>(space: &CombinationSpace<C::Slot>) -> Vec<C>
where
    C: PositionSlots,
    C::Slot: Clone + Default,
{
    let dim = space.dim();
    if dim == 0 {
        return Vec::new();
    }
    trace!(dim, cardinality = space.cardinality(), "expanding combination space");

    let sequences = space.sequences();
    let seed = C::seeded(dim);

    let last = &sequences[dim - 1];
    let mut acc: Vec<C> = last.iter().map(|c| seed.with(dim - 1, c.clone())).collect();

    for p in (0..dim - 1).rev() {
        let seq = &sequences[p];
        // A zero factor absorbs the product, wherever it shows up.
        if seq.is_empty() || acc.is_empty() {
            acc.clear();
            break;
        }

        let mut next = Vec::with_capacity(acc.len().saturating_mul(seq.len()));
        for candidate in seq.iter() {
            for record in &acc {
                next.push(record.with(p, candidate.clone()));
            }
        }
        acc = next;
    }

    debug!(records = acc.len(), "combination space expanded");
    acc
}
