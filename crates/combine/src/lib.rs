//! Combinatorial enumeration over candidate sequences
//!
//! Given N ordered candidate sequences, one per record position, this
//! crate materializes the full Cartesian product as an ordered sequence
//! of N-slot records:
//!
//! - [`Combination`]: the fixed-length, position-addressed record the
//!   engine assembles, addressed the same way schema-keyed records are.
//! - [`CandidateSequence`] / [`CombinationSpace`]: one position's ordered
//!   candidates, and the N sequences of one enumeration request.
//! - [`all_combinations`]: the single expansion entry point, for 1-D and
//!   N-D callers alike.
//!
//! Expansion is a pure, deterministic, single-pass elaboration: no
//! filtering, no cross-position constraints, no partially-assigned record
//! ever escapes. The resulting [`CombinationSet`] is immutable and can be
//! iterated by any number of readers.

#![warn(clippy::all)]

pub mod enumerate;
pub mod space;
pub mod tuple;

pub use enumerate::{all_combinations, expand_into, CombinationSet};
pub use space::{CandidateSequence, CombinationSpace};
pub use tuple::{Combination, PositionSlots};
