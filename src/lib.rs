//! Tessera - build-time data modeling for simulation pipelines
//!
//! Tessera provides the two primitives the surrounding framework builds
//! everything else on: schema-keyed heterogeneous records with pluggable
//! slot layout, and full Cartesian expansion of candidate sequences into
//! ordered record sets.
//!
//! # Quick Start
//!
//! ```
//! use tessera::{all_combinations, field_keys, keyed_record};
//!
//! field_keys! {
//!     pub Density,
//!     pub Velocity,
//! }
//!
//! keyed_record! {
//!     /// Per-cell diagnostic sample.
//!     pub struct CellSample {
//!         density: Density => f64,
//!         velocity: Velocity => [f64; 3],
//!     }
//! }
//!
//! let mut sample: CellSample<tessera::Native> = CellSample::default();
//! *sample.get_mut::<Density>() = 1.2;
//! assert_eq!(*sample.at::<0>(), 1.2);
//!
//! // Expand a two-axis parameter sweep into all six configurations.
//! let sweep = all_combinations(vec![vec![16usize, 32], vec![1, 2, 3]]);
//! assert_eq!(sweep.len(), 6);
//! assert_eq!(sweep[0].as_slice(), [16, 1]);
//! ```
//!
//! # Architecture
//!
//! Both primitives are pure, deterministic, single-pass elaborations that
//! run before any data-parallel work starts. A record type is elaborated
//! once from its schema and accessed with no further lookups; a
//! combination space is expanded once and the resulting set is immutable.
//! Everything is re-exported here from the two member crates,
//! `tessera-record` and `tessera-combine`.

pub use tessera_combine::*;
pub use tessera_record::*;
