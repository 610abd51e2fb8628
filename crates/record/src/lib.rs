//! Schema-keyed heterogeneous records
//!
//! This crate defines the record side of the tessera data model:
//! - FieldKey / `field_keys!`: schema-time identifiers naming one field each
//! - LayoutPolicy / Native / Aligned: per-slot memory layout selection
//! - `keyed_record!`: elaborates a concrete record type from a schema listing
//! - Schema / FieldDef: runtime shape descriptors with eager validation
//! - Error: schema defect hierarchy
//!
//! A record type is elaborated once from its schema; afterwards every access
//! by key or by position resolves statically to a struct field. There is no
//! lookup table, no hashing, and no locking on the access path.
//!
//! ## Contract
//!
//! - A key or position outside the schema is rejected when the record type
//!   is elaborated (compile error), never at access time.
//! - `at::<i>()` and `get::<K_i>()` for the schema's i-th entry alias the
//!   exact same storage.
//! - Native and Aligned elaborations of one schema are logically
//!   interchangeable and differ only in footprint.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod key;
pub mod layout;
pub mod record;
pub mod schema;
pub mod traits;

pub use error::{Result, SchemaError};
pub use key::FieldKey;
pub use layout::{
    Aligned, AlignedSlot, LayoutKind, LayoutPolicy, Native, NativeSlot, SlotStorage, SLOT_ALIGN,
};
pub use schema::{FieldDef, Schema};
pub use traits::{At, Keyed, Record};
