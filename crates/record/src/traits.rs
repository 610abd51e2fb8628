//! Access contracts for keyed records
//!
//! [`Keyed`] and [`At`] are implemented per (record, key) and
//! (record, position) pair by [`keyed_record!`](crate::keyed_record). A
//! key or position outside the schema has no impl, so misuse is rejected
//! when the caller's code is elaborated, not at access time. For the
//! schema's i-th entry the two traits resolve to the same struct field,
//! which is the identity law record consumers rely on.

use crate::key::FieldKey;
use crate::layout::LayoutKind;
use crate::schema::Schema;

/// Access to the slot selected by the key `K`.
pub trait Keyed<K: FieldKey> {
    /// Value type of the selected slot.
    type Value;

    /// Borrow the slot's value.
    fn field(&self) -> &Self::Value;

    /// Mutably borrow the slot's value.
    fn field_mut(&mut self) -> &mut Self::Value;
}

/// Access to the slot at position `P` in schema order.
pub trait At<const P: usize> {
    /// Value type of the selected slot.
    type Value;

    /// Borrow the slot's value.
    fn slot(&self) -> &Self::Value;

    /// Mutably borrow the slot's value.
    fn slot_mut(&mut self) -> &mut Self::Value;
}

/// A record type elaborated from a schema.
pub trait Record {
    /// Number of slots; equal to the schema length.
    const DIM: usize;

    /// Layout policy the record was elaborated under.
    const LAYOUT: LayoutKind;

    /// Runtime descriptor of the elaborated shape.
    ///
    /// The shape is fixed at elaboration; the descriptor is assembled
    /// fresh on each call.
    fn schema() -> Schema;
}
