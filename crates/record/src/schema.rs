//! Runtime schema descriptors
//!
//! A schema is an ordered list of unique (key, value type) pairs. Records
//! elaborated with [`keyed_record!`](crate::keyed_record) get theirs
//! checked at compile time; hand-assembled schemas validate eagerly in
//! [`Schema::new`], before any record instance exists, never lazily on
//! first access.
//!
//! ## Contract
//!
//! - Keys are pairwise distinct.
//! - Order is significant and fixes the position ↔ key correspondence.
//! - A `Schema` is never mutated after construction.

use std::any::type_name;
use std::mem::{align_of, size_of};

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, SchemaError};
use crate::layout::{round_up, LayoutKind};

/// One (key, value type) schema entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    name: &'static str,
    type_name: &'static str,
    size: usize,
    align: usize,
}

impl FieldDef {
    /// Pair a key name with the value type `T`.
    pub fn of<T>(name: &'static str) -> Self {
        FieldDef {
            name,
            type_name: type_name::<T>(),
            size: size_of::<T>(),
            align: align_of::<T>(),
        }
    }

    /// Key name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Value type name. Diagnostic only, not a reflection handle.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Native value size in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Native value alignment in bytes.
    pub fn align(&self) -> usize {
        self.align
    }
}

/// Ordered list of unique schema entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    fields: Vec<FieldDef>,
}

impl Schema {
    /// Assemble a schema from ordered entries.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateKey`] if two entries share a name.
    pub fn new(fields: impl IntoIterator<Item = FieldDef>) -> Result<Self> {
        let fields: Vec<FieldDef> = fields.into_iter().collect();
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.name == field.name) {
                return Err(SchemaError::DuplicateKey {
                    name: field.name.to_string(),
                });
            }
        }
        debug!(dim = fields.len(), "schema assembled");
        Ok(Schema { fields })
    }

    /// Assemble from entries already known to be distinct (macro output,
    /// where duplicate keys fail to compile).
    #[doc(hidden)]
    pub fn from_distinct(fields: Vec<FieldDef>) -> Self {
        debug_assert!(
            fields
                .iter()
                .enumerate()
                .all(|(i, f)| fields[..i].iter().all(|g| g.name != f.name)),
            "schema entries must have distinct keys"
        );
        Schema { fields }
    }

    /// Number of entries.
    pub fn dim(&self) -> usize {
        self.fields.len()
    }

    /// All entries in schema order.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Position of the entry with the given key name.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownKey`] if no entry has that name.
    pub fn position_of(&self, name: &str) -> Result<usize> {
        self.fields
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| SchemaError::UnknownKey {
                name: name.to_string(),
            })
    }

    /// Entry at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::PositionOutOfRange`] outside `[0, dim)`.
    pub fn at(&self, position: usize) -> Result<&FieldDef> {
        self.fields.get(position).ok_or(SchemaError::PositionOutOfRange {
            position,
            dim: self.fields.len(),
        })
    }

    /// Entry with the given key name.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownKey`] if no entry has that name.
    pub fn field(&self, name: &str) -> Result<&FieldDef> {
        Ok(&self.fields[self.position_of(name)?])
    }

    /// Byte offset of every slot under the given layout, in schema order.
    ///
    /// Offsets follow the ordered concatenation of slot footprints, with
    /// padding inserted for each slot's alignment.
    pub fn offsets(&self, kind: LayoutKind) -> Vec<usize> {
        let mut offsets = Vec::with_capacity(self.fields.len());
        let mut cursor = 0usize;
        for field in &self.fields {
            let (size, align) = kind.slot_extent(field.size, field.align);
            cursor = round_up(cursor, align);
            offsets.push(cursor);
            cursor += size;
        }
        offsets
    }

    /// Total record footprint in bytes under the given layout.
    ///
    /// Matches `size_of` for a record elaborated over this schema under
    /// the same policy.
    pub fn footprint(&self, kind: LayoutKind) -> usize {
        let mut cursor = 0usize;
        let mut max_align = 1usize;
        for field in &self.fields {
            let (size, align) = kind.slot_extent(field.size, field.align);
            cursor = round_up(cursor, align) + size;
            max_align = max_align.max(align);
        }
        round_up(cursor, max_align)
    }
}
