//! Error types for schema elaboration
//!
//! Every failure here is a shape defect in a schema definition: duplicate
//! keys, an unknown key, a position outside the schema. Defects are
//! rejected when the schema is assembled or queried during elaboration,
//! before any record instance exists; there is nothing to retry or
//! recover, the caller fixes the definition. We use `thiserror` for the
//! `Display` and `Error` implementations.

use thiserror::Error;

/// Result type alias for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Shape defects in a schema definition
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// Two schema entries share a key
    #[error("duplicate key in schema: {name}")]
    DuplicateKey {
        /// Key name appearing more than once
        name: String,
    },

    /// Key is not part of the schema
    #[error("unknown key: {name}")]
    UnknownKey {
        /// Key name that was requested
        name: String,
    },

    /// Position outside `[0, dim)`
    #[error("position {position} out of range for schema of dim {dim}")]
    PositionOutOfRange {
        /// Position that was requested
        position: usize,
        /// Schema length
        dim: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_duplicate_key() {
        let err = SchemaError::DuplicateKey {
            name: "Density".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate key in schema: Density");
    }

    #[test]
    fn test_error_display_unknown_key() {
        let err = SchemaError::UnknownKey {
            name: "Vorticity".to_string(),
        };
        assert_eq!(err.to_string(), "unknown key: Vorticity");
    }

    #[test]
    fn test_error_display_position_out_of_range() {
        let err = SchemaError::PositionOutOfRange { position: 3, dim: 2 };
        let msg = err.to_string();
        assert!(msg.contains("position 3"));
        assert!(msg.contains("dim 2"));
    }
}
