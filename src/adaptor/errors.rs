/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the structure/atoms adaptor

use crate::model::StructureError;
use crate::sim::AtomsError;

/// Error types for conversions between structures and simulation atoms
///
/// A failed conversion never yields a partially built result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdaptorError {
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("Length mismatch for '{name}': expected {expected} entries, found {found}")]
    LengthMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("Constraint {constraint} refers to atom {index} but there are {len} atoms")]
    ConstraintIndex {
        constraint: String,
        index: usize,
        len: usize,
    },

    #[error("Site {index} is disordered ({species})")]
    DisorderedSite { index: usize, species: String },

    #[error("Site {index} is fixed along some axes only ({flags:?})")]
    PartialDynamics { index: usize, flags: [bool; 3] },

    #[error("Structure error: {0}")]
    Structure(#[from] StructureError),
}

impl From<AtomsError> for AdaptorError {
    fn from(err: AtomsError) -> Self {
        match err {
            AtomsError::LengthMismatch {
                name,
                expected,
                found,
            } => Self::LengthMismatch {
                name: name.to_string(),
                expected,
                found,
            },
            AtomsError::ConstraintIndex {
                constraint,
                index,
                len,
            } => Self::ConstraintIndex {
                constraint: constraint.to_string(),
                index,
                len,
            },
        }
    }
}

/// Result type for adaptor operations
pub type Result<T> = std::result::Result<T, AdaptorError>;
