/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for simulation atoms

/// Error types for simulation atoms
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AtomsError {
    #[error("Array '{name}' has {found} entries but there are {expected} atoms")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Constraint {constraint} refers to atom {index} but there are {len} atoms")]
    ConstraintIndex {
        constraint: &'static str,
        index: usize,
        len: usize,
    },
}

/// Result type for simulation atoms operations
pub type Result<T> = std::result::Result<T, AtomsError>;
