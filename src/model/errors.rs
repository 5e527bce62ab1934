/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the core structure model

/// Error types for building structures, molecules and their parts
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StructureError {
    #[error("Unknown element symbol: '{0}'")]
    UnknownElement(String),

    #[error("Invalid atomic number: {0}")]
    InvalidAtomicNumber(u8),

    #[error("Invalid species string: '{0}'")]
    InvalidSpecies(String),

    #[error("Invalid occupancy: {0}")]
    InvalidOccupancy(String),

    #[error("Invalid composition formula: '{0}'")]
    InvalidFormula(String),

    #[error("Lattice matrix is singular (determinant {0:e})")]
    SingularLattice(f64),

    #[error("Site property '{name}' has {found} values but the collection has {expected} sites")]
    PropertyLength {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("Got {coords} coordinates for {species} species")]
    CoordinateCount { species: usize, coords: usize },
}

/// Result type for core structure operations
pub type Result<T> = std::result::Result<T, StructureError>;
