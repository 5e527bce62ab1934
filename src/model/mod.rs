/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Chemistry-native structure model
//!
//! Sites carry a species occupancy and a Cartesian position; periodic
//! structures add a lattice; both carry named per-site property arrays.

pub mod composition;
pub mod database;
pub mod errors;
pub mod lattice;
pub mod properties;
pub mod species;
pub mod structure;
pub mod vector;

pub use composition::Composition;
pub use errors::{Result, StructureError};
pub use lattice::Lattice;
pub use properties::{
    SiteProperties, SitePropertyValues, INITIAL_MAGMOM, MAGMOM, SELECTIVE_DYNAMICS,
};
pub use species::{canonical_symbol, Element, SiteSpecies, Species};
pub use structure::{Molecule, Site, SiteCollection, Structure};
pub use vector::Vector3D;
