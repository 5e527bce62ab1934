/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Structure/atoms adaptor
//!
//! Three pure conversions: structure or molecule to atoms, atoms to a
//! periodic structure, and atoms to a molecule.

pub mod atoms_adaptor;
pub mod config;
pub mod errors;

pub use atoms_adaptor::{to_molecule, to_sim_atoms, to_structure, AtomsAdaptor};
pub use config::{AdaptorConfig, DisorderPolicy, PartialDynamicsPolicy};
pub use errors::{AdaptorError, Result};
