/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # atoms-adaptor
//!
//! Bidirectional conversion between a chemistry-native structure model
//! (sites with species occupancies, an optional lattice and named per-site
//! properties) and a flat simulation atoms model (symbols, positions, an
//! optional cell, magnetic moment arrays and constraints).
//!
//! ```
//! use atoms_adaptor::model::{Lattice, SiteSpecies, Structure, SiteCollection, MAGMOM};
//! use atoms_adaptor::{to_sim_atoms, to_structure};
//!
//! let mut structure = Structure::new(
//!     Lattice::cubic(2.87),
//!     vec![SiteSpecies::from_symbol("Fe").unwrap(); 2],
//!     vec![[0.0, 0.0, 0.0], [0.5, 0.5, 0.5]],
//!     false,
//! )?;
//! structure.add_site_property(MAGMOM, vec![2.2, 2.2])?;
//!
//! let atoms = to_sim_atoms(&structure)?;
//! assert_eq!(atoms.pbc, [true; 3]);
//! assert_eq!(atoms.magnetic_moments, Some(vec![2.2, 2.2]));
//! assert!(atoms.initial_magnetic_moments.is_none());
//!
//! let back = to_structure(&atoms)?;
//! assert_eq!(back.formula(), "Fe2");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod adaptor;
pub mod model;
pub mod sim;

pub use adaptor::{
    to_molecule, to_sim_atoms, to_structure, AdaptorConfig, AdaptorError, AtomsAdaptor,
    DisorderPolicy, PartialDynamicsPolicy,
};
pub use model::{Molecule, SiteCollection, Structure};
pub use sim::{Constraint, FixAtoms, SimAtoms};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
