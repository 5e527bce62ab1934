/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Simulation atoms model
//!
//! A flat, calculator-facing representation: one element and Cartesian
//! position per atom, an optional cell with per-axis periodic flags,
//! optional magnetic moment arrays and a list of constraints.

pub mod atoms;
pub mod constraints;
pub mod errors;

pub use atoms::SimAtoms;
pub use constraints::{Constraint, FixAtoms};
pub use errors::{AtomsError, Result};
