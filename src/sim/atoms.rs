/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Generic simulation atoms: symbols, positions, cell and per-atom arrays

use super::constraints::Constraint;
use super::errors::{AtomsError, Result};
use crate::model::{Composition, Element, Lattice, Vector3D};
use serde::{Deserialize, Serialize};

/// Atoms as handed to or read back from a simulation code
///
/// Fields are public so readers and calculators can attach arrays directly.
/// Nothing here enforces that the arrays match the atom count; call
/// [`SimAtoms::validate`] (every conversion does) before relying on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimAtoms {
    pub symbols: Vec<Element>,
    pub positions: Vec<Vector3D>,
    #[serde(default)]
    pub cell: Option<Lattice>,
    #[serde(default)]
    pub pbc: [bool; 3],
    /// Starting guess for a calculation
    #[serde(default)]
    pub initial_magnetic_moments: Option<Vec<f64>>,
    /// Result of a calculation
    #[serde(default)]
    pub magnetic_moments: Option<Vec<f64>>,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
}

impl SimAtoms {
    /// Non-periodic atoms without cell, arrays or constraints
    pub fn new(symbols: Vec<Element>, positions: Vec<Vector3D>) -> Result<Self> {
        check_len("positions", symbols.len(), positions.len())?;
        Ok(Self {
            symbols,
            positions,
            ..Self::default()
        })
    }

    /// Attach a cell and periodic flags
    pub fn with_cell(mut self, cell: Lattice, pbc: [bool; 3]) -> Self {
        self.cell = Some(cell);
        self.pbc = pbc;
        self
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// True when a non-zero cell is attached
    pub fn has_cell(&self) -> bool {
        self.cell.is_some_and(|cell| !cell.is_zero())
    }

    /// True when any direction is periodic
    pub fn is_periodic(&self) -> bool {
        self.pbc.iter().any(|&p| p)
    }

    pub fn chemical_symbols(&self) -> Vec<&'static str> {
        self.symbols.iter().map(Element::symbol).collect()
    }

    pub fn composition(&self) -> Composition {
        Composition::from_elements(&self.symbols)
    }

    /// Hill formula, e.g. `"C2H2"`
    pub fn chemical_formula(&self) -> String {
        self.composition().hill_formula()
    }

    /// Replace all constraints with a single one
    pub fn set_constraint(&mut self, constraint: impl Into<Constraint>) {
        self.constraints = vec![constraint.into()];
    }

    /// Union of indices frozen by all position-fixing constraints, sorted
    pub fn fixed_indices(&self) -> Vec<usize> {
        let mut fixed: Vec<usize> = self
            .constraints
            .iter()
            .filter_map(Constraint::fixed_indices)
            .flatten()
            .copied()
            .collect();
        fixed.sort_unstable();
        fixed.dedup();
        fixed
    }

    /// Check that every attached array and constraint fits the atom count
    pub fn validate(&self) -> Result<()> {
        let n = self.len();
        check_len("positions", n, self.positions.len())?;
        if let Some(moments) = &self.initial_magnetic_moments {
            check_len("initial_magnetic_moments", n, moments.len())?;
        }
        if let Some(moments) = &self.magnetic_moments {
            check_len("magnetic_moments", n, moments.len())?;
        }

        for constraint in &self.constraints {
            let out_of_range = match constraint {
                Constraint::FixAtoms(fix) => fix.indices().iter().copied().find(|&i| i >= n),
                Constraint::FixBondLength { a, b } => [*a, *b].into_iter().find(|&i| i >= n),
            };
            if let Some(index) = out_of_range {
                return Err(AtomsError::ConstraintIndex {
                    constraint: constraint.name(),
                    index,
                    len: n,
                });
            }
        }
        Ok(())
    }
}

fn check_len(name: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(AtomsError::LengthMismatch {
            name,
            expected,
            found,
        });
    }
    Ok(())
}
