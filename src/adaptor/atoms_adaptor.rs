/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Conversion between structures/molecules and simulation atoms
//!
//! Mapping rules, in both directions:
//!
//! | structure / molecule          | atoms                          |
//! |-------------------------------|--------------------------------|
//! | lattice                       | cell, pbc all true             |
//! | no lattice                    | no cell, pbc all false         |
//! | site species                  | canonical element symbol       |
//! | `magmom` site property        | `magnetic_moments`             |
//! | `initial_magmom`              | `initial_magnetic_moments`     |
//! | `selective_dynamics`          | one `FixAtoms` constraint      |
//!
//! Selective dynamics is all-or-nothing: a site is fixed only when all three
//! flags are false. Sites fixed along some axes only are treated as free
//! (or rejected with [`PartialDynamicsPolicy::Reject`]). Constraints other
//! than `FixAtoms` carry no selective dynamics and are skipped.

use super::config::{AdaptorConfig, DisorderPolicy, PartialDynamicsPolicy};
use super::errors::{AdaptorError, Result};
use crate::model::{
    canonical_symbol, Element, Molecule, Site, SiteCollection, SiteProperties,
    SitePropertyValues, Structure, INITIAL_MAGMOM, MAGMOM, SELECTIVE_DYNAMICS,
};
use crate::sim::{Constraint, FixAtoms, SimAtoms};
use log::{debug, trace};

const FIXED: [bool; 3] = [false, false, false];
const FREE: [bool; 3] = [true, true, true];

/// Stateless converter between [`Structure`]/[`Molecule`] and [`SimAtoms`]
///
/// Every call builds a fresh result and leaves its input untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AtomsAdaptor {
    config: AdaptorConfig,
}

impl AtomsAdaptor {
    /// Adaptor with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AdaptorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AdaptorConfig {
        &self.config
    }

    /// Convert a structure or molecule into simulation atoms
    pub fn get_atoms<S>(&self, source: &S) -> Result<SimAtoms>
    where
        S: SiteCollection + ?Sized,
    {
        let n = source.len();
        let properties = source.site_properties();
        check_property_lengths(properties, n)?;

        debug!(
            "Converting {} sites to atoms (periodic: {})",
            n,
            source.is_periodic()
        );

        let mut symbols = Vec::with_capacity(n);
        let mut positions = Vec::with_capacity(n);
        for (index, site) in source.sites().iter().enumerate() {
            symbols.push(self.site_element(index, site)?);
            positions.push(site.coords);
        }

        let (cell, pbc) = match source.lattice() {
            Some(lattice) => (Some(*lattice), [true; 3]),
            None => (None, [false; 3]),
        };

        let constraints = match flag_property(properties, SELECTIVE_DYNAMICS)? {
            Some(flags) => vec![Constraint::FixAtoms(self.fixed_sites(flags)?)],
            None => Vec::new(),
        };

        Ok(SimAtoms {
            symbols,
            positions,
            cell,
            pbc,
            initial_magnetic_moments: float_property(properties, INITIAL_MAGMOM)?,
            magnetic_moments: float_property(properties, MAGMOM)?,
            constraints,
        })
    }

    /// Convert atoms with a cell into a periodic structure
    ///
    /// Periodic flags are not carried over: the result is periodic along
    /// all three lattice vectors. Fails with [`AdaptorError::TypeMismatch`]
    /// when the atoms have no (or an all-zero) cell.
    pub fn get_structure(&self, atoms: &SimAtoms) -> Result<Structure> {
        atoms.validate()?;

        let cell = match atoms.cell {
            Some(cell) if !cell.is_zero() => cell,
            _ => {
                return Err(AdaptorError::TypeMismatch {
                    expected: "atoms with a cell".to_string(),
                    found: "atoms without a cell".to_string(),
                })
            }
        };

        if atoms.pbc != [true; 3] {
            debug!(
                "Periodic flags {:?} dropped; structure is periodic in all directions",
                atoms.pbc
            );
        }
        debug!("Converting {} atoms to a structure", atoms.len());

        let mut structure = Structure::from_sites(cell, sites_from_atoms(atoms));
        for (name, values) in site_properties_from_atoms(atoms) {
            structure.add_site_property(name, values)?;
        }
        Ok(structure)
    }

    /// Convert atoms into a molecule, ignoring any cell
    pub fn get_molecule(&self, atoms: &SimAtoms) -> Result<Molecule> {
        atoms.validate()?;
        debug!("Converting {} atoms to a molecule", atoms.len());

        let mut molecule = Molecule::from_sites(sites_from_atoms(atoms));
        for (name, values) in site_properties_from_atoms(atoms) {
            molecule.add_site_property(name, values)?;
        }
        Ok(molecule)
    }

    fn site_element(&self, index: usize, site: &Site) -> Result<Element> {
        if !site.species.is_ordered() {
            match self.config.disorder_policy {
                DisorderPolicy::Reject => {
                    return Err(AdaptorError::DisorderedSite {
                        index,
                        species: site.species_string(),
                    })
                }
                DisorderPolicy::Canonical => {
                    trace!(
                        "Site {} ({}) reduced to {}",
                        index,
                        site.species,
                        canonical_symbol(&site.species)
                    );
                }
            }
        }
        Ok(canonical_symbol(&site.species))
    }

    fn fixed_sites(&self, flags: &[[bool; 3]]) -> Result<FixAtoms> {
        let mut fixed = Vec::new();
        for (index, site_flags) in flags.iter().enumerate() {
            match *site_flags {
                FIXED => fixed.push(index),
                FREE => {}
                partial => match self.config.partial_dynamics {
                    PartialDynamicsPolicy::Reject => {
                        return Err(AdaptorError::PartialDynamics {
                            index,
                            flags: partial,
                        })
                    }
                    PartialDynamicsPolicy::Ignore => {
                        trace!("Site {} selective dynamics {:?} not carried over", index, partial);
                    }
                },
            }
        }
        Ok(FixAtoms::from_sorted(fixed))
    }
}

fn check_property_lengths(properties: &SiteProperties, n: usize) -> Result<()> {
    for name in properties.names() {
        let found = properties.get(name).map_or(0, SitePropertyValues::len);
        if found != n {
            return Err(AdaptorError::LengthMismatch {
                name: name.to_string(),
                expected: n,
                found,
            });
        }
    }
    Ok(())
}

fn float_property(properties: &SiteProperties, name: &str) -> Result<Option<Vec<f64>>> {
    let Some(values) = properties.get(name) else {
        return Ok(None);
    };
    if let Some(floats) = values.as_floats() {
        return Ok(Some(floats.to_vec()));
    }
    match values {
        SitePropertyValues::Integers(ints) => Ok(Some(ints.iter().map(|&v| v as f64).collect())),
        other => Err(type_mismatch(name, "floats", other)),
    }
}

fn flag_property<'a>(
    properties: &'a SiteProperties,
    name: &str,
) -> Result<Option<&'a [[bool; 3]]>> {
    match properties.get(name) {
        None => Ok(None),
        Some(values) => values
            .as_flags()
            .map(Some)
            .ok_or_else(|| type_mismatch(name, "flags", values)),
    }
}

fn type_mismatch(name: &str, expected: &str, found: &SitePropertyValues) -> AdaptorError {
    AdaptorError::TypeMismatch {
        expected: format!("'{}' as {}", name, expected),
        found: found.kind().to_string(),
    }
}

fn sites_from_atoms(atoms: &SimAtoms) -> Vec<Site> {
    atoms
        .symbols
        .iter()
        .zip(&atoms.positions)
        .map(|(element, position)| Site::new(*element, *position))
        .collect()
}

/// Site properties implied by the atoms' arrays and constraints
fn site_properties_from_atoms(atoms: &SimAtoms) -> Vec<(&'static str, SitePropertyValues)> {
    let mut properties = Vec::new();

    if let Some(moments) = &atoms.initial_magnetic_moments {
        properties.push((INITIAL_MAGMOM, SitePropertyValues::Floats(moments.clone())));
    }
    if let Some(moments) = &atoms.magnetic_moments {
        properties.push((MAGMOM, SitePropertyValues::Floats(moments.clone())));
    }

    let mut has_fix_atoms = false;
    for constraint in &atoms.constraints {
        match constraint {
            Constraint::FixAtoms(_) => has_fix_atoms = true,
            other => trace!("Constraint {} has no site property equivalent", other.name()),
        }
    }
    if has_fix_atoms {
        let fixed = atoms.fixed_indices();
        let flags = (0..atoms.len())
            .map(|i| {
                if fixed.binary_search(&i).is_ok() {
                    FIXED
                } else {
                    FREE
                }
            })
            .collect();
        properties.push((SELECTIVE_DYNAMICS, SitePropertyValues::Flags(flags)));
    }

    properties
}

/// Convert a structure or molecule into atoms with the default configuration
pub fn to_sim_atoms<S>(source: &S) -> Result<SimAtoms>
where
    S: SiteCollection + ?Sized,
{
    AtomsAdaptor::new().get_atoms(source)
}

/// Convert atoms with a cell into a periodic structure with the default configuration
pub fn to_structure(atoms: &SimAtoms) -> Result<Structure> {
    AtomsAdaptor::new().get_structure(atoms)
}

/// Convert atoms into a molecule with the default configuration
pub fn to_molecule(atoms: &SimAtoms) -> Result<Molecule> {
    AtomsAdaptor::new().get_molecule(atoms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Lattice, SiteSpecies};

    fn molecule(symbols: &[&str]) -> Molecule {
        let species = symbols
            .iter()
            .map(|s| SiteSpecies::from_symbol(s).unwrap())
            .collect();
        let coords = (0..symbols.len()).map(|i| [i as f64, 0.0, 0.0]).collect();
        Molecule::new(species, coords).unwrap()
    }

    #[test]
    fn test_flag_kind_mismatch() {
        let mut m = molecule(&["H", "H"]);
        m.add_site_property(MAGMOM, vec![[true; 3]; 2]).unwrap();

        let err = to_sim_atoms(&m).unwrap_err();
        assert!(matches!(err, AdaptorError::TypeMismatch { .. }));
    }

    #[test]
    fn test_integer_magmoms_accepted() {
        let mut m = molecule(&["Fe"]);
        m.add_site_property(MAGMOM, vec![3_i64]).unwrap();

        let atoms = to_sim_atoms(&m).unwrap();
        assert_eq!(atoms.magnetic_moments, Some(vec![3.0]));
    }

    #[test]
    fn test_fixed_sites_partial_ignored() {
        let adaptor = AtomsAdaptor::new();
        let fix = adaptor
            .fixed_sites(&[FIXED, [true, false, true], FREE, FIXED])
            .unwrap();
        assert_eq!(fix.indices(), &[0, 3]);
    }

    #[test]
    fn test_fixed_sites_partial_rejected() {
        let adaptor = AtomsAdaptor::with_config(
            AdaptorConfig::default().with_partial_dynamics(PartialDynamicsPolicy::Reject),
        );
        let err = adaptor.fixed_sites(&[FIXED, [false, false, true]]).unwrap_err();
        assert_eq!(
            err,
            AdaptorError::PartialDynamics {
                index: 1,
                flags: [false, false, true]
            }
        );
    }

    #[test]
    fn test_zero_cell_is_type_mismatch() {
        let atoms = to_sim_atoms(&molecule(&["Ar"]))
            .unwrap()
            .with_cell(Lattice::new([[0.0; 3]; 3]), [true; 3]);
        assert!(matches!(
            to_structure(&atoms),
            Err(AdaptorError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_near_full_occupancy_is_ordered_in_strict_mode() {
        let cu = "Cu".parse().unwrap();
        let site = SiteSpecies::new(vec![(cu, 1.0 - 5e-7)]).unwrap();
        let m = Molecule::new(vec![site], vec![[0.0; 3]]).unwrap();

        let strict = AtomsAdaptor::with_config(AdaptorConfig::strict());
        let atoms = strict.get_atoms(&m).unwrap();
        assert_eq!(atoms.chemical_symbols(), vec!["Cu"]);
    }
}
