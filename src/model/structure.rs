/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Periodic structures and non-periodic molecules
//!
//! Both are ordered collections of [`Site`]s with a [`SiteProperties`] store
//! whose arrays always have one entry per site. [`Structure`] additionally
//! owns a [`Lattice`]. Code that only needs to read sites is written against
//! the [`SiteCollection`] trait so it accepts either.

use super::composition::Composition;
use super::errors::{Result, StructureError};
use super::lattice::Lattice;
use super::properties::{SiteProperties, SitePropertyValues};
use super::species::SiteSpecies;
use super::vector::Vector3D;
use serde::{Deserialize, Serialize};

/// A species occupancy at a Cartesian position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub species: SiteSpecies,
    pub coords: Vector3D,
}

impl Site {
    pub fn new(species: impl Into<SiteSpecies>, coords: impl Into<Vector3D>) -> Self {
        Self {
            species: species.into(),
            coords: coords.into(),
        }
    }

    pub fn species_string(&self) -> String {
        self.species.species_string()
    }
}

/// Read access shared by structures and molecules
pub trait SiteCollection {
    fn sites(&self) -> &[Site];

    /// The periodic lattice, `None` for molecules
    fn lattice(&self) -> Option<&Lattice>;

    fn site_properties(&self) -> &SiteProperties;

    fn len(&self) -> usize {
        self.sites().len()
    }

    fn is_empty(&self) -> bool {
        self.sites().is_empty()
    }

    fn is_periodic(&self) -> bool {
        self.lattice().is_some()
    }

    fn composition(&self) -> Composition {
        Composition::from_species(self.sites().iter().map(|site| &site.species))
    }

    /// Formula in order of first appearance, e.g. `"Fe4 P4 O16"`
    fn formula(&self) -> String {
        self.composition().formula()
    }

    fn species_strings(&self) -> Vec<String> {
        self.sites().iter().map(Site::species_string).collect()
    }
}

fn sites_from_parts(
    species: Vec<SiteSpecies>,
    coords: Vec<Vector3D>,
) -> Result<Vec<Site>> {
    if species.len() != coords.len() {
        return Err(StructureError::CoordinateCount {
            species: species.len(),
            coords: coords.len(),
        });
    }
    Ok(species
        .into_iter()
        .zip(coords)
        .map(|(species, coords)| Site { species, coords })
        .collect())
}

/// A periodic crystal structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StructureParts")]
pub struct Structure {
    lattice: Lattice,
    sites: Vec<Site>,
    site_properties: SiteProperties,
}

#[derive(Deserialize)]
struct StructureParts {
    lattice: Lattice,
    sites: Vec<Site>,
    #[serde(default)]
    site_properties: SiteProperties,
}

impl TryFrom<StructureParts> for Structure {
    type Error = StructureError;

    fn try_from(parts: StructureParts) -> Result<Self> {
        parts.site_properties.validate(parts.sites.len())?;
        Ok(Self {
            lattice: parts.lattice,
            sites: parts.sites,
            site_properties: parts.site_properties,
        })
    }
}

impl Structure {
    /// Build a structure from species and coordinates
    ///
    /// When `coords_are_cartesian` is false the coordinates are fractional
    /// and are converted with the lattice.
    pub fn new(
        lattice: Lattice,
        species: Vec<SiteSpecies>,
        coords: Vec<[f64; 3]>,
        coords_are_cartesian: bool,
    ) -> Result<Self> {
        let coords = coords
            .into_iter()
            .map(|c| {
                if coords_are_cartesian {
                    Vector3D::from(c)
                } else {
                    lattice.cartesian_coords(c)
                }
            })
            .collect();
        Ok(Self::from_sites(lattice, sites_from_parts(species, coords)?))
    }

    pub fn from_sites(lattice: Lattice, sites: Vec<Site>) -> Self {
        Self {
            lattice,
            sites,
            site_properties: SiteProperties::new(),
        }
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Fractional coordinates of site `index`
    pub fn frac_coords(&self, index: usize) -> Option<Result<[f64; 3]>> {
        self.sites
            .get(index)
            .map(|site| self.lattice.fractional_coords(&site.coords))
    }

    /// Attach or replace a site property; its length must equal the site count
    pub fn add_site_property(
        &mut self,
        name: &str,
        values: impl Into<SitePropertyValues>,
    ) -> Result<()> {
        let count = self.sites.len();
        self.site_properties.insert_checked(name, values.into(), count)
    }

    pub fn remove_site_property(&mut self, name: &str) -> Option<SitePropertyValues> {
        self.site_properties.remove(name)
    }
}

impl SiteCollection for Structure {
    fn sites(&self) -> &[Site] {
        &self.sites
    }

    fn lattice(&self) -> Option<&Lattice> {
        Some(&self.lattice)
    }

    fn site_properties(&self) -> &SiteProperties {
        &self.site_properties
    }
}

/// A non-periodic collection of sites
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MoleculeParts")]
pub struct Molecule {
    sites: Vec<Site>,
    site_properties: SiteProperties,
}

#[derive(Deserialize)]
struct MoleculeParts {
    sites: Vec<Site>,
    #[serde(default)]
    site_properties: SiteProperties,
}

impl TryFrom<MoleculeParts> for Molecule {
    type Error = StructureError;

    fn try_from(parts: MoleculeParts) -> Result<Self> {
        parts.site_properties.validate(parts.sites.len())?;
        Ok(Self {
            sites: parts.sites,
            site_properties: parts.site_properties,
        })
    }
}

impl Molecule {
    /// Build a molecule from species and Cartesian coordinates
    pub fn new(species: Vec<SiteSpecies>, coords: Vec<[f64; 3]>) -> Result<Self> {
        let coords = coords.into_iter().map(Vector3D::from).collect();
        Ok(Self::from_sites(sites_from_parts(species, coords)?))
    }

    pub fn from_sites(sites: Vec<Site>) -> Self {
        Self {
            sites,
            site_properties: SiteProperties::new(),
        }
    }

    /// Attach or replace a site property; its length must equal the site count
    pub fn add_site_property(
        &mut self,
        name: &str,
        values: impl Into<SitePropertyValues>,
    ) -> Result<()> {
        let count = self.sites.len();
        self.site_properties.insert_checked(name, values.into(), count)
    }

    pub fn remove_site_property(&mut self, name: &str) -> Option<SitePropertyValues> {
        self.site_properties.remove(name)
    }
}

impl SiteCollection for Molecule {
    fn sites(&self) -> &[Site] {
        &self.sites
    }

    fn lattice(&self) -> Option<&Lattice> {
        None
    }

    fn site_properties(&self) -> &SiteProperties {
        &self.site_properties
    }
}
