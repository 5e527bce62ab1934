/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Elements, species and per-site occupancies
//!
//! A site in a chemistry-native structure does not hold a bare element: it
//! holds a [`SiteSpecies`], an ordered mapping from [`Species`] (element plus
//! optional oxidation state) to occupancy. Reducing that mapping to a single
//! element is done by [`canonical_symbol`], a pure function, so the lossy
//! direction of any conversion can be audited in one place.

use super::database;
use super::errors::{Result, StructureError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tolerance used when checking that occupancies sum to one
pub const OCCUPANCY_TOLERANCE: f64 = 1e-6;

/// A chemical element, identified by its atomic number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Element(u8);

impl Element {
    pub fn from_atomic_number(atomic_number: u8) -> Result<Self> {
        if database::element_symbol(atomic_number).is_none() {
            return Err(StructureError::InvalidAtomicNumber(atomic_number));
        }
        Ok(Self(atomic_number))
    }

    pub fn from_symbol(symbol: &str) -> Result<Self> {
        database::atomic_number_from_symbol(symbol)
            .map(Self)
            .ok_or_else(|| StructureError::UnknownElement(symbol.to_string()))
    }

    pub fn atomic_number(&self) -> u8 {
        self.0
    }

    pub fn symbol(&self) -> &'static str {
        // Only constructed through validated paths
        database::ELEMENT_SYMBOLS[self.0 as usize - 1]
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = StructureError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_symbol(s)
    }
}

impl TryFrom<String> for Element {
    type Error = StructureError;

    fn try_from(s: String) -> Result<Self> {
        Self::from_symbol(&s)
    }
}

impl From<Element> for String {
    fn from(element: Element) -> Self {
        element.symbol().to_string()
    }
}

/// An element with an optional oxidation state, e.g. `Fe2+`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Species {
    element: Element,
    oxidation_state: Option<f64>,
}

impl Species {
    pub fn new(element: Element, oxidation_state: Option<f64>) -> Self {
        Self {
            element,
            oxidation_state,
        }
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn oxidation_state(&self) -> Option<f64> {
        self.oxidation_state
    }
}

impl From<Element> for Species {
    fn from(element: Element) -> Self {
        Self::new(element, None)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.element)?;

        if let Some(oxi) = self.oxidation_state {
            let magnitude = oxi.abs();
            let sign = if oxi < 0.0 { '-' } else { '+' };
            if magnitude == 1.0 {
                write!(f, "{}", sign)?;
            } else if magnitude.fract() == 0.0 {
                write!(f, "{}{}", magnitude as i64, sign)?;
            } else {
                write!(f, "{}{}", magnitude, sign)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Species {
    type Err = StructureError;

    /// Parses `"Fe"`, `"Fe2+"`, `"O2-"`, `"Na+"` or `"Fe2.5+"`
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || StructureError::InvalidSpecies(s.to_string());

        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (symbol, charge) = s.split_at(split);
        let element = Element::from_symbol(symbol).map_err(|_| invalid())?;

        if charge.is_empty() {
            return Ok(Self::from(element));
        }

        let (magnitude, sign) = match charge.as_bytes()[charge.len() - 1] {
            b'+' => (&charge[..charge.len() - 1], 1.0),
            b'-' => (&charge[..charge.len() - 1], -1.0),
            _ => return Err(invalid()),
        };
        let magnitude = if magnitude.is_empty() {
            1.0
        } else {
            magnitude.parse::<f64>().map_err(|_| invalid())?
        };
        if magnitude < 0.0 {
            return Err(invalid());
        }

        Ok(Self::new(element, Some(sign * magnitude)))
    }
}

impl TryFrom<String> for Species {
    type Error = StructureError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Species> for String {
    fn from(species: Species) -> Self {
        species.to_string()
    }
}

/// Occupancy of a single site: species mapped to fractions summing to one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(Species, f64)>", into = "Vec<(Species, f64)>")]
pub struct SiteSpecies {
    // Never empty
    entries: Vec<(Species, f64)>,
}

impl SiteSpecies {
    /// Build a (possibly disordered) occupancy
    ///
    /// Repeated species are merged. Every occupancy must lie in `(0, 1]`
    /// and the total must be one within [`OCCUPANCY_TOLERANCE`].
    pub fn new(entries: Vec<(Species, f64)>) -> Result<Self> {
        let mut merged: Vec<(Species, f64)> = Vec::with_capacity(entries.len());
        for (species, occupancy) in entries {
            if !(occupancy > 0.0 && occupancy <= 1.0 + OCCUPANCY_TOLERANCE) {
                return Err(StructureError::InvalidOccupancy(format!(
                    "{} has occupancy {}",
                    species, occupancy
                )));
            }
            match merged.iter_mut().find(|(s, _)| *s == species) {
                Some(entry) => entry.1 += occupancy,
                None => merged.push((species, occupancy)),
            }
        }

        if merged.is_empty() {
            return Err(StructureError::InvalidOccupancy(
                "site has no species".to_string(),
            ));
        }

        let total: f64 = merged.iter().map(|(_, occ)| occ).sum();
        if (total - 1.0).abs() > OCCUPANCY_TOLERANCE {
            return Err(StructureError::InvalidOccupancy(format!(
                "occupancies sum to {}",
                total
            )));
        }

        Ok(Self { entries: merged })
    }

    /// Fully occupied by a single species
    pub fn ordered(species: impl Into<Species>) -> Self {
        Self {
            entries: vec![(species.into(), 1.0)],
        }
    }

    /// Fully occupied site from a species string such as `"Fe"` or `"O2-"`
    pub fn from_symbol(symbol: &str) -> Result<Self> {
        Ok(Self::ordered(symbol.parse::<Species>()?))
    }

    pub fn entries(&self) -> &[(Species, f64)] {
        &self.entries
    }

    /// True for a single species at full occupancy
    pub fn is_ordered(&self) -> bool {
        self.entries.len() == 1 && (self.entries[0].1 - 1.0).abs() <= OCCUPANCY_TOLERANCE
    }

    /// `"Fe2+"` for an ordered site, `"Fe:0.500, Ni:0.500"` otherwise
    pub fn species_string(&self) -> String {
        if self.is_ordered() {
            return self.entries[0].0.to_string();
        }
        self.entries
            .iter()
            .map(|(species, occupancy)| format!("{}:{:.3}", species, occupancy))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl From<Element> for SiteSpecies {
    fn from(element: Element) -> Self {
        Self::ordered(element)
    }
}

impl From<Species> for SiteSpecies {
    fn from(species: Species) -> Self {
        Self::ordered(species)
    }
}

impl TryFrom<Vec<(Species, f64)>> for SiteSpecies {
    type Error = StructureError;

    fn try_from(entries: Vec<(Species, f64)>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<SiteSpecies> for Vec<(Species, f64)> {
    fn from(site: SiteSpecies) -> Self {
        site.entries
    }
}

impl fmt::Display for SiteSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.species_string())
    }
}

/// Reduce a site's occupancy to one element
///
/// Picks the species with the largest occupancy (the first listed on a tie)
/// and strips its oxidation state. Exact for ordered sites; for disordered
/// sites the minority species are dropped.
pub fn canonical_symbol(site: &SiteSpecies) -> Element {
    let mut best = &site.entries[0];
    for entry in &site.entries[1..] {
        if entry.1 > best.1 {
            best = entry;
        }
    }
    best.0.element()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sp(s: &str) -> Species {
        s.parse().unwrap()
    }

    #[test]
    fn test_element_round_trip() {
        let fe = Element::from_symbol("Fe").unwrap();
        assert_eq!(fe.atomic_number(), 26);
        assert_eq!(fe.symbol(), "Fe");
        assert_eq!(Element::from_atomic_number(26).unwrap(), fe);
        assert!(Element::from_atomic_number(0).is_err());
        assert!(Element::from_symbol("Qq").is_err());
    }

    #[rstest]
    #[case("Fe", None)]
    #[case("Fe2+", Some(2.0))]
    #[case("O2-", Some(-2.0))]
    #[case("Na+", Some(1.0))]
    #[case("Cl-", Some(-1.0))]
    #[case("Fe2.5+", Some(2.5))]
    fn test_species_parsing(#[case] input: &str, #[case] oxidation: Option<f64>) {
        let species = sp(input);
        assert_eq!(species.oxidation_state(), oxidation);
        assert_eq!(species.to_string(), input);
    }

    #[rstest]
    #[case("")]
    #[case("Xx2+")]
    #[case("Fe2")]
    #[case("Fe+2")]
    fn test_invalid_species(#[case] input: &str) {
        assert!(input.parse::<Species>().is_err());
    }

    #[test]
    fn test_site_species_validation() {
        assert!(SiteSpecies::new(vec![]).is_err());
        assert!(SiteSpecies::new(vec![(sp("Fe"), 0.5)]).is_err());
        assert!(SiteSpecies::new(vec![(sp("Fe"), 0.0), (sp("Ni"), 1.0)]).is_err());
        assert!(SiteSpecies::new(vec![(sp("Fe"), 0.5), (sp("Ni"), 0.5)]).is_ok());
    }

    #[test]
    fn test_duplicate_species_merge() {
        let site = SiteSpecies::new(vec![(sp("Fe"), 0.5), (sp("Fe"), 0.5)]).unwrap();
        assert!(site.is_ordered());
        assert_eq!(site.species_string(), "Fe");
    }

    #[test]
    fn test_species_string() {
        assert_eq!(SiteSpecies::from_symbol("O2-").unwrap().species_string(), "O2-");

        let disordered = SiteSpecies::new(vec![(sp("Fe"), 0.5), (sp("Ni"), 0.5)]).unwrap();
        assert!(!disordered.is_ordered());
        assert_eq!(disordered.species_string(), "Fe:0.500, Ni:0.500");
    }

    #[test]
    fn test_canonical_symbol() {
        let ordered = SiteSpecies::from_symbol("Fe3+").unwrap();
        assert_eq!(canonical_symbol(&ordered).symbol(), "Fe");

        let majority = SiteSpecies::new(vec![(sp("Ni2+"), 0.25), (sp("Co2+"), 0.75)]).unwrap();
        assert_eq!(canonical_symbol(&majority).symbol(), "Co");

        let tie = SiteSpecies::new(vec![(sp("Ni"), 0.5), (sp("Fe"), 0.5)]).unwrap();
        assert_eq!(canonical_symbol(&tie).symbol(), "Ni");
    }
}
