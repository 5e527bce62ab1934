/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Elemental composition of a site collection or atoms object

use super::database;
use super::errors::{Result, StructureError};
use super::species::{Element, SiteSpecies};
use std::fmt;
use std::str::FromStr;

const AMOUNT_TOLERANCE: f64 = 1e-8;

/// Element amounts, stored in order of first appearance
#[derive(Debug, Clone, Default)]
pub struct Composition {
    amounts: Vec<(Element, f64)>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum the occupancies of a sequence of sites
    pub fn from_species<'a>(sites: impl IntoIterator<Item = &'a SiteSpecies>) -> Self {
        let mut composition = Self::new();
        for site in sites {
            for (species, occupancy) in site.entries() {
                composition.add(species.element(), *occupancy);
            }
        }
        composition
    }

    /// Count whole atoms of the given elements
    pub fn from_elements<'a>(elements: impl IntoIterator<Item = &'a Element>) -> Self {
        let mut composition = Self::new();
        for element in elements {
            composition.add(*element, 1.0);
        }
        composition
    }

    pub fn add(&mut self, element: Element, amount: f64) {
        match self.amounts.iter_mut().find(|(e, _)| *e == element) {
            Some(entry) => entry.1 += amount,
            None => self.amounts.push((element, amount)),
        }
    }

    /// Amount of an element, zero when absent
    pub fn get(&self, element: Element) -> f64 {
        self.amounts
            .iter()
            .find(|(e, _)| *e == element)
            .map_or(0.0, |(_, amount)| *amount)
    }

    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        self.amounts.iter().map(|(e, _)| *e)
    }

    /// Total number of atoms
    pub fn num_atoms(&self) -> f64 {
        self.amounts.iter().map(|(_, amount)| amount).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// Space-separated formula ordered by electronegativity, e.g. `"Fe4 P4 O16"`
    ///
    /// Elements without a tabulated electronegativity go last; ties keep
    /// first-appearance order, so the result does not depend on site order
    /// except between equally electronegative elements.
    pub fn formula(&self) -> String {
        let mut ordered: Vec<&(Element, f64)> = self.amounts.iter().collect();
        ordered.sort_by(|(a, _), (b, _)| {
            let x = |e: &Element| {
                database::electronegativity(e.atomic_number()).unwrap_or(f64::INFINITY)
            };
            x(a).total_cmp(&x(b))
        });

        ordered
            .into_iter()
            .map(|(e, amount)| format!("{}{}", e, format_amount(*amount)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Hill formula: carbon, hydrogen, then alphabetical; `1` counts omitted
    pub fn hill_formula(&self) -> String {
        let mut ordered: Vec<&(Element, f64)> = self.amounts.iter().collect();
        let has_carbon = ordered.iter().any(|(e, _)| e.symbol() == "C");
        ordered.sort_by_key(|(e, _)| {
            let rank = match e.symbol() {
                "C" if has_carbon => 0,
                "H" if has_carbon => 1,
                _ => 2,
            };
            (rank, e.symbol())
        });

        ordered
            .into_iter()
            .map(|(e, amount)| {
                if (*amount - 1.0).abs() < AMOUNT_TOLERANCE {
                    e.symbol().to_string()
                } else {
                    format!("{}{}", e, format_amount(*amount))
                }
            })
            .collect()
    }
}

fn format_amount(amount: f64) -> String {
    if (amount - amount.round()).abs() < AMOUNT_TOLERANCE {
        format!("{}", amount.round() as i64)
    } else {
        format!("{}", amount)
    }
}

/// Order-independent comparison with a small amount tolerance
impl PartialEq for Composition {
    fn eq(&self, other: &Self) -> bool {
        let covers = |a: &Self, b: &Self| {
            a.amounts
                .iter()
                .all(|(e, amount)| (b.get(*e) - amount).abs() < AMOUNT_TOLERANCE)
        };
        covers(self, other) && covers(other, self)
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formula())
    }
}

impl FromStr for Composition {
    type Err = StructureError;

    /// Parses formulas such as `"Fe4P4O16"`, `"H2 C2"` or `"FeO0.5"`
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || StructureError::InvalidFormula(s.to_string());
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        let mut composition = Self::new();
        let mut i = 0;

        while i < chars.len() {
            if !chars[i].is_ascii_uppercase() {
                return Err(invalid());
            }
            let start = i;
            i += 1;
            while i < chars.len() && chars[i].is_ascii_lowercase() {
                i += 1;
            }
            let symbol: String = chars[start..i].iter().collect();
            let element = Element::from_symbol(&symbol).map_err(|_| invalid())?;

            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let amount = if start == i {
                1.0
            } else {
                let digits: String = chars[start..i].iter().collect();
                digits.parse::<f64>().map_err(|_| invalid())?
            };

            composition.add(element, amount);
        }

        Ok(composition)
    }
}
