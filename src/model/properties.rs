/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Named per-site property arrays

use super::errors::{Result, StructureError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Magnetic moment obtained from a calculation, one float per site
pub const MAGMOM: &str = "magmom";
/// Starting guess for the magnetic moment, one float per site
pub const INITIAL_MAGMOM: &str = "initial_magmom";
/// Per-axis mobility flags, `true` = free to move along that axis
pub const SELECTIVE_DYNAMICS: &str = "selective_dynamics";

/// Values of one site property, one entry per site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum SitePropertyValues {
    Floats(Vec<f64>),
    Flags(Vec<[bool; 3]>),
    Vectors(Vec<[f64; 3]>),
    Integers(Vec<i64>),
    Labels(Vec<String>),
}

impl SitePropertyValues {
    pub fn len(&self) -> usize {
        match self {
            Self::Floats(v) => v.len(),
            Self::Flags(v) => v.len(),
            Self::Vectors(v) => v.len(),
            Self::Integers(v) => v.len(),
            Self::Labels(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short name of the value kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Floats(_) => "floats",
            Self::Flags(_) => "flags",
            Self::Vectors(_) => "vectors",
            Self::Integers(_) => "integers",
            Self::Labels(_) => "labels",
        }
    }

    pub fn as_floats(&self) -> Option<&[f64]> {
        match self {
            Self::Floats(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_flags(&self) -> Option<&[[bool; 3]]> {
        match self {
            Self::Flags(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Vec<f64>> for SitePropertyValues {
    fn from(v: Vec<f64>) -> Self {
        Self::Floats(v)
    }
}

impl From<Vec<[bool; 3]>> for SitePropertyValues {
    fn from(v: Vec<[bool; 3]>) -> Self {
        Self::Flags(v)
    }
}

impl From<Vec<[f64; 3]>> for SitePropertyValues {
    fn from(v: Vec<[f64; 3]>) -> Self {
        Self::Vectors(v)
    }
}

impl From<Vec<i64>> for SitePropertyValues {
    fn from(v: Vec<i64>) -> Self {
        Self::Integers(v)
    }
}

impl From<Vec<String>> for SitePropertyValues {
    fn from(v: Vec<String>) -> Self {
        Self::Labels(v)
    }
}

/// Property name to per-site values
///
/// The store does not know how many sites its owner has, so length checks
/// go through [`SiteProperties::insert_checked`], which the owning
/// collection calls with its own site count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteProperties {
    values: BTreeMap<String, SitePropertyValues>,
}

impl SiteProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a property, rejecting a length other than `site_count`
    pub fn insert_checked(
        &mut self,
        name: &str,
        values: SitePropertyValues,
        site_count: usize,
    ) -> Result<()> {
        if values.len() != site_count {
            return Err(StructureError::PropertyLength {
                name: name.to_string(),
                expected: site_count,
                found: values.len(),
            });
        }
        self.values.insert(name.to_string(), values);
        Ok(())
    }

    /// Check every property against a site count
    pub fn validate(&self, site_count: usize) -> Result<()> {
        match self.values.iter().find(|(_, v)| v.len() != site_count) {
            Some((name, values)) => Err(StructureError::PropertyLength {
                name: name.clone(),
                expected: site_count,
                found: values.len(),
            }),
            None => Ok(()),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<SitePropertyValues> {
        self.values.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&SitePropertyValues> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
