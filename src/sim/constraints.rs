/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Constraints attached to simulation atoms

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Fix the positions of a set of atoms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FixAtomsParts", into = "FixAtomsParts")]
pub struct FixAtoms {
    // First-seen order, no duplicates
    indices: Vec<usize>,
    members: HashSet<usize>,
}

#[derive(Serialize, Deserialize)]
struct FixAtomsParts {
    indices: Vec<usize>,
}

impl From<FixAtomsParts> for FixAtoms {
    fn from(parts: FixAtomsParts) -> Self {
        Self::from_indices(parts.indices)
    }
}

impl From<FixAtoms> for FixAtomsParts {
    fn from(fix: FixAtoms) -> Self {
        Self {
            indices: fix.indices,
        }
    }
}

impl FixAtoms {
    /// Fix the given indices; duplicates are dropped, first-seen order kept
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        let indices = indices.into_iter();
        let mut fix = Self {
            indices: Vec::with_capacity(indices.size_hint().0),
            members: HashSet::with_capacity(indices.size_hint().0),
        };
        for index in indices {
            if fix.members.insert(index) {
                fix.indices.push(index);
            }
        }
        fix
    }

    /// Fix indices that are already strictly increasing
    ///
    /// Falls back to [`FixAtoms::from_indices`] when they are not.
    pub fn from_sorted(indices: Vec<usize>) -> Self {
        if !indices.windows(2).all(|pair| pair[0] < pair[1]) {
            return Self::from_indices(indices);
        }
        let members = indices.iter().copied().collect();
        Self { indices, members }
    }

    /// Fix every atom whose mask entry is `true`
    pub fn from_mask(mask: &[bool]) -> Self {
        Self::from_sorted(
            mask.iter()
                .enumerate()
                .filter_map(|(i, &fixed)| fixed.then_some(i))
                .collect(),
        )
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn contains(&self, index: usize) -> bool {
        self.members.contains(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Closed set of constraint kinds
///
/// Only [`Constraint::FixAtoms`] carries position-freezing information;
/// conversions treat every other kind as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Constraint {
    FixAtoms(FixAtoms),
    /// Keep the distance between atoms `a` and `b` constant
    FixBondLength { a: usize, b: usize },
}

impl Constraint {
    /// Indices this constraint freezes in place, if it is that kind
    pub fn fixed_indices(&self) -> Option<&[usize]> {
        match self {
            Self::FixAtoms(fix) => Some(fix.indices()),
            Self::FixBondLength { .. } => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::FixAtoms(_) => "FixAtoms",
            Self::FixBondLength { .. } => "FixBondLength",
        }
    }
}

impl From<FixAtoms> for Constraint {
    fn from(fix: FixAtoms) -> Self {
        Self::FixAtoms(fix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_indices_dedupes() {
        let fix = FixAtoms::from_indices([3, 1, 3, 0]);
        assert_eq!(fix.indices(), &[3, 1, 0]);
        assert!(fix.contains(1));
        assert!(!fix.contains(2));
    }

    #[test]
    fn test_from_mask() {
        let fix = FixAtoms::from_mask(&[true, false, true, false]);
        assert_eq!(fix.indices(), &[0, 2]);

        assert!(FixAtoms::from_mask(&[false, false]).is_empty());
    }

    #[test]
    fn test_from_sorted() {
        let fix = FixAtoms::from_sorted(vec![0, 2, 5]);
        assert_eq!(fix.indices(), &[0, 2, 5]);
        assert!(fix.contains(5));
        assert!(!fix.contains(1));

        // Unsorted or repeated input goes through the deduplicating path
        let fix = FixAtoms::from_sorted(vec![4, 1, 4]);
        assert_eq!(fix.indices(), &[4, 1]);
        assert_eq!(fix, FixAtoms::from_indices([4, 1]));
    }

    #[test]
    fn test_large_index_set() {
        let n = 200_000;
        let fix = FixAtoms::from_indices((0..n).rev().chain(0..n));
        assert_eq!(fix.indices().len(), n);
        assert_eq!(fix.indices()[0], n - 1);
        assert!(fix.contains(0));
        assert!(!fix.contains(n));
    }

    #[test]
    fn test_deserialized_membership() {
        let fix: FixAtoms = serde_json::from_str(r#"{"indices":[3,3,1]}"#).unwrap();
        assert_eq!(fix.indices(), &[3, 1]);
        assert!(fix.contains(1));
    }

    #[test]
    fn test_fixed_indices_by_kind() {
        let fix: Constraint = FixAtoms::from_indices([0, 1]).into();
        assert_eq!(fix.fixed_indices(), Some(&[0, 1][..]));

        let bond = Constraint::FixBondLength { a: 0, b: 1 };
        assert_eq!(bond.fixed_indices(), None);
        assert_eq!(bond.name(), "FixBondLength");
    }

    #[test]
    fn test_serde_tagging() {
        let fix: Constraint = FixAtoms::from_indices([2]).into();
        let json = serde_json::to_string(&fix).unwrap();
        assert_eq!(json, r#"{"type":"fix_atoms","indices":[2]}"#);

        let back: Constraint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fix);
    }
}
