/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Periodic table lookups
//!
//! Only the data the conversion layer needs lives here: the mapping between
//! atomic numbers and element symbols, and the electronegativities used to
//! order formulas.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Element symbols indexed by `Z - 1`
pub const ELEMENT_SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", // 1-10
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca", // 11-20
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", // 21-30
    "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", // 31-40
    "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn", // 41-50
    "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", // 51-60
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", // 61-70
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", // 71-80
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", // 81-90
    "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm", // 91-100
    "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", // 101-110
    "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og", // 111-118
];

/// Highest atomic number in the table
pub const MAX_ATOMIC_NUMBER: u8 = 118;

static SYMBOL_LOOKUP: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    ELEMENT_SYMBOLS
        .iter()
        .enumerate()
        .map(|(idx, symbol)| (*symbol, idx as u8 + 1))
        .collect()
});

/// Provides the element symbol for an atomic number
pub fn element_symbol(atomic_number: u8) -> Option<&'static str> {
    if atomic_number == 0 {
        return None;
    }
    ELEMENT_SYMBOLS.get(atomic_number as usize - 1).copied()
}

/// Looks up the atomic number for an element symbol
///
/// The lookup is case-insensitive and ignores surrounding whitespace, so
/// `"fe"`, `" FE "` and `"Fe"` all resolve to 26.
pub fn atomic_number_from_symbol(symbol: &str) -> Option<u8> {
    let symbol = symbol.trim();
    let mut chars = symbol.chars();
    let first = chars.next()?;

    let normalized: String = first
        .to_uppercase()
        .chain(chars.flat_map(char::to_lowercase))
        .collect();

    SYMBOL_LOOKUP.get(normalized.as_str()).copied()
}

/// Pauling electronegativity
///
/// `None` for the lighter noble gases and the heaviest elements, which have
/// no tabulated value.
pub fn electronegativity(atomic_number: u8) -> Option<f64> {
    match atomic_number {
        1 => Some(2.2), // H
        3 => Some(0.98), // Li
        4 => Some(1.57), // Be
        5 => Some(2.04), // B
        6 => Some(2.55), // C
        7 => Some(3.04), // N
        8 => Some(3.44), // O
        9 => Some(3.98), // F
        11 => Some(0.93), // Na
        12 => Some(1.31), // Mg
        13 => Some(1.61), // Al
        14 => Some(1.9), // Si
        15 => Some(2.19), // P
        16 => Some(2.58), // S
        17 => Some(3.16), // Cl
        19 => Some(0.82), // K
        20 => Some(1.0), // Ca
        21 => Some(1.36), // Sc
        22 => Some(1.54), // Ti
        23 => Some(1.63), // V
        24 => Some(1.66), // Cr
        25 => Some(1.55), // Mn
        26 => Some(1.83), // Fe
        27 => Some(1.88), // Co
        28 => Some(1.91), // Ni
        29 => Some(1.9), // Cu
        30 => Some(1.65), // Zn
        31 => Some(1.81), // Ga
        32 => Some(2.01), // Ge
        33 => Some(2.18), // As
        34 => Some(2.55), // Se
        35 => Some(2.96), // Br
        36 => Some(3.0), // Kr
        37 => Some(0.82), // Rb
        38 => Some(0.95), // Sr
        39 => Some(1.22), // Y
        40 => Some(1.33), // Zr
        41 => Some(1.6), // Nb
        42 => Some(2.16), // Mo
        43 => Some(1.9), // Tc
        44 => Some(2.2), // Ru
        45 => Some(2.28), // Rh
        46 => Some(2.2), // Pd
        47 => Some(1.93), // Ag
        48 => Some(1.69), // Cd
        49 => Some(1.78), // In
        50 => Some(1.96), // Sn
        51 => Some(2.05), // Sb
        52 => Some(2.1), // Te
        53 => Some(2.66), // I
        54 => Some(2.6), // Xe
        55 => Some(0.79), // Cs
        56 => Some(0.89), // Ba
        57 => Some(1.1), // La
        58 => Some(1.12), // Ce
        59 => Some(1.13), // Pr
        60 => Some(1.14), // Nd
        61 => Some(1.13), // Pm
        62 => Some(1.17), // Sm
        63 => Some(1.2), // Eu
        64 => Some(1.2), // Gd
        65 => Some(1.1), // Tb
        66 => Some(1.22), // Dy
        67 => Some(1.23), // Ho
        68 => Some(1.24), // Er
        69 => Some(1.25), // Tm
        70 => Some(1.1), // Yb
        71 => Some(1.27), // Lu
        72 => Some(1.3), // Hf
        73 => Some(1.5), // Ta
        74 => Some(2.36), // W
        75 => Some(1.9), // Re
        76 => Some(2.2), // Os
        77 => Some(2.2), // Ir
        78 => Some(2.28), // Pt
        79 => Some(2.54), // Au
        80 => Some(2.0), // Hg
        81 => Some(1.62), // Tl
        82 => Some(2.33), // Pb
        83 => Some(2.02), // Bi
        84 => Some(2.0), // Po
        85 => Some(2.2), // At
        86 => Some(2.2), // Rn
        87 => Some(0.7), // Fr
        88 => Some(0.9), // Ra
        89 => Some(1.1), // Ac
        90 => Some(1.3), // Th
        91 => Some(1.5), // Pa
        92 => Some(1.38), // U
        93 => Some(1.36), // Np
        94 => Some(1.28), // Pu
        95 => Some(1.3), // Am
        96 => Some(1.3), // Cm
        97 => Some(1.3), // Bk
        98 => Some(1.3), // Cf
        99 => Some(1.3), // Es
        100 => Some(1.3), // Fm
        101 => Some(1.3), // Md
        102 => Some(1.3), // No
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_lookup() {
        assert_eq!(element_symbol(1), Some("H"));
        assert_eq!(element_symbol(26), Some("Fe"));
        assert_eq!(element_symbol(118), Some("Og"));
        assert_eq!(element_symbol(0), None);
        assert_eq!(element_symbol(119), None);
    }

    #[test]
    fn test_atomic_number_lookup() {
        assert_eq!(atomic_number_from_symbol("Fe"), Some(26));
        assert_eq!(atomic_number_from_symbol("fe"), Some(26));
        assert_eq!(atomic_number_from_symbol(" O "), Some(8));
        assert_eq!(atomic_number_from_symbol("Xx"), None);
        assert_eq!(atomic_number_from_symbol(""), None);
    }

    #[test]
    fn test_electronegativity() {
        assert_eq!(electronegativity(1), Some(2.20));
        assert_eq!(electronegativity(8), Some(3.44));
        assert_eq!(electronegativity(26), Some(1.83));
        assert_eq!(electronegativity(2), None);
        assert_eq!(electronegativity(118), None);
    }

    #[test]
    fn test_table_is_consistent() {
        for z in 1..=MAX_ATOMIC_NUMBER {
            let symbol = element_symbol(z).unwrap();
            assert_eq!(atomic_number_from_symbol(symbol), Some(z));
        }
    }
}
