/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use approx::assert_relative_eq;
use atoms_adaptor::model::{
    canonical_symbol, Composition, Element, Lattice, Molecule, Site, SiteCollection,
    SiteSpecies, Species, Structure, StructureError, MAGMOM, SELECTIVE_DYNAMICS,
};
use atoms_adaptor::{to_sim_atoms, SimAtoms};

#[test]
fn test_structure_fractional_and_cartesian_agree() {
    let lattice = Lattice::new([[4.0, 0.0, 0.0], [2.0, 3.4641, 0.0], [0.0, 0.0, 6.5]]);
    let species = vec![SiteSpecies::from_symbol("Zn").unwrap(); 2];
    let frac = vec![[1.0 / 3.0, 2.0 / 3.0, 0.0], [2.0 / 3.0, 1.0 / 3.0, 0.5]];

    let from_frac = Structure::new(lattice, species.clone(), frac.clone(), false).unwrap();
    let cart: Vec<[f64; 3]> = from_frac
        .sites()
        .iter()
        .map(|site| site.coords.to_array())
        .collect();
    let from_cart = Structure::new(lattice, species, cart, true).unwrap();

    for i in 0..2 {
        let recovered = from_cart.frac_coords(i).unwrap().unwrap();
        for axis in 0..3 {
            assert_relative_eq!(recovered[axis], frac[i][axis], epsilon = 1e-10);
        }
    }
}

#[test]
fn test_structure_serde_round_trip() {
    let mut structure = Structure::new(
        Lattice::cubic(3.61),
        vec![SiteSpecies::from_symbol("Cu").unwrap(); 4],
        vec![
            [0.0, 0.0, 0.0],
            [0.5, 0.5, 0.0],
            [0.5, 0.0, 0.5],
            [0.0, 0.5, 0.5],
        ],
        false,
    )
    .unwrap();
    structure
        .add_site_property(SELECTIVE_DYNAMICS, vec![[false; 3], [true; 3], [true; 3], [true; 3]])
        .unwrap();

    let json = serde_json::to_string(&structure).unwrap();
    let back: Structure = serde_json::from_str(&json).unwrap();
    assert_eq!(back, structure);
}

#[test]
fn test_structure_deserialize_rejects_bad_occupancy() {
    let json = r#"{
        "lattice": [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        "sites": [{"species": [["Fe", 0.4]], "coords": [0.0, 0.0, 0.0]}]
    }"#;
    assert!(serde_json::from_str::<Structure>(json).is_err());
}

#[test]
fn test_molecule_composition() {
    let molecule = Molecule::from_sites(vec![
        Site::new(Element::from_symbol("O").unwrap(), [0.0, 0.0, 0.0]),
        Site::new(Element::from_symbol("H").unwrap(), [0.757, 0.586, 0.0]),
        Site::new(Element::from_symbol("H").unwrap(), [-0.757, 0.586, 0.0]),
    ]);

    let composition = molecule.composition();
    assert_relative_eq!(composition.num_atoms(), 3.0);
    assert_eq!(molecule.formula(), "H2 O1");
    assert_eq!(composition.hill_formula(), "H2O");
    assert_eq!(composition, "H2O".parse::<Composition>().unwrap());
}

#[test]
fn test_property_length_errors() {
    let mut molecule = Molecule::new(
        vec![SiteSpecies::from_symbol("N").unwrap(); 2],
        vec![[0.0, 0.0, 0.0], [0.0, 0.0, 1.1]],
    )
    .unwrap();

    assert_eq!(
        molecule.add_site_property(MAGMOM, vec![0.0; 3]).unwrap_err(),
        StructureError::PropertyLength {
            name: MAGMOM.to_string(),
            expected: 2,
            found: 3
        }
    );
}

#[test]
fn test_canonical_symbol_matches_composition_majority() {
    let fe: Species = "Fe3+".parse().unwrap();
    let mn: Species = "Mn2+".parse().unwrap();
    let site = SiteSpecies::new(vec![(mn, 0.4), (fe, 0.6)]).unwrap();

    assert_eq!(canonical_symbol(&site).symbol(), "Fe");
    assert_eq!(site.species_string(), "Mn2+:0.400, Fe3+:0.600");
}

#[test]
fn test_sim_atoms_serde_defaults() {
    let json = r#"{"symbols": ["H", "H"], "positions": [[0.0, 0.0, 0.0], [0.0, 0.0, 0.74]]}"#;
    let atoms: SimAtoms = serde_json::from_str(json).unwrap();

    assert_eq!(atoms.len(), 2);
    assert!(atoms.cell.is_none());
    assert_eq!(atoms.pbc, [false; 3]);
    assert!(atoms.constraints.is_empty());
    assert!(atoms.validate().is_ok());

    let bad = r#"{"symbols": ["Xx"], "positions": [[0.0, 0.0, 0.0]]}"#;
    assert!(serde_json::from_str::<SimAtoms>(bad).is_err());
}

#[test]
fn test_structure_through_trait_object() {
    let molecule = Molecule::new(
        vec![SiteSpecies::from_symbol("He").unwrap()],
        vec![[0.0; 3]],
    )
    .unwrap();
    let structure = Structure::from_sites(
        Lattice::cubic(5.0),
        vec![Site::new(Element::from_symbol("Ne").unwrap(), [0.0; 3])],
    );

    let collections: Vec<&dyn SiteCollection> = vec![&molecule, &structure];
    let atoms: Vec<SimAtoms> = collections
        .into_iter()
        .map(|c| to_sim_atoms(c).unwrap())
        .collect();

    assert_eq!(atoms[0].chemical_symbols(), vec!["He"]);
    assert!(atoms[0].cell.is_none());
    assert_eq!(atoms[1].chemical_symbols(), vec!["Ne"]);
    assert!(atoms[1].has_cell());
}
