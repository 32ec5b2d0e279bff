//! Minimal end-to-end example: convert a lattice parameter, assemble an area and check the closed operator set.

use matqty::{
    Angstroms, AngstromSquared, Measure, MetersSquared, Nanometer, UnitError, UnitId,
};

fn main() {
    let a = Angstroms::new(2.8665);
    let nm = a.to::<Nanometer>();
    println!("a = {a} = {nm:.5}");
    assert!((nm.value() - 0.28665).abs() < 1e-12);

    let face = MetersSquared::from_distances(a, a).to::<AngstromSquared>();
    println!("bcc face area = {face:.4}");

    // The concrete unit of a parsed value is only known at runtime.
    let parsed = Measure::new(UnitId::Nanometer, 0.28665);
    match Measure::new(UnitId::Angstrom, 2.8665).try_add(parsed) {
        Err(UnitError::UnsafeOperation { .. }) => println!("normalise before adding"),
        other => panic!("unexpected: {other:?}"),
    }
}
