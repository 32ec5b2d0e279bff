//! Serializing quantities, measures and vectors.
//!
//! To run this example with serde support:
//! ```bash
//! cargo run --example serialization --features serde
//! ```

#[cfg(feature = "serde")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use matqty::{Angstroms, ElectronVolts, Kilobars, Measure, UnitId, Vector3D};
    use serde::{Deserialize, Serialize};

    // Quantities serialize as bare f64 values; the unit lives in the type.
    let energy = ElectronVolts::new(-8.3);
    println!("{energy} -> {}", serde_json::to_string(&energy)?);

    // Measures and vectors carry their unit ids.
    let m = Measure::new(UnitId::Kelvin, 300.0);
    println!("{m} -> {}", serde_json::to_string(&m)?);

    #[derive(Serialize, Deserialize, Debug)]
    struct Relaxation {
        #[serde(with = "matqty::serde_with_unit")]
        stress: Kilobars,
        #[serde(with = "matqty::serde_with_unit")]
        max_displacement: Angstroms,
        toten: ElectronVolts,
        first_site: Vector3D,
    }

    let step = Relaxation {
        stress: Kilobars::new(-1.25),
        max_displacement: Angstroms::new(0.012),
        toten: energy,
        first_site: Vector3D::from_quantities([Angstroms::new(0.0), Angstroms::new(1.43), Angstroms::new(1.43)])?,
    };
    let json = serde_json::to_string_pretty(&step)?;
    println!("{json}");

    let restored: Relaxation = serde_json::from_str(&json)?;
    println!("restored first site: {}", restored.first_site);
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serialization --features serde");
}
