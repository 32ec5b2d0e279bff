//! Positions as vectors of distances: mixed concrete units, rotation, translation and output for a writer.

use matqty::{equations, Measure, Result, UnitId, Vector3D};
use std::f64::consts::FRAC_PI_2;

fn main() -> Result<()> {
    let mut site = Vector3D::new([
        Measure::new(UnitId::Angstrom, 1.0),
        Measure::new(UnitId::Nanometer, 0.0),
        Measure::new(UnitId::Picometer, 50.0),
    ])?;
    println!("site            = {site}");
    println!("|site|          = {:.4}", site.magnitude(UnitId::Angstrom)?);

    // Quarter turn about z.
    let euler = Vector3D::new([
        Measure::new(UnitId::Degree, 0.0),
        Measure::new(UnitId::Degree, 0.0),
        Measure::new(UnitId::Radian, FRAC_PI_2),
    ])?;
    site.rotate(&euler)?;
    println!("rotated         = {site}");

    let shift = Vector3D::new([Measure::new(UnitId::Angstrom, 0.5); 3])?;
    site.translate(&shift)?;
    println!("translated      = {site}");

    let origin = Vector3D::new([Measure::new(UnitId::Angstrom, 0.0); 3])?;
    println!("distance (m)    = {:e}", equations::separation_distance(&origin, &site)?.value());
    println!("POSCAR columns  = {:?}", site.to_ndarray(Some(UnitId::Angstrom))?.to_vec());
    Ok(())
}
