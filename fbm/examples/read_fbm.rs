//! Extract a few selections from an existing file-backed matrix
//!
//! Usage: cargo run --example read_fbm -- <descriptor.json>

use fbm::{MapConfig, MmapFbm};
use std::time::Instant;

fn main() -> fbm::Result<()> {
    let Some(descriptor) = std::env::args().nth(1) else {
        println!("Usage: read_fbm <descriptor.json>");
        return Ok(());
    };

    println!("Mapping matrix described by '{descriptor}'...");
    let start = Instant::now();
    let matrix = MmapFbm::from_descriptor_file(&descriptor, &MapConfig::default())?;
    println!(
        "Mapped in {:.3}ms",
        start.elapsed().as_secs_f64() * 1000.0
    );

    let (nrow, ncol) = matrix.dimensions();
    println!("\nMatrix Information:");
    println!("   Backing file: {}", matrix.path().display());
    println!("   Dimensions: {nrow} x {ncol}");
    println!("   Storage type: {}", matrix.storage_type());

    if nrow == 0 || ncol == 0 {
        return Ok(());
    }

    // First and last element, then the first one again
    let nelem = nrow * ncol;
    let start = Instant::now();
    let picked = matrix.extract_vector(&[1, nelem, 1])?;
    println!(
        "\nElements [1, {nelem}, 1]: {picked:?} ({:.3}ms)",
        start.elapsed().as_secs_f64() * 1000.0
    );

    // Top-left corner, rows reversed
    let rows: Vec<usize> = (1..=nrow.min(3)).rev().collect();
    let cols: Vec<usize> = (1..=ncol.min(3)).collect();
    let start = Instant::now();
    let corner = matrix.extract_matrix(&rows, &cols)?;
    println!(
        "Rows {rows:?} x cols {cols:?}: {:?} ({:.3}ms)",
        corner.values(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}
