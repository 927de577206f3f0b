//! Working space matrix command

use crate::MatrixArgs;
use anyhow::Result;
use tincture_color::ColorConverter;
use glam::DMat3;

pub fn run(args: MatrixArgs, verbose: u8) -> Result<()> {
    let space = super::working_space(&args.space)?;
    let m = ColorConverter::new().rgb_matrices(&space);

    println!("{}", space.name);
    if verbose > 0 {
        println!(
            "white {}  companding {}",
            super::chromaticity(space.white),
            space.companding
        );
    }
    println!();
    println!("RGB -> XYZ");
    print_matrix(&m.to_xyz, args.precision);
    println!();
    println!("XYZ -> RGB");
    print_matrix(&m.from_xyz, args.precision);

    Ok(())
}

fn print_matrix(m: &DMat3, precision: usize) {
    for line in matrix_rows(m, precision) {
        println!("{}", line);
    }
}

fn matrix_rows(m: &DMat3, precision: usize) -> Vec<String> {
    (0..3)
        .map(|i| {
            let cells: Vec<String> = m
                .row(i)
                .to_array()
                .iter()
                .map(|v| format!("{:>width$.prec$}", v, width = precision + 4, prec = precision))
                .collect();
            format!("  [{}]", cells.join(", "))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tincture_primaries::{SRGB, rgb_to_xyz_matrix};

    #[test]
    fn test_rows_print_row_major() {
        let rows = matrix_rows(&rgb_to_xyz_matrix(&SRGB), 4);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], "  [  0.4125,   0.3576,   0.1804]");
        assert!(rows[2].ends_with("0.9503]"), "{}", rows[2]);
    }
}
