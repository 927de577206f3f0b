//! CLI command implementations

pub mod convert;
pub mod matrix;
pub mod spaces;

use anyhow::{Context, Result};
use std::path::Path;
use tincture_color::{ColorError, ConverterOptions};
use tincture_math::{Vec3, illuminant_by_name};
use tincture_primaries::WorkingSpace;

/// Resolves a registry working space by name.
pub fn working_space(name: &str) -> Result<WorkingSpace> {
    WorkingSpace::by_name(name)
        .ok_or_else(|| ColorError::UnknownWorkingSpace(name.to_string()))
        .context("see `tinct spaces` for the registry")
}

/// Resolves a standard illuminant by name.
pub fn illuminant(name: &str) -> Result<Vec3> {
    illuminant_by_name(name)
        .ok_or_else(|| ColorError::UnknownIlluminant(name.to_string()))
        .context("expected one of A, B, C, D50, D55, D65, D75, E, F2, F7, F11")
}

/// Loads converter options from a YAML file. Missing fields keep defaults.
pub fn load_options(path: &Path) -> Result<ConverterOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read: {}", path.display()))?;
    serde_yaml::from_str(&text).with_context(|| format!("Failed to parse: {}", path.display()))
}

/// Formats an XYZ white as `(x, y)` chromaticity.
pub fn chromaticity(white: Vec3) -> String {
    let sum = white.sum();
    format!("({:.4}, {:.4})", white.x / sum, white.y / sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tincture_math::{D50, D65, same_white};
    use tincture_primaries::{PROPHOTO_RGB, SRGB};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("tinct-mod-{}-{}.yaml", std::process::id(), name))
    }

    #[test]
    fn test_working_space_lookup() {
        assert_eq!(working_space("prophoto").unwrap(), PROPHOTO_RGB);
        assert_eq!(working_space("sRGB").unwrap(), SRGB);
    }

    #[test]
    fn test_unknown_working_space_keeps_cause() {
        let err = working_space("Imaginary RGB").unwrap_err();
        assert_eq!(err.to_string(), "see `tinct spaces` for the registry");
        assert_eq!(
            err.downcast_ref::<ColorError>(),
            Some(&ColorError::UnknownWorkingSpace("Imaginary RGB".to_string()))
        );
    }

    #[test]
    fn test_unknown_illuminant_keeps_cause() {
        assert!(same_white(illuminant("d50").unwrap(), D50));

        let err = illuminant("D93").unwrap_err();
        assert!(err.to_string().starts_with("expected one of A, B, C"), "{}", err);
        assert_eq!(
            err.downcast_ref::<ColorError>(),
            Some(&ColorError::UnknownIlluminant("D93".to_string()))
        );
    }

    #[test]
    fn test_partial_options_file() {
        let path = temp_path("partial");
        std::fs::write(&path, "lab_white_point: { x: 0.96422, y: 1.0, z: 0.82521 }\n").unwrap();

        let options = load_options(&path).unwrap();
        assert!(same_white(options.lab_white_point, D50));
        assert!(same_white(options.white_point, D65));
        assert_eq!(options.working_space, SRGB);
        assert_eq!(options.adaptation, ConverterOptions::default().adaptation);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_options_file_errors_name_the_path() {
        let missing = temp_path("missing");
        let err = load_options(&missing).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read:"), "{}", err);

        let path = temp_path("malformed");
        std::fs::write(&path, "working_space: Imaginary RGB\n").unwrap();
        let err = load_options(&path).unwrap_err();
        assert!(err.to_string().contains(&*path.to_string_lossy()), "{}", err);
        assert!(format!("{:#}", err).contains("unknown working space"), "{:#}", err);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_chromaticity() {
        assert_eq!(chromaticity(D65), "(0.3127, 0.3290)");
    }
}
