//! Single color conversion command

use crate::ConvertArgs;
use anyhow::{Context, Result};
use tincture_color::{AnyColor, ColorConverter, ConverterOptions, SpaceKind};
use tracing::debug;

pub fn run(args: ConvertArgs, verbose: u8) -> Result<()> {
    let from: SpaceKind = args.from.parse().context("invalid --from")?;
    let to: SpaceKind = args.to.parse().context("invalid --to")?;
    let options = build_options(&args)?;
    let source_space = super::working_space(&args.working_space)?;

    let color = AnyColor::from_components(from, &args.components, source_space)?;
    debug!(%from, %to, space = %options.working_space, "converting");

    let conv = ColorConverter::with_options(options);
    let result = conv.convert_any(color, to);

    if verbose > 0 {
        eprintln!("{} -> {}", color, to);
    }
    println!("{}", format_result(&result, args.raw));

    Ok(())
}

/// Options file first, then individual flags, then `--no-adapt`.
fn build_options(args: &ConvertArgs) -> Result<ConverterOptions> {
    let mut options = match &args.config {
        Some(path) => super::load_options(path)?,
        None => ConverterOptions::default(),
    };

    if let Some(name) = &args.target_space {
        options = options.with_working_space(super::working_space(name)?);
    }
    if let Some(name) = &args.white {
        options = options.with_all_white_points(super::illuminant(name)?);
    }
    if let Some(method) = args.adaptation {
        options = options.with_adaptation(method);
    }
    if args.no_adapt {
        options = options.without_adaptation();
    }

    Ok(options)
}

fn format_result(result: &AnyColor, raw: bool) -> String {
    if raw {
        let parts: Vec<String> = result.components().iter().map(|v| v.to_string()).collect();
        parts.join(" ")
    } else {
        result.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cli, Commands};
    use clap::Parser;
    use std::path::PathBuf;
    use tincture_color::{AdaptationMethod, Cmyk, Rgb};
    use tincture_math::{D50, D65, same_white};
    use tincture_primaries::{ADOBE_RGB_1998, PROPHOTO_RGB};

    fn parse(extra: &[&str]) -> ConvertArgs {
        let argv = ["tinct", "convert", "--from", "rgb", "--to", "lab"]
            .into_iter()
            .chain(extra.iter().copied())
            .chain(["0.5", "0.5", "0.5"]);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Convert(args) => args,
            _ => unreachable!(),
        }
    }

    fn write_config(name: &str, yaml: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("tinct-{}-{}.yaml", std::process::id(), name));
        std::fs::write(&path, yaml).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_flags() {
        assert_eq!(build_options(&parse(&[])).unwrap(), ConverterOptions::default());
    }

    #[test]
    fn test_flags_override_config() {
        let path = write_config(
            "override",
            "working_space: Adobe RGB (1998)\nadaptation: von_kries\nlms_transform: cat02\n",
        );
        let config = path.to_str().unwrap();

        let from_file = build_options(&parse(&["--config", config])).unwrap();
        assert_eq!(from_file.working_space, ADOBE_RGB_1998);
        assert_eq!(from_file.adaptation, Some(AdaptationMethod::VonKries));

        let options = build_options(&parse(&[
            "--config",
            config,
            "--target-space",
            "prophoto",
            "--white",
            "d50",
            "--adaptation",
            "cat02",
        ]))
        .unwrap();
        assert_eq!(options.working_space, PROPHOTO_RGB);
        assert!(same_white(options.white_point, D50));
        assert!(same_white(options.hunter_lab_white_point, D50));
        assert_eq!(options.adaptation, Some(AdaptationMethod::Cat02));
        // untouched by any flag
        assert_eq!(options.lms_transform, AdaptationMethod::Cat02);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_no_adapt_wins_over_config() {
        let path = write_config("no-adapt", "adaptation: bradford\n");
        let options =
            build_options(&parse(&["--config", path.to_str().unwrap(), "--no-adapt"])).unwrap();
        assert_eq!(options.adaptation, None);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_adaptation_names() {
        assert_eq!(parse(&["-a", "von-kries"]).adaptation, Some(AdaptationMethod::VonKries));
        assert_eq!(parse(&["-a", "XYZ_SCALING"]).adaptation, Some(AdaptationMethod::XyzScaling));

        let argv = ["tinct", "convert", "-f", "rgb", "-t", "lab", "-a", "sharp", "1", "0", "0"];
        let err = Cli::try_parse_from(argv).err().unwrap();
        assert!(err.to_string().contains("unknown adaptation method: sharp"), "{}", err);
    }

    #[test]
    fn test_no_adapt_conflicts_with_adaptation() {
        let argv = [
            "tinct", "convert", "-f", "rgb", "-t", "lab", "-a", "cat02", "--no-adapt", "1", "0", "0",
        ];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_unknown_names_fail() {
        let err = build_options(&parse(&["--target-space", "nowhere"])).unwrap_err();
        assert!(format!("{:#}", err).contains("unknown working space: nowhere"), "{:#}", err);

        let err = build_options(&parse(&["--white", "d93"])).unwrap_err();
        assert!(format!("{:#}", err).contains("unknown illuminant: d93"), "{:#}", err);
    }

    #[test]
    fn test_raw_output() {
        let rgb = AnyColor::Rgb(Rgb::new(1.0, 0.5, 0.0));
        assert_eq!(format_result(&rgb, true), "1 0.5 0");
        assert_eq!(format_result(&rgb, false), rgb.to_string());

        let cmyk = AnyColor::Cmyk(Cmyk::new(0.0, 0.25, 1.0, 0.5));
        assert_eq!(format_result(&cmyk, true), "0 0.25 1 0.5");
    }

    #[test]
    fn test_default_white_is_d65() {
        let options = build_options(&parse(&["--adaptation", "bradford"])).unwrap();
        assert!(same_white(options.lab_white_point, D65));
    }
}
