//! tinct - color conversion from the command line
//!
//! Converts single colors between the tincture color spaces and inspects the
//! working space registry.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tincture_color::AdaptationMethod;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tinct")]
#[command(author, version, about = "Convert colors between RGB, CIE and device color spaces")]
#[command(long_about = "
Convert colors between RGB working spaces, CIE XYZ/xyY/Lab/Luv/LCh,
Hunter Lab, LMS, HSL, HSV, CMYK and YCbCr.

Examples:
  tinct convert --from rgb --to lab 1 0 0
  tinct convert --from lab --to rgb --target-space prophoto 53.2 80.1 67.2
  tinct convert --from rgb --to xyz --white d50 --raw 0.5 0.5 0.5
  tinct convert --from hsl --to cmyk --config options.yaml 200 0.5 0.4
  tinct spaces
  tinct matrix adobe-rgb-1998
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a color between spaces
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// List working spaces and color spaces
    #[command(visible_alias = "ls")]
    Spaces(SpacesArgs),

    /// Print the RGB <-> XYZ matrices of a working space
    #[command(visible_alias = "m")]
    Matrix(MatrixArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Source color space (rgb, linear-rgb, xyz, xyy, lab, lch, luv, lchuv,
    /// hunterlab, lms, hsl, hsv, cmyk, ycbcr)
    #[arg(short, long)]
    from: String,

    /// Destination color space
    #[arg(short, long)]
    to: String,

    /// Working space of RGB / linear RGB input
    #[arg(short = 'w', long, default_value = "sRGB")]
    working_space: String,

    /// Working space of RGB output and of HSL/HSV/CMYK/YCbCr
    #[arg(short = 's', long)]
    target_space: Option<String>,

    /// Reference white for every CIE space (A, B, C, D50, D55, D65, D75, E, F2, F7, F11)
    #[arg(long)]
    white: Option<String>,

    /// Chromatic adaptation method (bradford, von-kries, cat02, xyz-scaling)
    #[arg(short, long)]
    adaptation: Option<AdaptationMethod>,

    /// Disable chromatic adaptation
    #[arg(long, conflicts_with = "adaptation")]
    no_adapt: bool,

    /// Converter options file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print bare components instead of the formatted value
    #[arg(long)]
    raw: bool,

    /// Source components
    #[arg(required = true, allow_negative_numbers = true)]
    components: Vec<f32>,
}

#[derive(Args)]
struct SpacesArgs {
    /// List color space kinds instead of working spaces
    #[arg(short, long)]
    kinds: bool,
}

#[derive(Args)]
struct MatrixArgs {
    /// Working space name
    space: String,

    /// Decimal places
    #[arg(short, long, default_value = "7")]
    precision: usize,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Spaces(args) => commands::spaces::run(args, cli.verbose),
        Commands::Matrix(args) => commands::matrix::run(args, cli.verbose),
    }
}
