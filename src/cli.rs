use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use serde::de::DeserializeOwned;
use stiffx::{BeamParameters, FrameParameters};

/// Command-line options for the stiffness calculator.
#[derive(Debug, Parser)]
#[command(name = "stiffx")]
#[command(about = "Local stiffness matrices for planar beam and frame elements")]
#[command(version)]
pub struct Cli {
    /// How the matrix is printed.
    #[arg(long, value_enum, default_value_t = OutputFormat::Latex, global = true)]
    pub format: OutputFormat,
    /// Element to evaluate.
    #[command(subcommand)]
    pub element: ElementCommand,
}

/// Output notation selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// LaTeX display math.
    Latex,
    /// Aligned plain-text columns.
    Plain,
    /// Machine-readable JSON.
    Json,
}

/// Element selection, mirroring the two calculators of the library.
#[derive(Debug, Subcommand)]
pub enum ElementCommand {
    /// 4x4 beam matrix with constant flexural rigidity
    Beam(BeamArgs),
    /// 6x6 planar frame matrix in global axes
    Frame(FrameArgs),
}

/// Inputs for the beam calculator.
#[derive(Debug, Args)]
pub struct BeamArgs {
    /// Element length
    #[arg(short = 'L', long, default_value_t = BeamParameters::default().length, allow_negative_numbers = true)]
    pub length: f64,
    /// Numeric flexural rigidity EI; omit to keep EI symbolic
    #[arg(long = "ei", allow_negative_numbers = true)]
    pub flexural_rigidity: Option<f64>,
    /// Read the parameters from a JSON file instead
    #[arg(long, conflicts_with_all = ["length", "flexural_rigidity"])]
    pub input: Option<PathBuf>,
}

/// Inputs for the frame calculator.
#[derive(Debug, Args)]
pub struct FrameArgs {
    /// Elastic modulus E
    #[arg(short = 'E', long, default_value_t = FrameParameters::default().elastic_modulus, allow_negative_numbers = true)]
    pub elastic_modulus: f64,
    /// Second moment of area I
    #[arg(short = 'I', long, default_value_t = FrameParameters::default().moment_of_inertia, allow_negative_numbers = true)]
    pub moment_of_inertia: f64,
    /// Cross-sectional area A
    #[arg(short = 'A', long, default_value_t = FrameParameters::default().area, allow_negative_numbers = true)]
    pub area: f64,
    /// Member length
    #[arg(short = 'L', long, default_value_t = FrameParameters::default().length, allow_negative_numbers = true)]
    pub length: f64,
    /// Member angle from global X in degrees
    #[arg(short = 't', long = "angle", default_value_t = FrameParameters::default().angle_degrees, allow_negative_numbers = true)]
    pub angle_degrees: f64,
    /// Read the parameters from a JSON file instead
    #[arg(long, conflicts_with_all = ["elastic_modulus", "moment_of_inertia", "area", "length", "angle_degrees"])]
    pub input: Option<PathBuf>,
}

/// Parameters for one stiffness computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ElementRequest {
    /// Beam element.
    Beam(BeamParameters),
    /// Frame element.
    Frame(FrameParameters),
}

impl ElementCommand {
    /// Resolve the command into element parameters, loading `--input` when given.
    pub fn request(&self) -> Result<ElementRequest, Box<dyn Error>> {
        let request = match self {
            Self::Beam(args) => ElementRequest::Beam(match &args.input {
                Some(path) => load_parameters(path)?,
                None => BeamParameters {
                    length: args.length,
                    flexural_rigidity: args.flexural_rigidity,
                },
            }),
            Self::Frame(args) => ElementRequest::Frame(match &args.input {
                Some(path) => load_parameters(path)?,
                None => FrameParameters {
                    elastic_modulus: args.elastic_modulus,
                    moment_of_inertia: args.moment_of_inertia,
                    area: args.area,
                    length: args.length,
                    angle_degrees: args.angle_degrees,
                },
            }),
        };
        Ok(request)
    }
}

/// Deserialize element parameters from a JSON file; missing fields take their defaults.
fn load_parameters<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    info!("reading parameters from {}", path.display());
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
