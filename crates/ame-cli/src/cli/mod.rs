mod commands;
mod helpers;

use ame_core::domain::{AmeError, AmeErrorCategory};
use ame_core::table::DEFAULT_TABLE_FILE;
use clap::Parser;
use std::path::PathBuf;

pub fn run_from_env() -> i32 {
    helpers::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error.diagnostic_line());
            eprintln!("{}", error.category().fatal_exit_line());
            error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("ame".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();

    match Cli::try_parse_from(&full_args) {
        Ok(cli) => dispatch_parsed(cli),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "ame",
    about = "Atomic Mass Evaluation lookups and mass arithmetic"
)]
struct Cli {
    #[command(flatten)]
    options: GlobalOptions,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Args)]
pub(super) struct GlobalOptions {
    /// AME mass table in the fixed-width distribution layout
    #[arg(long, global = true, default_value = DEFAULT_TABLE_FILE)]
    table: PathBuf,

    /// JSON file overriding the fixed-width column layout
    #[arg(long, global = true)]
    schema: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Show how an expression decomposes, without loading the table
    Parse { expression: String },
    /// Atomic mass of a nuclide or molecule in micro-u
    Mass { expression: String },
    /// Mass excess in keV
    Excess { expression: String },
    /// Ion mass with `charge` electrons removed
    Ion {
        expression: String,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        charge: i32,
    },
    /// Mass of a metastable state above the ground state
    Isomer {
        expression: String,
        /// Excitation energy in keV
        #[arg(long)]
        energy: f64,
    },
    /// Rows sharing a mass number
    Isobars {
        #[arg(value_name = "A")]
        mass_number: u32,
    },
    /// Rows sharing a proton number
    Isotopes {
        #[arg(value_name = "Z")]
        proton_number: u32,
    },
    /// Rows sharing a neutron number
    Isotones {
        #[arg(value_name = "N")]
        neutron_number: i64,
    },
    /// Rows for one element symbol
    Element { symbol: String },
}

fn dispatch_parsed(cli: Cli) -> Result<i32, CliError> {
    let options = cli.options;
    match cli.command {
        CliCommand::Parse { expression } => commands::run_parse_command(&options, &expression),
        CliCommand::Mass { expression } => commands::run_mass_command(&options, &expression),
        CliCommand::Excess { expression } => commands::run_excess_command(&options, &expression),
        CliCommand::Ion { expression, charge } => {
            commands::run_ion_command(&options, &expression, charge)
        }
        CliCommand::Isomer { expression, energy } => {
            commands::run_isomer_command(&options, &expression, energy)
        }
        CliCommand::Isobars { mass_number } => commands::run_isobars_command(&options, mass_number),
        CliCommand::Isotopes { proton_number } => {
            commands::run_listing_command(&options, commands::Listing::Isotopes(proton_number))
        }
        CliCommand::Isotones { neutron_number } => {
            commands::run_listing_command(&options, commands::Listing::Isotones(neutron_number))
        }
        CliCommand::Element { symbol } => {
            commands::run_listing_command(&options, commands::Listing::Element(symbol))
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Query(AmeError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<AmeError> for CliError {
    fn from(error: AmeError) -> Self {
        Self::Query(error)
    }
}

impl CliError {
    pub fn category(&self) -> AmeErrorCategory {
        match self {
            Self::Usage(_) => AmeErrorCategory::InputValidationError,
            Self::Query(error) => error.category(),
            Self::Internal(_) => AmeErrorCategory::IoSystemError,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        match self {
            Self::Usage(message) => format!("ERROR: [INPUT.CLI_USAGE] {}", message.trim_end()),
            Self::Query(error) => error.diagnostic_line(),
            Self::Internal(error) => format!("ERROR: [IO.CLI] {error:#}"),
        }
    }
}
