// Passport batch validator: prints how many records in the input pass.

use clap::Parser;
use log::LevelFilter;
use passport_check::{
    models::{BatchReport, ValidationRules},
    utils::PassportError,
    BatchValidator, ValidationMode,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "passport-check", version, about = "Count valid passport records in a batch file")]
struct Cli {
    /// Batch file: records separated by blank lines, fields as name:value
    #[arg(default_value = "data/04.txt")]
    input: PathBuf,

    /// Rule set used to decide validity
    #[arg(long, value_enum, default_value_t = ValidationMode::Strict)]
    mode: ValidationMode,

    /// JSON file overriding the default validation rules
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Print the full per-record report as JSON instead of the count
    #[arg(long)]
    report: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<BatchReport, PassportError> {
    let rules = match &cli.rules {
        Some(path) => ValidationRules::from_file(path)?,
        None => ValidationRules::default(),
    };

    BatchValidator::new(cli.mode, rules).validate_file(&cli.input)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(report) => {
            if cli.report {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(err) => {
                        eprintln!("Error serializing report: {}", err);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("{}", report.valid_records);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error validating passports from {}: {}", cli.input.display(), err);
            ExitCode::FAILURE
        }
    }
}
