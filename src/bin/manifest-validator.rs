//! Manifest Validator CLI
//!
//! Static validation for rollout version manifests

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use manifest_validator::{BatchReport, BatchValidator, FileReport, ValidatorConfig};
use std::path::PathBuf;
use std::process;

/// Rollout manifest validation tool
#[derive(Parser)]
#[command(name = "manifest-validator")]
#[command(version = "0.1.0")]
#[command(about = "Validate rollout version manifest files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every manifest file in a directory
    Validate {
        /// Directory containing manifest files (defaults to ./manifests)
        #[arg(value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Report output format
        #[arg(long, value_enum, default_value = "text")]
        format: ReportFormat,

        /// Validator configuration file (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate a single manifest file
    Check {
        /// Path to the manifest file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Validator configuration file (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let result = run().await;

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("\n❌ Error");
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            dir,
            format,
            config,
        } => {
            let dir = dir.unwrap_or_else(|| PathBuf::from("manifests"));
            let config = load_config(config).await?;
            validate_command(dir, format, config).await
        }
        Commands::Check { file, config } => {
            let config = load_config(config).await?;
            check_command(file, config).await
        }
    }
}

async fn load_config(path: Option<PathBuf>) -> Result<ValidatorConfig> {
    match path {
        Some(path) => Ok(ValidatorConfig::from_yaml(&path).await?),
        None => Ok(ValidatorConfig::default()),
    }
}

async fn validate_command(
    dir: PathBuf,
    format: ReportFormat,
    config: ValidatorConfig,
) -> Result<i32> {
    let validator = BatchValidator::with_config(config);
    let report = validator.validate_dir(&dir).await?;

    match format {
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        ReportFormat::Text => {
            println!("\n🔍 Checked {} manifest file(s) in {}\n", report.checked, dir.display());
            print_text_report(&report);
        }
    }

    Ok(if report.success() { 0 } else { 1 })
}

async fn check_command(file: PathBuf, config: ValidatorConfig) -> Result<i32> {
    let validator = BatchValidator::with_config(config);
    let errors = validator.validate_file(&file).await;

    if errors.is_empty() {
        println!("✅ {} is valid", file.display());
        Ok(0)
    } else {
        println!("❌ Validation failed:\n");
        println!("{}:", file.display());
        for error in &errors {
            println!("  - {}", error);
        }
        Ok(1)
    }
}

fn print_text_report(report: &BatchReport) {
    if report.success() {
        println!("✅ All manifest files are valid");
        return;
    }

    println!("❌ Validation failed:\n");
    for FileReport { file, errors } in &report.failures {
        println!("{}:", file);
        for error in errors {
            println!("  - {}", error);
        }
        println!();
    }
}
