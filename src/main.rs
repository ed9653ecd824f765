//! ATS scanner: CV vs job description compatibility scoring

mod cli;
mod config;
mod error;
mod input;
mod output;
mod scanner;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{AtsScannerError, Result};
use input::reader::DocumentReader;
use log::{error, info};
use output::{OutputFormatter, ScanReport};
use scanner::AtsScanner;
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Scan {
            cv,
            job,
            detailed,
            output,
            save,
        } => {
            info!("Starting ATS compatibility scan");

            cli::validate_file_extension(&cv, input::format::CV_EXTENSIONS)
                .map_err(|e| AtsScannerError::InvalidInput(format!("CV file: {}", e)))?;

            cli::validate_file_extension(&job, input::format::JOB_EXTENSIONS)
                .map_err(|e| AtsScannerError::InvalidInput(format!("Job description file: {}", e)))?;

            let output_format =
                cli::parse_output_format(&output).map_err(AtsScannerError::InvalidInput)?;

            let mut reader = DocumentReader::new();

            info!("Extracting CV text from {}", cv.display());
            let cv_text = reader.read(&cv).await?;

            info!("Extracting job description text from {}", job.display());
            let job_text = reader.read(&job).await?;

            info!(
                "Extraction done: CV {} chars, job description {} chars",
                cv_text.len(),
                job_text.len()
            );

            let started = Instant::now();
            let ats_scanner = AtsScanner::with_config(config.scanning.clone())?;
            let findings = ats_scanner.analyze(&cv_text, &job_text);
            let elapsed_ms = started.elapsed().as_millis() as u64;

            let report = ScanReport::new(
                findings,
                cv.to_string_lossy().to_string(),
                job.to_string_lossy().to_string(),
                &cv_text,
                &job_text,
                elapsed_ms,
            );

            let formatter = OutputFormatter::new(config.output.color_output && save.is_none());
            let detailed = detailed || config.output.detailed;
            let rendered = formatter.format(&report, &output_format, detailed)?;

            match save {
                Some(path) => {
                    formatter.save_to_file(&rendered, &path)?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current configuration\n");
                println!("Keyword cap: {}", config.scanning.keyword_cap);
                println!("Core tech weight: {}", config.scanning.core_weight);
                println!("Soft skill weight: {}", config.scanning.soft_weight);
                println!("Minimum CV length: {} chars", config.scanning.min_cv_chars);
                println!("Short CV penalty: {}", config.scanning.short_cv_penalty);
                println!("Knock-out score cap: {}", config.scanning.knock_out_cap);
                println!(
                    "Bands: excellent >= {}, good >= {}",
                    config.scanning.excellent_threshold, config.scanning.good_threshold
                );

                let lexicon = scanner::Lexicon::new();
                println!(
                    "Lexicon: {} core tech terms, {} soft skills, {} synonym groups",
                    scanner::lexicon::CORE_TECH_STACK.len(),
                    scanner::lexicon::SOFT_SKILLS.len(),
                    lexicon.synonym_group_count()
                );
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}
