mod cli;
mod config;

use cli::Args;
use mot_eval::adapters::outbound::catalog::FileSystemCatalogReader;
use mot_eval::adapters::outbound::console::StderrProgressReporter;
use mot_eval::adapters::outbound::filesystem::FileSystemReader;
use mot_eval::application::dto::{EvaluationRequest, EvaluationResponse};
use mot_eval::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use mot_eval::application::read_models::{EvaluationReadModel, EvaluationReadModelBuilder};
use mot_eval::application::use_cases::EvaluateModelsUseCase;
use mot_eval::shared::error::ExitCode;
use mot_eval::shared::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // clap exits with code 2 on invalid arguments and 0 on --help/--version
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    // Config file: explicit path, otherwise ./mot.config.yml when present
    let config_file = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(Path::new("."))?,
    };
    let options = config::merge_options(&args, config_file)?;
    tracing::info!(
        format = %options.format,
        threshold = ?options.threshold,
        models = args.model_files.len(),
        "Options resolved"
    );

    // Create adapters (Dependency Injection)
    let catalog_reader =
        FileSystemCatalogReader::new(options.components_file.clone(), options.license_files.clone());
    let model_reader = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();

    let use_case = EvaluateModelsUseCase::new(model_reader, catalog_reader, progress_reporter);
    let response = use_case.execute(EvaluationRequest::new(args.model_files, options.threshold))?;

    eprintln!("{}", FormatterFactory::progress_message(options.format));
    let read_model = EvaluationReadModelBuilder::build(&response, options.mini_badges);
    let formatted_output = FormatterFactory::create(options.format).format(&read_model)?;

    PresenterFactory::create(PresenterType::from(options.output)).present(&formatted_output)?;

    print_summary(&read_model);
    Ok(exit_code(&response))
}

fn exit_code(response: &EvaluationResponse) -> ExitCode {
    if response.has_models_below_threshold {
        ExitCode::ThresholdNotMet
    } else {
        ExitCode::Success
    }
}

/// One line per model on stderr, plus the threshold verdict.
fn print_summary(read_model: &EvaluationReadModel) {
    eprintln!();
    for model in &read_model.models {
        let label = &model.classification.label;
        let line = format!("{:>5.1}%  {}", model.total_progress, label);
        match model.classification.value {
            1..=3 => eprintln!("  {}  {}", model.name.bold(), line.green()),
            0 => eprintln!("  {}  {}", model.name.bold(), line.red()),
            _ => eprintln!("  {}  {}", model.name.bold(), line.yellow()),
        }
        if model.conditional_pass {
            eprintln!(
                "    {}",
                "⚠️  Conditional pass: some licenses do not match the component type".yellow()
            );
        }
    }

    if let Some(threshold) = read_model.threshold {
        if read_model.below_threshold.is_empty() {
            eprintln!(
                "\n{}",
                format!("✅ All models meet Class {} or better", threshold).green()
            );
        } else {
            eprintln!(
                "\n{}",
                format!(
                    "❌ {} model(s) below Class {}: {}",
                    read_model.below_threshold.len(),
                    threshold,
                    read_model.below_threshold.join(", ")
                )
                .red()
            );
        }
    }
}
