use clap::{ArgAction, Parser};
use std::path::PathBuf;

use mot_eval::application::dto::OutputFormat;

/// Evaluate AI model releases against the Model Openness Framework
#[derive(Parser, Debug)]
#[command(name = "mot-eval")]
#[command(version)]
#[command(
    about = "Evaluate AI model releases against the Model Openness Framework",
    long_about = None
)]
pub struct Args {
    /// Model files to evaluate (YAML or JSON release documents)
    #[arg(required = true, value_name = "MODEL_FILES")]
    pub model_files: Vec<PathBuf>,

    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Component catalog YAML file (defaults to the bundled catalog)
    #[arg(long, value_name = "FILE")]
    pub components: Option<PathBuf>,

    /// SPDX-style license list JSON file; can be specified multiple times,
    /// later files override earlier ones
    #[arg(long, value_name = "FILE")]
    pub licenses: Vec<PathBuf>,

    /// Config file path (defaults to ./mot.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Required openness class; exit with code 1 if any model misses it
    #[arg(short, long, value_name = "CLASS", value_parser = clap::value_parser!(u8).range(1..=3))]
    pub threshold: Option<u8>,

    /// Only show the most relevant class badges
    #[arg(long)]
    pub mini: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
