//! Configuration file support for mot-eval.
//!
//! Provides YAML-based configuration through `mot.config.yml` files,
//! including data structures, file loading, validation and merging with
//! command-line options.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::cli::Args;
use mot_eval::application::dto::OutputFormat;
use mot_eval::evaluation::domain::OpennessClass;
use mot_eval::shared::Result;

pub const CONFIG_FILENAME: &str = "mot.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<OutputFormat>,
    pub components_file: Option<PathBuf>,
    pub license_files: Option<Vec<PathBuf>>,
    pub threshold: Option<u8>,
    pub mini_badges: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Options after applying CLI > config file > defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveOptions {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub components_file: Option<PathBuf>,
    pub license_files: Vec<PathBuf>,
    pub threshold: Option<OpennessClass>,
    pub mini_badges: bool,
}

/// Load config from an explicit path. Returns an error if the file is not found.
///
/// Relative catalog paths are resolved against the directory holding the
/// config file.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    if let Some(base) = path.parent() {
        config.resolve_paths(base);
    }

    tracing::info!(path = %path.display(), "Config file loaded");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    eprintln!("⚙️  Auto-discovered config file: {}", config_path.display());
    Ok(Some(config))
}

impl ConfigFile {
    fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &PathBuf| {
            if p.is_relative() && base != Path::new("") {
                base.join(p)
            } else {
                p.clone()
            }
        };

        self.components_file = self.components_file.as_ref().map(resolve);
        self.license_files = self
            .license_files
            .as_ref()
            .map(|files| files.iter().map(resolve).collect());
    }
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(threshold) = config.threshold {
        if !(1..=3).contains(&threshold) {
            bail!(
                "Invalid config: threshold must be 1, 2 or 3 (got {}).\n\n\
                 💡 Hint: 1 = Open Science Model, 2 = Open Tooling Model, 3 = Open Model.",
                threshold
            );
        }
    }
    if let Some(files) = &config.license_files {
        if files.iter().any(|f| f.as_os_str().is_empty()) {
            bail!(
                "Invalid config: license_files entries must not be empty.\n\n\
                 💡 Hint: List paths to SPDX-style license JSON files."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        tracing::warn!(field = %key, "Unknown config field ignored");
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Merges command-line arguments over the config file and built-in defaults.
pub fn merge_options(args: &Args, config: Option<ConfigFile>) -> Result<EffectiveOptions> {
    let config = config.unwrap_or_default();

    let threshold = match args.threshold.or(config.threshold) {
        Some(value) => Some(OpennessClass::from_number(value)?),
        None => None,
    };

    let license_files = if args.licenses.is_empty() {
        config.license_files.unwrap_or_default()
    } else {
        args.licenses.clone()
    };

    Ok(EffectiveOptions {
        format: args.format.or(config.format).unwrap_or_default(),
        output: args.output.clone(),
        components_file: args.components.clone().or(config.components_file),
        license_files,
        threshold,
        mini_badges: args.mini || config.mini_badges.unwrap_or(false),
    })
}
