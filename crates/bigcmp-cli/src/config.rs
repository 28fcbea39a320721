use std::fs;
use std::path::Path;

use anyhow::Context;
use bigcmp_diff::{Engine, ReportStyle, SequentialOptions, DEFAULT_SEPARATOR};
use bigcmp_store::AcquireMode;
use serde::Deserialize;

use crate::cli::{Cli, OutputFormat};

/// Settings for one comparison.
///
/// Resolved in order: built-in defaults, then the `--config` TOML file, then
/// command-line flags.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareConfig {
    pub engine: Engine,
    pub max_gap: Option<usize>,
    pub format: OutputFormat,
    pub acquire: AcquireMode,
    pub separator: String,
    pub number_width: usize,
    pub pad_labels: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            engine: Engine::default(),
            max_gap: None,
            format: OutputFormat::default(),
            acquire: AcquireMode::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
            number_width: 4,
            pad_labels: true,
        }
    }
}

impl CompareConfig {
    /// Parse a TOML config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file \"{}\"", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("invalid config file \"{}\"", path.display()))
    }

    /// Resolve the configuration for a command line.
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply(cli);
        Ok(config)
    }

    fn apply(&mut self, cli: &Cli) {
        if let Some(engine) = cli.engine {
            self.engine = engine.into();
        }
        if cli.max_gap.is_some() {
            self.max_gap = cli.max_gap;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(acquire) = cli.acquire {
            self.acquire = acquire.into();
        }
        if cli.no_pad {
            self.pad_labels = false;
        }
    }

    pub fn report_style(&self) -> ReportStyle {
        ReportStyle {
            separator: self.separator.clone(),
            number_width: self.number_width,
            pad_labels: self.pad_labels,
        }
    }

    pub fn sequential_options(&self) -> SequentialOptions {
        SequentialOptions {
            max_gap: self.max_gap,
        }
    }
}
