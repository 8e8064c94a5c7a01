//! Command line arguments

use crate::config::TuiConfig;
use crate::state::forms::{FormDefinition, FormResult, MAX_COLUMNS};
use clap::Parser;
use std::path::PathBuf;

/// dynform - fill in a form described by a JSON definition
#[derive(Parser, Debug, Default)]
#[command(name = "dynform")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON form definition (built-in sample when omitted)
    #[arg(short, long)]
    pub form: Option<PathBuf>,

    /// Number of grid columns
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=MAX_COLUMNS as i64))]
    pub columns: Option<u16>,

    /// Hide field descriptions
    #[arg(long)]
    pub hide_descriptions: bool,

    /// Print the effective form definition as JSON and exit
    #[arg(long)]
    pub print_definition: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Definition to open: `--form`, then the config's default, then the sample
    ///
    /// `--columns` (or the config's `columns`) overrides the definition's grid.
    pub fn resolve_definition(&self, config: &TuiConfig) -> FormResult<FormDefinition> {
        let path = self.form.as_ref().or(config.default_form.as_ref());
        let mut definition = match path {
            Some(path) => {
                tracing::info!("Loading form definition from {}", path.display());
                FormDefinition::load(path)?
            }
            None => FormDefinition::sample(),
        };

        if let Some(columns) = self.columns.or(config.columns) {
            definition.columns = Some(columns);
        }
        Ok(definition)
    }

    /// Whether descriptions are shown
    pub fn show_descriptions(&self, config: &TuiConfig) -> bool {
        !self.hide_descriptions && config.show_descriptions.unwrap_or(true)
    }
}
