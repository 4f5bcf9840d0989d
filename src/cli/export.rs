//! Export CLI commands
//!
//! Implements CLI commands for exporting the committed ledger.

use std::fs::File;
use std::io::{self, Write};

use clap::Subcommand;

use crate::error::{OnSplitError, OnSplitResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml, export_shares_csv};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export expenses to CSV
    Csv {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Export one row per member share instead of per expense
        #[arg(long)]
        shares: bool,
    },
    /// Export the full ledger to JSON
    Json {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Export the full ledger to YAML
    Yaml {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn open_output(output: Option<String>) -> OnSplitResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(&path)
                .map_err(|e| OnSplitError::Export(format!("Cannot create {}: {}", path, e)))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Handle an export subcommand
pub fn handle_export_command(storage: &Storage, command: ExportCommands) -> OnSplitResult<()> {
    match command {
        ExportCommands::Csv { output, shares } => {
            let mut writer = open_output(output)?;
            if shares {
                export_shares_csv(storage, &mut writer)?;
            } else {
                export_expenses_csv(storage, &mut writer)?;
            }
        }
        ExportCommands::Json { output } => {
            let mut writer = open_output(output)?;
            export_full_json(storage, &mut writer)?;
        }
        ExportCommands::Yaml { output } => {
            let mut writer = open_output(output)?;
            export_full_yaml(storage, &mut writer)?;
        }
    }

    Ok(())
}
