//! Recibos CLI - spreadsheet-driven receipt generation
//!
//! This crate wires the pieces together:
//! - TOML configuration (input file, letterhead, log thresholds)
//! - Spreadsheet ingestion over calamine
//! - Rotating log-file maintenance
//! - The row-iterating orchestrator

pub mod config;
pub mod loader;
pub mod logrotate;

use crate::config::Config;
use crate::loader::{GenerationFlag, SheetTable};
use anyhow::Context;
use br_text::PT_BR;
use receipt::{render, Layout, Receipt};
use std::path::Path;
use tracing::{error, info};

/// Process every row of the configured sheet
///
/// Rows flagged `S` get a receipt rendered into the working directory; rows
/// flagged `N` are skipped; any other flag value is logged as an error and
/// the run continues. A load error, an invalid CPF or a render failure
/// aborts the whole run.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let table = SheetTable::load(Path::new(&config.input.file), &config.input.sheet)?;
    info!(rows = table.len(), "spreadsheet loaded");

    let layout = Layout::default();
    for row in table.rows() {
        let name = row.name();
        info!(client = %name, "starting receipt row");

        let flag_cell = row.flag();
        match GenerationFlag::parse(&flag_cell) {
            Some(GenerationFlag::Generate) => {
                let receipt = Receipt {
                    name,
                    cpf: row.cpf(),
                    value: row.total_value(),
                    service_dates: row.service_dates(),
                    signature_date: row.receipt_date(),
                };
                let path = render(&receipt, &config.letterhead, &layout, &PT_BR, Path::new("."))
                    .with_context(|| format!("generating receipt for {}", receipt.name))?;
                info!(file = %path.display(), "receipt written");
            }
            Some(GenerationFlag::Skip) => {
                info!("generation flag is N, nothing to do");
            }
            None => {
                error!(flag = %flag_cell, "unexpected value in the Gerar_Recibo column");
            }
        }

        info!("row finished");
    }

    Ok(())
}
