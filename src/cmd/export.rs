//! Export command - yearly ledger CSV for bookkeeping

use crate::cmd::{read_snapshot, resolve_tax_mode, TaxModeArg};
use crate::tax::{ledger_rows, write_ledger_csv};
use clap::Args;
use std::io;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ExportCommand {
    /// Snapshot JSON file exported from the app (or "-" for stdin)
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Calendar year to export
    #[arg(short, long)]
    year: i32,

    /// Tax mode (defaults to the snapshot's persisted setting)
    #[arg(short, long, value_enum)]
    mode: Option<TaxModeArg>,
}

impl ExportCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let snapshot = read_snapshot(&self.snapshot)?;
        let mode = resolve_tax_mode(self.mode, &snapshot);

        let rows = ledger_rows(&snapshot.inventory, &snapshot.expenses, self.year, mode);
        log::debug!("exporting {} ledger rows for {}", rows.len(), self.year);
        write_ledger_csv(&rows, io::stdout())
    }
}
