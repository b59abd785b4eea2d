//! Summary command - yearly tax totals under the configured regime

use crate::cmd::{read_snapshot, resolve_tax_mode, TaxModeArg};
use crate::tax::{calculate_tax_summary, TaxMode, TaxSummary};
use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SummaryCommand {
    /// Snapshot JSON file exported from the app (or "-" for stdin)
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Calendar year to report (e.g., 2024)
    #[arg(short, long)]
    year: i32,

    /// Tax mode (defaults to the snapshot's persisted setting)
    #[arg(short, long, value_enum)]
    mode: Option<TaxModeArg>,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

impl SummaryCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let snapshot = read_snapshot(&self.snapshot)?;
        let mode = resolve_tax_mode(self.mode, &snapshot);
        let summary =
            calculate_tax_summary(&snapshot.inventory, &snapshot.expenses, self.year, mode);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        } else {
            print_summary(&summary, mode);
            Ok(())
        }
    }
}

fn print_summary(summary: &TaxSummary, mode: TaxMode) {
    println!();
    println!("TAX SUMMARY {} ({})", summary.year, mode);
    println!();
    println!("  Revenue:       {}", format_eur(summary.revenue));
    println!("  Cost of goods: {}", format_eur(summary.cogs));
    println!("  Expenses:      {}", format_eur(summary.expenses));
    println!("  Fees:          {}", format_eur(summary.fees));
    println!();
    println!("  NET PROFIT:    {}", format_eur_signed(summary.net_profit));
    if let Some(vat) = summary.vat_payable {
        println!("  VAT payable:   {}", format_eur(vat));
    }
    println!();
}

fn format_eur(amount: Decimal) -> String {
    format!("€{:.2}", amount)
}

fn format_eur_signed(amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        format!("-€{:.2}", amount.abs())
    } else {
        format!("€{:.2}", amount)
    }
}
