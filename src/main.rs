use clap::{Parser, Subcommand};

mod cmd;
mod item;
mod snapshot;
mod sync;
mod tax;

#[derive(Parser, Debug)]
#[command(name = "fliptax", version, about = "Profit, VAT and snapshot tooling for resale inventories")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Yearly tax summary (revenue, COGS, expenses, fees, VAT)
    Summary(cmd::summary::SummaryCommand),
    /// Per-item margin view with filtering
    Items(cmd::items::ItemsCommand),
    /// Ledger CSV export for bookkeeping
    Export(cmd::export::ExportCommand),
    /// Size-limit a snapshot for the remote store
    Shrink(cmd::shrink::ShrinkCommand),
    /// Merge a remote snapshot with the local cache
    Merge(cmd::merge::MergeCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Summary(cmd) => cmd.exec(),
        Command::Items(cmd) => cmd.exec(),
        Command::Export(cmd) => cmd.exec(),
        Command::Shrink(cmd) => cmd.exec(),
        Command::Merge(cmd) => cmd.exec(),
    }
}
