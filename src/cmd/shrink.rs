//! Shrink command - run the outbound size limiter on a snapshot

use crate::cmd::read_snapshot;
use crate::sync::prepare_payload;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ShrinkCommand {
    /// Snapshot JSON file exported from the app (or "-" for stdin)
    #[arg(short, long)]
    snapshot: PathBuf,
}

impl ShrinkCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let snapshot = read_snapshot(&self.snapshot)?;
        let payload = prepare_payload(&snapshot)?;
        println!("{}", payload);
        Ok(())
    }
}
