//! Merge command - reconcile a remote snapshot against the local cache

use crate::cmd::read_snapshot;
use crate::sync::merge_large_fields_from_local;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct MergeCommand {
    /// Remote snapshot JSON (authoritative except for elided large fields)
    #[arg(short, long)]
    remote: PathBuf,

    /// Local snapshot JSON (source for restoring elided fields)
    #[arg(short, long)]
    local: PathBuf,
}

impl MergeCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let remote = read_snapshot(&self.remote)?;
        let local = read_snapshot(&self.local)?;

        let mut merged = remote;
        merged.inventory = merge_large_fields_from_local(merged.inventory, &local.inventory);
        merged.trash = merge_large_fields_from_local(merged.trash, &local.trash);

        println!("{}", serde_json::to_string_pretty(&merged)?);
        Ok(())
    }
}
