pub mod export;
pub mod items;
pub mod merge;
pub mod shrink;
pub mod summary;

use crate::snapshot::{self, Snapshot};
use crate::tax::TaxMode;
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Read a snapshot JSON file (or stdin with "-")
pub fn read_snapshot(path: &Path) -> anyhow::Result<Snapshot> {
    if path.as_os_str() == "-" {
        read_from_stdin()
    } else {
        let file = File::open(path)?;
        snapshot::read_json(BufReader::new(file))
    }
}

fn read_from_stdin() -> anyhow::Result<Snapshot> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    snapshot::read_json(io::Cursor::new(buffer))
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum TaxModeArg {
    #[default]
    SmallBusiness,
    RegularVat,
    DifferentialVat,
}

impl From<TaxModeArg> for TaxMode {
    fn from(arg: TaxModeArg) -> Self {
        match arg {
            TaxModeArg::SmallBusiness => TaxMode::SmallBusiness,
            TaxModeArg::RegularVat => TaxMode::RegularVat,
            TaxModeArg::DifferentialVat => TaxMode::DifferentialVat,
        }
    }
}

/// Tax mode for a command: an explicit flag wins, otherwise the snapshot's
/// persisted settings string, otherwise small business.
pub fn resolve_tax_mode(flag: Option<TaxModeArg>, snapshot: &Snapshot) -> TaxMode {
    if let Some(arg) = flag {
        return arg.into();
    }
    snapshot
        .settings
        .get("taxMode")
        .and_then(|v| v.as_str())
        .and_then(TaxMode::from_str)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_mode_flag_overrides_settings() {
        let snapshot: Snapshot =
            serde_json::from_str(r#"{"settings": {"taxMode": "DifferentialVat"}}"#).unwrap();
        assert_eq!(
            resolve_tax_mode(Some(TaxModeArg::RegularVat), &snapshot),
            TaxMode::RegularVat
        );
        assert_eq!(resolve_tax_mode(None, &snapshot), TaxMode::DifferentialVat);
    }

    #[test]
    fn tax_mode_defaults_to_small_business() {
        let snapshot = Snapshot::default();
        assert_eq!(resolve_tax_mode(None, &snapshot), TaxMode::SmallBusiness);
    }
}
