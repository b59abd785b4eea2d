pub mod profit;
pub mod summary;
pub mod vat;

pub use profit::item_profit;
pub use summary::{calculate_tax_summary, ledger_rows, write_ledger_csv, LedgerRow, TaxSummary};
pub use vat::TaxMode;
