//! Items command - per-item margin view with filtering

use crate::cmd::{read_snapshot, resolve_tax_mode, TaxModeArg};
use crate::item::{InventoryItem, ItemStatus};
use crate::tax::TaxMode;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use std::io;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct ItemsCommand {
    /// Snapshot JSON file exported from the app (or "-" for stdin)
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Only items bought or sold in this calendar year
    #[arg(short, long)]
    year: Option<i32>,

    /// Filter by status
    #[arg(long, value_enum)]
    status: Option<StatusFilter>,

    /// Filter by category (case-insensitive)
    #[arg(short, long)]
    category: Option<String>,

    /// Tax mode (defaults to the snapshot's persisted setting)
    #[arg(short, long, value_enum)]
    mode: Option<TaxModeArg>,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusFilter {
    InStock,
    Sold,
    Ordered,
    InComposition,
    Traded,
}

impl From<StatusFilter> for ItemStatus {
    fn from(f: StatusFilter) -> Self {
        match f {
            StatusFilter::InStock => ItemStatus::InStock,
            StatusFilter::Sold => ItemStatus::Sold,
            StatusFilter::Ordered => ItemStatus::Ordered,
            StatusFilter::InComposition => ItemStatus::InComposition,
            StatusFilter::Traded => ItemStatus::Traded,
        }
    }
}

impl ItemsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let snapshot = read_snapshot(&self.snapshot)?;
        let mode = resolve_tax_mode(self.mode, &snapshot);

        let rows = build_item_rows(
            &snapshot.inventory,
            mode,
            self.year,
            self.status.map(Into::into),
            self.category.as_deref(),
        );

        if self.csv {
            self.write_csv(&rows)
        } else {
            self.print_table(&rows);
            Ok(())
        }
    }

    fn print_table(&self, rows: &[ItemRow]) {
        if rows.is_empty() {
            println!("No items found matching filters");
            return;
        }

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
    }

    fn write_csv(&self, rows: &[ItemRow]) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(io::stdout());
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Row for the items table output
#[derive(Debug, Clone, Tabled, serde::Serialize)]
pub struct ItemRow {
    #[tabled(rename = "Id")]
    pub id: String,

    #[tabled(rename = "Name")]
    pub name: String,

    #[tabled(rename = "Status")]
    pub status: String,

    #[tabled(rename = "Category")]
    pub category: String,

    #[tabled(rename = "Bought")]
    pub buy_date: String,

    #[tabled(rename = "Buy")]
    pub buy_price: String,

    #[tabled(rename = "Sold")]
    pub sell_date: String,

    #[tabled(rename = "Sell")]
    pub sell_price: String,

    #[tabled(rename = "Fee")]
    pub fee: String,

    #[tabled(rename = "Profit")]
    pub profit: String,
}

fn build_item_rows(
    items: &[InventoryItem],
    mode: TaxMode,
    year: Option<i32>,
    status_filter: Option<ItemStatus>,
    category_filter: Option<&str>,
) -> Vec<ItemRow> {
    let mut rows = Vec::new();

    for item in items {
        if let Some(y) = year {
            let in_year = item.buy_year() == Some(y) || item.sell_year() == Some(y);
            if !in_year {
                continue;
            }
        }
        if let Some(status) = status_filter {
            if item.status != status {
                continue;
            }
        }
        if let Some(category) = category_filter {
            let matches = item
                .category
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(category));
            if !matches {
                continue;
            }
        }

        // Profit is the dashboard margin view: cost matched against the
        // sale, unlike the cash-basis yearly summary
        let profit = if item.status.is_sold_like() {
            format_amount(item.profit(mode))
        } else {
            "-".to_string()
        };

        rows.push(ItemRow {
            id: item.id.clone(),
            name: item.name.clone(),
            status: item.status.display().to_string(),
            category: item.category.clone().unwrap_or_default(),
            buy_date: item.buy_date.clone().unwrap_or_default(),
            buy_price: format_amount(item.buy_price),
            sell_date: item.sell_date.clone().unwrap_or_default(),
            sell_price: item.sell_price.map(format_amount).unwrap_or_else(|| "-".to_string()),
            fee: item.fee_amount.map(format_amount).unwrap_or_else(|| "-".to_string()),
            profit,
        });
    }

    rows
}

fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(id: &str, status: ItemStatus, buy_date: &str, sell_date: Option<&str>) -> InventoryItem {
        InventoryItem {
            id: id.to_string(),
            name: id.to_string(),
            buy_price: dec!(100),
            sell_price: Some(dec!(150)),
            buy_date: Some(buy_date.to_string()),
            sell_date: sell_date.map(str::to_string),
            status,
            category: Some("Electronics".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn unsold_items_show_no_profit() {
        let items = vec![item("a", ItemStatus::InStock, "2024-01-01", None)];
        let rows = build_item_rows(&items, TaxMode::SmallBusiness, None, None, None);
        assert_eq!(rows[0].profit, "-");
    }

    #[test]
    fn sold_items_show_margin_profit() {
        let items = vec![item("a", ItemStatus::Sold, "2024-01-01", Some("2024-02-01"))];
        let rows = build_item_rows(&items, TaxMode::SmallBusiness, None, None, None);
        assert_eq!(rows[0].profit, "50.00");
    }

    #[test]
    fn year_filter_matches_buy_or_sell_year() {
        let items = vec![
            item("bought-2023", ItemStatus::Sold, "2023-11-01", Some("2024-01-15")),
            item("all-2023", ItemStatus::Sold, "2023-03-01", Some("2023-04-01")),
        ];
        let rows = build_item_rows(&items, TaxMode::SmallBusiness, Some(2024), None, None);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "bought-2023");
    }

    #[test]
    fn status_and_category_filters() {
        let mut other = item("b", ItemStatus::InStock, "2024-01-01", None);
        other.category = Some("Furniture".to_string());
        let items = vec![
            item("a", ItemStatus::Sold, "2024-01-01", Some("2024-02-01")),
            other,
        ];

        let sold_only =
            build_item_rows(&items, TaxMode::SmallBusiness, None, Some(ItemStatus::Sold), None);
        assert_eq!(sold_only.len(), 1);
        assert_eq!(sold_only[0].id, "a");

        let furniture =
            build_item_rows(&items, TaxMode::SmallBusiness, None, None, Some("furniture"));
        assert_eq!(furniture.len(), 1);
        assert_eq!(furniture[0].id, "b");
    }
}
