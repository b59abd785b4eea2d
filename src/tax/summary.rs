use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

use crate::item::{Expense, InventoryItem};
use crate::tax::vat::{TaxMode, VAT_GROSS_DIVISOR};

/// Aggregate tax figures for one calendar year. Derived on demand from the
/// item and expense lists, never persisted.
///
/// Cost of goods is recognized in the year of purchase (cash basis, what the
/// tax office wants), while `InventoryItem::profit` matches cost against the
/// sale (margin view for dashboards). The two conventions deliberately
/// coexist, so `net_profit` here is not the sum of per-item profits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxSummary {
    pub year: i32,
    pub revenue: Decimal,
    pub cogs: Decimal,
    pub expenses: Decimal,
    pub fees: Decimal,
    pub net_profit: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_payable: Option<Decimal>,
}

/// Compute the tax summary for a calendar year.
///
/// - COGS: items bought in the year, sold or not.
/// - Revenue and fees: sold/traded items with a sell date in the year.
///   Under RegularVat the gross sell price is split into net revenue and
///   VAT payable; other modes book the gross and report no VAT.
/// - Expenses: summed by the year of their date.
/// - Items and expenses with missing or unparseable dates are skipped
///   entirely; they never land in a year bucket.
pub fn calculate_tax_summary(
    items: &[InventoryItem],
    expenses: &[Expense],
    year: i32,
    mode: TaxMode,
) -> TaxSummary {
    let mut revenue = Decimal::ZERO;
    let mut cogs = Decimal::ZERO;
    let mut fees = Decimal::ZERO;
    let mut vat = Decimal::ZERO;

    for item in items {
        if item.buy_year() == Some(year) {
            cogs += item.buy_price;
        }

        if item.status.is_sold_like() && item.sell_year() == Some(year) {
            let gross = item.sell_price.unwrap_or(Decimal::ZERO);
            match mode {
                TaxMode::RegularVat => {
                    let net = gross / VAT_GROSS_DIVISOR;
                    revenue += net;
                    vat += gross - net;
                }
                TaxMode::SmallBusiness | TaxMode::DifferentialVat => revenue += gross,
            }
            if let Some(fee) = item.fee_amount {
                fees += fee;
            }
        }
    }

    let expense_total: Decimal = expenses
        .iter()
        .filter(|e| e.year() == Some(year))
        .map(|e| e.amount)
        .sum();

    TaxSummary {
        year,
        revenue,
        cogs,
        expenses: expense_total,
        fees,
        net_profit: revenue - cogs - expense_total - fees,
        vat_payable: (mode == TaxMode::RegularVat).then_some(vat),
    }
}

/// One bookkeeping line of the yearly ledger export. The signed amounts of
/// all rows for a year sum to the year's `net_profit`.
#[derive(Debug, Clone)]
pub struct LedgerRow {
    pub date: chrono::NaiveDate,
    pub kind: LedgerKind,
    pub category: String,
    pub description: String,
    pub amount: Decimal,
    pub reference: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerKind {
    Purchase,
    Sale,
    Fee,
    Expense,
}

impl LedgerKind {
    pub fn display(&self) -> &'static str {
        match self {
            LedgerKind::Purchase => "Purchase",
            LedgerKind::Sale => "Sale",
            LedgerKind::Fee => "Fee",
            LedgerKind::Expense => "Expense",
        }
    }
}

/// Build the ledger rows underlying a year's tax summary, sorted by date.
/// Sales are booked net of VAT under RegularVat so the rows reconcile with
/// `TaxSummary::revenue`.
pub fn ledger_rows(
    items: &[InventoryItem],
    expenses: &[Expense],
    year: i32,
    mode: TaxMode,
) -> Vec<LedgerRow> {
    let mut rows = Vec::new();

    for item in items {
        let category = item.category.clone().unwrap_or_default();

        if item.buy_year() == Some(year) {
            if let Some(date) = item.buy_date.as_deref().and_then(crate::item::parse_date) {
                rows.push(LedgerRow {
                    date,
                    kind: LedgerKind::Purchase,
                    category: category.clone(),
                    description: item.name.clone(),
                    amount: -item.buy_price,
                    reference: item.id.clone(),
                });
            }
        }

        if item.status.is_sold_like() && item.sell_year() == Some(year) {
            if let Some(date) = item.sell_date.as_deref().and_then(crate::item::parse_date) {
                let gross = item.sell_price.unwrap_or(Decimal::ZERO);
                let booked = match mode {
                    TaxMode::RegularVat => gross / VAT_GROSS_DIVISOR,
                    _ => gross,
                };
                rows.push(LedgerRow {
                    date,
                    kind: LedgerKind::Sale,
                    category: category.clone(),
                    description: item.name.clone(),
                    amount: booked,
                    reference: item.id.clone(),
                });
                if let Some(fee) = item.fee_amount {
                    rows.push(LedgerRow {
                        date,
                        kind: LedgerKind::Fee,
                        category,
                        description: item.name.clone(),
                        amount: -fee,
                        reference: item.id.clone(),
                    });
                }
            }
        }
    }

    for expense in expenses {
        if expense.year() == Some(year) {
            if let Some(date) = expense.date.as_deref().and_then(crate::item::parse_date) {
                rows.push(LedgerRow {
                    date,
                    kind: LedgerKind::Expense,
                    category: expense
                        .category
                        .as_ref()
                        .map(|c| c.to_string())
                        .unwrap_or_default(),
                    description: expense.description.clone(),
                    amount: -expense.amount,
                    reference: expense.id.clone(),
                });
            }
        }
    }

    rows.sort_by(|a, b| a.date.cmp(&b.date).then(a.reference.cmp(&b.reference)));
    rows
}

/// Write ledger rows as a German-style CSV: semicolon delimited, amounts
/// with a comma decimal separator.
pub fn write_ledger_csv<W: Write>(rows: &[LedgerRow], writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::WriterBuilder::new().delimiter(b';').from_writer(writer);
    wtr.write_record(["date", "type", "category", "description", "amount", "reference"])?;
    for row in rows {
        wtr.write_record([
            row.date.format("%Y-%m-%d").to_string(),
            row.kind.display().to_string(),
            row.category.clone(),
            row.description.clone(),
            format_amount_de(row.amount),
            row.reference.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// "1234.50" -> "1234,50"
fn format_amount_de(amount: Decimal) -> String {
    format!("{:.2}", amount).replace('.', ",")
}
