use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::tax::{item_profit, TaxMode};

/// Lifecycle status of an inventory item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ItemStatus {
    #[default]
    InStock,
    Sold,
    Ordered,
    InComposition,
    Traded,
}

impl ItemStatus {
    /// Sold and Traded items count towards revenue. Any other status means the
    /// sell fields may hold stale values from a sale-then-return cycle, so
    /// callers must check the status rather than field presence.
    pub fn is_sold_like(&self) -> bool {
        matches!(self, ItemStatus::Sold | ItemStatus::Traded)
    }

    pub fn display(&self) -> &'static str {
        match self {
            ItemStatus::InStock => "In Stock",
            ItemStatus::Sold => "Sold",
            ItemStatus::Ordered => "Ordered",
            ItemStatus::InComposition => "In Composition",
            ItemStatus::Traded => "Traded",
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Direction of a price history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceChangeKind {
    Buy,
    Sell,
}

/// One entry of an item's append-only price audit log.
/// Entries are appended on every buy/sell price edit and never rewritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceChange {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: PriceChangeKind,
    pub price: Decimal,
    #[serde(default)]
    pub previous_price: Option<Decimal>,
}

/// An item tracked through the buy -> list -> sell lifecycle.
///
/// Field names follow the snapshot wire format of the host application
/// (camelCase JSON). The image/chat/description fields can be large data
/// URLs, which is why they are subject to elision on outbound sync
/// (see `crate::sync`).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub buy_price: Decimal,
    #[serde(default)]
    pub sell_price: Option<Decimal>,
    #[serde(default)]
    pub fee_amount: Option<Decimal>,
    #[serde(default)]
    pub buy_date: Option<String>,
    #[serde(default)]
    pub sell_date: Option<String>,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sub_category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub receipt_url: Option<String>,
    #[serde(default)]
    pub kleinanzeigen_chat_image: Option<String>,
    #[serde(default)]
    pub kleinanzeigen_buy_chat_image: Option<String>,
    #[serde(default)]
    pub market_description: Option<String>,
    #[serde(default)]
    pub price_history: Vec<PriceChange>,
}

impl InventoryItem {
    /// Calendar year the item was purchased, if the buy date parses.
    pub fn buy_year(&self) -> Option<i32> {
        date_year(self.buy_date.as_deref())
    }

    /// Calendar year the item was sold, if the sell date parses.
    pub fn sell_year(&self) -> Option<i32> {
        date_year(self.sell_date.as_deref())
    }

    /// Net profit of this item under the given tax mode.
    /// Only meaningful for sold/traded items; see `ItemStatus::is_sold_like`.
    pub fn profit(&self, mode: TaxMode) -> Decimal {
        item_profit(self.sell_price, Some(self.buy_price), self.fee_amount, mode)
    }

    /// The fields that may be elided from a remote snapshot for size reasons,
    /// in canonical order. Writers and readers must agree on this list.
    pub fn large_fields(&self) -> [(&'static str, &Option<String>); 5] {
        [
            ("imageUrl", &self.image_url),
            ("receiptUrl", &self.receipt_url),
            ("kleinanzeigenChatImage", &self.kleinanzeigen_chat_image),
            ("kleinanzeigenBuyChatImage", &self.kleinanzeigen_buy_chat_image),
            ("marketDescription", &self.market_description),
        ]
    }

    /// Mutable view of the large fields, same order as `large_fields`.
    pub fn large_fields_mut(&mut self) -> [(&'static str, &mut Option<String>); 5] {
        [
            ("imageUrl", &mut self.image_url),
            ("receiptUrl", &mut self.receipt_url),
            ("kleinanzeigenChatImage", &mut self.kleinanzeigen_chat_image),
            ("kleinanzeigenBuyChatImage", &mut self.kleinanzeigen_buy_chat_image),
            ("marketDescription", &mut self.market_description),
        ]
    }
}

/// Category of a business expense: eight known tags plus free-form strings,
/// serialized as the plain string the host application stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExpenseCategory {
    Shipping,
    Packaging,
    PlatformFees,
    Fuel,
    Tools,
    Office,
    Advertising,
    Storage,
    Other(String),
}

impl From<String> for ExpenseCategory {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Shipping" => ExpenseCategory::Shipping,
            "Packaging" => ExpenseCategory::Packaging,
            "PlatformFees" => ExpenseCategory::PlatformFees,
            "Fuel" => ExpenseCategory::Fuel,
            "Tools" => ExpenseCategory::Tools,
            "Office" => ExpenseCategory::Office,
            "Advertising" => ExpenseCategory::Advertising,
            "Storage" => ExpenseCategory::Storage,
            _ => ExpenseCategory::Other(s),
        }
    }
}

impl From<ExpenseCategory> for String {
    fn from(c: ExpenseCategory) -> Self {
        match c {
            ExpenseCategory::Shipping => "Shipping".to_string(),
            ExpenseCategory::Packaging => "Packaging".to_string(),
            ExpenseCategory::PlatformFees => "PlatformFees".to_string(),
            ExpenseCategory::Fuel => "Fuel".to_string(),
            ExpenseCategory::Tools => "Tools".to_string(),
            ExpenseCategory::Office => "Office".to_string(),
            ExpenseCategory::Advertising => "Advertising".to_string(),
            ExpenseCategory::Storage => "Storage".to_string(),
            ExpenseCategory::Other(s) => s,
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from(self.clone()))
    }
}

/// A standalone business expense (not tied to a specific item)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub category: Option<ExpenseCategory>,
}

impl Expense {
    pub fn year(&self) -> Option<i32> {
        date_year(self.date.as_deref())
    }
}

/// Parse a date string from the snapshot, which may be a plain ISO date,
/// an RFC 3339 timestamp (JS `toISOString()`), or a space-separated datetime.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    None
}

/// Calendar year of an optional date string. Missing or unparseable dates
/// yield `None`, which keeps the record out of every year bucket.
pub fn date_year(date: Option<&str>) -> Option<i32> {
    use chrono::Datelike;
    date.and_then(parse_date).map(|d| d.year())
}
