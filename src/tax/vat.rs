use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// German standard VAT rate (19%) as the gross divisor: a VAT-inclusive
/// price divided by this yields the net amount. Fixed by law, not
/// configurable.
pub const VAT_GROSS_DIVISOR: Decimal = dec!(1.19);

/// Tax regime of the business. One value applies process-wide and is owned
/// by the caller; the engine never reads it from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TaxMode {
    /// Kleinunternehmer (§19 UStG): no VAT extraction at all
    #[default]
    SmallBusiness,
    /// Standard VAT: 19% embedded in every gross sell price
    RegularVat,
    /// Margin scheme (§25a UStG) for second-hand dealers: VAT applies to the
    /// margin only, and only when the margin is positive
    DifferentialVat,
}

impl TaxMode {
    /// Parse the persisted preference string. Accepts the common spellings
    /// ("RegularVat", "regular-vat", "regular_vat", ...).
    pub fn from_str(s: &str) -> Option<TaxMode> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_' && *c != ' ')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "smallbusiness" => Some(TaxMode::SmallBusiness),
            "regularvat" => Some(TaxMode::RegularVat),
            "differentialvat" => Some(TaxMode::DifferentialVat),
            _ => None,
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            TaxMode::SmallBusiness => "small business",
            TaxMode::RegularVat => "regular VAT",
            TaxMode::DifferentialVat => "differential VAT",
        }
    }
}

impl std::fmt::Display for TaxMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gross_divisor_backs_out_19_percent() {
        // 119 gross = 100 net + 19 VAT
        assert_eq!(dec!(119) / VAT_GROSS_DIVISOR, dec!(100));
    }

    #[test]
    fn tax_mode_from_str() {
        assert_eq!(TaxMode::from_str("SmallBusiness"), Some(TaxMode::SmallBusiness));
        assert_eq!(TaxMode::from_str("small-business"), Some(TaxMode::SmallBusiness));
        assert_eq!(TaxMode::from_str("regular_vat"), Some(TaxMode::RegularVat));
        assert_eq!(TaxMode::from_str("REGULARVAT"), Some(TaxMode::RegularVat));
        assert_eq!(
            TaxMode::from_str("differential vat"),
            Some(TaxMode::DifferentialVat)
        );
        assert_eq!(TaxMode::from_str("flat-rate"), None);
    }
}
