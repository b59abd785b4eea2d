use rust_decimal::Decimal;

use crate::tax::vat::{TaxMode, VAT_GROSS_DIVISOR};

/// Net profit of a single sale.
///
/// Missing inputs are treated as zero so a display layer always gets a
/// number; negative inputs flow through arithmetic unchanged (upstream
/// validation owns range checks). Never panics.
///
/// - SmallBusiness: sell - buy - fee
/// - RegularVat: the sell price is VAT-inclusive gross; profit is computed
///   on the net: sell / 1.19 - buy - fee
/// - DifferentialVat: VAT is due on the margin only, and only when the
///   margin is positive. A loss carries no VAT.
pub fn item_profit(
    sell_price: Option<Decimal>,
    buy_price: Option<Decimal>,
    fee_amount: Option<Decimal>,
    mode: TaxMode,
) -> Decimal {
    let sell = sell_price.unwrap_or(Decimal::ZERO);
    let buy = buy_price.unwrap_or(Decimal::ZERO);
    let fee = fee_amount.unwrap_or(Decimal::ZERO);

    match mode {
        TaxMode::SmallBusiness => sell - buy - fee,
        TaxMode::RegularVat => sell / VAT_GROSS_DIVISOR - buy - fee,
        TaxMode::DifferentialVat => {
            let margin = sell - buy;
            if margin <= Decimal::ZERO {
                margin - fee
            } else {
                // tax = margin * 19/119
                let tax = margin - margin / VAT_GROSS_DIVISOR;
                margin - tax - fee
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn small_business_is_plain_subtraction() {
        assert_eq!(
            item_profit(Some(dec!(150)), Some(dec!(100)), Some(dec!(5)), TaxMode::SmallBusiness),
            dec!(45)
        );
        assert_eq!(
            item_profit(Some(dec!(100)), Some(dec!(100)), None, TaxMode::SmallBusiness),
            Decimal::ZERO
        );
    }

    #[test]
    fn regular_vat_backs_out_19_percent_from_gross() {
        // 150 gross -> 126.0504... net -> profit 21.05 after 100 buy + 5 fee
        let profit = item_profit(
            Some(dec!(150)),
            Some(dec!(100)),
            Some(dec!(5)),
            TaxMode::RegularVat,
        );
        assert_eq!(profit.round_dp(2), dec!(21.05));

        // Exact when the gross divides cleanly: 119 / 1.19 = 100
        let exact = item_profit(Some(dec!(119)), Some(dec!(40)), None, TaxMode::RegularVat);
        assert_eq!(exact, dec!(60));
    }

    #[test]
    fn differential_vat_taxes_the_margin_only() {
        // margin 50 -> tax 50 * 19/119 = 7.983..., profit = 50 - tax - 5
        let profit = item_profit(
            Some(dec!(150)),
            Some(dec!(100)),
            Some(dec!(5)),
            TaxMode::DifferentialVat,
        );
        assert_eq!(profit.round_dp(2), dec!(37.02));
    }

    #[test]
    fn differential_vat_loss_carries_no_vat() {
        // Sold at a loss: margin -20, no VAT due
        let profit = item_profit(
            Some(dec!(80)),
            Some(dec!(100)),
            None,
            TaxMode::DifferentialVat,
        );
        assert_eq!(profit, dec!(-20));

        // Break-even margin is also VAT-free
        let break_even = item_profit(
            Some(dec!(100)),
            Some(dec!(100)),
            Some(dec!(3)),
            TaxMode::DifferentialVat,
        );
        assert_eq!(break_even, dec!(-3));
    }

    #[test]
    fn differential_vat_always_below_small_business_on_gains() {
        let cases = [
            (dec!(150), dec!(100), dec!(5)),
            (dec!(101), dec!(100), dec!(0)),
            (dec!(999.99), dec!(1), dec!(12.34)),
        ];
        for (sell, buy, fee) in cases {
            let plain = item_profit(Some(sell), Some(buy), Some(fee), TaxMode::SmallBusiness);
            let margin_scheme =
                item_profit(Some(sell), Some(buy), Some(fee), TaxMode::DifferentialVat);
            assert!(
                margin_scheme < plain,
                "expected {margin_scheme} < {plain} for sell={sell} buy={buy} fee={fee}"
            );
        }
    }

    #[test]
    fn missing_inputs_degrade_to_zero() {
        assert_eq!(item_profit(None, None, None, TaxMode::SmallBusiness), Decimal::ZERO);
        assert_eq!(item_profit(None, None, None, TaxMode::RegularVat), Decimal::ZERO);
        assert_eq!(item_profit(None, None, None, TaxMode::DifferentialVat), Decimal::ZERO);
        assert_eq!(
            item_profit(Some(dec!(50)), None, None, TaxMode::SmallBusiness),
            dec!(50)
        );
    }

    #[test]
    fn negative_inputs_flow_through_unchanged() {
        assert_eq!(
            item_profit(Some(dec!(-10)), Some(dec!(5)), None, TaxMode::SmallBusiness),
            dec!(-15)
        );
    }

    #[test]
    fn referential_transparency() {
        let a = item_profit(Some(dec!(150)), Some(dec!(100)), Some(dec!(5)), TaxMode::RegularVat);
        let b = item_profit(Some(dec!(150)), Some(dec!(100)), Some(dec!(5)), TaxMode::RegularVat);
        assert_eq!(a, b);
    }
}
