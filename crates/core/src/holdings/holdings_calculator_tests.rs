#[cfg(test)]
mod tests {
    use crate::holdings::{
        compute_holding, compute_holdings, compute_investment_progress, compute_portfolio_total,
        summarize_portfolio, Holding, InvestmentRecord, PropertyTotals,
    };
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    // --- Helpers ---

    fn record(property_id: &str, amount: Decimal) -> InvestmentRecord {
        InvestmentRecord {
            user_id: "u-1".to_string(),
            property_id: property_id.to_string(),
            investment_amount: amount,
        }
    }

    fn totals(property_id: &str, total: Decimal, price: Decimal) -> PropertyTotals {
        PropertyTotals {
            property_id: property_id.to_string(),
            property_name: format!("Property {}", property_id),
            total_property_investment: total,
            price,
        }
    }

    fn holding(amount: Decimal) -> Holding {
        Holding {
            property_id: "p".to_string(),
            property_name: "P".to_string(),
            amount_invested: amount,
            total_property_investment: dec!(1000),
            share_percentage: Decimal::ZERO,
        }
    }

    // --- compute_holding ---

    #[test]
    fn test_compute_holding_share() {
        let h = compute_holding(&record("p-1", dec!(500)), &totals("p-1", dec!(2000), dec!(10000)));
        assert_eq!(h.share_percentage, dec!(25));
        assert_eq!(h.amount_invested, dec!(500));
        assert_eq!(h.total_property_investment, dec!(2000));
        assert_eq!(h.property_id, "p-1");
        assert_eq!(h.property_name, "Property p-1");
    }

    #[test]
    fn test_compute_holding_zero_total_has_no_share() {
        let h = compute_holding(&record("p-1", dec!(500)), &totals("p-1", dec!(0), dec!(10000)));
        assert_eq!(h.share_percentage, Decimal::ZERO);
        assert_eq!(h.amount_invested, dec!(500));
    }

    #[test]
    fn test_compute_holding_sole_investor_owns_everything() {
        let h = compute_holding(&record("p-1", dec!(750)), &totals("p-1", dec!(750), dec!(1000)));
        assert_eq!(h.share_percentage, dec!(100));
    }

    #[test]
    fn test_compute_holding_inconsistent_totals_are_not_clamped_above() {
        // Record larger than the property total: data inconsistency, shown as-is
        let h = compute_holding(&record("p-1", dec!(300)), &totals("p-1", dec!(200), dec!(1000)));
        assert_eq!(h.share_percentage, dec!(150));
    }

    #[test]
    fn test_compute_holding_never_negative() {
        let h = compute_holding(&record("p-1", dec!(-100)), &totals("p-1", dec!(1000), dec!(1000)));
        assert_eq!(h.share_percentage, Decimal::ZERO);

        let h = compute_holding(&record("p-1", dec!(-100)), &totals("p-1", dec!(-1000), dec!(1000)));
        assert_eq!(h.share_percentage, Decimal::ZERO);
    }

    #[test]
    fn test_compute_holding_fractional_share() {
        let h = compute_holding(&record("p-1", dec!(1)), &totals("p-1", dec!(3), dec!(3)));
        assert_eq!(h.share_percentage.round_dp(4), dec!(33.3333));
    }

    // --- compute_portfolio_total ---

    #[test]
    fn test_compute_portfolio_total() {
        assert_eq!(compute_portfolio_total(&[]), Decimal::ZERO);
        assert_eq!(
            compute_portfolio_total(&[holding(dec!(100)), holding(dec!(250))]),
            dec!(350)
        );
    }

    // --- compute_investment_progress ---

    #[test]
    fn test_investment_progress() {
        assert_eq!(compute_investment_progress(dec!(250), dec!(1000)), dec!(25));
        assert_eq!(compute_investment_progress(dec!(0), dec!(1000)), Decimal::ZERO);
        assert_eq!(compute_investment_progress(dec!(1000), dec!(1000)), dec!(100));
    }

    #[test]
    fn test_investment_progress_is_clamped() {
        assert_eq!(compute_investment_progress(dec!(1500), dec!(1000)), dec!(100));
        assert_eq!(compute_investment_progress(dec!(-50), dec!(1000)), Decimal::ZERO);
        assert_eq!(compute_investment_progress(dec!(50), dec!(-1000)), Decimal::ZERO);
    }

    #[test]
    fn test_investment_progress_zero_price() {
        assert_eq!(compute_investment_progress(dec!(1500), dec!(0)), Decimal::ZERO);
        assert_eq!(compute_investment_progress(dec!(0), dec!(0)), Decimal::ZERO);
    }

    #[test]
    fn test_investment_progress_overflow_saturates() {
        assert_eq!(compute_investment_progress(Decimal::MAX, dec!(0.0001)), dec!(100));
    }

    #[test]
    fn test_compute_holding_overflow_saturates() {
        let huge = dec!(1000000000000000000000000000);
        let h = compute_holding(&record("p-1", huge), &totals("p-1", dec!(1), dec!(1)));
        assert_eq!(h.share_percentage, Decimal::MAX);

        let h = compute_holding(&record("p-1", -huge), &totals("p-1", dec!(1), dec!(1)));
        assert_eq!(h.share_percentage, Decimal::ZERO);
    }

    // --- compute_holdings ---

    #[test]
    fn test_compute_holdings_sums_records_per_property() {
        let records = vec![
            record("p-1", dec!(200)),
            record("p-2", dec!(100)),
            record("p-1", dec!(300)),
        ];
        let all_totals = vec![
            totals("p-2", dec!(400), dec!(1000)),
            totals("p-1", dec!(2000), dec!(5000)),
        ];

        let holdings = compute_holdings(&records, &all_totals);

        assert_eq!(holdings.len(), 2);
        // First-appearance order of the records, not of the totals
        assert_eq!(holdings[0].property_id, "p-1");
        assert_eq!(holdings[0].amount_invested, dec!(500));
        assert_eq!(holdings[0].share_percentage, dec!(25));
        assert_eq!(holdings[1].property_id, "p-2");
        assert_eq!(holdings[1].share_percentage, dec!(25));
    }

    #[test]
    fn test_compute_holdings_skips_properties_without_totals() {
        let records = vec![record("p-1", dec!(200)), record("missing", dec!(100))];
        let all_totals = vec![totals("p-1", dec!(800), dec!(1000))];

        let holdings = compute_holdings(&records, &all_totals);

        assert_eq!(holdings.len(), 1);
        assert_eq!(holdings[0].property_id, "p-1");
    }

    #[test]
    fn test_compute_holdings_empty() {
        assert!(compute_holdings(&[], &[totals("p-1", dec!(1), dec!(1))]).is_empty());
    }

    // --- summarize_portfolio ---

    #[test]
    fn test_summarize_portfolio() {
        let summary = summarize_portfolio(vec![holding(dec!(100)), holding(dec!(250))]);
        assert_eq!(summary.total_invested, dec!(350));
        assert_eq!(summary.property_count, 2);
        assert_eq!(summary.holdings.len(), 2);

        let empty = summarize_portfolio(Vec::new());
        assert_eq!(empty.total_invested, Decimal::ZERO);
        assert_eq!(empty.property_count, 0);
    }

    // --- idempotence ---

    #[test]
    fn test_repeated_calls_are_identical() {
        let r = record("p-1", dec!(1));
        let t = totals("p-1", dec!(7), dec!(9));
        assert_eq!(compute_holding(&r, &t), compute_holding(&r, &t));
        assert_eq!(
            compute_investment_progress(dec!(7), dec!(9)),
            compute_investment_progress(dec!(7), dec!(9))
        );
    }

    #[test]
    fn test_holding_deserializes_from_backend_dto() {
        let json = r#"{
            "propertyId": "p-1",
            "propertyName": "Kilimani Heights",
            "amountInvested": 500,
            "totalPropertyInvestment": 2000,
            "sharePercentage": 25
        }"#;
        let h: Holding = serde_json::from_str(json).unwrap();
        assert_eq!(h.share_percentage, dec!(25));
    }
}
