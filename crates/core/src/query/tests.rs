//! Tests for filtering and pagination.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::normalize::Transaction;

use super::service::filter;
use super::types::FilterSpec;

fn tx(invoice: &str, year: i32, month: u32, location: &str) -> Transaction {
    let date = NaiveDate::from_ymd_opt(year, month, 10).expect("valid test date");
    Transaction {
        invoice_number: invoice.to_string(),
        invoice_date: date.format("%d/%m/%Y").to_string(),
        date,
        year,
        month,
        net_revenue_amount: Decimal::ONE,
        pharmacist: "A. Pharmacist".to_string(),
        location: location.to_string(),
    }
}

fn year_spec(year: i32, offset: usize, limit: usize) -> FilterSpec {
    FilterSpec {
        years: BTreeSet::from([year]),
        offset,
        limit,
        ..FilterSpec::default()
    }
}

proptest! {
    /// The page is a contiguous, order-preserving slice of the full match
    /// set starting at `offset`, never longer than `limit`, and `has_more`
    /// agrees with the window arithmetic.
    #[test]
    fn test_pagination_window_properties(
        months in prop::collection::vec(1u32..13, 0..80),
        offset in 0usize..40,
        limit in 1usize..20,
    ) {
        let txs: Vec<Transaction> = months
            .iter()
            .enumerate()
            .map(|(i, m)| tx(&format!("INV{i:04}"), 2024, *m, "Main Branch"))
            .collect();

        let spec = year_spec(2024, offset, limit);
        let result = filter(&txs, &spec);

        // Full match set, unpaginated.
        let all: Vec<&Transaction> = txs.iter().filter(|t| spec.matches(t)).collect();

        prop_assert_eq!(result.total, all.len());
        prop_assert!(result.matches.len() <= limit);

        let expected: Vec<&Transaction> =
            all.iter().skip(offset).take(limit).copied().collect();
        let got: Vec<&Transaction> = result.matches.iter().collect();
        prop_assert_eq!(got, expected);

        prop_assert_eq!(result.has_more(&spec), offset + limit < result.total);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_unconstrained_spec_is_refused() {
        let txs = vec![tx("INV001", 2024, 1, "Main Branch")];
        let spec = FilterSpec {
            offset: 0,
            limit: 10,
            ..FilterSpec::default()
        };

        let result = filter(&txs, &spec);
        assert!(result.matches.is_empty());
        assert_eq!(result.total, 0);
        assert!(!result.has_more(&spec));
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let txs = vec![
            tx("A", 2024, 1, "Main Branch"),
            tx("B", 2024, 2, "Main Branch"),
            tx("C", 2024, 1, "North Branch"),
            tx("D", 2023, 1, "Main Branch"),
        ];

        let spec = FilterSpec {
            years: BTreeSet::from([2024]),
            months: BTreeSet::from([1]),
            locations: BTreeSet::from(["Main Branch".to_string()]),
            offset: 0,
            limit: 10,
        };

        let result = filter(&txs, &spec);
        assert_eq!(result.total, 1);
        assert_eq!(result.matches[0].invoice_number, "A");
    }

    #[test]
    fn test_empty_predicate_set_is_wildcard() {
        let txs = vec![
            tx("A", 2024, 1, "Main Branch"),
            tx("B", 2024, 2, "North Branch"),
        ];

        // Only years constrained; months and locations match anything.
        let spec = year_spec(2024, 0, 10);
        let result = filter(&txs, &spec);
        assert_eq!(result.total, 2);
    }

    #[test]
    fn test_set_membership_matches_multiple_values() {
        let txs = vec![
            tx("A", 2023, 1, "Main Branch"),
            tx("B", 2024, 1, "Main Branch"),
            tx("C", 2025, 1, "Main Branch"),
        ];

        let spec = FilterSpec {
            years: BTreeSet::from([2023, 2025]),
            offset: 0,
            limit: 10,
            ..FilterSpec::default()
        };

        let result = filter(&txs, &spec);
        assert_eq!(result.total, 2);
        let invoices: Vec<&str> = result
            .matches
            .iter()
            .map(|t| t.invoice_number.as_str())
            .collect();
        assert_eq!(invoices, vec!["A", "C"]);
    }

    #[test]
    fn test_offset_past_end_yields_empty_page() {
        let txs = vec![tx("A", 2024, 1, "Main Branch")];
        let spec = year_spec(2024, 5, 10);

        let result = filter(&txs, &spec);
        assert!(result.matches.is_empty());
        assert_eq!(result.total, 1);
        assert!(!result.has_more(&spec));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let txs = vec![
            tx("A", 2024, 1, "Main Branch"),
            tx("B", 2024, 2, "Main Branch"),
        ];
        let before = txs.clone();

        let _ = filter(&txs, &year_spec(2024, 0, 1));
        assert_eq!(txs, before);
    }
}
