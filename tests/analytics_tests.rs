// Copyright (c) 2025 Rupeeclip Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use rupeeclip::analytics::{analyze, dashboard_stats, week_start, BudgetPeriod, Trend};
use rupeeclip::models::Transaction;
use rust_decimal::Decimal;

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn tx(date: &str, amount: &str, category: &str, name: &str) -> Transaction {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    Transaction {
        id: 0,
        date,
        name: name.to_string(),
        category: category.to_string(),
        amount: d(amount),
        icon: None,
        created_at: date.and_hms_opt(12, 0, 0).unwrap(),
    }
}

fn mid_january() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 17)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

#[test]
fn totals_are_month_scoped_and_disjoint() {
    let txs = vec![
        tx("2024-01-05", "-50", "Food", "Coffee"),
        tx("2024-01-10", "-150", "Transport", "Cab"),
        tx("2024-01-12", "1000", "Income", "Salary"),
        tx("2023-12-28", "-999", "Food", "Old dinner"),
    ];
    let stats = dashboard_stats(&txs, d("30000"), mid_january(), 0, BudgetPeriod::Monthly);
    assert_eq!(stats.total_spent, d("200"));
    assert_eq!(stats.total_income, d("1000"));
    assert_eq!(stats.remaining, d("29800"));
}

#[test]
fn empty_history_yields_zeroes() {
    let stats = dashboard_stats(&[], d("10000"), mid_january(), 0, BudgetPeriod::Monthly);
    assert_eq!(stats.total_spent, Decimal::ZERO);
    assert_eq!(stats.total_income, Decimal::ZERO);
    assert!(stats.category_data.is_empty());
    assert!(stats.recent_transactions.is_empty());
    assert_eq!(stats.weekly_data.len(), 7);
    assert_eq!(stats.percentage_used, Decimal::ZERO);
}

#[test]
fn category_breakdown_sorted_with_palette_colors() {
    let txs = vec![
        tx("2024-01-05", "-20", "Food", "Snack"),
        tx("2024-01-06", "-50", "Transport", "Cab"),
        tx("2024-01-07", "-30", "Food", "Lunch"),
        tx("2024-01-08", "-10", "Quirky", "Odd"),
    ];
    let stats = dashboard_stats(&txs, d("1000"), mid_january(), 0, BudgetPeriod::Monthly);
    let names: Vec<&str> = stats.category_data.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Food", "Transport", "Quirky"]);
    assert_eq!(stats.category_data[0].amount, d("50"));
    assert_eq!(stats.category_data[0].color, "#FF6384");
    // Unknown categories fall back to gray
    assert_eq!(stats.category_data[2].color, "#999999");
}

#[test]
fn category_shares_sum_to_one_hundred() {
    let txs = vec![
        tx("2024-01-05", "-50", "Food", "A"),
        tx("2024-01-06", "-30", "Transport", "B"),
        tx("2024-01-07", "-20", "Bills", "C"),
    ];
    let insights = analyze(&txs);
    let sum: Decimal = insights
        .category_breakdown
        .iter()
        .map(|c| c.percentage)
        .sum();
    assert_eq!(sum, d("100"));
}

#[test]
fn weekly_series_has_seven_buckets() {
    // 2024-01-17 is a Wednesday; the week starts Sunday the 14th.
    let txs = vec![
        tx("2024-01-15", "-40", "Food", "Monday lunch"),
        tx("2024-01-15", "-10", "Food", "Monday snack"),
        tx("2024-01-20", "-99", "Food", "Next Saturday"),
    ];
    let stats = dashboard_stats(&txs, d("1000"), mid_january(), 0, BudgetPeriod::Monthly);
    assert_eq!(stats.weekly_data.len(), 7);
    assert_eq!(stats.weekly_data[1].amount, d("50"));
    assert_eq!(stats.weekly_data[0].amount, Decimal::ZERO);
    assert_eq!(stats.weekly_data[6].amount, d("99"));
}

#[test]
fn week_offset_shifts_the_window() {
    let today = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
    assert_eq!(
        week_start(today, 0),
        NaiveDate::from_ymd_opt(2024, 1, 14).unwrap()
    );
    assert_eq!(
        week_start(today, 1),
        NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()
    );
}

#[test]
fn period_projector_divides_monthly_budget() {
    let stats = dashboard_stats(&[], d("30000"), mid_january(), 0, BudgetPeriod::Daily);
    assert_eq!(stats.daily_budget, d("1000"));
    assert_eq!(stats.weekly_budget.round_dp(1), d("6928.4"));
    assert_eq!(stats.period_budget, d("1000"));
}

#[test]
fn daily_period_counts_only_today() {
    let txs = vec![
        tx("2024-01-17", "-75", "Food", "Today"),
        tx("2024-01-16", "-500", "Food", "Yesterday"),
    ];
    let stats = dashboard_stats(&txs, d("3000"), mid_january(), 0, BudgetPeriod::Daily);
    assert_eq!(stats.period_spent, d("75"));
    assert_eq!(stats.period_budget, d("100"));
    assert_eq!(stats.period_percentage, d("75"));
}

#[test]
fn zero_budget_never_divides_by_zero() {
    let txs = vec![tx("2024-01-17", "-75", "Food", "Today")];
    let stats = dashboard_stats(&txs, Decimal::ZERO, mid_january(), 0, BudgetPeriod::Monthly);
    assert_eq!(stats.percentage_used, Decimal::ZERO);
    assert_eq!(stats.period_percentage, Decimal::ZERO);
    assert_eq!(stats.remaining, Decimal::ZERO);
}

#[test]
fn period_percentage_is_not_clamped() {
    let txs = vec![tx("2024-01-10", "-200", "Food", "Blowout")];
    let stats = dashboard_stats(&txs, d("100"), mid_january(), 0, BudgetPeriod::Monthly);
    assert_eq!(stats.period_percentage, d("200"));
    // remaining still floors at zero
    assert_eq!(stats.remaining, Decimal::ZERO);
}

#[test]
fn recent_takes_first_five_in_given_order() {
    let txs: Vec<Transaction> = (1..=7)
        .map(|i| tx(&format!("2024-01-{:02}", i), "-10", "Food", &format!("t{}", i)))
        .collect();
    let stats = dashboard_stats(&txs, d("1000"), mid_january(), 0, BudgetPeriod::Monthly);
    assert_eq!(stats.recent_transactions.len(), 5);
    assert_eq!(stats.recent_transactions[0].name, "t1");
    assert_eq!(stats.recent_transactions[4].name, "t5");
}

#[test]
fn trend_detects_rising_and_falling_spend() {
    let rising = vec![
        tx("2024-01-01", "-10", "Food", "a"),
        tx("2024-01-02", "-10", "Food", "b"),
        tx("2024-01-03", "-100", "Food", "c"),
        tx("2024-01-04", "-100", "Food", "d"),
    ];
    assert_eq!(analyze(&rising).trend, Trend::Increasing);

    let falling = vec![
        tx("2024-01-01", "-100", "Food", "a"),
        tx("2024-01-02", "-100", "Food", "b"),
        tx("2024-01-03", "-10", "Food", "c"),
        tx("2024-01-04", "-10", "Food", "d"),
    ];
    assert_eq!(analyze(&falling).trend, Trend::Decreasing);

    let flat = vec![
        tx("2024-01-01", "-50", "Food", "a"),
        tx("2024-01-02", "-50", "Food", "b"),
    ];
    assert_eq!(analyze(&flat).trend, Trend::Stable);
}

#[test]
fn savings_rate_zero_without_income() {
    let txs = vec![tx("2024-01-01", "-50", "Food", "a")];
    assert_eq!(analyze(&txs).savings_rate, Decimal::ZERO);

    let with_income = vec![
        tx("2024-01-01", "-25", "Food", "a"),
        tx("2024-01-02", "100", "Income", "b"),
    ];
    assert_eq!(analyze(&with_income).savings_rate, d("75"));
}

#[test]
fn largest_expense_and_average_daily() {
    let txs = vec![
        tx("2024-01-01", "-30", "Food", "small"),
        tx("2024-01-03", "-90", "Shopping", "big"),
    ];
    let insights = analyze(&txs);
    assert_eq!(
        insights.largest_expense,
        Some(("big".to_string(), d("90")))
    );
    // 120 spent over a 2-day span
    assert_eq!(insights.average_daily, d("60"));
}
