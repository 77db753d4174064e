// Copyright (c) 2025 Rupeeclip Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use rupeeclip::achievements::{
    consecutive_day_streak, distinct_months, evaluate, total_points, unlocked_count,
};
use rupeeclip::models::Transaction;
use rust_decimal::Decimal;

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn tx_at(date: &str, hour: u32, amount: &str, category: &str) -> Transaction {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    Transaction {
        id: 0,
        date,
        name: "t".to_string(),
        category: category.to_string(),
        amount: d(amount),
        icon: None,
        created_at: date.and_hms_opt(hour, 0, 0).unwrap(),
    }
}

fn tx(date: &str, amount: &str, category: &str) -> Transaction {
    tx_at(date, 12, amount, category)
}

fn now(date: &str) -> NaiveDateTime {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn by_name<'a>(
    catalog: &'a [rupeeclip::achievements::Achievement],
    name: &str,
) -> &'a rupeeclip::achievements::Achievement {
    catalog.iter().find(|a| a.name == name).unwrap()
}

#[test]
fn catalog_is_always_nineteen_entries() {
    assert_eq!(evaluate(&[], now("2024-03-15")).len(), 19);
    let txs = vec![tx("2024-01-01", "-50", "Food")];
    assert_eq!(evaluate(&txs, now("2024-03-15")).len(), 19);
}

#[test]
fn first_step_unlocks_on_any_transaction() {
    let empty = evaluate(&[], now("2024-03-15"));
    let first = by_name(&empty, "First Step");
    assert!(!first.unlocked);
    assert_eq!(first.progress, 0.0);

    // Monday in a past month: nothing else should unlock.
    let txs = vec![tx("2024-01-01", "-50", "Food")];
    let catalog = evaluate(&txs, now("2024-03-15"));
    let first = by_name(&catalog, "First Step");
    assert!(first.unlocked);
    assert_eq!(first.progress, 100.0);
    assert_eq!(
        first.unlocked_on,
        Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    );
    assert_eq!(unlocked_count(&catalog), 1);
    assert_eq!(total_points(&catalog), 25);
}

#[test]
fn category_master_progress_tracks_distinct_categories() {
    let txs = vec![
        tx("2024-01-01", "-10", "Food"),
        tx("2024-01-01", "-10", "Transport"),
        tx("2024-01-01", "-10", "Bills"),
    ];
    let catalog = evaluate(&txs, now("2024-03-15"));
    let master = by_name(&catalog, "Category Master");
    assert!(!master.unlocked);
    assert_eq!(master.progress, 60.0);

    let more: Vec<Transaction> = ["Food", "Transport", "Bills", "Shopping", "Education"]
        .iter()
        .map(|c| tx("2024-01-01", "-10", c))
        .collect();
    let catalog = evaluate(&more, now("2024-03-15"));
    assert!(by_name(&catalog, "Category Master").unlocked);
}

#[test]
fn streak_breaks_on_any_gap() {
    let txs = vec![
        tx("2024-01-01", "-10", "Food"),
        tx("2024-01-02", "-10", "Food"),
        tx("2024-01-03", "-10", "Food"),
        tx("2024-01-05", "-10", "Food"),
    ];
    assert_eq!(consecutive_day_streak(&txs), 3);

    // Duplicate days count once
    let dup = vec![
        tx("2024-01-01", "-10", "Food"),
        tx("2024-01-01", "-20", "Food"),
        tx("2024-01-02", "-10", "Food"),
    ];
    assert_eq!(consecutive_day_streak(&dup), 2);
    assert_eq!(consecutive_day_streak(&[]), 0);
}

#[test]
fn consistency_and_streak_master_thresholds() {
    let three_days: Vec<Transaction> = (1..=3)
        .map(|i| tx(&format!("2024-01-{:02}", i), "-10", "Food"))
        .collect();
    let catalog = evaluate(&three_days, now("2024-03-15"));
    assert!(by_name(&catalog, "Consistency King").unlocked);
    assert!(!by_name(&catalog, "Streak Master").unlocked);

    let seven_days: Vec<Transaction> = (1..=7)
        .map(|i| tx(&format!("2024-01-{:02}", i), "-10", "Food"))
        .collect();
    let catalog = evaluate(&seven_days, now("2024-03-15"));
    assert!(by_name(&catalog, "Streak Master").unlocked);
    assert!(by_name(&catalog, "Daily Tracker").unlocked);
}

#[test]
fn savings_achievements_are_current_month_only() {
    // 90% savings, but in January while "now" is March: locked.
    let past = vec![
        tx("2024-01-01", "1000", "Income"),
        tx("2024-01-02", "-100", "Food"),
    ];
    let catalog = evaluate(&past, now("2024-03-15"));
    assert!(!by_name(&catalog, "Saving Spree").unlocked);
    assert!(!by_name(&catalog, "Income Earner").unlocked);

    // Same history inside the current month unlocks both tiers.
    let current = vec![
        tx("2024-03-01", "1000", "Income"),
        tx("2024-03-02", "-100", "Food"),
    ];
    let catalog = evaluate(&current, now("2024-03-15"));
    assert!(by_name(&catalog, "Saving Spree").unlocked);
    assert!(by_name(&catalog, "Super Saver").unlocked);
    assert!(by_name(&catalog, "Income Earner").unlocked);
}

#[test]
fn big_spender_and_money_magnet_thresholds() {
    let txs = vec![
        tx("2024-03-01", "-10000", "Shopping"),
        tx("2024-03-02", "50000", "Income"),
    ];
    let catalog = evaluate(&txs, now("2024-03-15"));
    assert!(by_name(&catalog, "Big Spender").unlocked);
    assert!(by_name(&catalog, "Money Magnet").unlocked);

    let small = vec![tx("2024-03-01", "-9999", "Shopping")];
    let catalog = evaluate(&small, now("2024-03-15"));
    assert!(!by_name(&catalog, "Big Spender").unlocked);
}

#[test]
fn weekend_warrior_counts_saturdays_and_sundays() {
    // 2024-01-06 Sat, 2024-01-07 Sun, 2024-01-13 Sat
    let txs = vec![
        tx("2024-01-06", "-10", "Food"),
        tx("2024-01-07", "-10", "Food"),
        tx("2024-01-13", "-10", "Food"),
    ];
    let catalog = evaluate(&txs, now("2024-03-15"));
    assert!(by_name(&catalog, "Weekend Warrior").unlocked);

    let weekdays = vec![
        tx("2024-01-02", "-10", "Food"),
        tx("2024-01-03", "-10", "Food"),
        tx("2024-01-04", "-10", "Food"),
    ];
    let catalog = evaluate(&weekdays, now("2024-03-15"));
    assert!(!by_name(&catalog, "Weekend Warrior").unlocked);
}

#[test]
fn early_bird_uses_creation_hour() {
    let txs = vec![tx_at("2024-01-02", 7, "-10", "Food")];
    let catalog = evaluate(&txs, now("2024-03-15"));
    assert!(by_name(&catalog, "Early Bird").unlocked);

    let late = vec![tx_at("2024-01-02", 9, "-10", "Food")];
    let catalog = evaluate(&late, now("2024-03-15"));
    assert!(!by_name(&catalog, "Early Bird").unlocked);
}

#[test]
fn investment_categories_match_aliases_case_insensitively() {
    let txs = vec![
        tx("2024-01-01", "-500", "Mutual Fund"),
        tx("2024-01-02", "-500", "FD"),
    ];
    let catalog = evaluate(&txs, now("2024-03-15"));
    assert!(by_name(&catalog, "Mutual Fund Explorer").unlocked);
    assert!(by_name(&catalog, "Fixed Deposit Holder").unlocked);
    assert!(!by_name(&catalog, "Stock Market Investor").unlocked);
    assert!(!by_name(&catalog, "SIP Starter").unlocked);

    let sip = vec![tx("2024-01-01", "-500", "sip")];
    let catalog = evaluate(&sip, now("2024-03-15"));
    assert!(by_name(&catalog, "SIP Starter").unlocked);
}

#[test]
fn dedicated_tracker_counts_distinct_months() {
    let txs = vec![
        tx("2023-11-01", "-10", "Food"),
        tx("2023-12-01", "-10", "Food"),
        tx("2024-01-01", "-10", "Food"),
    ];
    assert_eq!(distinct_months(&txs), 3);
    let catalog = evaluate(&txs, now("2024-03-15"));
    assert!(by_name(&catalog, "Dedicated Tracker").unlocked);
}

#[test]
fn points_are_flat_per_unlock() {
    let txs = vec![
        tx("2024-03-01", "1000", "Income"),
        tx("2024-03-02", "-100", "Food"),
    ];
    let catalog = evaluate(&txs, now("2024-03-15"));
    assert_eq!(
        total_points(&catalog),
        unlocked_count(&catalog) as u32 * 25
    );
}
