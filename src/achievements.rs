// Copyright (c) 2025 Rupeeclip Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Achievement engine. The catalog is fixed at 19 entries, recomputed from
//! the full transaction history on every call; nothing is persisted. Each
//! unlocked entry is worth a flat 25 points.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;

use crate::models::Transaction;

pub const POINTS_PER_ACHIEVEMENT: u32 = 25;

#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub unlocked: bool,
    /// 0-100 for display; already clamped.
    pub progress: f64,
    /// Only the first achievement carries a date: the earliest transaction.
    pub unlocked_on: Option<NaiveDate>,
}

fn entry(
    id: u32,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    unlocked: bool,
    progress: f64,
) -> Achievement {
    Achievement {
        id,
        name,
        description,
        icon,
        unlocked,
        progress: progress.clamp(0.0, 100.0),
        unlocked_on: None,
    }
}

fn ratio_progress(count: usize, needed: usize) -> f64 {
    (count as f64 / needed as f64 * 100.0).min(100.0)
}

const BIG_SPENDER_THRESHOLD: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);
const LARGE_INCOME_THRESHOLD: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);
const DAILY_EXPENSE_CAP: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Longest run of consecutive calendar days with at least one transaction.
/// Gaps other than exactly one day reset the run.
pub fn consecutive_day_streak(transactions: &[Transaction]) -> u32 {
    if transactions.is_empty() {
        return 0;
    }
    let mut dates: Vec<NaiveDate> = transactions
        .iter()
        .map(|t| t.date)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    dates.sort();
    let mut max_streak = 1u32;
    let mut current = 1u32;
    for pair in dates.windows(2) {
        if (pair[1] - pair[0]).num_days() == 1 {
            current += 1;
            max_streak = max_streak.max(current);
        } else {
            current = 1;
        }
    }
    max_streak
}

pub fn distinct_months(transactions: &[Transaction]) -> usize {
    transactions
        .iter()
        .map(|t| (t.date.year(), t.date.month()))
        .collect::<HashSet<_>>()
        .len()
}

fn category_matches(transactions: &[Transaction], aliases: &[&str]) -> bool {
    transactions.iter().any(|t| {
        let c = t.category.to_lowercase();
        aliases.iter().any(|a| c == *a)
    })
}

pub fn evaluate(transactions: &[Transaction], now: NaiveDateTime) -> Vec<Achievement> {
    let today = now.date();
    let month_txs: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.date.month() == today.month() && t.date.year() == today.year())
        .collect();

    let has_transactions = !transactions.is_empty();
    let month_has_transactions = !month_txs.is_empty();

    let month_expense_total: Decimal = month_txs
        .iter()
        .filter(|t| t.amount < Decimal::ZERO)
        .map(|t| t.amount.abs())
        .sum();
    let month_income: Vec<&&Transaction> = month_txs
        .iter()
        .filter(|t| t.amount > Decimal::ZERO)
        .collect();
    let month_income_total: Decimal = month_income.iter().map(|t| t.amount).sum();
    let savings_rate = if month_income_total > Decimal::ZERO {
        ((month_income_total - month_expense_total) / month_income_total)
            .to_f64()
            .unwrap_or(0.0)
    } else {
        0.0
    };

    let unique_categories = transactions
        .iter()
        .map(|t| t.category.as_str())
        .collect::<HashSet<_>>()
        .len();
    let unique_days = transactions
        .iter()
        .map(|t| t.date)
        .collect::<HashSet<_>>()
        .len();
    let streak = consecutive_day_streak(transactions) as usize;
    let weekend_count = transactions
        .iter()
        .filter(|t| matches!(t.date.weekday(), Weekday::Sat | Weekday::Sun))
        .count();
    let early_morning = transactions
        .iter()
        .any(|t| (6..9).contains(&t.created_at.hour()));
    let has_income = !month_income.is_empty();
    let has_month_spend = month_expense_total > Decimal::ZERO;
    let avg_daily_expense = if unique_days > 0 {
        month_expense_total / Decimal::from(unique_days as i64)
    } else {
        Decimal::ZERO
    };
    let has_big_spend = transactions
        .iter()
        .any(|t| t.amount.abs() >= BIG_SPENDER_THRESHOLD);
    let has_large_income = month_income.iter().any(|t| t.amount >= LARGE_INCOME_THRESHOLD);
    let months = distinct_months(transactions);

    let has_stocks = category_matches(transactions, &["stocks", "stock"]);
    let has_mutual_funds =
        category_matches(transactions, &["mutual funds", "mutual fund", "mf"]);
    let has_fd = category_matches(transactions, &["fd", "fixed deposit"]);
    let has_sip = category_matches(transactions, &["sip", "systematic investment plan"]);

    let first_date = transactions.iter().map(|t| t.date).min();

    let budget_boss_progress = if has_month_spend {
        let avg = avg_daily_expense.to_f64().unwrap_or(0.0);
        (1.0 - avg / 500.0) * 100.0
    } else {
        0.0
    };

    let mut first_step = entry(
        1,
        "First Step",
        "Add your first transaction",
        "🎯",
        has_transactions,
        if has_transactions { 100.0 } else { 0.0 },
    );
    first_step.unlocked_on = if has_transactions { first_date } else { None };

    vec![
        first_step,
        entry(
            2,
            "Category Master",
            "Use 5 different categories",
            "📊",
            unique_categories >= 5,
            ratio_progress(unique_categories, 5),
        ),
        entry(
            3,
            "Saving Spree",
            "Save 50% of your income in a month",
            "💰",
            month_has_transactions && savings_rate >= 0.5,
            savings_rate * 100.0,
        ),
        entry(
            4,
            "Daily Tracker",
            "Log transactions for 7 different days",
            "📅",
            unique_days >= 7,
            ratio_progress(unique_days, 7),
        ),
        entry(
            5,
            "Big Spender",
            "Record a transaction of 10,000 or more",
            "💸",
            has_big_spend,
            if has_big_spend { 100.0 } else { 0.0 },
        ),
        entry(
            6,
            "Consistency King",
            "Log transactions for 3 consecutive days",
            "🔥",
            streak >= 3,
            ratio_progress(streak, 3),
        ),
        entry(
            7,
            "Weekend Warrior",
            "Add 3 transactions on weekends",
            "🏖️",
            weekend_count >= 3,
            ratio_progress(weekend_count, 3),
        ),
        entry(
            8,
            "Early Bird",
            "Add a transaction before 9 AM",
            "🌅",
            early_morning,
            if early_morning { 100.0 } else { 0.0 },
        ),
        entry(
            9,
            "Income Earner",
            "Record your first income transaction",
            "💵",
            has_income,
            if has_income { 100.0 } else { 0.0 },
        ),
        entry(
            10,
            "Budget Boss",
            "Keep daily expenses under 500",
            "👑",
            has_month_spend && avg_daily_expense <= DAILY_EXPENSE_CAP,
            budget_boss_progress,
        ),
        entry(
            11,
            "Money Magnet",
            "Record an income of 50,000 or more",
            "🧲",
            has_large_income,
            if has_large_income { 100.0 } else { 0.0 },
        ),
        entry(
            12,
            "Dedicated Tracker",
            "Track transactions for 3 different months",
            "📆",
            months >= 3,
            ratio_progress(months, 3),
        ),
        entry(
            13,
            "Super Saver",
            "Save 75% of your income in a month",
            "🌟",
            month_has_transactions && savings_rate >= 0.75,
            savings_rate * 100.0,
        ),
        entry(
            14,
            "Category Explorer",
            "Use 10 different categories",
            "🗺️",
            unique_categories >= 10,
            ratio_progress(unique_categories, 10),
        ),
        entry(
            15,
            "Streak Master",
            "Log transactions for 7 consecutive days",
            "⚡",
            streak >= 7,
            ratio_progress(streak, 7),
        ),
        entry(
            16,
            "Stock Market Investor",
            "Add money to stocks",
            "📈",
            has_stocks,
            if has_stocks { 100.0 } else { 0.0 },
        ),
        entry(
            17,
            "Mutual Fund Explorer",
            "Invest in mutual funds",
            "🎯",
            has_mutual_funds,
            if has_mutual_funds { 100.0 } else { 0.0 },
        ),
        entry(
            18,
            "Fixed Deposit Holder",
            "Open a Fixed Deposit",
            "🏦",
            has_fd,
            if has_fd { 100.0 } else { 0.0 },
        ),
        entry(
            19,
            "SIP Starter",
            "Start a Systematic Investment Plan",
            "💎",
            has_sip,
            if has_sip { 100.0 } else { 0.0 },
        ),
    ]
}

pub fn unlocked_count(catalog: &[Achievement]) -> usize {
    catalog.iter().filter(|a| a.unlocked).count()
}

pub fn total_points(catalog: &[Achievement]) -> u32 {
    unlocked_count(catalog) as u32 * POINTS_PER_ACHIEVEMENT
}
