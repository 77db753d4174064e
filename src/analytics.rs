// Copyright (c) 2025 Rupeeclip Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Aggregation engine: month-scoped dashboard statistics, the budget
//! period projector, and whole-history spending insights. Everything here
//! is a pure function of `(transactions, budget, now)` so callers own all
//! state and re-run on invalidation.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

use crate::categories;
use crate::models::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl BudgetPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            BudgetPeriod::Daily => "Daily Budget",
            BudgetPeriod::Weekly => "Weekly Budget",
            BudgetPeriod::Monthly => "Monthly Budget",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "daily" => Some(BudgetPeriod::Daily),
            "weekly" => Some(BudgetPeriod::Weekly),
            "monthly" => Some(BudgetPeriod::Monthly),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySlice {
    pub name: String,
    pub amount: Decimal,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayPoint {
    pub label: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_spent: Decimal,
    pub total_income: Decimal,
    pub remaining: Decimal,
    pub percentage_used: Decimal,
    pub category_data: Vec<CategorySlice>,
    pub weekly_data: Vec<DayPoint>,
    pub recent_transactions: Vec<Transaction>,
    pub daily_budget: Decimal,
    pub weekly_budget: Decimal,
    pub period_spent: Decimal,
    pub period_budget: Decimal,
    pub period_percentage: Decimal,
}

const DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);
// Average weeks per month; the weekly budget is monthly / 4.33.
const WEEKS_PER_MONTH: Decimal = Decimal::from_parts(433, 0, 0, false, 2);

fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    if whole > Decimal::ZERO {
        part / whole * Decimal::from(100)
    } else {
        Decimal::ZERO
    }
}

fn expense_sum<'a>(txs: impl Iterator<Item = &'a Transaction>) -> Decimal {
    txs.filter(|t| t.amount < Decimal::ZERO)
        .map(|t| t.amount.abs())
        .sum()
}

/// Sunday-start beginning of the week `offset` weeks back from `today`.
pub fn week_start(today: NaiveDate, offset: u32) -> NaiveDate {
    let back = today.weekday().num_days_from_sunday() as i64 + 7 * offset as i64;
    today - Duration::days(back)
}

/// Compute the full dashboard view. `transactions` must be newest first;
/// the first five feed the recent list unchanged.
pub fn dashboard_stats(
    transactions: &[Transaction],
    monthly_budget: Decimal,
    now: NaiveDateTime,
    week_offset: u32,
    period: BudgetPeriod,
) -> DashboardStats {
    let today = now.date();
    let month_txs: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.date.month() == today.month() && t.date.year() == today.year())
        .collect();

    let total_spent = expense_sum(month_txs.iter().copied());
    let total_income: Decimal = month_txs
        .iter()
        .filter(|t| t.amount > Decimal::ZERO)
        .map(|t| t.amount)
        .sum();

    let mut by_category: HashMap<&str, Decimal> = HashMap::new();
    for t in month_txs.iter().filter(|t| t.amount < Decimal::ZERO) {
        let cat = if t.category.is_empty() {
            "Other"
        } else {
            t.category.as_str()
        };
        *by_category.entry(cat).or_insert(Decimal::ZERO) += t.amount.abs();
    }
    let mut category_data: Vec<CategorySlice> = by_category
        .into_iter()
        .map(|(name, amount)| CategorySlice {
            color: categories::color_for(name),
            name: name.to_string(),
            amount,
        })
        .collect();
    category_data.sort_by(|a, b| b.amount.cmp(&a.amount));

    let start = week_start(today, week_offset);
    let weekly_data: Vec<DayPoint> = (0..7)
        .map(|i| {
            let day = start + Duration::days(i);
            let amount = expense_sum(transactions.iter().filter(|t| t.date == day));
            DayPoint {
                label: day.format("%a %b %-d").to_string(),
                amount,
            }
        })
        .collect();

    let recent_transactions: Vec<Transaction> =
        transactions.iter().take(5).cloned().collect();

    let daily_budget = monthly_budget / DAYS_PER_MONTH;
    let weekly_budget = monthly_budget / WEEKS_PER_MONTH;

    let (period_spent, period_budget) = match period {
        BudgetPeriod::Daily => (
            expense_sum(transactions.iter().filter(|t| t.date == today)),
            daily_budget,
        ),
        BudgetPeriod::Weekly => {
            let ws = week_start(today, 0);
            let we = ws + Duration::days(7);
            (
                expense_sum(transactions.iter().filter(|t| t.date >= ws && t.date < we)),
                weekly_budget,
            )
        }
        BudgetPeriod::Monthly => (total_spent, monthly_budget),
    };

    DashboardStats {
        total_spent,
        total_income,
        remaining: (monthly_budget - total_spent).max(Decimal::ZERO),
        percentage_used: percentage(total_spent, monthly_budget),
        category_data,
        weekly_data,
        recent_transactions,
        daily_budget,
        weekly_budget,
        period_spent,
        period_budget,
        period_percentage: percentage(period_spent, period_budget),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Decimal,
    pub percentage: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct Insights {
    pub total_spent: Decimal,
    pub total_income: Decimal,
    pub top_category: Option<CategoryShare>,
    pub largest_expense: Option<(String, Decimal)>,
    pub average_daily: Decimal,
    pub category_breakdown: Vec<CategoryShare>,
    pub trend: Trend,
    pub savings_rate: Decimal,
}

/// Whole-history analysis shown after a CSV import and via
/// `report insights`. Not month-scoped, unlike the dashboard.
pub fn analyze(transactions: &[Transaction]) -> Insights {
    let expenses: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.amount < Decimal::ZERO)
        .collect();
    let total_spent = expense_sum(transactions.iter());
    let total_income: Decimal = transactions
        .iter()
        .filter(|t| t.amount > Decimal::ZERO)
        .map(|t| t.amount)
        .sum();

    let mut by_category: HashMap<&str, Decimal> = HashMap::new();
    for t in &expenses {
        *by_category.entry(t.category.as_str()).or_insert(Decimal::ZERO) += t.amount.abs();
    }
    let mut category_breakdown: Vec<CategoryShare> = by_category
        .into_iter()
        .map(|(category, amount)| CategoryShare {
            category: category.to_string(),
            percentage: percentage(amount, total_spent),
            amount,
        })
        .collect();
    category_breakdown.sort_by(|a, b| b.amount.cmp(&a.amount));
    let top_category = category_breakdown.first().cloned();

    let largest_expense = expenses
        .iter()
        .max_by_key(|t| t.amount.abs())
        .map(|t| (t.name.clone(), t.amount.abs()));

    let average_daily = if transactions.is_empty() {
        Decimal::ZERO
    } else {
        let min = transactions.iter().map(|t| t.date).min().unwrap_or_default();
        let max = transactions.iter().map(|t| t.date).max().unwrap_or_default();
        let span = (max - min).num_days().max(1);
        total_spent / Decimal::from(span)
    };

    let trend = spending_trend(&expenses);

    let savings_rate = if total_income > Decimal::ZERO {
        percentage(total_income - total_spent, total_income)
    } else {
        Decimal::ZERO
    };

    Insights {
        total_spent,
        total_income,
        top_category,
        largest_expense,
        average_daily,
        category_breakdown,
        trend,
        savings_rate,
    }
}

/// First-half vs second-half mean expense, with a 10% dead band either way.
fn spending_trend(expenses: &[&Transaction]) -> Trend {
    if expenses.len() < 2 {
        return Trend::Stable;
    }
    let mut sorted: Vec<&Transaction> = expenses.to_vec();
    sorted.sort_by_key(|t| t.date);
    let mid = sorted.len() / 2;
    let first: Decimal = sorted[..mid].iter().map(|t| t.amount.abs()).sum();
    let second: Decimal = sorted[mid..].iter().map(|t| t.amount.abs()).sum();
    let first_mean = first / Decimal::from(mid.max(1) as i64);
    let second_mean = second / Decimal::from((sorted.len() - mid).max(1) as i64);

    let upper = first_mean * Decimal::from_parts(11, 0, 0, false, 1);
    let lower = first_mean * Decimal::from_parts(9, 0, 0, false, 1);
    if second_mean > upper {
        Trend::Increasing
    } else if second_mean < lower {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}
