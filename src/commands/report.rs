// Copyright (c) 2025 Rupeeclip Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{self, BudgetPeriod, Trend};
use crate::utils::{fetch_transactions, fmt_rupees, get_settings, maybe_print_json, pretty_table};
use anyhow::{anyhow, Result};
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("dashboard", sub)) => dashboard(conn, sub)?,
        Some(("categories", sub)) => categories(conn, sub)?,
        Some(("weekly", sub)) => weekly(conn, sub)?,
        Some(("insights", sub)) => insights(conn, sub)?,
        _ => {}
    }
    Ok(())
}

/// One-line month summary, re-rendered whenever a mutation publishes on
/// the refresh bus.
pub fn render_month_summary(conn: &Connection) -> Result<()> {
    let txs = fetch_transactions(conn)?;
    let settings = get_settings(conn)?;
    let stats = analytics::dashboard_stats(
        &txs,
        settings.monthly_budget,
        chrono::Local::now().naive_local(),
        0,
        BudgetPeriod::Monthly,
    );
    println!(
        "This month: {} spent of {} ({:.1}% used)",
        fmt_rupees(&stats.total_spent),
        fmt_rupees(&settings.monthly_budget),
        stats.percentage_used
    );
    Ok(())
}

fn dashboard(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let week = *sub.get_one::<u32>("week").unwrap_or(&0);
    let period_s = sub.get_one::<String>("period").unwrap();
    let period = BudgetPeriod::parse(period_s)
        .ok_or_else(|| anyhow!("Invalid period '{}', expected daily/weekly/monthly", period_s))?;

    let txs = fetch_transactions(conn)?;
    let settings = get_settings(conn)?;
    let stats = analytics::dashboard_stats(
        &txs,
        settings.monthly_budget,
        chrono::Local::now().naive_local(),
        week,
        period,
    );

    if maybe_print_json(json_flag, jsonl_flag, &stats)? {
        return Ok(());
    }

    println!(
        "{}: {} of {}",
        period.label(),
        fmt_rupees(&stats.period_spent),
        fmt_rupees(&stats.period_budget)
    );
    // Overspend reads as >100% here on purpose.
    println!(
        "Spent: {:.1}%   Remaining: {}",
        stats.period_percentage,
        fmt_rupees(&(stats.period_budget - stats.period_spent).max(Decimal::ZERO))
    );
    println!();
    println!("Income this month:   {}", fmt_rupees(&stats.total_income));
    println!("Expenses this month: {}", fmt_rupees(&stats.total_spent));
    println!(
        "Budget remaining:    {} ({:.1}% used)",
        fmt_rupees(&stats.remaining),
        stats.percentage_used
    );

    if !stats.category_data.is_empty() {
        let rows: Vec<Vec<String>> = stats
            .category_data
            .iter()
            .take(5)
            .map(|c| vec![c.name.clone(), fmt_rupees(&c.amount)])
            .collect();
        println!("{}", pretty_table(&["Top Category", "Spent"], rows));
    }

    if !stats.recent_transactions.is_empty() {
        let rows: Vec<Vec<String>> = stats
            .recent_transactions
            .iter()
            .map(|t| {
                vec![
                    t.date.to_string(),
                    t.icon.clone().unwrap_or_default(),
                    t.name.clone(),
                    t.category.clone(),
                    fmt_rupees(&t.amount),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "", "Name", "Category", "Amount"], rows)
        );
    }
    Ok(())
}

fn categories(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let txs = fetch_transactions(conn)?;
    let settings = get_settings(conn)?;
    let stats = analytics::dashboard_stats(
        &txs,
        settings.monthly_budget,
        chrono::Local::now().naive_local(),
        0,
        BudgetPeriod::Monthly,
    );

    if maybe_print_json(json_flag, jsonl_flag, &stats.category_data)? {
        return Ok(());
    }
    let total = stats.total_spent;
    let rows: Vec<Vec<String>> = stats
        .category_data
        .iter()
        .map(|c| {
            let share = if total > Decimal::ZERO {
                c.amount / total * Decimal::from(100)
            } else {
                Decimal::ZERO
            };
            vec![
                format!("{} {}", crate::categories::icon_for(&c.name), c.name),
                fmt_rupees(&c.amount),
                format!("{:.1}%", share),
            ]
        })
        .collect();
    if rows.is_empty() {
        println!("No expenses this month");
    } else {
        println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    }
    Ok(())
}

fn weekly(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let week = *sub.get_one::<u32>("week").unwrap_or(&0);
    let txs = fetch_transactions(conn)?;
    let settings = get_settings(conn)?;
    let stats = analytics::dashboard_stats(
        &txs,
        settings.monthly_budget,
        chrono::Local::now().naive_local(),
        week,
        BudgetPeriod::Weekly,
    );
    let rows: Vec<Vec<String>> = stats
        .weekly_data
        .iter()
        .map(|d| vec![d.label.clone(), fmt_rupees(&d.amount)])
        .collect();
    println!("{}", pretty_table(&["Day", "Spent"], rows));
    Ok(())
}

fn insights(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let txs = fetch_transactions(conn)?;
    let insights = analytics::analyze(&txs);

    if maybe_print_json(json_flag, jsonl_flag, &insights)? {
        return Ok(());
    }

    println!("Total spent:    {}", fmt_rupees(&insights.total_spent));
    println!("Total income:   {}", fmt_rupees(&insights.total_income));
    if let Some(top) = &insights.top_category {
        println!(
            "Top category:   {} ({})",
            top.category,
            fmt_rupees(&top.amount)
        );
    }
    if let Some((name, amount)) = &insights.largest_expense {
        println!("Largest expense: {} ({})", name, fmt_rupees(amount));
    }
    println!("Average daily:  {}", fmt_rupees(&insights.average_daily));
    let trend = match insights.trend {
        Trend::Increasing => "increasing",
        Trend::Decreasing => "decreasing",
        Trend::Stable => "stable",
    };
    println!("Spending trend: {}", trend);
    println!("Savings rate:   {:.1}%", insights.savings_rate);
    Ok(())
}
