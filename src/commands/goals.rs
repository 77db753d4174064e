// Copyright (c) 2025 Rupeeclip Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::ValidationError;
use crate::models::Goal;
use crate::utils::{fmt_rupees, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use rust_decimal::Decimal;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("progress", sub)) => progress(conn, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            let n = conn.execute("DELETE FROM goals WHERE id=?1", params![id])?;
            if n == 0 {
                println!("No goal with id {}", id);
            } else {
                println!("Deleted goal {}", id);
            }
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let target = parse_decimal(sub.get_one::<String>("target").unwrap().trim())?;
    let deadline = parse_date(sub.get_one::<String>("deadline").unwrap().trim())?;
    let emoji = sub.get_one::<String>("emoji").unwrap().to_string();
    let current = match sub.get_one::<String>("current") {
        Some(s) => parse_decimal(s.trim())?,
        None => Decimal::ZERO,
    };

    if name.is_empty() {
        return Err(ValidationError::MissingField("name").into());
    }
    if target <= Decimal::ZERO || current < Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount.into());
    }

    conn.execute(
        "INSERT INTO goals(name, emoji, target_amount, current_amount, deadline)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            name,
            emoji,
            target.to_string(),
            current.to_string(),
            deadline.to_string()
        ],
    )?;
    println!(
        "Added goal {} '{}': {} by {}",
        emoji,
        name,
        fmt_rupees(&target),
        deadline
    );
    Ok(())
}

/// Progress can only be added, never removed; `current_amount` is
/// monotone under this operation.
fn progress(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap().trim())?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount.into());
    }

    let goal = fetch_goal(conn, id)?;
    let updated = goal.current_amount + amount;
    conn.execute(
        "UPDATE goals SET current_amount=?1 WHERE id=?2",
        params![updated.to_string(), id],
    )?;

    let pct = if goal.target_amount > Decimal::ZERO {
        updated / goal.target_amount * Decimal::from(100)
    } else {
        Decimal::ZERO
    };
    println!(
        "{} '{}' now at {} of {} ({:.1}%)",
        goal.emoji,
        goal.name,
        fmt_rupees(&updated),
        fmt_rupees(&goal.target_amount),
        pct
    );
    if updated >= goal.target_amount {
        println!("🎉 Goal reached!");
    }
    Ok(())
}

pub fn fetch_goal(conn: &Connection, id: i64) -> Result<Goal> {
    let mut stmt = conn.prepare(
        "SELECT id, name, emoji, target_amount, current_amount, deadline FROM goals WHERE id=?1",
    )?;
    let goal = stmt
        .query_row(params![id], |r| {
            Ok((
                r.get::<_, i64>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, String>(2)?,
                r.get::<_, String>(3)?,
                r.get::<_, String>(4)?,
                r.get::<_, String>(5)?,
            ))
        })
        .with_context(|| format!("Goal {} not found", id))?;
    Ok(Goal {
        id: goal.0,
        name: goal.1,
        emoji: goal.2,
        target_amount: goal
            .3
            .parse::<Decimal>()
            .with_context(|| format!("Invalid stored target '{}'", goal.3))?,
        current_amount: goal
            .4
            .parse::<Decimal>()
            .with_context(|| format!("Invalid stored progress '{}'", goal.4))?,
        deadline: NaiveDate::parse_from_str(&goal.5, "%Y-%m-%d")
            .with_context(|| format!("Invalid stored deadline '{}'", goal.5))?,
    })
}

pub fn fetch_goals(conn: &Connection) -> Result<Vec<Goal>> {
    let mut stmt = conn.prepare("SELECT id FROM goals ORDER BY id DESC")?;
    let ids: Vec<i64> = stmt
        .query_map([], |r| r.get(0))?
        .collect::<std::result::Result<_, _>>()?;
    ids.into_iter().map(|id| fetch_goal(conn, id)).collect()
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let goals = fetch_goals(conn)?;
    if maybe_print_json(json_flag, jsonl_flag, &goals)? {
        return Ok(());
    }
    let today = chrono::Local::now().date_naive();
    let rows: Vec<Vec<String>> = goals
        .iter()
        .map(|g| {
            let pct = if g.target_amount > Decimal::ZERO {
                g.current_amount / g.target_amount * Decimal::from(100)
            } else {
                Decimal::ZERO
            };
            let days_left = (g.deadline - today).num_days();
            vec![
                g.id.to_string(),
                format!("{} {}", g.emoji, g.name),
                fmt_rupees(&g.current_amount),
                fmt_rupees(&g.target_amount),
                format!("{:.1}%", pct),
                if days_left < 0 {
                    "overdue".to_string()
                } else {
                    format!("{}d", days_left)
                },
            ]
        })
        .collect();
    if rows.is_empty() {
        println!("No goals yet");
    } else {
        println!(
            "{}",
            pretty_table(
                &["Id", "Goal", "Saved", "Target", "Progress", "Deadline"],
                rows
            )
        );
    }
    Ok(())
}
