// Copyright (c) 2025 Rupeeclip Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;

use crate::models::{Transaction, UserSettings};

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<String> {
    chrono::NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok(s.to_string())
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Rupee display with Indian digit grouping: 1234567.5 -> ₹12,34,567.50.
pub fn fmt_rupees(d: &Decimal) -> String {
    let v = d.round_dp(2);
    let sign = if v.is_sign_negative() && !v.is_zero() {
        "-"
    } else {
        ""
    };
    let s = format!("{:.2}", v.abs());
    let (int_part, frac_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));
    format!("{}₹{}.{}", sign, group_indian(int_part), frac_part)
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (h, t) = rest.split_at(rest.len() - 2);
        groups.push(t);
        rest = h;
    }
    groups.push(rest);
    let mut out = String::new();
    for g in groups.iter().rev() {
        out.push_str(g);
        out.push(',');
    }
    out.push_str(tail);
    out
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

pub fn get_settings(conn: &Connection) -> Result<UserSettings> {
    let budget: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key='monthly_budget'",
            [],
            |r| r.get(0),
        )
        .optional()?;
    let display_name: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key='display_name'",
            [],
            |r| r.get(0),
        )
        .optional()?;
    let monthly_budget = match budget {
        Some(s) => s
            .parse::<Decimal>()
            .with_context(|| format!("Invalid stored budget '{}'", s))?,
        None => Decimal::ZERO,
    };
    Ok(UserSettings {
        monthly_budget,
        display_name,
    })
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

/// Full transaction history, newest first. Dashboard "recent" slicing and
/// both engines rely on this ordering.
pub fn fetch_transactions(conn: &Connection) -> Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, name, category, amount, icon, created_at
         FROM transactions ORDER BY date DESC, id DESC",
    )?;
    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let date_s: String = r.get(1)?;
        let name: String = r.get(2)?;
        let category: String = r.get(3)?;
        let amount_s: String = r.get(4)?;
        let icon: Option<String> = r.get(5)?;
        let created_s: String = r.get(6)?;
        let date = NaiveDate::parse_from_str(&date_s, "%Y-%m-%d")
            .with_context(|| format!("Invalid stored date '{}'", date_s))?;
        let amount = amount_s
            .parse::<Decimal>()
            .with_context(|| format!("Invalid stored amount '{}'", amount_s))?;
        let created_at = NaiveDateTime::parse_from_str(&created_s, "%Y-%m-%d %H:%M:%S")
            .unwrap_or_else(|_| date.and_hms_opt(0, 0, 0).unwrap_or_default());
        out.push(Transaction {
            id,
            date,
            name,
            category,
            amount,
            icon,
            created_at,
        });
    }
    Ok(out)
}
