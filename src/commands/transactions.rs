// Copyright (c) 2025 Rupeeclip Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories;
use crate::errors::ValidationError;
use crate::refresh::RefreshBus;
use crate::utils::{
    fmt_rupees, maybe_print_json, parse_date, parse_decimal, parse_month, pretty_table,
};
use anyhow::Result;
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(conn: &Connection, bus: &mut RefreshBus<'_>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            add(conn, sub)?;
            bus.publish();
        }
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            let n = conn.execute("DELETE FROM transactions WHERE id=?1", params![id])?;
            if n == 0 {
                println!("No transaction with id {}", id);
            } else {
                println!("Deleted transaction {}", id);
                bus.publish();
            }
        }
        Some(("clear", _)) => {
            let n = conn.execute("DELETE FROM transactions", [])?;
            println!("Deleted {} transactions", n);
            bus.publish();
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap().trim())?;
    let category = sub.get_one::<String>("category").unwrap().trim().to_string();
    let income = sub.get_flag("income");
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d.trim())?,
        None => chrono::Local::now().date_naive(),
    };

    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount.into());
    }
    if name.is_empty() {
        return Err(ValidationError::MissingField("name").into());
    }

    // Expenses are stored as negative magnitudes.
    let signed = if income { amount.abs() } else { -amount.abs() };
    let icon = sub
        .get_one::<String>("icon")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| categories::icon_for(&category).to_string());

    conn.execute(
        "INSERT INTO transactions(date, name, category, amount, icon)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![date.to_string(), name, category, signed.to_string(), icon],
    )?;
    println!(
        "Recorded {} on {} for '{}' ({})",
        fmt_rupees(&signed),
        date,
        name,
        category
    );
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub name: String,
    pub category: String,
    pub amount: String,
    pub icon: String,
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let mut sql = String::from(
        "SELECT id, date, name, category, amount, icon FROM transactions WHERE 1=1",
    );
    let mut params_vec: Vec<String> = Vec::new();

    if let Some(month) = sub.get_one::<String>("month") {
        sql.push_str(" AND substr(date,1,7)=?");
        params_vec.push(parse_month(month.trim())?);
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        sql.push_str(" AND category=?");
        params_vec.push(cat.into());
    }
    if let Some(term) = sub.get_one::<String>("search") {
        sql.push_str(" AND name LIKE '%' || ? || '%'");
        params_vec.push(term.into());
    }
    sql.push_str(" ORDER BY date DESC, id DESC");
    if let Some(limit) = sub.get_one::<usize>("limit") {
        sql.push_str(" LIMIT ?");
        params_vec.push(limit.to_string());
    }

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = if params_vec.is_empty() {
        stmt.query([])?
    } else {
        let params: Vec<&dyn rusqlite::ToSql> = params_vec
            .iter()
            .map(|s| s as &dyn rusqlite::ToSql)
            .collect();
        stmt.query(rusqlite::params_from_iter(params))?
    };

    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let date: String = r.get(1)?;
        let name: String = r.get(2)?;
        let category: String = r.get(3)?;
        let amount: String = r.get(4)?;
        let icon: Option<String> = r.get(5)?;
        data.push(TransactionRow {
            id,
            date,
            name,
            category,
            amount,
            icon: icon.unwrap_or_default(),
        });
    }
    Ok(data)
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                let amount = r
                    .amount
                    .parse::<Decimal>()
                    .map(|d| fmt_rupees(&d))
                    .unwrap_or_else(|_| r.amount.clone());
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.icon.clone(),
                    r.name.clone(),
                    r.category.clone(),
                    amount,
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "", "Name", "Category", "Amount"], rows)
        );
    }
    Ok(())
}
