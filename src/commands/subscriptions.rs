// Copyright (c) 2025 Rupeeclip Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::ValidationError;
use crate::models::Subscription;
use crate::utils::{fmt_rupees, parse_date, parse_decimal, pretty_table};
use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim().to_string();
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap().trim())?;
            let icon = sub.get_one::<String>("icon").unwrap().to_string();
            if amount <= Decimal::ZERO {
                return Err(ValidationError::NonPositiveAmount.into());
            }
            let renewal = match sub.get_one::<String>("renewal") {
                Some(s) => parse_date(s.trim())?,
                None => chrono::Local::now().date_naive() + Duration::days(30),
            };
            conn.execute(
                "INSERT INTO subscriptions(name, icon, amount, renewal_date)
                 VALUES (?1, ?2, ?3, ?4)",
                params![name, icon, amount.to_string(), renewal.to_string()],
            )?;
            println!(
                "Tracking {} {} at {}/month, renews {}",
                icon,
                name,
                fmt_rupees(&amount),
                renewal
            );
        }
        Some(("list", _)) => {
            let subs = fetch_subscriptions(conn)?;
            let monthly_total: Decimal = subs.iter().map(|s| s.amount).sum();
            let rows: Vec<Vec<String>> = subs
                .iter()
                .map(|s| {
                    vec![
                        s.id.to_string(),
                        format!("{} {}", s.icon, s.name),
                        fmt_rupees(&s.amount),
                        s.renewal_date.to_string(),
                    ]
                })
                .collect();
            if rows.is_empty() {
                println!("No subscriptions tracked");
            } else {
                println!(
                    "{}",
                    pretty_table(&["Id", "Subscription", "Amount", "Renews"], rows)
                );
                println!("Total: {}/month", fmt_rupees(&monthly_total));
            }
        }
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            let n = conn.execute("DELETE FROM subscriptions WHERE id=?1", params![id])?;
            if n == 0 {
                println!("No subscription with id {}", id);
            } else {
                println!("Removed subscription {}", id);
            }
        }
        _ => {}
    }
    Ok(())
}

pub fn fetch_subscriptions(conn: &Connection) -> Result<Vec<Subscription>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, icon, amount, renewal_date FROM subscriptions ORDER BY renewal_date",
    )?;
    let mut cur = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let name: String = r.get(1)?;
        let icon: String = r.get(2)?;
        let amount_s: String = r.get(3)?;
        let renewal_s: String = r.get(4)?;
        out.push(Subscription {
            id,
            name,
            icon,
            amount: amount_s
                .parse::<Decimal>()
                .with_context(|| format!("Invalid stored amount '{}'", amount_s))?,
            renewal_date: NaiveDate::parse_from_str(&renewal_s, "%Y-%m-%d")
                .with_context(|| format!("Invalid stored renewal date '{}'", renewal_s))?,
        });
    }
    Ok(out)
}
