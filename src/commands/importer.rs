// Copyright (c) 2025 Rupeeclip Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! CSV transaction import. Header columns are detected by substring role
//! matching; data rows are parsed with per-row error isolation, so a bad
//! row is counted and skipped while the rest of the file still lands.
//! The import as a whole is deliberately not atomic.

use crate::categories;
use crate::errors::ImportError;
use crate::refresh::RefreshBus;
use crate::utils::fmt_rupees;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use rusqlite::{params, Connection};
use rust_decimal::Decimal;

pub fn handle(conn: &Connection, bus: &mut RefreshBus<'_>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => {
            let path = sub.get_one::<String>("path").unwrap().trim();
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Open CSV {}", path))?;
            let summary = import_transactions(conn, &text, chrono::Local::now().date_naive())?;
            println!(
                "Imported {} transactions ({} rows skipped)",
                summary.inserted, summary.skipped
            );
            println!(
                "Expense total from CSV: {}",
                fmt_rupees(&summary.expense_total)
            );
            bus.publish();
            Ok(())
        }
        _ => Ok(()),
    }
}

#[derive(Debug)]
pub struct ImportSummary {
    pub inserted: usize,
    pub skipped: usize,
    pub expense_total: Decimal,
}

struct ColumnMap {
    date: usize,
    name: usize,
    amount: usize,
    category: Option<usize>,
}

fn detect_columns(header_line: &str) -> Result<ColumnMap, ImportError> {
    let headers: Vec<String> = header_line
        .to_lowercase()
        .split(',')
        .map(|h| h.trim().trim_matches('"').to_string())
        .collect();

    let find = |needles: &[&str]| {
        headers
            .iter()
            .position(|h| needles.iter().any(|n| h.contains(n)))
    };

    let date = find(&["date"]);
    let name = find(&["name", "description", "merchant"]);
    let amount = find(&["amount", "price", "total"]);
    let category = find(&["category", "type"]);

    match (date, name, amount) {
        (Some(date), Some(name), Some(amount)) => Ok(ColumnMap {
            date,
            name,
            amount,
            category,
        }),
        _ => Err(ImportError::MissingColumns(headers.join(", "))),
    }
}

/// Accept common bank-export date shapes; anything else falls back to the
/// import day.
fn normalize_date(raw: &str, fallback: NaiveDate) -> NaiveDate {
    let s = raw.trim();
    let candidate = s.get(..10).unwrap_or(s);
    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y", "%d/%m/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(candidate, fmt) {
            return d;
        }
    }
    fallback
}

fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse::<Decimal>().ok()
}

pub fn import_transactions(
    conn: &Connection,
    text: &str,
    today: NaiveDate,
) -> Result<ImportSummary> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() < 2 {
        return Err(ImportError::TooFewLines.into());
    }

    let cols = detect_columns(lines[0])?;

    let body = lines[1..].join("\n");
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let mut inserted = 0usize;
    let mut skipped = 0usize;
    let mut expense_total = Decimal::ZERO;

    for result in rdr.records() {
        let rec = match result {
            Ok(r) => r,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        if rec.len() < 3 {
            skipped += 1;
            continue;
        }

        let amount_raw = rec.get(cols.amount).unwrap_or("");
        let mut amount = match parse_amount(amount_raw) {
            Some(a) => a,
            None => {
                skipped += 1;
                continue;
            }
        };

        let category = cols
            .category
            .and_then(|i| rec.get(i))
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .unwrap_or("Other")
            .to_string();
        let is_income = {
            let c = category.to_lowercase();
            c.contains("income") || c.contains("salary")
        };
        // Sign follows the category, not the CSV: expenses are stored as
        // negative magnitudes, income as positive.
        amount = if is_income {
            amount.abs()
        } else {
            -amount.abs()
        };

        let name = rec
            .get(cols.name)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .unwrap_or("Unknown Transaction")
            .to_string();
        let date = normalize_date(rec.get(cols.date).unwrap_or(""), today);
        let icon = categories::icon_for(&category);

        // Rows are inserted in file order; a failed insert counts as a
        // skipped row and does not block the rest.
        let res = conn.execute(
            "INSERT INTO transactions(date, name, category, amount, icon)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![date.to_string(), name, category, amount.to_string(), icon],
        );
        match res {
            Ok(_) => {
                inserted += 1;
                if amount < Decimal::ZERO {
                    expense_total += amount.abs();
                }
            }
            Err(_) => skipped += 1,
        }
    }

    if inserted == 0 {
        return Err(ImportError::EmptyImport.into());
    }

    Ok(ImportSummary {
        inserted,
        skipped,
        expense_total,
    })
}
