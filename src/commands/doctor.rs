// Copyright (c) 2025 Rupeeclip Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Zero-amount transactions carry no meaning
    let mut stmt = conn.prepare("SELECT id, name, amount FROM transactions")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let name: String = r.get(1)?;
        let amount_s: String = r.get(2)?;
        match amount_s.parse::<Decimal>() {
            Ok(a) if a.is_zero() => {
                rows.push(vec!["zero_amount".into(), format!("tx {} '{}'", id, name)]);
            }
            Ok(_) => {}
            Err(_) => {
                rows.push(vec![
                    "unparseable_amount".into(),
                    format!("tx {} '{}': {}", id, name, amount_s),
                ]);
            }
        }
    }

    // 2) Off-palette categories fall back to the default icon/color
    let mut stmt2 = conn.prepare("SELECT DISTINCT category FROM transactions")?;
    let mut cur2 = stmt2.query([])?;
    while let Some(r) = cur2.next()? {
        let c: String = r.get(0)?;
        if !categories::is_canonical(&c) {
            rows.push(vec!["unknown_category".into(), c]);
        }
    }

    // 3) Goals saved past their target
    let mut stmt3 =
        conn.prepare("SELECT id, name, target_amount, current_amount FROM goals")?;
    let mut cur3 = stmt3.query([])?;
    while let Some(r) = cur3.next()? {
        let id: i64 = r.get(0)?;
        let name: String = r.get(1)?;
        let target: String = r.get(2)?;
        let current: String = r.get(3)?;
        if let (Ok(t), Ok(c)) = (target.parse::<Decimal>(), current.parse::<Decimal>()) {
            if c > t {
                rows.push(vec![
                    "goal_over_target".into(),
                    format!("goal {} '{}' ({} > {})", id, name, c, t),
                ]);
            }
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
