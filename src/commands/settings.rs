// Copyright (c) 2025 Rupeeclip Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::ValidationError;
use crate::utils::{fmt_rupees, get_settings, parse_decimal, set_setting};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("budget", sub)) => {
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap().trim())?;
            if amount < Decimal::ZERO {
                return Err(ValidationError::NegativeBudget.into());
            }
            set_setting(conn, "monthly_budget", &amount.to_string())?;
            println!("Monthly budget set to {}", fmt_rupees(&amount));
        }
        Some(("name", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim().to_string();
            if name.is_empty() {
                return Err(ValidationError::MissingField("name").into());
            }
            set_setting(conn, "display_name", &name)?;
            println!("Display name set to '{}'", name);
        }
        Some(("show", _)) => {
            let s = get_settings(conn)?;
            println!(
                "Monthly budget: {}",
                fmt_rupees(&s.monthly_budget)
            );
            println!(
                "Display name:   {}",
                s.display_name.as_deref().unwrap_or("(not set)")
            );
        }
        _ => {}
    }
    Ok(())
}
