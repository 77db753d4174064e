// Copyright (c) 2025 Rupeeclip Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::achievements;
use crate::leaderboard;
use crate::utils::{fetch_transactions, get_settings, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("achievements", sub)) => achievements_cmd(conn, sub)?,
        Some(("leaderboard", sub)) => leaderboard_cmd(conn, sub)?,
        Some(("status", _)) => status(conn)?,
        _ => {}
    }
    Ok(())
}

fn achievements_cmd(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let txs = fetch_transactions(conn)?;
    let catalog = achievements::evaluate(&txs, chrono::Local::now().naive_local());

    if maybe_print_json(json_flag, jsonl_flag, &catalog)? {
        return Ok(());
    }

    let rows: Vec<Vec<String>> = catalog
        .iter()
        .map(|a| {
            let state = if a.unlocked {
                match a.unlocked_on {
                    Some(d) => format!("★ unlocked {}", d),
                    None => "★ unlocked".to_string(),
                }
            } else {
                format!("{:.0}%", a.progress)
            };
            vec![
                a.icon.to_string(),
                a.name.to_string(),
                a.description.to_string(),
                state,
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["", "Achievement", "How", "Status"], rows)
    );
    println!(
        "Unlocked {}/{} for {} points",
        achievements::unlocked_count(&catalog),
        catalog.len(),
        achievements::total_points(&catalog)
    );
    Ok(())
}

fn leaderboard_cmd(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let txs = fetch_transactions(conn)?;
    let settings = get_settings(conn)?;
    let catalog = achievements::evaluate(&txs, chrono::Local::now().naive_local());
    let points = achievements::total_points(&catalog);
    let badges = achievements::unlocked_count(&catalog) as u32;

    if points == 0 {
        println!("Leaderboard locked: earn your first achievement to join the board.");
        return Ok(());
    }

    let user_name = settings.display_name.as_deref().unwrap_or("You");
    let board = leaderboard::compose(user_name, points, badges);
    if maybe_print_json(json_flag, jsonl_flag, &board)? {
        return Ok(());
    }
    let rank = leaderboard::user_rank(&board);
    let rows: Vec<Vec<String>> = board
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let name = if e.is_user {
                format!("{} (You)", e.name)
            } else {
                e.name.clone()
            };
            vec![
                format!("#{}", i + 1),
                e.avatar.clone(),
                name,
                e.level.to_string(),
                e.badges.to_string(),
                e.points.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Rank", "", "Name", "Level", "Badges", "Points"], rows)
    );
    println!("Your rank: #{}", rank);
    Ok(())
}

fn status(conn: &Connection) -> Result<()> {
    let txs = fetch_transactions(conn)?;
    let catalog = achievements::evaluate(&txs, chrono::Local::now().naive_local());
    let points = achievements::total_points(&catalog);
    let badge = leaderboard::badge_for(points);

    println!("{} {} Member", badge.icon, badge.level);
    println!(
        "{} points from {} achievements",
        points,
        achievements::unlocked_count(&catalog)
    );
    match badge.next_points {
        Some(next) => println!("{} points to the next level", next.saturating_sub(points)),
        None => println!("You've reached the highest level!"),
    }
    Ok(())
}
