// Copyright (c) 2025 Rupeeclip Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use rupeeclip::{cli, commands, db, refresh::RefreshBus};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = db::open_or_init()?;

    // Mutating commands publish here; the month summary re-renders.
    let mut bus = RefreshBus::new();
    bus.subscribe(|| {
        if let Err(e) = commands::report::render_month_summary(&conn) {
            eprintln!("refresh failed: {:#}", e);
        }
    });

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("settings", sub)) => commands::settings::handle(&conn, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&conn, &mut bus, sub)?,
        Some(("import", sub)) => commands::importer::handle(&conn, &mut bus, sub)?,
        Some(("report", sub)) => commands::report::handle(&conn, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&conn, sub)?,
        Some(("subscription", sub)) => commands::subscriptions::handle(&conn, sub)?,
        Some(("rewards", sub)) => commands::rewards::handle(&conn, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&conn)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
