// Copyright (c) 2025 Rupeeclip Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("rupeeclip")
        .about("Personal budgeting, savings goals, and gamified spending rewards")
        .version(clap::crate_version!())
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Initialize the local database"))
        .subcommand(
            Command::new("settings")
                .about("Budget and profile settings")
                .subcommand(
                    Command::new("budget").about("Set the monthly budget").arg(
                        Arg::new("amount")
                            .long("amount")
                            .required(true)
                            .help("Monthly budget amount"),
                    ),
                )
                .subcommand(
                    Command::new("name").about("Set the display name").arg(
                        Arg::new("name")
                            .long("name")
                            .required(true)
                            .help("Display name"),
                    ),
                )
                .subcommand(Command::new("show").about("Show current settings")),
        )
        .subcommand(
            Command::new("tx")
                .about("Manage transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Positive amount; stored negative unless --income"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .default_value("Other"),
                        )
                        .arg(
                            Arg::new("income")
                                .long("income")
                                .action(ArgAction::SetTrue)
                                .help("Record as income instead of expense"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD, defaults to today"),
                        )
                        .arg(Arg::new("icon").long("icon").help("Display glyph")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(Arg::new("month").long("month").help("Filter by YYYY-MM"))
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .help("Substring match on the name"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm").about("Delete one transaction").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                )
                .subcommand(Command::new("clear").about("Delete all transactions")),
        )
        .subcommand(
            Command::new("import").about("Import records").subcommand(
                Command::new("transactions")
                    .about("Import transactions from a CSV file")
                    .arg(Arg::new("path").long("path").required(true)),
            ),
        )
        .subcommand(
            Command::new("report")
                .about("Spending reports")
                .subcommand(json_flags(
                    Command::new("dashboard")
                        .about("Month overview with budget usage")
                        .arg(
                            Arg::new("week")
                                .long("week")
                                .value_parser(value_parser!(u32))
                                .default_value("0")
                                .help("Weeks back for the trend series"),
                        )
                        .arg(
                            Arg::new("period")
                                .long("period")
                                .default_value("monthly")
                                .help("daily, weekly, or monthly"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("categories").about("Current-month category breakdown"),
                ))
                .subcommand(
                    Command::new("weekly")
                        .about("Seven-day expense series")
                        .arg(
                            Arg::new("week")
                                .long("week")
                                .value_parser(value_parser!(u32))
                                .default_value("0"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("insights").about("Whole-history spending analysis"),
                )),
        )
        .subcommand(
            Command::new("goal")
                .about("Savings goals")
                .subcommand(
                    Command::new("add")
                        .about("Create a goal")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("target").long("target").required(true))
                        .arg(
                            Arg::new("deadline")
                                .long("deadline")
                                .required(true)
                                .help("YYYY-MM-DD"),
                        )
                        .arg(Arg::new("emoji").long("emoji").default_value("🎯"))
                        .arg(
                            Arg::new("current")
                                .long("current")
                                .help("Starting progress, defaults to 0"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List goals")))
                .subcommand(
                    Command::new("progress")
                        .about("Add progress toward a goal")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("amount").long("amount").required(true)),
                )
                .subcommand(
                    Command::new("rm").about("Delete a goal").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("subscription")
                .about("Recurring subscriptions")
                .subcommand(
                    Command::new("add")
                        .about("Track a subscription")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("icon").long("icon").default_value("📦"))
                        .arg(
                            Arg::new("renewal")
                                .long("renewal")
                                .help("YYYY-MM-DD, defaults to 30 days out"),
                        ),
                )
                .subcommand(Command::new("list").about("List subscriptions"))
                .subcommand(
                    Command::new("rm").about("Remove a subscription").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("rewards")
                .about("Achievements and leaderboard")
                .subcommand(json_flags(
                    Command::new("achievements").about("Achievement catalog with progress"),
                ))
                .subcommand(json_flags(
                    Command::new("leaderboard").about("Community leaderboard standing"),
                ))
                .subcommand(Command::new("status").about("Badge level and points")),
        )
        .subcommand(Command::new("doctor").about("Scan stored data for problems"))
}
