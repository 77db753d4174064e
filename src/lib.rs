// Copyright (c) 2025 Rupeeclip Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod achievements;
pub mod analytics;
pub mod categories;
pub mod cli;
pub mod commands;
pub mod db;
pub mod errors;
pub mod leaderboard;
pub mod models;
pub mod refresh;
pub mod utils;
