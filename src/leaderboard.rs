// Copyright (c) 2025 Rupeeclip Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Leaderboard composer. The peer roster is fixed sample data; only the
//! current user's entry is computed. A real multi-user board would need
//! server-side point aggregation and is out of scope.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub points: u32,
    pub avatar: String,
    pub level: &'static str,
    pub badges: u32,
    pub is_user: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Badge {
    pub level: &'static str,
    pub icon: &'static str,
    pub next_points: Option<u32>,
}

const PEERS: [(&str, u32, &str, &str, u32); 8] = [
    ("Rahul Sharma", 875, "👨", "Gold", 35),
    ("Priya Patel", 750, "👩", "Gold", 30),
    ("Amit Kumar", 625, "👨‍💼", "Silver", 25),
    ("Sneha Reddy", 550, "👩‍💼", "Silver", 22),
    ("Vikram Singh", 475, "🧑", "Silver", 19),
    ("Anjali Gupta", 400, "👧", "Bronze", 16),
    ("Rohan Mehta", 325, "🧑‍💻", "Bronze", 13),
    ("Kavya Iyer", 275, "👩‍🎓", "Bronze", 11),
];

pub fn badge_for(points: u32) -> Badge {
    if points >= 500 {
        Badge {
            level: "Gold",
            icon: "🥇",
            next_points: None,
        }
    } else if points >= 250 {
        Badge {
            level: "Silver",
            icon: "🥈",
            next_points: Some(500),
        }
    } else {
        Badge {
            level: "Bronze",
            icon: "🥉",
            next_points: Some(250),
        }
    }
}

/// Merge the user into the roster, descending by points. The sort is
/// stable, so peers keep precedence over the user on equal points.
pub fn compose(user_name: &str, points: u32, badges: u32) -> Vec<LeaderboardEntry> {
    let mut board: Vec<LeaderboardEntry> = PEERS
        .iter()
        .map(|(name, pts, avatar, level, b)| LeaderboardEntry {
            name: (*name).to_string(),
            points: *pts,
            avatar: (*avatar).to_string(),
            level,
            badges: *b,
            is_user: false,
        })
        .collect();
    board.push(LeaderboardEntry {
        name: if user_name.is_empty() {
            "You".to_string()
        } else {
            user_name.to_string()
        },
        points,
        avatar: "🎮".to_string(),
        level: badge_for(points).level,
        badges,
        is_user: true,
    });
    board.sort_by(|a, b| b.points.cmp(&a.points));
    board
}

/// 1-indexed rank of the user entry after sorting.
pub fn user_rank(board: &[LeaderboardEntry]) -> usize {
    board
        .iter()
        .position(|e| e.is_user)
        .map(|i| i + 1)
        .unwrap_or(board.len())
}
