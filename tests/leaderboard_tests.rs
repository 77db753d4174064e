// Copyright (c) 2025 Rupeeclip Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rupeeclip::leaderboard::{badge_for, compose, user_rank};

#[test]
fn zero_points_ranks_last_among_peers() {
    let board = compose("You", 0, 0);
    assert_eq!(board.len(), 9);
    assert_eq!(user_rank(&board), 9);
    assert!(board[8].is_user);
}

#[test]
fn board_is_sorted_descending() {
    let board = compose("You", 600, 24);
    for pair in board.windows(2) {
        assert!(pair[0].points >= pair[1].points);
    }
    // 600 beats Sneha (550) but not Amit (625)
    assert_eq!(user_rank(&board), 4);
}

#[test]
fn ties_keep_peer_precedence() {
    // Kavya Iyer holds 275; an equal user sorts after her.
    let board = compose("You", 275, 11);
    assert_eq!(user_rank(&board), 9);
    assert_eq!(board[7].name, "Kavya Iyer");
}

#[test]
fn user_name_defaults_when_empty() {
    let board = compose("", 900, 36);
    assert_eq!(user_rank(&board), 1);
    assert_eq!(board[0].name, "You");
    assert!(board[0].is_user);
}

#[test]
fn badge_tiers_follow_point_thresholds() {
    assert_eq!(badge_for(0).level, "Bronze");
    assert_eq!(badge_for(249).level, "Bronze");
    assert_eq!(badge_for(250).level, "Silver");
    assert_eq!(badge_for(499).level, "Silver");
    assert_eq!(badge_for(500).level, "Gold");

    assert_eq!(badge_for(100).next_points, Some(250));
    assert_eq!(badge_for(300).next_points, Some(500));
    assert_eq!(badge_for(700).next_points, None);
}

#[test]
fn user_level_comes_from_badge() {
    let board = compose("You", 250, 10);
    let user = board.iter().find(|e| e.is_user).unwrap();
    assert_eq!(user.level, "Silver");
}
