// Copyright (c) 2025 Rupeeclip Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

/// Canonical category names. Free-form categories are accepted everywhere;
/// this list only drives icon/color lookup and the doctor scan.
pub const CANONICAL: [&str; 14] = [
    "Food",
    "Transport",
    "Entertainment",
    "Income",
    "Shopping",
    "Utilities",
    "Bills",
    "Healthcare",
    "Education",
    "Other",
    "Stocks",
    "Mutual Funds",
    "Fixed Deposit",
    "SIP",
];

pub const DEFAULT_ICON: &str = "💰";
pub const DEFAULT_COLOR: &str = "#999999";

pub fn icon_for(category: &str) -> &'static str {
    match category {
        "Food" => "🍔",
        "Transport" => "🚗",
        "Entertainment" => "🎬",
        "Income" => "💰",
        "Shopping" => "🛍️",
        "Bills" => "📄",
        "Healthcare" => "🏥",
        "Education" => "📚",
        "Other" => "💳",
        "Stocks" => "📈",
        "Mutual Funds" => "📊",
        "Fixed Deposit" => "🏦",
        "SIP" => "💰",
        _ => DEFAULT_ICON,
    }
}

pub fn color_for(category: &str) -> &'static str {
    match category {
        "Food" => "#FF6384",
        "Transport" => "#36A2EB",
        "Entertainment" => "#FFCE56",
        "Shopping" => "#4BC0C0",
        "Utilities" => "#9966FF",
        "Bills" => "#FF9F40",
        "Healthcare" => "#FF6384",
        "Education" => "#36A2EB",
        "Stocks" => "#00D9A3",
        "Mutual Funds" => "#0099FF",
        "Fixed Deposit" => "#FFB366",
        "SIP" => "#66BB6A",
        _ => DEFAULT_COLOR,
    }
}

pub fn is_canonical(category: &str) -> bool {
    CANONICAL.contains(&category)
}
