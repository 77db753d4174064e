// Copyright (c) 2025 Rupeeclip Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// File-level CSV import failures. Row-level problems are counted and
/// skipped, never raised.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("CSV must have a header row and at least one data row")]
    TooFewLines,
    #[error("CSV must contain date, name/description, and amount columns (found headers: {0})")]
    MissingColumns(String),
    #[error("no valid transactions found in CSV")]
    EmptyImport,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("amount must be a positive number")]
    NonPositiveAmount,
    #[error("monthly budget cannot be negative")]
    NegativeBudget,
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
}
