// Copyright (c) 2025 Rupeeclip Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod doctor;
pub mod goals;
pub mod importer;
pub mod report;
pub mod rewards;
pub mod settings;
pub mod subscriptions;
pub mod transactions;
