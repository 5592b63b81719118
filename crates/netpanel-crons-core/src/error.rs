// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the cron schedule core.

use thiserror::Error;

/// Result type for crons operations.
pub type Result<T> = std::result::Result<T, CronsError>;

/// Errors produced by the next-run engine.
///
/// The preset codec itself (`infer`, `expression`, `is_well_formed`) is total
/// and never returns these.
#[derive(Debug, Error)]
pub enum CronsError {
	#[error("invalid cron expression: {0}")]
	InvalidCronExpression(String),

	#[error("invalid timezone: {0}")]
	InvalidTimezone(String),

	#[error("internal error: {0}")]
	Internal(String),
}
