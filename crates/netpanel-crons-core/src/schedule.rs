// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Next-run calculation for panel cron expressions.
//!
//! The preset codec never validates field ranges; this module is the strict
//! side. It hands expressions to the `cron` crate to compute when a schedule
//! will next fire, in the timezone the panel is configured for. Results are
//! advisory: editors surface failures next to the field and never block the
//! value.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use cron::Schedule;

use crate::error::{CronsError, Result};
use crate::expression;

/// Convert a panel cron expression to the form the `cron` crate expects.
///
/// Panel expressions carry 6 fields with day-of-week numbered 0-6
/// (0 = Sunday); the engine wants 6 or 7 fields with ordinals 1-7
/// (1 = Sunday). A bare 5-field Unix expression gets `0` prepended so it
/// runs at second :00. Anything else is passed through for the engine to
/// reject.
fn to_engine_format(expr: &str) -> String {
	let mut parts: Vec<&str> = expr.split_whitespace().collect();
	if parts.len() == 5 {
		parts.insert(0, "0");
	}
	if parts.len() < 6 {
		return expr.to_string();
	}
	let mut fields: Vec<String> = parts.iter().map(|p| (*p).to_string()).collect();
	if let Some(dow) = expression::numeric(&fields[5]) {
		fields[5] = ((dow % 7) + 1).to_string();
	}
	fields.join(" ")
}

/// Calculate the next fire time of an expression after the given instant.
///
/// # Arguments
///
/// * `expr` - A panel cron expression (6-field; 5-field Unix form accepted)
/// * `timezone` - IANA timezone string (e.g. "Asia/Shanghai", "UTC")
/// * `after` - Compute the first occurrence strictly after this time
///
/// # Errors
///
/// Returns an error if the expression does not parse, the timezone is
/// unknown, or the schedule has no future occurrence.
pub fn next_occurrence(expr: &str, timezone: &str, after: DateTime<Utc>) -> Result<DateTime<Utc>> {
	let engine_expr = to_engine_format(expr);

	let schedule = Schedule::from_str(&engine_expr)
		.map_err(|e| CronsError::InvalidCronExpression(e.to_string()))?;

	let tz: Tz = timezone
		.parse()
		.map_err(|_| CronsError::InvalidTimezone(timezone.to_string()))?;

	let local_after = after.with_timezone(&tz);

	let next_local = schedule
		.after(&local_after)
		.next()
		.ok_or_else(|| CronsError::Internal("no next run time found for schedule".to_string()))?;

	Ok(next_local.with_timezone(&Utc))
}

/// Validate an expression against the engine without computing a next run.
pub fn validate_expression(expr: &str) -> Result<()> {
	let engine_expr = to_engine_format(expr);
	Schedule::from_str(&engine_expr)
		.map_err(|e| CronsError::InvalidCronExpression(e.to_string()))?;
	Ok(())
}

/// Validate an IANA timezone string.
pub fn validate_timezone(timezone: &str) -> Result<()> {
	let _: Tz = timezone
		.parse()
		.map_err(|_| CronsError::InvalidTimezone(timezone.to_string()))?;
	Ok(())
}
