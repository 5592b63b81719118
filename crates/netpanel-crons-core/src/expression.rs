// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Canonical 6-field cron expression handling.
//!
//! The panel exchanges schedules as a single whitespace-separated string:
//! `second minute hour day-of-month month day-of-week`. Each field is `*`,
//! a non-negative integer literal, or a `*/N` step. Well-formedness is a
//! field-count check only; field value ranges are deliberately not validated
//! here (the next-run engine in [`crate::schedule`] is the strict one).

/// Number of fields in a panel cron expression.
pub const FIELD_COUNT: usize = 6;

/// Split an expression into its 6 fields.
///
/// Returns `None` when splitting on whitespace does not yield exactly
/// [`FIELD_COUNT`] tokens.
pub fn fields(expr: &str) -> Option<[&str; FIELD_COUNT]> {
	let parts: Vec<&str> = expr.split_whitespace().collect();
	if parts.len() != FIELD_COUNT {
		return None;
	}
	Some([parts[0], parts[1], parts[2], parts[3], parts[4], parts[5]])
}

/// Check that an expression is syntactically well-formed.
///
/// True iff the string is non-empty and has exactly 6 whitespace-separated
/// tokens. `"0 99 99 * * *"` is well-formed; range checking is not this
/// function's job.
pub fn is_well_formed(expr: &str) -> bool {
	fields(expr).is_some()
}

/// Parse a field as a plain integer literal.
///
/// Accepts ASCII digit strings only; sign prefixes, whitespace, and values
/// that overflow `u32` are all rejected with `None`.
pub(crate) fn numeric(token: &str) -> Option<u32> {
	if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	token.parse().ok()
}

/// Parse a field as a `*/N` step, returning the captured `N`.
pub(crate) fn step(token: &str) -> Option<u32> {
	numeric(token.strip_prefix("*/")?)
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn fields_requires_exactly_six() {
		assert!(fields("0 * * * * *").is_some());
		assert!(fields("* * * * *").is_none());
		assert!(fields("* * * * * * *").is_none());
		assert!(fields("").is_none());
		assert!(fields("   ").is_none());
	}

	#[test]
	fn fields_tolerates_extra_whitespace() {
		let f = fields("  0   */5  *\t* * *  ").unwrap();
		assert_eq!(f, ["0", "*/5", "*", "*", "*", "*"]);
	}

	#[test]
	fn well_formed_ignores_token_semantics() {
		assert!(is_well_formed("0 99 99 * * *"));
		assert!(is_well_formed("a b c d e f"));
		assert!(!is_well_formed("not a cron"));
		assert!(!is_well_formed(""));
	}

	#[test]
	fn numeric_rejects_non_digit_forms() {
		assert_eq!(numeric("30"), Some(30));
		assert_eq!(numeric("0"), Some(0));
		assert_eq!(numeric("+5"), None);
		assert_eq!(numeric("-5"), None);
		assert_eq!(numeric(""), None);
		assert_eq!(numeric("5x"), None);
		// Digit strings past u32 still fail closed.
		assert_eq!(numeric("99999999999999999999"), None);
	}

	#[test]
	fn step_captures_interval() {
		assert_eq!(step("*/5"), Some(5));
		assert_eq!(step("*/0"), Some(0));
		assert_eq!(step("*"), None);
		assert_eq!(step("*/"), None);
		assert_eq!(step("5"), None);
		assert_eq!(step("*/x"), None);
	}

	proptest! {
		#[test]
		fn well_formed_matches_token_count(s in ".{0,64}") {
			let expected = !s.is_empty() && s.split_whitespace().count() == FIELD_COUNT;
			prop_assert_eq!(is_well_formed(&s), expected);
		}
	}
}
