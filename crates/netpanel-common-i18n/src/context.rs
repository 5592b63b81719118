// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale context threaded through rendering code.

use crate::catalog;
use crate::locale::{is_rtl, Direction};

/// A resolved locale plus its text direction.
///
/// UI code carries one of these explicitly instead of consulting global
/// state; switching locale means constructing a new context.
#[derive(Debug, Clone)]
pub struct LocaleContext {
	pub locale: String,
	pub direction: Direction,
}

impl Default for LocaleContext {
	fn default() -> Self {
		Self {
			locale: "en".to_string(),
			direction: Direction::Ltr,
		}
	}
}

impl LocaleContext {
	pub fn new(locale: impl Into<String>) -> Self {
		let locale = locale.into();
		let direction = if is_rtl(&locale) {
			Direction::Rtl
		} else {
			Direction::Ltr
		};
		Self { locale, direction }
	}

	pub fn is_rtl(&self) -> bool {
		self.direction.is_rtl()
	}

	/// Translate a key using this context's locale.
	pub fn t(&self, key: &str) -> String {
		catalog::t(&self.locale, key)
	}

	/// Translate a key with format variables.
	pub fn t_fmt(&self, key: &str, vars: &[(&str, &str)]) -> String {
		catalog::t_fmt(&self.locale, key, vars)
	}
}
