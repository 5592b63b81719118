// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use crate::locale::{is_supported, DEFAULT_LOCALE};

/// Resolve the effective locale from user preference and panel default.
///
/// Resolution order (highest to lowest priority):
/// 1. User's locale preference (if valid)
/// 2. Panel default locale (if valid)
/// 3. Fallback to English ("en")
///
/// # Example
///
/// ```
/// use netpanel_common_i18n::resolve_locale;
///
/// // User preference takes priority
/// assert_eq!(resolve_locale(Some("es"), "en"), "es");
///
/// // Falls back to the panel default if the user has no preference
/// assert_eq!(resolve_locale(None, "zh-CN"), "zh-CN");
///
/// // Falls back to English if both are invalid
/// assert_eq!(resolve_locale(Some("invalid"), "also_invalid"), "en");
/// ```
pub fn resolve_locale(user_locale: Option<&str>, panel_default: &str) -> &'static str {
	if let Some(locale) = user_locale {
		if is_supported(locale) {
			return locale_to_static(locale);
		}
	}

	if is_supported(panel_default) {
		return locale_to_static(panel_default);
	}

	DEFAULT_LOCALE
}

fn locale_to_static(locale: &str) -> &'static str {
	match locale {
		"en" => "en",
		"es" => "es",
		"ar" => "ar",
		"zh-CN" => "zh-CN",
		_ => DEFAULT_LOCALE,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_user_preference_takes_priority() {
		assert_eq!(resolve_locale(Some("es"), "en"), "es");
		assert_eq!(resolve_locale(Some("ar"), "zh-CN"), "ar");
	}

	#[test]
	fn test_panel_default_when_no_user_preference() {
		assert_eq!(resolve_locale(None, "es"), "es");
		assert_eq!(resolve_locale(None, "zh-CN"), "zh-CN");
	}

	#[test]
	fn test_fallback_to_english_when_user_invalid() {
		assert_eq!(resolve_locale(Some("invalid"), "en"), "en");
		assert_eq!(resolve_locale(Some("fr"), "en"), "en");
	}

	#[test]
	fn test_fallback_to_english_when_both_invalid() {
		assert_eq!(resolve_locale(Some("invalid"), "also_invalid"), "en");
		assert_eq!(resolve_locale(None, "invalid"), "en");
	}

	#[test]
	fn test_empty_string_is_invalid() {
		assert_eq!(resolve_locale(Some(""), "en"), "en");
		assert_eq!(resolve_locale(None, ""), "en");
	}
}
