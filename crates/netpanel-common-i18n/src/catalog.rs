// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Embedded catalog and translation functions.
//!
//! Strings use hierarchical dot-notation keys with a `client.` prefix for
//! panel surfaces, e.g. `client.crons.preset.every_minute`. Catalogs are
//! static tables compiled into the binary.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::locale::DEFAULT_LOCALE;

type Entries = &'static [(&'static str, &'static str)];

static EN: Entries = &[
	("client.crons.preset.every_minute", "Every minute"),
	("client.crons.preset.every_n_minutes", "Every {n} minutes"),
	("client.crons.preset.every_hour", "Every hour"),
	("client.crons.preset.every_n_hours", "Every {n} hours"),
	("client.crons.preset.every_day", "Every day at midnight"),
	("client.crons.preset.every_week", "Every Monday at midnight"),
	("client.crons.preset.every_month", "On the 1st of every month at midnight"),
	("client.crons.preset.fixed_daily", "Every day at {time}"),
	("client.crons.preset.fixed_weekly", "Every {weekday} at {time}"),
	("client.crons.preset.fixed_monthly", "On day {day} of every month at {time}"),
	("client.crons.preset.custom", "Custom expression"),
	("client.crons.weekday.0", "Sunday"),
	("client.crons.weekday.1", "Monday"),
	("client.crons.weekday.2", "Tuesday"),
	("client.crons.weekday.3", "Wednesday"),
	("client.crons.weekday.4", "Thursday"),
	("client.crons.weekday.5", "Friday"),
	("client.crons.weekday.6", "Saturday"),
	("client.crons.input.preset", "Schedule"),
	("client.crons.input.expression", "Expression"),
	("client.crons.input.interval", "Interval"),
	("client.crons.input.hour", "Hour"),
	("client.crons.input.minute", "Minute"),
	("client.crons.input.weekday", "Weekday"),
	("client.crons.input.day_of_month", "Day"),
	("client.crons.input.invalid", "expected 6 fields"),
	("client.crons.input.next_run", "Next run"),
];

static ES: Entries = &[
	("client.crons.preset.every_minute", "Cada minuto"),
	("client.crons.preset.every_n_minutes", "Cada {n} minutos"),
	("client.crons.preset.every_hour", "Cada hora"),
	("client.crons.preset.every_n_hours", "Cada {n} horas"),
	("client.crons.preset.every_day", "Cada día a medianoche"),
	("client.crons.preset.every_week", "Cada lunes a medianoche"),
	("client.crons.preset.every_month", "El día 1 de cada mes a medianoche"),
	("client.crons.preset.fixed_daily", "Cada día a las {time}"),
	("client.crons.preset.fixed_weekly", "Cada {weekday} a las {time}"),
	("client.crons.preset.fixed_monthly", "El día {day} de cada mes a las {time}"),
	("client.crons.preset.custom", "Expresión personalizada"),
	("client.crons.weekday.0", "domingo"),
	("client.crons.weekday.1", "lunes"),
	("client.crons.weekday.2", "martes"),
	("client.crons.weekday.3", "miércoles"),
	("client.crons.weekday.4", "jueves"),
	("client.crons.weekday.5", "viernes"),
	("client.crons.weekday.6", "sábado"),
	("client.crons.input.preset", "Programación"),
	("client.crons.input.expression", "Expresión"),
	("client.crons.input.interval", "Intervalo"),
	("client.crons.input.hour", "Hora"),
	("client.crons.input.minute", "Minuto"),
	("client.crons.input.weekday", "Día de la semana"),
	("client.crons.input.day_of_month", "Día"),
	("client.crons.input.invalid", "se esperaban 6 campos"),
	("client.crons.input.next_run", "Próxima ejecución"),
];

static AR: Entries = &[
	("client.crons.preset.every_minute", "كل دقيقة"),
	("client.crons.preset.every_n_minutes", "كل {n} دقائق"),
	("client.crons.preset.every_hour", "كل ساعة"),
	("client.crons.preset.every_n_hours", "كل {n} ساعات"),
	("client.crons.preset.every_day", "كل يوم عند منتصف الليل"),
	("client.crons.preset.every_week", "كل يوم اثنين عند منتصف الليل"),
	("client.crons.preset.every_month", "في اليوم الأول من كل شهر عند منتصف الليل"),
	("client.crons.preset.fixed_daily", "كل يوم في {time}"),
	("client.crons.preset.fixed_weekly", "كل {weekday} في {time}"),
	("client.crons.preset.fixed_monthly", "في اليوم {day} من كل شهر في {time}"),
	("client.crons.preset.custom", "تعبير مخصص"),
	("client.crons.weekday.0", "الأحد"),
	("client.crons.weekday.1", "الاثنين"),
	("client.crons.weekday.2", "الثلاثاء"),
	("client.crons.weekday.3", "الأربعاء"),
	("client.crons.weekday.4", "الخميس"),
	("client.crons.weekday.5", "الجمعة"),
	("client.crons.weekday.6", "السبت"),
	("client.crons.input.preset", "الجدولة"),
	("client.crons.input.expression", "التعبير"),
	("client.crons.input.interval", "الفاصل الزمني"),
	("client.crons.input.hour", "الساعة"),
	("client.crons.input.minute", "الدقيقة"),
	("client.crons.input.weekday", "يوم الأسبوع"),
	("client.crons.input.day_of_month", "اليوم"),
	("client.crons.input.invalid", "يُتوقع 6 حقول"),
	("client.crons.input.next_run", "التشغيل التالي"),
];

static ZH_CN: Entries = &[
	("client.crons.preset.every_minute", "每分钟"),
	("client.crons.preset.every_n_minutes", "每{n}分钟"),
	("client.crons.preset.every_hour", "每小时"),
	("client.crons.preset.every_n_hours", "每{n}小时"),
	("client.crons.preset.every_day", "每天零点"),
	("client.crons.preset.every_week", "每周一零点"),
	("client.crons.preset.every_month", "每月1日零点"),
	("client.crons.preset.fixed_daily", "每天{time}"),
	("client.crons.preset.fixed_weekly", "每{weekday}{time}"),
	("client.crons.preset.fixed_monthly", "每月{day}日{time}"),
	("client.crons.preset.custom", "自定义表达式"),
	("client.crons.weekday.0", "周日"),
	("client.crons.weekday.1", "周一"),
	("client.crons.weekday.2", "周二"),
	("client.crons.weekday.3", "周三"),
	("client.crons.weekday.4", "周四"),
	("client.crons.weekday.5", "周五"),
	("client.crons.weekday.6", "周六"),
	("client.crons.input.preset", "计划"),
	("client.crons.input.expression", "表达式"),
	("client.crons.input.interval", "间隔"),
	("client.crons.input.hour", "时"),
	("client.crons.input.minute", "分"),
	("client.crons.input.weekday", "星期"),
	("client.crons.input.day_of_month", "日"),
	("client.crons.input.invalid", "应为6个字段"),
	("client.crons.input.next_run", "下次运行"),
];

static CATALOGS: Lazy<HashMap<&'static str, HashMap<&'static str, &'static str>>> =
	Lazy::new(|| {
		let mut map = HashMap::new();
		map.insert("en", EN.iter().copied().collect());
		map.insert("es", ES.iter().copied().collect());
		map.insert("ar", AR.iter().copied().collect());
		map.insert("zh-CN", ZH_CN.iter().copied().collect());
		map
	});

/// Translate a string for the given locale.
///
/// Falls back to English if the translation is not found, then to the msgid
/// itself.
///
/// # Example
///
/// ```
/// use netpanel_common_i18n::t;
///
/// let label = t("es", "client.crons.input.expression");
/// assert_eq!(label, "Expresión");
/// ```
pub fn t(locale: &str, msgid: &str) -> String {
	if let Some(catalog) = CATALOGS.get(locale) {
		if let Some(text) = catalog.get(msgid) {
			return (*text).to_string();
		}
	}

	if locale != DEFAULT_LOCALE {
		if let Some(catalog) = CATALOGS.get(DEFAULT_LOCALE) {
			if let Some(text) = catalog.get(msgid) {
				return (*text).to_string();
			}
		}
	}

	msgid.to_string()
}

/// Translate a string with variable substitution.
///
/// Variables use `{name}` syntax in the translated string.
///
/// # Example
///
/// ```
/// use netpanel_common_i18n::t_fmt;
///
/// let text = t_fmt("en", "client.crons.preset.every_n_minutes", &[("n", "5")]);
/// assert_eq!(text, "Every 5 minutes");
/// ```
pub fn t_fmt(locale: &str, msgid: &str, args: &[(&str, &str)]) -> String {
	let mut result = t(locale, msgid);

	for (name, value) in args {
		let placeholder = format!("{{{name}}}");
		result = result.replace(&placeholder, value);
	}

	result
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_translate_english() {
		assert_eq!(t("en", "client.crons.preset.every_minute"), "Every minute");
	}

	#[test]
	fn test_translate_spanish() {
		assert_eq!(t("es", "client.crons.preset.every_minute"), "Cada minuto");
	}

	#[test]
	fn test_translate_arabic() {
		assert_eq!(t("ar", "client.crons.preset.every_hour"), "كل ساعة");
	}

	#[test]
	fn test_translate_chinese() {
		assert_eq!(t("zh-CN", "client.crons.weekday.1"), "周一");
	}

	#[test]
	fn test_fallback_to_english() {
		let result = t("es", "client.nonexistent.key");
		let en_result = t("en", "client.nonexistent.key");
		assert_eq!(result, en_result);
	}

	#[test]
	fn test_fallback_to_msgid() {
		assert_eq!(t("en", "completely.unknown.key"), "completely.unknown.key");
	}

	#[test]
	fn test_unknown_locale_falls_back() {
		let result = t("xx", "client.crons.preset.every_minute");
		assert_eq!(result, t("en", "client.crons.preset.every_minute"));
	}

	#[test]
	fn test_variable_substitution() {
		let result = t_fmt("en", "client.crons.preset.every_n_minutes", &[("n", "10")]);
		assert_eq!(result, "Every 10 minutes");
	}

	#[test]
	fn test_multiple_variables() {
		let result = t_fmt(
			"en",
			"client.crons.preset.fixed_weekly",
			&[("weekday", "Friday"), ("time", "08:30")],
		);
		assert_eq!(result, "Every Friday at 08:30");
	}

	#[test]
	fn test_every_locale_covers_every_english_key() {
		for locale in ["es", "ar", "zh-CN"] {
			for (key, _) in EN.iter().copied() {
				let translated = t(locale, key);
				assert_ne!(translated, key, "{locale} missing {key}");
			}
		}
	}

	proptest! {
		#[test]
		fn t_is_total(locale in ".{0,16}", msgid in ".{0,64}") {
			// Unknown locales and keys degrade instead of failing.
			let out = t(&locale, &msgid);
			prop_assert_eq!(out.is_empty(), msgid.is_empty());
		}
	}
}
