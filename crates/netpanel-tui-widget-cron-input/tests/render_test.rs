// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use netpanel_common_i18n::LocaleContext;
use netpanel_tui_widget_cron_input::{CronInput, CronInputState};
use ratatui::backend::TestBackend;
use ratatui::widgets::StatefulWidget;
use ratatui::Terminal;

fn buffer_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
	let buffer = terminal.backend().buffer();
	let area = buffer.area;
	let mut lines = Vec::new();

	for y in area.y..area.y + area.height {
		let mut line = String::new();
		for x in area.x..area.x + area.width {
			let cell = &buffer[(x, y)];
			line.push_str(cell.symbol());
		}
		lines.push(line);
	}

	lines
}

fn render(state: &mut CronInputState, locale: &LocaleContext, width: u16, height: u16) -> Vec<String> {
	let backend = TestBackend::new(width, height);
	let mut terminal = Terminal::new(backend).unwrap();

	terminal
		.draw(|frame| {
			let widget = CronInput::new().locale(locale).focused(true);
			widget.render(frame.area(), frame.buffer_mut(), state);
		})
		.unwrap();

	buffer_lines(&terminal)
}

#[test]
fn renders_every_minute_default() {
	let locale = LocaleContext::new("en");
	let mut state = CronInputState::new("0 * * * * *");

	let lines = render(&mut state, &locale, 50, 3);

	assert!(lines[0].contains("Schedule"));
	assert!(lines[0].contains("Every minute"));
	assert!(lines[2].contains("Expression"));
	assert!(lines[2].contains("0 * * * * *"));
	assert!(lines[2].contains("✓"));
}

#[test]
fn renders_parameter_controls_for_fixed_weekly() {
	let locale = LocaleContext::new("en");
	let mut state = CronInputState::new("0 30 8 * * 5");

	let lines = render(&mut state, &locale, 60, 3);

	assert!(lines[0].contains("Every Friday at 08:30"));
	assert!(lines[1].contains("Weekday: Friday"));
	assert!(lines[1].contains("Hour: 08"));
	assert!(lines[1].contains("Minute: 30"));
	assert!(lines[2].contains("0 30 8 * * 5"));
}

#[test]
fn renders_invalid_marker_for_malformed_input() {
	let locale = LocaleContext::new("en");
	let mut state = CronInputState::new("not a cron");

	let lines = render(&mut state, &locale, 50, 3);

	assert!(lines[0].contains("Custom expression"));
	assert!(lines[2].contains("not a cron"));
	assert!(lines[2].contains("✗"));
	assert!(!lines[2].contains("✓"));
}

#[test]
fn renders_localized_labels() {
	let locale = LocaleContext::new("es");
	let mut state = CronInputState::new("0 */5 * * * *");

	let lines = render(&mut state, &locale, 50, 3);

	assert!(lines[0].contains("Programación"));
	assert!(lines[0].contains("Cada 5 minutos"));
	assert!(lines[2].contains("Expresión"));
}

#[test]
fn rtl_locale_right_aligns_rows() {
	let locale = LocaleContext::new("ar");
	let mut state = CronInputState::new("0 * * * * *");

	let lines = render(&mut state, &locale, 50, 3);

	// Right-aligned: the first cell stays blank, content hugs the end.
	assert!(lines[0].starts_with(' '));
	assert!(lines[2].contains("0 * * * * *"));
}

#[test]
fn short_area_keeps_the_raw_expression() {
	let locale = LocaleContext::new("en");
	let mut state = CronInputState::new("0 0 0 * * *");

	let lines = render(&mut state, &locale, 50, 1);

	assert!(lines[0].contains("0 0 0 * * *"));
}

#[test]
fn edit_sequence_updates_render() {
	let locale = LocaleContext::new("en");
	let mut state = CronInputState::new("0 * * * * *");

	// Cycle the preset once: every minute -> every 5 minutes.
	state.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
	let lines = render(&mut state, &locale, 50, 3);

	assert!(lines[0].contains("Every 5 minutes"));
	assert!(lines[1].contains("Interval: 5"));
	assert!(lines[2].contains("0 */5 * * * *"));
}

#[test]
fn long_expression_scrolls_to_cursor() {
	let locale = LocaleContext::new("en");
	let mut state = CronInputState::new("0 30 8 * * 5");

	// Narrow enough that the window cannot hold the whole string.
	let lines = render(&mut state, &locale, 18, 3);

	// The cursor sits at the end after set_value, so the tail is visible.
	assert!(lines[2].contains("* 5"));
}
