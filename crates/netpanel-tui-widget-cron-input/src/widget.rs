// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The cron input widget renderer.

use ratatui::{
	buffer::Buffer,
	layout::Rect,
	style::{Color, Style},
	widgets::StatefulWidget,
};
use unicode_segmentation::UnicodeSegmentation;

use netpanel_common_i18n::{Direction, LocaleContext};

use crate::state::{controls, Control, CronInputState};

/// Cron schedule form control.
///
/// Renders three rows: the preset selector, the parameter controls for the
/// selected preset, and the raw expression with its well-formedness marker.
/// Short areas drop rows from the top so the raw expression always wins.
///
/// State lives in [`CronInputState`]; the widget itself is per-frame
/// configuration in the builder style.
#[derive(Debug, Clone)]
pub struct CronInput {
	locale: LocaleContext,
	style: Style,
	label_style: Style,
	selected_style: Style,
	cursor_style: Style,
	ok_style: Style,
	error_style: Style,
	focused: bool,
}

impl Default for CronInput {
	fn default() -> Self {
		Self::new()
	}
}

impl CronInput {
	pub fn new() -> Self {
		Self {
			locale: LocaleContext::default(),
			style: Style::default(),
			label_style: Style::default().fg(Color::DarkGray),
			selected_style: Style::default().fg(Color::Black).bg(Color::Cyan),
			cursor_style: Style::default().bg(Color::White).fg(Color::Black),
			ok_style: Style::default().fg(Color::Green),
			error_style: Style::default().fg(Color::Red),
			focused: false,
		}
	}

	pub fn locale(mut self, locale: &LocaleContext) -> Self {
		self.locale = locale.clone();
		self
	}

	pub fn style(mut self, style: Style) -> Self {
		self.style = style;
		self
	}

	pub fn label_style(mut self, style: Style) -> Self {
		self.label_style = style;
		self
	}

	pub fn selected_style(mut self, style: Style) -> Self {
		self.selected_style = style;
		self
	}

	pub fn cursor_style(mut self, style: Style) -> Self {
		self.cursor_style = style;
		self
	}

	pub fn ok_style(mut self, style: Style) -> Self {
		self.ok_style = style;
		self
	}

	pub fn error_style(mut self, style: Style) -> Self {
		self.error_style = style;
		self
	}

	pub fn focused(mut self, focused: bool) -> Self {
		self.focused = focused;
		self
	}

	fn highlight(&self, state: &CronInputState, control: Control) -> Style {
		if self.focused && state.focus() == control {
			self.selected_style
		} else {
			self.style
		}
	}

	fn preset_line(&self, state: &CronInputState) -> Vec<(String, Style)> {
		let label = self.locale.t("client.crons.input.preset");
		vec![
			(format!("{}: ", label), self.label_style),
			(
				format!("◂ {} ▸", state.description(&self.locale)),
				self.highlight(state, Control::Preset),
			),
		]
	}

	fn params_line(&self, state: &CronInputState) -> Vec<(String, Style)> {
		let mut segments = Vec::new();
		for control in controls(state.kind()) {
			let control = *control;
			let Some(value) = state.control_value(control) else {
				continue;
			};
			let label = self.locale.t(control.label_key());
			let display = match control {
				Control::Hour | Control::Minute => format!("{:02}", value),
				Control::Weekday => state.weekday_name(&self.locale),
				_ => value.to_string(),
			};
			if !segments.is_empty() {
				segments.push(("  ".to_string(), self.style));
			}
			segments.push((format!("{}: ", label), self.label_style));
			segments.push((display, self.highlight(state, control)));
		}
		segments
	}
}

impl StatefulWidget for CronInput {
	type State = CronInputState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		if area.width == 0 || area.height == 0 {
			return;
		}

		let direction = self.locale.direction;

		// Rows from the top: preset, params, raw. With less than three rows
		// available the raw expression keeps the bottom slot.
		let rows = area.height.min(3);
		let raw_y = rows - 1;
		if rows >= 3 {
			render_segments(buf, area, 0, &self.preset_line(state), direction);
			render_segments(buf, area, 1, &self.params_line(state), direction);
		} else if rows == 2 {
			render_segments(buf, area, 0, &self.preset_line(state), direction);
		}

		self.render_raw_line(area, buf, state, raw_y, direction);
	}
}

impl CronInput {
	fn render_raw_line(
		&self,
		area: Rect,
		buf: &mut Buffer,
		state: &mut CronInputState,
		y: u16,
		direction: Direction,
	) {
		let label = self.locale.t("client.crons.input.expression");
		let prefix = format!("{}: ", label);
		let prefix_width = prefix.graphemes(true).count() as u16;

		let well_formed = state.is_well_formed();
		let marker = if well_formed { "✓" } else { "✗" };
		let marker_style = if well_formed { self.ok_style } else { self.error_style };

		// Leave room for " ✓" behind the text window.
		let window_width = area
			.width
			.saturating_sub(prefix_width)
			.saturating_sub(2) as usize;
		if window_width == 0 {
			return;
		}

		let raw_focused = self.focused && state.focus() == Control::Raw;
		state.raw_mut().scroll_to_cursor(window_width);
		let raw = state.raw();
		let scroll = raw.scroll_offset();
		let cursor_display = raw.cursor_grapheme().saturating_sub(scroll);
		let visible: Vec<&str> = raw.content().graphemes(true).skip(scroll).take(window_width).collect();

		let content_width = (visible.len() as u16).max(if raw_focused { 1 } else { 0 });
		let line_width = prefix_width + content_width + 2;
		let start = area.x + direction.align_start(area.width, line_width.min(area.width));
		let yy = area.y + y;

		let remaining = (area.x + area.width).saturating_sub(start) as usize;
		buf.set_stringn(start, yy, &prefix, remaining, self.label_style);

		// Expressions render left-to-right even in RTL locales; only line
		// placement mirrors.
		let text_x = start + prefix_width.min(area.width.saturating_sub(1));
		for (i, g) in visible.iter().enumerate() {
			let x = text_x + i as u16;
			if x >= area.x + area.width {
				break;
			}
			let style = if raw_focused && i == cursor_display {
				self.cursor_style
			} else {
				self.style
			};
			buf.set_string(x, yy, *g, style);
		}
		if raw_focused && cursor_display >= visible.len() && cursor_display < window_width {
			let x = text_x + cursor_display as u16;
			if x < area.x + area.width {
				buf.set_string(x, yy, " ", self.cursor_style);
			}
		}

		let marker_x = text_x + content_width + 1;
		if marker_x < area.x + area.width {
			buf.set_string(marker_x, yy, marker, marker_style);
		}
	}
}

fn render_segments(
	buf: &mut Buffer,
	area: Rect,
	y: u16,
	segments: &[(String, Style)],
	direction: Direction,
) {
	let total: u16 = segments
		.iter()
		.map(|(text, _)| text.graphemes(true).count() as u16)
		.sum();
	let mut x = area.x + direction.align_start(area.width, total.min(area.width));
	let yy = area.y + y;
	let end = area.x + area.width;
	for (text, style) in segments {
		if x >= end {
			break;
		}
		let remaining = (end - x) as usize;
		buf.set_stringn(x, yy, text, remaining, *style);
		x += (text.graphemes(true).count() as u16).min(remaining as u16);
	}
}
