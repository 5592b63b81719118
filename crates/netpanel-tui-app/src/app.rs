// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
	layout::{Constraint, Direction, Layout, Rect},
	widgets::{Block, Borders},
	Frame,
};

use netpanel_common_i18n::LocaleContext;
use netpanel_tui_widget_cron_input::{CronInput, CronInputState, EventOutcome};

use crate::theme::Theme;

/// Startup configuration, resolved in `main` before the terminal is taken.
#[derive(Debug, Clone)]
pub struct Config {
	pub locale: String,
	pub theme: String,
	pub timezone: String,
	pub expression: String,
}

const LOCALE_CYCLE: [&str; 4] = ["en", "es", "ar", "zh-CN"];

pub struct App {
	/// The form-owned expression value; the widget reports edits back here.
	value: String,
	input: CronInputState,
	locale: LocaleContext,
	theme: Theme,
	timezone: String,
	initial_expression: String,
	next_run: Option<Result<String, String>>,
	should_quit: bool,
}

impl App {
	pub fn new(config: &Config) -> Self {
		let mut app = Self {
			value: config.expression.clone(),
			input: CronInputState::new(&config.expression),
			locale: LocaleContext::new(config.locale.clone()),
			theme: Theme::from_name(&config.theme),
			timezone: config.timezone.clone(),
			initial_expression: config.expression.clone(),
			next_run: None,
			should_quit: false,
		};
		app.refresh_next_run();
		app
	}

	pub fn should_quit(&self) -> bool {
		self.should_quit
	}

	pub fn value(&self) -> &str {
		&self.value
	}

	pub fn locale(&self) -> &LocaleContext {
		&self.locale
	}

	pub fn handle_key_event(&mut self, key: KeyEvent) {
		if key.modifiers.contains(KeyModifiers::CONTROL) {
			match key.code {
				KeyCode::Char('c') => {
					self.should_quit = true;
				}
				KeyCode::Char('l') => {
					self.cycle_locale();
				}
				KeyCode::Char('t') => {
					self.theme = match self.theme.name.as_str() {
						"dark" => Theme::light(),
						_ => Theme::dark(),
					};
				}
				KeyCode::Char('r') => {
					// External value change: push into the widget, not through it.
					self.value = self.initial_expression.clone();
					self.input.set_value(&self.value);
					self.refresh_next_run();
				}
				_ => {}
			}
			return;
		}

		if key.code == KeyCode::Esc {
			self.should_quit = true;
			return;
		}

		match self.input.handle_key(key) {
			EventOutcome::Changed(value) => {
				tracing::debug!(expression = %value, "schedule changed");
				self.value = value;
				self.refresh_next_run();
			}
			EventOutcome::Handled | EventOutcome::Ignored => {}
		}
	}

	fn cycle_locale(&mut self) {
		let idx = LOCALE_CYCLE
			.iter()
			.position(|code| *code == self.locale.locale)
			.unwrap_or(0);
		let next = LOCALE_CYCLE[(idx + 1) % LOCALE_CYCLE.len()];
		self.locale = LocaleContext::new(next);
	}

	/// The preview is advisory: a failure renders next to the field and
	/// never touches the value.
	fn refresh_next_run(&mut self) {
		self.next_run = Some(
			self.input
				.next_run(&self.timezone, Utc::now())
				.map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
				.map_err(|e| e.to_string()),
		);
	}

	pub fn render(&mut self, frame: &mut Frame) {
		let outer = Block::default()
			.title(" NetPanel — Cron Schedule ")
			.borders(Borders::ALL)
			.border_style(self.theme.borders.focused)
			.title_style(self.theme.text.bold);
		let inner = outer.inner(frame.area());
		frame.render_widget(outer, frame.area());

		let rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(3),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(0),
				Constraint::Length(1),
			])
			.split(inner);

		let input = CronInput::new()
			.locale(&self.locale)
			.focused(true)
			.style(self.theme.text.normal)
			.label_style(self.theme.text.dim)
			.selected_style(self.theme.selection)
			.cursor_style(self.theme.cursor)
			.ok_style(self.theme.text.success)
			.error_style(self.theme.text.error);
		frame.render_stateful_widget(input, rows[0], &mut self.input);

		self.render_next_run(frame, rows[2]);
		self.render_status_bar(frame, rows[4]);
	}

	fn render_next_run(&self, frame: &mut Frame, area: Rect) {
		let label = self.locale.t("client.crons.input.next_run");
		let (text, style) = match &self.next_run {
			Some(Ok(at)) => (format!("{}: {}", label, at), self.theme.text.dim),
			Some(Err(reason)) => (format!("{}: {}", label, reason), self.theme.text.error),
			None => (String::new(), self.theme.text.dim),
		};
		frame.render_widget(
			ratatui::widgets::Paragraph::new(text).style(style),
			area,
		);
	}

	fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
		let status = format!(
			"Tab Field  ↑↓ Adjust  Ctrl+L Locale  Ctrl+T Theme  Ctrl+R Reset  Ctrl+C Quit  [{}]",
			self.locale.locale.to_uppercase()
		);
		frame.render_widget(
			ratatui::widgets::Paragraph::new(status).style(self.theme.text.dim),
			area,
		);
	}
}
