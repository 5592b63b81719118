// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Widget state: the expression value, derived preset state, and key handling.

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use netpanel_common_i18n::LocaleContext;
use netpanel_crons_core::{infer, is_well_formed, schedule, PresetKind, SchedulePreset};

use crate::raw::RawFieldState;

/// Sticky values for every preset parameter.
///
/// Each parameter keeps its last-known value even while the selected preset
/// does not use it, so switching between kinds merges the edited parameter
/// with the remembered ones instead of resetting the form. Defaults double
/// as the documented build defaults (interval 5 minutes / 2 hours, 08:00,
/// Monday, day 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetParams {
	/// Interval for the every-N-minutes preset (1-59).
	pub interval_minutes: u32,
	/// Interval for the every-N-hours preset (1-23).
	pub interval_hours: u32,
	/// Hour of day (0-23).
	pub hour: u32,
	/// Minute of hour (0-59).
	pub minute: u32,
	/// Day of week, 0-6 with 0 = Sunday.
	pub day_of_week: u32,
	/// Day of month (1-31).
	pub day_of_month: u32,
}

impl Default for PresetParams {
	fn default() -> Self {
		Self {
			interval_minutes: 5,
			interval_hours: 2,
			hour: 8,
			minute: 0,
			day_of_week: 1,
			day_of_month: 1,
		}
	}
}

impl PresetParams {
	/// Build the preset payload for a kind from the current sticky values.
	pub fn preset(&self, kind: PresetKind) -> SchedulePreset {
		match kind {
			PresetKind::EveryMinute => SchedulePreset::EveryMinute,
			PresetKind::EveryNMinutes => SchedulePreset::EveryNMinutes { n: self.interval_minutes },
			PresetKind::EveryHour => SchedulePreset::EveryHour,
			PresetKind::EveryNHours => SchedulePreset::EveryNHours { n: self.interval_hours },
			PresetKind::EveryDay => SchedulePreset::EveryDay,
			PresetKind::EveryWeek => SchedulePreset::EveryWeek,
			PresetKind::EveryMonth => SchedulePreset::EveryMonth,
			PresetKind::FixedDaily => SchedulePreset::FixedDaily { hour: self.hour, minute: self.minute },
			PresetKind::FixedWeekly => SchedulePreset::FixedWeekly {
				hour: self.hour,
				minute: self.minute,
				day_of_week: self.day_of_week,
			},
			PresetKind::FixedMonthly => SchedulePreset::FixedMonthly {
				hour: self.hour,
				minute: self.minute,
				day_of_month: self.day_of_month,
			},
			PresetKind::Custom => SchedulePreset::Custom,
		}
	}

	/// Absorb the parameters an inferred preset carries, leaving the rest
	/// sticky. Shape-valid but range-invalid values are absorbed as-is.
	fn absorb(&mut self, preset: &SchedulePreset) {
		match *preset {
			SchedulePreset::EveryNMinutes { n } => self.interval_minutes = n,
			SchedulePreset::EveryNHours { n } => self.interval_hours = n,
			SchedulePreset::FixedDaily { hour, minute } => {
				self.hour = hour;
				self.minute = minute;
			}
			SchedulePreset::FixedWeekly { hour, minute, day_of_week } => {
				self.hour = hour;
				self.minute = minute;
				self.day_of_week = day_of_week;
			}
			SchedulePreset::FixedMonthly { hour, minute, day_of_month } => {
				self.hour = hour;
				self.minute = minute;
				self.day_of_month = day_of_month;
			}
			_ => {}
		}
	}
}

/// The focusable sub-controls of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
	Preset,
	Interval,
	Hour,
	Minute,
	Weekday,
	DayOfMonth,
	Raw,
}

impl Control {
	/// Translation key for this control's label.
	pub fn label_key(&self) -> &'static str {
		match self {
			Self::Preset => "client.crons.input.preset",
			Self::Interval => "client.crons.input.interval",
			Self::Hour => "client.crons.input.hour",
			Self::Minute => "client.crons.input.minute",
			Self::Weekday => "client.crons.input.weekday",
			Self::DayOfMonth => "client.crons.input.day_of_month",
			Self::Raw => "client.crons.input.expression",
		}
	}
}

/// Controls visible for a preset kind, in tab order.
pub fn controls(kind: PresetKind) -> &'static [Control] {
	match kind {
		PresetKind::EveryNMinutes | PresetKind::EveryNHours => {
			&[Control::Preset, Control::Interval, Control::Raw]
		}
		PresetKind::FixedDaily => &[Control::Preset, Control::Hour, Control::Minute, Control::Raw],
		PresetKind::FixedWeekly => {
			&[Control::Preset, Control::Weekday, Control::Hour, Control::Minute, Control::Raw]
		}
		PresetKind::FixedMonthly => {
			&[Control::Preset, Control::DayOfMonth, Control::Hour, Control::Minute, Control::Raw]
		}
		_ => &[Control::Preset, Control::Raw],
	}
}

/// Outcome of handling one key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
	/// Event was not handled; propagate to other handlers.
	Ignored,
	/// Event updated internal state without changing the value.
	Handled,
	/// The expression changed. Hosts treat this as the change notification
	/// and propagate the new string to wherever the value is owned.
	Changed(String),
}

/// State for [`crate::CronInput`].
///
/// Owns the expression string on behalf of the hosting form and keeps the
/// preset controls in sync with it in both directions: external value
/// changes arrive through [`set_value`](Self::set_value) and re-derive the
/// preset state; user edits rebuild the expression and surface it through
/// [`EventOutcome::Changed`].
#[derive(Debug, Clone)]
pub struct CronInputState {
	value: String,
	kind: PresetKind,
	params: PresetParams,
	focus: Control,
	raw: RawFieldState,
}

impl Default for CronInputState {
	fn default() -> Self {
		Self::new("")
	}
}

impl CronInputState {
	/// Create state for an initial expression. The empty string selects the
	/// editor default (every minute).
	pub fn new(value: &str) -> Self {
		let mut state = Self {
			value: String::new(),
			kind: PresetKind::EveryMinute,
			params: PresetParams::default(),
			focus: Control::Preset,
			raw: RawFieldState::new(),
		};
		state.set_value(value);
		state
	}

	/// Sync from an externally-owned value: re-infer the preset and update
	/// the controls. Idempotent; never emits a change.
	pub fn set_value(&mut self, value: &str) {
		self.value = value.to_string();
		let preset = infer(value);
		self.kind = preset.kind();
		self.params.absorb(&preset);
		self.raw.set_content(value);
		if !controls(self.kind).contains(&self.focus) {
			self.focus = Control::Preset;
		}
	}

	pub fn value(&self) -> &str {
		&self.value
	}

	pub fn kind(&self) -> PresetKind {
		self.kind
	}

	pub fn params(&self) -> &PresetParams {
		&self.params
	}

	pub fn focus(&self) -> Control {
		self.focus
	}

	pub(crate) fn raw_mut(&mut self) -> &mut RawFieldState {
		&mut self.raw
	}

	pub(crate) fn raw(&self) -> &RawFieldState {
		&self.raw
	}

	/// Advisory syntactic validity of the current value.
	pub fn is_well_formed(&self) -> bool {
		is_well_formed(&self.value)
	}

	/// Current numeric value shown by a control.
	pub fn control_value(&self, control: Control) -> Option<u32> {
		match (control, self.kind) {
			(Control::Interval, PresetKind::EveryNMinutes) => Some(self.params.interval_minutes),
			(Control::Interval, _) => Some(self.params.interval_hours),
			(Control::Hour, _) => Some(self.params.hour),
			(Control::Minute, _) => Some(self.params.minute),
			(Control::Weekday, _) => Some(self.params.day_of_week),
			(Control::DayOfMonth, _) => Some(self.params.day_of_month),
			_ => None,
		}
	}

	/// Localized human description of the current preset.
	pub fn description(&self, ctx: &LocaleContext) -> String {
		let key = self.kind.description_key();
		match self.kind {
			PresetKind::EveryNMinutes => {
				ctx.t_fmt(key, &[("n", &self.params.interval_minutes.to_string())])
			}
			PresetKind::EveryNHours => {
				ctx.t_fmt(key, &[("n", &self.params.interval_hours.to_string())])
			}
			PresetKind::FixedDaily => ctx.t_fmt(key, &[("time", &self.time_string())]),
			PresetKind::FixedWeekly => ctx.t_fmt(
				key,
				&[("weekday", &self.weekday_name(ctx)), ("time", &self.time_string())],
			),
			PresetKind::FixedMonthly => ctx.t_fmt(
				key,
				&[("day", &self.params.day_of_month.to_string()), ("time", &self.time_string())],
			),
			_ => ctx.t(key),
		}
	}

	/// Next fire time of the current value, for hosts that preview it.
	pub fn next_run(&self, timezone: &str, after: DateTime<Utc>) -> netpanel_crons_core::Result<DateTime<Utc>> {
		schedule::next_occurrence(&self.value, timezone, after)
	}

	/// Handle a key event, returning what it did.
	///
	/// Total over arbitrary key sequences; unknown keys and modifier chords
	/// are reported as [`EventOutcome::Ignored`] for the host to act on.
	pub fn handle_key(&mut self, key: KeyEvent) -> EventOutcome {
		if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
			return EventOutcome::Ignored;
		}

		match key.code {
			KeyCode::Tab => {
				self.cycle_focus(1);
				EventOutcome::Handled
			}
			KeyCode::BackTab => {
				self.cycle_focus(-1);
				EventOutcome::Handled
			}
			KeyCode::Up => self.adjust_focused(1),
			KeyCode::Down => self.adjust_focused(-1),
			_ if self.focus == Control::Raw => self.handle_raw_key(key),
			_ => EventOutcome::Ignored,
		}
	}

	fn cycle_focus(&mut self, delta: i32) {
		let list = controls(self.kind);
		let idx = list.iter().position(|c| *c == self.focus).unwrap_or(0) as i32;
		let len = list.len() as i32;
		self.focus = list[((idx + delta).rem_euclid(len)) as usize];
	}

	fn adjust_focused(&mut self, delta: i32) -> EventOutcome {
		match self.focus {
			Control::Preset => self.cycle_kind(delta),
			Control::Raw => EventOutcome::Ignored,
			control => {
				let (min, max) = self.control_range(control);
				let current = self.control_value(control).unwrap_or(min);
				let next = (i64::from(current) + i64::from(delta)).clamp(i64::from(min), i64::from(max)) as u32;
				if next == current {
					return EventOutcome::Handled;
				}
				match (control, self.kind) {
					(Control::Interval, PresetKind::EveryNMinutes) => self.params.interval_minutes = next,
					(Control::Interval, _) => self.params.interval_hours = next,
					(Control::Hour, _) => self.params.hour = next,
					(Control::Minute, _) => self.params.minute = next,
					(Control::Weekday, _) => self.params.day_of_week = next,
					(Control::DayOfMonth, _) => self.params.day_of_month = next,
					_ => {}
				}
				self.rebuild()
			}
		}
	}

	fn control_range(&self, control: Control) -> (u32, u32) {
		match (control, self.kind) {
			(Control::Interval, PresetKind::EveryNMinutes) => (1, 59),
			(Control::Interval, _) => (1, 23),
			(Control::Hour, _) => (0, 23),
			(Control::Minute, _) => (0, 59),
			(Control::Weekday, _) => (0, 6),
			(Control::DayOfMonth, _) => (1, 31),
			_ => (0, 0),
		}
	}

	fn cycle_kind(&mut self, delta: i32) -> EventOutcome {
		let idx = PresetKind::ALL
			.iter()
			.position(|k| *k == self.kind)
			.unwrap_or(0) as i32;
		let len = PresetKind::ALL.len() as i32;
		let next = PresetKind::ALL[((idx + delta).rem_euclid(len)) as usize];
		self.kind = next;
		if next == PresetKind::Custom {
			// Custom has no canonical form; the current string stays and
			// editing moves to the raw field.
			return EventOutcome::Handled;
		}
		self.rebuild()
	}

	/// Recompute the expression from the selected kind and sticky params.
	fn rebuild(&mut self) -> EventOutcome {
		let value = self.params.preset(self.kind).expression();
		self.value = value.clone();
		self.raw.set_content(&self.value);
		EventOutcome::Changed(value)
	}

	fn handle_raw_key(&mut self, key: KeyEvent) -> EventOutcome {
		match key.code {
			KeyCode::Char(c) => {
				self.raw.insert_char(c);
				self.apply_raw_edit()
			}
			KeyCode::Backspace => {
				self.raw.delete_char();
				self.apply_raw_edit()
			}
			KeyCode::Delete => {
				self.raw.delete_char_forward();
				self.apply_raw_edit()
			}
			KeyCode::Left => {
				self.raw.move_cursor_left();
				EventOutcome::Handled
			}
			KeyCode::Right => {
				self.raw.move_cursor_right();
				EventOutcome::Handled
			}
			KeyCode::Home => {
				self.raw.move_cursor_start();
				EventOutcome::Handled
			}
			KeyCode::End => {
				self.raw.move_cursor_end();
				EventOutcome::Handled
			}
			_ => EventOutcome::Ignored,
		}
	}

	/// Typed text becomes the value directly, then the preset controls
	/// resynchronize from it.
	fn apply_raw_edit(&mut self) -> EventOutcome {
		self.value = self.raw.content().to_string();
		let preset = infer(&self.value);
		self.kind = preset.kind();
		self.params.absorb(&preset);
		EventOutcome::Changed(self.value.clone())
	}

	pub(crate) fn time_string(&self) -> String {
		format!("{:02}:{:02}", self.params.hour, self.params.minute)
	}

	pub(crate) fn weekday_name(&self, ctx: &LocaleContext) -> String {
		if self.params.day_of_week <= 6 {
			ctx.t(&format!("client.crons.weekday.{}", self.params.day_of_week))
		} else {
			self.params.day_of_week.to_string()
		}
	}
}
