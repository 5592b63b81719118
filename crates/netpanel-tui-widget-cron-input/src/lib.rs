// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Cron schedule input widget for the NetPanel TUI.
//!
//! A bidirectional form control around the preset codec in
//! `netpanel-crons-core`: external value changes re-derive the preset
//! controls, user edits on the preset controls rebuild the expression, and a
//! raw text field edits the string directly with an advisory
//! well-formedness marker. Hosts own the value; the widget surfaces every
//! change through [`EventOutcome::Changed`].

mod raw;
mod state;
mod widget;

pub use state::{controls, Control, CronInputState, EventOutcome, PresetParams};
pub use widget::CronInput;
