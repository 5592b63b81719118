// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the NetPanel cron schedule editor.
//!
//! This crate provides the schedule preset model shared by the panel's
//! editing surfaces: the bidirectional mapping between human-friendly
//! presets (every minute, every N hours, fixed weekly time, ...) and the
//! panel's canonical 6-field cron expression
//! (`second minute hour day-of-month month day-of-week`), syntactic
//! well-formedness checking, and next-run calculation.
//!
//! # Overview
//!
//! - [`infer`] maps any string to a [`SchedulePreset`], degrading to
//!   [`SchedulePreset::Custom`] instead of failing; the empty string maps to
//!   the editor default (every minute).
//! - [`SchedulePreset::expression`] renders the canonical string for a
//!   preset; together with [`infer`] it round-trips for every recognized
//!   shape.
//! - [`is_well_formed`] is the advisory field-count check editors display
//!   next to raw input.
//! - [`schedule::next_occurrence`] computes upcoming fire times in a given
//!   timezone; unlike the codec it is strict and can fail.

pub mod error;
pub mod expression;
pub mod preset;
pub mod schedule;

pub use error::{CronsError, Result};
pub use expression::{is_well_formed, FIELD_COUNT};
pub use preset::{infer, PresetKind, SchedulePreset};
pub use schedule::{next_occurrence, validate_expression, validate_timezone};
