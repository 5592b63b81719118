// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for NetPanel.
//!
//! This crate provides translation support for the panel's client surfaces.
//! Catalogs are embedded static tables; both left-to-right (LTR) and
//! right-to-left (RTL) languages are supported.
//!
//! # String Naming Convention
//!
//! All translatable strings use a hierarchical dot-notation key format with
//! a `client.` prefix, e.g. `client.crons.preset.every_n_minutes`.
//!
//! # Example
//!
//! ```
//! use netpanel_common_i18n::{t, t_fmt, is_rtl, resolve_locale, LocaleContext};
//!
//! // Simple translation
//! let label = t("zh-CN", "client.crons.input.expression");
//!
//! // Translation with variables
//! let desc = t_fmt("en", "client.crons.preset.every_n_minutes", &[("n", "5")]);
//!
//! // Check for RTL language
//! if is_rtl("ar") {
//!     // mirror layout
//! }
//!
//! // Resolve the effective locale, then carry it as a context
//! let ctx = LocaleContext::new(resolve_locale(Some("es"), "en"));
//! ```

mod catalog;
mod context;
mod locale;
mod resolve;

pub use catalog::{t, t_fmt};
pub use context::LocaleContext;
pub use locale::{available_locales, is_rtl, is_supported, locale_info, Direction, LocaleInfo};
pub use resolve::resolve_locale;

pub use locale::{DEFAULT_LOCALE, LOCALES};
