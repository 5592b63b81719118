// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct BorderStyles {
	pub normal: Style,
	pub focused: Style,
	pub error: Style,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyles {
	pub normal: Style,
	pub bold: Style,
	pub dim: Style,
	pub placeholder: Style,
	pub error: Style,
	pub success: Style,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
	pub name: String,
	pub borders: BorderStyles,
	pub text: TextStyles,
	pub selection: Style,
	pub cursor: Style,
}

impl Default for Theme {
	fn default() -> Self {
		Self::dark()
	}
}

impl Theme {
	pub fn dark() -> Self {
		let text_color = Color::White;
		let muted = Color::DarkGray;
		let accent = Color::Cyan;

		Self {
			name: "dark".to_string(),
			borders: BorderStyles {
				normal: Style::default().fg(muted),
				focused: Style::default().fg(accent),
				error: Style::default().fg(Color::Red),
			},
			text: TextStyles {
				normal: Style::default().fg(text_color),
				bold: Style::default().fg(text_color).add_modifier(Modifier::BOLD),
				dim: Style::default().fg(muted),
				placeholder: Style::default().fg(Color::Rgb(100, 100, 100)),
				error: Style::default().fg(Color::Red),
				success: Style::default().fg(Color::Green),
			},
			selection: Style::default().bg(accent).fg(Color::Black),
			cursor: Style::default().bg(Color::White).fg(Color::Black),
		}
	}

	pub fn light() -> Self {
		let text_color = Color::Black;
		let muted = Color::Gray;
		let accent = Color::Blue;

		Self {
			name: "light".to_string(),
			borders: BorderStyles {
				normal: Style::default().fg(muted),
				focused: Style::default().fg(accent),
				error: Style::default().fg(Color::Red),
			},
			text: TextStyles {
				normal: Style::default().fg(text_color),
				bold: Style::default().fg(text_color).add_modifier(Modifier::BOLD),
				dim: Style::default().fg(muted),
				placeholder: Style::default().fg(Color::Rgb(160, 160, 160)),
				error: Style::default().fg(Color::Red),
				success: Style::default().fg(Color::Green),
			},
			selection: Style::default().bg(accent).fg(Color::White),
			cursor: Style::default().bg(Color::Black).fg(Color::White),
		}
	}

	/// Select a theme by configured name, defaulting to dark.
	pub fn from_name(name: &str) -> Self {
		match name {
			"light" => Self::light(),
			_ => Self::dark(),
		}
	}
}
