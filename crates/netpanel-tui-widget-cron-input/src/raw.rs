// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Cursor editing state for the raw expression field.

use unicode_segmentation::UnicodeSegmentation;

/// Single-line text editing state: content, byte cursor, horizontal scroll.
///
/// Cursor motion is grapheme-aware so multi-byte input never splits a
/// cluster.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawFieldState {
	content: String,
	cursor_position: usize,
	scroll_offset: usize,
}

impl RawFieldState {
	pub fn new() -> Self {
		Self::default()
	}

	/// Replace the content wholesale, e.g. when the external value changes.
	/// The cursor moves to the end.
	pub fn set_content(&mut self, content: impl Into<String>) {
		self.content = content.into();
		self.cursor_position = self.content.len();
		self.scroll_offset = 0;
	}

	pub fn insert_char(&mut self, c: char) {
		self.content.insert(self.cursor_position, c);
		self.cursor_position += c.len_utf8();
	}

	pub fn delete_char(&mut self) {
		if self.cursor_position > 0 {
			let prev_grapheme_start = self.content[..self.cursor_position]
				.grapheme_indices(true)
				.next_back()
				.map(|(i, _)| i)
				.unwrap_or(0);
			self.content.drain(prev_grapheme_start..self.cursor_position);
			self.cursor_position = prev_grapheme_start;
		}
	}

	pub fn delete_char_forward(&mut self) {
		if self.cursor_position < self.content.len() {
			if let Some((_, grapheme)) = self.content[self.cursor_position..].grapheme_indices(true).next() {
				let grapheme_len = grapheme.len();
				self.content.drain(self.cursor_position..self.cursor_position + grapheme_len);
			}
		}
	}

	pub fn move_cursor_left(&mut self) {
		if self.cursor_position > 0 {
			self.cursor_position = self.content[..self.cursor_position]
				.grapheme_indices(true)
				.next_back()
				.map(|(i, _)| i)
				.unwrap_or(0);
		}
	}

	pub fn move_cursor_right(&mut self) {
		if self.cursor_position < self.content.len() {
			if let Some((_, grapheme)) = self.content[self.cursor_position..].grapheme_indices(true).next() {
				self.cursor_position += grapheme.len();
			}
		}
	}

	pub fn move_cursor_start(&mut self) {
		self.cursor_position = 0;
	}

	pub fn move_cursor_end(&mut self) {
		self.cursor_position = self.content.len();
	}

	pub fn content(&self) -> &str {
		&self.content
	}

	pub fn cursor_position(&self) -> usize {
		self.cursor_position
	}

	pub fn scroll_offset(&self) -> usize {
		self.scroll_offset
	}

	/// Grapheme index of the cursor, for rendering.
	pub fn cursor_grapheme(&self) -> usize {
		self.content[..self.cursor_position].graphemes(true).count()
	}

	/// Clamp the scroll window so the cursor stays visible in `width` cells.
	pub fn scroll_to_cursor(&mut self, width: usize) {
		if width == 0 {
			return;
		}
		let cursor = self.cursor_grapheme();
		if cursor < self.scroll_offset {
			self.scroll_offset = cursor;
		} else if cursor >= self.scroll_offset + width {
			self.scroll_offset = cursor.saturating_sub(width - 1);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_insert_and_cursor() {
		let mut state = RawFieldState::new();
		state.insert_char('0');
		state.insert_char(' ');
		state.insert_char('*');
		assert_eq!(state.content(), "0 *");
		assert_eq!(state.cursor_position(), 3);
	}

	#[test]
	fn test_delete_char() {
		let mut state = RawFieldState::new();
		state.set_content("0 *");
		state.delete_char();
		assert_eq!(state.content(), "0 ");
		assert_eq!(state.cursor_position(), 2);
	}

	#[test]
	fn test_delete_forward() {
		let mut state = RawFieldState::new();
		state.set_content("0 *");
		state.move_cursor_start();
		state.delete_char_forward();
		assert_eq!(state.content(), " *");
		assert_eq!(state.cursor_position(), 0);
	}

	#[test]
	fn test_cursor_movement() {
		let mut state = RawFieldState::new();
		state.set_content("abc");
		state.move_cursor_start();
		assert_eq!(state.cursor_position(), 0);
		state.move_cursor_end();
		assert_eq!(state.cursor_position(), 3);
		state.move_cursor_left();
		assert_eq!(state.cursor_position(), 2);
		state.move_cursor_right();
		assert_eq!(state.cursor_position(), 3);
	}

	#[test]
	fn test_set_content_moves_cursor_to_end() {
		let mut state = RawFieldState::new();
		state.set_content("0 * * * * *");
		assert_eq!(state.cursor_position(), state.content().len());
		assert_eq!(state.scroll_offset(), 0);
	}

	#[test]
	fn test_grapheme_navigation() {
		let mut state = RawFieldState::new();
		for c in "héllo".chars() {
			state.insert_char(c);
		}
		state.move_cursor_start();
		state.move_cursor_right();
		state.move_cursor_right();
		assert_eq!(state.cursor_position(), 3);
		state.move_cursor_left();
		assert_eq!(state.cursor_position(), 1);
	}

	#[test]
	fn test_scroll_follows_cursor() {
		let mut state = RawFieldState::new();
		state.set_content("0 30 8 * * 5");
		state.scroll_to_cursor(6);
		// Cursor at grapheme 12, window of 6 -> offset lands at 7.
		assert_eq!(state.scroll_offset(), 7);
		state.move_cursor_start();
		state.scroll_to_cursor(6);
		assert_eq!(state.scroll_offset(), 0);
	}
}
