use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

const CHAR_LIMIT: usize = 156;

/// Single-line text input backed by [`TextArea`].
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
	placeholder: Style,
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let placeholder = Style::new().add_modifier(Modifier::DIM);
		let mut input = Self {
			textarea: TextArea::default(),
			placeholder,
		};
		input.set_text(initial.into());
		input
	}

	#[must_use]
	pub fn with_placeholder_style(mut self, style: Style) -> Self {
		self.placeholder = style;
		self.textarea.set_placeholder_style(style);
		self
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Feed a key to the editor. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let before = self.text().to_string();
		self.textarea.input(key);
		if self.textarea.lines().len() > 1 {
			let joined = self.textarea.lines().concat();
			self.set_text(joined);
		}
		if self.text().chars().count() > CHAR_LIMIT {
			let truncated: String = self.text().chars().take(CHAR_LIMIT).collect();
			self.set_text(truncated);
		}
		self.text() != before
	}

	/// Replace the content, placing the cursor at the end.
	pub fn set_text(&mut self, text: String) {
		let mut textarea = TextArea::new(vec![text]);
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text("Start typing...");
		textarea.set_placeholder_style(self.placeholder);
		textarea.move_cursor(CursorMove::End);
		self.textarea = textarea;
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}
