use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
	text::{Line, Span},
	widgets::{Block, List, ListItem, ListState, Paragraph},
};
use throbber_widgets_tui::Throbber;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};
use unicode_width::UnicodeWidthStr;

use super::App;
use crate::lexicon::WordMatch;
use crate::session::Phase;
use crate::source::MIN_QUERY_CHARS;

const PROMPT: &str = "> ";
const LOG_PANE_HEIGHT: u16 = 8;

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let (main_area, log_area) = if self.log_pane && area.height > LOG_PANE_HEIGHT * 2 {
			let split = Layout::default()
				.direction(Direction::Vertical)
				.constraints([Constraint::Min(1), Constraint::Length(LOG_PANE_HEIGHT)])
				.split(area);
			(split[0], Some(split[1]))
		} else {
			(area, None)
		};

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.split(main_area);

		self.render_header(frame, layout[1], layout[2]);
		let body = layout[4];

		if self.session.phase() == Phase::ShowingResults {
			self.render_results(frame, body);
		} else {
			let [input_area, list_area] = split_input(body);
			self.render_input(frame, input_area);
			self.render_suggestions(frame, list_area);
		}

		let help = Paragraph::new(help_line(self.session.phase())).style(self.theme.muted_style());
		frame.render_widget(help, layout[5]);

		if let Some(log_area) = log_area {
			self.render_logs(frame, log_area);
		}
	}

	fn render_header(&self, frame: &mut Frame, title_area: Rect, description_area: Rect) {
		let title = Paragraph::new(self.title.as_str())
			.alignment(Alignment::Center)
			.style(self.theme.title_style());
		frame.render_widget(title, title_area);

		let description = Paragraph::new(self.description.as_str())
			.alignment(Alignment::Center)
			.style(self.theme.description_style());
		frame.render_widget(description, description_area);
	}

	fn render_input(&self, frame: &mut Frame, area: Rect) {
		let prompt_width = PROMPT.width() as u16;
		let [prompt_area, text_area] = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Length(prompt_width), Constraint::Min(1)])
			.areas(area);

		frame.render_widget(
			Paragraph::new(PROMPT).style(self.theme.prompt_style()),
			prompt_area,
		);
		self.search_input.render_textarea(frame, text_area);

		if self.is_loading() && text_area.width > 2 {
			let spinner = Throbber::default()
				.style(self.theme.muted_style())
				.throbber_style(self.theme.muted_style())
				.to_symbol_span(&self.throbber_state);
			let spinner_area = Rect {
				x: text_area.right().saturating_sub(2),
				width: 2,
				..text_area
			};
			frame.render_widget(Paragraph::new(Line::from(spinner)), spinner_area);
		}
	}

	fn render_suggestions(&self, frame: &mut Frame, area: Rect) {
		if area.height == 0 {
			return;
		}

		let typed = self.session.input().trim().chars().count();
		if typed > 0 && typed < MIN_QUERY_CHARS {
			let hint = Paragraph::new("Type at least 3 characters for suggestions...")
				.style(self.theme.muted_style());
			frame.render_widget(hint, area);
			return;
		}

		if self.session.phase() != Phase::ShowingSuggestions {
			return;
		}

		let suggestions = self.session.suggestions();
		let word_width = column_width(suggestions);
		let items: Vec<ListItem> = suggestions
			.iter()
			.map(|item| {
				let padding = word_width.saturating_sub(item.word.width());
				ListItem::new(Line::from(vec![
					Span::styled(item.word.clone(), self.theme.result_style()),
					Span::raw(" ".repeat(padding + 2)),
					Span::styled(format!("Score: {}", item.score), self.theme.score_style()),
				]))
			})
			.collect();

		let list = List::new(items)
			.highlight_style(self.theme.selected_style())
			.highlight_symbol("│ ");
		let mut state = ListState::default().with_selected(self.session.selected());
		frame.render_stateful_widget(list, area, &mut state);
	}

	fn render_results(&self, frame: &mut Frame, area: Rect) {
		let results = self.session.committed().unwrap_or_default();
		if results.is_empty() {
			let empty = Paragraph::new("No results found.").style(self.theme.no_results_style());
			frame.render_widget(empty, area);
			return;
		}

		let number_width = results.len().to_string().len() + 1;
		let lines: Vec<Line> = results
			.iter()
			.enumerate()
			.map(|(index, item)| {
				Line::from(vec![
					Span::raw("  "),
					Span::styled(
						format!("{:>number_width$}", format!("{}.", index + 1)),
						self.theme.number_style(),
					),
					Span::raw(" "),
					Span::styled(item.word.clone(), self.theme.result_style()),
					Span::raw(" "),
					Span::styled(format!("({})", item.score), self.theme.score_style()),
				])
			})
			.collect();
		frame.render_widget(Paragraph::new(lines), area);
	}

	fn render_logs(&self, frame: &mut Frame, area: Rect) {
		let widget = TuiLoggerWidget::default()
			.block(Block::bordered().title("Log"))
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.output_target(false)
			.output_file(false)
			.output_line(false)
			.style(self.theme.muted_style());
		frame.render_widget(widget, area);
	}
}

/// One row for the input, the rest (after a spacer) for suggestions.
fn split_input(area: Rect) -> [Rect; 2] {
	let [input, _spacer, list] = Layout::vertical([
		Constraint::Length(1),
		Constraint::Length(1),
		Constraint::Min(0),
	])
	.areas(area);
	[input, list]
}

fn column_width(items: &[WordMatch]) -> usize {
	items.iter().map(|item| item.word.width()).max().unwrap_or(0)
}

pub(crate) fn help_line(phase: Phase) -> &'static str {
	match phase {
		Phase::ShowingResults => "esc back • ctrl+c quit",
		_ => "↑ up • ↓ down • tab autocomplete • enter search • esc quit • ctrl+c quit",
	}
}
