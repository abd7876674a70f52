use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::session::{Phase, SessionEvent};

impl<'a> App<'a> {
	/// Translate a key press into session events. Returns `true` once the
	/// session is quitting.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
		match key.code {
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.dispatch(SessionEvent::Quit);
			}
			KeyCode::Esc => {
				if self.session.phase() == Phase::ShowingResults {
					self.dispatch(SessionEvent::Back);
				} else {
					self.dispatch(SessionEvent::Quit);
				}
			}
			KeyCode::Enter => self.dispatch(SessionEvent::Enter),
			KeyCode::Tab => self.dispatch(SessionEvent::Tab),
			KeyCode::Up => self.dispatch(SessionEvent::Up),
			KeyCode::Down => self.dispatch(SessionEvent::Down),
			_ => {
				if self.search_input.input(key) {
					let text = self.search_input.text().to_string();
					self.dispatch(SessionEvent::TextChanged(text));
				}
			}
		}
		self.session.is_quitting()
	}
}
