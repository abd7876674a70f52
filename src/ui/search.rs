use std::sync::mpsc::TryRecvError;

use super::App;
use crate::session::SessionEvent;

impl<'a> App<'a> {
	/// Forward an event to the session and submit any lookup it asks for.
	pub(crate) fn dispatch(&mut self, event: SessionEvent) {
		if let Some(request) = self.session.handle(event) {
			self.worker.submit(request);
		}
		self.sync_input();
	}

	/// Drain finished lookups into the session.
	pub(crate) fn pump_completions(&mut self) {
		loop {
			match self.worker.try_recv() {
				Ok(completion) => {
					self.session.apply(completion);
				}
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	/// Tab and Enter rewrite the input, so the widget follows the session.
	fn sync_input(&mut self) {
		if self.search_input.text() != self.session.input() {
			self.search_input.set_text(self.session.input().to_string());
		}
	}
}
