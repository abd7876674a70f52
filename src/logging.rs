//! Route `log` records into the in-terminal log pane.
//!
//! `tui-logger` buffers records on its own background thread, so the log pane
//! only has to render the widget.

use log::LevelFilter;

/// Install the `tui-logger` backend at the given level.
///
/// Calling this more than once keeps the first logger and only adjusts the
/// default level.
pub fn initialize(level: LevelFilter) {
	if let Err(err) = tui_logger::init_logger(level) {
		log::debug!("logger already initialised: {err:?}");
	}
	tui_logger::set_default_level(level);
}

/// Parse a level name such as `info` or `TRACE`. `off` disables logging.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
	value.trim().parse().ok()
}
