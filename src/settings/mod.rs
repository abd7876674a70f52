//! Configuration loading and resolution.
//!
//! Values are layered from config files, `PHOENICIAN__*` environment variables
//! and command-line flags. [`load`] is the entry point and returns a validated
//! [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
