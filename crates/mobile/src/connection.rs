//! Connected-service state for the editor session.

use serde::{Deserialize, Serialize};

/// State of the site connection the shell hands to the render hook.
///
/// Shells that have no connection information yet omit it; the render
/// setup falls back to [`ConnectionState::default`], a single active site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionState {
	/// Identifier of the site the editor session belongs to.
	pub site_id: u64,
	/// Whether the connected service is active for this site.
	pub active: bool,
}

impl Default for ConnectionState {
	fn default() -> Self {
		Self { site_id: 1, active: true }
	}
}
