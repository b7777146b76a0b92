//! Experimental editor features gated by shell capabilities.

use serde::{Deserialize, Serialize};

/// Feature capabilities the application shell hands to the render hook.
///
/// Shells that pass nothing get the all-off default; features only turn
/// on when the host explicitly grants them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
	/// User mention suggestions inside text blocks.
	pub mentions: bool,
	/// Cross-site post embedding.
	pub xposts: bool,
	/// Saving block compositions for reuse.
	pub reusable_blocks: bool,
}

/// The experimental features that ended up enabled for this session.
///
/// Separated from [`Capabilities`] so the shell's wire format can evolve
/// without leaking into the editor-facing feature set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExperimentFlags {
	/// Mention suggestions are available.
	pub mentions: bool,
	/// Cross-site post embedding is available.
	pub xposts: bool,
	/// Reusable block storage is available.
	pub reusable_blocks: bool,
}

impl ExperimentFlags {
	/// Derives the session's feature set from shell capabilities.
	pub fn from_capabilities(capabilities: &Capabilities) -> Self {
		Self {
			mentions: capabilities.mentions,
			xposts: capabilities.xposts,
			reusable_blocks: capabilities.reusable_blocks,
		}
	}

	/// Names of the enabled features, for diagnostics.
	pub fn enabled(&self) -> Vec<&'static str> {
		let mut enabled = Vec::new();
		if self.mentions {
			enabled.push("mentions");
		}
		if self.xposts {
			enabled.push("xposts");
		}
		if self.reusable_blocks {
			enabled.push("reusable_blocks");
		}
		enabled
	}
}
