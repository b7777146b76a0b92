//! Font-weight correction for the mobile text stack.
//!
//! The platform text renderer only honors `normal` and `bold`; anything
//! else (numeric weights, `semibold`, ...) silently falls back to a
//! platform-dependent face. Correcting the defaults up front keeps text
//! rendering consistent across both mobile platforms.

use serde::{Deserialize, Serialize};

/// Shared text defaults the shell applies to editor text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextDefaults {
	/// CSS font weight, e.g. `normal`, `bold`, `600`.
	pub font_weight: String,
}

impl Default for TextDefaults {
	fn default() -> Self {
		Self { font_weight: "normal".to_owned() }
	}
}

/// Maps a CSS font weight onto the two weights the platform renders.
///
/// Numeric weights of 600 and up, and the heavier named weights, become
/// `bold`; everything else (including unknown values) becomes `normal`.
pub fn corrected_font_weight(weight: &str) -> &'static str {
	let weight = weight.trim();
	if let Ok(numeric) = weight.parse::<u16>() {
		return if numeric >= 600 { "bold" } else { "normal" };
	}
	match weight.to_ascii_lowercase().as_str() {
		"bold" | "bolder" | "semibold" | "heavy" | "black" => "bold",
		_ => "normal",
	}
}

/// Corrects the weight in a [`TextDefaults`] in place.
pub fn correct_text_defaults(defaults: &mut TextDefaults) {
	defaults.font_weight = corrected_font_weight(&defaults.font_weight).to_owned();
}
