//! Host-page configuration for the effects layer.
//!
//! Everything here has a sensible default, so the layer works on a page
//! that ships no configuration at all. Selectors point at optional host
//! elements; a selector that matches nothing disables that feature.

use serde::Deserialize;

fn default_mascot_selector() -> String {
	".robot-dog".into()
}

fn default_eye_selector() -> String {
	".robot-eye".into()
}

fn default_status_selector() -> String {
	".subheadline".into()
}

fn default_parallax_selector() -> String {
	".grid-overlay".into()
}

fn default_button_selector() -> String {
	".social-btn".into()
}

fn default_easter_egg_text() -> String {
	"OK fine, you can virtual pet it. *Happy robot noises*".into()
}

fn default_trail_min_interval_ms() -> f64 {
	16.0
}

/// Effects layer configuration, deserialized from an optional JSON script
/// element in the host page.
#[derive(Clone, Debug, Deserialize)]
pub struct EffectsConfig {
	/// Selector for the interactive mascot element.
	#[serde(default = "default_mascot_selector")]
	pub mascot_selector: String,
	/// Selector for the mascot's eye sub-elements (color-flashed on click).
	#[serde(default = "default_eye_selector")]
	pub eye_selector: String,
	/// Selector for the status line swapped during the easter egg.
	#[serde(default = "default_status_selector")]
	pub status_selector: String,
	/// Selector for the decorative layer that scrolls with parallax.
	#[serde(default = "default_parallax_selector")]
	pub parallax_selector: String,
	/// Selector for buttons that get ripple and click sparks.
	#[serde(default = "default_button_selector")]
	pub button_selector: String,
	/// Status line text shown while the easter egg is active.
	#[serde(default = "default_easter_egg_text")]
	pub easter_egg_text: String,
	/// Minimum interval between cursor trail dots, in milliseconds.
	/// Bounds allocation under fast pointer movement.
	#[serde(default = "default_trail_min_interval_ms")]
	pub trail_min_interval_ms: f64,
}

impl Default for EffectsConfig {
	fn default() -> Self {
		serde_json::from_str("{}").expect("empty config must deserialize")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_json_yields_stock_defaults() {
		let config: EffectsConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config.mascot_selector, ".robot-dog");
		assert_eq!(config.button_selector, ".social-btn");
		assert_eq!(config.trail_min_interval_ms, 16.0);
	}

	#[test]
	fn partial_json_overrides_only_named_fields() {
		let config: EffectsConfig = serde_json::from_str(
			r##"{ "mascot_selector": "#pet", "trail_min_interval_ms": 50 }"##,
		)
		.unwrap();
		assert_eq!(config.mascot_selector, "#pet");
		assert_eq!(config.trail_min_interval_ms, 50.0);
		assert_eq!(config.status_selector, ".subheadline");
	}
}
