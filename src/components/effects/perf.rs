//! Startup performance-tier selection.
//!
//! A one-shot decision: pages on very slow connections or low-memory
//! devices get a reduced-motion profile. The signals are optional vendor
//! APIs (`navigator.connection`, `navigator.deviceMemory`), so they are
//! probed dynamically through `Reflect` rather than typed bindings; a
//! missing signal counts as capable. The decision is never re-evaluated.

use js_sys::Reflect;
use log::info;
use wasm_bindgen::JsValue;
use web_sys::Window;

use super::styles;

/// Device memory below this many gigabytes selects the reduced tier.
const LOW_MEMORY_GB: f64 = 4.0;

/// Visual capability tier chosen at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PerformanceTier {
	/// Full visual profile.
	Full,
	/// Shortened animations, decorative extras disabled.
	Reduced,
}

/// Classify from the raw environment signals.
pub fn classify(effective_type: Option<&str>, device_memory_gb: Option<f64>) -> PerformanceTier {
	if matches!(effective_type, Some("slow-2g") | Some("2g")) {
		return PerformanceTier::Reduced;
	}
	if device_memory_gb.is_some_and(|gb| gb < LOW_MEMORY_GB) {
		return PerformanceTier::Reduced;
	}
	PerformanceTier::Full
}

/// Probe the environment and classify.
pub fn detect(window: &Window) -> PerformanceTier {
	let navigator = window.navigator();

	let effective_type = Reflect::get(navigator.as_ref(), &JsValue::from_str("connection"))
		.ok()
		.filter(|v| !v.is_undefined() && !v.is_null())
		.and_then(|conn| Reflect::get(&conn, &JsValue::from_str("effectiveType")).ok())
		.and_then(|v| v.as_string());

	let device_memory = Reflect::get(navigator.as_ref(), &JsValue::from_str("deviceMemory"))
		.ok()
		.and_then(|v| v.as_f64());

	classify(effective_type.as_deref(), device_memory)
}

/// Tag the document and inject the override stylesheet for the reduced
/// tier. Does nothing for the full tier.
pub fn apply(window: &Window, tier: PerformanceTier) {
	if tier != PerformanceTier::Reduced {
		return;
	}
	info!("neon-fx: reduced-motion profile selected");

	let Some(document) = window.document() else {
		return;
	};
	if let Some(body) = document.body() {
		let _ = body.class_list().add_1("reduced-motion");
	}
	styles::inject(&document, styles::REDUCED_MOTION_CSS);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn slow_connection_classes_reduce() {
		assert_eq!(classify(Some("slow-2g"), None), PerformanceTier::Reduced);
		assert_eq!(classify(Some("2g"), None), PerformanceTier::Reduced);
	}

	#[test]
	fn fast_connection_classes_do_not() {
		assert_eq!(classify(Some("3g"), None), PerformanceTier::Full);
		assert_eq!(classify(Some("4g"), None), PerformanceTier::Full);
	}

	#[test]
	fn low_memory_reduces_regardless_of_connection() {
		assert_eq!(classify(Some("4g"), Some(2.0)), PerformanceTier::Reduced);
		assert_eq!(classify(None, Some(3.9)), PerformanceTier::Reduced);
		assert_eq!(classify(None, Some(4.0)), PerformanceTier::Full);
	}

	#[test]
	fn missing_signals_default_to_full() {
		assert_eq!(classify(None, None), PerformanceTier::Full);
	}
}
