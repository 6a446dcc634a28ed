//! neon-fx: ambient particle background and interactive visual effects.
//!
//! This crate provides a WASM-based effects layer for a web page: a canvas
//! particle background, cursor trails, button ripples and click sparks, an
//! interactive mascot element, a reduced-motion fallback for low-capability
//! environments, and a mobile viewport-height fix.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::effects::{EffectTheme, EffectsConfig, EffectsLayer};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("neon-fx: logging initialized");
}

/// Load effects configuration from a script element with
/// id="effects-config". Expected format: a JSON object; every field is
/// optional. Returns `None` when the element is absent or unparseable.
fn load_effects_config() -> Option<EffectsConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("effects-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<EffectsConfig>(&json_text) {
		Ok(config) => {
			info!("neon-fx: loaded page configuration");
			Some(config)
		}
		Err(e) => {
			warn!("neon-fx: failed to parse effects config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads configuration from the DOM and mounts the effects layer.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_effects_config().unwrap_or_default();

	view! {
		<Html attr:data-fx="neon" />
		<EffectsLayer config=config />
	}
}
