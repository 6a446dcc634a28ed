//! Mobile viewport-height correction.
//!
//! Mobile browser chrome makes `100vh` unreliable, so the real inner
//! height is published as CSS custom properties on the document root.
//! Resize events are debounced; orientation changes re-apply after a fixed
//! delay because the viewport settles late.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

use super::dom;

/// Debounce window for resize events, in milliseconds.
const RESIZE_DEBOUNCE_MS: i32 = 100;
/// Delay after an orientation change before re-measuring.
const ORIENTATION_DELAY_MS: i32 = 500;

/// Publish `--vh` and `--full-height` from the current inner height.
pub fn apply(window: &Window) {
	let Some(height) = window.inner_height().ok().and_then(|v| v.as_f64()) else {
		return;
	};
	let Some(document) = window.document() else {
		return;
	};
	let Some(root) = document.document_element() else {
		return;
	};
	let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() else {
		return;
	};

	let _ = root
		.style()
		.set_property("--vh", &format!("{}px", height * 0.01));
	let _ = root
		.style()
		.set_property("--full-height", &format!("{height}px"));
}

/// Install the resize and orientation-change listeners.
pub fn install(window: &Window) {
	apply(window);

	let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let debounce_window = window.clone();
	let debounce_pending = pending.clone();
	dom::listen::<Event>(window, "resize", move |_| {
		if let Some(id) = debounce_pending.take() {
			dom::clear_timeout(&debounce_window, id);
		}
		let apply_window = debounce_window.clone();
		let done = debounce_pending.clone();
		let id = dom::set_timeout_with_id(
			move || {
				done.set(None);
				apply(&apply_window);
			},
			RESIZE_DEBOUNCE_MS,
		);
		debounce_pending.set(Some(id));
	});

	let orientation_window = window.clone();
	dom::listen::<Event>(window, "orientationchange", move |_| {
		let apply_window = orientation_window.clone();
		dom::set_timeout(move || apply(&apply_window), ORIENTATION_DELAY_MS);
	});
}
