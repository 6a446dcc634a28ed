//! Thin DOM helpers shared by the effect modules.
//!
//! Long-lived event handlers are handed to the JS garbage collector via
//! [`Closure::into_js_value`]; the event target keeps them alive for as
//! long as it exists, which for this crate is the page lifetime.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use web_sys::{Document, EventTarget};

/// Query a single element and cast it, or `None` if absent or mistyped.
pub fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
	document
		.query_selector(selector)
		.ok()
		.flatten()?
		.dyn_into()
		.ok()
}

/// Query all matching elements that cast to `T`.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
	let Ok(list) = document.query_selector_all(selector) else {
		return Vec::new();
	};
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<T>().ok())
		.collect()
}

/// Attach a persistent event listener.
pub fn listen<E>(target: &EventTarget, kind: &str, handler: impl FnMut(E) + 'static)
where
	E: FromWasmAbi + 'static,
{
	let callback = Closure::<dyn FnMut(E)>::new(handler).into_js_value();
	let _ = target.add_event_listener_with_callback(kind, callback.unchecked_ref());
}

/// Run `callback` once after `delay_ms` milliseconds.
pub fn set_timeout(callback: impl FnOnce() + 'static, delay_ms: i32) {
	let window = web_sys::window().expect("window available");
	let closure = Closure::once_into_js(callback);
	let _ = window
		.set_timeout_with_callback_and_timeout_and_arguments_0(closure.unchecked_ref(), delay_ms);
}

/// Cancel a pending timeout by id.
pub fn clear_timeout(window: &web_sys::Window, id: i32) {
	window.clear_timeout_with_handle(id);
}

/// Like [`set_timeout`], returning the timer id for cancellation.
pub fn set_timeout_with_id(callback: impl FnOnce() + 'static, delay_ms: i32) -> i32 {
	let window = web_sys::window().expect("window available");
	let closure = Closure::once_into_js(callback);
	window
		.set_timeout_with_callback_and_timeout_and_arguments_0(closure.unchecked_ref(), delay_ms)
		.unwrap_or(0)
}
