//! Short-lived visual artifacts: cursor trail dots, click sparks, button
//! ripples, and mascot excitement bursts.
//!
//! Every spawn follows the same lifecycle: build a styled node, append it
//! synchronously, register it with the animation registry, and schedule one
//! removal callback for its fixed lifetime. Removal is idempotent - a node
//! that already lost its parent is left alone - and always unregisters the
//! node so the registry only tracks live effects.

use std::cell::Cell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement};

use super::theme::{DotStyle, EffectTheme};
use super::visibility::{Animatable, AnimationRegistry, CssAnimationHandle};

/// Number of sparks launched per click.
pub const SPARK_COUNT: usize = 8;
/// Number of dots in a mascot excitement burst.
pub const BURST_COUNT: usize = 12;
/// How far burst dots travel, in pixels.
pub const BURST_RADIUS: f64 = 80.0;

/// Launch velocities for a radial spark fan: `count` directions at equal
/// angular spacing, each scaled to `speed`.
pub fn spark_velocities(count: usize, speed: f64) -> Vec<(f64, f64)> {
	(0..count)
		.map(|i| {
			let angle = TAU * i as f64 / count as f64;
			(angle.cos() * speed, angle.sin() * speed)
		})
		.collect()
}

/// Launch angles for an excitement burst, in radians.
pub fn burst_angles(count: usize) -> Vec<f64> {
	(0..count).map(|i| TAU * i as f64 / count as f64).collect()
}

/// Drops spawns that arrive faster than a minimum interval.
///
/// Pointer-move events can fire far more often than once per frame; without
/// a limit every event allocates a DOM node. One dot per interval is
/// visually identical to the unthrottled version.
pub struct SpawnThrottle {
	min_interval_ms: f64,
	last: Cell<Option<f64>>,
}

impl SpawnThrottle {
	pub fn new(min_interval_ms: f64) -> Self {
		Self {
			min_interval_ms,
			last: Cell::new(None),
		}
	}

	/// Returns true when a spawn at `now_ms` is allowed, recording it.
	pub fn allow(&self, now_ms: f64) -> bool {
		match self.last.get() {
			Some(last) if now_ms - last < self.min_interval_ms => false,
			_ => {
				self.last.set(Some(now_ms));
				true
			}
		}
	}
}

/// Creates transient effect nodes and guarantees their removal.
pub struct TransientEffectSpawner {
	document: Document,
	body: HtmlElement,
	theme: EffectTheme,
	registry: Rc<AnimationRegistry>,
	trail_throttle: SpawnThrottle,
}

impl TransientEffectSpawner {
	pub fn new(
		document: Document,
		theme: EffectTheme,
		registry: Rc<AnimationRegistry>,
		trail_min_interval_ms: f64,
	) -> Self {
		let body = document.body().expect("document has a body");
		Self {
			document,
			body,
			theme,
			registry,
			trail_throttle: SpawnThrottle::new(trail_min_interval_ms),
		}
	}

	/// One glowing dot at the pointer position, fading out over its
	/// lifetime. Rate-limited; returns whether a dot was actually spawned.
	pub fn spawn_trail_dot(&self, x: f64, y: f64) -> bool {
		if !self.trail_throttle.allow(js_sys::Date::now()) {
			return false;
		}

		let style = self.theme.trail.clone();
		if let Some(dot) = self.make_dot(&style, x, y) {
			let _ = dot.style().set_property("animation", "trail-fade 0.5s ease-out forwards");
			self.attach(dot, style.lifetime_ms);
		}
		true
	}

	/// Exactly [`SPARK_COUNT`] dots launched radially from the click point.
	pub fn spawn_click_sparks(&self, x: f64, y: f64) {
		let style = self.theme.spark.clone();
		for (vx, vy) in spark_velocities(SPARK_COUNT, self.theme.spark_speed) {
			let Some(spark) = self.make_dot(&style, x, y) else {
				continue;
			};
			let _ = spark.style().set_property("--vx", &format!("{vx}px"));
			let _ = spark.style().set_property("--vy", &format!("{vy}px"));
			let _ = spark
				.style()
				.set_property("animation", "spark-fly 0.8s ease-out forwards");
			self.attach(spark, style.lifetime_ms);
		}
	}

	/// A radial-gradient overlay expanding across the button's bounds.
	///
	/// The overlay is appended to the button itself, so the button is
	/// forced to `position: relative` for the overlay to anchor correctly.
	pub fn spawn_ripple(&self, button: &HtmlElement) {
		let Some(ripple) = self.create_div() else {
			return;
		};
		let style = ripple.style();
		let _ = style.set_property("position", "absolute");
		let _ = style.set_property("top", "0");
		let _ = style.set_property("left", "0");
		let _ = style.set_property("width", "100%");
		let _ = style.set_property("height", "100%");
		let _ = style.set_property(
			"background",
			"radial-gradient(circle, rgba(255,255,255,0.3) 0%, transparent 70%)",
		);
		let _ = style.set_property("transform", "scale(0)");
		let _ = style.set_property("pointer-events", "none");
		let _ = style.set_property("animation", "ripple-expand 0.6s ease-out");

		let _ = button.style().set_property("position", "relative");
		let _ = button.append_child(&ripple);
		self.register_and_schedule(ripple, self.theme.ripple_lifetime_ms);
	}

	/// [`BURST_COUNT`] dots launched radially from the element's center.
	pub fn spawn_excitement_burst(&self, anchor: &HtmlElement) {
		let rect = anchor.get_bounding_client_rect();
		let cx = rect.left() + rect.width() / 2.0;
		let cy = rect.top() + rect.height() / 2.0;

		let style = self.theme.burst.clone();
		for angle in burst_angles(BURST_COUNT) {
			let Some(dot) = self.make_dot(&style, cx, cy) else {
				continue;
			};
			let _ = dot.style().set_property("--angle", &format!("{angle}rad"));
			let _ = dot
				.style()
				.set_property("animation", "burst-fly 1.5s ease-out forwards");
			self.attach(dot, style.lifetime_ms);
		}
	}

	/// Detach every transient node still alive. Used on page unload.
	/// Pending removal timers that fire afterwards find their node already
	/// detached and no-op.
	pub fn remove_all(&self) {
		for node in self.live_nodes() {
			detach(&node);
		}
	}

	fn live_nodes(&self) -> Vec<HtmlElement> {
		let list = match self.document.query_selector_all("[data-neon-fx]") {
			Ok(list) => list,
			Err(_) => return Vec::new(),
		};
		(0..list.length())
			.filter_map(|i| list.item(i))
			.filter_map(|n| n.dyn_into::<HtmlElement>().ok())
			.collect()
	}

	fn create_div(&self) -> Option<HtmlElement> {
		let el: HtmlElement = self
			.document
			.create_element("div")
			.ok()?
			.dyn_into()
			.ok()?;
		// Marker attribute lets the unload sweep find stragglers
		let _ = el.set_attribute("data-neon-fx", "");
		Some(el)
	}

	/// A fixed-position glowing dot centered at `(x, y)`.
	fn make_dot(&self, style: &DotStyle, x: f64, y: f64) -> Option<HtmlElement> {
		let dot = self.create_div()?;
		let css = style.color.to_css();
		let s = dot.style();
		let _ = s.set_property("position", "fixed");
		let _ = s.set_property("left", &format!("{x}px"));
		let _ = s.set_property("top", &format!("{y}px"));
		let _ = s.set_property("width", &format!("{}px", style.size));
		let _ = s.set_property("height", &format!("{}px", style.size));
		let _ = s.set_property("background", &css);
		let _ = s.set_property("border-radius", "50%");
		let _ = s.set_property("pointer-events", "none");
		let _ = s.set_property("z-index", "1000");
		let _ = s.set_property("box-shadow", &format!("0 0 {}px {}", style.glow, css));
		Some(dot)
	}

	fn attach(&self, node: HtmlElement, lifetime_ms: i32) {
		let _ = self.body.append_child(&node);
		self.register_and_schedule(node, lifetime_ms);
	}

	/// Register the node for visibility pausing and schedule its removal.
	fn register_and_schedule(&self, node: HtmlElement, lifetime_ms: i32) {
		let handle: Rc<dyn Animatable> = Rc::new(CssAnimationHandle(node.clone()));
		self.registry.register(handle.clone());

		let registry = self.registry.clone();
		let removal = Closure::once_into_js(move || {
			registry.unregister(&handle);
			detach(&node);
		});

		let window = web_sys::window().expect("window available");
		let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
			removal.unchecked_ref(),
			lifetime_ms,
		);
	}
}

/// Remove a node from its parent if it still has one.
fn detach(node: &HtmlElement) {
	if let Some(parent) = node.parent_node() {
		let _ = parent.remove_child(node);
	}
}

#[cfg(test)]
mod tests {
	use std::f64::consts::TAU;

	use super::*;

	#[test]
	fn spark_fan_has_eight_distinct_equal_angles() {
		let velocities = spark_velocities(SPARK_COUNT, 100.0);
		assert_eq!(velocities.len(), 8);
		for (i, &(vx, vy)) in velocities.iter().enumerate() {
			let angle = TAU * i as f64 / 8.0;
			assert!((vx - angle.cos() * 100.0).abs() < 1e-9);
			assert!((vy - angle.sin() * 100.0).abs() < 1e-9);
		}
	}

	#[test]
	fn burst_angles_are_equally_spaced() {
		let angles = burst_angles(BURST_COUNT);
		assert_eq!(angles.len(), 12);
		for (i, &a) in angles.iter().enumerate() {
			assert!((a - TAU * i as f64 / 12.0).abs() < 1e-9);
		}
	}

	#[test]
	fn throttle_drops_spawns_inside_the_interval() {
		let throttle = SpawnThrottle::new(16.0);
		assert!(throttle.allow(1000.0));
		assert!(!throttle.allow(1010.0));
		assert!(!throttle.allow(1015.9));
		assert!(throttle.allow(1016.0));
		assert!(throttle.allow(1040.0));
	}
}
