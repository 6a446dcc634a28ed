//! Mascot click interaction and the five-click easter egg.
//!
//! Every click plays a short reactive animation and eye-color flash. The
//! fifth click from idle additionally swaps the status line and plays a
//! page-wide hue rotation for three seconds, after which everything
//! reverts. If the mascot element is not on the page the whole feature
//! silently no-ops.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use web_sys::{Document, HtmlElement, MouseEvent};

use super::config::EffectsConfig;
use super::dom;
use super::spawn::TransientEffectSpawner;
use super::theme::EffectTheme;
use super::visibility::{AnimationRegistry, CssAnimationHandle};

/// Clicks needed to trigger the easter egg.
const EASTER_EGG_THRESHOLD: u32 = 5;

/// Mascot interaction phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MascotPhase {
	Idle,
	EasterEggActive,
}

/// What a single click produced. The reactive flash always plays; the
/// easter egg fires at most once per active window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickOutcome {
	pub easter_egg: bool,
}

/// Pure click counter and easter-egg state machine.
///
/// Clicks during the active window still count toward the next cycle, but
/// a new easter egg can only fire after the current one settles; the
/// active window's timer is never extended by further clicks.
#[derive(Debug)]
pub struct MascotCounter {
	clicks: u32,
	phase: MascotPhase,
}

impl MascotCounter {
	pub fn new() -> Self {
		Self {
			clicks: 0,
			phase: MascotPhase::Idle,
		}
	}

	pub fn phase(&self) -> MascotPhase {
		self.phase
	}

	/// Record one click, reporting whether the easter egg fires.
	pub fn record_click(&mut self) -> ClickOutcome {
		self.clicks += 1;
		if self.phase == MascotPhase::Idle && self.clicks >= EASTER_EGG_THRESHOLD {
			self.clicks = 0;
			self.phase = MascotPhase::EasterEggActive;
			ClickOutcome { easter_egg: true }
		} else {
			ClickOutcome { easter_egg: false }
		}
	}

	/// Return to idle once the easter-egg window ends.
	pub fn settle(&mut self) {
		self.phase = MascotPhase::Idle;
	}
}

impl Default for MascotCounter {
	fn default() -> Self {
		Self::new()
	}
}

/// Wire up mascot click handling. No-ops when the mascot is absent.
pub fn wire_mascot(
	document: &Document,
	config: &EffectsConfig,
	theme: &EffectTheme,
	spawner: Rc<TransientEffectSpawner>,
	registry: Rc<AnimationRegistry>,
) {
	let Some(mascot) = dom::query::<HtmlElement>(document, &config.mascot_selector) else {
		debug!("neon-fx: no mascot element, skipping interaction wiring");
		return;
	};

	// The mascot's resting float animation participates in visibility
	// pausing like everything else.
	registry.register(Rc::new(CssAnimationHandle(mascot.clone())));

	let counter = Rc::new(RefCell::new(MascotCounter::new()));
	let document = document.clone();
	let config = config.clone();
	let theme = theme.clone();

	let mascot_click = mascot.clone();
	dom::listen::<MouseEvent>(&mascot, "click", move |_| {
		let outcome = counter.borrow_mut().record_click();

		play_reactive_flash(&document, &config, &theme, &mascot_click);
		spawner.spawn_excitement_burst(&mascot_click);

		if outcome.easter_egg {
			play_easter_egg(&document, &config, &theme, counter.clone());
		}
	});
}

/// Restart the excitement animation and flash the eyes, reverting after
/// the flash window.
fn play_reactive_flash(
	document: &Document,
	config: &EffectsConfig,
	theme: &EffectTheme,
	mascot: &HtmlElement,
) {
	// Clearing the animation and forcing a reflow restarts it from frame 0
	let _ = mascot.style().set_property("animation", "none");
	let _ = mascot.offset_height();
	let _ = mascot
		.style()
		.set_property("animation", "mascot-excitement 1s ease-in-out");

	let flash_css = theme.flash_color.to_css();
	for eye in dom::query_all::<HtmlElement>(document, &config.eye_selector) {
		let _ = eye.style().set_property("background", &flash_css);
		let _ = eye
			.style()
			.set_property("box-shadow", &format!("0 0 15px {flash_css}"));
	}

	let rest_css = theme.rest_color.to_css();
	let document = document.clone();
	let eye_selector = config.eye_selector.clone();
	let mascot = mascot.clone();
	dom::set_timeout(
		move || {
			for eye in dom::query_all::<HtmlElement>(&document, &eye_selector) {
				let _ = eye.style().set_property("background", &rest_css);
				let _ = eye
					.style()
					.set_property("box-shadow", &format!("0 0 10px {rest_css}"));
			}
			let _ = mascot
				.style()
				.set_property("animation", "mascot-float 4s ease-in-out infinite");
		},
		theme.flash_ms,
	);
}

/// Swap the status line and hue-rotate the page, reverting after the
/// easter-egg window and settling the counter back to idle.
fn play_easter_egg(
	document: &Document,
	config: &EffectsConfig,
	theme: &EffectTheme,
	counter: Rc<RefCell<MascotCounter>>,
) {
	let Some(status) = dom::query::<HtmlElement>(document, &config.status_selector) else {
		// Nothing to show; settle immediately so the next cycle can fire
		counter.borrow_mut().settle();
		return;
	};

	let original_text = status.text_content().unwrap_or_default();
	let flash_css = theme.flash_color.to_css();
	status.set_text_content(Some(&config.easter_egg_text));
	let _ = status.style().set_property("color", &flash_css);
	let _ = status
		.style()
		.set_property("text-shadow", &format!("0 0 10px {flash_css}"));

	if let Some(body) = document.body() {
		let _ = body
			.style()
			.set_property("animation", "rainbow-glow 2s ease-in-out");
	}

	let document = document.clone();
	dom::set_timeout(
		move || {
			status.set_text_content(Some(&original_text));
			let _ = status.style().set_property("color", "#cccccc");
			let _ = status.style().set_property("text-shadow", "none");
			if let Some(body) = document.body() {
				let _ = body.style().set_property("animation", "none");
			}
			counter.borrow_mut().settle();
		},
		theme.easter_egg_ms,
	);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fifth_click_fires_exactly_once() {
		let mut counter = MascotCounter::new();
		for _ in 0..4 {
			assert!(!counter.record_click().easter_egg);
		}
		assert!(counter.record_click().easter_egg);
		assert_eq!(counter.phase(), MascotPhase::EasterEggActive);
	}

	#[test]
	fn sixth_click_starts_a_fresh_count() {
		let mut counter = MascotCounter::new();
		for _ in 0..5 {
			counter.record_click();
		}
		counter.settle();

		// Clicks 6..9 are a fresh run of 4; the 10th fires again
		for _ in 0..4 {
			assert!(!counter.record_click().easter_egg);
		}
		assert!(counter.record_click().easter_egg);
	}

	#[test]
	fn no_retrigger_while_the_window_is_active() {
		let mut counter = MascotCounter::new();
		for _ in 0..5 {
			counter.record_click();
		}
		assert_eq!(counter.phase(), MascotPhase::EasterEggActive);

		// Hammering the mascot during the window never re-fires
		for _ in 0..10 {
			assert!(!counter.record_click().easter_egg);
		}

		// Accumulated clicks carry over; the first click after settling
		// crosses the threshold again
		counter.settle();
		assert!(counter.record_click().easter_egg);
	}
}
