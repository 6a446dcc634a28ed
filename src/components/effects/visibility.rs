//! Pause/resume of running animations when the page is hidden.
//!
//! Instead of sweeping every DOM element on each visibility change, the
//! effects layer keeps a registry of the things it animates. Each handle
//! knows how to pause and resume itself: CSS-animated nodes flip their
//! `animation-play-state`, the canvas loop stops re-arming its next frame.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Event, HtmlElement};

use super::dom;

/// Something the effects layer animates and can pause.
pub trait Animatable {
	fn pause(&self);
	fn resume(&self);
}

/// A CSS-animated element; paused via `animation-play-state`.
pub struct CssAnimationHandle(pub HtmlElement);

impl Animatable for CssAnimationHandle {
	fn pause(&self) {
		let _ = self.0.style().set_property("animation-play-state", "paused");
	}

	fn resume(&self) {
		let _ = self
			.0
			.style()
			.set_property("animation-play-state", "running");
	}
}

/// Registry of every live animatable handle the effects layer owns.
///
/// Transient effects register on spawn and unregister from their removal
/// callback, so the registry only ever holds live handles.
#[derive(Default)]
pub struct AnimationRegistry {
	handles: RefCell<Vec<Rc<dyn Animatable>>>,
}

impl AnimationRegistry {
	pub fn new() -> Rc<Self> {
		Rc::new(Self::default())
	}

	pub fn register(&self, handle: Rc<dyn Animatable>) {
		self.handles.borrow_mut().push(handle);
	}

	/// Drop a handle by identity. Safe to call for a handle that was never
	/// registered or was already removed.
	pub fn unregister(&self, handle: &Rc<dyn Animatable>) {
		self.handles
			.borrow_mut()
			.retain(|h| !Rc::ptr_eq(h, handle));
	}

	pub fn pause_all(&self) {
		for h in self.handles.borrow().iter() {
			h.pause();
		}
	}

	pub fn resume_all(&self) {
		for h in self.handles.borrow().iter() {
			h.resume();
		}
	}

	#[cfg(test)]
	fn len(&self) -> usize {
		self.handles.borrow().len()
	}
}

/// Install the page-visibility listener: hidden pauses every registered
/// handle, visible resumes them. Applies uniformly, never selectively.
pub fn install_gate(document: &Document, registry: Rc<AnimationRegistry>) {
	let doc = document.clone();
	dom::listen::<Event>(document, "visibilitychange", move |_| {
		if doc.hidden() {
			registry.pause_all();
		} else {
			registry.resume_all();
		}
	});
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use super::*;

	#[derive(Default)]
	struct Probe {
		paused: Cell<bool>,
	}

	impl Animatable for Probe {
		fn pause(&self) {
			self.paused.set(true);
		}

		fn resume(&self) {
			self.paused.set(false);
		}
	}

	#[test]
	fn pause_and_resume_reach_every_registered_handle() {
		let registry = AnimationRegistry::new();
		let a = Rc::new(Probe::default());
		let b = Rc::new(Probe::default());
		registry.register(a.clone());
		registry.register(b.clone());

		registry.pause_all();
		assert!(a.paused.get() && b.paused.get());

		registry.resume_all();
		assert!(!a.paused.get() && !b.paused.get());
	}

	#[test]
	fn unregister_is_by_identity_and_idempotent() {
		let registry = AnimationRegistry::new();
		let a: Rc<dyn Animatable> = Rc::new(Probe::default());
		let b: Rc<dyn Animatable> = Rc::new(Probe::default());
		registry.register(a.clone());
		registry.register(b.clone());

		registry.unregister(&a);
		assert_eq!(registry.len(), 1);
		registry.unregister(&a);
		assert_eq!(registry.len(), 1);
	}
}
