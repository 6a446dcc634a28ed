//! Leptos component wrapping the effects layer.
//!
//! The component creates a full-viewport background canvas and wires up
//! everything the layer does: the particle animation loop (driven by
//! `requestAnimationFrame`), cursor trail and click spark spawning, button
//! ripples, mascot interaction, the startup performance tier, the
//! visibility gate, the mobile viewport fix, and scroll parallax.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::Style;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, Document, Event, HtmlCanvasElement, HtmlElement, MouseEvent, Window,
};

use super::config::EffectsConfig;
use super::field::ParticleField;
use super::spawn::TransientEffectSpawner;
use super::theme::EffectTheme;
use super::visibility::{Animatable, AnimationRegistry};
use super::{dom, mascot, perf, render, styles, viewport, visibility};

/// Bundles the particle field with its random source.
struct FieldContext {
	field: ParticleField,
	rng: fastrand::Rng,
	theme: EffectTheme,
}

/// The render loop as an [`Animatable`] handle.
///
/// Pausing stops the next re-arm; the already-scheduled frame still fires
/// once and then the chain goes quiet. Resuming re-arms unless a frame is
/// already pending, so a quick hide/show cannot stack chains. Destroying
/// the handle stops the loop for good.
struct CanvasLoopHandle {
	running: Cell<bool>,
	alive: Cell<bool>,
	pending: Cell<bool>,
	animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl CanvasLoopHandle {
	fn new(animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Self {
		Self {
			running: Cell::new(true),
			alive: Cell::new(true),
			pending: Cell::new(false),
			animate,
		}
	}

	fn running(&self) -> bool {
		self.running.get() && self.alive.get()
	}

	fn begin_frame(&self) {
		self.pending.set(false);
	}

	fn request_frame(&self) {
		if self.pending.replace(true) {
			return;
		}
		if let Some(ref cb) = *self.animate.borrow() {
			let _ = web_sys::window()
				.unwrap()
				.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	}

	fn destroy(&self) {
		self.alive.set(false);
		self.running.set(false);
	}
}

impl Animatable for CanvasLoopHandle {
	fn pause(&self) {
		self.running.set(false);
	}

	fn resume(&self) {
		if !self.alive.get() || self.running.replace(true) {
			return;
		}
		self.request_frame();
	}
}

/// Renders the ambient background canvas and wires all page effects.
///
/// Mount once per page. The canvas sits behind the page content
/// (`z-index: -1`) and ignores pointer events; interaction handlers attach
/// to the document and to host elements found via the configured
/// selectors, so a page missing any of them simply loses that one effect.
#[component]
pub fn EffectsLayer(#[prop(default = EffectsConfig::default())] config: EffectsConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let animate_init = animate.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();
		let document = window.document().unwrap();

		let (w, h) = (
			window.inner_width().unwrap().as_f64().unwrap(),
			window.inner_height().unwrap().as_f64().unwrap(),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let theme = EffectTheme::neon();
		let mut rng = fastrand::Rng::new();
		let registry = AnimationRegistry::new();
		let spawner = Rc::new(TransientEffectSpawner::new(
			document.clone(),
			theme.clone(),
			registry.clone(),
			config.trail_min_interval_ms,
		));

		let context = Rc::new(RefCell::new(FieldContext {
			field: ParticleField::new(w, h, &theme.palette, &mut rng),
			rng,
			theme: theme.clone(),
		}));

		perf::apply(&window, perf::detect(&window));
		viewport::install(&window);

		let loop_handle = Rc::new(CanvasLoopHandle::new(animate_init.clone()));
		registry.register(loop_handle.clone());

		let (context_anim, handle_anim) = (context.clone(), loop_handle.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			handle_anim.begin_frame();
			{
				let mut c = context_anim.borrow_mut();
				c.field.advance();
				render::render(&c.field, &ctx);
			}
			if handle_anim.running() {
				handle_anim.request_frame();
			}
		}));
		loop_handle.request_frame();

		// Resizing regenerates the whole field at the new dimensions
		let (context_resize, canvas_resize) = (context.clone(), canvas.clone());
		dom::listen::<Event>(&window, "resize", move |_| {
			let win = web_sys::window().unwrap();
			let (nw, nh) = (
				win.inner_width().unwrap().as_f64().unwrap(),
				win.inner_height().unwrap().as_f64().unwrap(),
			);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			let mut c = context_resize.borrow_mut();
			let FieldContext { field, rng, theme } = &mut *c;
			field.resize(nw, nh, &theme.palette, rng);
		});

		let spawner_move = spawner.clone();
		dom::listen::<MouseEvent>(&document, "pointermove", move |ev| {
			spawner_move.spawn_trail_dot(ev.client_x() as f64, ev.client_y() as f64);
		});

		for button in dom::query_all::<HtmlElement>(&document, &config.button_selector) {
			let (spawner_enter, target) = (spawner.clone(), button.clone());
			dom::listen::<MouseEvent>(&button, "mouseenter", move |_| {
				spawner_enter.spawn_ripple(&target);
			});
			let spawner_click = spawner.clone();
			dom::listen::<MouseEvent>(&button, "click", move |ev| {
				spawner_click.spawn_click_sparks(ev.client_x() as f64, ev.client_y() as f64);
			});
		}

		mascot::wire_mascot(&document, &config, &theme, spawner.clone(), registry.clone());
		visibility::install_gate(&document, registry.clone());
		install_parallax(&window, &document, &config.parallax_selector);
		fade_in_body(&document);

		let (spawner_unload, handle_unload) = (spawner.clone(), loop_handle.clone());
		dom::listen::<Event>(&window, "beforeunload", move |_| {
			handle_unload.destroy();
			spawner_unload.remove_all();
		});
	});

	view! {
		<Style>{styles::EFFECT_KEYFRAMES}</Style>
		<canvas
			node_ref=canvas_ref
			class="neon-fx-canvas"
			style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; z-index: -1;"
		/>
	}
}

/// Scroll parallax for the decorative backdrop layer, throttled to one
/// update per animation frame.
fn install_parallax(window: &Window, document: &Document, selector: &str) {
	let Some(layer) = dom::query::<HtmlElement>(document, selector) else {
		return;
	};

	let ticking = Rc::new(Cell::new(false));
	let win = window.clone();
	dom::listen::<Event>(window, "scroll", move |_| {
		if ticking.replace(true) {
			return;
		}
		let (layer, done, raf_win) = (layer.clone(), ticking.clone(), win.clone());
		let cb = Closure::once_into_js(move || {
			let scrolled = raf_win.page_y_offset().unwrap_or(0.0);
			let _ = layer
				.style()
				.set_property("transform", &format!("translateY({}px)", scrolled * -0.5));
			done.set(false);
		});
		let _ = win.request_animation_frame(cb.unchecked_ref());
	});
}

/// Fade the page in shortly after mount.
fn fade_in_body(document: &Document) {
	let Some(body) = document.body() else {
		return;
	};
	let _ = body.style().set_property("opacity", "0");
	let _ = body
		.style()
		.set_property("transition", "opacity 1s ease-in-out");
	dom::set_timeout(
		move || {
			let _ = body.style().set_property("opacity", "1");
		},
		100,
	);
}
