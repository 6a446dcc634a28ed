//! Canvas rendering for the particle field.
//!
//! One full-surface clear followed by one filled, glowing circle per
//! particle. The glow uses the canvas shadow and is reset after every
//! particle so it never bleeds into the next draw call.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::{ParticleField, pulse_factor};

/// Glow blur radius in pixels.
const GLOW_BLUR: f64 = 10.0;

/// Draw the complete field onto the canvas surface.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	for p in &field.particles {
		let pulse = pulse_factor(p.phase);
		let css = p.color.to_css();

		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.size * pulse, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&css);
		ctx.set_global_alpha(p.opacity * pulse);
		ctx.fill();

		// Second fill with a soft halo of the same color
		ctx.set_shadow_color(&css);
		ctx.set_shadow_blur(GLOW_BLUR);
		ctx.fill();
		ctx.set_shadow_blur(0.0);
	}

	ctx.set_global_alpha(1.0);
}
