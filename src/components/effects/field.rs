//! Ambient background particle field.
//!
//! A viewport-sized collection of slow-drifting, pulsing dots. The field is
//! pure state plus numeric update; drawing lives in [`super::render`]. The
//! whole set is regenerated from scratch on resize rather than repositioned
//! incrementally - cheaper and visually indistinguishable for a decorative
//! background.

use std::f64::consts::TAU;

use super::theme::{AccentPalette, Color};

/// A single floating particle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	pub opacity: f64,
	pub color: Color,
	pub phase: f64, // For the breathing pulse
	pub phase_speed: f64,
}

/// Number of particles for a given viewport width.
///
/// One particle per 20px of width, clamped to `[30, 100]`. A degenerate
/// zero-width viewport still yields the floor of 30.
pub fn particle_count_for_width(width: f64) -> usize {
	((width / 20.0).floor() as usize).clamp(30, 100)
}

/// Periodic size/opacity multiplier, always in `[0.4, 1.0]`.
pub fn pulse_factor(phase: f64) -> f64 {
	phase.sin() * 0.3 + 0.7
}

/// Owns and advances the background particle set.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleField {
	pub fn new(width: f64, height: f64, palette: &AccentPalette, rng: &mut fastrand::Rng) -> Self {
		let mut field = Self {
			particles: Vec::new(),
			width,
			height,
		};
		field.generate(palette, rng);
		field
	}

	fn generate(&mut self, palette: &AccentPalette, rng: &mut fastrand::Rng) {
		let count = particle_count_for_width(self.width);
		self.particles = (0..count)
			.map(|_| Particle {
				x: rng.f64() * self.width,
				y: rng.f64() * self.height,
				vx: (rng.f64() - 0.5) * 0.5,
				vy: (rng.f64() - 0.5) * 0.5,
				size: rng.f64() * 2.0 + 1.0,
				opacity: rng.f64() * 0.5 + 0.2,
				color: palette.pick(rng),
				phase: rng.f64() * TAU,
				phase_speed: rng.f64() * 0.02 + 0.01,
			})
			.collect();
	}

	/// Resize the field bounds and regenerate every particle.
	///
	/// Old particles are discarded entirely; the new count reflects the new
	/// width.
	pub fn resize(
		&mut self,
		width: f64,
		height: f64,
		palette: &AccentPalette,
		rng: &mut fastrand::Rng,
	) {
		self.width = width;
		self.height = height;
		self.generate(palette, rng);
	}

	/// Advance every particle by one frame: integrate position, wrap
	/// exactly to the opposite edge on boundary crossing, advance the pulse
	/// phase.
	pub fn advance(&mut self) {
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			// Exact wrap, not reflect; one step never exceeds a dimension
			if p.x < 0.0 {
				p.x += self.width;
			} else if p.x >= self.width {
				p.x -= self.width;
			}
			if p.y < 0.0 {
				p.y += self.height;
			} else if p.y >= self.height {
				p.y -= self.height;
			}

			p.phase += p.phase_speed;
		}
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn field(width: f64, height: f64) -> ParticleField {
		let mut rng = fastrand::Rng::with_seed(42);
		ParticleField::new(width, height, &AccentPalette::neon(), &mut rng)
	}

	#[test]
	fn count_scales_with_width_between_clamps() {
		assert_eq!(particle_count_for_width(600.0), 30);
		assert_eq!(particle_count_for_width(1000.0), 50);
		assert_eq!(particle_count_for_width(3000.0), 100);
	}

	#[test]
	fn count_clamps_at_zero_width() {
		assert_eq!(particle_count_for_width(0.0), 30);
	}

	#[test]
	fn initial_particles_match_count_and_parameter_ranges() {
		let f = field(1000.0, 400.0);
		assert_eq!(f.particles.len(), 50);
		for p in &f.particles {
			assert!((0.0..1000.0).contains(&p.x));
			assert!((0.0..400.0).contains(&p.y));
			assert!((-0.25..=0.25).contains(&p.vx));
			assert!((-0.25..=0.25).contains(&p.vy));
			assert!((1.0..=3.0).contains(&p.size));
			assert!((0.2..=0.7).contains(&p.opacity));
			assert!(p.phase_speed >= 0.01 && p.phase_speed <= 0.03);
		}
	}

	#[test]
	fn positions_stay_in_bounds_after_many_frames() {
		let mut f = field(300.0, 200.0);
		for _ in 0..10_000 {
			f.advance();
		}
		for p in &f.particles {
			assert!(p.x >= 0.0 && p.x < 300.0, "x out of bounds: {}", p.x);
			assert!(p.y >= 0.0 && p.y < 200.0, "y out of bounds: {}", p.y);
		}
	}

	#[test]
	fn resize_regenerates_the_whole_set() {
		let mut f = field(600.0, 400.0);
		assert_eq!(f.particles.len(), 30);

		let mut rng = fastrand::Rng::with_seed(7);
		f.resize(3000.0, 800.0, &AccentPalette::neon(), &mut rng);
		assert_eq!(f.particles.len(), 100);
		for p in &f.particles {
			assert!((0.0..3000.0).contains(&p.x));
			assert!((0.0..800.0).contains(&p.y));
		}
	}

	#[test]
	fn pulse_factor_bounded_for_any_phase() {
		let mut phase = -50.0;
		while phase < 50.0 {
			let f = pulse_factor(phase);
			assert!((0.4..=1.0).contains(&f), "pulse out of range: {f}");
			phase += 0.01;
		}
	}
}
