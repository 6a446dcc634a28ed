//! Visual theming for the effects layer.
//!
//! Provides the neon accent palette and the per-effect visual parameters
//! (sizes, colors, lifetimes) used by the particle field and the transient
//! effect spawner.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// The fixed accent palette shared by background particles.
///
/// Colors are picked uniformly at random, one per particle, at generation
/// time. A particle keeps its color until the whole field is regenerated.
#[derive(Clone, Debug)]
pub struct AccentPalette {
	pub colors: Vec<Color>,
}

impl AccentPalette {
	/// Neon palette - cyan, magenta, violet, green, yellow.
	pub fn neon() -> Self {
		Self {
			colors: vec![
				Color::rgb(0x00, 0xff, 0xff), // Cyan
				Color::rgb(0xff, 0x00, 0x6e), // Magenta
				Color::rgb(0x8b, 0x5c, 0xf6), // Violet
				Color::rgb(0x00, 0xff, 0x41), // Green
				Color::rgb(0xff, 0xff, 0x00), // Yellow
			],
		}
	}

	/// Pick one palette color uniformly at random.
	pub fn pick(&self, rng: &mut fastrand::Rng) -> Color {
		self.colors[rng.usize(..self.colors.len())]
	}
}

impl Default for AccentPalette {
	fn default() -> Self {
		Self::neon()
	}
}

/// Visual parameters for one kind of transient dot effect.
#[derive(Clone, Debug)]
pub struct DotStyle {
	/// Dot diameter in pixels.
	pub size: f64,
	/// Fill color.
	pub color: Color,
	/// Glow radius in pixels (`box-shadow` blur).
	pub glow: f64,
	/// Lifetime after which the node is removed, in milliseconds.
	pub lifetime_ms: i32,
}

/// Complete visual theme for the effects layer.
#[derive(Clone, Debug)]
pub struct EffectTheme {
	pub palette: AccentPalette,
	/// Cursor trail dot.
	pub trail: DotStyle,
	/// Click spark dot (8 launched per click).
	pub spark: DotStyle,
	/// Outward spark travel distance in pixels over the spark lifetime.
	pub spark_speed: f64,
	/// Excitement burst dot (12 launched per mascot click).
	pub burst: DotStyle,
	/// Button ripple lifetime in milliseconds.
	pub ripple_lifetime_ms: i32,
	/// Mascot eye color while flashing.
	pub flash_color: Color,
	/// Mascot eye color at rest.
	pub rest_color: Color,
	/// How long the mascot reactive flash lasts, in milliseconds.
	pub flash_ms: i32,
	/// How long the easter egg stays active, in milliseconds.
	pub easter_egg_ms: i32,
}

impl EffectTheme {
	/// Default neon theme matching the stock page styling.
	pub fn neon() -> Self {
		let cyan = Color::rgb(0x00, 0xff, 0xff);
		Self {
			palette: AccentPalette::neon(),
			trail: DotStyle {
				size: 4.0,
				color: cyan,
				glow: 10.0,
				lifetime_ms: 500,
			},
			spark: DotStyle {
				size: 4.0,
				color: cyan,
				glow: 10.0,
				lifetime_ms: 800,
			},
			spark_speed: 100.0,
			burst: DotStyle {
				size: 6.0,
				color: Color::rgb(0xff, 0xff, 0x00),
				glow: 15.0,
				lifetime_ms: 1500,
			},
			ripple_lifetime_ms: 600,
			flash_color: Color::rgb(0xff, 0x00, 0x6e),
			rest_color: Color::rgb(0x00, 0xff, 0x41),
			flash_ms: 1000,
			easter_egg_ms: 3000,
		}
	}
}

impl Default for EffectTheme {
	fn default() -> Self {
		Self::neon()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_formats_opaque_as_hex() {
		assert_eq!(Color::rgb(0, 255, 255).to_css(), "#00ffff");
	}

	#[test]
	fn css_formats_translucent_as_rgba() {
		assert_eq!(
			Color::rgba(255, 0, 110, 0.5).to_css(),
			"rgba(255, 0, 110, 0.5)"
		);
	}

	#[test]
	fn palette_pick_stays_inside_the_fixed_set() {
		let palette = AccentPalette::neon();
		let mut rng = fastrand::Rng::with_seed(7);
		for _ in 0..200 {
			let c = palette.pick(&mut rng);
			assert!(palette.colors.contains(&c));
		}
	}
}
