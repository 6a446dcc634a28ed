//! Decorative page effects component.
//!
//! Renders an ambient particle background on an HTML canvas and wires up
//! the page's interactive effects:
//! - Pulsing, drifting background particles (regenerated on resize)
//! - Cursor trail dots, click sparks, button ripples
//! - An interactive mascot with a five-click easter egg
//! - A startup reduced-motion tier for low-capability environments
//! - Pause/resume of all running animations when the page is hidden
//! - Mobile viewport-height CSS custom properties
//!
//! # Example
//!
//! ```ignore
//! use neon_fx::{EffectsConfig, EffectsLayer};
//!
//! view! { <EffectsLayer config=EffectsConfig::default() /> }
//! ```

mod component;
pub mod config;
mod dom;
pub mod field;
mod mascot;
pub mod perf;
mod render;
pub mod spawn;
mod styles;
pub mod theme;
pub mod visibility;
mod viewport;

pub use component::EffectsLayer;
pub use config::EffectsConfig;
pub use theme::EffectTheme;
