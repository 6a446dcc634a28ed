//! Injected CSS: keyframes for every transient effect plus the
//! reduced-motion override sheet.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlStyleElement};

/// Keyframe animations referenced by spawned nodes and the mascot.
///
/// Served through `leptos_meta::Style` from the effects component so they
/// exist before the first spawn.
pub const EFFECT_KEYFRAMES: &str = r#"
@keyframes trail-fade {
	0% { opacity: 1; transform: scale(1); }
	100% { opacity: 0; transform: scale(0); }
}

@keyframes ripple-expand {
	0% { transform: scale(0); opacity: 1; }
	100% { transform: scale(1); opacity: 0; }
}

@keyframes spark-fly {
	0% {
		transform: translate(0, 0) scale(1);
		opacity: 1;
	}
	100% {
		transform: translate(var(--vx), var(--vy)) scale(0);
		opacity: 0;
	}
}

@keyframes burst-fly {
	0% {
		transform: translate(0, 0) scale(1);
		opacity: 1;
	}
	100% {
		transform: translate(
			calc(cos(var(--angle)) * 80px),
			calc(sin(var(--angle)) * 80px)
		) scale(0);
		opacity: 0;
	}
}

@keyframes mascot-excitement {
	0%, 100% { transform: translateY(0px) rotateY(0deg); }
	25% { transform: translateY(-20px) rotateY(-10deg); }
	50% { transform: translateY(-15px) rotateY(10deg); }
	75% { transform: translateY(-25px) rotateY(-5deg); }
}

@keyframes rainbow-glow {
	0% { filter: hue-rotate(0deg); }
	25% { filter: hue-rotate(90deg); }
	50% { filter: hue-rotate(180deg); }
	75% { filter: hue-rotate(270deg); }
	100% { filter: hue-rotate(360deg); }
}
"#;

/// Override sheet for the reduced tier: clamp animation durations and drop
/// the decorative backdrop pseudo-element.
pub const REDUCED_MOTION_CSS: &str = r#"
.reduced-motion * {
	animation-duration: 0.5s !important;
}
.reduced-motion #particles::before {
	display: none;
}
"#;

/// Append a `<style>` element with the given CSS to the document head.
pub fn inject(document: &Document, css: &str) {
	let Ok(style) = document.create_element("style") else {
		return;
	};
	let Ok(style) = style.dyn_into::<HtmlStyleElement>() else {
		return;
	};
	style.set_text_content(Some(css));
	if let Some(head) = document.head() {
		let _ = head.append_child(&style);
	}
}
