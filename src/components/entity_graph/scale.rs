//! Linear scales and the categorical color ramp.

use crate::data::EntityType;

/// Maps a continuous domain onto a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
	pub domain: (f64, f64),
	pub range: (f64, f64),
}

impl LinearScale {
	pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
		Self { domain, range }
	}

	/// A collapsed domain maps every value to the middle of the range.
	pub fn apply(&self, v: f64) -> f64 {
		let (d0, d1) = self.domain;
		let (r0, r1) = self.range;
		let span = d1 - d0;
		if span == 0.0 || !span.is_finite() {
			return (r0 + r1) / 2.0;
		}
		r0 + (v - d0) / span * (r1 - r0)
	}
}

/// `(min, max)` of the values, or `(0, 0)` when empty.
pub fn extent(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
	values
		.into_iter()
		.fold(None, |acc: Option<(f64, f64)>, v| match acc {
			None => Some((v, v)),
			Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
		})
		.unwrap_or((0.0, 0.0))
}

/// Cubehelix rainbow ramp, `t` in `[0, 1]`.
pub fn rainbow(t: f64) -> String {
	let t = if (0.0..=1.0).contains(&t) { t } else { t - t.floor() };
	let ts = (t - 0.5).abs();
	let h = 360.0 * t - 100.0;
	let s = 1.5 - 1.5 * ts;
	let l = 0.8 - 0.9 * ts;
	cubehelix_to_rgb(h, s, l)
}

fn cubehelix_to_rgb(h: f64, s: f64, l: f64) -> String {
	const A: f64 = -0.14861;
	const B: f64 = 1.78277;
	const C: f64 = -0.29227;
	const D: f64 = -0.90649;
	const E: f64 = 1.97294;

	let h = (h + 120.0).to_radians();
	let a = s * l * (1.0 - l);
	let (sin_h, cos_h) = h.sin_cos();
	let channel = |v: f64| (255.0 * v).round().clamp(0.0, 255.0) as u8;

	format!(
		"rgb({}, {}, {})",
		channel(l + a * (A * cos_h + B * sin_h)),
		channel(l + a * (C * cos_h + D * sin_h)),
		channel(l + a * (E * cos_h)),
	)
}

pub fn type_color(ty: EntityType) -> String {
	rainbow(ty.index() as f64 / 7.0)
}
