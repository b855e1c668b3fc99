//! Category palette and the HSL adjustments that encode power and valence.

use std::fmt;

use super::types::{Category, Entry};

/// Hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
	/// Hue, `[0, 360)`.
	pub h: f64,
	/// Saturation, `[0, 100]`.
	pub s: f64,
	/// Lightness, `[0, 100]`.
	pub l: f64,
}

impl Hsl {
	/// New colour.
	pub const fn new(h: f64, s: f64, l: f64) -> Self {
		Self { h, s, l }
	}
}

/// Palette used for [`Category::Other`] and unknown categories.
pub const DEFAULT_BASE: Hsl = Hsl::new(0.0, 0.0, 62.0);

/// Base colour of each category's hue family.
pub fn category_base(category: &Category) -> Hsl {
	match category {
		Category::People => Hsl::new(280.0, 70.0, 60.0),
		Category::Accomplishments => Hsl::new(45.0, 95.0, 60.0),
		Category::LifeStory => Hsl::new(200.0, 75.0, 55.0),
		Category::IdeasLikes => Hsl::new(140.0, 70.0, 55.0),
		Category::Other | Category::Unknown(_) => DEFAULT_BASE,
	}
}

/// 8-bit RGB with a fractional alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
	/// Red.
	pub r: u8,
	/// Green.
	pub g: u8,
	/// Blue.
	pub b: u8,
	/// Alpha, `[0, 1]`.
	pub a: f64,
}

impl Rgba {
	/// Same colour with a different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}
}

impl fmt::Display for Hsl {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
	}
}

impl fmt::Display for Rgba {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
	}
}

/// Standard chroma / hue-sector conversion. Channels are rounded to the
/// nearest integer.
pub fn hsl_to_rgb(hsl: Hsl) -> (u8, u8, u8) {
	let h = hsl.h.rem_euclid(360.0);
	let s = hsl.s / 100.0;
	let l = hsl.l / 100.0;

	let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
	let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
	let m = l - c / 2.0;

	let (r, g, b) = if h < 60.0 {
		(c, x, 0.0)
	} else if h < 120.0 {
		(x, c, 0.0)
	} else if h < 180.0 {
		(0.0, c, x)
	} else if h < 240.0 {
		(0.0, x, c)
	} else if h < 300.0 {
		(x, 0.0, c)
	} else {
		(c, 0.0, x)
	};

	let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
	(channel(r), channel(g), channel(b))
}

/// Category colour shifted by the entry's scalars: lighter with power,
/// more saturated with valence.
pub fn entry_hsl(entry: &Entry) -> Hsl {
	let base = category_base(&entry.category);
	Hsl {
		h: base.h,
		s: clamp_or(base.s + entry.valence * 10.0, 30.0, 100.0, base.s),
		l: clamp_or(base.l + entry.power * 15.0, 35.0, 85.0, base.l),
	}
}

fn clamp_or(v: f64, lo: f64, hi: f64, fallback: f64) -> f64 {
	if v.is_nan() {
		fallback.clamp(lo, hi)
	} else {
		v.clamp(lo, hi)
	}
}

/// Colour of a single entry.
pub fn entry_color(entry: &Entry, alpha: f64) -> Rgba {
	let (r, g, b) = hsl_to_rgb(entry_hsl(entry));
	Rgba { r, g, b, a: alpha }
}

/// Colours index-aligned with `entries`.
pub fn colors_for(entries: &[Entry], alpha: f64) -> Vec<Rgba> {
	entries.iter().map(|e| entry_color(e, alpha)).collect()
}

/// [`colors_for`] formatted as CSS `rgba(r,g,b,a)` strings.
pub fn css_colors_for(entries: &[Entry], alpha: f64) -> Vec<String> {
	colors_for(entries, alpha)
		.iter()
		.map(ToString::to_string)
		.collect()
}
