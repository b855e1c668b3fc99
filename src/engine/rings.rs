//! Static backdrop geometry: valence reference rings and the two axes.

use super::layout::valence_radius;

/// Valence levels marked by a ring, innermost first.
pub const RING_VALENCES: [f64; 5] = [0.8, 0.4, 0.0, -0.4, -0.8];

/// Angular step between ring samples, in degrees.
pub const RING_STEP_DEG: f64 = 5.0;

/// Samples per ring: a full turn at [`RING_STEP_DEG`] plus the closing point.
pub const RING_POINTS: usize = (360.0 / RING_STEP_DEG) as usize + 1;

/// Open or closed line through parallel coordinate arrays.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
	/// Horizontal coordinates.
	pub x: Vec<f64>,
	/// Vertical coordinates.
	pub y: Vec<f64>,
}

impl Polyline {
	/// Number of points.
	pub fn len(&self) -> usize {
		self.x.len()
	}

	/// True when there are no points.
	pub fn is_empty(&self) -> bool {
		self.x.is_empty()
	}

	/// Points as `(x, y)` pairs.
	pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
		self.x.iter().copied().zip(self.y.iter().copied())
	}
}

/// One closed circle per entry of [`RING_VALENCES`], radius from the valence
/// radius formula.
pub fn ring_guides(r_max: f64) -> Vec<Polyline> {
	RING_VALENCES
		.iter()
		.map(|&v| {
			let r = valence_radius(v, r_max);
			let (x, y) = (0..RING_POINTS)
				.map(|i| {
					let angle = (i as f64 * RING_STEP_DEG).to_radians();
					(r * angle.cos(), r * angle.sin())
				})
				.unzip();
			Polyline { x, y }
		})
		.collect()
}

/// Horizontal and vertical axes through the origin, spanning `[-r_max, r_max]`.
pub fn axis_guides(r_max: f64) -> [Polyline; 2] {
	[
		Polyline {
			x: vec![-r_max, r_max],
			y: vec![0.0, 0.0],
		},
		Polyline {
			x: vec![0.0, 0.0],
			y: vec![-r_max, r_max],
		},
	]
}
