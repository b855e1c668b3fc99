//! Scalar-to-size mapping for entry markers.

/// Gamma-curved mapping from a `[0, 1]` metric onto a marker size range.
///
/// A gamma below 1 spends more of the range on small values, so weak entries
/// stay distinguishable from each other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeScale {
	/// Size at metric 0.
	pub min: f64,
	/// Size at metric 1.
	pub max: f64,
	/// Curve exponent.
	pub gamma: f64,
}

impl Default for SizeScale {
	fn default() -> Self {
		Self {
			min: 9.0,
			max: 42.0,
			gamma: 0.65,
		}
	}
}

impl SizeScale {
	/// Maps `value` (clamped to `[0, 1]`) onto `[min, max]`.
	pub fn apply(&self, value: f64) -> f64 {
		// NaN clamps to NaN; treat it as the smallest size
		let m = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
		self.min + (self.max - self.min) * m.powf(self.gamma)
	}
}

/// [`SizeScale::apply`] with the default curve (9..42, gamma 0.65).
pub fn metric_to_size(value: f64) -> f64 {
	SizeScale::default().apply(value)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_endpoints() {
		assert!((metric_to_size(0.0) - 9.0).abs() < 1e-12);
		assert!((metric_to_size(1.0) - 42.0).abs() < 1e-12);
	}

	#[test]
	fn test_clamps_out_of_range() {
		assert_eq!(metric_to_size(-3.0), metric_to_size(0.0));
		assert_eq!(metric_to_size(7.5), metric_to_size(1.0));
		assert_eq!(metric_to_size(f64::NAN), 9.0);
	}

	#[test]
	fn test_gamma_expands_low_end() {
		// 0.5^0.65 ~= 0.637, so the midpoint lands above the linear midpoint
		let mid = metric_to_size(0.5);
		assert!(mid > 9.0 + 33.0 * 0.5);
		assert!((mid - (9.0 + 33.0 * 0.5f64.powf(0.65))).abs() < 1e-12);
	}

	#[test]
	fn test_custom_scale() {
		let scale = SizeScale {
			min: 0.0,
			max: 10.0,
			gamma: 1.0,
		};
		assert!((scale.apply(0.25) - 2.5).abs() < 1e-12);
	}
}
