//! Derived per-entry scalars: weighted degree and the selectable size metric.

use std::collections::HashMap;

use log::debug;

use super::scale::SizeScale;
use super::types::{Association, Entry, SizeMetric};

/// Sum of incident association weights per label, divided by the largest sum.
///
/// Every entry gets a value, zero when it has no edges. Endpoints that name no
/// entry contribute nothing. The divisor never drops below 1, so a graph with
/// only light edges keeps its raw totals.
pub fn weighted_degree(entries: &[Entry], associations: &[Association]) -> HashMap<String, f64> {
	let mut degrees: HashMap<String, f64> =
		entries.iter().map(|e| (e.label.clone(), 0.0)).collect();

	let mut dangling = 0usize;
	for assoc in associations {
		let weight = assoc.effective_weight();
		for endpoint in [&assoc.src, &assoc.dst] {
			match degrees.get_mut(endpoint) {
				Some(total) => *total += weight,
				None => dangling += 1,
			}
		}
	}
	if dangling > 0 {
		debug!("weighted degree skipped {dangling} dangling endpoint(s)");
	}

	let max = degrees.values().copied().fold(1.0_f64, f64::max);
	for total in degrees.values_mut() {
		*total /= max;
	}
	degrees
}

/// Scalar selected by `metric` for `entry`.
pub fn size_metric_value(entry: &Entry, metric: SizeMetric, degrees: &HashMap<String, f64>) -> f64 {
	match metric {
		SizeMetric::Power => entry.power,
		SizeMetric::ValenceAbs => entry.valence.abs(),
		SizeMetric::PowerTimesValence => entry.power * entry.valence.abs(),
		SizeMetric::WeightedDegree => degrees.get(&entry.label).copied().unwrap_or(0.0),
	}
}

/// Marker sizes index-aligned with `entries`, using the default size curve.
pub fn sizes_for(
	entries: &[Entry],
	metric: SizeMetric,
	degrees: &HashMap<String, f64>,
	scale: f64,
) -> Vec<f64> {
	sizes_with(entries, metric, degrees, scale, &SizeScale::default())
}

/// Marker sizes index-aligned with `entries`.
pub fn sizes_with(
	entries: &[Entry],
	metric: SizeMetric,
	degrees: &HashMap<String, f64>,
	scale: f64,
	curve: &SizeScale,
) -> Vec<f64> {
	entries
		.iter()
		.map(|e| curve.apply(size_metric_value(e, metric, degrees)) * scale)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::types::{Category, Relation};

	fn entries() -> Vec<Entry> {
		vec![
			Entry::new("a", Category::People, 0.8, -0.5),
			Entry::new("b", Category::People, 0.4, 0.9),
			Entry::new("c", Category::Other, 0.2, 0.1),
		]
	}

	#[test]
	fn test_no_edges_all_zero() {
		let degrees = weighted_degree(&[Entry::new("A", Category::People, 1.0, 1.0)], &[]);
		assert_eq!(degrees.len(), 1);
		assert_eq!(degrees["A"], 0.0);
	}

	#[test]
	fn test_max_degree_is_one() {
		let assocs = vec![
			Association::new("a", "b", Relation::Affirms, 2.0),
			Association::new("a", "c", Relation::Threatens, 1.0),
		];
		let degrees = weighted_degree(&entries(), &assocs);
		assert_eq!(degrees["a"], 1.0);
		assert!((degrees["b"] - 2.0 / 3.0).abs() < 1e-12);
		assert!((degrees["c"] - 1.0 / 3.0).abs() < 1e-12);
	}

	#[test]
	fn test_light_graph_keeps_raw_totals() {
		let assocs = vec![Association::new("a", "b", Relation::Affirms, 0.4)];
		let degrees = weighted_degree(&entries(), &assocs);
		assert!((degrees["a"] - 0.4).abs() < 1e-12);
		assert_eq!(degrees["c"], 0.0);
	}

	#[test]
	fn test_missing_weight_counts_as_one() {
		let mut assoc = Association::new("a", "b", Relation::AssociatesWith, 0.0);
		assoc.weight = None;
		let degrees = weighted_degree(&entries(), &[assoc]);
		assert_eq!(degrees["a"], 1.0);
		assert_eq!(degrees["b"], 1.0);
	}

	#[test]
	fn test_dangling_endpoint_ignored() {
		let assocs = vec![
			Association::new("a", "ghost", Relation::Affirms, 3.0),
			Association::new("ghost", "phantom", Relation::Affirms, 3.0),
		];
		let degrees = weighted_degree(&entries(), &assocs);
		assert!(!degrees.contains_key("ghost"));
		assert_eq!(degrees["a"], 1.0);
		assert_eq!(degrees["b"], 0.0);
	}

	#[test]
	fn test_metric_values() {
		let e = Entry::new("a", Category::People, 0.8, -0.5);
		let degrees = HashMap::from([("a".to_string(), 0.25)]);
		assert_eq!(size_metric_value(&e, SizeMetric::Power, &degrees), 0.8);
		assert_eq!(size_metric_value(&e, SizeMetric::ValenceAbs, &degrees), 0.5);
		assert!((size_metric_value(&e, SizeMetric::PowerTimesValence, &degrees) - 0.4).abs() < 1e-12);
		assert_eq!(size_metric_value(&e, SizeMetric::WeightedDegree, &degrees), 0.25);
		assert_eq!(size_metric_value(&e, SizeMetric::WeightedDegree, &HashMap::new()), 0.0);
	}

	#[test]
	fn test_sizes_index_aligned_and_scaled() {
		let es = entries();
		let degrees = weighted_degree(&es, &[]);
		let base = sizes_for(&es, SizeMetric::Power, &degrees, 1.0);
		let doubled = sizes_for(&es, SizeMetric::Power, &degrees, 2.0);
		assert_eq!(base.len(), es.len());
		for (b, d) in base.iter().zip(&doubled) {
			assert!((d - 2.0 * b).abs() < 1e-12);
		}
		assert!(base[0] > base[1] && base[1] > base[2]);
	}
}
