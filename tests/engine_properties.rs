//! Property-based checks of the layout and encoding invariants.

use std::collections::BTreeSet;

use proptest::prelude::*;

use self_map_canvas::engine::{
	Association, Category, Entry, R_MAX, RadiusMode, Relation, category_sector, colors_for,
	compute_angles, compute_positions, metric_to_size, ring_guides, weighted_degree,
};

fn category_strategy() -> impl Strategy<Value = Category> {
	prop_oneof![
		Just(Category::People),
		Just(Category::Accomplishments),
		Just(Category::LifeStory),
		Just(Category::IdeasLikes),
		Just(Category::Other),
		"[A-Z][a-z]{2,6}s".prop_map(Category::from),
	]
}

fn relation_strategy() -> impl Strategy<Value = Relation> {
	prop_oneof![
		Just(Relation::Affirms),
		Just(Relation::Threatens),
		Just(Relation::AssociatesWith),
	]
}

/// Entries with unique labels.
fn entries_strategy() -> impl Strategy<Value = Vec<Entry>> {
	prop::collection::btree_map(
		"[A-Za-z][A-Za-z0-9 ]{0,11}",
		(category_strategy(), 0.0f64..=1.0, -1.0f64..=1.0),
		0..24,
	)
	.prop_map(|m| {
		m.into_iter()
			.map(|(label, (category, power, valence))| Entry::new(label, category, power, valence))
			.collect()
	})
	.prop_shuffle()
}

fn associations_for(entries: &[Entry]) -> impl Strategy<Value = Vec<Association>> + use<> {
	let mut labels: Vec<String> = entries.iter().map(|e| e.label.clone()).collect();
	labels.push("~dangling".to_string());
	prop::collection::vec(
		(
			prop::sample::select(labels.clone()),
			prop::sample::select(labels),
			relation_strategy(),
			0.0f64..=1.0,
		)
			.prop_map(|(src, dst, relation, weight)| Association::new(src, dst, relation, weight)),
		0..32,
	)
}

fn dataset() -> impl Strategy<Value = (Vec<Entry>, Vec<Association>)> {
	entries_strategy().prop_flat_map(|entries| {
		let assocs = associations_for(&entries);
		(Just(entries), assocs)
	})
}

proptest! {
	#[test]
	fn angles_evenly_spaced_within_category(entries in entries_strategy()) {
		let angles = compute_angles(&entries);
		let categories: BTreeSet<&Category> = entries.iter().map(|e| &e.category).collect();
		for category in categories {
			let mut labels: Vec<&str> = entries
				.iter()
				.filter(|e| &e.category == category)
				.map(|e| e.label.as_str())
				.collect();
			labels.sort();
			let sector = category_sector(category);
			let step = (sector.end - sector.start) / labels.len().max(1) as f64;
			for pair in labels.windows(2) {
				let gap = angles[pair[1]] - angles[pair[0]];
				prop_assert!((gap - step).abs() < 1e-9);
			}
			for label in labels {
				prop_assert!(angles[label] > sector.start && angles[label] < sector.end);
			}
		}
	}

	#[test]
	fn positions_ignore_input_order(entries in entries_strategy(), mode_is_power in any::<bool>()) {
		let mode = if mode_is_power { RadiusMode::Power } else { RadiusMode::Valence };
		let reversed: Vec<Entry> = entries.iter().rev().cloned().collect();
		prop_assert_eq!(compute_positions(&entries, mode), compute_positions(&reversed, mode));
		prop_assert_eq!(compute_positions(&entries, mode), compute_positions(&entries, mode));
	}

	#[test]
	fn positions_stay_inside_r_max(entries in entries_strategy()) {
		for mode in [RadiusMode::Valence, RadiusMode::Power] {
			for p in compute_positions(&entries, mode).values() {
				prop_assert!(p.radius() <= R_MAX + 1e-9);
			}
		}
	}

	#[test]
	fn degrees_normalized((entries, assocs) in dataset()) {
		let degrees = weighted_degree(&entries, &assocs);
		prop_assert_eq!(degrees.len(), entries.len());
		prop_assert!(!degrees.contains_key("~dangling"));
		for d in degrees.values() {
			prop_assert!((0.0..=1.0).contains(d));
		}

		let mut raw_max = 0.0f64;
		for e in &entries {
			let raw: f64 = assocs
				.iter()
				.map(|a| {
					let w = a.effective_weight();
					let mut total = 0.0;
					if a.src == e.label { total += w; }
					if a.dst == e.label { total += w; }
					total
				})
				.sum();
			raw_max = raw_max.max(raw);
		}
		if raw_max >= 1.0 {
			prop_assert!(degrees.values().any(|d| (d - 1.0).abs() < 1e-9));
		}
	}

	#[test]
	fn size_curve_monotone(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
		let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
		prop_assert!(metric_to_size(lo) <= metric_to_size(hi));
		prop_assert!(metric_to_size(lo) >= 9.0 && metric_to_size(hi) <= 42.0);
	}

	#[test]
	fn colors_are_rgba((entries, _) in dataset()) {
		for c in colors_for(&entries, 0.5) {
			let s = c.to_string();
			prop_assert!(s.starts_with("rgba(") && s.ends_with(",0.5)"), "{}", s);
			let channels: Vec<&str> = s["rgba(".len()..s.len() - 1].split(',').collect();
			prop_assert_eq!(channels.len(), 4);
			for ch in &channels[..3] {
				prop_assert!(ch.parse::<u8>().is_ok());
			}
		}
	}
}

#[test]
fn ring_guides_closed() {
	let rings = ring_guides(R_MAX);
	assert_eq!(rings.len(), 5);
	for ring in rings {
		assert_eq!(ring.len(), 73);
		let n = ring.len() - 1;
		assert!((ring.x[0] - ring.x[n]).abs() < 1e-9);
		assert!((ring.y[0] - ring.y[n]).abs() < 1e-9);
	}
}
