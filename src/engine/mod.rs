//! Deterministic layout and visual encoding for the self map.
//!
//! Everything here is a pure function of the dataset and the view settings:
//! no UI state, no caching, identical input gives identical output. The
//! canvas component recomputes a [`Scene`] from scratch whenever either
//! changes.

mod color;
mod edges;
mod error;
mod ingest;
mod layout;
mod metrics;
mod rings;
mod sample;
mod scale;
mod types;

use std::collections::HashSet;

pub use color::{Hsl, Rgba, category_base, colors_for, css_colors_for, entry_color, hsl_to_rgb};
pub use edges::{Segment, edge_segments, neighbors};
pub use error::{SelfMapError, SelfMapResult};
pub use ingest::{DanglingPolicy, IngestOptions, parse_document, validate};
pub use layout::{
	DEFAULT_SECTOR, Sector, category_sector, compute_angles, compute_positions,
	compute_positions_with, radius_for, valence_radius,
};
pub use metrics::{size_metric_value, sizes_for, sizes_with, weighted_degree};
pub use rings::{Polyline, RING_POINTS, RING_VALENCES, axis_guides, ring_guides};
pub use sample::sample_data;
pub use scale::{SizeScale, metric_to_size};
pub use types::{
	Association, Category, Entry, Position, RadiusMode, Relation, SelfMapData, SizeMetric,
};

/// Outer radius of the layout, shared by positions and ring guides.
pub const R_MAX: f64 = 120.0;

/// Control-panel state that feeds the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewSettings {
	/// Scalar behind marker size.
	pub size_metric: SizeMetric,
	/// Scalar behind distance from Self.
	pub radius_mode: RadiusMode,
	/// Draw association edges.
	pub show_edges: bool,
	/// Draw entry labels.
	pub show_labels: bool,
	/// Multiplier on every marker size.
	pub size_scale: f64,
	/// Marker alpha.
	pub opacity: f64,
	/// Breathing halo on hovered and selected markers.
	pub pulsation: bool,
}

impl ViewSettings {
	/// Allowed range of [`ViewSettings::size_scale`].
	pub const SIZE_SCALE_RANGE: (f64, f64) = (0.3, 3.0);
	/// Allowed range of [`ViewSettings::opacity`].
	pub const OPACITY_RANGE: (f64, f64) = (0.35, 1.0);
}

impl Default for ViewSettings {
	fn default() -> Self {
		Self {
			size_metric: SizeMetric::PowerTimesValence,
			radius_mode: RadiusMode::Valence,
			show_edges: true,
			show_labels: true,
			size_scale: 1.0,
			opacity: 0.9,
			pulsation: false,
		}
	}
}

/// One entry with everything the renderer needs to draw it.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedEntry {
	/// Source entry.
	pub entry: Entry,
	/// Layout position.
	pub position: Position,
	/// Marker size before interaction multipliers.
	pub size: f64,
	/// Marker colour at the configured opacity.
	pub color: Rgba,
}

/// Fully resolved drawable model of one dataset under one set of settings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	/// Entries in input order.
	pub entries: Vec<PlacedEntry>,
	/// Edge segments per relation, dangling associations dropped.
	pub edges: Vec<(Relation, Vec<Segment>)>,
	/// Valence reference rings.
	pub rings: Vec<Polyline>,
	/// Horizontal and vertical axes.
	pub axes: Vec<Polyline>,
	/// Associations, kept for neighbour lookups on hover.
	pub associations: Vec<Association>,
}

impl Scene {
	/// Runs layout, metrics and styling over `data`.
	pub fn build(data: &SelfMapData, settings: &ViewSettings) -> Self {
		let positions = compute_positions(&data.entries, settings.radius_mode);
		let degrees = weighted_degree(&data.entries, &data.associations);
		let sizes = sizes_for(
			&data.entries,
			settings.size_metric,
			&degrees,
			settings.size_scale,
		);
		let colors = colors_for(&data.entries, settings.opacity);

		let entries = data
			.entries
			.iter()
			.zip(sizes)
			.zip(colors)
			.map(|((entry, size), color)| PlacedEntry {
				position: positions.get(&entry.label).copied().unwrap_or_default(),
				entry: entry.clone(),
				size,
				color,
			})
			.collect();

		let edges = Relation::ALL
			.iter()
			.map(|&rel| (rel, edge_segments(&data.associations, &positions, rel)))
			.filter(|(_, segments)| !segments.is_empty())
			.collect();

		Self {
			entries,
			edges,
			rings: ring_guides(R_MAX),
			axes: axis_guides(R_MAX).into(),
			associations: data.associations.clone(),
		}
	}

	/// Labels to dim while `label` is hovered: everything not connected to it.
	pub fn dimmed_for(&self, label: &str) -> HashSet<String> {
		let connected = neighbors(label, &self.associations);
		self.entries
			.iter()
			.map(|p| &p.entry.label)
			.filter(|l| !connected.contains(*l))
			.cloned()
			.collect()
	}

	/// Entry by label.
	pub fn entry(&self, label: &str) -> Option<&PlacedEntry> {
		self.entries.iter().find(|p| p.entry.label == label)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_scene_from_sample() {
		let data = sample_data();
		let scene = Scene::build(&data, &ViewSettings::default());
		assert_eq!(scene.entries.len(), 14);
		assert_eq!(scene.rings.len(), 5);
		assert_eq!(scene.axes.len(), 2);
		let edge_count: usize = scene.edges.iter().map(|(_, s)| s.len()).sum();
		assert_eq!(edge_count, 7);
		for placed in &scene.entries {
			assert!(placed.position.radius() <= R_MAX + 1e-9);
			assert!(placed.size >= 9.0 && placed.size <= 42.0);
			assert_eq!(placed.color.a, 0.9);
		}
	}

	#[test]
	fn test_scene_is_deterministic() {
		let data = sample_data();
		let settings = ViewSettings {
			radius_mode: RadiusMode::Power,
			size_metric: SizeMetric::WeightedDegree,
			..ViewSettings::default()
		};
		assert_eq!(Scene::build(&data, &settings), Scene::build(&data, &settings));
	}

	#[test]
	fn test_dimmed_excludes_neighbours() {
		let scene = Scene::build(&sample_data(), &ViewSettings::default());
		let dimmed = scene.dimmed_for("Partner");
		assert!(!dimmed.contains("Partner"));
		assert!(!dimmed.contains("Child A"));
		assert!(!dimmed.contains("Recovery (5 yrs)"));
		assert!(dimmed.contains("Music"));
		assert_eq!(dimmed.len(), 11);
	}

	#[test]
	fn test_dangling_edge_not_drawn() {
		let mut data = sample_data();
		data.associations
			.push(Association::new("Partner", "Ghost", Relation::Threatens, 1.0));
		let scene = Scene::build(&data, &ViewSettings::default());
		let threatens = scene
			.edges
			.iter()
			.find(|(r, _)| *r == Relation::Threatens)
			.map(|(_, s)| s.len());
		assert_eq!(threatens, Some(1));
	}
}
