//! Edge geometry and adjacency over label-keyed associations.

use std::collections::{HashMap, HashSet};

use super::types::{Association, Position, Relation};

/// Straight segment between two placed entries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
	/// Source end.
	pub from: Position,
	/// Destination end.
	pub to: Position,
}

/// Segments for every association of kind `relation` whose endpoints are both
/// placed. Dangling associations are left out.
pub fn edge_segments(
	associations: &[Association],
	positions: &HashMap<String, Position>,
	relation: Relation,
) -> Vec<Segment> {
	associations
		.iter()
		.filter(|a| a.relation == relation)
		.filter_map(|a| {
			let from = *positions.get(&a.src)?;
			let to = *positions.get(&a.dst)?;
			Some(Segment { from, to })
		})
		.collect()
}

/// `label` plus every label joined to it by an association, either direction.
pub fn neighbors(label: &str, associations: &[Association]) -> HashSet<String> {
	let mut connected = HashSet::from([label.to_string()]);
	for assoc in associations {
		if assoc.src == label {
			connected.insert(assoc.dst.clone());
		}
		if assoc.dst == label {
			connected.insert(assoc.src.clone());
		}
	}
	connected
}
