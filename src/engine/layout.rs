//! Polar sector layout.
//!
//! Every category owns a fixed quarter of the circle. Within a sector entries
//! are ordered by label and spread at half-step offsets, so none sits on a
//! sector boundary. Distance from the origin comes from valence or power.

use std::collections::{BTreeMap, HashMap};

use log::debug;

use super::R_MAX;
use super::types::{Category, Entry, Position, RadiusMode};

/// Angular range in degrees, `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sector {
	/// Start angle.
	pub start: f64,
	/// End angle (exclusive).
	pub end: f64,
}

impl Sector {
	/// New sector.
	pub const fn new(start: f64, end: f64) -> Self {
		Self { start, end }
	}

	/// Angle of the `index`-th of `count` evenly spread slots.
	pub fn slot_angle(&self, index: usize, count: usize) -> f64 {
		self.start + (self.end - self.start) * (index as f64 + 0.5) / count.max(1) as f64
	}
}

/// Sector used by [`Category::Other`] and unknown categories; shared with
/// Ideas/Likes.
pub const DEFAULT_SECTOR: Sector = Sector::new(270.0, 360.0);

/// Sector owned by `category`.
pub fn category_sector(category: &Category) -> Sector {
	match category {
		Category::People => Sector::new(0.0, 90.0),
		Category::Accomplishments => Sector::new(90.0, 180.0),
		Category::LifeStory => Sector::new(180.0, 270.0),
		Category::IdeasLikes => Sector::new(270.0, 360.0),
		Category::Other | Category::Unknown(_) => DEFAULT_SECTOR,
	}
}

/// Distance from the origin for `entry` under `mode`.
///
/// Valence +1 and power 1 both map to the origin; valence -1 and power 0 map
/// to `r_max`. Values outside the nominal ranges are not clamped.
pub fn radius_for(entry: &Entry, mode: RadiusMode, r_max: f64) -> f64 {
	match mode {
		RadiusMode::Valence => valence_radius(entry.valence, r_max),
		RadiusMode::Power => (1.0 - entry.power) * r_max,
	}
}

/// Radius of a valence value; also used for the ring guides.
pub fn valence_radius(valence: f64, r_max: f64) -> f64 {
	((1.0 - valence) / 2.0) * r_max
}

/// Converts a polar coordinate (degrees) to cartesian.
pub fn polar_to_cartesian(r: f64, theta_deg: f64) -> Position {
	let theta = theta_deg.to_radians();
	Position::new(r * theta.cos(), r * theta.sin())
}

/// Slot angle of every distinct label, paired with the entry that owns it.
///
/// A repeated label keeps only its last occurrence, so the angle and radius
/// of a position always come from the same entry. Slots are assigned per
/// category name: Other and every unknown category resolve to the
/// Ideas/Likes sector and are spread independently of it.
fn slots(entries: &[Entry]) -> Vec<(&Entry, f64)> {
	let mut last: HashMap<&str, usize> = HashMap::with_capacity(entries.len());
	for (i, entry) in entries.iter().enumerate() {
		last.insert(entry.label.as_str(), i);
	}

	let mut by_category: BTreeMap<&Category, Vec<&Entry>> = BTreeMap::new();
	for (i, entry) in entries.iter().enumerate() {
		if last[entry.label.as_str()] == i {
			by_category.entry(&entry.category).or_default().push(entry);
		}
	}

	let mut out = Vec::with_capacity(last.len());
	for (category, mut items) in by_category {
		let sector = category_sector(category);
		items.sort_by(|a, b| a.label.cmp(&b.label));
		let count = items.len();
		out.extend(
			items
				.into_iter()
				.enumerate()
				.map(|(i, item)| (item, sector.slot_angle(i, count))),
		);
	}
	out
}

/// Polar angle (degrees) of each entry, keyed by label.
pub fn compute_angles(entries: &[Entry]) -> HashMap<String, f64> {
	slots(entries)
		.into_iter()
		.map(|(entry, theta)| (entry.label.clone(), theta))
		.collect()
}

/// Positions of every entry, keyed by label, with the default `R_MAX`.
pub fn compute_positions(entries: &[Entry], mode: RadiusMode) -> HashMap<String, Position> {
	compute_positions_with(entries, mode, R_MAX)
}

/// Positions of every entry, keyed by label.
///
/// Duplicate labels collapse onto the last entry carrying that label.
pub fn compute_positions_with(
	entries: &[Entry],
	mode: RadiusMode,
	r_max: f64,
) -> HashMap<String, Position> {
	let positions: HashMap<String, Position> = slots(entries)
		.into_iter()
		.map(|(entry, theta)| {
			let r = radius_for(entry, mode, r_max);
			(entry.label.clone(), polar_to_cartesian(r, theta))
		})
		.collect();
	debug!(
		"positioned {} entries ({:?} mode, r_max {})",
		positions.len(),
		mode,
		r_max
	);
	positions
}
