//! Data model shared by the engine and the canvas: entries, associations and
//! the control enums that select how they are encoded.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of an entry. Names outside the known set are kept verbatim in
/// [`Category::Unknown`] and borrow the Other sector and palette.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
	/// Partners, family, friends.
	People,
	/// Work, milestones, achievements.
	Accomplishments,
	/// Formative events.
	LifeStory,
	/// Interests, beliefs, tastes.
	IdeasLikes,
	/// Explicitly uncategorized.
	Other,
	/// Any other name, as written in the document.
	Unknown(String),
}

impl Category {
	/// Known categories in legend/draw order.
	pub const ALL: [Category; 5] = [
		Category::People,
		Category::Accomplishments,
		Category::LifeStory,
		Category::IdeasLikes,
		Category::Other,
	];

	/// Display and wire name.
	pub fn name(&self) -> &str {
		match self {
			Category::People => "People",
			Category::Accomplishments => "Accomplishments",
			Category::LifeStory => "Life Story",
			Category::IdeasLikes => "Ideas/Likes",
			Category::Other => "Other",
			Category::Unknown(name) => name,
		}
	}
}

impl From<String> for Category {
	fn from(name: String) -> Self {
		match name.as_str() {
			"People" => Category::People,
			"Accomplishments" => Category::Accomplishments,
			"Life Story" => Category::LifeStory,
			"Ideas/Likes" => Category::IdeasLikes,
			"Other" => Category::Other,
			_ => Category::Unknown(name),
		}
	}
}

impl From<Category> for String {
	fn from(category: Category) -> Self {
		match category {
			Category::Unknown(name) => name,
			known => known.name().to_string(),
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Kind of an association. Unknown strings deserialize to
/// [`Relation::AssociatesWith`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
	/// One entry supports or strengthens the other.
	Affirms,
	/// One entry undermines or conflicts with the other.
	Threatens,
	/// Neutral connection.
	#[serde(other)]
	AssociatesWith,
}

impl Relation {
	/// Relations in edge draw order.
	pub const ALL: [Relation; 3] = [
		Relation::Affirms,
		Relation::Threatens,
		Relation::AssociatesWith,
	];
}

/// A single identity concept on the map. `label` is the identity key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
	/// Unique label, used to join associations.
	pub label: String,
	/// Category, which selects the angular sector and hue family.
	pub category: Category,
	/// Centrality to one's identity, nominally in `[0, 1]`.
	pub power: f64,
	/// Emotional tone, nominally in `[-1, 1]`.
	pub valence: f64,
}

impl Entry {
	/// Convenience constructor.
	pub fn new(label: impl Into<String>, category: Category, power: f64, valence: f64) -> Self {
		Self {
			label: label.into(),
			category,
			power,
			valence,
		}
	}
}

/// Directed, typed, weighted edge between two entry labels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Association {
	/// Source label.
	pub src: String,
	/// Destination label.
	pub dst: String,
	/// Kind of relationship.
	pub relation: Relation,
	/// Strength in `[0, 1]`; absent when the document omits it.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub weight: Option<f64>,
}

impl Association {
	/// Convenience constructor with an explicit weight.
	pub fn new(src: impl Into<String>, dst: impl Into<String>, relation: Relation, weight: f64) -> Self {
		Self {
			src: src.into(),
			dst: dst.into(),
			relation,
			weight: Some(weight),
		}
	}

	/// Weight used for degree totals. Missing, zero and NaN weights count as 1.
	pub fn effective_weight(&self) -> f64 {
		match self.weight {
			Some(w) if w != 0.0 && !w.is_nan() => w,
			_ => 1.0,
		}
	}
}

/// Whole dataset. Replaced wholesale, never mutated in place.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelfMapData {
	/// Entries in document order.
	pub entries: Vec<Entry>,
	/// Associations in document order.
	pub associations: Vec<Association>,
}

/// Cartesian point in layout units, mathematical orientation (y up).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Position {
	/// New point.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Distance from the origin ("Self").
	pub fn radius(&self) -> f64 {
		self.x.hypot(self.y)
	}
}

/// Which scalar drives the distance from the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiusMode {
	/// Positive entries sit close to Self.
	#[default]
	Valence,
	/// Central entries sit close to Self.
	Power,
}

/// Which scalar drives marker size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeMetric {
	/// `power * |valence|`.
	#[default]
	#[serde(rename = "power_x_val")]
	PowerTimesValence,
	/// `|valence|`.
	#[serde(rename = "valence_abs")]
	ValenceAbs,
	/// Normalized weighted degree.
	#[serde(rename = "weighted_degree")]
	WeightedDegree,
	/// `power`; also the fallback for unknown metric names.
	#[serde(rename = "power", other)]
	Power,
}

impl SizeMetric {
	/// Metrics in control-panel order.
	pub const ALL: [SizeMetric; 4] = [
		SizeMetric::PowerTimesValence,
		SizeMetric::Power,
		SizeMetric::ValenceAbs,
		SizeMetric::WeightedDegree,
	];

	/// Human-readable label for the control panel.
	pub fn title(self) -> &'static str {
		match self {
			SizeMetric::PowerTimesValence => "Power × |Valence|",
			SizeMetric::Power => "Power",
			SizeMetric::ValenceAbs => "|Valence|",
			SizeMetric::WeightedDegree => "Weighted Degree",
		}
	}
}
