use super::types::{Association, Category, Entry, Relation, SelfMapData};

/// Built-in demo dataset shown on first load and by "Load Sample".
pub fn sample_data() -> SelfMapData {
	use Category::*;
	use Relation::*;

	let entries = vec![
		Entry::new("Partner", People, 0.96, 0.90),
		Entry::new("Child A", People, 0.98, 0.95),
		Entry::new("Best Friend", People, 0.85, 0.88),
		Entry::new("Parent", People, 0.92, 0.75),
		Entry::new("Career: Staff Engineer", Accomplishments, 0.88, 0.65),
		Entry::new("Financial Independence", Accomplishments, 0.82, 0.78),
		Entry::new("Published Research", Accomplishments, 0.68, 0.55),
		Entry::new("Childhood Trauma", LifeStory, 0.72, -0.85),
		Entry::new("Recovery (5 yrs)", LifeStory, 0.76, 0.82),
		Entry::new("College Years", LifeStory, 0.55, 0.45),
		Entry::new("Environmentalism", IdeasLikes, 0.74, 0.85),
		Entry::new("Philosophy", IdeasLikes, 0.62, 0.72),
		Entry::new("Music", IdeasLikes, 0.58, 0.90),
		Entry::new("Past Relationship", Other, 0.45, -0.55),
	];

	let associations = vec![
		Association::new("Career: Staff Engineer", "Financial Independence", Affirms, 0.8),
		Association::new("Childhood Trauma", "Recovery (5 yrs)", Threatens, 0.6),
		Association::new("Partner", "Child A", Affirms, 0.95),
		Association::new("Environmentalism", "Philosophy", AssociatesWith, 0.7),
		Association::new("Best Friend", "Music", Affirms, 0.65),
		Association::new("Childhood Trauma", "Past Relationship", AssociatesWith, 0.4),
		Association::new("Recovery (5 yrs)", "Partner", Affirms, 0.8),
	];

	SelfMapData {
		entries,
		associations,
	}
}
