use std::collections::BTreeSet;

use leptos::prelude::*;

use super::render::{Shape, category_shape};
use crate::engine::{Category, Entry, SelfMapData, category_base};

/// One legend line: category name, swatch colour and marker shape.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
	pub name: String,
	pub color: String,
	pub shape: Shape,
}

impl LegendRow {
	fn new(category: &Category) -> Self {
		Self {
			name: category.name().to_string(),
			color: category_base(category).to_string(),
			shape: category_shape(category),
		}
	}
}

/// Rows for every category present in `entries`: known categories in
/// [`Category::ALL`] order, then unknown ones by name.
pub fn legend_rows(entries: &[Entry]) -> Vec<LegendRow> {
	let present: BTreeSet<&Category> = entries.iter().map(|e| &e.category).collect();
	present.into_iter().map(LegendRow::new).collect()
}

/// Category key overlaid on the canvas.
#[component]
pub fn Legend(#[prop(into)] data: Signal<SelfMapData>) -> impl IntoView {
	let rows = Memo::new(move |_| legend_rows(&data.get().entries));
	view! {
		<Show when=move || !rows.get().is_empty()>
			<ul class="glass-panel legend">
				{move || {
					rows.get()
						.into_iter()
						.map(|row| {
							view! {
								<li>
									<span class="legend-glyph" style=format!("color: {}", row.color)>
										{row.shape.glyph()}
									</span>
									{row.name}
								</li>
							}
						})
						.collect_view()
				}}
			</ul>
		</Show>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::sample_data;

	#[test]
	fn test_rows_follow_category_order() {
		let rows = legend_rows(&sample_data().entries);
		let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
		assert_eq!(
			names,
			vec!["People", "Accomplishments", "Life Story", "Ideas/Likes", "Other"]
		);
		assert_eq!(rows[0].shape, Shape::Circle);
		assert_eq!(rows[0].color, "hsl(280, 70%, 60%)");
		assert_eq!(rows[4].shape, Shape::Triangle);
		assert_eq!(rows[4].color, "hsl(0, 0%, 62%)");
	}

	#[test]
	fn test_rows_match_category_styling() {
		let entries: Vec<Entry> = Category::ALL
			.iter()
			.rev()
			.map(|c| Entry::new(c.name(), c.clone(), 0.5, 0.0))
			.collect();
		let rows = legend_rows(&entries);
		assert_eq!(rows.len(), Category::ALL.len());
		for (row, category) in rows.iter().zip(Category::ALL.iter()) {
			assert_eq!(row.name, category.name());
			assert_eq!(row.shape, category_shape(category));
			assert_eq!(row.color, category_base(category).to_string());
		}
	}

	#[test]
	fn test_rows_only_for_present_categories() {
		let entries = vec![
			Entry::new("Hiking", Category::Unknown("Hobbies".to_string()), 0.5, 0.0),
			Entry::new("Partner", Category::People, 0.9, 0.9),
			Entry::new("Friend", Category::People, 0.8, 0.8),
		];
		let rows = legend_rows(&entries);
		assert_eq!(rows.len(), 2);
		assert_eq!(rows[0].name, "People");
		assert_eq!(rows[1].name, "Hobbies");
		assert_eq!(rows[1].shape, Shape::Triangle);
		assert!(legend_rows(&[]).is_empty());
	}
}
