use leptos::prelude::*;

use crate::engine::{Entry, category_base};

fn category_css(entry: &Entry) -> String {
	category_base(&entry.category).to_string()
}

/// Card describing the hovered entry; renders nothing when idle.
#[component]
pub fn HoverInfo(#[prop(into)] entry: Signal<Option<Entry>>) -> impl IntoView {
	move || {
		entry.get().map(|e| {
			let color = category_css(&e);
			let valence_class = if e.valence >= 0.0 {
				"mono valence-positive"
			} else {
				"mono valence-negative"
			};
			view! {
				<div class="glass-panel hover-info">
					<h3>
						<span class="swatch" style=format!("background-color: {color}") />
						{e.label.clone()}
					</h3>
					<div class="row">
						<span class="muted">"Category:"</span>
						<span style=format!("color: {color}")>{e.category.to_string()}</span>
					</div>
					<div class="row">
						<span class="muted">"Power:"</span>
						<span class="mono">{format!("{:.0}%", e.power * 100.0)}</span>
					</div>
					<div class="row">
						<span class="muted">"Valence:"</span>
						<span class=valence_class>{format!("{:+.2}", e.valence)}</span>
					</div>
				</div>
			}
		})
	}
}
