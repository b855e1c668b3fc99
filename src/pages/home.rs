use leptos::prelude::*;
use log::info;

use crate::components::controls::ControlPanel;
use crate::components::hover_info::HoverInfo;
use crate::components::self_map::{Legend, SelfMapCanvas};
use crate::components::shortcuts::KeyboardShortcuts;
use crate::engine::{Entry, SelfMapData, ViewSettings, sample_data};

/// Labels containing `query`, ignoring case. An empty query matches nothing.
fn highlight_matches(data: &SelfMapData, query: &str) -> Vec<String> {
	let query = query.trim().to_lowercase();
	if query.is_empty() {
		return Vec::new();
	}
	data.entries
		.iter()
		.filter(|e| e.label.to_lowercase().contains(&query))
		.map(|e| e.label.clone())
		.collect()
}

fn title(data: &SelfMapData) -> String {
	format!(
		"Self Map — {} entries, {} associations",
		data.entries.len(),
		data.associations.len()
	)
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let data = RwSignal::new(sample_data());
	let settings = RwSignal::new(ViewSettings::default());
	let error = RwSignal::new(None::<String>);
	let hovered = RwSignal::new(None::<Entry>);
	let show_help = RwSignal::new(false);
	let search = RwSignal::new(String::new());
	let highlighted = Signal::derive(move || highlight_matches(&data.get(), &search.get()));

	// the dataset is swapped whole; a rejected upload never reaches here
	let replace_data = move |next: SelfMapData| {
		info!(
			"dataset replaced: {} entries, {} associations",
			next.entries.len(),
			next.associations.len()
		);
		hovered.set(None);
		error.set(None);
		data.set(next);
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<div class="app">
				<header class="app-header">
					<h1>{move || title(&data.get())}</h1>
					<input
						class="search"
						type="search"
						placeholder="Highlight entries…"
						prop:value=move || search.get()
						on:input=move |ev| search.set(event_target_value(&ev))
					/>
				</header>

				{move || {
					error
						.get()
						.map(|e| {
							view! {
								<div class="error-banner">
									<strong>"Error: "</strong>
									{e}
								</div>
							}
						})
				}}

				<main class="app-main">
					<ControlPanel
						settings=settings
						on_load=Callback::new(replace_data)
						on_load_sample=Callback::new(move |_: ()| replace_data(sample_data()))
						on_error=Callback::new(move |msg: String| error.set(Some(msg)))
						on_show_help=Callback::new(move |_: ()| show_help.set(true))
					/>
					<div class="glass-panel canvas-host">
						<div class="hover-slot">
							<HoverInfo entry=hovered />
						</div>
						<div class="legend-slot">
							<Legend data=data />
						</div>
						<SelfMapCanvas
							data=data
							settings=settings
							highlighted=highlighted
							on_hover=Callback::new(move |entry: Option<Entry>| hovered.set(entry))
							on_escape=Callback::new(move |_: ()| show_help.set(false))
						/>
					</div>
				</main>

				<KeyboardShortcuts open=show_help />
			</div>
		</ErrorBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_highlight_matches_case_insensitive() {
		let data = sample_data();
		assert_eq!(highlight_matches(&data, "  music "), vec!["Music".to_string()]);
		let matches = highlight_matches(&data, "RE");
		assert!(matches.contains(&"Career: Staff Engineer".to_string()));
		assert!(matches.contains(&"Published Research".to_string()));
		assert!(!matches.contains(&"Music".to_string()));
	}

	#[test]
	fn test_empty_query_highlights_nothing() {
		assert!(highlight_matches(&sample_data(), "   ").is_empty());
	}

	#[test]
	fn test_title_counts() {
		assert_eq!(title(&sample_data()), "Self Map — 14 entries, 7 associations");
	}
}
