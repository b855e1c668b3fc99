use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{FileReader, HtmlInputElement};

use crate::engine::{IngestOptions, RadiusMode, SelfMapData, SizeMetric, ViewSettings, parse_document};

fn button_class(active: bool) -> &'static str {
	if active { "btn btn-primary" } else { "btn" }
}

/// Reads the chosen file and hands the validated dataset (or the reason it
/// was rejected) to the callbacks.
fn read_upload(input: &HtmlInputElement, on_load: Callback<SelfMapData>, on_error: Callback<String>) {
	let Some(file) = input.files().and_then(|files| files.get(0)) else {
		return;
	};
	let reader = match FileReader::new() {
		Ok(reader) => reader,
		Err(_) => {
			on_error.run("File reading is not supported in this browser.".to_string());
			return;
		}
	};

	let name = file.name();
	let reader_done = reader.clone();
	let onload = Closure::once_into_js(move || {
		let Some(text) = reader_done.result().ok().and_then(|v| v.as_string()) else {
			on_error.run(format!("Could not read `{name}`."));
			return;
		};
		match parse_document(&text, &IngestOptions::default()) {
			Ok(data) => {
				info!("loaded `{name}`: {} entries", data.entries.len());
				on_load.run(data);
			}
			Err(e) => {
				error!("rejected `{name}`: {e}");
				on_error.run(format!("Failed to load `{name}`: {e}"));
			}
		}
	});
	reader.set_onload(Some(onload.unchecked_ref()));
	if reader.read_as_text(&file).is_err() {
		on_error.run("Failed to read the selected file.".to_string());
	}
	// allow picking the same file again
	input.set_value("");
}

/// Data source buttons plus every view setting.
#[component]
pub fn ControlPanel(
	settings: RwSignal<ViewSettings>,
	on_load: Callback<SelfMapData>,
	on_load_sample: Callback<()>,
	on_error: Callback<String>,
	on_show_help: Callback<()>,
) -> impl IntoView {
	let on_file = move |ev: web_sys::Event| {
		let input: HtmlInputElement = event_target(&ev);
		read_upload(&input, on_load, on_error);
	};

	let metric_buttons = SizeMetric::ALL
		.into_iter()
		.map(|metric| {
			view! {
				<button
					class=move || button_class(settings.get().size_metric == metric)
					on:click=move |_| settings.update(|s| s.size_metric = metric)
				>
					{metric.title()}
				</button>
			}
		})
		.collect_view();

	let mode_button = move |mode: RadiusMode, title: &'static str| {
		view! {
			<button
				class=move || button_class(settings.get().radius_mode == mode)
				on:click=move |_| settings.update(|s| s.radius_mode = mode)
			>
				{title}
			</button>
		}
	};

	let (scale_min, scale_max) = ViewSettings::SIZE_SCALE_RANGE;
	let (opacity_min, opacity_max) = ViewSettings::OPACITY_RANGE;

	view! {
		<div class="glass-panel control-panel">
			<h3>"Data"</h3>
			<div class="button-row">
				<button class="btn" on:click=move |_| on_load_sample.run(())>"Load Sample"</button>
				<label class="btn" for="file-upload">"Upload"</label>
				<input id="file-upload" type="file" accept=".json" class="hidden" on:change=on_file />
			</div>

			<h3>"Node Size Metric"</h3>
			<div class="button-grid">{metric_buttons}</div>

			<h3>"Radius Mode"</h3>
			<div class="button-grid">
				{mode_button(RadiusMode::Valence, "Valence")}
				{mode_button(RadiusMode::Power, "Power")}
			</div>

			<h3>"Display Options"</h3>
			<div class="button-grid">
				<button
					class=move || button_class(settings.get().show_edges)
					on:click=move |_| settings.update(|s| s.show_edges = !s.show_edges)
				>
					{move || if settings.get().show_edges { "Hide Edges" } else { "Show Edges" }}
				</button>
				<button
					class=move || button_class(settings.get().show_labels)
					on:click=move |_| settings.update(|s| s.show_labels = !s.show_labels)
				>
					{move || if settings.get().show_labels { "Hide Labels" } else { "Show Labels" }}
				</button>
				<button
					class=move || button_class(settings.get().pulsation)
					on:click=move |_| settings.update(|s| s.pulsation = !s.pulsation)
				>
					{move || if settings.get().pulsation { "Pulsation On" } else { "Pulsation Off" }}
				</button>
			</div>

			<div class="slider">
				<label>"Size Scale"</label>
				<span class="mono">{move || format!("{:.2}", settings.get().size_scale)}</span>
				<input
					type="range"
					min=scale_min.to_string()
					max=scale_max.to_string()
					step="0.1"
					prop:value=move || settings.get().size_scale.to_string()
					on:input=move |ev| {
						if let Ok(v) = event_target_value(&ev).parse::<f64>() {
							settings.update(|s| s.size_scale = v.clamp(scale_min, scale_max));
						}
					}
				/>
			</div>
			<div class="slider">
				<label>"Opacity"</label>
				<span class="mono">{move || format!("{:.2}", settings.get().opacity)}</span>
				<input
					type="range"
					min=opacity_min.to_string()
					max=opacity_max.to_string()
					step="0.05"
					prop:value=move || settings.get().opacity.to_string()
					on:input=move |ev| {
						if let Ok(v) = event_target_value(&ev).parse::<f64>() {
							settings.update(|s| s.opacity = v.clamp(opacity_min, opacity_max));
						}
					}
				/>
			</div>

			<button class="btn btn-wide" on:click=move |_| on_show_help.run(())>
				"Keyboard Shortcuts"
			</button>
		</div>
	}
}
