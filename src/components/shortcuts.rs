use leptos::prelude::*;

const SHORTCUTS: &[(&str, &str)] = &[
	("Esc", "Clear selection / Close this dialog"),
	("Click Node", "Select a node and its connections"),
	("Drag", "Pan the visualization"),
	("Scroll", "Zoom in and out"),
];

/// Modal listing the canvas shortcuts. Clicking the backdrop closes it.
#[component]
pub fn KeyboardShortcuts(open: RwSignal<bool>) -> impl IntoView {
	view! {
		<Show when=move || open.get()>
			<div class="modal-backdrop" on:click=move |_| open.set(false)>
				<div class="glass-panel modal" on:click=|ev| ev.stop_propagation()>
					<button class="modal-close" on:click=move |_| open.set(false)>"×"</button>
					<h3>"Keyboard Shortcuts"</h3>
					<p class="muted">"Quick actions to navigate the map."</p>
					<ul class="shortcut-list">
						{SHORTCUTS
							.iter()
							.map(|(keys, description)| {
								view! {
									<li>
										<span>{*description}</span>
										<kbd>{*keys}</kbd>
									</li>
								}
							})
							.collect_view()}
					</ul>
				</div>
			</div>
		</Show>
	}
}
