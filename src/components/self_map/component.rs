use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, WheelEvent};

use super::render;
use super::state::SelfMapState;
use crate::engine::{Entry, Scene, SelfMapData, ViewSettings};

type Listener<E> = Rc<RefCell<Option<Closure<dyn FnMut(E)>>>>;

fn parent_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|(w, h)| *w > 0.0 && *h > 0.0)
		.unwrap_or((800.0, 600.0))
}

fn local_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Polar self map drawn on a canvas.
///
/// Layout and styling are rebuilt from `data` and `settings` whenever either
/// changes; hover, selection, pan and zoom live in the component.
#[component]
pub fn SelfMapCanvas(
	#[prop(into)] data: Signal<SelfMapData>,
	#[prop(into)] settings: Signal<ViewSettings>,
	#[prop(into)] highlighted: Signal<Vec<String>>,
	#[prop(optional)] on_hover: Option<Callback<Option<Entry>>>,
	#[prop(optional)] on_select: Option<Callback<Option<Entry>>>,
	#[prop(optional)] on_escape: Option<Callback<()>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let scene = Memo::new(move |_| Scene::build(&data.get(), &settings.get()));

	let state: Rc<RefCell<Option<SelfMapState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let keydown_cb: Listener<KeyboardEvent> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init, keydown_cb_init) = (
		state.clone(),
		animate.clone(),
		resize_cb.clone(),
		keydown_cb.clone(),
	);

	let emit_hover = move |entry: Option<Entry>| {
		if let Some(cb) = on_hover {
			cb.run(entry);
		}
	};
	let emit_select = move |entry: Option<Entry>| {
		if let Some(cb) = on_select {
			cb.run(entry);
		}
	};

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = parent_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			log::error!("canvas 2d context unavailable");
			return;
		};

		let mut initial = SelfMapState::new(scene.get_untracked(), settings.get_untracked(), w, h);
		initial.highlighted = highlighted.get_untracked().into_iter().collect();
		*state_init.borrow_mut() = Some(initial);
		debug!("self map canvas initialized at {w}x{h}");

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = parent_size(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let state_key = state_init.clone();
		*keydown_cb_init.borrow_mut() = Some(Closure::new(move |ev: KeyboardEvent| {
			if ev.key() != "Escape" {
				return;
			}
			if let Some(ref mut s) = *state_key.borrow_mut() {
				s.clear_interaction();
			}
			emit_hover(None);
			emit_select(None);
			if let Some(cb) = on_escape {
				cb.run(());
			}
		}));
		if let Some(ref cb) = *keydown_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_sync = state.clone();
	Effect::new(move |_| {
		let (scene, settings, highlighted) = (scene.get(), settings.get(), highlighted.get());
		let lost_hover = {
			let mut guard = state_sync.borrow_mut();
			let Some(s) = guard.as_mut() else {
				return;
			};
			let was_hovering = s.hover.label.is_some();
			s.set_scene(scene, settings);
			s.highlighted = highlighted.into_iter().collect();
			was_hovering && s.hover.label.is_none()
		};
		if lost_hover {
			emit_hover(None);
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = local_point(&canvas, &ev);
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.pan.active = true;
			s.pan.moved = false;
			s.pan.start_x = x;
			s.pan.start_y = y;
			s.pan.transform_start_x = s.transform.x;
			s.pan.transform_start_y = s.transform.y;
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = local_point(&canvas, &ev);
		let hovered = {
			let mut guard = state_mm.borrow_mut();
			let Some(s) = guard.as_mut() else {
				return;
			};
			if s.pan.active {
				let (dx, dy) = (x - s.pan.start_x, y - s.pan.start_y);
				if dx.hypot(dy) > 3.0 {
					s.pan.moved = true;
				}
				s.transform.x = s.pan.transform_start_x + dx;
				s.transform.y = s.pan.transform_start_y + dy;
				None
			} else {
				let entry = s.entry_at_position(x, y).map(|p| p.entry.clone());
				s.set_hover(entry.as_ref().map(|e| e.label.clone()))
					.then_some(entry)
			}
		};
		if let Some(entry) = hovered {
			emit_hover(entry);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = local_point(&canvas, &ev);
		let clicked = {
			let mut guard = state_mu.borrow_mut();
			let Some(s) = guard.as_mut() else {
				return;
			};
			let was_click = s.pan.active && !s.pan.moved;
			s.pan.active = false;
			if !was_click {
				return;
			}
			let Some(entry) = s.entry_at_position(x, y).map(|p| p.entry.clone()) else {
				return;
			};
			s.toggle_select(&entry.label).map(|_| entry)
		};
		emit_select(clicked);
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		let changed = match *state_ml.borrow_mut() {
			Some(ref mut s) => {
				s.pan.active = false;
				s.set_hover(None)
			}
			None => false,
		};
		if changed {
			emit_hover(None);
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = local_point(&canvas, &ev);
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			s.zoom_at(x, y, factor);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="self-map-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
