use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{HALO_ALPHA, SELF_MARKER_SIZE, SelfMapState};
use crate::engine::{Category, PlacedEntry, Polyline, Relation};

const BACKGROUND: &str = "#12121c";
const FOREGROUND: &str = "226, 232, 240";
const GUIDE: &str = "148, 163, 184";

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// Marker outline per category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
	Circle,
	Square,
	Diamond,
	Cross,
	Triangle,
}

impl Shape {
	/// Text symbol drawn in the legend.
	pub fn glyph(self) -> &'static str {
		match self {
			Shape::Circle => "●",
			Shape::Square => "■",
			Shape::Diamond => "◆",
			Shape::Cross => "✚",
			Shape::Triangle => "▲",
		}
	}
}

pub fn category_shape(category: &Category) -> Shape {
	match category {
		Category::People => Shape::Circle,
		Category::Accomplishments => Shape::Square,
		Category::LifeStory => Shape::Diamond,
		Category::IdeasLikes => Shape::Cross,
		Category::Other | Category::Unknown(_) => Shape::Triangle,
	}
}

fn edge_style(relation: Relation) -> &'static str {
	match relation {
		Relation::Affirms => "rgba(74, 222, 128, 0.45)",
		Relation::Threatens => "rgba(248, 113, 113, 0.50)",
		Relation::AssociatesWith => "rgba(148, 163, 184, 0.40)",
	}
}

pub fn render(state: &SelfMapState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_guides(state, ctx);
	if state.settings.show_edges {
		draw_edges(state, ctx);
	}
	draw_self(state, ctx);
	draw_entries(state, ctx);
}

fn stroke_polyline(state: &SelfMapState, ctx: &CanvasRenderingContext2d, line: &Polyline) {
	ctx.begin_path();
	for (i, (wx, wy)) in line.points().enumerate() {
		let (x, y) = state.world_to_screen(wx, wy);
		if i == 0 {
			ctx.move_to(x, y);
		} else {
			ctx.line_to(x, y);
		}
	}
	ctx.stroke();
}

fn draw_guides(state: &SelfMapState, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_width(1.0);
	ctx.set_stroke_style_str(&format!("rgba({GUIDE}, 0.3)"));
	for ring in &state.scene.rings {
		stroke_polyline(state, ctx, ring);
	}

	ctx.set_stroke_style_str(&format!("rgba({GUIDE}, 0.4)"));
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(2.0),
		&JsValue::from_f64(4.0),
	));
	for axis in &state.scene.axes {
		stroke_polyline(state, ctx, axis);
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_edges(state: &SelfMapState, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_width(2.0);
	for (relation, segments) in &state.scene.edges {
		ctx.set_stroke_style_str(edge_style(*relation));
		ctx.begin_path();
		for seg in segments {
			let (x1, y1) = state.world_to_screen(seg.from.x, seg.from.y);
			let (x2, y2) = state.world_to_screen(seg.to.x, seg.to.y);
			ctx.move_to(x1, y1);
			ctx.line_to(x2, y2);
		}
		ctx.stroke();
	}
}

fn draw_self(state: &SelfMapState, ctx: &CanvasRenderingContext2d) {
	let (x, y) = state.world_to_screen(0.0, 0.0);
	let (outer, inner) = (SELF_MARKER_SIZE / 2.0, SELF_MARKER_SIZE / 5.0);
	ctx.begin_path();
	for i in 0..10 {
		let r = if i % 2 == 0 { outer } else { inner };
		let a = -PI / 2.0 + i as f64 * PI / 5.0;
		let (px, py) = (x + r * a.cos(), y + r * a.sin());
		if i == 0 {
			ctx.move_to(px, py);
		} else {
			ctx.line_to(px, py);
		}
	}
	ctx.close_path();
	ctx.set_fill_style_str("rgb(139, 92, 246)");
	ctx.fill();

	ctx.set_fill_style_str(&format!("rgb({FOREGROUND})"));
	ctx.set_font("12px sans-serif");
	ctx.set_text_align("center");
	let _ = ctx.fill_text("Self", x, y - outer - 4.0);
}

fn trace_shape(ctx: &CanvasRenderingContext2d, shape: Shape, x: f64, y: f64, r: f64) {
	ctx.begin_path();
	match shape {
		Shape::Circle => {
			let _ = ctx.arc(x, y, r, 0.0, 2.0 * PI);
		}
		Shape::Square => {
			let h = r * 0.85;
			ctx.rect(x - h, y - h, 2.0 * h, 2.0 * h);
		}
		Shape::Diamond => {
			ctx.move_to(x, y - r);
			ctx.line_to(x + r, y);
			ctx.line_to(x, y + r);
			ctx.line_to(x - r, y);
			ctx.close_path();
		}
		Shape::Cross => {
			let w = r * 0.35;
			let pts = [
				(-w, -r),
				(w, -r),
				(w, -w),
				(r, -w),
				(r, w),
				(w, w),
				(w, r),
				(-w, r),
				(-w, w),
				(-r, w),
				(-r, -w),
				(-w, -w),
			];
			ctx.move_to(x + pts[0].0, y + pts[0].1);
			for (dx, dy) in &pts[1..] {
				ctx.line_to(x + dx, y + dy);
			}
			ctx.close_path();
		}
		Shape::Triangle => {
			ctx.move_to(x, y - r);
			ctx.line_to(x + r * 0.87, y + r * 0.5);
			ctx.line_to(x - r * 0.87, y + r * 0.5);
			ctx.close_path();
		}
	}
}

fn draw_entries(state: &SelfMapState, ctx: &CanvasRenderingContext2d) {
	let t = ease_out_cubic(state.hover.highlight_t);

	// known categories in legend order, then unknown ones by name
	let mut ordered: Vec<&PlacedEntry> = state.scene.entries.iter().collect();
	ordered.sort_by(|a, b| a.entry.category.cmp(&b.entry.category));

	// halos first so no halo covers a neighbouring marker
	for placed in &ordered {
		let (x, y) = state.world_to_screen(placed.position.x, placed.position.y);
		let shape = category_shape(&placed.entry.category);
		trace_shape(ctx, shape, x, y, state.halo_size(placed) / 2.0);
		ctx.set_fill_style_str(&placed.color.with_alpha(HALO_ALPHA).to_string());
		ctx.fill();
	}

	for placed in ordered {
		draw_marker(state, ctx, placed, category_shape(&placed.entry.category), t);
	}
}

fn draw_marker(
	state: &SelfMapState,
	ctx: &CanvasRenderingContext2d,
	placed: &PlacedEntry,
	shape: Shape,
	t: f64,
) {
	let label = placed.entry.label.as_str();
	let (x, y) = state.world_to_screen(placed.position.x, placed.position.y);
	let radius = state.marker_size(placed) / 2.0;
	let dimmed = state.is_dimmed(label);

	trace_shape(ctx, shape, x, y, radius);
	ctx.set_fill_style_str(&placed.color.with_alpha(state.marker_alpha(placed, t)).to_string());
	ctx.fill();

	let (outline, width) = if state.selected.as_deref() == Some(label) {
		(format!("rgb({FOREGROUND})"), 2.5)
	} else if state.highlighted.contains(label) {
		(format!("rgba({FOREGROUND}, 0.7)"), 1.8)
	} else if dimmed {
		(format!("rgba({FOREGROUND}, {})", 0.45 - 0.3 * t), 1.3)
	} else {
		("rgba(0, 0, 0, 0.45)".to_string(), 1.3)
	};
	ctx.set_stroke_style_str(&outline);
	ctx.set_line_width(width);
	ctx.stroke();

	if state.settings.show_labels {
		let alpha = if dimmed { 0.88 - 0.6 * t } else { 0.88 };
		ctx.set_fill_style_str(&format!("rgba({FOREGROUND}, {alpha})"));
		ctx.set_font("10px sans-serif");
		ctx.set_text_align("center");
		let _ = ctx.fill_text(label, x, y - radius - 4.0);
	}
}
