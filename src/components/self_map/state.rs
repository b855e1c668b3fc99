use std::collections::HashSet;

use crate::engine::{PlacedEntry, R_MAX, Scene, ViewSettings};

/// Largest marker diameter drawn on screen, in pixels.
pub const MAX_MARKER_SIZE: f64 = 80.0;
pub const SELECTED_SCALE: f64 = 1.3;
pub const HIGHLIGHT_SCALE: f64 = 1.15;
pub const DIM_ALPHA: f64 = 0.15;
pub const HALO_ALPHA: f64 = 0.10;
/// Layout units kept visible beyond `R_MAX` on every side.
pub const VIEW_PADDING: f64 = 16.0;
/// Minimum hit radius in pixels, so tiny markers stay clickable.
pub const HIT_RADIUS: f64 = 8.0;
pub const SELF_MARKER_SIZE: f64 = 20.0;

#[derive(Clone, Debug)]
pub struct ViewTransform {
	/// Screen position of the origin.
	pub x: f64,
	pub y: f64,
	/// Zoom on top of the fit-to-canvas scale.
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub label: Option<String>,
	pub dimmed: HashSet<String>,
	pub highlight_t: f64,
	prev_dimmed: HashSet<String>,
}

pub struct SelfMapState {
	pub scene: Scene,
	pub settings: ViewSettings,
	pub highlighted: HashSet<String>,
	pub selected: Option<String>,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub time: f64,
}

impl SelfMapState {
	pub fn new(scene: Scene, settings: ViewSettings, width: f64, height: f64) -> Self {
		Self {
			scene,
			settings,
			highlighted: HashSet::new(),
			selected: None,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			time: 0.0,
		}
	}

	/// Swaps in a freshly built scene. Hover and selection survive only if
	/// their labels still exist.
	pub fn set_scene(&mut self, scene: Scene, settings: ViewSettings) {
		self.scene = scene;
		self.settings = settings;
		if let Some(label) = self.selected.take() {
			if self.scene.entry(&label).is_some() {
				self.selected = Some(label);
			}
		}
		if let Some(label) = self.hover.label.take() {
			if self.scene.entry(&label).is_some() {
				self.hover.dimmed = self.scene.dimmed_for(&label);
				self.hover.label = Some(label);
			} else {
				self.hover.dimmed.clear();
			}
		}
	}

	/// Pixels per layout unit at zoom 1: the padded layout fits the shorter
	/// canvas side.
	pub fn fit_scale(&self) -> f64 {
		let extent = 2.0 * (R_MAX + VIEW_PADDING);
		(self.width.min(self.height) / extent).max(f64::EPSILON)
	}

	/// Layout coordinates (y up) to canvas pixels (y down).
	pub fn world_to_screen(&self, wx: f64, wy: f64) -> (f64, f64) {
		let s = self.fit_scale() * self.transform.k;
		(self.transform.x + wx * s, self.transform.y - wy * s)
	}

	pub fn screen_to_world(&self, sx: f64, sy: f64) -> (f64, f64) {
		let s = self.fit_scale() * self.transform.k;
		((sx - self.transform.x) / s, (self.transform.y - sy) / s)
	}

	/// On-screen marker diameter after selection and highlight multipliers.
	pub fn marker_size(&self, placed: &PlacedEntry) -> f64 {
		let label = &placed.entry.label;
		let size = if self.selected.as_deref() == Some(label.as_str()) {
			placed.size * SELECTED_SCALE
		} else if self.highlighted.contains(label) {
			placed.size * HIGHLIGHT_SCALE
		} else {
			placed.size
		};
		size.min(MAX_MARKER_SIZE)
	}

	/// Halo diameter behind a marker.
	pub fn halo_size(&self, placed: &PlacedEntry) -> f64 {
		let base = (placed.size * 1.55 + 8.0).min(MAX_MARKER_SIZE);
		let focused = self.selected.as_deref() == Some(placed.entry.label.as_str())
			|| self.hover.label.as_deref() == Some(placed.entry.label.as_str());
		if self.settings.pulsation && focused {
			base * (1.0 + 0.15 * (self.time * 3.0).sin())
		} else {
			base
		}
	}

	/// Marker alpha, fading toward [`DIM_ALPHA`] while the entry is dimmed.
	pub fn marker_alpha(&self, placed: &PlacedEntry, t: f64) -> f64 {
		if self.is_dimmed(&placed.entry.label) {
			placed.color.a + (DIM_ALPHA - placed.color.a) * t
		} else {
			placed.color.a
		}
	}

	pub fn is_dimmed(&self, label: &str) -> bool {
		self.hover.dimmed.contains(label) || self.hover.prev_dimmed.contains(label)
	}

	/// Closest entry whose marker covers the screen point.
	pub fn entry_at_position(&self, sx: f64, sy: f64) -> Option<&PlacedEntry> {
		self.scene
			.entries
			.iter()
			.filter_map(|placed| {
				let (px, py) = self.world_to_screen(placed.position.x, placed.position.y);
				let dist = (px - sx).hypot(py - sy);
				let r = (self.marker_size(placed) / 2.0).max(HIT_RADIUS);
				(dist < r).then_some((dist, placed))
			})
			.min_by(|a, b| a.0.total_cmp(&b.0))
			.map(|(_, placed)| placed)
	}

	/// Returns true when the hovered label changed.
	pub fn set_hover(&mut self, label: Option<String>) -> bool {
		if self.hover.label == label {
			return false;
		}
		let was_hovering = self.hover.label.is_some();

		// keep the old dim set while it fades out
		if was_hovering && label.is_none() {
			self.hover.prev_dimmed = std::mem::take(&mut self.hover.dimmed);
		} else {
			self.hover.prev_dimmed.clear();
		}

		self.hover.dimmed = match &label {
			Some(l) => self.scene.dimmed_for(l),
			None => HashSet::new(),
		};
		self.hover.label = label;
		true
	}

	/// Click on an entry: select it, or clear the selection if it was already
	/// selected.
	pub fn toggle_select(&mut self, label: &str) -> Option<String> {
		if self.selected.as_deref() == Some(label) {
			self.selected = None;
		} else {
			self.selected = Some(label.to_string());
		}
		self.selected.clone()
	}

	pub fn clear_interaction(&mut self) {
		self.selected = None;
		self.hover = HoverState::default();
		self.pan = PanState::default();
	}

	/// Zooms by `factor` keeping the point under the cursor fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let new_k = (self.transform.k * factor).clamp(0.1, 10.0);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn tick(&mut self, dt: f64) {
		self.time += dt;
		let (target, speed) = if self.hover.label.is_some() {
			(1.0, 6.0)
		} else {
			(0.0, 4.0)
		};
		self.hover.highlight_t += (target - self.hover.highlight_t) * (speed * dt).min(1.0);
		if self.hover.label.is_none() && self.hover.highlight_t < 0.01 {
			self.hover.highlight_t = 0.0;
			self.hover.prev_dimmed.clear();
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		// keep the origin at the same relative spot
		self.transform.x += (width - self.width) / 2.0;
		self.transform.y += (height - self.height) / 2.0;
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::{Category, Entry, SelfMapData, sample_data};

	fn state() -> SelfMapState {
		let settings = ViewSettings::default();
		SelfMapState::new(Scene::build(&sample_data(), &settings), settings, 800.0, 600.0)
	}

	#[test]
	fn test_origin_at_canvas_center() {
		let s = state();
		assert_eq!(s.world_to_screen(0.0, 0.0), (400.0, 300.0));
		let (wx, wy) = s.screen_to_world(400.0, 300.0);
		assert!(wx.abs() < 1e-9 && wy.abs() < 1e-9);
	}

	#[test]
	fn test_y_axis_flipped() {
		let s = state();
		let (_, sy) = s.world_to_screen(0.0, 10.0);
		assert!(sy < 300.0);
	}

	#[test]
	fn test_layout_fits_short_side() {
		let s = state();
		let (_, top) = s.world_to_screen(0.0, R_MAX + VIEW_PADDING);
		assert!(top.abs() < 1e-9);
	}

	#[test]
	fn test_hit_and_hover_dims_unconnected() {
		let mut s = state();
		let partner = s.scene.entry("Partner").cloned().unwrap();
		let (sx, sy) = s.world_to_screen(partner.position.x, partner.position.y);
		let hit = s.entry_at_position(sx, sy).map(|p| p.entry.label.clone());
		assert_eq!(hit.as_deref(), Some("Partner"));

		assert!(s.set_hover(hit));
		assert!(s.is_dimmed("Music"));
		assert!(!s.is_dimmed("Child A"));
		assert!(!s.set_hover(Some("Partner".to_string())));

		s.set_hover(None);
		// fading out: still dimmed until the tick settles
		assert!(s.is_dimmed("Music"));
		for _ in 0..200 {
			s.tick(0.016);
		}
		assert!(!s.is_dimmed("Music"));
	}

	#[test]
	fn test_marker_size_multipliers() {
		let mut s = state();
		let placed = s.scene.entry("Music").cloned().unwrap();
		assert_eq!(s.marker_size(&placed), placed.size);
		s.highlighted.insert("Music".to_string());
		assert!((s.marker_size(&placed) - placed.size * HIGHLIGHT_SCALE).abs() < 1e-9);
		s.toggle_select("Music");
		assert!((s.marker_size(&placed) - placed.size * SELECTED_SCALE).abs() < 1e-9);
		assert_eq!(s.toggle_select("Music"), None);
	}

	#[test]
	fn test_marker_size_clamped() {
		let mut settings = ViewSettings::default();
		settings.size_scale = 3.0;
		let data = SelfMapData {
			entries: vec![Entry::new("big", Category::People, 1.0, 1.0)],
			associations: vec![],
		};
		let mut s = SelfMapState::new(Scene::build(&data, &settings), settings, 400.0, 400.0);
		s.toggle_select("big");
		let placed = s.scene.entries[0].clone();
		assert_eq!(s.marker_size(&placed), MAX_MARKER_SIZE);
	}

	#[test]
	fn test_selection_dropped_when_label_disappears() {
		let mut s = state();
		s.toggle_select("Music");
		let settings = s.settings;
		s.set_scene(Scene::build(&SelfMapData::default(), &settings), settings);
		assert_eq!(s.selected, None);
	}

	#[test]
	fn test_zoom_keeps_cursor_point() {
		let mut s = state();
		let before = s.screen_to_world(100.0, 50.0);
		s.zoom_at(100.0, 50.0, 1.1);
		let after = s.screen_to_world(100.0, 50.0);
		assert!((before.0 - after.0).abs() < 1e-9 && (before.1 - after.1).abs() < 1e-9);
	}
}
