//! The controller that owns every engine component.
//!
//! Hosts hold one [`EngineState`], feed it asset completions, viewport and
//! pointer events, call [`EngineState::frame`] once per display refresh and
//! then [`EngineState::submit`] to draw.

use crate::animation;
use crate::camera::OrthoCamera;
use crate::config::{ConfigSource, Debouncer, EngineConfig};
use crate::constants::{HUB_ANCHOR, SPRITE_SIZE};
use crate::dataset::{Dataset, DatasetRow};
use crate::error::GalleryError;
use crate::hover::{HoverPicker, HoverState, PointerSample, Tooltip};
use crate::lines::LineSync;
use crate::motion::{MotionGenerator, MotionTable};
use crate::projector::Projector;
use crate::registry::{AssetStatus, Category, ItemRegistry, VisualItem};
use crate::render::{LineStyle, Renderer};
use crate::topology::{LinkKind, Topology};
use crate::viewport::{self, Viewport};
use glam::Vec2;

pub struct EngineState {
    viewport: Viewport,
    camera: OrthoCamera,
    projector: Projector,
    registry: ItemRegistry,
    config: EngineConfig,
    topology: Topology,
    lines: LineSync,
    hover: HoverPicker,
    pointer: Option<PointerSample>,
    config_source: Option<Box<dyn ConfigSource>>,
    debounce: Debouncer,
    asset_errors: Vec<GalleryError>,
}

impl EngineState {
    pub fn new(viewport: Viewport, config: EngineConfig, seed: u64) -> Self {
        let (config, _) = config.sanitize();
        let registry = ItemRegistry::new(MotionGenerator::new(MotionTable::default(), seed));
        Self {
            viewport,
            camera: OrthoCamera::for_viewport(viewport),
            projector: Projector::default(),
            registry,
            lines: LineSync::new(config.lines_behind),
            config,
            topology: Topology::default(),
            hover: HoverPicker::default(),
            pointer: None,
            config_source: None,
            debounce: Debouncer::default(),
            asset_errors: Vec::new(),
        }
    }

    /// Engine whose projector is fitted to the whole dataset up front, so
    /// images keep their positions however their loads are ordered.
    pub fn with_dataset(
        viewport: Viewport,
        config: EngineConfig,
        dataset: &Dataset,
        seed: u64,
    ) -> Self {
        let mut engine = Self::new(viewport, config, seed);
        engine.projector = Projector::from_points(dataset.raw_points());
        engine
    }

    // ---------------- asset completions ----------------

    /// Incorporate a loaded image. Duplicate completions are ignored.
    pub fn image_loaded(&mut self, row: &DatasetRow) -> Option<usize> {
        self.incorporate_image(row, AssetStatus::Ready)
    }

    /// Incorporate an image whose load failed; it is drawn as a placeholder
    /// so the layout and topology stay the same.
    pub fn image_failed(&mut self, row: &DatasetRow, reason: &str) -> Option<usize> {
        let e = GalleryError::asset_load(&row.path, reason);
        log::warn!("[assets] {}", e);
        self.asset_errors.push(e);
        self.incorporate_image(row, AssetStatus::Placeholder)
    }

    /// Incorporate every row as loaded. Convenience for hosts without async
    /// asset loading.
    pub fn populate(&mut self, dataset: &Dataset) {
        for row in &dataset.rows {
            self.incorporate_image(row, AssetStatus::Ready);
        }
        self.rebuild();
    }

    fn incorporate_image(&mut self, row: &DatasetRow, status: AssetStatus) -> Option<usize> {
        if self.registry.contains_dataset_index(row.index) {
            log::debug!("[assets] row {} already incorporated", row.index);
            return None;
        }
        let base = self.projector.project(row.raw, self.viewport);
        let id = self
            .registry
            .create_image_item(row.path.clone(), row.index, status, row.raw, base);
        self.sync_nodes(false);
        Some(id)
    }

    pub fn set_video_hub(&mut self, source: &str) -> usize {
        self.install_hub(source, AssetStatus::Ready)
    }

    pub fn video_failed(&mut self, source: &str, reason: &str) -> usize {
        let e = GalleryError::asset_load(source, reason);
        log::warn!("[assets] {}", e);
        self.asset_errors.push(e);
        self.install_hub(source, AssetStatus::Placeholder)
    }

    fn install_hub(&mut self, source: &str, status: AssetStatus) -> usize {
        let fraction = Vec2::from(HUB_ANCHOR);
        let base = self.viewport.anchor(fraction);
        log::info!("[assets] video hub {:?} ({:?})", source, status);
        self.registry.set_video_hub(source, status, fraction, base)
    }

    pub fn remove_video_hub(&mut self) {
        self.registry.clear(Category::VideoHub);
    }

    // ---------------- decorative nodes ----------------

    /// Bring the node count in line with `node_intensity`. With `regenerate`
    /// every node is disposed and drawn anew; otherwise nodes are only
    /// appended or dropped from the end.
    fn sync_nodes(&mut self, regenerate: bool) {
        let target = self.config.node_count(self.registry.len(Category::Image));
        if regenerate {
            self.registry.clear(Category::Node);
        }
        let current = self.registry.len(Category::Node);
        if current > target {
            self.registry.truncate(Category::Node, target);
            return;
        }
        let half = self.viewport.half_extents();
        let ratio = self.config.node_min_size_ratio..self.config.node_max_size_ratio;
        for _ in current..target {
            let motion = self.registry.motion_mut();
            let base = Vec2::new(motion.uniform(-half.x..half.x), motion.uniform(-half.y..half.y));
            let size = SPRITE_SIZE * motion.uniform(ratio.clone());
            self.registry.create_node_item(base, size);
        }
    }

    // ---------------- viewport & pointer ----------------

    /// React to a viewport size change. Returns false when nothing changed.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if !viewport.is_usable() || viewport == self.viewport {
            return false;
        }
        log::info!(
            "[viewport] {}x{} -> {}x{}",
            self.viewport.width,
            self.viewport.height,
            viewport.width,
            viewport.height
        );
        self.viewport = viewport;
        self.camera = OrthoCamera::for_viewport(viewport);
        viewport::reflow(&mut self.registry, &self.projector, viewport);
        self.rebuild();
        true
    }

    pub fn pointer_moved(&mut self, sample: PointerSample) {
        self.pointer = Some(sample);
    }

    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }

    // ---------------- configuration ----------------

    pub fn attach_config_source(&mut self, source: Box<dyn ConfigSource>) {
        self.config_source = Some(source);
    }

    /// A live control changed at `now`; the edit is applied once the
    /// debounce period passes without further edits.
    pub fn notify_config_changed(&mut self, now: f64) {
        self.debounce.touch(now);
    }

    /// Sanitize and apply `requested`, rebuilding what depends on it.
    /// Returns the config actually in effect.
    pub fn apply_config(&mut self, requested: EngineConfig) -> EngineConfig {
        let (applied, _) = requested.sanitize();
        if applied == self.config {
            return applied;
        }
        let regenerate = applied.node_params_differ(&self.config);
        self.config = applied.clone();
        if regenerate {
            self.sync_nodes(true);
        }
        self.rebuild();
        log::info!(
            "[config] applied: nodes={} lines_behind={}",
            self.registry.len(Category::Node),
            self.config.lines_behind
        );
        applied
    }

    fn apply_pending_config(&mut self, now: f64) {
        if !self.debounce.take_due(now) {
            return;
        }
        let Some(requested) = self.config_source.as_ref().map(|s| s.read()) else {
            return;
        };
        let applied = self.apply_config(requested.clone());
        if applied != requested {
            if let Some(source) = self.config_source.as_mut() {
                source.reflect(&applied);
            }
        }
    }

    // ---------------- per frame ----------------

    /// Full topology + line rebuild from current base positions.
    pub fn rebuild(&mut self) {
        self.topology = Topology::build(&self.registry, &self.config);
        self.lines
            .rebuild(&self.topology, &self.registry, self.config.lines_behind);
    }

    /// Advance to time `t` (seconds, monotonic). Positions are updated for
    /// every item before lines read them, and lines before hit-testing.
    pub fn frame(&mut self, t: f64) -> HoverState {
        self.apply_pending_config(t);
        if self.topology.is_stale(&self.registry) {
            self.rebuild();
        }
        animation::step(&mut self.registry, t);
        self.lines.update(&self.topology, &self.registry);
        self.hover
            .update(&mut self.registry, &self.camera, self.pointer)
    }

    /// Draw the current scene back to front.
    pub fn submit<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.begin_frame(&self.viewport);
        let behind = self.config.lines_behind;
        if behind {
            self.submit_lines(renderer, behind);
        }
        for item in self.registry.items(Category::Node) {
            renderer.draw_item(item);
        }
        let images = self.registry.items(Category::Image);
        for item in images.iter().filter(|it| !it.hovered) {
            renderer.draw_item(item);
        }
        for item in images.iter().filter(|it| it.hovered) {
            renderer.draw_item(item);
        }
        for item in self.registry.items(Category::VideoHub) {
            renderer.draw_item(item);
        }
        if !behind {
            self.submit_lines(renderer, behind);
        }
        renderer.end_frame();
    }

    fn submit_lines<R: Renderer + ?Sized>(&self, renderer: &mut R, behind: bool) {
        for kind in LinkKind::ALL {
            let buffer = self.lines.buffer(kind);
            if buffer.link_count() == 0 {
                continue;
            }
            let style = LineStyle {
                opacity: self.config.line_opacity(kind),
                behind,
            };
            renderer.draw_lines(kind, buffer, style);
        }
    }

    // ---------------- accessors ----------------

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn camera(&self) -> &OrthoCamera {
        &self.camera
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn lines(&self) -> &LineSync {
        &self.lines
    }

    pub fn hover_state(&self) -> HoverState {
        self.hover.state()
    }

    pub fn tooltip(&self) -> &Tooltip {
        self.hover.tooltip()
    }

    pub fn hovered_item(&self) -> Option<&VisualItem> {
        match self.hover.state() {
            HoverState::Hovering(id) => self.registry.get(Category::Image, id),
            HoverState::Idle => None,
        }
    }

    pub fn asset_errors(&self) -> &[GalleryError] {
        &self.asset_errors
    }
}
