//! Engine tunables and the path by which live edits reach the engine.
//!
//! Edits never touch a running computation directly: a control notifies the
//! engine, the [`Debouncer`] waits for a quiet period, and only then does the
//! engine read the whole config from its [`ConfigSource`], sanitize it, and
//! rebuild what depends on it.

use crate::constants::{
    CONFIG_DEBOUNCE_SEC, NODE_INTENSITY_MAX, NODE_SIZE_RATIO_CEIL, NODE_SIZE_RATIO_FLOOR,
    NODE_SIZE_RATIO_GAP,
};
use crate::error::GalleryError;
use crate::topology::LinkKind;

#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Decorative node count as a multiple of the image count.
    pub node_intensity: f32,
    /// Node size bounds relative to the image sprite size.
    pub node_min_size_ratio: f32,
    pub node_max_size_ratio: f32,
    pub image_image_intensity: f32,
    pub node_image_intensity: f32,
    pub node_node_intensity: f32,
    pub hub_image_intensity: f32,
    pub hub_node_intensity: f32,
    /// Line opacity per [`LinkKind`], indexed by `LinkKind::slot`.
    pub line_opacity: [f32; 5],
    pub lines_behind: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            node_intensity: 1.0,
            node_min_size_ratio: 0.10,
            node_max_size_ratio: 0.28,
            image_image_intensity: 0.4,
            node_image_intensity: 0.2,
            node_node_intensity: 0.2,
            hub_image_intensity: 0.6,
            hub_node_intensity: 0.3,
            line_opacity: [0.35, 0.18, 0.12, 0.45, 0.25],
            lines_behind: true,
        }
    }
}

impl EngineConfig {
    pub fn intensity(&self, kind: LinkKind) -> f32 {
        match kind {
            LinkKind::ImageImage => self.image_image_intensity,
            LinkKind::NodeImage => self.node_image_intensity,
            LinkKind::NodeNode => self.node_node_intensity,
            LinkKind::HubImage => self.hub_image_intensity,
            LinkKind::HubNode => self.hub_node_intensity,
        }
    }

    pub fn set_intensity(&mut self, kind: LinkKind, value: f32) {
        let slot = match kind {
            LinkKind::ImageImage => &mut self.image_image_intensity,
            LinkKind::NodeImage => &mut self.node_image_intensity,
            LinkKind::NodeNode => &mut self.node_node_intensity,
            LinkKind::HubImage => &mut self.hub_image_intensity,
            LinkKind::HubNode => &mut self.hub_node_intensity,
        };
        *slot = value;
    }

    #[inline]
    pub fn line_opacity(&self, kind: LinkKind) -> f32 {
        self.line_opacity[kind.slot()]
    }

    /// Number of decorative nodes wanted for `image_count` images.
    pub fn node_count(&self, image_count: usize) -> usize {
        (self.node_intensity.max(0.0) * image_count as f32).round() as usize
    }

    /// True when node count or node sizing differs, i.e. nodes must be regenerated.
    pub fn node_params_differ(&self, other: &EngineConfig) -> bool {
        self.node_intensity != other.node_intensity
            || self.node_min_size_ratio != other.node_min_size_ratio
            || self.node_max_size_ratio != other.node_max_size_ratio
    }

    /// Clamp every field into range and reorder the node size bounds so
    /// `min <= max - gap`. Returns the corrected config and one error per
    /// field that had to change.
    pub fn sanitize(&self) -> (EngineConfig, Vec<GalleryError>) {
        let mut out = self.clone();
        let mut errors = Vec::new();

        clamp_field(
            "node_intensity",
            &mut out.node_intensity,
            0.0,
            NODE_INTENSITY_MAX,
            &mut errors,
        );
        for kind in LinkKind::ALL {
            let mut v = out.intensity(kind);
            clamp_field(intensity_name(kind), &mut v, 0.0, 1.0, &mut errors);
            out.set_intensity(kind, v);
            clamp_field(
                "line_opacity",
                &mut out.line_opacity[kind.slot()],
                0.0,
                1.0,
                &mut errors,
            );
        }

        clamp_field(
            "node_min_size_ratio",
            &mut out.node_min_size_ratio,
            NODE_SIZE_RATIO_FLOOR,
            NODE_SIZE_RATIO_CEIL,
            &mut errors,
        );
        clamp_field(
            "node_max_size_ratio",
            &mut out.node_max_size_ratio,
            NODE_SIZE_RATIO_FLOOR,
            NODE_SIZE_RATIO_CEIL,
            &mut errors,
        );
        if out.node_min_size_ratio > out.node_max_size_ratio - NODE_SIZE_RATIO_GAP {
            errors.push(GalleryError::ConfigOutOfRange {
                field: "node_min_size_ratio",
                value: out.node_min_size_ratio,
            });
            if out.node_min_size_ratio > out.node_max_size_ratio {
                std::mem::swap(&mut out.node_min_size_ratio, &mut out.node_max_size_ratio);
            }
            if out.node_min_size_ratio > out.node_max_size_ratio - NODE_SIZE_RATIO_GAP {
                if out.node_min_size_ratio + NODE_SIZE_RATIO_GAP <= NODE_SIZE_RATIO_CEIL {
                    out.node_max_size_ratio = out.node_min_size_ratio + NODE_SIZE_RATIO_GAP;
                } else {
                    out.node_max_size_ratio = NODE_SIZE_RATIO_CEIL;
                    out.node_min_size_ratio = NODE_SIZE_RATIO_CEIL - NODE_SIZE_RATIO_GAP;
                }
            }
        }

        for e in &errors {
            log::warn!("[config] {}", e);
        }
        (out, errors)
    }
}

fn intensity_name(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::ImageImage => "image_image_intensity",
        LinkKind::NodeImage => "node_image_intensity",
        LinkKind::NodeNode => "node_node_intensity",
        LinkKind::HubImage => "hub_image_intensity",
        LinkKind::HubNode => "hub_node_intensity",
    }
}

fn clamp_field(
    field: &'static str,
    value: &mut f32,
    lo: f32,
    hi: f32,
    errors: &mut Vec<GalleryError>,
) {
    let fixed = if value.is_finite() {
        value.clamp(lo, hi)
    } else {
        lo
    };
    if fixed != *value {
        errors.push(GalleryError::ConfigOutOfRange {
            field,
            value: *value,
        });
        *value = fixed;
    }
}

/// Live controls (sliders, checkboxes) the engine may pull values from.
pub trait ConfigSource {
    /// Current value of every control.
    fn read(&self) -> EngineConfig;
    /// Push a corrected config back so the controls show what is in effect.
    fn reflect(&mut self, applied: &EngineConfig);
}

/// Collapses a burst of edits into one apply after a quiet period.
#[derive(Clone, Debug)]
pub struct Debouncer {
    quiet_sec: f64,
    last_touch: Option<f64>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(CONFIG_DEBOUNCE_SEC)
    }
}

impl Debouncer {
    pub fn new(quiet_sec: f64) -> Self {
        Self {
            quiet_sec,
            last_touch: None,
        }
    }

    /// Record an edit at `now` (seconds on the frame clock).
    pub fn touch(&mut self, now: f64) {
        self.last_touch = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.last_touch.is_some()
    }

    /// True once per burst, when the quiet period after the last edit elapsed.
    pub fn take_due(&mut self, now: f64) -> bool {
        match self.last_touch {
            Some(t) if now - t >= self.quiet_sec => {
                self.last_touch = None;
                true
            }
            _ => false,
        }
    }
}
