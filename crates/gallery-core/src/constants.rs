// Shared layout/animation tuning constants used by the engine and the web frontend.

// Projection
pub const PROJECTION_EPSILON: f32 = 1e-6; // guards zero-spread axes

// Visual sizing (screen px)
pub const SPRITE_SIZE: f32 = 110.0; // reference size of an image thumbnail
pub const HUB_SIZE: f32 = 240.0; // reference size of the video hub
pub const HOVER_BOOST: f32 = 1.18; // scale multiplier for the hovered image

// Layering (z, larger is closer to the camera)
pub const LINE_Z_BEHIND: f32 = -2.0;
pub const LINE_Z_FRONT: f32 = 2.0;
pub const LINE_Z_STEP: f32 = 0.01; // per-kind offset so line kinds never share a depth
pub const NODE_Z: f32 = -1.0;
pub const IMAGE_Z: f32 = 0.0;
pub const HUB_Z: f32 = 0.5;

// Decorative node scale low-pass (fraction of the gap closed per frame)
pub const NODE_SCALE_SMOOTHING: f32 = 0.08;

// Density -> neighbor count mapping
pub const MIN_NEIGHBORS: usize = 1;
pub const MAX_NEIGHBORS: usize = 5;

// Configuration bounds
pub const NODE_INTENSITY_MAX: f32 = 8.0;
pub const NODE_SIZE_RATIO_FLOOR: f32 = 0.02;
pub const NODE_SIZE_RATIO_CEIL: f32 = 1.0;
pub const NODE_SIZE_RATIO_GAP: f32 = 0.01; // enforced min <= max - gap

// Debounce for live configuration edits (seconds)
pub const CONFIG_DEBOUNCE_SEC: f64 = 0.12;

// Tooltip placement relative to the pointer (client px)
pub const TOOLTIP_OFFSET: [f32; 2] = [12.0, 12.0];

// Hub anchor as a fraction of the viewport (0,0 is the center)
pub const HUB_ANCHOR: [f32; 2] = [0.0, 0.0];

