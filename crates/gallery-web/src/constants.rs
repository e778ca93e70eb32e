// DOM hooks, asset locations and Canvas2D styling for the web front-end

// Required page elements
pub const CANVAS_ID: &str = "app-canvas";

// Optional page elements
pub const TOOLTIP_ID: &str = "tooltip";
pub const TOOLTIP_IMG_ID: &str = "tip-img";
pub const TOOLTIP_CAPTION_ID: &str = "tip-cap";
pub const HUB_VIDEO_ID: &str = "hub-video";

// Dataset locations, relative to the page
pub const COORDS_URL: &str = "./coords.csv";
pub const FILES_URL: &str = "./files.txt";

// Live controls (range inputs unless noted)
pub const CONTROL_NODE_INTENSITY: &str = "node-intensity";
pub const CONTROL_NODE_MIN_SIZE: &str = "node-min-size";
pub const CONTROL_NODE_MAX_SIZE: &str = "node-max-size";
pub const CONTROL_IMAGE_IMAGE: &str = "image-image-density";
pub const CONTROL_NODE_IMAGE: &str = "node-image-density";
pub const CONTROL_NODE_NODE: &str = "node-node-density";
pub const CONTROL_HUB_IMAGE: &str = "hub-image-density";
pub const CONTROL_HUB_NODE: &str = "hub-node-density";
pub const CONTROL_LINES_BEHIND: &str = "lines-behind"; // checkbox

// HTMLMediaElement.readyState once dimensions are known
pub const MEDIA_HAVE_METADATA: u16 = 1;

// Canvas2D styling
pub const BACKGROUND: &str = "#0b0d12";
pub const LINE_WIDTH: f64 = 1.0;
// Line color per link kind, in LinkKind::ALL order
pub const LINE_RGB: [[u8; 3]; 5] = [
    [170, 190, 255], // image-image
    [120, 200, 190], // node-image
    [110, 130, 170], // node-node
    [255, 200, 120], // hub-image
    [200, 160, 110], // hub-node
];
pub const NODE_FILL: &str = "rgba(140, 160, 220, 0.55)";
pub const PLACEHOLDER_FILL: &str = "#232835";
pub const PLACEHOLDER_TEXT: &str = "#9aa3b5";
pub const PLACEHOLDER_FONT: &str = "11px sans-serif";
pub const HOVER_OUTLINE: &str = "rgba(255, 255, 255, 0.9)";
pub const HOVER_OUTLINE_WIDTH: f64 = 2.0;
