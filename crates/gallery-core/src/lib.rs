pub mod animation;
pub mod camera;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod hover;
pub mod lines;
pub mod motion;
pub mod projector;
pub mod registry;
pub mod render;
pub mod topology;
pub mod viewport;

pub use animation::FrameClock;
pub use camera::OrthoCamera;
pub use config::{ConfigSource, Debouncer, EngineConfig};
pub use constants::*;
pub use dataset::{Dataset, DatasetRow};
pub use engine::EngineState;
pub use error::{GalleryError, GalleryResult};
pub use hover::{HoverState, PointerSample, Tooltip};
pub use lines::{LineBuffer, LineSync};
pub use motion::{MotionProfile, MotionTable};
pub use projector::Projector;
pub use registry::{AssetStatus, Category, ItemRegistry, Payload, Placement, VisualItem};
pub use render::{LineStyle, Renderer};
pub use topology::{LinkKind, LinkSet, Topology};
pub use viewport::Viewport;
