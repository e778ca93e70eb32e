//! Authoritative set of visual items, grouped by category.
//!
//! Items keep insertion order inside their category; an item's `id` is its
//! index in that sequence. Any structural change bumps `structure_version`,
//! which is how dependent topology notices it has gone stale.

use crate::constants::{HUB_SIZE, HUB_Z, IMAGE_Z, NODE_Z, SPRITE_SIZE};
use crate::motion::{MotionGenerator, MotionProfile};
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Image,
    Node,
    VideoHub,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Image, Category::Node, Category::VideoHub];

    #[inline]
    fn slot(self) -> usize {
        match self {
            Category::Image => 0,
            Category::Node => 1,
            Category::VideoHub => 2,
        }
    }

    /// Fixed layer depth of items in this category.
    #[inline]
    pub fn layer_z(self) -> f32 {
        match self {
            Category::Image => IMAGE_Z,
            Category::Node => NODE_Z,
            Category::VideoHub => HUB_Z,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetStatus {
    Ready,
    /// Load failed; renderers draw a labeled box instead.
    Placeholder,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Image {
        path: String,
        dataset_index: usize,
        status: AssetStatus,
    },
    None,
    Video {
        source: String,
        status: AssetStatus,
    },
}

/// How an item's base position follows the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// Re-projected from raw dataset coordinates.
    Projected { raw: Vec2 },
    /// Fixed fraction of the viewport, (0,0) at the center.
    Anchored { fraction: Vec2 },
    /// Random base, clamped into the visible rectangle on resize.
    Free,
}

#[derive(Clone, Debug)]
pub struct VisualItem {
    pub id: usize,
    pub category: Category,
    pub placement: Placement,
    pub base: Vec2,
    pub current: Vec3,
    /// Rendered edge length in screen px.
    pub scale: f32,
    pub motion: MotionProfile,
    pub size_base: f32,
    pub hovered: bool,
    pub payload: Payload,
    pub(crate) smoothed_scale: Option<f32>,
}

impl VisualItem {
    pub fn path(&self) -> Option<&str> {
        match &self.payload {
            Payload::Image { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn dataset_index(&self) -> Option<usize> {
        match &self.payload {
            Payload::Image { dataset_index, .. } => Some(*dataset_index),
            _ => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(
            &self.payload,
            Payload::Image {
                status: AssetStatus::Placeholder,
                ..
            } | Payload::Video {
                status: AssetStatus::Placeholder,
                ..
            }
        )
    }
}

pub struct ItemRegistry {
    items: [Vec<VisualItem>; 3],
    motion: MotionGenerator,
    structure_version: u64,
}

impl ItemRegistry {
    pub fn new(motion: MotionGenerator) -> Self {
        Self {
            items: [Vec::new(), Vec::new(), Vec::new()],
            motion,
            structure_version: 0,
        }
    }

    pub fn create_image_item(
        &mut self,
        path: impl Into<String>,
        dataset_index: usize,
        status: AssetStatus,
        raw: Vec2,
        base: Vec2,
    ) -> usize {
        let payload = Payload::Image {
            path: path.into(),
            dataset_index,
            status,
        };
        self.push(
            Category::Image,
            Placement::Projected { raw },
            base,
            SPRITE_SIZE,
            payload,
        )
    }

    pub fn create_node_item(&mut self, base: Vec2, size_base: f32) -> usize {
        self.push(Category::Node, Placement::Free, base, size_base, Payload::None)
    }

    /// Install the hub, replacing any existing one.
    pub fn set_video_hub(
        &mut self,
        source: impl Into<String>,
        status: AssetStatus,
        fraction: Vec2,
        base: Vec2,
    ) -> usize {
        self.items[Category::VideoHub.slot()].clear();
        let payload = Payload::Video {
            source: source.into(),
            status,
        };
        self.push(
            Category::VideoHub,
            Placement::Anchored { fraction },
            base,
            HUB_SIZE,
            payload,
        )
    }

    fn push(
        &mut self,
        category: Category,
        placement: Placement,
        base: Vec2,
        size_base: f32,
        payload: Payload,
    ) -> usize {
        let motion = self.motion.profile(category);
        let list = &mut self.items[category.slot()];
        let id = list.len();
        list.push(VisualItem {
            id,
            category,
            placement,
            base,
            current: base.extend(category.layer_z()),
            scale: size_base * motion.scale_base,
            motion,
            size_base,
            hovered: false,
            payload,
            smoothed_scale: None,
        });
        self.structure_version += 1;
        id
    }

    #[inline]
    pub fn items(&self, category: Category) -> &[VisualItem] {
        &self.items[category.slot()]
    }

    #[inline]
    pub fn items_mut(&mut self, category: Category) -> &mut [VisualItem] {
        &mut self.items[category.slot()]
    }

    pub fn all(&self) -> impl Iterator<Item = &VisualItem> {
        self.items.iter().flatten()
    }

    pub fn all_mut(&mut self) -> impl Iterator<Item = &mut VisualItem> {
        self.items.iter_mut().flatten()
    }

    pub fn get(&self, category: Category, id: usize) -> Option<&VisualItem> {
        self.items[category.slot()].get(id)
    }

    pub fn get_mut(&mut self, category: Category, id: usize) -> Option<&mut VisualItem> {
        self.items[category.slot()].get_mut(id)
    }

    #[inline]
    pub fn len(&self, category: Category) -> usize {
        self.items[category.slot()].len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.iter().all(Vec::is_empty)
    }

    pub fn hub(&self) -> Option<&VisualItem> {
        self.items[Category::VideoHub.slot()].first()
    }

    pub fn contains_dataset_index(&self, index: usize) -> bool {
        self.items(Category::Image)
            .iter()
            .any(|it| it.dataset_index() == Some(index))
    }

    /// Dispose every item of `category`.
    pub fn clear(&mut self, category: Category) {
        let list = &mut self.items[category.slot()];
        if !list.is_empty() {
            list.clear();
            self.structure_version += 1;
        }
    }

    /// Drop items past `len` in `category`, keeping the rest untouched.
    pub fn truncate(&mut self, category: Category, len: usize) {
        let list = &mut self.items[category.slot()];
        if list.len() > len {
            list.truncate(len);
            self.structure_version += 1;
        }
    }

    /// Mark a structural change that happened outside the registry, such as
    /// base positions moving on resize.
    pub fn touch(&mut self) {
        self.structure_version += 1;
    }

    #[inline]
    pub fn structure_version(&self) -> u64 {
        self.structure_version
    }

    pub fn motion_mut(&mut self) -> &mut MotionGenerator {
        &mut self.motion
    }
}
