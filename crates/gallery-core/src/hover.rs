use crate::camera::OrthoCamera;
use crate::constants::TOOLTIP_OFFSET;
use crate::registry::{Category, ItemRegistry, VisualItem};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering(usize),
}

/// One pointer position: normalized device coordinates for picking and raw
/// client coordinates for tooltip placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub ndc: Vec2,
    pub client: Vec2,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    pub visible: bool,
    /// Client-space position of the tooltip's top-left corner.
    pub position: Vec2,
    pub image_src: Option<String>,
    pub caption: String,
    /// Set on the frame `image_src` changed; hosts reload the preview only then.
    pub src_changed: bool,
}

/// Final path segment after the last `/` or `\`.
pub fn label_for(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path)
}

#[inline]
fn covers(item: &VisualItem, world: Vec2) -> bool {
    let d = (world - item.current.truncate()).abs();
    let half = item.scale * 0.5;
    d.x <= half && d.y <= half
}

/// Image under `world`, if any. Highest z wins, then the nearest center, then
/// the lower id.
pub fn hit_test(images: &[VisualItem], world: Vec2) -> Option<usize> {
    let mut best: Option<(f32, f32, usize)> = None;
    for item in images {
        if !covers(item, world) {
            continue;
        }
        let center = item.current.truncate();
        let z = item.current.z;
        let dist = world.distance_squared(center);
        let better = match best {
            None => true,
            Some((bz, bd, _)) => z > bz || (z == bz && dist < bd),
        };
        if better {
            best = Some((z, dist, item.id));
        }
    }
    best.map(|(_, _, id)| id)
}

/// Single-item hover state machine over the image category.
#[derive(Clone, Debug, Default)]
pub struct HoverPicker {
    state: HoverState,
    tooltip: Tooltip,
}

impl HoverPicker {
    #[inline]
    pub fn state(&self) -> HoverState {
        self.state
    }

    #[inline]
    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Hit-test `pointer` against current image bounds and hand the hovered
    /// flag over. The previous item is cleared before the new one is set.
    /// The hub is drawn over every image, so a pointer inside its square
    /// hovers nothing.
    pub fn update(
        &mut self,
        registry: &mut ItemRegistry,
        camera: &OrthoCamera,
        pointer: Option<PointerSample>,
    ) -> HoverState {
        let hit = pointer.and_then(|p| {
            let world = camera.ndc_to_world(p.ndc);
            if registry.hub().is_some_and(|hub| covers(hub, world)) {
                return None;
            }
            hit_test(registry.items(Category::Image), world)
        });

        if let HoverState::Hovering(prev) = self.state {
            if Some(prev) != hit {
                if let Some(item) = registry.get_mut(Category::Image, prev) {
                    item.hovered = false;
                }
            }
        }

        self.tooltip.src_changed = false;
        match (hit, pointer) {
            (Some(id), Some(p)) => {
                let Some(item) = registry.get_mut(Category::Image, id) else {
                    self.state = HoverState::Idle;
                    self.tooltip.visible = false;
                    return self.state;
                };
                item.hovered = true;
                if self.state != HoverState::Hovering(id) {
                    log::debug!("[hover] image {}", id);
                }
                self.state = HoverState::Hovering(id);
                self.tooltip.visible = true;
                self.tooltip.position = p.client + Vec2::from(TOOLTIP_OFFSET);
                if let Some(path) = item.path() {
                    if self.tooltip.image_src.as_deref() != Some(path) {
                        self.tooltip.image_src = Some(path.to_owned());
                        self.tooltip.src_changed = true;
                    }
                    self.tooltip.caption = label_for(path).to_owned();
                }
            }
            _ => {
                self.state = HoverState::Idle;
                self.tooltip.visible = false;
            }
        }
        self.state
    }
}
