use crate::projector::Projector;
use crate::registry::{ItemRegistry, Placement};
use glam::Vec2;

/// Viewport size in screen pixels. Screen space is centered on the viewport
/// with y pointing up, so it spans `[-w/2, w/2] x [-h/2, h/2]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size() * 0.5
    }

    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Clamp a screen-space point into the visible rectangle.
    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        let h = self.half_extents();
        p.clamp(-h, h)
    }

    /// Screen position of a viewport fraction (0,0 is the center).
    #[inline]
    pub fn anchor(&self, fraction: Vec2) -> Vec2 {
        fraction * self.size()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Re-base every item for `viewport`: images are re-projected from their raw
/// coordinates, the hub follows its anchor fraction, decorative nodes are
/// clamped into the new bounds.
pub fn reflow(registry: &mut ItemRegistry, projector: &Projector, viewport: Viewport) {
    for item in registry.all_mut() {
        item.base = match item.placement {
            Placement::Projected { raw } => projector.project(raw, viewport),
            Placement::Anchored { fraction } => viewport.anchor(fraction),
            Placement::Free => viewport.clamp(item.base),
        };
    }
    registry.touch();
}
