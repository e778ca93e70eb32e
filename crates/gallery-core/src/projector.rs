use crate::constants::PROJECTION_EPSILON;
use crate::viewport::Viewport;
use glam::Vec2;

/// Maps raw dataset coordinates into centered screen space.
///
/// The bounds are scanned once; a resize only changes the extent the
/// normalized fraction is multiplied by.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Projector {
    pub min: Vec2,
    pub max: Vec2,
}

impl Projector {
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Self {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Self::default();
        };
        let (min, max) = iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Self { min, max }
    }

    /// Position within the bounds in \[0, 1\] per axis.
    #[inline]
    pub fn normalize(&self, raw: Vec2) -> Vec2 {
        let span = (self.max - self.min).max(Vec2::splat(PROJECTION_EPSILON));
        (raw - self.min) / span
    }

    #[inline]
    pub fn project(&self, raw: Vec2, viewport: Viewport) -> Vec2 {
        (self.normalize(raw) - Vec2::splat(0.5)) * viewport.size()
    }
}
