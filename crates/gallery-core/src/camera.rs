//! Orthographic camera over centered screen space.
//!
//! World units are screen pixels: the camera spans `[-w/2, w/2] x [-h/2, h/2]`
//! and looks down -Z, so larger z is closer to the viewer.

use crate::viewport::Viewport;
use glam::{Mat4, Vec2, Vec3, Vec4};

pub const CAMERA_Z: f32 = 10.0;
pub const CAMERA_NEAR: f32 = -1000.0;
pub const CAMERA_FAR: f32 = 1000.0;

#[derive(Clone, Debug)]
pub struct OrthoCamera {
    pub half_width: f32,
    pub half_height: f32,
    pub eye_z: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl OrthoCamera {
    pub fn for_viewport(viewport: Viewport) -> Self {
        let h = viewport.half_extents();
        Self {
            half_width: h.x,
            half_height: h.y,
            eye_z: CAMERA_Z,
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(
            -self.half_width,
            self.half_width,
            -self.half_height,
            self.half_height,
            self.znear,
            self.zfar,
        )
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(Vec3::new(0.0, 0.0, self.eye_z), Vec3::ZERO, Vec3::Y)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space point under normalized device coordinates `ndc` in \[-1, 1\]².
    pub fn ndc_to_world(&self, ndc: Vec2) -> Vec2 {
        let inv = self.view_proj().inverse();
        let p = inv * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        p.truncate().truncate() / p.w
    }

    /// Normalized device coordinates of a world-space point.
    pub fn world_to_ndc(&self, world: Vec3) -> Vec2 {
        let p = self.view_proj() * world.extend(1.0);
        p.truncate().truncate() / p.w
    }
}
