use crate::constants::{HOVER_BOOST, NODE_SCALE_SMOOTHING};
use crate::motion::MotionProfile;
use crate::registry::{Category, ItemRegistry};
use glam::Vec2;
use instant::Instant;

/// Drifted position at time `t`. Pure in `(t, profile, base)`.
#[inline]
pub fn drift(profile: &MotionProfile, base: Vec2, t: f64) -> Vec2 {
    let amp = profile.amplitude as f64;
    let dx = oscillate(t, profile.speed_x, profile.phase).sin() * amp;
    let dy = oscillate(t, profile.speed_y, profile.phase).cos() * amp;
    base + Vec2::new(dx as f32, dy as f32)
}

// evaluated in f64: t may be far from zero
#[inline]
fn oscillate(t: f64, speed: f32, phase: f32) -> f64 {
    t * speed as f64 + phase as f64
}

/// Breathing scale factor at time `t`.
#[inline]
pub fn breathe(profile: &MotionProfile, t: f64) -> f32 {
    let wave = oscillate(t, profile.scale_frequency, profile.scale_phase).sin();
    profile.scale_base + wave as f32 * profile.scale_amplitude
}

#[inline]
pub fn rendered_scale(reference_size: f32, factor: f32, hovered: bool) -> f32 {
    reference_size * factor * if hovered { HOVER_BOOST } else { 1.0 }
}

/// Move every item to its pose at `t`.
///
/// Images and the hub snap to the target scale. Decorative nodes low-pass
/// their scale toward the target, which is the only state carried between
/// frames.
pub fn step(registry: &mut ItemRegistry, t: f64) {
    for item in registry.all_mut() {
        let p = drift(&item.motion, item.base, t);
        item.current = p.extend(item.category.layer_z());
        let target = rendered_scale(item.size_base, breathe(&item.motion, t), item.hovered);
        item.scale = match item.category {
            Category::Node => {
                let s = match item.smoothed_scale {
                    Some(prev) => prev + (target - prev) * NODE_SCALE_SMOOTHING,
                    None => target,
                };
                item.smoothed_scale = Some(s);
                s
            }
            Category::Image | Category::VideoHub => target,
        };
    }
}

/// Monotonic seconds since the clock was created.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    epoch: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    pub fn seconds(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }
}
