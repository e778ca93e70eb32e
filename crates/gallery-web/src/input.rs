use gallery_core::{PointerSample, Viewport};
use glam::Vec2;

// ---------------- Pointer helpers ----------------

/// Pointer sample for a client-space position over an element whose bounding
/// box starts at `origin` and spans `size` (CSS px). `None` for a box with no
/// area.
#[inline]
pub fn pointer_sample(client: Vec2, origin: Vec2, size: Vec2) -> Option<PointerSample> {
    if !(size.x > 0.0 && size.y > 0.0) {
        return None;
    }
    let uv = (client - origin) / size;
    Some(PointerSample {
        ndc: Vec2::new(uv.x * 2.0 - 1.0, 1.0 - uv.y * 2.0),
        client,
    })
}

// ---------------- Canvas mapping ----------------

/// Canvas position (CSS px, y down, origin top-left) of a point in centered
/// screen space (y up).
#[inline]
pub fn world_to_css(world: Vec2, viewport: Viewport) -> Vec2 {
    Vec2::new(
        viewport.width * 0.5 + world.x,
        viewport.height * 0.5 - world.y,
    )
}

/// Engine viewport for an element's CSS box, if it has an area.
#[inline]
pub fn viewport_for(width: f64, height: f64) -> Option<Viewport> {
    let vp = Viewport::new(width as f32, height as f32);
    vp.is_usable().then_some(vp)
}

#[inline]
pub fn css_px(v: f32) -> String {
    format!("{}px", v.round())
}

#[inline]
pub fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        rgb[0],
        rgb[1],
        rgb[2],
        alpha.clamp(0.0, 1.0)
    )
}

// ---------------- Seeding ----------------

/// `seed=N` from a location query string such as `?seed=7&debug`.
pub fn seed_from_query(search: &str) -> Option<u64> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|kv| kv.split_once('='))
        .find(|(k, _)| *k == "seed")
        .and_then(|(_, v)| v.parse().ok())
}

/// Map a `Math.random()` draw in \[0, 1) onto a seed.
#[inline]
pub fn seed_from_unit(r: f64) -> u64 {
    (r.clamp(0.0, 1.0) * u32::MAX as f64) as u64
}
