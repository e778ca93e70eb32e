// Host-side tests for constants and their relationships.

use gallery_core::camera::{CAMERA_FAR, CAMERA_NEAR};
use gallery_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn sizes_and_factors_are_positive() {
    assert!(SPRITE_SIZE > 0.0);
    assert!(HUB_SIZE > SPRITE_SIZE);
    assert!(HOVER_BOOST > 1.0);
    assert!(PROJECTION_EPSILON > 0.0);
    assert!(CONFIG_DEBOUNCE_SEC > 0.0);

    // Smoothing is a fraction of the gap closed per frame
    assert!(NODE_SCALE_SMOOTHING > 0.0 && NODE_SCALE_SMOOTHING <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layers_are_ordered_back_to_front() {
    let last_kind_offset = LINE_Z_STEP * 4.0;
    assert!(LINE_Z_BEHIND + last_kind_offset < NODE_Z);
    assert!(NODE_Z < IMAGE_Z);
    assert!(IMAGE_Z < HUB_Z);
    assert!(HUB_Z < LINE_Z_FRONT);

    // Every layer must sit inside the camera's depth range
    assert!(CAMERA_NEAR < LINE_Z_BEHIND);
    assert!(LINE_Z_FRONT + last_kind_offset < CAMERA_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn configuration_bounds_are_consistent() {
    assert!(MIN_NEIGHBORS >= 1);
    assert!(MAX_NEIGHBORS > MIN_NEIGHBORS);
    assert!(NODE_INTENSITY_MAX > 0.0);
    assert!(NODE_SIZE_RATIO_FLOOR > 0.0);
    assert!(NODE_SIZE_RATIO_CEIL - NODE_SIZE_RATIO_GAP > NODE_SIZE_RATIO_FLOOR);
}
