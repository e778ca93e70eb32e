// Host-side tests for time-driven item animation.

use gallery_core::animation::{breathe, drift, rendered_scale, step};
use gallery_core::motion::{MotionGenerator, MotionTable};
use gallery_core::{
    AssetStatus, Category, ItemRegistry, MotionProfile, HOVER_BOOST, NODE_SCALE_SMOOTHING,
    SPRITE_SIZE,
};
use glam::Vec2;
use std::f64::consts::FRAC_PI_2;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn profile() -> MotionProfile {
    MotionProfile {
        amplitude: 10.0,
        speed_x: 1.0,
        speed_y: 0.0,
        phase: 0.0,
        scale_base: 1.0,
        scale_amplitude: 0.2,
        scale_frequency: 1.0,
        scale_phase: 0.0,
    }
}

#[test]
fn drift_is_a_pure_function_of_time() {
    let p = profile();
    let base = Vec2::new(3.0, -7.0);
    for t in [0.0, 0.5, 17.25, 1234.0] {
        assert_eq!(drift(&p, base, t), drift(&p, base, t));
    }
    let at = drift(&p, base, FRAC_PI_2);
    assert!(approx(at.x, 13.0));
    assert!(approx(at.y, 3.0));
}

#[test]
fn still_profile_stays_on_base() {
    let base = Vec2::new(12.0, 5.0);
    for t in [0.0, 1.0, 99.0] {
        assert_eq!(drift(&MotionProfile::STILL, base, t), base);
        assert_eq!(breathe(&MotionProfile::STILL, t), 1.0);
    }
}

#[test]
fn breathing_stays_within_amplitude() {
    let p = profile();
    for i in 0..500 {
        let s = breathe(&p, i as f64 * 0.037);
        assert!((0.8 - 1e-4..=1.2 + 1e-4).contains(&s));
    }
}

#[test]
fn far_epochs_stay_finite() {
    let p = profile();
    let at = drift(&p, Vec2::ZERO, 1.0e9);
    assert!(at.is_finite());
    assert!(at.length() <= 10.0 * 2f32.sqrt() + 1e-3);
}

#[test]
fn hover_boost_applies_once() {
    assert_eq!(rendered_scale(100.0, 1.0, false), 100.0);
    assert!(approx(rendered_scale(100.0, 1.0, true), 100.0 * HOVER_BOOST));
}

#[test]
fn images_snap_and_nodes_smooth() {
    let mut reg = ItemRegistry::new(MotionGenerator::new(MotionTable::default(), 9));
    reg.create_image_item("a.jpg", 0, AssetStatus::Ready, Vec2::ZERO, Vec2::new(10.0, 0.0));
    reg.create_node_item(Vec2::new(-10.0, 0.0), 20.0);
    let p = profile();
    for item in reg.all_mut() {
        item.motion = p;
    }

    step(&mut reg, 0.0);
    let node0 = reg.items(Category::Node)[0].scale;
    assert!(approx(node0, 20.0 * breathe(&p, 0.0)), "first frame snaps");

    let t = FRAC_PI_2;
    step(&mut reg, t);
    let image = &reg.items(Category::Image)[0];
    assert!(approx(image.scale, SPRITE_SIZE * breathe(&p, t)));
    assert_eq!(image.current.z, Category::Image.layer_z());

    let target = 20.0 * breathe(&p, t);
    let node = &reg.items(Category::Node)[0];
    assert!(approx(node.scale, node0 + (target - node0) * NODE_SCALE_SMOOTHING));
    assert_eq!(node.current.z, Category::Node.layer_z());
}

#[test]
fn same_seed_same_trajectories() {
    let build = || {
        let mut reg = ItemRegistry::new(MotionGenerator::new(MotionTable::default(), 21));
        for i in 0..8 {
            let p = Vec2::new(i as f32 * 12.0, 0.0);
            reg.create_image_item(format!("{i}.jpg"), i, AssetStatus::Ready, p, p);
        }
        reg
    };
    let mut a = build();
    let mut b = build();
    for frame in 0..30 {
        let t = frame as f64 / 60.0;
        step(&mut a, t);
        step(&mut b, t);
    }
    for (x, y) in a.all().zip(b.all()) {
        assert_eq!(x.current, y.current);
        assert_eq!(x.scale, y.scale);
    }
}
