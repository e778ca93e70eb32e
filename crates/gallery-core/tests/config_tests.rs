// Host-side tests for configuration sanitizing and edit debouncing.

use gallery_core::{
    Debouncer, EngineConfig, GalleryError, LinkKind, NODE_INTENSITY_MAX, NODE_SIZE_RATIO_CEIL,
    NODE_SIZE_RATIO_FLOOR, NODE_SIZE_RATIO_GAP,
};
use rand::prelude::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn defaults_are_already_sane() {
    let config = EngineConfig::default();
    let (out, errors) = config.sanitize();
    assert!(errors.is_empty());
    assert_eq!(out, config);
}

#[test]
fn out_of_range_values_are_clamped_and_reported() {
    let mut config = EngineConfig {
        node_intensity: 12.0,
        image_image_intensity: 1.5,
        hub_node_intensity: f32::NAN,
        ..EngineConfig::default()
    };
    config.line_opacity[2] = -0.5;
    let (out, errors) = config.sanitize();
    assert_eq!(out.node_intensity, NODE_INTENSITY_MAX);
    assert_eq!(out.image_image_intensity, 1.0);
    assert_eq!(out.hub_node_intensity, 0.0);
    assert_eq!(out.line_opacity(LinkKind::NodeNode), 0.0);
    assert_eq!(errors.len(), 4);
    assert!(errors.iter().any(|e| matches!(
        e,
        GalleryError::ConfigOutOfRange {
            field: "node_intensity",
            ..
        }
    )));

    let (out, _) = EngineConfig {
        node_intensity: -1.0,
        ..EngineConfig::default()
    }
    .sanitize();
    assert_eq!(out.node_intensity, 0.0);
}

#[test]
fn inverted_size_ratios_are_swapped() {
    let (out, errors) = EngineConfig {
        node_min_size_ratio: 0.5,
        node_max_size_ratio: 0.2,
        ..EngineConfig::default()
    }
    .sanitize();
    assert_eq!(out.node_min_size_ratio, 0.2);
    assert_eq!(out.node_max_size_ratio, 0.5);
    assert_eq!(errors.len(), 1);
}

#[test]
fn equal_size_ratios_get_the_minimum_gap() {
    let (out, _) = EngineConfig {
        node_min_size_ratio: 0.3,
        node_max_size_ratio: 0.3,
        ..EngineConfig::default()
    }
    .sanitize();
    assert!(approx(out.node_min_size_ratio, 0.3));
    assert!(approx(out.node_max_size_ratio, 0.3 + NODE_SIZE_RATIO_GAP));

    let (out, _) = EngineConfig {
        node_min_size_ratio: 1.0,
        node_max_size_ratio: 1.0,
        ..EngineConfig::default()
    }
    .sanitize();
    assert_eq!(out.node_max_size_ratio, NODE_SIZE_RATIO_CEIL);
    assert!(approx(out.node_min_size_ratio, NODE_SIZE_RATIO_CEIL - NODE_SIZE_RATIO_GAP));
}

#[test]
fn sanitized_configs_always_hold_their_invariants() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..1000 {
        let config = EngineConfig {
            node_intensity: rng.gen_range(-5.0..20.0),
            node_min_size_ratio: rng.gen_range(-1.0..2.0),
            node_max_size_ratio: rng.gen_range(-1.0..2.0),
            image_image_intensity: rng.gen_range(-1.0..2.0),
            node_image_intensity: rng.gen_range(-1.0..2.0),
            node_node_intensity: rng.gen_range(-1.0..2.0),
            hub_image_intensity: rng.gen_range(-1.0..2.0),
            hub_node_intensity: rng.gen_range(-1.0..2.0),
            line_opacity: [rng.gen_range(-1.0..2.0); 5],
            lines_behind: rng.gen(),
        };
        let (out, _) = config.sanitize();
        assert!((0.0..=NODE_INTENSITY_MAX).contains(&out.node_intensity));
        for kind in LinkKind::ALL {
            assert!((0.0..=1.0).contains(&out.intensity(kind)));
            assert!((0.0..=1.0).contains(&out.line_opacity(kind)));
        }
        let (lo, hi) = (out.node_min_size_ratio, out.node_max_size_ratio);
        assert!(lo >= NODE_SIZE_RATIO_FLOOR - 1e-6);
        assert!(hi <= NODE_SIZE_RATIO_CEIL + 1e-6);
        assert!(lo <= hi - NODE_SIZE_RATIO_GAP + 1e-5, "{lo} {hi}");

        let (again, _) = out.sanitize();
        assert!(approx(again.node_min_size_ratio, lo));
        assert!(approx(again.node_max_size_ratio, hi));
    }
}

#[test]
fn node_count_scales_with_image_count() {
    let mut config = EngineConfig::default();
    assert_eq!(config.node_count(10), 10);
    config.node_intensity = 1.5;
    assert_eq!(config.node_count(3), 5);
    config.node_intensity = 0.0;
    assert_eq!(config.node_count(100), 0);
}

#[test]
fn node_params_differ_only_on_node_fields() {
    let a = EngineConfig::default();
    let mut b = a.clone();
    b.image_image_intensity = 0.9;
    b.lines_behind = false;
    assert!(!a.node_params_differ(&b));
    b.node_max_size_ratio = 0.5;
    assert!(a.node_params_differ(&b));
}

#[test]
fn debouncer_fires_once_after_the_quiet_period() {
    let mut d = Debouncer::new(0.12);
    assert!(!d.take_due(0.0));
    assert!(!d.is_pending());

    d.touch(1.0);
    assert!(d.is_pending());
    assert!(!d.take_due(1.05));
    assert!(d.take_due(1.2));
    assert!(!d.take_due(1.3));
    assert!(!d.is_pending());
}

#[test]
fn debouncer_restarts_on_every_edit() {
    let mut d = Debouncer::default();
    d.touch(2.0);
    d.touch(2.1);
    assert!(!d.take_due(2.15));
    d.touch(2.2);
    assert!(!d.take_due(2.3));
    assert!(d.take_due(2.4));
}
