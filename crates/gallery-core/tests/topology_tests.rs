// Host-side tests for kNN link construction.

use gallery_core::motion::{MotionGenerator, MotionTable};
use gallery_core::topology::{
    default_neighbor_count, nearest_across, nearest_within, neighbor_count,
};
use gallery_core::{AssetStatus, Category, EngineConfig, ItemRegistry, LinkKind, Topology};
use glam::Vec2;
use rand::prelude::*;

fn scatter(seed: u64, n: usize) -> Vec<Vec2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Vec2::new(rng.gen_range(-400.0..400.0), rng.gen_range(-300.0..300.0)))
        .collect()
}

fn registry_with_images(points: &[Vec2]) -> ItemRegistry {
    let mut reg = ItemRegistry::new(MotionGenerator::new(MotionTable::default(), 1));
    for (i, p) in points.iter().enumerate() {
        reg.create_image_item(format!("img/{i}.jpg"), i, AssetStatus::Ready, *p, *p);
    }
    reg
}

#[test]
fn density_maps_onto_one_to_five_neighbors() {
    assert_eq!(default_neighbor_count(0.0), 1);
    assert_eq!(default_neighbor_count(1.0), 5);
    assert_eq!(default_neighbor_count(0.5), 3);
    assert_eq!(default_neighbor_count(-2.0), 1);
    assert_eq!(default_neighbor_count(9.0), 5);
    assert_eq!(default_neighbor_count(f32::NAN), 1);
    assert_eq!(neighbor_count(1.0, 2, 2), 2);
}

#[test]
fn density_is_monotonic() {
    let mut prev = default_neighbor_count(0.0);
    for step in 1..=100 {
        let k = default_neighbor_count(step as f32 / 100.0);
        assert!(k >= prev, "neighbor count dropped at density {}", step);
        prev = k;
    }
}

#[test]
fn three_points_full_density_links_every_pair() {
    // (0,0),(10,0),(0,10) on a 200x200 viewport
    let pts = [Vec2::new(-100.0, -100.0), Vec2::new(100.0, -100.0), Vec2::new(-100.0, 100.0)];
    let k = default_neighbor_count(1.0);
    let links = nearest_within(&pts, k);
    assert_eq!(links.len(), 3);
    assert!(links.contains((0, 1)));
    assert!(links.contains((0, 2)));
    assert!(links.contains((1, 2)));
}

#[test]
fn same_category_links_are_symmetric_and_bounded() {
    for seed in 0..5 {
        let pts = scatter(seed, 40);
        for k in 1..=5 {
            let links = nearest_within(&pts, k);
            for &(a, b) in links.pairs() {
                assert!(a < b, "pair ({a},{b}) not stored as (min,max)");
            }
            let mut sorted = links.pairs().to_vec();
            sorted.dedup();
            assert_eq!(sorted.len(), links.len());
            assert!(links.len() <= pts.len() * k);
            for i in 0..pts.len() {
                // every item picks its own k, others may add more
                assert!(links.degree(i) >= k.min(pts.len() - 1));
            }
        }
    }
}

#[test]
fn two_items_link_once_and_one_item_not_at_all() {
    let two = [Vec2::ZERO, Vec2::new(5.0, 0.0)];
    assert_eq!(nearest_within(&two, 5).pairs(), &[(0, 1)]);
    assert!(nearest_within(&two[..1], 5).is_empty());
    assert!(nearest_within(&[], 5).is_empty());
}

#[test]
fn ties_go_to_the_lower_index() {
    let origin = [Vec2::ZERO];
    let targets = [Vec2::new(1.0, 0.0), Vec2::new(-1.0, 0.0), Vec2::new(0.0, 1.0)];
    let links = nearest_across(&origin, &targets, 1);
    assert_eq!(links.pairs(), &[(0, 0)]);
}

#[test]
fn cross_links_take_k_per_source_item() {
    let from = scatter(11, 6);
    let to = scatter(12, 9);
    let links = nearest_across(&from, &to, 3);
    assert_eq!(links.len(), 18);
    for i in 0..from.len() {
        assert_eq!(links.pairs().iter().filter(|(a, _)| *a == i).count(), 3);
    }
    // k larger than the target list is capped
    assert_eq!(nearest_across(&from, &to[..2], 5).len(), 12);
    assert!(nearest_across(&from, &[], 3).is_empty());
    assert!(nearest_across(&[], &to, 3).is_empty());
}

#[test]
fn cross_links_pick_the_actual_nearest() {
    let from = [Vec2::new(0.0, 0.0)];
    let to = [
        Vec2::new(100.0, 0.0),
        Vec2::new(3.0, 0.0),
        Vec2::new(50.0, 0.0),
        Vec2::new(2.0, 0.0),
    ];
    let links = nearest_across(&from, &to, 2);
    assert_eq!(links.pairs(), &[(0, 1), (0, 3)]);
}

#[test]
fn build_uses_base_positions_and_tracks_staleness() {
    let pts = scatter(5, 12);
    let mut reg = registry_with_images(&pts);
    // drift the current positions far away; links must not follow
    for item in reg.items_mut(Category::Image) {
        item.current = glam::Vec3::new(1e4, 1e4, 0.0);
    }
    let config = EngineConfig {
        image_image_intensity: 0.5,
        ..EngineConfig::default()
    };
    let topo = Topology::build(&reg, &config);
    assert_eq!(
        topo.links(LinkKind::ImageImage),
        &nearest_within(&pts, default_neighbor_count(0.5))
    );
    assert!(topo.links(LinkKind::NodeImage).is_empty());
    assert!(!topo.is_stale(&reg));

    reg.create_node_item(Vec2::ZERO, 20.0);
    assert!(topo.is_stale(&reg));
}

#[test]
fn hub_links_to_its_nearest_images() {
    let pts = scatter(8, 10);
    let mut reg = registry_with_images(&pts);
    reg.set_video_hub("hub.mp4", AssetStatus::Ready, Vec2::ZERO, Vec2::ZERO);
    let config = EngineConfig {
        hub_image_intensity: 1.0,
        ..EngineConfig::default()
    };
    let topo = Topology::build(&reg, &config);
    let hub_links = topo.links(LinkKind::HubImage);
    assert_eq!(hub_links.len(), 5);
    assert!(hub_links.pairs().iter().all(|(h, _)| *h == 0));
    assert!(topo.links(LinkKind::HubNode).is_empty());
}
