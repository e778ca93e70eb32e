use crate::registry::Category;
use rand::prelude::*;
use std::f32::consts::TAU;
use std::ops::Range;

/// Idle-motion parameters for one item, drawn once at creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionProfile {
    pub amplitude: f32,
    pub speed_x: f32,
    pub speed_y: f32,
    pub phase: f32,
    pub scale_base: f32,
    pub scale_amplitude: f32,
    pub scale_frequency: f32,
    pub scale_phase: f32,
}

impl MotionProfile {
    /// A profile that never moves or breathes. Useful for tests and static hosts.
    pub const STILL: MotionProfile = MotionProfile {
        amplitude: 0.0,
        speed_x: 0.0,
        speed_y: 0.0,
        phase: 0.0,
        scale_base: 1.0,
        scale_amplitude: 0.0,
        scale_frequency: 0.0,
        scale_phase: 0.0,
    };
}

/// Uniform draw ranges for one category.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionRange {
    pub amplitude: Range<f32>,
    pub speed: Range<f32>,
    pub scale_base: Range<f32>,
    pub scale_amplitude: Range<f32>,
    pub scale_frequency: Range<f32>,
}

/// Per-category draw ranges. Nodes drift wider and breathe slower than images;
/// the hub barely moves.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionTable {
    pub image: MotionRange,
    pub node: MotionRange,
    pub hub: MotionRange,
}

impl Default for MotionTable {
    fn default() -> Self {
        Self {
            image: MotionRange {
                amplitude: 8.0..20.0,
                speed: 0.10..0.45,
                scale_base: 0.92..1.12,
                scale_amplitude: 0.10..0.22,
                scale_frequency: 0.20..0.45,
            },
            node: MotionRange {
                amplitude: 14.0..32.0,
                speed: 0.06..0.30,
                scale_base: 0.85..1.15,
                scale_amplitude: 0.12..0.30,
                scale_frequency: 0.10..0.25,
            },
            hub: MotionRange {
                amplitude: 4.0..10.0,
                speed: 0.05..0.20,
                scale_base: 0.98..1.04,
                scale_amplitude: 0.02..0.05,
                scale_frequency: 0.10..0.20,
            },
        }
    }
}

impl MotionTable {
    pub fn range(&self, category: Category) -> &MotionRange {
        match category {
            Category::Image => &self.image,
            Category::Node => &self.node,
            Category::VideoHub => &self.hub,
        }
    }
}

/// Seeded source of motion profiles (and of the other random draws the
/// registry needs, such as decorative node placement).
pub struct MotionGenerator {
    pub table: MotionTable,
    rng: StdRng,
}

impl MotionGenerator {
    pub fn new(table: MotionTable, seed: u64) -> Self {
        Self {
            table,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn profile(&mut self, category: Category) -> MotionProfile {
        let r = self.table.range(category).clone();
        MotionProfile {
            amplitude: self.uniform(r.amplitude.clone()),
            speed_x: self.uniform(r.speed.clone()),
            speed_y: self.uniform(r.speed.clone()),
            phase: self.rng.gen::<f32>() * TAU,
            scale_base: self.uniform(r.scale_base.clone()),
            scale_amplitude: self.uniform(r.scale_amplitude.clone()),
            scale_frequency: self.uniform(r.scale_frequency.clone()),
            scale_phase: self.rng.gen::<f32>() * TAU,
        }
    }

    /// Uniform draw in `range`; an empty range yields its start.
    pub fn uniform(&mut self, range: Range<f32>) -> f32 {
        if range.is_empty() {
            return range.start;
        }
        self.rng.gen_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn within(v: f32, r: &Range<f32>) -> bool {
        v >= r.start && v <= r.end
    }

    #[test]
    fn profiles_stay_inside_category_ranges() {
        let mut gen = MotionGenerator::new(MotionTable::default(), 7);
        for category in [Category::Image, Category::Node, Category::VideoHub] {
            for _ in 0..200 {
                let p = gen.profile(category);
                let r = gen.table.range(category);
                assert!(within(p.amplitude, &r.amplitude));
                assert!(within(p.speed_x, &r.speed));
                assert!(within(p.speed_y, &r.speed));
                assert!(within(p.scale_base, &r.scale_base));
                assert!(within(p.scale_amplitude, &r.scale_amplitude));
                assert!(within(p.scale_frequency, &r.scale_frequency));
                assert!((0.0..=TAU).contains(&p.phase));
                assert!((0.0..=TAU).contains(&p.scale_phase));
            }
        }
    }

    #[test]
    fn same_seed_same_profiles() {
        let mut a = MotionGenerator::new(MotionTable::default(), 99);
        let mut b = MotionGenerator::new(MotionTable::default(), 99);
        for _ in 0..10 {
            assert_eq!(a.profile(Category::Image), b.profile(Category::Image));
        }
    }

    #[test]
    fn uniform_handles_empty_and_narrow_ranges() {
        let mut gen = MotionGenerator::new(MotionTable::default(), 3);
        assert_eq!(gen.uniform(2.5..2.5), 2.5);
        assert_eq!(gen.uniform(4.0..1.0), 4.0);
        for _ in 0..100 {
            let v = gen.uniform(-1.0..1.0);
            assert!((-1.0..1.0).contains(&v));
        }
    }
}
