//! k-nearest-neighbor link sets between and within item categories.
//!
//! Distances are measured on base positions, so links follow the static
//! layout rather than the idle drift. Every build is a full O(n²) recompute
//! per category pair, which is fine for item counts in the low hundreds.

use crate::config::EngineConfig;
use crate::constants::{LINE_Z_BEHIND, LINE_Z_FRONT, LINE_Z_STEP, MAX_NEIGHBORS, MIN_NEIGHBORS};
use crate::registry::{Category, ItemRegistry};
use fnv::FnvHashSet;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkKind {
    ImageImage,
    NodeImage,
    NodeNode,
    HubImage,
    HubNode,
}

impl LinkKind {
    pub const ALL: [LinkKind; 5] = [
        LinkKind::ImageImage,
        LinkKind::NodeImage,
        LinkKind::NodeNode,
        LinkKind::HubImage,
        LinkKind::HubNode,
    ];

    #[inline]
    pub fn slot(self) -> usize {
        match self {
            LinkKind::ImageImage => 0,
            LinkKind::NodeImage => 1,
            LinkKind::NodeNode => 2,
            LinkKind::HubImage => 3,
            LinkKind::HubNode => 4,
        }
    }

    /// `(first, second)` categories; pairs index into these in that order.
    pub fn endpoints(self) -> (Category, Category) {
        match self {
            LinkKind::ImageImage => (Category::Image, Category::Image),
            LinkKind::NodeImage => (Category::Node, Category::Image),
            LinkKind::NodeNode => (Category::Node, Category::Node),
            LinkKind::HubImage => (Category::VideoHub, Category::Image),
            LinkKind::HubNode => (Category::VideoHub, Category::Node),
        }
    }

    #[inline]
    pub fn is_same_category(self) -> bool {
        let (a, b) = self.endpoints();
        a == b
    }

    pub fn touches(self, category: Category) -> bool {
        let (a, b) = self.endpoints();
        a == category || b == category
    }

    /// Depth of this kind's segments. Lines sit behind every item or in front
    /// of every item; each kind gets its own small offset.
    pub fn line_z(self, lines_behind: bool) -> f32 {
        let step = self.slot() as f32 * LINE_Z_STEP;
        if lines_behind {
            LINE_Z_BEHIND + step
        } else {
            LINE_Z_FRONT + step
        }
    }
}

pub type LinkPair = (usize, usize);

/// Pairs for one link kind, sorted so buffer layouts are stable across
/// rebuilds of the same layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinkSet {
    pairs: Vec<LinkPair>,
}

impl LinkSet {
    fn from_unsorted(mut pairs: Vec<LinkPair>) -> Self {
        pairs.sort_unstable();
        pairs.dedup();
        Self { pairs }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[inline]
    pub fn pairs(&self) -> &[LinkPair] {
        &self.pairs
    }

    pub fn contains(&self, pair: LinkPair) -> bool {
        self.pairs.binary_search(&pair).is_ok()
    }

    /// Links touching `index` on either side (same-category sets).
    pub fn degree(&self, index: usize) -> usize {
        self.pairs
            .iter()
            .filter(|(a, b)| *a == index || *b == index)
            .count()
    }
}

/// Map a density in \[0, 1\] to a neighbor count in `[min_k, max_k]`.
/// Non-finite densities count as zero.
pub fn neighbor_count(density: f32, min_k: usize, max_k: usize) -> usize {
    let d = if density.is_finite() {
        density.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let span = max_k.saturating_sub(min_k) as f32;
    (d * span).round() as usize + min_k
}

#[inline]
pub fn default_neighbor_count(density: f32) -> usize {
    neighbor_count(density, MIN_NEIGHBORS, MAX_NEIGHBORS)
}

/// Indices of the `k` candidates nearest to `origin`, closest first. Ties go
/// to the lower index; `skip` excludes the origin itself in same-list queries.
fn k_nearest(
    origin: Vec2,
    candidates: &[Vec2],
    k: usize,
    skip: Option<usize>,
) -> SmallVec<[usize; MAX_NEIGHBORS]> {
    let mut best: SmallVec<[(f32, usize); MAX_NEIGHBORS]> = SmallVec::new();
    if k == 0 {
        return SmallVec::new();
    }
    for (j, p) in candidates.iter().enumerate() {
        if Some(j) == skip {
            continue;
        }
        let d = origin.distance_squared(*p);
        if !d.is_finite() {
            continue;
        }
        if best.len() == k && d >= best[k - 1].0 {
            continue;
        }
        // candidates arrive in index order, so inserting after equal distances
        // keeps the lower index first
        let at = best.partition_point(|(bd, _)| *bd <= d);
        best.insert(at, (d, j));
        best.truncate(k);
    }
    best.into_iter().map(|(_, j)| j).collect()
}

/// Symmetric kNN within one list. Each item contributes at most `k` links;
/// `(a, b)` and `(b, a)` collapse into `(min, max)`.
pub fn nearest_within(points: &[Vec2], k: usize) -> LinkSet {
    let mut seen: FnvHashSet<LinkPair> = FnvHashSet::default();
    for (i, p) in points.iter().enumerate() {
        for j in k_nearest(*p, points, k, Some(i)) {
            seen.insert((i.min(j), i.max(j)));
        }
    }
    LinkSet::from_unsorted(seen.into_iter().collect())
}

/// Directed kNN from every item of `from` into `to`, stored as
/// `(index in from, index in to)`.
pub fn nearest_across(from: &[Vec2], to: &[Vec2], k: usize) -> LinkSet {
    let mut pairs = Vec::with_capacity(from.len() * k.min(to.len()));
    for (i, p) in from.iter().enumerate() {
        pairs.extend(k_nearest(*p, to, k, None).into_iter().map(|j| (i, j)));
    }
    LinkSet::from_unsorted(pairs)
}

/// All five link sets plus the registry version they were built from.
#[derive(Clone, Debug, Default)]
pub struct Topology {
    sets: [LinkSet; 5],
    built_from: Option<u64>,
}

impl Topology {
    pub fn build(registry: &ItemRegistry, config: &EngineConfig) -> Self {
        let bases = |c: Category| -> Vec<Vec2> {
            registry.items(c).iter().map(|it| it.base).collect()
        };
        let images = bases(Category::Image);
        let nodes = bases(Category::Node);
        let hub = bases(Category::VideoHub);

        let mut sets: [LinkSet; 5] = Default::default();
        for kind in LinkKind::ALL {
            let k = default_neighbor_count(config.intensity(kind));
            sets[kind.slot()] = match kind {
                LinkKind::ImageImage => nearest_within(&images, k),
                LinkKind::NodeNode => nearest_within(&nodes, k),
                LinkKind::NodeImage => nearest_across(&nodes, &images, k),
                LinkKind::HubImage => nearest_across(&hub, &images, k),
                LinkKind::HubNode => nearest_across(&hub, &nodes, k),
            };
        }

        log::info!(
            "[topology] rebuilt: image-image={} node-image={} node-node={} hub-image={} hub-node={}",
            sets[0].len(),
            sets[1].len(),
            sets[2].len(),
            sets[3].len(),
            sets[4].len()
        );
        Self {
            sets,
            built_from: Some(registry.structure_version()),
        }
    }

    #[inline]
    pub fn links(&self, kind: LinkKind) -> &LinkSet {
        &self.sets[kind.slot()]
    }

    /// True when the registry changed structurally since this was built.
    pub fn is_stale(&self, registry: &ItemRegistry) -> bool {
        self.built_from != Some(registry.structure_version())
    }

    pub fn total_links(&self) -> usize {
        self.sets.iter().map(LinkSet::len).sum()
    }
}
