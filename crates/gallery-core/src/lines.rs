use crate::registry::ItemRegistry;
use crate::topology::{LinkKind, Topology};
use glam::Vec3;

/// Segment endpoints for one link kind: `[x0, y0, z, x1, y1, z]` per link.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineBuffer {
    positions: Vec<f32>,
    link_count: usize,
    z: f32,
    generation: u64,
}

impl LineBuffer {
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    #[inline]
    pub fn link_count(&self) -> usize {
        self.link_count
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.link_count * 2
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.z
    }

    /// Bumped on every reallocation; renderers reallocate their own storage
    /// when this changes and otherwise only re-upload.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Endpoints of link `i`.
    pub fn segment(&self, i: usize) -> Option<(Vec3, Vec3)> {
        let s = self.positions.get(i * 6..i * 6 + 6)?;
        Some((Vec3::new(s[0], s[1], s[2]), Vec3::new(s[3], s[4], s[5])))
    }
}

/// Owns one [`LineBuffer`] per link kind and is the only writer to them.
#[derive(Clone, Debug, Default)]
pub struct LineSync {
    buffers: [LineBuffer; 5],
    lines_behind: bool,
}

impl LineSync {
    pub fn new(lines_behind: bool) -> Self {
        Self {
            buffers: Default::default(),
            lines_behind,
        }
    }

    #[inline]
    pub fn buffer(&self, kind: LinkKind) -> &LineBuffer {
        &self.buffers[kind.slot()]
    }

    pub fn lines_behind(&self) -> bool {
        self.lines_behind
    }

    /// Reallocate every buffer for the current topology and fill it.
    pub fn rebuild(&mut self, topology: &Topology, registry: &ItemRegistry, lines_behind: bool) {
        self.lines_behind = lines_behind;
        for kind in LinkKind::ALL {
            self.rebuild_kind(kind, topology, registry);
        }
        log::debug!("[lines] rebuilt {} segments", topology.total_links());
    }

    fn rebuild_kind(&mut self, kind: LinkKind, topology: &Topology, registry: &ItemRegistry) {
        let links = topology.links(kind).len();
        let buf = &mut self.buffers[kind.slot()];
        buf.positions = vec![0.0; links * 6];
        buf.link_count = links;
        buf.z = kind.line_z(self.lines_behind);
        buf.generation += 1;
        fill(buf, kind, topology, registry);
    }

    /// Per-frame refresh from current (animated) positions. A kind whose link
    /// count no longer matches its buffer is rebuilt instead of written past
    /// its end.
    pub fn update(&mut self, topology: &Topology, registry: &ItemRegistry) {
        for kind in LinkKind::ALL {
            let links = topology.links(kind).len();
            if self.buffers[kind.slot()].link_count != links {
                log::debug!(
                    "[lines] {:?} link count {} -> {}, rebuilding",
                    kind,
                    self.buffers[kind.slot()].link_count,
                    links
                );
                self.rebuild_kind(kind, topology, registry);
            } else {
                fill(&mut self.buffers[kind.slot()], kind, topology, registry);
            }
        }
    }
}

fn fill(buf: &mut LineBuffer, kind: LinkKind, topology: &Topology, registry: &ItemRegistry) {
    let (first, second) = kind.endpoints();
    let from = registry.items(first);
    let to = registry.items(second);
    let z = buf.z;
    for (seg, &(a, b)) in buf
        .positions
        .chunks_exact_mut(6)
        .zip(topology.links(kind).pairs())
    {
        let p0 = from.get(a).map(|it| it.current);
        let p1 = to.get(b).map(|it| it.current);
        match (p0, p1) {
            (Some(p0), Some(p1)) if p0.is_finite() && p1.is_finite() => {
                seg.copy_from_slice(&[p0.x, p0.y, z, p1.x, p1.y, z]);
            }
            // not-yet-placed or invalid endpoint: zero-length segment at the origin
            _ => seg.copy_from_slice(&[0.0, 0.0, z, 0.0, 0.0, z]),
        }
    }
}
