// A-MEM self-organizing memory diagram.
// New memories appear at the center and settle into one of two semantic clusters.

use std::ops::Range;

use rand::Rng;
use rand::rngs::StdRng;

use crate::state::visual::{Mark, Tone, Visual};

/// Where new memories appear.
pub const ORIGIN: (f64, f64) = (50.0, 50.0);

/// Semantic cluster a memory settles into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cluster {
    A,
    B,
}

impl Cluster {
    /// Jitter ranges (x, y) for targets in this cluster.
    pub fn target_ranges(&self) -> (Range<f64>, Range<f64>) {
        match self {
            Cluster::A => (25.0..45.0, 30.0..50.0),
            Cluster::B => (75.0..95.0, 65.0..85.0),
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Cluster::A => Tone::Emerald,
            Cluster::B => Tone::Amber,
        }
    }
}

/// A memory point.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryNode {
    pub id: u64,
    pub cluster: Cluster,
    pub x: f64,
    pub y: f64,
    /// Where the node is heading; applied on the next render tick.
    pending: Option<(f64, f64)>,
}

impl MemoryNode {
    fn settled(id: u64, cluster: Cluster, x: f64, y: f64) -> Self {
        Self {
            id,
            cluster,
            x,
            y,
            pending: None,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.pending.is_none()
    }
}

/// Growing two-cluster memory map.
#[derive(Debug)]
pub struct ZettelkastenDiagram<R: Rng = StdRng> {
    nodes: Vec<MemoryNode>,
    next_id: u64,
    rng: R,
}

impl<R: Rng> ZettelkastenDiagram<R> {
    /// Seeded with the two starting clusters.
    pub fn new(rng: R) -> Self {
        let nodes = vec![
            MemoryNode::settled(1, Cluster::A, 20.0, 30.0),
            MemoryNode::settled(2, Cluster::A, 30.0, 40.0),
            MemoryNode::settled(3, Cluster::A, 25.0, 20.0),
            MemoryNode::settled(4, Cluster::B, 70.0, 60.0),
            MemoryNode::settled(5, Cluster::B, 80.0, 70.0),
        ];
        Self {
            next_id: nodes.len() as u64 + 1,
            nodes,
            rng,
        }
    }

    /// Add a memory at the origin and choose where it will settle.
    pub fn add_memory(&mut self) -> u64 {
        let cluster = if self.rng.gen_bool(0.5) {
            Cluster::A
        } else {
            Cluster::B
        };
        let (xs, ys) = cluster.target_ranges();
        let target = (self.rng.gen_range(xs), self.rng.gen_range(ys));

        let id = self.next_id;
        self.next_id += 1;
        self.nodes.push(MemoryNode {
            id,
            cluster,
            x: ORIGIN.0,
            y: ORIGIN.1,
            pending: Some(target),
        });
        log::debug!("Added memory {} heading to cluster {:?}", id, cluster);
        id
    }

    /// Render tick: every new node moves to its target.
    pub fn tick(&mut self) {
        for node in &mut self.nodes {
            if let Some((x, y)) = node.pending.take() {
                node.x = x;
                node.y = y;
            }
        }
    }

    pub fn visual(&self) -> Visual {
        let mut visual = Visual::new()
            .with_mark(Mark::dot(25.0, 30.0, 20.0).tone(Cluster::A.tone()).faint())
            .with_mark(Mark::dot(75.0, 65.0, 20.0).tone(Cluster::B.tone()).faint());

        for node in &self.nodes {
            let mark = Mark::dot(node.x, node.y, 3.0).tone(node.cluster.tone());
            visual.push(if node.is_settled() { mark.strong() } else { mark });
        }

        visual
            .with_caption("New memories (Zettels) find and link to relevant semantic clusters.")
            .with_status(format!("Active Clusters: 2 · Memories: {}", self.nodes.len()))
    }
}

#[cfg(test)]
impl<R: Rng> ZettelkastenDiagram<R> {
    pub fn nodes(&self) -> &[MemoryNode] {
        &self.nodes
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn diagram(seed: u64) -> ZettelkastenDiagram {
        ZettelkastenDiagram::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_new_memory_starts_at_origin_then_settles_in_range() {
        let mut diagram = diagram(7);
        let id = diagram.add_memory();

        let node = diagram.nodes().iter().find(|n| n.id == id).unwrap().clone();
        assert_eq!((node.x, node.y), ORIGIN);
        assert!(!node.is_settled());

        diagram.tick();
        let node = diagram.nodes().iter().find(|n| n.id == id).unwrap();
        let (xs, ys) = node.cluster.target_ranges();
        assert!(xs.contains(&node.x), "x {} outside {:?}", node.x, xs);
        assert!(ys.contains(&node.y), "y {} outside {:?}", node.y, ys);
        assert!(node.is_settled());
    }

    #[test]
    fn test_nodes_only_grow() {
        let mut diagram = diagram(1);
        for expected in 6..=25 {
            diagram.add_memory();
            diagram.tick();
            assert_eq!(diagram.nodes().len(), expected);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let mut a = diagram(42);
        let mut b = diagram(42);
        for _ in 0..10 {
            a.add_memory();
            b.add_memory();
        }
        a.tick();
        b.tick();
        assert_eq!(a.nodes(), b.nodes());
    }

    #[test]
    fn test_both_clusters_reachable() {
        let mut diagram = diagram(3);
        for _ in 0..64 {
            diagram.add_memory();
        }
        let added = &diagram.nodes()[5..];
        assert!(added.iter().any(|n| n.cluster == Cluster::A));
        assert!(added.iter().any(|n| n.cluster == Cluster::B));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut diagram = diagram(9);
        let a = diagram.add_memory();
        let b = diagram.add_memory();
        assert_ne!(a, b);
        assert!(a > 5);
    }
}
