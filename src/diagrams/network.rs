// Decorative network backdrop.
// Random points inside a sphere, linked when close, projected onto the page header.

use rand::Rng;

use crate::state::visual::{Mark, Tone, Visual};

pub const NODE_COUNT: usize = 40;
pub const RADIUS: f64 = 5.0;
/// Points closer than this are linked.
pub const LINK_DISTANCE: f64 = 2.5;

/// A point in scene space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn distance_to(&self, other: &Point3) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}

/// Static network of points and links.
#[derive(Debug, Clone)]
pub struct NetworkScene {
    nodes: Vec<Point3>,
    edges: Vec<(usize, usize)>,
}

impl NetworkScene {
    /// Place `NODE_COUNT` points uniformly inside the sphere.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let nodes = (0..NODE_COUNT)
            .map(|_| {
                let theta = rng.gen_range(0.0..std::f64::consts::TAU);
                let phi = (2.0 * rng.r#gen::<f64>() - 1.0).acos();
                let r = RADIUS * rng.r#gen::<f64>().cbrt();
                Point3 {
                    x: r * phi.sin() * theta.cos(),
                    y: r * phi.sin() * theta.sin(),
                    z: r * phi.cos(),
                }
            })
            .collect();
        Self::from_nodes(nodes)
    }

    /// Build a scene from explicit points, linking every close pair.
    pub fn from_nodes(nodes: Vec<Point3>) -> Self {
        let mut edges = Vec::new();
        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                if nodes[i].distance_to(&nodes[j]) < LINK_DISTANCE {
                    edges.push((i, j));
                }
            }
        }
        Self { nodes, edges }
    }

    /// Orthographic projection onto the x/y plane, in percent.
    fn project(point: &Point3) -> (f64, f64) {
        (
            50.0 + point.x / RADIUS * 45.0,
            50.0 - point.y / RADIUS * 45.0,
        )
    }

    pub fn visual(&self, tone: Tone) -> Visual {
        let mut visual = Visual::new();
        for (a, b) in &self.edges {
            let (x1, y1) = Self::project(&self.nodes[*a]);
            let (x2, y2) = Self::project(&self.nodes[*b]);
            visual.push(Mark::line(x1, y1, x2, y2).tone(tone).faint());
        }
        for node in &self.nodes {
            let (x, y) = Self::project(node);
            // Nearer points are drawn stronger
            let mark = Mark::dot(x, y, 0.8).tone(tone);
            visual.push(if node.z > 0.0 { mark.strong() } else { mark });
        }
        visual
    }
}

#[cfg(test)]
impl NetworkScene {
    pub fn nodes(&self) -> &[Point3] {
        &self.nodes
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_points_inside_sphere() {
        let mut rng = StdRng::seed_from_u64(11);
        let scene = NetworkScene::generate(&mut rng);
        let center = Point3 { x: 0.0, y: 0.0, z: 0.0 };

        assert_eq!(scene.nodes().len(), NODE_COUNT);
        assert!(scene.nodes().iter().all(|p| p.distance_to(&center) <= RADIUS + 1e-9));
    }

    #[test]
    fn test_edges_are_exactly_close_pairs() {
        let nodes = vec![
            Point3 { x: 0.0, y: 0.0, z: 0.0 },
            Point3 { x: 2.0, y: 0.0, z: 0.0 },
            Point3 { x: 4.4, y: 0.0, z: 0.0 },
            Point3 { x: 0.0, y: 2.5, z: 0.0 },
        ];
        let scene = NetworkScene::from_nodes(nodes);

        // 0-1 (2.0) and 1-2 (2.4) link; 0-3 sits exactly on the threshold
        assert_eq!(scene.edges(), &[(0, 1), (1, 2)]);
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = NetworkScene::generate(&mut StdRng::seed_from_u64(5));
        let b = NetworkScene::generate(&mut StdRng::seed_from_u64(5));
        assert_eq!(a.nodes(), b.nodes());
        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn test_visual_counts() {
        let scene = NetworkScene::generate(&mut StdRng::seed_from_u64(2));
        let visual = scene.visual(Tone::Blue);
        assert_eq!(visual.marks.len(), scene.nodes().len() + scene.edges().len());
    }
}
