use serde::Serialize;

/// A (lat, lng) coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for Point {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// Centroid state after a recompute step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Centroid {
    Defined(Point),
    /// No point was assigned to this cluster; must be re-seeded
    Empty,
}

impl Centroid {
    pub fn point(&self) -> Option<Point> {
        match self {
            Centroid::Defined(p) => Some(*p),
            Centroid::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Centroid::Empty)
    }
}

/// Outcome of one partitioning run over a single group
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// Cluster index in `[0, k)` for each input point, in input order
    pub assignments: Vec<usize>,
    pub centroids: Vec<Point>,
    /// Assign/recompute cycles actually performed
    pub iterations: usize,
    /// False when the loop stopped because `max_iterations` ran out
    pub converged: bool,
}

impl Partition {
    pub fn k(&self) -> usize {
        self.centroids.len()
    }

    /// Number of points assigned to each cluster index
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.k()];
        for &a in &self.assignments {
            sizes[a] += 1;
        }
        sizes
    }
}
