use crate::clusterer::{
    centroid::compute_centroids,
    distance::nearest_centroid,
    types::{Centroid, Partition, Point},
};
use crate::error::{ClusterError, Result};
use rand::{seq::SliceRandom, Rng};

/// Partition `points` into `k` clusters with Lloyd's iteration.
///
/// Initial centroids are `k` distinct input points drawn from `rng`, or every
/// point in order when `k == points.len()`. Clusters that lose all their points
/// are re-seeded from `rng`, so the stream is consumed in a fixed order and the
/// result is reproducible for a given seed.
///
/// `k` must be in `[1, points.len()]` for a non-empty group; an empty group
/// with `k == 0` yields an empty partition.
pub fn partition<R: Rng + ?Sized>(
    points: &[Point],
    k: usize,
    max_iterations: usize,
    rng: &mut R,
) -> Result<Partition> {
    let n = points.len();

    if n == 0 && k == 0 {
        return Ok(Partition {
            assignments: Vec::new(),
            centroids: Vec::new(),
            iterations: 0,
            converged: true,
        });
    }
    if n == 0 || k == 0 || k > n {
        return Err(ClusterError::ClusterCountMismatch { k, points: n });
    }

    let initial: Vec<Point> = if k == n {
        points.to_vec()
    } else {
        points.choose_multiple(rng, k).copied().collect()
    };

    partition_from(points, initial, max_iterations, rng)
}

/// Run the iteration from caller-supplied initial centroids.
///
/// `rng` is only drawn from when a cluster ends a recompute step empty.
pub fn partition_from<R: Rng + ?Sized>(
    points: &[Point],
    initial: Vec<Point>,
    max_iterations: usize,
    rng: &mut R,
) -> Result<Partition> {
    let n = points.len();
    let k = initial.len();
    if n == 0 || k == 0 {
        return Err(ClusterError::ClusterCountMismatch { k, points: n });
    }

    let mut centroids = initial;
    let mut assignments = vec![0usize; n];
    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..max_iterations {
        iterations += 1;
        let mut changed = false;

        // Assign
        for (i, point) in points.iter().enumerate() {
            let best = nearest_centroid(point, &centroids);
            if assignments[i] != best {
                assignments[i] = best;
                changed = true;
            }
        }

        // Recompute, re-seeding any cluster left without points
        for (c, centroid) in compute_centroids(points, &assignments, k)
            .into_iter()
            .enumerate()
        {
            centroids[c] = match centroid {
                Centroid::Defined(p) => p,
                Centroid::Empty => {
                    changed = true;
                    points[rng.gen_range(0..n)]
                }
            };
        }

        if !changed {
            converged = true;
            break;
        }
    }

    Ok(Partition {
        assignments,
        centroids,
        iterations,
        converged,
    })
}
