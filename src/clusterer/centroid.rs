use super::types::{Centroid, Point};

/// Mean of every cluster's assigned points.
///
/// Clusters with no assigned points come back as [`Centroid::Empty`].
pub fn compute_centroids(points: &[Point], assignments: &[usize], k: usize) -> Vec<Centroid> {
    let mut sums = vec![(0.0f64, 0.0f64); k];
    let mut counts = vec![0usize; k];

    for (p, &c) in points.iter().zip(assignments.iter()) {
        sums[c].0 += p.lat;
        sums[c].1 += p.lng;
        counts[c] += 1;
    }

    sums.into_iter()
        .zip(counts)
        .map(|((lat, lng), count)| {
            if count == 0 {
                Centroid::Empty
            } else {
                let n = count as f64;
                Centroid::Defined(Point::new(lat / n, lng / n))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_per_cluster() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 4.0),
            Point::new(10.0, 10.0),
        ];
        let centroids = compute_centroids(&points, &[0, 0, 1], 2);

        assert_eq!(centroids[0], Centroid::Defined(Point::new(1.0, 2.0)));
        assert_eq!(centroids[1], Centroid::Defined(Point::new(10.0, 10.0)));
    }

    #[test]
    fn test_unassigned_cluster_is_empty() {
        let points = vec![Point::new(1.0, 1.0), Point::new(3.0, 3.0)];
        let centroids = compute_centroids(&points, &[0, 0], 3);

        assert_eq!(centroids.len(), 3);
        assert!(!centroids[0].is_empty());
        assert!(centroids[1].is_empty());
        assert!(centroids[2].is_empty());
        assert_eq!(centroids[2].point(), None);
    }
}
