use super::types::Point;

/// Squared Euclidean distance. Only used for nearest-centroid comparisons,
/// so the square root is never taken.
pub fn squared_distance(a: &Point, b: &Point) -> f64 {
    let dlat = a.lat - b.lat;
    let dlng = a.lng - b.lng;
    dlat * dlat + dlng * dlng
}

/// Index of the nearest centroid. Ties go to the lowest index.
pub fn nearest_centroid(point: &Point, centroids: &[Point]) -> usize {
    let mut best = 0;
    let mut best_dist = squared_distance(point, &centroids[0]);

    for (c, center) in centroids.iter().enumerate().skip(1) {
        let d = squared_distance(point, center);
        if d < best_dist {
            best_dist = d;
            best = c;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squared_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(squared_distance(&a, &b), 25.0);
        assert_eq!(squared_distance(&b, &a), 25.0);
        assert_eq!(squared_distance(&a, &a), 0.0);
    }

    #[test]
    fn test_nearest_picks_closest() {
        let centroids = vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
        assert_eq!(nearest_centroid(&Point::new(9.0, 9.5), &centroids), 1);
        assert_eq!(nearest_centroid(&Point::new(1.0, -1.0), &centroids), 0);
    }

    #[test]
    fn test_ties_resolve_to_lowest_index() {
        // Equidistant from all three centroids
        let centroids = vec![
            Point::new(1.0, 0.0),
            Point::new(-1.0, 0.0),
            Point::new(0.0, 1.0),
        ];
        assert_eq!(nearest_centroid(&Point::new(0.0, 0.0), &centroids), 0);

        let duplicated = vec![Point::new(5.0, 5.0), Point::new(2.0, 2.0), Point::new(2.0, 2.0)];
        assert_eq!(nearest_centroid(&Point::new(2.0, 2.0), &duplicated), 1);
    }
}
