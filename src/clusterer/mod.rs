mod capacity;
mod centroid;
mod distance;
mod kmeans;
mod types;


pub use capacity::choose_k;
pub use centroid::compute_centroids;
pub use distance::{nearest_centroid, squared_distance};
pub use kmeans::{partition, partition_from};
pub use types::{Centroid, Partition, Point};
