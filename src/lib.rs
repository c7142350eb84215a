// Public API exports
pub mod clusterer;
pub mod config;
pub mod csv_io;
pub mod error;
pub mod grouping;
pub mod manifest;
pub mod pipeline;
pub mod records;
pub mod summary;

// Re-export main types for convenience
pub use clusterer::{choose_k, partition, partition_from, Centroid, Partition, Point};
pub use config::ClusterConfig;
pub use error::{ClusterError, Result};
pub use grouping::{group_runs, Group};
pub use manifest::RunManifest;
pub use pipeline::{cluster_runs, ClusteringOutput, RunStats};
pub use records::{GroupKey, StudentRun};
pub use summary::{ClusterSummary, ClusteredRun};
