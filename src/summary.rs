use crate::clusterer::Partition;
use crate::grouping::Group;
use crate::records::GroupKey;
use serde::{Deserialize, Serialize};

/// An input run with the cluster it was placed in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteredRun {
    pub run_id: String,
    pub day: String,
    pub time_window_start: String,
    pub time_window_end: String,
    pub student_id: String,
    pub home_lat: String,
    pub home_lng: String,
    pub university_id: String,
    pub cluster_id: String,
}

/// Size and final centroid of one cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub day: String,
    pub time_window_start: String,
    pub time_window_end: String,
    pub university_id: String,
    pub cluster_id: String,
    pub cluster_size: usize,
    pub centroid_lat: String,
    pub centroid_lng: String,
}

/// Centroid coordinates are reported to six decimal places
pub fn format_coordinate(value: f64) -> String {
    format!("{:.6}", value)
}

/// One row per group member, tagged with its cluster id
pub fn clustered_runs(group: &Group<'_>, partition: &Partition) -> Vec<ClusteredRun> {
    group
        .members
        .iter()
        .zip(partition.assignments.iter())
        .map(|(run, &cluster)| ClusteredRun {
            run_id: run.run_id.clone(),
            day: run.day.clone(),
            time_window_start: run.time_window_start.clone(),
            time_window_end: run.time_window_end.clone(),
            student_id: run.student_id.clone(),
            home_lat: run.home_lat.clone(),
            home_lng: run.home_lng.clone(),
            university_id: run.university_id.clone(),
            cluster_id: group.key.cluster_id(cluster + 1),
        })
        .collect()
}

/// One row per cluster index in `[0, k)`, in index order
pub fn summarize(key: &GroupKey, partition: &Partition) -> Vec<ClusterSummary> {
    partition
        .cluster_sizes()
        .into_iter()
        .zip(partition.centroids.iter())
        .enumerate()
        .map(|(idx, (size, centroid))| ClusterSummary {
            day: key.day.clone(),
            time_window_start: key.window_start.clone(),
            time_window_end: key.window_end.clone(),
            university_id: key.destination_id.clone(),
            cluster_id: key.cluster_id(idx + 1),
            cluster_size: size,
            centroid_lat: format_coordinate(centroid.lat),
            centroid_lng: format_coordinate(centroid.lng),
        })
        .collect()
}

/// Order by day, window start, destination, cluster id, then student id.
/// The sort is stable, so rows with equal keys keep their relative order.
pub fn sort_clustered_runs(rows: &mut [ClusteredRun]) {
    rows.sort_by(|a, b| {
        (
            &a.day,
            &a.time_window_start,
            &a.university_id,
            &a.cluster_id,
            &a.student_id,
        )
            .cmp(&(
                &b.day,
                &b.time_window_start,
                &b.university_id,
                &b.cluster_id,
                &b.student_id,
            ))
    });
}

/// Order by day, window start, destination, then cluster id
pub fn sort_summaries(rows: &mut [ClusterSummary]) {
    rows.sort_by(|a, b| {
        (&a.day, &a.time_window_start, &a.university_id, &a.cluster_id).cmp(&(
            &b.day,
            &b.time_window_start,
            &b.university_id,
            &b.cluster_id,
        ))
    });
}
