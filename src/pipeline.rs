use crate::clusterer::{choose_k, partition};
use crate::config::ClusterConfig;
use crate::error::{ClusterError, Result};
use crate::grouping::group_runs;
use crate::records::StudentRun;
use crate::summary::{
    clustered_runs, sort_clustered_runs, sort_summaries, summarize, ClusterSummary, ClusteredRun,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Counters for a completed batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub groups: usize,
    pub clusters: usize,
    pub rows: usize,
    /// Groups that hit `max_iterations` before converging
    pub unconverged_groups: usize,
}

#[derive(Debug, Clone)]
pub struct ClusteringOutput {
    pub runs: Vec<ClusteredRun>,
    pub summaries: Vec<ClusterSummary>,
    pub stats: RunStats,
}

/// Cluster every (day, window, destination) group in `runs`.
///
/// A single ChaCha8 stream seeded from `config.seed` is shared by all groups
/// in first-seen order, so identical input order and config give identical
/// output. `source_name` only labels the empty-input error.
pub fn cluster_runs(
    runs: &[StudentRun],
    config: &ClusterConfig,
    source_name: &str,
) -> Result<ClusteringOutput> {
    if runs.is_empty() {
        return Err(ClusterError::EmptyInput {
            source_name: source_name.to_string(),
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let groups = group_runs(runs);

    let mut out_runs = Vec::with_capacity(runs.len());
    let mut summaries = Vec::new();
    let mut stats = RunStats {
        groups: groups.len(),
        ..RunStats::default()
    };

    for group in &groups {
        let points = group.points()?;
        let k = choose_k(points.len(), config.target_capacity);
        let result = partition(&points, k, config.max_iterations, &mut rng)?;

        debug!(
            day = %group.key.day,
            window_start = %group.key.window_start,
            window_end = %group.key.window_end,
            destination = %group.key.destination_id,
            n = points.len(),
            k,
            iterations = result.iterations,
            converged = result.converged,
            "clustered group"
        );
        if !result.converged {
            warn!(
                day = %group.key.day,
                window_start = %group.key.window_start,
                destination = %group.key.destination_id,
                max_iterations = config.max_iterations,
                "group did not converge"
            );
            stats.unconverged_groups += 1;
        }

        out_runs.extend(clustered_runs(group, &result));
        summaries.extend(summarize(&group.key, &result));
        stats.clusters += k;
    }

    sort_clustered_runs(&mut out_runs);
    sort_summaries(&mut summaries);
    stats.rows = out_runs.len();

    info!(
        groups = stats.groups,
        clusters = stats.clusters,
        rows = stats.rows,
        "clustering complete"
    );

    Ok(ClusteringOutput {
        runs: out_runs,
        summaries,
        stats,
    })
}
