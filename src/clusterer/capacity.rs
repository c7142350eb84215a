/// Number of clusters for a group of `n` points.
///
/// `ceil(n / target_capacity)` clamped to `[1, n]`; zero only for an empty
/// group. A capacity of zero is treated as one. The result sizes the
/// partition but does not cap any single cluster at `target_capacity`.
pub fn choose_k(n: usize, target_capacity: usize) -> usize {
    if n == 0 {
        return 0;
    }

    let k = n.div_ceil(target_capacity.max(1));
    k.min(n).max(1)
}
