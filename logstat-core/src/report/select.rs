use crate::stats::UrlStats;
use std::cmp::Ordering;

/// The `n` groups with the largest total time.
///
/// Groups with equal `time_sum` are ordered by path, so the result never
/// depends on the order the groups were handed in.
pub fn select_top<I>(groups: I, n: usize) -> Vec<UrlStats>
where
    I: IntoIterator<Item = UrlStats>,
{
    if n == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<UrlStats> = groups.into_iter().collect();
    ranked.sort_by(rank);
    ranked.truncate(n);
    ranked
}

fn rank(a: &UrlStats, b: &UrlStats) -> Ordering {
    b.time_sum
        .total_cmp(&a.time_sum)
        .then_with(|| a.path.cmp(&b.path))
}
