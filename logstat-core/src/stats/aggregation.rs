use crate::ingest::LogRecord;
use crate::stats::types::{Aggregation, PipelineTotals, UnparsedPathPolicy, UrlStats};
use ahash::AHashMap;
use std::collections::BTreeMap;

/// Groups records by request path.
///
/// Counters are updated per record; means, medians and percentages are only
/// computed by [`Aggregator::finish`], once the whole stream has been seen.
pub struct Aggregator {
    policy: UnparsedPathPolicy,
    groups: AHashMap<String, UrlStats>,
    totals: PipelineTotals,
}

impl Aggregator {
    pub fn new(policy: UnparsedPathPolicy) -> Self {
        Self {
            policy,
            groups: AHashMap::new(),
            totals: PipelineTotals::default(),
        }
    }

    pub fn push(&mut self, record: LogRecord) {
        let LogRecord {
            path,
            response_time,
            parse_ok,
            request_ok,
        } = record;

        self.totals.total_records += 1;

        if !parse_ok || !response_time.is_finite() || response_time < 0.0 {
            self.totals.malformed_count += 1;
            return;
        }

        if !request_ok {
            match self.policy {
                UnparsedPathPolicy::Malformed => {
                    self.totals.malformed_count += 1;
                    return;
                }
                UnparsedPathPolicy::Group => self.totals.unparsed_path_count += 1,
            }
        }

        self.groups
            .entry(path)
            .or_insert_with_key(|path| UrlStats::new(path.clone()))
            .record(response_time);
    }

    /// Running counters. `total_time` is only filled in by `finish`.
    pub fn totals(&self) -> &PipelineTotals {
        &self.totals
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn finish(self) -> Aggregation {
        let mut totals = self.totals;
        let mut groups: BTreeMap<String, UrlStats> = self.groups.into_iter().collect();

        // Summed in path order so the result does not depend on hash order.
        totals.total_time = groups.values().map(|g| g.time_sum).sum();

        let well_formed = totals.well_formed();
        for group in groups.values_mut() {
            group.finalize(well_formed, totals.total_time);
        }

        Aggregation { groups, totals }
    }
}

pub fn aggregate<I>(records: I, policy: UnparsedPathPolicy) -> Aggregation
where
    I: IntoIterator<Item = LogRecord>,
{
    let mut aggregator = Aggregator::new(policy);
    for record in records {
        aggregator.push(record);
    }
    aggregator.finish()
}
