//! The command-palette substring matcher.

use super::model::{ResultGroup, SearchGroup, SearchRecord};

/// Filters a record set against a query and partitions the hits into
/// display buckets.
///
/// Matching is case-insensitive substring containment against either the
/// record's title or its path (a record matches if either field contains
/// the query). Buckets appear in [`SearchGroup::DISPLAY_ORDER`]; empty
/// buckets are omitted entirely. Within a bucket records keep their source
/// order; there is no relevance ranking.
///
/// An empty or whitespace-only query returns no groups at all; the caller
/// renders its own placeholder content in that case.
pub fn grouped_results(query: &str, records: &[SearchRecord]) -> Vec<ResultGroup> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let matches: Vec<&SearchRecord> = records
        .iter()
        .filter(|record| {
            record.title.to_lowercase().contains(&needle)
                || record.path.to_lowercase().contains(&needle)
        })
        .collect();

    SearchGroup::DISPLAY_ORDER
        .iter()
        .filter_map(|group| {
            let bucket: Vec<SearchRecord> = matches
                .iter()
                .filter(|record| record.record_type.group() == *group)
                .map(|record| (*record).clone())
                .collect();
            if bucket.is_empty() {
                None
            } else {
                Some(ResultGroup {
                    group: *group,
                    records: bucket,
                })
            }
        })
        .collect()
}
