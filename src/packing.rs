//! Greedy largest-first (LPT) assignment of items to buckets.
//!
//! Items are processed in descending size order and each one goes to the
//! bucket with the smallest running total. Ties are broken by ascending
//! item name and by lowest bucket index, so the full assignment is a pure
//! function of the item set and the part count.

use crate::models::{Assignment, Item, SplitPlan};

/// Computes the complete item-to-bucket assignment.
///
/// No filesystem access happens here; the caller executes the plan.
/// `part_count` must be at least 1.
pub fn plan_assignments(mut items: Vec<Item>, part_count: usize) -> SplitPlan {
    debug_assert!(part_count >= 1);

    items.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.name.cmp(&b.name)));

    let mut bucket_sizes = vec![0u64; part_count];
    let mut assignments = Vec::with_capacity(items.len());
    for item in items {
        let target = min_load_bucket(&bucket_sizes);
        bucket_sizes[target] += item.size;
        assignments.push(Assignment {
            item,
            bucket_index: target + 1,
        });
    }

    SplitPlan {
        assignments,
        bucket_sizes,
    }
}

/// Index of the least-loaded bucket, preferring the lowest index on ties.
fn min_load_bucket(sizes: &[u64]) -> usize {
    let mut best = 0;
    for (idx, size) in sizes.iter().enumerate().skip(1) {
        if *size < sizes[best] {
            best = idx;
        }
    }
    best
}
