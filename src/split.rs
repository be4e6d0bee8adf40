//! One-shot split orchestration: validate, plan, then execute moves.
//!
//! Validation and planning are side-effect free; the filesystem is only
//! touched once the full assignment is known. A move failure mid-run aborts
//! the remaining sequence and already-moved items are not reverted.

use crate::errors::{CoreError, Result};
use crate::exclude::ExclusionSet;
use crate::fs::FileSystem;
use crate::helpers::{bucket_dir_name, canonical_or_relaxed, sanitize_user_path};
use crate::models::{Bucket, SplitPlan, SplitReport};
use crate::packing::plan_assignments;
use crate::scan::scan_items;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Parameters for one split run.
#[derive(Debug, Clone)]
pub struct SplitRequest {
    pub source_dir: PathBuf,
    pub part_count: usize,
    pub exclude: ExclusionSet,
}

impl SplitRequest {
    pub fn new(source_dir: impl Into<PathBuf>, part_count: usize) -> Self {
        Self {
            source_dir: source_dir.into(),
            part_count,
            exclude: ExclusionSet::empty(),
        }
    }

    pub fn with_exclude(mut self, exclude: ExclusionSet) -> Self {
        self.exclude = exclude;
        self
    }
}

/// Partitions the immediate children of the source directory into
/// `part_count` sibling bucket directories named `<source>-1` through
/// `<source>-N`, balancing total byte size with the largest-first greedy
/// heuristic.
///
/// Excluded items stay in the source directory. Pre-existing destination
/// directories are a hard error; nothing is moved in that case.
pub fn split(fs: &dyn FileSystem, request: &SplitRequest) -> Result<SplitReport> {
    if request.part_count < 1 {
        return Err(CoreError::invalid_input(format!(
            "part count must be a positive integer, got {}",
            request.part_count
        )));
    }
    if !fs.exists(&request.source_dir) || !fs.metadata(&request.source_dir)?.is_dir() {
        return Err(CoreError::not_found(&request.source_dir));
    }

    let source_dir = canonical_or_relaxed(&request.source_dir);
    let items = scan_items(fs, &source_dir, &request.exclude)?;
    info!(
        source = %source_dir.display(),
        items = items.len(),
        buckets = request.part_count,
        "planning split"
    );

    let plan = plan_assignments(items, request.part_count);
    let bucket_dirs = bucket_dirs(&source_dir, request.part_count)?;

    for dir in &bucket_dirs {
        if fs.exists(dir) {
            return Err(CoreError::conflict(format!(
                "destination directory already exists: {}",
                sanitize_user_path(dir)
            )));
        }
    }
    for dir in &bucket_dirs {
        fs.create_dir(dir)?;
    }

    execute_moves(fs, &plan, &bucket_dirs)?;
    Ok(build_report(&plan, bucket_dirs))
}

/// Destination directories, siblings of the source, in bucket-index order.
fn bucket_dirs(source_dir: &Path, part_count: usize) -> Result<Vec<PathBuf>> {
    let name = source_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            CoreError::invalid_input(format!(
                "cannot derive bucket names from {}",
                sanitize_user_path(source_dir)
            ))
        })?;
    let parent = source_dir.parent().unwrap_or_else(|| Path::new("."));
    Ok((1..=part_count)
        .map(|index| parent.join(bucket_dir_name(&name, index)))
        .collect())
}

fn execute_moves(fs: &dyn FileSystem, plan: &SplitPlan, bucket_dirs: &[PathBuf]) -> Result<()> {
    for assignment in &plan.assignments {
        let item = &assignment.item;
        let dest = bucket_dirs[assignment.bucket_index - 1].join(&item.name);
        debug!(
            item = %item.name,
            size = item.size,
            bucket = assignment.bucket_index,
            "moving"
        );
        fs.rename(&item.path, &dest)?;
    }
    Ok(())
}

fn build_report(plan: &SplitPlan, bucket_dirs: Vec<PathBuf>) -> SplitReport {
    let mut item_counts = vec![0usize; plan.bucket_sizes.len()];
    for assignment in &plan.assignments {
        item_counts[assignment.bucket_index - 1] += 1;
    }
    let buckets = bucket_dirs
        .into_iter()
        .zip(plan.bucket_sizes.iter().zip(item_counts))
        .enumerate()
        .map(|(idx, (dir, (&accumulated_size, item_count)))| Bucket {
            index: idx + 1,
            dir,
            accumulated_size,
            item_count,
        })
        .collect();
    SplitReport { buckets }
}
