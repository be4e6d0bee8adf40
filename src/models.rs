use std::path::PathBuf;

/// A top-level child of the source directory.
///
/// An item is measured once and then treated as one atomic unit: it is
/// relocated whole, never split across buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub size: u64,
    pub path: PathBuf,
}

impl Item {
    pub fn new(name: impl Into<String>, size: u64, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            size,
            path: path.into(),
        }
    }
}

/// One output partition directory accumulating assigned items.
#[derive(Debug, Clone)]
pub struct Bucket {
    /// 1-based bucket index; also the suffix of the bucket directory name.
    pub index: usize,
    pub dir: PathBuf,
    pub accumulated_size: u64,
    pub item_count: usize,
}

/// A single planned relocation of one item into one bucket.
#[derive(Debug, Clone)]
pub struct Assignment {
    pub item: Item,
    /// 1-based index of the receiving bucket.
    pub bucket_index: usize,
}

/// Complete item-to-bucket mapping, computed before any move is attempted.
#[derive(Debug, Clone)]
pub struct SplitPlan {
    /// Assignments in execution order (largest item first).
    pub assignments: Vec<Assignment>,
    /// Final accumulated size per bucket, indexed by bucket index - 1.
    pub bucket_sizes: Vec<u64>,
}

impl SplitPlan {
    pub fn total_size(&self) -> u64 {
        self.bucket_sizes.iter().sum()
    }
}

/// Final per-bucket accounting reported after all moves complete.
#[derive(Debug, Clone)]
pub struct SplitReport {
    pub buckets: Vec<Bucket>,
}

impl SplitReport {
    pub fn total_size(&self) -> u64 {
        self.buckets.iter().map(|b| b.accumulated_size).sum()
    }

    pub fn total_items(&self) -> usize {
        self.buckets.iter().map(|b| b.item_count).sum()
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ExitStatusLike {
    Ok,
    Usage,
    Error,
}

impl ExitStatusLike {
    pub fn as_code(self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::Usage => 2,
            Self::Error => 1,
        }
    }
}
