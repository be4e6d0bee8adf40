//! Shared Rust foundation for the bucket-split directory partitioning tool.
//! This crate intentionally stays dependency-light and focuses on stable,
//! reusable primitives that can be consumed by the command crate.

pub mod errors;
pub mod exclude;
pub mod fs;
pub mod helpers;
pub mod models;
pub mod packing;
pub mod scan;
pub mod split;

pub use errors::{CoreError, Result};
pub use exclude::ExclusionSet;
pub use fs::{FileSystem, RealFileSystem};
pub use helpers::{bucket_dir_name, canonical_or_relaxed, print_size, sanitize_user_path};
pub use models::{Assignment, Bucket, ExitStatusLike, Item, SplitPlan, SplitReport};
pub use packing::plan_assignments;
pub use scan::{measure_size, scan_items};
pub use split::{split, SplitRequest};

/// Re-export a small stable API surface for the command crate.
pub mod prelude {
    pub use crate::{
        errors::{CoreError, Result},
        exclude::ExclusionSet,
        fs::{FileSystem, RealFileSystem},
        helpers::*,
        models::*,
        split::{split, SplitRequest},
    };
}
