//! Item discovery and measurement for the source directory.
//!
//! Only the immediate children of the source directory are enumerated; a
//! subdirectory is one atomic item whose size is its full recursive byte
//! total.

use crate::errors::Result;
use crate::exclude::ExclusionSet;
use crate::fs::FileSystem;
use crate::models::Item;
use std::path::Path;
use tracing::debug;

/// Enumerates the immediate children of `source_dir`, drops names matched by
/// `exclude`, and measures each survivor's total recursive byte size.
///
/// Excluded children are skipped before measurement, so unreadable content
/// behind an excluded name never fails the scan.
pub fn scan_items(
    fs: &dyn FileSystem,
    source_dir: &Path,
    exclude: &ExclusionSet,
) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    for path in fs.list_dir(source_dir)? {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if exclude.matches(&name) {
            debug!(item = %name, "excluded from partitioning");
            continue;
        }
        let size = measure_size(fs, &path)?;
        debug!(item = %name, size, "measured");
        items.push(Item::new(name, size, path));
    }
    Ok(items)
}

/// Total recursive byte size of a path.
///
/// Directories sum their contents; symlinks are sized by their own link
/// metadata and never followed.
pub fn measure_size(fs: &dyn FileSystem, path: &Path) -> Result<u64> {
    let metadata = fs.symlink_metadata(path)?;
    if metadata.file_type().is_symlink() {
        return Ok(metadata.len());
    }
    if metadata.is_dir() {
        let mut total = 0u64;
        for child in fs.list_dir(path)? {
            total += measure_size(fs, &child)?;
        }
        return Ok(total);
    }
    Ok(metadata.len())
}
