use std::path::Path;

use walkdir::WalkDir;

/// Recursive size of a file or directory in bytes.
///
/// Unreadable entries contribute 0 rather than failing the measurement, and
/// a missing path measures 0. Symlinks are not followed, so a cache entry
/// pointing outside its directory cannot inflate the estimate.
pub fn size_of(path: &Path) -> u64 {
    if path.is_file() {
        return std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    }
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.metadata().map(|m| m.len()).unwrap_or(0))
        .sum()
}
