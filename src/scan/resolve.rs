use std::path::{Path, PathBuf};

use crate::common::errors::SweepError;

/// Prefixes that mark a bundle-identifier token
const BUNDLE_PREFIXES: &[&str] = &["com.", "org.", "company.", "ext."];

/// The per-user roots every relative pattern resolves against.
#[derive(Debug, Clone)]
pub struct CacheRoots {
    pub home: PathBuf,
    /// The user's standard cache directory (~/Library/Caches)
    pub user_caches: PathBuf,
    /// The darwin per-user cache root (`getconf DARWIN_USER_CACHE_DIR`),
    /// where sandboxed apps keep caches keyed by bundle identifier
    pub darwin_caches: PathBuf,
}

impl CacheRoots {
    /// Discover roots for the current user. Failing to resolve a home
    /// directory means we are on a layout we do not understand.
    ///
    /// `CACHESWEEP_DARWIN_CACHE_DIR` overrides the `getconf` lookup, so a
    /// test harness can pin the darwin root inside a fixture home instead
    /// of resolving bundle tokens against the real `/var/folders` root.
    pub fn discover() -> Result<Self, SweepError> {
        let home = dirs::home_dir().ok_or_else(|| {
            SweepError::UnsupportedPlatform("cannot determine home directory".into())
        })?;
        let mut roots = Self::for_home(home);
        if let Some(dir) = std::env::var_os("CACHESWEEP_DARWIN_CACHE_DIR") {
            roots.darwin_caches = PathBuf::from(dir);
        } else if let Some(darwin) = darwin_user_cache_dir() {
            roots.darwin_caches = darwin;
        }
        Ok(roots)
    }

    /// Roots for an explicit home directory, with the darwin cache root
    /// collapsed onto ~/Library/Caches. Used off-macOS and in tests.
    pub fn for_home(home: PathBuf) -> Self {
        let user_caches = home.join("Library/Caches");
        Self {
            home,
            darwin_caches: user_caches.clone(),
            user_caches,
        }
    }
}

/// Ask the platform for the per-user darwin cache directory.
fn darwin_user_cache_dir() -> Option<PathBuf> {
    let output = std::process::Command::new("getconf")
        .arg("DARWIN_USER_CACHE_DIR")
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let dir = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if dir.is_empty() || dir.starts_with("undefined") {
        return None;
    }
    Some(PathBuf::from(dir))
}

/// Resolve a registry pattern to the concrete paths that currently exist.
///
/// `~/` and absolute patterns pass through (after tilde expansion);
/// bundle-identifier tokens resolve under the darwin cache root; any other
/// relative token resolves under the user cache directory. Wildcards are
/// expanded here, before sizing and deletion — a pattern matching nothing
/// resolves to an empty list and is not an error.
pub fn resolve_pattern(pattern: &str, roots: &CacheRoots) -> Vec<PathBuf> {
    let base = if let Some(rest) = pattern.strip_prefix("~/") {
        roots.home.join(rest)
    } else if pattern.starts_with('/') {
        PathBuf::from(pattern)
    } else if BUNDLE_PREFIXES.iter().any(|p| pattern.starts_with(p)) {
        roots.darwin_caches.join(pattern)
    } else {
        roots.user_caches.join(pattern)
    };

    if base.to_string_lossy().contains('*') {
        expand_glob(&base)
    } else if base.exists() {
        vec![base]
    } else {
        Vec::new()
    }
}

fn expand_glob(pattern: &Path) -> Vec<PathBuf> {
    match glob::glob(&pattern.to_string_lossy()) {
        Ok(entries) => entries.filter_map(|e| e.ok()).collect(),
        Err(_) => Vec::new(),
    }
}
