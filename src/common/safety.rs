use std::path::{Component, Path, PathBuf};

use crate::scan::resolve::CacheRoots;

/// Allow-list gate that every deletion target must pass.
///
/// A path is permitted only when it sits strictly under one of the allowed
/// cache/log/tool-data roots. A handful of paths are denied no matter what
/// the allow-list says — this is the safety net against bugs in the registry
/// tables.
pub struct SafetyPolicy {
    allowed_roots: Vec<PathBuf>,
    denied: Vec<PathBuf>,
}

impl SafetyPolicy {
    /// The standard policy for a discovered set of cache roots.
    pub fn standard(roots: &CacheRoots) -> Self {
        let home = &roots.home;
        let allowed_roots = vec![
            roots.user_caches.clone(),
            roots.darwin_caches.clone(),
            home.join("Library/Logs"),
            home.join("Library/Developer"),
            home.join(".npm"),
            home.join(".gradle"),
            home.join(".cargo"),
            home.join(".pub-cache"),
            std::env::temp_dir(),
            PathBuf::from("/private/var/folders"),
            PathBuf::from("/private/tmp"),
            PathBuf::from("/tmp"),
        ];
        let denied = vec![
            home.clone(),
            home.join("Documents"),
            home.join("Desktop"),
        ];
        Self {
            allowed_roots,
            denied,
        }
    }

    /// Build a policy from explicit roots, for tests.
    pub fn with_roots(allowed_roots: Vec<PathBuf>, denied: Vec<PathBuf>) -> Self {
        Self {
            allowed_roots,
            denied,
        }
    }

    /// Pure predicate: may `path` be deleted?
    pub fn permits(&self, path: &Path) -> bool {
        if path.as_os_str().is_empty() {
            return false;
        }
        if path == Path::new("/") {
            return false;
        }
        // starts_with is lexical, so a `..` could escape an allowed root
        if path.components().any(|c| c == Component::ParentDir) {
            return false;
        }
        if self.denied.iter().any(|d| path == d) {
            return false;
        }
        // Strictly under an allowed root — never the root itself
        self.allowed_roots
            .iter()
            .any(|root| path.starts_with(root) && path != root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(home: &Path) -> SafetyPolicy {
        let roots = CacheRoots::for_home(home.to_path_buf());
        SafetyPolicy::standard(&roots)
    }

    #[test]
    fn test_denies_empty_and_root() {
        let p = policy(Path::new("/Users/dev"));
        assert!(!p.permits(Path::new("")));
        assert!(!p.permits(Path::new("/")));
    }

    #[test]
    fn test_denies_home_and_personal_dirs() {
        let p = policy(Path::new("/Users/dev"));
        assert!(!p.permits(Path::new("/Users/dev")));
        assert!(!p.permits(Path::new("/Users/dev/Documents")));
        assert!(!p.permits(Path::new("/Users/dev/Desktop")));
    }

    #[test]
    fn test_denies_paths_outside_allow_list() {
        let p = policy(Path::new("/Users/dev"));
        assert!(!p.permits(Path::new("/Users/dev/Pictures/photo.jpg")));
        assert!(!p.permits(Path::new("/Applications/Safari.app")));
        assert!(!p.permits(Path::new("/etc/hosts")));
    }

    #[test]
    fn test_denies_parent_dir_escapes() {
        let p = policy(Path::new("/Users/dev"));
        assert!(!p.permits(Path::new("/Users/dev/Library/Caches/../../Documents")));
        assert!(!p.permits(Path::new("/tmp/../etc/hosts")));
    }

    #[test]
    fn test_denies_allowed_root_itself() {
        let p = policy(Path::new("/Users/dev"));
        assert!(!p.permits(Path::new("/Users/dev/Library/Caches")));
    }

    #[test]
    fn test_allows_under_cache_roots() {
        let p = policy(Path::new("/Users/dev"));
        assert!(p.permits(Path::new("/Users/dev/Library/Caches/com.example.app")));
        assert!(p.permits(Path::new("/Users/dev/Library/Logs/old.log")));
        assert!(p.permits(Path::new(
            "/Users/dev/Library/Developer/Xcode/DerivedData/MyApp-abc"
        )));
        assert!(p.permits(Path::new("/Users/dev/.npm/_cacache")));
        assert!(p.permits(Path::new("/tmp/scratch")));
    }

    #[test]
    fn test_with_roots_override() {
        let p = SafetyPolicy::with_roots(vec![PathBuf::from("/srv/cache")], vec![]);
        assert!(p.permits(Path::new("/srv/cache/foo")));
        assert!(!p.permits(Path::new("/srv/cache")));
        assert!(!p.permits(Path::new("/srv/other")));
    }
}
