pub mod browsers;
pub mod devtools;

/// One named unit of cleanup: a browser or a developer tool, with the cache
/// locations and commands associated with it.
///
/// Entries are static data, defined once per pipeline and never mutated.
/// Fields are structured rather than delimiter-encoded so a path containing
/// a comma can never corrupt a record.
#[derive(Debug)]
pub struct CleanupModule {
    /// Unique key, also the CLI selection flag name
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Process names checked before destructive action (warn only)
    pub processes: &'static [&'static str],
    /// Tool whose absence from PATH silently drops the module from the run
    pub tool: Option<&'static str>,
    /// Pre-cleanup shell command run by the executor (size unknown)
    pub command: Option<&'static str>,
    /// Cache locations, in order. Absolute paths, `~/` paths, glob patterns,
    /// or bundle-identifier tokens resolved against the darwin cache root.
    pub patterns: &'static [&'static str],
}

/// Look up a module by id across both pipelines.
pub fn find(id: &str) -> Option<&'static CleanupModule> {
    browsers::MODULES
        .iter()
        .chain(devtools::MODULES.iter())
        .find(|m| m.id == id)
}

/// All modules of both pipelines, in declaration order.
pub fn all() -> impl Iterator<Item = &'static CleanupModule> {
    browsers::MODULES.iter().chain(devtools::MODULES.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let mut seen = HashSet::new();
        for module in all() {
            assert!(seen.insert(module.id), "duplicate module id: {}", module.id);
        }
    }

    #[test]
    fn test_find_known_ids() {
        assert_eq!(find("safari").unwrap().name, "Safari");
        assert_eq!(find("homebrew").unwrap().tool, Some("brew"));
        assert!(find("bogus").is_none());
    }

    #[test]
    fn test_every_module_has_something_to_do() {
        for module in all() {
            assert!(
                !module.patterns.is_empty() || module.command.is_some(),
                "module '{}' has neither patterns nor a command",
                module.id
            );
        }
    }

    #[test]
    fn test_patterns_are_rooted() {
        // Every pattern is absolute, home-relative, or a bundle-id token
        for module in all() {
            for pattern in module.patterns {
                let ok = pattern.starts_with('/')
                    || pattern.starts_with("~/")
                    || ["com.", "org.", "company.", "ext."]
                        .iter()
                        .any(|p| pattern.starts_with(p));
                assert!(ok, "unrooted pattern '{}' in module '{}'", pattern, module.id);
            }
        }
    }
}
