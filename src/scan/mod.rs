pub mod resolve;
pub mod size;

use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::registry::CleanupModule;
use crate::system;
use resolve::CacheRoots;

/// What a detected item points at: a concrete path to delete, or a cleanup
/// command to run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Path(PathBuf),
    Command(String),
}

/// One detected cleanup target, produced per module per resolved path (or
/// per command). Lives for the duration of the run only.
#[derive(Debug, Clone, Serialize)]
pub struct DetectedItem {
    pub module_id: String,
    pub module_name: String,
    pub target: Target,
    /// Measured size in bytes; commands have no estimate and carry 0
    pub size_bytes: u64,
}

impl DetectedItem {
    pub fn path(&self) -> Option<&PathBuf> {
        match &self.target {
            Target::Path(p) => Some(p),
            Target::Command(_) => None,
        }
    }
}

/// The detector's output: items in stable module/pattern order, plus the
/// estimated reclaimable total.
#[derive(Debug, Default, Serialize)]
pub struct Detection {
    pub items: Vec<DetectedItem>,
    pub estimated_bytes: u64,
}

impl Detection {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Run detection over the selected modules.
///
/// A module whose existence-check tool is absent is dropped silently. Path
/// items are recorded only when they measure larger than zero; command items
/// are always recorded, with size 0. Processing order follows the registry's
/// declaration order so repeated runs report identically.
///
/// Distinct patterns can resolve to the same directory (a bundle token and
/// its `~/Library/Caches` twin, when the darwin root collapses onto the user
/// cache directory), so each resolved path is recorded at most once.
pub fn detect(modules: &[&CleanupModule], roots: &CacheRoots, show_progress: bool) -> Detection {
    let pb = if show_progress {
        let pb = ProgressBar::new(modules.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("━━░"),
        );
        Some(pb)
    } else {
        None
    };

    let mut detection = Detection::default();
    let mut seen = std::collections::HashSet::new();

    for module in modules {
        if let Some(ref pb) = pb {
            pb.set_message(format!("Measuring {}...", module.name));
        }

        if let Some(tool) = module.tool {
            if !system::tool_on_path(tool) {
                tracing::debug!(module = module.id, tool, "tool not found, skipping");
                if let Some(ref pb) = pb {
                    pb.inc(1);
                }
                continue;
            }
        }

        if let Some(command) = module.command {
            detection.items.push(DetectedItem {
                module_id: module.id.to_string(),
                module_name: module.name.to_string(),
                target: Target::Command(command.to_string()),
                size_bytes: 0,
            });
        }

        for pattern in module.patterns {
            for path in resolve::resolve_pattern(pattern, roots) {
                if !seen.insert(path.clone()) {
                    continue;
                }
                let size_bytes = size::size_of(&path);
                if size_bytes == 0 {
                    continue;
                }
                detection.estimated_bytes += size_bytes;
                detection.items.push(DetectedItem {
                    module_id: module.id.to_string(),
                    module_name: module.name.to_string(),
                    target: Target::Path(path),
                    size_bytes,
                });
            }
        }

        if let Some(ref pb) = pb {
            pb.inc(1);
        }
    }

    if let Some(ref pb) = pb {
        pb.finish_and_clear();
    }

    detection
}
