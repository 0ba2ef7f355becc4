use std::path::Path;

use crate::common::format;
use crate::common::logfile::EventLog;
use crate::common::safety::SafetyPolicy;
use crate::scan::{DetectedItem, Target};

/// Tally of one execution pass. `reclaimed_bytes` counts only items that
/// were actually removed (or would be, in dry-run), so it never exceeds the
/// detector's estimate.
#[derive(Debug, Default)]
pub struct ExecutionReport {
    pub dry_run: bool,
    pub reclaimed_bytes: u64,
    pub removed: usize,
    pub commands_run: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
}

/// Delete every validated path item and run every command item.
///
/// Per-item failures are warnings; the loop always runs to completion so a
/// single stubborn cache cannot stop the rest of the cleanup.
pub fn execute(
    items: &[DetectedItem],
    policy: &SafetyPolicy,
    dry_run: bool,
    log: &mut EventLog,
) -> ExecutionReport {
    let mut report = ExecutionReport {
        dry_run,
        ..Default::default()
    };

    for item in items {
        match &item.target {
            Target::Path(path) => execute_path(item, path, policy, dry_run, log, &mut report),
            Target::Command(command) => execute_command(item, command, dry_run, log, &mut report),
        }
    }

    report
}

fn execute_path(
    item: &DetectedItem,
    path: &Path,
    policy: &SafetyPolicy,
    dry_run: bool,
    log: &mut EventLog,
    report: &mut ExecutionReport,
) {
    if !policy.permits(path) {
        log.warn(format!(
            "skipping unsafe path for {}: {}",
            item.module_name,
            format::format_path(path)
        ));
        report.skipped += 1;
        return;
    }

    if dry_run {
        log.info(format!(
            "would remove {} ({})",
            format::format_path(path),
            format::format_size(item.size_bytes)
        ));
        report.removed += 1;
        report.reclaimed_bytes += item.size_bytes;
        return;
    }

    match remove_path(path) {
        Ok(()) => {
            log.success(format!(
                "removed {} ({})",
                format::format_path(path),
                format::format_size(item.size_bytes)
            ));
            report.removed += 1;
            report.reclaimed_bytes += item.size_bytes;
        }
        Err(err) => {
            log.warn(format!(
                "failed to remove {}: {}",
                format::format_path(path),
                err
            ));
            report.errors.push(format!("{}: {}", path.display(), err));
        }
    }
}

fn execute_command(
    item: &DetectedItem,
    command: &str,
    dry_run: bool,
    log: &mut EventLog,
    report: &mut ExecutionReport,
) {
    if dry_run {
        log.info(format!("would run: {}", command));
        return;
    }

    log.info(format!("running: {}", command));
    let status = std::process::Command::new("sh")
        .args(["-c", command])
        .status();
    match status {
        Ok(status) if status.success() => {
            log.success(format!("{} cleanup finished", item.module_name));
            report.commands_run += 1;
        }
        Ok(status) => {
            log.warn(format!("'{}' exited with {}", command, status));
            report.errors.push(format!("{}: {}", command, status));
        }
        Err(err) => {
            log.warn(format!("'{}' failed to start: {}", command, err));
            report.errors.push(format!("{}: {}", command, err));
        }
    }
}

fn remove_path(path: &Path) -> std::io::Result<()> {
    if path.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    }
}
