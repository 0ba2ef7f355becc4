use colored::Colorize;

use crate::common::format;
use crate::common::logfile::EventLog;
use crate::pipeline::executor::ExecutionReport;
use crate::scan::{Detection, Target};

/// Human-readable detection report: one line per item, grouped under the
/// module it belongs to, ending with the estimated total.
pub fn print_detection(log: &mut EventLog, detection: &Detection) {
    if detection.is_empty() {
        log.plain("No caches found.");
        return;
    }

    log.plain(format!("\n{}", "Detected caches".bold()));
    log.plain(format!("{}", "═".repeat(50).dimmed()));

    let mut current_module = "";
    for item in &detection.items {
        if item.module_id != current_module {
            log.plain(format!("  {}", item.module_name.cyan().bold()));
            current_module = &item.module_id;
        }
        match &item.target {
            Target::Path(path) => {
                log.plain(format!(
                    "    {:<50} {:>10}",
                    format::format_path(path),
                    format::format_size_colored(item.size_bytes)
                ));
            }
            Target::Command(command) => {
                log.plain(format!("    {:<50} {:>10}", command.dimmed(), "—"));
            }
        }
    }

    log.plain(format!("{}", "─".repeat(50).dimmed()));
    log.plain(format!(
        "  Estimated reclaimable: {}",
        format::format_size_colored(detection.estimated_bytes).bold()
    ));
    log.plain("");
}

/// Machine-readable detection report on stdout, mirrored to the event log
/// as one compact line so multi-line JSON does not break the one-line-per-
/// event log format.
pub fn print_detection_json(log: &mut EventLog, detection: &Detection) {
    match serde_json::to_string_pretty(detection) {
        Ok(json) => {
            println!("{}", json);
            if let Ok(line) = serde_json::to_string(detection) {
                log.mirror(line);
            }
        }
        Err(err) => eprintln!("failed to serialize report: {}", err),
    }
}

/// End-of-run summary. In dry-run mode the reclaimed figure is the
/// projection of what a live run would remove.
pub fn print_summary(log: &mut EventLog, detection: &Detection, report: &ExecutionReport) {
    log.plain(format!("\n{}", "Final Summary".bold()));
    log.plain(format!("{}", "═".repeat(50).dimmed()));

    log.plain(format!(
        "  Estimated:   {}",
        format::format_size(detection.estimated_bytes)
    ));
    if report.dry_run {
        log.plain(format!(
            "  Would reclaim: {} ({})",
            format::format_size_colored(report.reclaimed_bytes).bold(),
            format::format_count(report.removed)
        ));
    } else {
        log.plain(format!(
            "  Reclaimed:   {} ({})",
            format::format_size_colored(report.reclaimed_bytes).bold(),
            format::format_count(report.removed)
        ));
    }
    if report.commands_run > 0 {
        log.plain(format!("  Commands run: {}", report.commands_run));
    }
    if report.skipped > 0 {
        log.plain(format!("  Skipped:     {} (outside safe roots)", report.skipped));
    }
    if !report.errors.is_empty() {
        log.warn(format!(
            "{} finished with warnings",
            format::format_count(report.errors.len())
        ));
    }
    log.plain("");
}
