pub mod confirm;
pub mod executor;

use crate::cli::args::OutputFormat;
use crate::cli::output;
use crate::common::format;
use crate::common::logfile::EventLog;
use crate::common::safety::SafetyPolicy;
use crate::registry::CleanupModule;
use crate::scan::{self, resolve::CacheRoots};
use crate::{EXIT_FAILURE, EXIT_OK, EXIT_PROCESS_ABORT};
use confirm::{Confirm, Decision};

/// Which of a module's associated processes are currently running.
/// Injectable like [`Confirm`], so tests can simulate a running browser;
/// production wires in `system::running_processes`.
pub type ProcessProbe = for<'a> fn(&[&'a str]) -> Vec<&'a str>;

/// What to do when a selected module's application is currently running.
/// Browsers rewrite their caches constantly, so that pipeline refuses to
/// continue without an explicit go-ahead; the dev pipeline only warns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessGate {
    WarnOnly,
    ConfirmOrAbort,
}

#[derive(Debug)]
pub struct RunOptions {
    pub list: bool,
    pub dry_run: bool,
    pub force: bool,
    pub process_gate: ProcessGate,
    pub process_probe: ProcessProbe,
    pub format: OutputFormat,
    pub show_progress: bool,
}

/// The shared pipeline shape: detect, then report, or confirm and execute,
/// and always end with the summary.
pub fn run(
    modules: &[&CleanupModule],
    opts: &RunOptions,
    roots: &CacheRoots,
    policy: &SafetyPolicy,
    confirmer: &mut dyn Confirm,
    log: &mut EventLog,
) -> u8 {
    let detection = scan::detect(modules, roots, opts.show_progress);

    if opts.list {
        match opts.format {
            OutputFormat::Json => output::print_detection_json(log, &detection),
            OutputFormat::Human => output::print_detection(log, &detection),
        }
        return EXIT_OK;
    }

    if detection.is_empty() {
        log.success("Nothing to clean.");
        return EXIT_OK;
    }

    output::print_detection(log, &detection);

    if !opts.dry_run {
        let running: Vec<&str> = modules
            .iter()
            .flat_map(|m| (opts.process_probe)(m.processes))
            .collect();
        if !running.is_empty() {
            log.warn(format!(
                "running applications may be using these caches: {}",
                running.join(", ")
            ));
            if opts.process_gate == ProcessGate::ConfirmOrAbort && !opts.force {
                let prompt = "  ? Continue while they are running?";
                if ask(confirmer, log, prompt) == Decision::Abort {
                    log.error("aborted: close the running applications and try again");
                    return EXIT_PROCESS_ABORT;
                }
            }
        }

        if !opts.force {
            let paths = detection.items.iter().filter(|i| i.path().is_some()).count();
            let commands = detection.items.len() - paths;
            let prompt = if paths > 0 {
                format!(
                    "  ? Delete {} ({})?",
                    format::format_count(paths),
                    format::format_size(detection.estimated_bytes)
                )
            } else {
                format!("  ? Run {} cleanup command(s)?", commands)
            };
            if ask(confirmer, log, &prompt) == Decision::Abort {
                log.info("Aborted — nothing was deleted.");
                return EXIT_FAILURE;
            }
        }
    }

    let report = executor::execute(&detection.items, policy, opts.dry_run, log);
    output::print_summary(log, &detection, &report);

    EXIT_OK
}

/// Mirror the prompt into the event log before handing it to the confirmer,
/// which prints it to the terminal itself.
fn ask(confirmer: &mut dyn Confirm, log: &mut EventLog, prompt: &str) -> Decision {
    log.mirror(format!("{} [y/N]", prompt.trim_start()));
    confirmer.confirm(prompt)
}
