//! Host environment queries: PATH lookups, running processes, privileges.

use crate::common::errors::SweepError;

/// Is an executable with this name somewhere on PATH?
pub fn tool_on_path(name: &str) -> bool {
    let Some(path_var) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&path_var).any(|dir| {
        let candidate = dir.join(name);
        candidate.is_file()
    })
}

/// Is any of the named processes currently running?
///
/// Backed by `pgrep -x`; a missing `pgrep` or a spawn failure counts as
/// "not running" — this check only feeds a warning, never a hard block.
pub fn any_process_running(names: &[&str]) -> bool {
    names.iter().any(|name| {
        std::process::Command::new("pgrep")
            .args(["-x", name])
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    })
}

/// The running processes among `names`, for the warning message.
pub fn running_processes<'a>(names: &[&'a str]) -> Vec<&'a str> {
    names
        .iter()
        .filter(|name| any_process_running(&[name]))
        .copied()
        .collect()
}

/// Are we running with root privileges?
pub fn running_as_root() -> bool {
    // Safety: geteuid has no preconditions and cannot fail
    unsafe { libc::geteuid() == 0 }
}

/// Pre-flight checks that must pass before any detection.
/// Deleting caches as root reaches paths this tool was never meant to touch;
/// CI environments can override with CACHESWEEP_ALLOW_ROOT=1.
pub fn preflight() -> Result<(), SweepError> {
    if !cfg!(unix) {
        return Err(SweepError::UnsupportedPlatform(
            "cachesweep only understands unix filesystem layouts".into(),
        ));
    }
    if running_as_root() && std::env::var_os("CACHESWEEP_ALLOW_ROOT").is_none() {
        return Err(SweepError::RunningAsRoot);
    }
    Ok(())
}
