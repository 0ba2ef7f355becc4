//! # cachesweep
//!
//! A safety-first macOS cache cleanup utility.
//!
//! cachesweep knows where browsers and developer tools keep their disposable
//! data, measures it, and removes it — after telling you what it found:
//!
//! - **Two pipelines**: browser caches (`cachesweep browsers`) and developer
//!   tool caches (`cachesweep dev`), sharing one detect/confirm/execute shape
//! - **Safety-first**: hardcoded allow-list of cache roots, dry-run support,
//!   interactive confirmation by default
//! - **Honest accounting**: only space actually freed is reported as freed
//! - **CLI as Unix citizen**: JSON list output, append-only event log,
//!   shell completions

pub mod cli;
pub mod common;
pub mod pipeline;
pub mod registry;
pub mod scan;
pub mod system;

/// Exit code for a clean run, including "nothing to do" and list mode.
pub const EXIT_OK: u8 = 0;
/// Generic failure: user abort, unwritable log file, unsupported platform.
pub const EXIT_FAILURE: u8 = 1;
/// Refused to run with root privileges.
pub const EXIT_ROOT_REFUSED: u8 = 2;
/// Browser pipeline aborted at the running-process warning.
pub const EXIT_PROCESS_ABORT: u8 = 3;
