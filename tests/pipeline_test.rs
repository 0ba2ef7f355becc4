use cachesweep::cli::args::OutputFormat;
use cachesweep::common::logfile::EventLog;
use cachesweep::common::safety::SafetyPolicy;
use cachesweep::pipeline::confirm::{Decision, Preset};
use cachesweep::pipeline::{self, ProcessGate, RunOptions};
use cachesweep::registry::CleanupModule;
use cachesweep::scan::resolve::CacheRoots;
use cachesweep::{EXIT_FAILURE, EXIT_OK, EXIT_PROCESS_ABORT};

static BROWSER: CleanupModule = CleanupModule {
    id: "browser",
    name: "Browser",
    processes: &["example-browser"],
    tool: None,
    command: None,
    patterns: &["~/Library/Caches/com.example.Browser"],
};

fn options(dry_run: bool, force: bool) -> RunOptions {
    RunOptions {
        list: false,
        dry_run,
        force,
        process_gate: ProcessGate::ConfirmOrAbort,
        process_probe: |_| Vec::new(),
        format: OutputFormat::Human,
        show_progress: false,
    }
}

fn fixture(home: &std::path::Path) -> std::path::PathBuf {
    let cache = home.join("Library/Caches/com.example.Browser");
    std::fs::create_dir_all(&cache).unwrap();
    std::fs::write(cache.join("blob"), vec![0u8; 1024]).unwrap();
    cache
}

#[test]
fn test_full_run_detects_confirms_and_deletes() {
    let home = tempfile::tempdir().unwrap();
    let cache = fixture(home.path());
    let roots = CacheRoots::for_home(home.path().to_path_buf());
    let policy = SafetyPolicy::standard(&roots);

    let code = pipeline::run(
        &[&BROWSER],
        &options(false, false),
        &roots,
        &policy,
        &mut Preset(Decision::Proceed),
        &mut EventLog::terminal_only(true),
    );

    assert_eq!(code, EXIT_OK);
    assert!(!cache.exists());
}

#[test]
fn test_declining_keeps_everything_in_place() {
    let home = tempfile::tempdir().unwrap();
    let cache = fixture(home.path());
    let roots = CacheRoots::for_home(home.path().to_path_buf());
    let policy = SafetyPolicy::standard(&roots);

    let code = pipeline::run(
        &[&BROWSER],
        &options(false, false),
        &roots,
        &policy,
        &mut Preset(Decision::Abort),
        &mut EventLog::terminal_only(true),
    );

    assert_eq!(code, EXIT_FAILURE);
    assert!(cache.exists());
}

#[test]
fn test_dry_run_never_consults_the_confirmer() {
    let home = tempfile::tempdir().unwrap();
    let cache = fixture(home.path());
    let roots = CacheRoots::for_home(home.path().to_path_buf());
    let policy = SafetyPolicy::standard(&roots);

    // An aborting confirmer proves dry-run skips the gate entirely
    let code = pipeline::run(
        &[&BROWSER],
        &options(true, false),
        &roots,
        &policy,
        &mut Preset(Decision::Abort),
        &mut EventLog::terminal_only(true),
    );

    assert_eq!(code, EXIT_OK);
    assert!(cache.exists());
}

#[test]
fn test_running_browser_decline_aborts_with_distinct_code() {
    let home = tempfile::tempdir().unwrap();
    let cache = fixture(home.path());
    let roots = CacheRoots::for_home(home.path().to_path_buf());
    let policy = SafetyPolicy::standard(&roots);

    let opts = RunOptions {
        process_probe: |names| names.to_vec(),
        ..options(false, false)
    };

    let code = pipeline::run(
        &[&BROWSER],
        &opts,
        &roots,
        &policy,
        &mut Preset(Decision::Abort),
        &mut EventLog::terminal_only(true),
    );

    assert_eq!(code, EXIT_PROCESS_ABORT);
    assert!(cache.exists());
}

#[test]
fn test_warn_only_gate_never_blocks() {
    let home = tempfile::tempdir().unwrap();
    let cache = fixture(home.path());
    let roots = CacheRoots::for_home(home.path().to_path_buf());
    let policy = SafetyPolicy::standard(&roots);

    let opts = RunOptions {
        process_gate: ProcessGate::WarnOnly,
        process_probe: |names| names.to_vec(),
        ..options(false, false)
    };

    let code = pipeline::run(
        &[&BROWSER],
        &opts,
        &roots,
        &policy,
        &mut Preset(Decision::Proceed),
        &mut EventLog::terminal_only(true),
    );

    assert_eq!(code, EXIT_OK);
    assert!(!cache.exists());
}

#[test]
fn test_empty_detection_short_circuits() {
    let home = tempfile::tempdir().unwrap();
    let roots = CacheRoots::for_home(home.path().to_path_buf());
    let policy = SafetyPolicy::standard(&roots);

    let code = pipeline::run(
        &[&BROWSER],
        &options(false, false),
        &roots,
        &policy,
        &mut Preset(Decision::Abort),
        &mut EventLog::terminal_only(true),
    );

    assert_eq!(code, EXIT_OK);
}
