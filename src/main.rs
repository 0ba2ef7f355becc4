use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cachesweep::cli::args::{Cli, Commands, CompletionShell, OutputFormat};
use cachesweep::common::config::Config;
use cachesweep::common::errors::SweepError;
use cachesweep::common::logfile::EventLog;
use cachesweep::common::safety::SafetyPolicy;
use cachesweep::pipeline::confirm::{Confirm, Decision, Interactive, Preset};
use cachesweep::pipeline::{self, ProcessGate, RunOptions};
use cachesweep::registry::{self, CleanupModule};
use cachesweep::scan::resolve::CacheRoots;
use cachesweep::system;
use cachesweep::{EXIT_FAILURE, EXIT_OK};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("  ✗ {:#}", err);
            let code = err
                .downcast_ref::<SweepError>()
                .map(|e| e.exit_code())
                .unwrap_or(EXIT_FAILURE);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    // Completions need no environment and must work everywhere
    if let Commands::Completions { shell } = &cli.command {
        use clap::CommandFactory;
        let mut cmd = Cli::command();
        let shell = match shell {
            CompletionShell::Bash => clap_complete::Shell::Bash,
            CompletionShell::Zsh => clap_complete::Shell::Zsh,
            CompletionShell::Fish => clap_complete::Shell::Fish,
        };
        clap_complete::generate(shell, &mut cmd, "cachesweep", &mut std::io::stdout());
        return Ok(EXIT_OK);
    }

    let config = Config::load()?;

    if cli.no_color || config.no_color {
        colored::control::set_override(false);
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("cachesweep=debug")
            .init();
    }

    system::preflight()?;

    let roots = CacheRoots::discover()?;
    let policy = SafetyPolicy::standard(&roots);

    let log_path = cli
        .log
        .clone()
        .or_else(|| config.log_file.as_ref().map(Into::into));
    let mut log = EventLog::open(log_path.as_deref(), cli.quiet)?;

    for id in &config.exclude {
        if registry::find(id).is_none() {
            log.warn(format!("config excludes unknown module '{}'", id));
        }
    }

    let (table, selected, gate, run_args) = match &cli.command {
        Commands::Browsers(args) => (
            registry::browsers::MODULES,
            args.selected_ids(),
            ProcessGate::ConfirmOrAbort,
            &args.run,
        ),
        Commands::Dev(args) => (
            registry::devtools::MODULES,
            args.selected_ids(),
            ProcessGate::WarnOnly,
            &args.run,
        ),
        Commands::Completions { .. } => unreachable!("handled above"),
    };

    let modules = select(table, &selected, &config);
    if modules.is_empty() {
        log.warn("no modules selected; check your flags and config excludes");
        return Ok(EXIT_OK);
    }

    let opts = RunOptions {
        list: run_args.list,
        dry_run: run_args.dry_run,
        force: run_args.force,
        process_gate: gate,
        process_probe: system::running_processes,
        format: cli.format,
        show_progress: !cli.quiet && cli.format == OutputFormat::Human,
    };

    // Forced runs never read stdin
    let mut interactive = Interactive;
    let mut forced = Preset(Decision::Proceed);
    let confirmer: &mut dyn Confirm = if run_args.force {
        &mut forced
    } else {
        &mut interactive
    };

    Ok(pipeline::run(&modules, &opts, &roots, &policy, confirmer, &mut log))
}

/// Apply CLI selection flags and the config exclude list to one pipeline's
/// module table. No flags means every module; an explicit flag wins over the
/// exclude list.
fn select(
    table: &'static [CleanupModule],
    selected: &[&str],
    config: &Config,
) -> Vec<&'static CleanupModule> {
    table
        .iter()
        .filter(|m| {
            if selected.is_empty() {
                if config.is_excluded(m.id) {
                    tracing::debug!(module = m.id, "excluded by config");
                    return false;
                }
                true
            } else {
                selected.contains(&m.id)
            }
        })
        .collect()
}
