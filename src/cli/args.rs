use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// cachesweep — a safety-first macOS cache cleanup utility
#[derive(Parser, Debug)]
#[command(
    name = "cachesweep",
    version,
    about = "Reclaim disk space from browser and developer tool caches",
    long_about = "cachesweep knows where browsers and developer tools keep disposable\n\
                  data, measures it, and removes it after asking you first.",
    after_help = "EXAMPLES:\n  \
        cachesweep browsers --list             Show browser caches and sizes\n  \
        cachesweep browsers --safari --chrome  Clean only Safari and Chrome\n  \
        cachesweep browsers -n                 Dry run across all browsers\n  \
        cachesweep dev --xcode -y              Clean Xcode caches, no prompt\n  \
        cachesweep dev --log ~/sweep.log       Clean dev caches, keep a log\n  \
        cachesweep completions zsh             Generate shell completions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Append a timestamped event log to FILE
    #[arg(long, global = true, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode — minimal output
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clean browser caches
    Browsers(BrowserArgs),

    /// Clean developer tool caches
    Dev(DevArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

/// Flags shared by both cleanup pipelines
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Select every module (the default when no module flag is given)
    #[arg(long)]
    pub all: bool,

    /// Report detected caches and sizes without deleting anything
    #[arg(long)]
    pub list: bool,

    /// Show what would be removed without removing it
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', visible_alias = "yes")]
    pub force: bool,
}

#[derive(Args, Debug, Default)]
pub struct BrowserArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Clean Safari caches
    #[arg(long)]
    pub safari: bool,

    /// Clean Google Chrome caches
    #[arg(long)]
    pub chrome: bool,

    /// Clean Firefox caches
    #[arg(long)]
    pub firefox: bool,

    /// Clean Microsoft Edge caches
    #[arg(long)]
    pub edge: bool,

    /// Clean Brave caches
    #[arg(long)]
    pub brave: bool,

    /// Clean Opera caches
    #[arg(long)]
    pub opera: bool,

    /// Clean Vivaldi caches
    #[arg(long)]
    pub vivaldi: bool,

    /// Clean Arc caches
    #[arg(long)]
    pub arc: bool,
}

impl BrowserArgs {
    /// Module ids selected by flags; empty means "all".
    pub fn selected_ids(&self) -> Vec<&'static str> {
        let flags = [
            ("safari", self.safari),
            ("chrome", self.chrome),
            ("firefox", self.firefox),
            ("edge", self.edge),
            ("brave", self.brave),
            ("opera", self.opera),
            ("vivaldi", self.vivaldi),
            ("arc", self.arc),
        ];
        flags
            .iter()
            .filter(|(_, set)| *set && !self.run.all)
            .map(|(id, _)| *id)
            .collect()
    }
}

#[derive(Args, Debug, Default)]
pub struct DevArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Clean Xcode DerivedData and caches
    #[arg(long)]
    pub xcode: bool,

    /// Clean iOS Simulator caches
    #[arg(long)]
    pub simulator: bool,

    /// Clean the Homebrew download cache
    #[arg(long)]
    pub homebrew: bool,

    /// Clean the CocoaPods cache
    #[arg(long)]
    pub cocoapods: bool,

    /// Clean the npm cache
    #[arg(long)]
    pub npm: bool,

    /// Clean the Yarn cache
    #[arg(long)]
    pub yarn: bool,

    /// Prune the pnpm store
    #[arg(long)]
    pub pnpm: bool,

    /// Clean the pip download cache
    #[arg(long)]
    pub pip: bool,

    /// Clean the Go build cache
    #[arg(long)]
    pub go: bool,

    /// Clean Gradle caches
    #[arg(long)]
    pub gradle: bool,

    /// Clean the Cargo registry cache
    #[arg(long)]
    pub cargo: bool,

    /// Clean Flutter and pub caches
    #[arg(long)]
    pub flutter: bool,

    /// Prune Docker images, containers, and build cache
    #[arg(long)]
    pub docker: bool,
}

impl DevArgs {
    /// Module ids selected by flags; empty means "all".
    pub fn selected_ids(&self) -> Vec<&'static str> {
        let flags = [
            ("xcode", self.xcode),
            ("simulator", self.simulator),
            ("homebrew", self.homebrew),
            ("cocoapods", self.cocoapods),
            ("npm", self.npm),
            ("yarn", self.yarn),
            ("pnpm", self.pnpm),
            ("pip", self.pip),
            ("go", self.go),
            ("gradle", self.gradle),
            ("cargo", self.cargo),
            ("flutter", self.flutter),
            ("docker", self.docker),
        ];
        flags
            .iter()
            .filter(|(_, set)| *set && !self.run.all)
            .map(|(id, _)| *id)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    #[test]
    fn test_selection_flags_match_registry_ids() {
        let mut browsers = BrowserArgs::default();
        browsers.safari = true;
        browsers.chrome = true;
        browsers.firefox = true;
        browsers.edge = true;
        browsers.brave = true;
        browsers.opera = true;
        browsers.vivaldi = true;
        browsers.arc = true;

        let mut dev = DevArgs::default();
        dev.xcode = true;
        dev.simulator = true;
        dev.homebrew = true;
        dev.cocoapods = true;
        dev.npm = true;
        dev.yarn = true;
        dev.pnpm = true;
        dev.pip = true;
        dev.go = true;
        dev.gradle = true;
        dev.cargo = true;
        dev.flutter = true;
        dev.docker = true;

        for id in browsers.selected_ids().iter().chain(dev.selected_ids().iter()) {
            assert!(registry::find(id).is_some(), "flag without registry entry: {}", id);
        }
        assert_eq!(browsers.selected_ids().len(), registry::browsers::MODULES.len());
        assert_eq!(dev.selected_ids().len(), registry::devtools::MODULES.len());
    }

    #[test]
    fn test_all_flag_overrides_individual_selection() {
        let mut args = BrowserArgs::default();
        args.safari = true;
        args.run.all = true;
        assert!(args.selected_ids().is_empty());
    }

    #[test]
    fn test_no_flags_means_all() {
        assert!(BrowserArgs::default().selected_ids().is_empty());
        assert!(DevArgs::default().selected_ids().is_empty());
    }
}
