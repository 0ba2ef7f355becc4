use super::CleanupModule;

/// Developer tool cache registry.
///
/// Modules with a `tool` are silently dropped when that tool is not on PATH.
/// A `command` is the tool's own cleanup entry point and runs alongside (or
/// instead of) plain path deletion.
pub static MODULES: &[CleanupModule] = &[
    CleanupModule {
        id: "xcode",
        name: "Xcode",
        processes: &["Xcode"],
        tool: Some("xcodebuild"),
        command: None,
        patterns: &[
            "~/Library/Developer/Xcode/DerivedData",
            "~/Library/Caches/com.apple.dt.Xcode",
        ],
    },
    CleanupModule {
        id: "simulator",
        name: "iOS Simulator",
        processes: &["Simulator"],
        tool: Some("xcrun"),
        command: None,
        patterns: &[
            "~/Library/Developer/CoreSimulator/Caches",
            "~/Library/Developer/CoreSimulator/Devices/*/data/Library/Caches",
        ],
    },
    CleanupModule {
        id: "homebrew",
        name: "Homebrew",
        processes: &[],
        tool: Some("brew"),
        command: Some("brew cleanup -s"),
        patterns: &["~/Library/Caches/Homebrew"],
    },
    CleanupModule {
        id: "cocoapods",
        name: "CocoaPods",
        processes: &[],
        tool: Some("pod"),
        command: None,
        patterns: &["~/Library/Caches/CocoaPods"],
    },
    CleanupModule {
        id: "npm",
        name: "npm",
        processes: &[],
        tool: Some("npm"),
        command: Some("npm cache clean --force"),
        patterns: &["~/.npm/_cacache"],
    },
    CleanupModule {
        id: "yarn",
        name: "Yarn",
        processes: &[],
        tool: Some("yarn"),
        command: Some("yarn cache clean"),
        patterns: &["~/Library/Caches/Yarn"],
    },
    CleanupModule {
        id: "pnpm",
        name: "pnpm",
        processes: &[],
        tool: Some("pnpm"),
        command: Some("pnpm store prune"),
        patterns: &["~/Library/Caches/pnpm"],
    },
    CleanupModule {
        id: "pip",
        name: "pip",
        processes: &[],
        tool: Some("pip3"),
        command: None,
        patterns: &["~/Library/Caches/pip"],
    },
    CleanupModule {
        id: "go",
        name: "Go",
        processes: &[],
        tool: Some("go"),
        command: None,
        patterns: &["~/Library/Caches/go-build"],
    },
    CleanupModule {
        id: "gradle",
        name: "Gradle",
        processes: &[],
        tool: None,
        command: None,
        patterns: &["~/.gradle/caches"],
    },
    CleanupModule {
        id: "cargo",
        name: "Cargo",
        processes: &[],
        tool: None,
        command: None,
        patterns: &["~/.cargo/registry/cache", "~/.cargo/registry/src"],
    },
    CleanupModule {
        id: "flutter",
        name: "Flutter",
        processes: &[],
        tool: Some("flutter"),
        command: None,
        patterns: &["~/.pub-cache", "~/Library/Caches/flutter_engine"],
    },
    CleanupModule {
        id: "docker",
        name: "Docker",
        processes: &["Docker"],
        tool: Some("docker"),
        command: Some("docker system prune -f"),
        patterns: &[],
    },
];
