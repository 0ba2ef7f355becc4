use super::CleanupModule;

/// Browser cache registry.
///
/// Bundle-identifier tokens resolve against the per-user darwin cache root
/// (`getconf DARWIN_USER_CACHE_DIR`); `~/` paths against the home directory.
/// Declaration order is output order.
pub static MODULES: &[CleanupModule] = &[
    CleanupModule {
        id: "safari",
        name: "Safari",
        processes: &["Safari", "Safari Technology Preview"],
        tool: None,
        command: None,
        patterns: &[
            "com.apple.Safari",
            "~/Library/Caches/com.apple.Safari",
            "~/Library/Caches/com.apple.WebKit.Networking",
        ],
    },
    CleanupModule {
        id: "chrome",
        name: "Google Chrome",
        processes: &["Google Chrome"],
        tool: None,
        command: None,
        patterns: &[
            "com.google.Chrome",
            "~/Library/Caches/Google/Chrome",
        ],
    },
    CleanupModule {
        id: "firefox",
        name: "Firefox",
        processes: &["firefox"],
        tool: None,
        command: None,
        patterns: &[
            "org.mozilla.firefox",
            "~/Library/Caches/Firefox",
            "~/Library/Caches/Mozilla/updates",
        ],
    },
    CleanupModule {
        id: "edge",
        name: "Microsoft Edge",
        processes: &["Microsoft Edge"],
        tool: None,
        command: None,
        patterns: &[
            "com.microsoft.edgemac",
            "~/Library/Caches/Microsoft Edge",
        ],
    },
    CleanupModule {
        id: "brave",
        name: "Brave",
        processes: &["Brave Browser"],
        tool: None,
        command: None,
        patterns: &[
            "com.brave.Browser",
            "~/Library/Caches/BraveSoftware",
        ],
    },
    CleanupModule {
        id: "opera",
        name: "Opera",
        processes: &["Opera"],
        tool: None,
        command: None,
        patterns: &[
            "com.operasoftware.Opera",
            "~/Library/Caches/com.operasoftware.Opera",
        ],
    },
    CleanupModule {
        id: "vivaldi",
        name: "Vivaldi",
        processes: &["Vivaldi"],
        tool: None,
        command: None,
        patterns: &[
            "com.vivaldi.Vivaldi",
            "~/Library/Caches/com.vivaldi.Vivaldi",
        ],
    },
    CleanupModule {
        id: "arc",
        name: "Arc",
        processes: &["Arc"],
        tool: None,
        command: None,
        patterns: &[
            "company.thebrowser.Browser",
            "~/Library/Caches/Arc",
        ],
    },
];
