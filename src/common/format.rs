use colored::*;

/// Format bytes into human-readable size string
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.2} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format size with color based on magnitude
pub fn format_size_colored(bytes: u64) -> ColoredString {
    let s = format_size(bytes);
    const GB: u64 = 1024 * 1024 * 1024;
    const MB100: u64 = 100 * 1024 * 1024;

    if bytes >= GB {
        s.red().bold()
    } else if bytes >= MB100 {
        s.yellow()
    } else {
        s.white()
    }
}

/// Format an item count with appropriate plural
pub fn format_count(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

/// Format a path for display, replacing home directory with ~
pub fn format_path(path: &std::path::Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
