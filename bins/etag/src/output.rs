//! Terminal output helpers

use etag_core::DecodedTag;
use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a precondition outcome to stderr
    pub fn precondition(header: &str, passed: bool) {
        if passed {
            eprintln!("{} {} passed", "✓".green(), header);
        } else {
            eprintln!("{} {} failed", "✗".red(), header);
        }
    }
}

/// Format a file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    match bytes {
        b if b >= GB => format!("{:.2} GB", b as f64 / GB as f64),
        b if b >= MB => format!("{:.2} MB", b as f64 / MB as f64),
        b if b >= KB => format!("{:.2} KB", b as f64 / KB as f64),
        b => format!("{} B", b),
    }
}

/// Human-readable lines for a decoded tag
pub fn describe(decoded: &DecodedTag) -> Vec<String> {
    let mut lines = vec![
        format!("{:<6} {}", "Tag:".bold(), decoded.etag),
        format!("{:<6} {}", "Kind:".bold(), if decoded.is_stat() { "metadata" } else { "content" }),
        format!("{:<6} {}", "Weak:".bold(), decoded.weak),
        format!("{:<6} {} ({})", "Size:".bold(), decoded.size, format_size(decoded.size)),
    ];
    if let Some(mtime) = decoded.mtime {
        lines.push(format!("{:<6} {}", "Mtime:".bold(), mtime.to_rfc3339()));
    }
    if let Some(hash) = &decoded.hash {
        lines.push(format!("{:<6} {}", "Hash:".bold(), hash));
    }
    lines
}
