//! Human-readable byte sizes.

const KB: f64 = 1024.0;
const MB: f64 = 1024.0 * 1024.0;

/// Format a byte count the way the file list shows it.
pub fn format_size(bytes: u64) -> String {
    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / MB)
    }
}
