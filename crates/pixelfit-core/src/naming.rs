//! Output file naming and human-readable sizes.
//!
//! Result files are named after the source with the output size appended:
//! - `holiday.jpeg` → `holiday_1000x500.jpg`
//! - `scan.final.png` → `scan.final_800x600.webp`
//! - `README` → `README_64x64.png`

use crate::encode::OutputFormat;

/// Token used when the original name has no extension.
const UNKNOWN_FORMAT: &str = "img";

/// Strip the last extension from a file name.
///
/// A trailing dot with nothing after it is not an extension.
pub fn file_stem(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() => stem,
        _ => name,
    }
}

/// Suggested download name: `<stem>_<width>x<height>.<ext>`.
pub fn output_file_name(source_name: &str, width: u32, height: u32, format: OutputFormat) -> String {
    format!(
        "{}_{}x{}.{}",
        file_stem(source_name),
        width,
        height,
        format.extension()
    )
}

/// Format token of the original file, taken from its extension.
///
/// Returns the text after the last dot, or `"img"` when there is none.
pub fn original_format(source_name: &str) -> String {
    match source_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_string(),
        _ => UNKNOWN_FORMAT.to_string(),
    }
}

/// Format a byte count as `B`, `KB` (one decimal) or `MB` (two decimals).
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    }
}
