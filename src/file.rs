//! The upload candidate model and the advisory checks run against it.
//!
//! Checks here are conveniences for the user; the upload endpoint repeats
//! them authoritatively.

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;

use crate::consts::{ACCEPTED_DROP_EXTENSION, MAX_UPLOAD_BYTES, SELECTED_FILE_LABEL, SIZE_LABEL_PREFIX};

/// Anything that exposes a file's name and byte size.
///
/// Implemented for `web_sys::File` in the browser and for [`SelectedFile`]
/// itself so controllers can run against a simulated surface.
pub trait FileLike {
    fn file_name(&self) -> String;
    fn byte_size(&self) -> u64;
}

/// Snapshot of the user's chosen file, taken when it is picked or dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

impl SelectedFile {
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self { name: name.into(), size }
    }

    #[must_use]
    pub fn from_file(file: &impl FileLike) -> Self {
        Self { name: file.file_name(), size: file.byte_size() }
    }

    /// Strictly above [`MAX_UPLOAD_BYTES`]; exactly 5 MiB is still accepted.
    #[must_use]
    pub fn is_oversized(&self) -> bool {
        self.size > MAX_UPLOAD_BYTES
    }

    /// Size in KiB with two decimals, e.g. `"1.50"`. Ties round up, so
    /// 128 bytes reads `"0.13"` as the templates' own labels do.
    #[must_use]
    pub fn size_kb(&self) -> String {
        let hundredths = (u128::from(self.size) * 100 + 512) / 1024;
        format!("{}.{:02}", hundredths / 100, hundredths % 100)
    }

    #[must_use]
    pub fn size_label(&self) -> String {
        format!("{SIZE_LABEL_PREFIX} {} KB", self.size_kb())
    }

    /// Panel markup for an accepted selection. The name is escaped.
    #[must_use]
    pub fn info_html(&self) -> String {
        format!(
            concat!(
                r#"<i class="bi bi-file-earmark-text"></i> "#,
                r#"<strong>{label}</strong> {name}"#,
                r#"<br><small class="text-muted">{size}</small>"#,
            ),
            label = SELECTED_FILE_LABEL,
            name = escape_html(&self.name),
            size = self.size_label(),
        )
    }
}

impl FileLike for SelectedFile {
    fn file_name(&self) -> String {
        self.name.clone()
    }

    fn byte_size(&self) -> u64 {
        self.size
    }
}

/// Whether a dropped file name ends in the accepted extension, ignoring case.
#[must_use]
pub fn has_accepted_extension(name: &str) -> bool {
    name.to_lowercase().ends_with(ACCEPTED_DROP_EXTENSION)
}

/// Escape text for safe interpolation into element markup.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
