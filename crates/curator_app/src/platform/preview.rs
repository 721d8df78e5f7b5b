//! Browser-refreshable HTML preview of the current UI state.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use curator_core::{markup, AppViewModel};

pub const PREVIEW_FILENAME: &str = "curator_preview.html";

/// Renders the view to HTML and replaces the preview file atomically
/// (write to a temp file, then rename), so a browser mid-refresh never
/// observes a half-written document.
pub fn write_preview(dir: &Path, view: &AppViewModel) -> io::Result<PathBuf> {
    let target = dir.join(PREVIEW_FILENAME);
    let temp = dir.join(format!("{PREVIEW_FILENAME}.tmp"));
    fs::write(&temp, markup::page(view))?;
    fs::rename(&temp, &target)?;
    Ok(target)
}
