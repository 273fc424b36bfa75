//! Seams to the platform: file picking, user messages and chart rendering.

use std::path::PathBuf;

use crate::{chart::Chart, error::Notice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

pub const JSON_FILE_FILTERS: [FileFilter; 2] = [
    FileFilter {
        name: "JSON files",
        extensions: &["json"],
    },
    FileFilter {
        name: "All files",
        extensions: &["*"],
    },
];

pub trait FileChooser {
    /// Returns `None` when the user dismissed the dialog.
    fn choose_file_for_open(&mut self, title: &str, filters: &[FileFilter]) -> Option<PathBuf>;
}

pub trait Notifier {
    fn notify(&mut self, notice: &Notice);

    /// Asks a yes/no question; `true` means the user accepted.
    fn confirm(&mut self, title: &str, text: &str) -> bool;
}

/// Turns a [`Chart`] into something the presentation layer can draw.
///
/// Every handle returned by `render` is handed back to `dispose` exactly once
/// by the session that owns it.
pub trait ChartRenderer {
    type Handle;

    fn render(&mut self, chart: &Chart) -> Self::Handle;

    fn dispose(&mut self, handle: Self::Handle);
}
