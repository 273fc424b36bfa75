use std::path::PathBuf;

use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use windrose_core::{FileChooser, FileFilter, Notice, NoticeKind, Notifier};

#[derive(Debug, Default)]
pub struct RfdFileChooser;

impl FileChooser for RfdFileChooser {
    fn choose_file_for_open(&mut self, title: &str, filters: &[FileFilter]) -> Option<PathBuf> {
        let dialog = filters
            .iter()
            .fold(rfd::FileDialog::new().set_title(title), |dialog, filter| {
                dialog.add_filter(filter.name, filter.extensions)
            });
        dialog.pick_file()
    }
}

/// Shows notices as native message boxes and keeps the latest one for the
/// status line.
#[derive(Debug, Default)]
pub struct RfdNotifier {
    last: Option<Notice>,
}

impl RfdNotifier {
    pub fn last(&self) -> Option<&Notice> {
        self.last.as_ref()
    }
}

impl Notifier for RfdNotifier {
    fn notify(&mut self, notice: &Notice) {
        let level = match notice.kind {
            NoticeKind::Info => MessageLevel::Info,
            NoticeKind::Warning => MessageLevel::Warning,
        };
        MessageDialog::new()
            .set_level(level)
            .set_title(notice.title.as_str())
            .set_description(notice.text.as_str())
            .set_buttons(MessageButtons::Ok)
            .show();
        self.last = Some(notice.clone());
    }

    fn confirm(&mut self, title: &str, text: &str) -> bool {
        let answer = MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(title)
            .set_description(text)
            .set_buttons(MessageButtons::OkCancel)
            .show();
        matches!(answer, MessageDialogResult::Ok | MessageDialogResult::Yes)
    }
}
