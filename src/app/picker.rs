//! Native folder chooser.

use std::path::{Path, PathBuf};

/// Lets the user choose a directory. `None` means the dialog was cancelled.
pub trait FolderPicker {
    fn pick_folder(&self, title: &str, start: Option<&Path>) -> Option<PathBuf>;
}

/// [`FolderPicker`] backed by the platform dialog from `rfd`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RfdFolderPicker;

impl FolderPicker for RfdFolderPicker {
    fn pick_folder(&self, title: &str, start: Option<&Path>) -> Option<PathBuf> {
        let mut dlg = rfd::FileDialog::new().set_title(title);
        if let Some(dir) = start.filter(|d| d.is_dir()) {
            dlg = dlg.set_directory(dir);
        }
        dlg.pick_folder()
    }
}
