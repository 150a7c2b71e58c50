//! The seam between scripts and the editor host
//!
//! Every accessor in the crate goes through [`Host`]. A production adapter
//! forwards to the host's message API; [`MemoryHost`] keeps documents in
//! memory for tests and for the command-line runner.

mod command;
mod memory;

use std::ops::Range;
use std::path::{Path, PathBuf};

pub use command::MenuCommand;
pub use memory::MemoryHost;

use crate::text::Encoding;

/// Native window handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

/// Line ending mode of the active document, with the host's numeric ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EolMode {
    CrLf = 0,
    Cr = 1,
    #[default]
    Lf = 2,
}

impl EolMode {
    pub fn as_str(self) -> &'static str {
        match self {
            EolMode::CrLf => "\r\n",
            EolMode::Cr => "\r",
            EolMode::Lf => "\n",
        }
    }
}

/// Host-side operations. All offsets are byte offsets into the text
/// returned by [`Host::read_text`], in the active document's encoding.
pub trait Host {
    // Document buffer

    /// Full text of the active document
    fn read_text(&self) -> Vec<u8>;
    fn read_encoding(&self) -> Encoding;
    /// Replace `range` with `bytes`
    fn write_range(&mut self, range: Range<usize>, bytes: &[u8]);
    fn send_command(&mut self, command: MenuCommand);

    // Selection and caret

    fn selection(&self) -> Range<usize>;
    fn set_selection_start(&mut self, pos: usize);
    fn set_selection_end(&mut self, pos: usize);
    /// Collapse the selection at `pos` and scroll it into view
    fn goto_pos(&mut self, pos: usize);
    fn add_selection(&mut self, range: Range<usize>);

    // History

    fn can_undo(&self) -> bool;
    fn can_redo(&self) -> bool;
    fn undo(&mut self);
    fn redo(&mut self);

    // Documents

    fn eol_mode(&self) -> EolMode;
    fn current_path(&self) -> PathBuf;
    /// Directory of the host executable
    fn host_directory(&self) -> PathBuf;
    fn open_documents(&self) -> Vec<PathBuf>;
    fn switch_to_document(&mut self, path: &Path) -> bool;
    fn open_document(&mut self, path: &Path) -> bool;
    fn save_all(&mut self);

    // Windows

    fn main_window(&self) -> WindowHandle;
    fn set_window_owner(&mut self, window: WindowHandle, owner: Option<WindowHandle>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eol_strings() {
        assert_eq!(EolMode::CrLf.as_str(), "\r\n");
        assert_eq!(EolMode::Cr.as_str(), "\r");
        assert_eq!(EolMode::Lf.as_str(), "\n");
        assert_eq!(EolMode::default(), EolMode::Lf);
    }
}
