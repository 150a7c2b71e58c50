use std::collections::HashMap;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use super::{EolMode, Host, MenuCommand, WindowHandle};
use crate::text::{Encoding, decode, encode};

/// Buffer contents and caret, as restored by undo/redo
#[derive(Debug, Clone)]
struct Snapshot {
    bytes: Vec<u8>,
    anchor: usize,
    caret: usize,
}

#[derive(Debug, Clone)]
struct Document {
    path: PathBuf,
    bytes: Vec<u8>,
    code_page: u32,
    eol: EolMode,
    anchor: usize,
    caret: usize,
    extra_selections: Vec<Range<usize>>,
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
    dirty: bool,
}

impl Document {
    fn new(path: PathBuf, bytes: Vec<u8>, encoding: Encoding) -> Self {
        Self {
            path,
            bytes,
            code_page: encoding.code_page(),
            eol: EolMode::default(),
            anchor: 0,
            caret: 0,
            extra_selections: Vec::new(),
            undo: Vec::new(),
            redo: Vec::new(),
            dirty: false,
        }
    }

    fn encoding(&self) -> Encoding {
        Encoding::from_code_page(self.code_page)
    }

    fn selection(&self) -> Range<usize> {
        self.anchor.min(self.caret)..self.anchor.max(self.caret)
    }

    fn set_selection(&mut self, range: Range<usize>) {
        let len = self.bytes.len();
        self.anchor = range.start.min(len);
        self.caret = range.end.min(len).max(self.anchor);
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            bytes: self.bytes.clone(),
            anchor: self.anchor,
            caret: self.caret,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.bytes = snapshot.bytes;
        self.anchor = snapshot.anchor;
        self.caret = snapshot.caret;
        self.extra_selections.clear();
        self.dirty = true;
    }

    fn splice(&mut self, range: Range<usize>, bytes: &[u8]) {
        let len = self.bytes.len();
        let start = range.start.min(len);
        let end = range.end.min(len).max(start);
        if start == end && bytes.is_empty() {
            return;
        }

        self.undo.push(self.snapshot());
        self.redo.clear();
        self.bytes.splice(start..end, bytes.iter().copied());
        self.dirty = true;

        let shift = |pos: usize| {
            if pos <= start {
                pos
            } else if pos >= end {
                pos - (end - start) + bytes.len()
            } else {
                start
            }
        };
        self.anchor = shift(self.anchor);
        self.caret = shift(self.caret);
        for sel in &mut self.extra_selections {
            *sel = shift(sel.start)..shift(sel.end);
        }
    }

    /// Byte length of the code point starting at `pos`
    fn char_len_at(&self, pos: usize) -> usize {
        match self.encoding() {
            Encoding::Legacy => usize::from(pos < self.bytes.len()),
            Encoding::Utf8 => {
                let rest = &self.bytes[pos.min(self.bytes.len())..];
                match rest.first() {
                    None => 0,
                    Some(_) => {
                        1 + rest[1..]
                            .iter()
                            .take_while(|b| (**b & 0xC0) == 0x80)
                            .count()
                    }
                }
            }
        }
    }
}

/// In-memory [`Host`] with tabbed documents, undo history and a clipboard.
///
/// Menu commands are recorded in the order received. File and edit commands
/// with an in-memory meaning are applied; dialogs, printing and exiting are
/// only recorded.
#[derive(Debug)]
pub struct MemoryHost {
    documents: Vec<Document>,
    current: usize,
    untitled_count: usize,
    clipboard: String,
    sent_commands: Vec<MenuCommand>,
    window_owners: HashMap<WindowHandle, WindowHandle>,
    main_window: WindowHandle,
    host_directory: PathBuf,
}

impl MemoryHost {
    /// A host with a single empty untitled UTF-8 document
    pub fn new() -> Self {
        let host_directory = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_default();

        let mut host = Self {
            documents: Vec::new(),
            current: 0,
            untitled_count: 0,
            clipboard: String::new(),
            sent_commands: Vec::new(),
            window_owners: HashMap::new(),
            main_window: WindowHandle(1),
            host_directory,
        };
        host.new_untitled();
        host
    }

    /// A host whose active document holds `text` in `encoding`
    pub fn with_text(text: &str, encoding: Encoding) -> Self {
        let mut host = Self::new();
        let doc = host.doc_mut();
        doc.bytes = encode(text, encoding);
        doc.code_page = encoding.code_page();
        host
    }

    /// A host whose only document is a file loaded as raw bytes
    pub fn from_file_bytes(path: PathBuf, bytes: Vec<u8>, encoding: Encoding) -> Self {
        let mut host = Self::new();
        host.documents = vec![Document::new(path, bytes, encoding)];
        host.untitled_count = 0;
        host
    }

    pub fn with_eol(mut self, eol: EolMode) -> Self {
        self.doc_mut().eol = eol;
        self
    }

    pub fn with_host_directory(mut self, dir: PathBuf) -> Self {
        self.host_directory = dir;
        self
    }

    /// Open another document and make it active
    pub fn push_document(&mut self, path: PathBuf, bytes: Vec<u8>, encoding: Encoding) {
        self.documents.push(Document::new(path, bytes, encoding));
        self.current = self.documents.len() - 1;
    }

    /// Change the code page of the active document without touching its bytes
    pub fn set_code_page(&mut self, code_page: u32) {
        self.doc_mut().code_page = code_page;
    }

    /// Raw bytes of the active document
    pub fn bytes(&self) -> &[u8] {
        &self.doc().bytes
    }

    pub fn document_bytes(&self, path: &Path) -> Option<&[u8]> {
        self.documents
            .iter()
            .find(|d| d.path == path)
            .map(|d| d.bytes.as_slice())
    }

    pub fn is_dirty(&self) -> bool {
        self.doc().dirty
    }

    pub fn extra_selections(&self) -> &[Range<usize>] {
        &self.doc().extra_selections
    }

    pub fn clipboard(&self) -> &str {
        &self.clipboard
    }

    pub fn sent_commands(&self) -> &[MenuCommand] {
        &self.sent_commands
    }

    pub fn window_owner(&self, window: WindowHandle) -> Option<WindowHandle> {
        self.window_owners.get(&window).copied()
    }

    fn doc(&self) -> &Document {
        &self.documents[self.current]
    }

    fn doc_mut(&mut self) -> &mut Document {
        &mut self.documents[self.current]
    }

    fn new_untitled(&mut self) {
        self.untitled_count += 1;
        let path = PathBuf::from(format!("new {}", self.untitled_count));
        self.push_document(path, Vec::new(), Encoding::Utf8);
    }

    fn close_current(&mut self) {
        self.documents.remove(self.current);
        if self.documents.is_empty() {
            self.new_untitled();
        }
        self.current = self.current.min(self.documents.len() - 1);
    }

    fn selected_text(&self) -> String {
        let doc = self.doc();
        decode(&doc.bytes[doc.selection()], doc.encoding())
    }

    /// Replace the selection and leave the caret after the new bytes
    fn replace_selection(&mut self, bytes: &[u8]) {
        let doc = self.doc_mut();
        let sel = doc.selection();
        doc.splice(sel.clone(), bytes);
        let end = sel.start + bytes.len();
        doc.set_selection(end..end);
    }

    fn map_selection_case(&mut self, upper: bool) {
        let text = self.selected_text();
        let mapped = if upper {
            text.to_uppercase()
        } else {
            text.to_lowercase()
        };
        let doc = self.doc_mut();
        let sel = doc.selection();
        let bytes = encode(&mapped, doc.encoding());
        doc.splice(sel.clone(), &bytes);
        doc.set_selection(sel.start..sel.start + bytes.len());
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for MemoryHost {
    fn read_text(&self) -> Vec<u8> {
        self.doc().bytes.clone()
    }

    fn read_encoding(&self) -> Encoding {
        self.doc().encoding()
    }

    fn write_range(&mut self, range: Range<usize>, bytes: &[u8]) {
        self.doc_mut().splice(range, bytes);
    }

    fn send_command(&mut self, command: MenuCommand) {
        self.sent_commands.push(command);

        match command {
            MenuCommand::FileNew => self.new_untitled(),
            MenuCommand::FileClose => self.close_current(),
            MenuCommand::FileCloseAll => {
                self.documents.clear();
                self.current = 0;
                self.new_untitled();
            }
            MenuCommand::FileCloseAllButCurrent => {
                let doc = self.documents.swap_remove(self.current);
                self.documents = vec![doc];
                self.current = 0;
            }
            MenuCommand::FileSave => self.doc_mut().dirty = false,
            MenuCommand::EditUndo => self.undo(),
            MenuCommand::EditRedo => self.redo(),
            MenuCommand::EditCopy => self.clipboard = self.selected_text(),
            MenuCommand::EditCut => {
                self.clipboard = self.selected_text();
                self.replace_selection(&[]);
            }
            MenuCommand::EditPaste => {
                let bytes = encode(&self.clipboard, self.doc().encoding());
                self.replace_selection(&bytes);
            }
            MenuCommand::EditDelete => {
                let doc = self.doc_mut();
                let sel = doc.selection();
                if sel.is_empty() {
                    let len = doc.char_len_at(sel.start);
                    doc.splice(sel.start..sel.start + len, &[]);
                } else {
                    self.replace_selection(&[]);
                }
            }
            MenuCommand::EditSelectAll => {
                let doc = self.doc_mut();
                doc.extra_selections.clear();
                doc.set_selection(0..doc.bytes.len());
            }
            MenuCommand::EditUpperCase => self.map_selection_case(true),
            MenuCommand::EditLowerCase => self.map_selection_case(false),
            MenuCommand::FileOpen
            | MenuCommand::FileSaveAs
            | MenuCommand::FilePrint
            | MenuCommand::FilePrintNow
            | MenuCommand::FileExit
            | MenuCommand::FileReload
            | MenuCommand::EditBlockComment
            | MenuCommand::EditStreamComment
            | MenuCommand::About
            | MenuCommand::Execute => {}
        }
    }

    fn selection(&self) -> Range<usize> {
        self.doc().selection()
    }

    fn set_selection_start(&mut self, pos: usize) {
        let doc = self.doc_mut();
        let end = doc.selection().end.max(pos);
        doc.set_selection(pos..end);
    }

    fn set_selection_end(&mut self, pos: usize) {
        let doc = self.doc_mut();
        let start = doc.selection().start.min(pos);
        doc.set_selection(start..pos);
    }

    fn goto_pos(&mut self, pos: usize) {
        let doc = self.doc_mut();
        doc.extra_selections.clear();
        doc.set_selection(pos..pos);
    }

    fn add_selection(&mut self, range: Range<usize>) {
        let doc = self.doc_mut();
        let main = doc.selection();
        doc.extra_selections.push(main);
        doc.set_selection(range);
    }

    fn can_undo(&self) -> bool {
        !self.doc().undo.is_empty()
    }

    fn can_redo(&self) -> bool {
        !self.doc().redo.is_empty()
    }

    fn undo(&mut self) {
        let doc = self.doc_mut();
        if let Some(snapshot) = doc.undo.pop() {
            doc.redo.push(doc.snapshot());
            doc.restore(snapshot);
        }
    }

    fn redo(&mut self) {
        let doc = self.doc_mut();
        if let Some(snapshot) = doc.redo.pop() {
            doc.undo.push(doc.snapshot());
            doc.restore(snapshot);
        }
    }

    fn eol_mode(&self) -> EolMode {
        self.doc().eol
    }

    fn current_path(&self) -> PathBuf {
        self.doc().path.clone()
    }

    fn host_directory(&self) -> PathBuf {
        self.host_directory.clone()
    }

    fn open_documents(&self) -> Vec<PathBuf> {
        self.documents.iter().map(|d| d.path.clone()).collect()
    }

    fn switch_to_document(&mut self, path: &Path) -> bool {
        match self.documents.iter().position(|d| d.path == path) {
            Some(idx) => {
                self.current = idx;
                true
            }
            None => false,
        }
    }

    fn open_document(&mut self, path: &Path) -> bool {
        if self.switch_to_document(path) {
            return true;
        }

        match fs::read(path) {
            Ok(bytes) => {
                let encoding = if std::str::from_utf8(&bytes).is_ok() {
                    Encoding::Utf8
                } else {
                    Encoding::Legacy
                };
                self.push_document(path.to_path_buf(), bytes, encoding);
                true
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to open document");
                false
            }
        }
    }

    fn save_all(&mut self) {
        for doc in &mut self.documents {
            doc.dirty = false;
        }
    }

    fn main_window(&self) -> WindowHandle {
        self.main_window
    }

    fn set_window_owner(&mut self, window: WindowHandle, owner: Option<WindowHandle>) {
        match owner {
            Some(owner) => {
                self.window_owners.insert(window, owner);
            }
            None => {
                self.window_owners.remove(&window);
            }
        }
    }
}
