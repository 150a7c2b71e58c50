use std::ops::Range;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::WindowZOrder;
use crate::host::{Host, MenuCommand, WindowHandle};
use crate::text::{self, Encoding};

/// Explicit context for every script operation on the host's active document.
///
/// Offsets taken from and returned to callers count code points in the
/// decoded text. Inputs are signed and clamped, never rejected. Nothing is
/// cached: each call re-reads the text and encoding, since the user may
/// switch documents between two calls.
#[derive(Debug)]
pub struct EditorSession<H> {
    host: H,
}

impl<H: Host> EditorSession<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn encoding(&self) -> Encoding {
        self.host.read_encoding()
    }

    // Text

    /// Full text of the active document
    pub fn text(&self) -> String {
        text::decode(&self.host.read_text(), self.encoding())
    }

    pub fn set_text(&mut self, new_text: &str) {
        let encoding = self.encoding();
        let len = self.host.read_text().len();
        debug!(len, ?encoding, "replacing document text");
        self.host.write_range(0..len, &text::encode(new_text, encoding));
    }

    /// Length of the text in code points
    pub fn text_length(&self) -> usize {
        self.text().chars().count()
    }

    /// Text between two offsets, after clamping the range
    pub fn text_between(&self, start: i64, end: i64) -> String {
        let full = self.text();
        let (start, end) = text::clamp_range(full.chars().count(), start, end);
        full.chars().skip(start).take(end - start).collect()
    }

    /// Text of the 1-based `line`, empty when there is no such line
    pub fn line_text(&self, line: i64) -> String {
        text::line_text(&self.text(), line)
    }

    pub fn eol(&self) -> &'static str {
        self.host.eol_mode().as_str()
    }

    // Selection

    pub fn selection_start(&self) -> usize {
        let pos = self.host.selection().start;
        self.code_point_at(pos)
    }

    pub fn selection_end(&self) -> usize {
        let pos = self.host.selection().end;
        self.code_point_at(pos)
    }

    pub fn set_selection_start(&mut self, pos: i64) {
        let pos = self.host_offset(pos);
        self.host.set_selection_start(pos);
    }

    pub fn set_selection_end(&mut self, pos: i64) {
        let pos = self.host_offset(pos);
        self.host.set_selection_end(pos);
    }

    pub fn selection_length(&self) -> usize {
        self.selection_end().saturating_sub(self.selection_start())
    }

    /// Move the selection end to `start + len`. Negative lengths collapse the selection.
    pub fn set_selection_length(&mut self, len: i64) {
        let start = self.selection_start() as i64;
        self.set_selection_end(start.saturating_add(len.max(0)));
    }

    pub fn selected_text(&self) -> String {
        let start = self.selection_start() as i64;
        let end = self.selection_end() as i64;
        self.text_between(start, end)
    }

    /// Replace the selection with `new_text` and leave the caret after it
    pub fn set_selected_text(&mut self, new_text: &str) {
        let bytes = text::encode(new_text, self.encoding());
        let sel = self.host.selection();
        debug!(?sel, len = bytes.len(), "replacing selection");
        self.host.write_range(sel.clone(), &bytes);
        self.host.goto_pos(sel.start + bytes.len());
    }

    /// Select `start..end` and scroll it into view
    pub fn select_and_show(&mut self, start: i64, end: i64) {
        let range = self.host_range(start, end);
        self.host.goto_pos(range.start);
        self.host.set_selection_end(range.end);
    }

    /// Add a secondary selection when the host supports several
    pub fn add_selection(&mut self, start: i64, end: i64) {
        let range = self.host_range(start, end);
        self.host.add_selection(range);
    }

    // Editing

    /// Replace `start..end` with `new_text`.
    ///
    /// Returns the code-point range now covered by `new_text`.
    pub fn replace_range(&mut self, new_text: &str, start: i64, end: i64) -> (usize, usize) {
        let full = self.text();
        let encoding = self.encoding();
        let (start, end) = text::clamp_range(full.chars().count(), start, end);
        let range = text::to_host_offset(&full, start as i64, encoding)
            ..text::to_host_offset(&full, end as i64, encoding);

        debug!(?range, "replacing range");
        self.host.write_range(range, &text::encode(new_text, encoding));
        (start, start + new_text.chars().count())
    }

    /// Replace `start..end` with `new_text`, then select and show the new text
    pub fn replace_and_select(&mut self, new_text: &str, start: i64, end: i64) {
        let (start, end) = self.replace_range(new_text, start, end);
        self.select_and_show(start as i64, end as i64);
    }

    /// Insert `new_text` at `pos`. A negative `pos` inserts at the selection start.
    pub fn insert_text(&mut self, new_text: &str, pos: i64) {
        let pos = if pos < 0 {
            self.selection_start() as i64
        } else {
            pos
        };
        let at = self.host_offset(pos);
        let bytes = text::encode(new_text, self.encoding());
        debug!(at, len = bytes.len(), "inserting text");
        self.host.write_range(at..at, &bytes);
    }

    // Caret

    /// 1-based line of the selection start
    pub fn current_line(&self) -> usize {
        self.caret_line_and_column().0
    }

    /// 0-based column of the selection start, in code points
    pub fn current_column(&self) -> usize {
        self.caret_line_and_column().1
    }

    // History

    pub fn can_undo(&self) -> bool {
        self.host.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.host.can_redo()
    }

    pub fn undo(&mut self) {
        self.host.undo();
    }

    pub fn redo(&mut self) {
        self.host.redo();
    }

    // Documents

    pub fn current_path(&self) -> PathBuf {
        self.host.current_path()
    }

    pub fn host_directory(&self) -> PathBuf {
        self.host.host_directory()
    }

    pub fn opened_documents(&self) -> Vec<PathBuf> {
        self.host.open_documents()
    }

    pub fn opened_document_count(&self) -> usize {
        self.host.open_documents().len()
    }

    /// Bring an already opened document to the front
    pub fn show_document(&mut self, path: &Path) -> bool {
        self.host.switch_to_document(path)
    }

    pub fn new_document(&mut self) {
        self.run_command(MenuCommand::FileNew);
    }

    /// Open `path` in the host. Returns false when the file does not exist
    /// or the host refuses it.
    pub fn open_file(&mut self, path: &Path) -> bool {
        if !path.exists() {
            debug!(path = %path.display(), "not opening missing file");
            return false;
        }
        self.host.open_document(path)
    }

    pub fn save_current_document(&mut self) {
        self.run_command(MenuCommand::FileSave);
    }

    pub fn save_all(&mut self) {
        self.host.save_all();
    }

    pub fn run_command(&mut self, command: MenuCommand) {
        debug!(?command, id = command.id(), "sending menu command");
        self.host.send_command(command);
    }

    // Windows

    /// Register a script window with the host
    pub fn register_window(&mut self, window: WindowHandle, z_order: WindowZOrder) {
        let owner = match z_order {
            WindowZOrder::KeepInFrontOfHost => Some(self.host.main_window()),
            WindowZOrder::DisconnectedFromHost => None,
        };
        self.host.set_window_owner(window, owner);
    }

    pub fn unregister_window(&mut self, window: WindowHandle) {
        self.host.set_window_owner(window, None);
    }

    // Translation helpers

    /// Host byte offset for a caller offset, clamped to the current text
    pub fn host_offset(&self, pos: i64) -> usize {
        text::to_host_offset(&self.text(), pos, self.encoding())
    }

    /// Caller offset for a host byte offset
    pub fn code_point_at(&self, host_pos: usize) -> usize {
        text::from_host_offset(&self.host.read_text(), host_pos, self.encoding())
    }

    fn host_range(&self, start: i64, end: i64) -> Range<usize> {
        text::to_host_range(&self.text(), start, end, self.encoding())
    }

    fn caret_line_and_column(&self) -> (usize, usize) {
        let full = self.text();
        let start = self.selection_start();
        let prefix_end = full
            .char_indices()
            .nth(start)
            .map_or(full.len(), |(i, _)| i);
        text::line_and_column(&full[..prefix_end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{EolMode, MemoryHost};

    fn session(text: &str, encoding: Encoding) -> EditorSession<MemoryHost> {
        EditorSession::new(MemoryHost::with_text(text, encoding))
    }

    #[test]
    fn text_round_trips_through_both_encodings() {
        for encoding in [Encoding::Utf8, Encoding::Legacy] {
            let mut s = session("héllo", encoding);
            assert_eq!(s.text(), "héllo");
            s.set_text("wörld €");
            assert_eq!(s.text(), "wörld €");
            assert_eq!(s.text_length(), 7);
        }
    }

    #[test]
    fn legacy_host_bytes() {
        let mut s = session("", Encoding::Legacy);
        s.set_text("héllo");
        assert_eq!(s.host().bytes(), b"h\xe9llo");
    }

    #[test]
    fn selection_is_reported_in_code_points() {
        let mut s = session("héllo wörld", Encoding::Utf8);
        s.set_selection_end(11);
        s.set_selection_start(6);
        assert_eq!(s.host().selection(), 7..13);
        assert_eq!(s.selection_start(), 6);
        assert_eq!(s.selection_end(), 11);
        assert_eq!(s.selection_length(), 5);
        assert_eq!(s.selected_text(), "wörld");
    }

    #[test]
    fn selection_setters_clamp() {
        let mut s = session("héllo", Encoding::Utf8);
        s.set_selection_end(100);
        assert_eq!(s.selection_end(), 5);
        s.set_selection_start(-3);
        assert_eq!(s.selection_start(), 0);
    }

    #[test]
    fn selection_length() {
        let mut s = session("héllo", Encoding::Utf8);
        s.select_and_show(1, 1);
        s.set_selection_length(3);
        assert_eq!(s.selected_text(), "éll");
        s.set_selection_length(-2);
        assert_eq!(s.selection_length(), 0);
    }

    #[test]
    fn set_selected_text_moves_caret_after() {
        let mut s = session("héllo", Encoding::Utf8);
        s.select_and_show(1, 2);
        s.set_selected_text("EE");
        assert_eq!(s.text(), "hEEllo");
        assert_eq!(s.selection_start(), 3);
        assert_eq!(s.selection_length(), 0);
    }

    #[test]
    fn select_and_show_clamps_inverted_range() {
        let mut s = session("0123456789", Encoding::Legacy);
        s.select_and_show(7, 3);
        assert_eq!((s.selection_start(), s.selection_end()), (7, 7));
        s.select_and_show(-5, 20);
        assert_eq!((s.selection_start(), s.selection_end()), (0, 10));
    }

    #[test]
    fn add_selection_translates_offsets() {
        let mut s = session("ééé", Encoding::Utf8);
        s.select_and_show(0, 1);
        s.add_selection(2, 3);
        assert_eq!(s.host().selection(), 4..6);
        assert_eq!(s.host().extra_selections(), &[0..2]);
    }

    #[test]
    fn replace_and_select() {
        let mut s = session("héllo world", Encoding::Utf8);
        s.replace_and_select("wörld!", 6, 11);
        assert_eq!(s.text(), "héllo wörld!");
        assert_eq!(s.selected_text(), "wörld!");
    }

    #[test]
    fn replace_range_reports_new_span() {
        let mut s = session("abc", Encoding::Legacy);
        assert_eq!(s.replace_range("XYZ", 1, 2), (1, 4));
        assert_eq!(s.text(), "aXYZc");
        // Inverted ranges collapse to an insertion
        assert_eq!(s.replace_range("_", 2, 0), (2, 3));
        assert_eq!(s.text(), "aX_YZc");
    }

    #[test]
    fn insert_text_positions() {
        let mut s = session("héllo", Encoding::Utf8);
        s.insert_text("!", 99);
        assert_eq!(s.text(), "héllo!");
        s.insert_text("¡", 0);
        assert_eq!(s.text(), "¡héllo!");

        s.select_and_show(3, 3);
        s.insert_text("_", -1);
        assert_eq!(s.text(), "¡hé_llo!");
    }

    #[test]
    fn line_and_column_at_selection_start() {
        let mut s = session("first\r\nsécond\rthird", Encoding::Utf8);
        assert_eq!((s.current_line(), s.current_column()), (1, 0));
        s.select_and_show(10, 12);
        assert_eq!((s.current_line(), s.current_column()), (2, 3));
        s.select_and_show(100, 100);
        assert_eq!((s.current_line(), s.current_column()), (3, 5));
    }

    #[test]
    fn text_between_and_line_text() {
        let s = session("one\ntwö\nthree", Encoding::Utf8);
        assert_eq!(s.text_between(4, 7), "twö");
        assert_eq!(s.text_between(7, 4), "");
        assert_eq!(s.text_between(-1, 3), "one");
        assert_eq!(s.line_text(2), "twö");
        assert_eq!(s.line_text(9), "");
    }

    #[test]
    fn encoding_is_read_on_every_call() {
        let mut s = session("héllo", Encoding::Utf8);
        assert_eq!(s.host_offset(2), 3);
        // The same bytes reinterpreted under the legacy page
        s.host_mut().set_code_page(1252);
        assert_eq!(s.text().chars().count(), 6);
        assert_eq!(s.host_offset(2), 2);
    }

    #[test]
    fn eol() {
        let s = EditorSession::new(MemoryHost::new().with_eol(EolMode::CrLf));
        assert_eq!(s.eol(), "\r\n");
    }

    #[test]
    fn history() {
        let mut s = session("abc", Encoding::Utf8);
        assert!(!s.can_undo());
        s.insert_text("d", 3);
        assert!(s.can_undo());
        s.undo();
        assert_eq!(s.text(), "abc");
        assert!(s.can_redo());
        s.redo();
        assert_eq!(s.text(), "abcd");
    }

    #[test]
    fn documents() {
        let mut s = session("", Encoding::Utf8);
        assert_eq!(s.opened_document_count(), 1);
        s.new_document();
        assert_eq!(s.opened_document_count(), 2);
        assert!(s.show_document(Path::new("new 1")));
        assert!(!s.show_document(Path::new("missing")));
        assert_eq!(s.current_path(), PathBuf::from("new 1"));
        assert!(!s.open_file(Path::new("/definitely/not/here.txt")));
        assert_eq!(s.host().sent_commands(), &[MenuCommand::FileNew]);
    }

    #[test]
    fn open_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"caf\xe9").unwrap();

        let mut s = session("", Encoding::Utf8);
        assert!(s.open_file(&path));
        assert_eq!(s.current_path(), path);
        assert_eq!(s.encoding(), Encoding::Legacy);
        assert_eq!(s.text(), "café");
    }

    #[test]
    fn save_goes_through_menu() {
        let mut s = session("", Encoding::Utf8);
        s.insert_text("x", 0);
        assert!(s.host().is_dirty());
        s.save_current_document();
        assert!(!s.host().is_dirty());
        assert_eq!(s.host().sent_commands(), &[MenuCommand::FileSave]);
    }

    #[test]
    fn host_directory_comes_from_the_host() {
        let host = MemoryHost::new().with_host_directory(PathBuf::from("/opt/editor"));
        let s = EditorSession::new(host);
        assert_eq!(s.host_directory(), PathBuf::from("/opt/editor"));
    }

    #[test]
    fn windows() {
        let mut s = session("", Encoding::Utf8);
        let window = WindowHandle(7);
        s.register_window(window, WindowZOrder::KeepInFrontOfHost);
        assert_eq!(s.host().window_owner(window), Some(s.host().main_window()));
        s.unregister_window(window);
        assert_eq!(s.host().window_owner(window), None);
        s.register_window(window, WindowZOrder::DisconnectedFromHost);
        assert_eq!(s.host().window_owner(window), None);
    }
}
