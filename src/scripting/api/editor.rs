//! npp::editor - Text, selection, caret and documents
//!
//! Usage in Rhai:
//! ```rhai
//! let text = npp::editor::text();
//! npp::editor::select(0, 5);
//! npp::editor::replace("Hello", 0, 5);
//! npp::editor::insert("\n", -1);
//! ```
//!
//! Offsets count characters; out-of-range values are clamped.

use std::path::Path;
use std::sync::{Arc, RwLock};

use rhai::{Array, Dynamic, Module};

use super::{FnResult, SharedSession, read_session, to_int, write_session};
use crate::config::Settings;
use crate::host::Host;

/// Create the editor module over a shared session
pub fn create_module<H: Host + 'static>(
    session: SharedSession<H>,
    settings: Arc<RwLock<Settings>>,
) -> Module {
    let mut module = Module::new();

    // text() -> String
    {
        let s = Arc::clone(&session);
        module.set_native_fn("text", move || read_session(&s, |e| e.text()));
    }

    // set_text(text: &str)
    {
        let s = Arc::clone(&session);
        module.set_native_fn("set_text", move |text: &str| {
            write_session(&s, |e| e.set_text(text))
        });
    }

    // text_length() -> i64
    {
        let s = Arc::clone(&session);
        module.set_native_fn("text_length", move || {
            read_session(&s, |e| to_int(e.text_length()))
        });
    }

    // selection_start() -> i64
    {
        let s = Arc::clone(&session);
        module.set_native_fn("selection_start", move || {
            read_session(&s, |e| to_int(e.selection_start()))
        });
    }

    // set_selection_start(pos: i64)
    {
        let s = Arc::clone(&session);
        module.set_native_fn("set_selection_start", move |pos: i64| {
            write_session(&s, |e| e.set_selection_start(pos))
        });
    }

    // selection_end() -> i64
    {
        let s = Arc::clone(&session);
        module.set_native_fn("selection_end", move || {
            read_session(&s, |e| to_int(e.selection_end()))
        });
    }

    // set_selection_end(pos: i64)
    {
        let s = Arc::clone(&session);
        module.set_native_fn("set_selection_end", move |pos: i64| {
            write_session(&s, |e| e.set_selection_end(pos))
        });
    }

    // selection_length() -> i64
    {
        let s = Arc::clone(&session);
        module.set_native_fn("selection_length", move || {
            read_session(&s, |e| to_int(e.selection_length()))
        });
    }

    // set_selection_length(len: i64)
    {
        let s = Arc::clone(&session);
        module.set_native_fn("set_selection_length", move |len: i64| {
            write_session(&s, |e| e.set_selection_length(len))
        });
    }

    // selected_text() -> String
    {
        let s = Arc::clone(&session);
        module.set_native_fn("selected_text", move || {
            read_session(&s, |e| e.selected_text())
        });
    }

    // set_selected_text(text: &str)
    {
        let s = Arc::clone(&session);
        module.set_native_fn("set_selected_text", move |text: &str| {
            write_session(&s, |e| e.set_selected_text(text))
        });
    }

    // select(start: i64, end: i64)
    {
        let s = Arc::clone(&session);
        module.set_native_fn("select", move |start: i64, end: i64| {
            write_session(&s, |e| e.select_and_show(start, end))
        });
    }

    // add_selection(start: i64, end: i64)
    {
        let s = Arc::clone(&session);
        module.set_native_fn("add_selection", move |start: i64, end: i64| {
            write_session(&s, |e| e.add_selection(start, end))
        });
    }

    // replace(text: &str, start: i64, end: i64)
    {
        let s = Arc::clone(&session);
        let settings = Arc::clone(&settings);
        module.set_native_fn(
            "replace",
            move |text: &str, start: i64, end: i64| -> FnResult<()> {
                let select = settings
                    .read()
                    .map(|cfg| cfg.select_after_replace)
                    .unwrap_or(true);
                write_session(&s, |e| {
                    if select {
                        e.replace_and_select(text, start, end);
                    } else {
                        e.replace_range(text, start, end);
                    }
                })
            },
        );
    }

    // insert(text: &str, pos: i64), negative pos inserts at the selection start
    {
        let s = Arc::clone(&session);
        module.set_native_fn("insert", move |text: &str, pos: i64| {
            write_session(&s, |e| e.insert_text(text, pos))
        });
    }

    // text_between(start: i64, end: i64) -> String
    {
        let s = Arc::clone(&session);
        module.set_native_fn("text_between", move |start: i64, end: i64| {
            read_session(&s, |e| e.text_between(start, end))
        });
    }

    // line_text(line: i64) -> String
    {
        let s = Arc::clone(&session);
        module.set_native_fn("line_text", move |line: i64| {
            read_session(&s, |e| e.line_text(line))
        });
    }

    // current_line() -> i64
    {
        let s = Arc::clone(&session);
        module.set_native_fn("current_line", move || {
            read_session(&s, |e| to_int(e.current_line()))
        });
    }

    // current_column() -> i64
    {
        let s = Arc::clone(&session);
        module.set_native_fn("current_column", move || {
            read_session(&s, |e| to_int(e.current_column()))
        });
    }

    // eol() -> String
    {
        let s = Arc::clone(&session);
        module.set_native_fn("eol", move || read_session(&s, |e| e.eol().to_string()));
    }

    // current_path() -> String
    {
        let s = Arc::clone(&session);
        module.set_native_fn("current_path", move || {
            read_session(&s, |e| e.current_path().to_string_lossy().into_owned())
        });
    }

    // host_directory() -> String
    {
        let s = Arc::clone(&session);
        module.set_native_fn("host_directory", move || {
            read_session(&s, |e| e.host_directory().to_string_lossy().into_owned())
        });
    }

    // opened_documents() -> Array
    {
        let s = Arc::clone(&session);
        module.set_native_fn("opened_documents", move || -> FnResult<Array> {
            read_session(&s, |e| {
                e.opened_documents()
                    .into_iter()
                    .map(|p| Dynamic::from(p.to_string_lossy().into_owned()))
                    .collect()
            })
        });
    }

    // opened_document_count() -> i64
    {
        let s = Arc::clone(&session);
        module.set_native_fn("opened_document_count", move || {
            read_session(&s, |e| to_int(e.opened_document_count()))
        });
    }

    // show_document(path: &str) -> bool
    {
        let s = Arc::clone(&session);
        module.set_native_fn("show_document", move |path: &str| {
            write_session(&s, |e| e.show_document(Path::new(path)))
        });
    }

    // new_document()
    {
        let s = Arc::clone(&session);
        module.set_native_fn("new_document", move || write_session(&s, |e| e.new_document()));
    }

    // open_file(path: &str) -> bool
    {
        let s = Arc::clone(&session);
        module.set_native_fn("open_file", move |path: &str| {
            write_session(&s, |e| e.open_file(Path::new(path)))
        });
    }

    // save()
    {
        let s = Arc::clone(&session);
        module.set_native_fn("save", move || {
            write_session(&s, |e| e.save_current_document())
        });
    }

    // save_all()
    {
        let s = Arc::clone(&session);
        module.set_native_fn("save_all", move || write_session(&s, |e| e.save_all()));
    }

    module
}
