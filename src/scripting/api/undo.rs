//! npp::undo - Edit history of the active document

use std::sync::Arc;

use rhai::Module;

use super::{SharedSession, read_session, write_session};
use crate::host::Host;

pub fn create_module<H: Host + 'static>(session: SharedSession<H>) -> Module {
    let mut module = Module::new();

    {
        let s = Arc::clone(&session);
        module.set_native_fn("can_undo", move || read_session(&s, |e| e.can_undo()));
    }

    {
        let s = Arc::clone(&session);
        module.set_native_fn("can_redo", move || read_session(&s, |e| e.can_redo()));
    }

    {
        let s = Arc::clone(&session);
        module.set_native_fn("undo", move || write_session(&s, |e| e.undo()));
    }

    {
        let s = Arc::clone(&session);
        module.set_native_fn("redo", move || write_session(&s, |e| e.redo()));
    }

    module
}
