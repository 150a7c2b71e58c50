//! npp::window - Attach script windows to the host
//!
//! Usage in Rhai:
//! ```rhai
//! npp::window::register(hwnd, true);
//! // ...
//! npp::window::unregister(hwnd);
//! ```

use std::sync::Arc;

use rhai::Module;

use super::{SharedSession, write_session};
use crate::host::{Host, WindowHandle};
use crate::session::WindowZOrder;

pub fn create_module<H: Host + 'static>(session: SharedSession<H>) -> Module {
    let mut module = Module::new();

    // register(handle: i64, keep_in_front: bool)
    {
        let s = Arc::clone(&session);
        module.set_native_fn("register", move |handle: i64, keep_in_front: bool| {
            let z_order = WindowZOrder::from_keep_in_front(keep_in_front);
            write_session(&s, |e| e.register_window(WindowHandle(handle as isize), z_order))
        });
    }

    // unregister(handle: i64)
    {
        let s = Arc::clone(&session);
        module.set_native_fn("unregister", move |handle: i64| {
            write_session(&s, |e| e.unregister_window(WindowHandle(handle as isize)))
        });
    }

    module
}
