//! npp::encoding - Conversions between script text and the host encoding
//!
//! Usage in Rhai:
//! ```rhai
//! let bytes = npp::encoding::encode("héllo");
//! let byte_pos = npp::encoding::to_host_offset(2);
//! ```

use std::sync::Arc;

use rhai::{Blob, Module};

use super::{SharedSession, read_session, to_int};
use crate::host::Host;
use crate::text::{self, Encoding};

pub fn create_module<H: Host + 'static>(session: SharedSession<H>) -> Module {
    let mut module = Module::new();

    // code_page_is_utf8() -> bool
    {
        let s = Arc::clone(&session);
        module.set_native_fn("code_page_is_utf8", move || {
            read_session(&s, |e| e.encoding() == Encoding::Utf8)
        });
    }

    // encode(text: &str) -> Blob, in the active document's encoding
    {
        let s = Arc::clone(&session);
        module.set_native_fn("encode", move |value: &str| -> super::FnResult<Blob> {
            read_session(&s, |e| text::encode(value, e.encoding()))
        });
    }

    // decode(bytes: Blob) -> String
    {
        let s = Arc::clone(&session);
        module.set_native_fn("decode", move |bytes: Blob| {
            read_session(&s, |e| text::decode(&bytes, e.encoding()))
        });
    }

    // to_host_offset(pos: i64) -> i64
    {
        let s = Arc::clone(&session);
        module.set_native_fn("to_host_offset", move |pos: i64| {
            read_session(&s, |e| to_int(e.host_offset(pos)))
        });
    }

    // from_host_offset(pos: i64) -> i64
    {
        let s = Arc::clone(&session);
        module.set_native_fn("from_host_offset", move |pos: i64| {
            let pos = usize::try_from(pos).unwrap_or(0);
            read_session(&s, |e| to_int(e.code_point_at(pos)))
        });
    }

    module
}
