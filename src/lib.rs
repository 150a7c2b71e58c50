//! Scripting helpers for a text-editor host.
//!
//! Scripts work with plain Unicode text and character offsets. The host
//! stores its active document either as UTF-8 or in a single-byte legacy
//! code page and addresses it by byte. [`EditorSession`] sits between the
//! two, translating every offset and clamping every range, and
//! [`ScriptEngine`] exposes it to Rhai scripts under `npp::*`.
//!
//! ```
//! use npp_script::{EditorSession, Encoding, MemoryHost};
//!
//! let mut session = EditorSession::new(MemoryHost::with_text("héllo", Encoding::Utf8));
//! session.select_and_show(1, 3);
//! assert_eq!(session.selected_text(), "él");
//! ```

pub mod config;
mod error;
pub mod host;
pub mod scripting;
pub mod session;
pub mod text;

pub use config::Settings;
pub use error::{Error, Result};
pub use host::{EolMode, Host, MemoryHost, MenuCommand, WindowHandle};
pub use scripting::{ScriptEngine, SharedSession};
pub use session::{EditorSession, WindowZOrder};
pub use text::Encoding;
