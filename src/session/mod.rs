//! Script-facing accessors over a [`Host`](crate::host::Host)
//!
//! - `EditorSession` for text, selection, caret, history and documents
//! - `WindowZOrder` for attaching script windows to the host

mod editor;
mod window;

pub use editor::EditorSession;
pub use window::WindowZOrder;
