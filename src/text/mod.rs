//! Text translation between script-facing and host-facing representations
//!
//! Scripts address text by code point. The host addresses its buffer by byte
//! in whatever encoding the active document uses. Everything here is a pure
//! function over the text handed in; nothing is cached between calls.

mod encoding;
mod lines;
mod offset;

pub use encoding::{Encoding, LEGACY_CODE_PAGE, UTF8_CODE_PAGE, decode, encode};
pub use lines::{line_and_column, line_text};
pub use offset::{clamp_offset, clamp_range, from_host_offset, to_host_offset, to_host_range};
