//! Scripting module - Rhai runtime over an editor session
//!
//! All editor functions are exposed under the `npp` namespace:
//! - `npp::editor::*` - text, selection, caret, documents
//! - `npp::undo::*` - undo/redo
//! - `npp::menu::*` - menu commands
//! - `npp::encoding::*` - host encoding conversions
//! - `npp::window::*` - window integration
//! - `npp::config::*` - settings

mod api;
mod engine;

pub use api::SharedSession;
pub use engine::ScriptEngine;
