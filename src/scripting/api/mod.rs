//! API modules for the `npp` namespace
//!
//! Each submodule provides functions under `npp::<module>::*`

pub mod config;
pub mod editor;
pub mod encoding;
pub mod menu;
pub mod undo;
pub mod window;

use std::sync::{Arc, RwLock};

use rhai::EvalAltResult;

use crate::session::EditorSession;

/// Session shared between the engine and every registered function
pub type SharedSession<H> = Arc<RwLock<EditorSession<H>>>;

pub(crate) type FnResult<T> = Result<T, Box<EvalAltResult>>;

pub(crate) fn read_session<H, T>(
    session: &SharedSession<H>,
    f: impl FnOnce(&EditorSession<H>) -> T,
) -> FnResult<T> {
    let guard = session
        .read()
        .map_err(|_| "editor session lock poisoned")?;
    Ok(f(&guard))
}

pub(crate) fn write_session<H, T>(
    session: &SharedSession<H>,
    f: impl FnOnce(&mut EditorSession<H>) -> T,
) -> FnResult<T> {
    let mut guard = session
        .write()
        .map_err(|_| "editor session lock poisoned")?;
    Ok(f(&mut guard))
}

/// Script integers to count-like values
pub(crate) fn to_int(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
