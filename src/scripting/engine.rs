//! The Rhai scripting engine
//!
//! Provides the `npp` namespace with all editor APIs:
//! - `npp::editor::*` - text, selection, caret and documents
//! - `npp::undo::*` - edit history
//! - `npp::menu::*` - menu commands
//! - `npp::encoding::*` - host encoding conversions
//! - `npp::window::*` - script window integration
//! - `npp::config::*` - settings

use std::path::Path;
use std::sync::{Arc, RwLock};

use rhai::{Engine, Scope};

use super::api::{self, SharedSession};
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::host::Host;
use crate::session::EditorSession;

/// The scripting engine, bound to one editor session
pub struct ScriptEngine<H> {
    engine: Engine,
    session: SharedSession<H>,
    settings: Arc<RwLock<Settings>>,
}

impl<H: Host + 'static> ScriptEngine<H> {
    /// Create an engine over a fresh session for `host`
    pub fn new(host: H, settings: Settings) -> Self {
        let session = Arc::new(RwLock::new(EditorSession::new(host)));
        Self::with_session(session, settings)
    }

    /// Create an engine over an existing shared session
    pub fn with_session(session: SharedSession<H>, settings: Settings) -> Self {
        let settings = Arc::new(RwLock::new(settings));
        let engine = Self::create_engine(Arc::clone(&session), Arc::clone(&settings));

        Self {
            engine,
            session,
            settings,
        }
    }

    /// Create the Rhai engine with the `npp` namespace
    fn create_engine(session: SharedSession<H>, settings: Arc<RwLock<Settings>>) -> Engine {
        let mut engine = Engine::new();

        // Safety limits
        if let Ok(s) = settings.read() {
            engine.set_max_expr_depths(s.max_expr_depth, s.max_expr_depth);
            engine.set_max_operations(s.max_operations);
        }

        let mut npp_module = rhai::Module::new();
        npp_module.set_sub_module(
            "editor",
            api::editor::create_module(Arc::clone(&session), Arc::clone(&settings)),
        );
        npp_module.set_sub_module("undo", api::undo::create_module(Arc::clone(&session)));
        npp_module.set_sub_module("menu", api::menu::create_module(Arc::clone(&session)));
        npp_module.set_sub_module(
            "encoding",
            api::encoding::create_module(Arc::clone(&session)),
        );
        npp_module.set_sub_module("window", api::window::create_module(Arc::clone(&session)));
        npp_module.set_sub_module("config", api::config::create_module(settings));

        // Register `npp` as a static module (accessible as npp::*)
        engine.register_static_module("npp", npp_module.into());

        engine.on_print(|msg| tracing::info!(target: "script", "{msg}"));
        engine.on_debug(|msg, source, pos| {
            tracing::debug!(target: "script", source = source.unwrap_or_default(), %pos, "{msg}");
        });

        engine
    }

    /// Evaluate a Rhai script string
    pub fn eval(&mut self, script: &str) -> Result<()> {
        let ast = self.engine.compile(script)?;

        let mut scope = Scope::new();
        self.engine.run_ast_with_scope(&mut scope, &ast)?;
        Ok(())
    }

    /// Evaluate an expression and return its value
    pub fn eval_as<T: Clone + 'static>(&self, script: &str) -> Result<T> {
        Ok(self.engine.eval::<T>(script)?)
    }

    /// Load and execute a script file
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ReadScript {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "running script");
        self.eval(&content)
    }

    /// Run `<scripts_dir>/<name>.rhai`
    pub fn run_named(&mut self, name: &str) -> Result<()> {
        let path = self
            .settings()
            .scripts_dir()
            .map(|dir| dir.join(format!("{name}.rhai")))
            .filter(|path| path.is_file())
            .ok_or_else(|| Error::ScriptNotFound(name.to_string()))?;

        self.load_file(&path)
    }

    /// Get the current settings (cloned)
    pub fn settings(&self) -> Settings {
        self.settings.read().map(|s| s.clone()).unwrap_or_default()
    }

    /// Get the shared session
    pub fn session(&self) -> SharedSession<H> {
        Arc::clone(&self.session)
    }
}
