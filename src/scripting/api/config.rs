//! npp::config - Settings
//!
//! Usage in Rhai:
//! ```rhai
//! npp::config::set_select_after_replace(false);
//! npp::config::set_log_filter("npp_script=debug");
//! let dir = npp::config::get_scripts_dir();
//! ```

use rhai::{EvalAltResult, Module};
use std::sync::{Arc, RwLock};

use crate::config::Settings;

/// Create the config module with access to settings
pub fn create_module(settings: Arc<RwLock<Settings>>) -> Module {
    let mut module = Module::new();

    // set_select_after_replace(enabled: bool)
    {
        let s = Arc::clone(&settings);
        module.set_native_fn(
            "set_select_after_replace",
            move |enabled: bool| -> Result<(), Box<EvalAltResult>> {
                if let Ok(mut settings) = s.write() {
                    settings.select_after_replace = enabled;
                }
                Ok(())
            },
        );
    }

    // get_select_after_replace() -> bool
    {
        let s = Arc::clone(&settings);
        module.set_native_fn(
            "get_select_after_replace",
            move || -> Result<bool, Box<EvalAltResult>> {
                Ok(s.read().map(|s| s.select_after_replace).unwrap_or(true))
            },
        );
    }

    // set_log_filter(filter: &str)
    {
        let s = Arc::clone(&settings);
        module.set_native_fn(
            "set_log_filter",
            move |filter: &str| -> Result<(), Box<EvalAltResult>> {
                if let Ok(mut settings) = s.write() {
                    settings.log_filter = filter.to_string();
                }
                Ok(())
            },
        );
    }

    // get_log_filter() -> String
    {
        let s = Arc::clone(&settings);
        module.set_native_fn(
            "get_log_filter",
            move || -> Result<String, Box<EvalAltResult>> {
                Ok(s.read().map(|s| s.log_filter.clone()).unwrap_or_default())
            },
        );
    }

    // get_scripts_dir() -> String, empty when there is no config directory
    {
        let s = Arc::clone(&settings);
        module.set_native_fn(
            "get_scripts_dir",
            move || -> Result<String, Box<EvalAltResult>> {
                Ok(s.read()
                    .ok()
                    .and_then(|s| s.scripts_dir())
                    .map(|p| p.to_string_lossy().into_owned())
                    .unwrap_or_default())
            },
        );
    }

    // get_max_operations() -> i64
    {
        let s = Arc::clone(&settings);
        module.set_native_fn(
            "get_max_operations",
            move || -> Result<i64, Box<EvalAltResult>> {
                Ok(s.read()
                    .map(|s| i64::try_from(s.max_operations).unwrap_or(i64::MAX))
                    .unwrap_or(0))
            },
        );
    }

    module
}
