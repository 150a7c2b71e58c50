//! npp::menu - Common menu commands
//!
//! Usage in Rhai:
//! ```rhai
//! npp::menu::edit_select_all();
//! npp::menu::edit_upper_case();
//! npp::menu::run("file_save");
//! ```

use std::sync::Arc;

use rhai::Module;

use super::{FnResult, SharedSession, write_session};
use crate::host::{Host, MenuCommand};

pub fn create_module<H: Host + 'static>(session: SharedSession<H>) -> Module {
    let mut module = Module::new();

    // One function per command, named after MenuCommand::script_name
    for command in MenuCommand::ALL {
        let s = Arc::clone(&session);
        module.set_native_fn(command.script_name(), move || {
            write_session(&s, |e| e.run_command(command))
        });
    }

    // run(name: &str)
    {
        let s = Arc::clone(&session);
        module.set_native_fn("run", move |name: &str| -> FnResult<()> {
            let command = MenuCommand::from_script_name(name)
                .ok_or_else(|| format!("unknown menu command `{name}`"))?;
            write_session(&s, |e| e.run_command(command))
        });
    }

    module
}
