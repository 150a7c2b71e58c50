/// Common menu commands, with the ids the host's menu dispatch expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    // File
    FileNew,
    FileOpen,
    FileClose,
    FileCloseAll,
    FileCloseAllButCurrent,
    FileSave,
    FileSaveAs,
    FilePrint,
    FilePrintNow,
    FileExit,
    FileReload,

    // Edit
    EditCut,
    EditCopy,
    EditUndo,
    EditRedo,
    EditPaste,
    EditDelete,
    EditSelectAll,
    EditUpperCase,
    EditLowerCase,
    EditBlockComment,
    EditStreamComment,

    // Misc
    About,
    Execute,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 24] = [
        MenuCommand::FileNew,
        MenuCommand::FileOpen,
        MenuCommand::FileClose,
        MenuCommand::FileCloseAll,
        MenuCommand::FileCloseAllButCurrent,
        MenuCommand::FileSave,
        MenuCommand::FileSaveAs,
        MenuCommand::FilePrint,
        MenuCommand::FilePrintNow,
        MenuCommand::FileExit,
        MenuCommand::FileReload,
        MenuCommand::EditCut,
        MenuCommand::EditCopy,
        MenuCommand::EditUndo,
        MenuCommand::EditRedo,
        MenuCommand::EditPaste,
        MenuCommand::EditDelete,
        MenuCommand::EditSelectAll,
        MenuCommand::EditUpperCase,
        MenuCommand::EditLowerCase,
        MenuCommand::EditBlockComment,
        MenuCommand::EditStreamComment,
        MenuCommand::About,
        MenuCommand::Execute,
    ];

    pub fn id(self) -> u32 {
        match self {
            MenuCommand::FileNew => 41001,
            MenuCommand::FileOpen => 41002,
            MenuCommand::FileClose => 41003,
            MenuCommand::FileCloseAll => 41004,
            MenuCommand::FileCloseAllButCurrent => 41005,
            MenuCommand::FileSave => 41006,
            MenuCommand::FileSaveAs => 41008,
            MenuCommand::FilePrint => 41010,
            MenuCommand::FileExit => 41011,
            MenuCommand::FileReload => 41014,
            // Outside the file block in the host's table
            MenuCommand::FilePrintNow => 1001,
            MenuCommand::EditCut => 42001,
            MenuCommand::EditCopy => 42002,
            MenuCommand::EditUndo => 42003,
            MenuCommand::EditRedo => 42004,
            MenuCommand::EditPaste => 42005,
            MenuCommand::EditDelete => 42006,
            MenuCommand::EditSelectAll => 42007,
            MenuCommand::EditUpperCase => 42016,
            MenuCommand::EditLowerCase => 42017,
            MenuCommand::EditBlockComment => 42022,
            MenuCommand::EditStreamComment => 42023,
            MenuCommand::About => 47000,
            MenuCommand::Execute => 49000,
        }
    }

    /// Function name under `npp::menu::*`
    pub fn script_name(self) -> &'static str {
        match self {
            MenuCommand::FileNew => "file_new",
            MenuCommand::FileOpen => "file_open",
            MenuCommand::FileClose => "file_close",
            MenuCommand::FileCloseAll => "file_close_all",
            MenuCommand::FileCloseAllButCurrent => "file_close_all_but_current",
            MenuCommand::FileSave => "file_save",
            MenuCommand::FileSaveAs => "file_save_as",
            MenuCommand::FilePrint => "file_print",
            MenuCommand::FilePrintNow => "file_print_now",
            MenuCommand::FileExit => "file_exit",
            MenuCommand::FileReload => "file_reload",
            MenuCommand::EditCut => "edit_cut",
            MenuCommand::EditCopy => "edit_copy",
            MenuCommand::EditUndo => "edit_undo",
            MenuCommand::EditRedo => "edit_redo",
            MenuCommand::EditPaste => "edit_paste",
            MenuCommand::EditDelete => "edit_delete",
            MenuCommand::EditSelectAll => "edit_select_all",
            MenuCommand::EditUpperCase => "edit_upper_case",
            MenuCommand::EditLowerCase => "edit_lower_case",
            MenuCommand::EditBlockComment => "edit_block_comment",
            MenuCommand::EditStreamComment => "edit_stream_comment",
            MenuCommand::About => "about",
            MenuCommand::Execute => "execute",
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    pub fn from_script_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.script_name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_and_names_are_unique() {
        let ids: HashSet<_> = MenuCommand::ALL.iter().map(|c| c.id()).collect();
        let names: HashSet<_> = MenuCommand::ALL.iter().map(|c| c.script_name()).collect();
        assert_eq!(ids.len(), MenuCommand::ALL.len());
        assert_eq!(names.len(), MenuCommand::ALL.len());
    }

    #[test]
    fn lookup() {
        assert_eq!(MenuCommand::from_id(41006), Some(MenuCommand::FileSave));
        assert_eq!(MenuCommand::from_id(1001), Some(MenuCommand::FilePrintNow));
        assert_eq!(MenuCommand::from_id(12345), None);
        assert_eq!(
            MenuCommand::from_script_name("edit_upper_case"),
            Some(MenuCommand::EditUpperCase)
        );
        assert_eq!(MenuCommand::from_script_name("nope"), None);
    }
}
