use crate::core::Command;
use crate::kernel::state::SidebarTab;

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(Command),
    OpenFile(String),
    CloseFile(String),
    EditFile {
        path: String,
        text: String,
    },
    SaveFile,
    SetSelection(String),
    ExplorerMoveSelection {
        delta: isize,
    },
    ExplorerActivate,
    ExplorerClickRow {
        row: usize,
    },
    SidebarSetTab {
        tab: SidebarTab,
    },
    PaletteOpen,
    PaletteSetPrompt(String),
    PaletteSubmit,
    PaletteAccept,
    PaletteReject,
    PaletteClose,
    /// Shows the fix tooltip for the problem on `line` of the active file, or
    /// the first problem there when `line` is `None`.
    FixShow {
        line: Option<u32>,
    },
    FixRequest,
    FixApply,
    FixDismiss,
    ChatSend(String),
    GenerationReady {
        request_id: u64,
        code: String,
    },
    FixReady {
        request_id: u64,
        suggestion: String,
    },
    ChatReplyReady {
        request_id: u64,
        content: String,
    },
}
