//! Semantic commands.
//!
//! A `Command` names an intent, not a key; `KeybindingService` maps keys to commands.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== Files ====================
    Save,
    CloseTab,
    NextTab,
    PrevTab,

    // ==================== Assistant ====================
    /// Opens the inline palette on the current selection.
    CommandPalette,
    ToggleChat,
    FixProblem,

    // ==================== View ====================
    FocusExplorer,
    FocusEditor,
    ExplorerUp,
    ExplorerDown,
    ExplorerActivate,

    // ==================== System ====================
    Escape,
    Submit,
    Quit,

    // ==================== Extension ====================
    Custom(String),
}

impl Command {
    pub fn name(&self) -> &str {
        match self {
            Command::Save => "save",
            Command::CloseTab => "closeTab",
            Command::NextTab => "nextTab",
            Command::PrevTab => "prevTab",
            Command::CommandPalette => "commandPalette",
            Command::ToggleChat => "toggleChat",
            Command::FixProblem => "fixProblem",
            Command::FocusExplorer => "focusExplorer",
            Command::FocusEditor => "focusEditor",
            Command::ExplorerUp => "explorerUp",
            Command::ExplorerDown => "explorerDown",
            Command::ExplorerActivate => "explorerActivate",
            Command::Escape => "escape",
            Command::Submit => "submit",
            Command::Quit => "quit",
            Command::Custom(name) => name,
        }
    }

    /// Inverse of [`Command::name`]; unknown names become `Custom`.
    pub fn from_name(name: &str) -> Command {
        match name.trim() {
            "save" => Command::Save,
            "closeTab" => Command::CloseTab,
            "nextTab" => Command::NextTab,
            "prevTab" => Command::PrevTab,
            "commandPalette" => Command::CommandPalette,
            "toggleChat" => Command::ToggleChat,
            "fixProblem" => Command::FixProblem,
            "focusExplorer" => Command::FocusExplorer,
            "focusEditor" => Command::FocusEditor,
            "explorerUp" => Command::ExplorerUp,
            "explorerDown" => Command::ExplorerDown,
            "explorerActivate" => Command::ExplorerActivate,
            "escape" => Command::Escape,
            "submit" => Command::Submit,
            "quit" => Command::Quit,
            other => Command::Custom(other.to_string()),
        }
    }

    pub fn is_tab_command(&self) -> bool {
        matches!(
            self,
            Command::Save | Command::CloseTab | Command::NextTab | Command::PrevTab
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
