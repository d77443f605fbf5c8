use super::*;

#[test]
fn test_command_names() {
    assert_eq!(Command::Save.name(), "save");
    assert_eq!(Command::CommandPalette.name(), "commandPalette");
    assert_eq!(Command::Custom("myCommand".to_string()).name(), "myCommand");
}

#[test]
fn test_from_name() {
    for cmd in [
        Command::Save,
        Command::CloseTab,
        Command::NextTab,
        Command::PrevTab,
        Command::CommandPalette,
        Command::ToggleChat,
        Command::FixProblem,
        Command::FocusExplorer,
        Command::FocusEditor,
        Command::ExplorerUp,
        Command::ExplorerDown,
        Command::ExplorerActivate,
        Command::Escape,
        Command::Submit,
        Command::Quit,
    ] {
        assert_eq!(Command::from_name(cmd.name()), cmd);
    }
    assert_eq!(
        Command::from_name("openTerminal"),
        Command::Custom("openTerminal".to_string())
    );
}

#[test]
fn test_is_tab_command() {
    assert!(Command::Save.is_tab_command());
    assert!(Command::PrevTab.is_tab_command());
    assert!(!Command::Quit.is_tab_command());
}
