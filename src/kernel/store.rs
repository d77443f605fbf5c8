use crate::core::Command;

use super::{Action, AppState, Effect, FocusTarget, SidebarTab};

mod assist;
mod explorer;

#[derive(Debug)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::OpenFile(path) => {
                let opened = self.state.files.open(&path);
                if !opened {
                    tracing::warn!(path = %path, "open ignored: no such file");
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                self.state.ui.focus = FocusTarget::Editor;
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::CloseFile(path) => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.files.close(&path),
            },
            Action::EditFile { path, text } => match self.state.files.edit(&path, text) {
                Ok(()) => DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                },
                Err(e) => {
                    tracing::warn!(error = %e, "edit rejected");
                    DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    }
                }
            },
            Action::SaveFile => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.files.save_active(),
            },
            Action::SetSelection(text) => {
                if self.state.ui.selection == text {
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                self.state.ui.selection = text;
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::SidebarSetTab { tab } => {
                let prev_tab = self.state.ui.sidebar_tab;
                let prev_focus = self.state.ui.focus;
                self.state.ui.sidebar_tab = tab;
                self.state.ui.focus = match tab {
                    SidebarTab::Explorer => FocusTarget::Explorer,
                    SidebarTab::Chat => FocusTarget::Chat,
                };
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: prev_tab != tab || prev_focus != self.state.ui.focus,
                }
            }
            action @ (Action::ExplorerMoveSelection { .. }
            | Action::ExplorerActivate
            | Action::ExplorerClickRow { .. }) => self.reduce_explorer_action(action),
            other => self.reduce_assist_action(other),
        }
    }

    fn dispatch_command(&mut self, command: Command) -> DispatchResult {
        let mut state_changed = false;

        match command {
            Command::Quit => {
                self.state.ui.should_quit = true;
                state_changed = true;
            }
            Command::Save => return self.dispatch(Action::SaveFile),
            Command::CloseTab => {
                if let Some(path) = self.state.files.active_path().map(str::to_string) {
                    return self.dispatch(Action::CloseFile(path));
                }
            }
            Command::NextTab => state_changed = self.cycle_tab(1),
            Command::PrevTab => state_changed = self.cycle_tab(-1),
            Command::CommandPalette => return self.dispatch(Action::PaletteOpen),
            Command::ToggleChat => {
                let tab = match self.state.ui.sidebar_tab {
                    SidebarTab::Explorer => SidebarTab::Chat,
                    SidebarTab::Chat => SidebarTab::Explorer,
                };
                return self.dispatch(Action::SidebarSetTab { tab });
            }
            Command::FixProblem => {
                let action = if self.state.ui.fix.is_visible() {
                    Action::FixRequest
                } else {
                    Action::FixShow { line: None }
                };
                return self.dispatch(action);
            }
            Command::FocusExplorer => {
                state_changed = self.state.ui.focus != FocusTarget::Explorer
                    || self.state.ui.sidebar_tab != SidebarTab::Explorer;
                self.state.ui.focus = FocusTarget::Explorer;
                self.state.ui.sidebar_tab = SidebarTab::Explorer;
            }
            Command::FocusEditor => {
                state_changed = self.state.ui.focus != FocusTarget::Editor;
                self.state.ui.focus = FocusTarget::Editor;
            }
            Command::ExplorerUp => {
                return self.dispatch(Action::ExplorerMoveSelection { delta: -1 })
            }
            Command::ExplorerDown => {
                return self.dispatch(Action::ExplorerMoveSelection { delta: 1 })
            }
            Command::ExplorerActivate => return self.dispatch(Action::ExplorerActivate),
            Command::Escape => {
                if self.state.ui.palette.is_open() {
                    return self.dispatch(Action::PaletteClose);
                }
                if self.state.ui.fix.is_visible() {
                    return self.dispatch(Action::FixDismiss);
                }
                state_changed = self.state.ui.focus != FocusTarget::Editor;
                self.state.ui.focus = FocusTarget::Editor;
            }
            Command::Submit => {
                if let Some(action) = self.submit_target() {
                    return self.dispatch(action);
                }
            }
            Command::Custom(name) => {
                tracing::debug!(command = %name, "no handler for command");
            }
        }

        DispatchResult {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn cycle_tab(&mut self, delta: isize) -> bool {
        let Some(path) = self.state.files.neighbor_tab(delta).map(str::to_string) else {
            return false;
        };
        let changed = self.state.files.active_path() != Some(path.as_str());
        self.state.files.open(&path);
        changed
    }

    /// What Ctrl+Enter means in the current UI state.
    fn submit_target(&self) -> Option<Action> {
        let palette = &self.state.ui.palette;
        if palette.preview().is_some() {
            return Some(Action::PaletteAccept);
        }
        if palette.can_submit() {
            return Some(Action::PaletteSubmit);
        }
        match self.state.ui.fix.phase {
            super::fix::FixPhase::Shown => Some(Action::FixRequest),
            super::fix::FixPhase::Preview { .. } => Some(Action::FixApply),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
