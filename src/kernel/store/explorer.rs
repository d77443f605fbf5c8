use crate::kernel::explorer::ExplorerActivation;
use crate::kernel::{Action, FocusTarget, SidebarTab};

impl super::Store {
    pub(super) fn reduce_explorer_action(&mut self, action: Action) -> super::DispatchResult {
        let activation = match action {
            Action::ExplorerMoveSelection { delta } => {
                return super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: self.state.explorer.move_selection(delta),
                };
            }
            Action::ExplorerActivate => {
                let tree = self.state.files.tree();
                self.state.explorer.activate_selected(tree)
            }
            Action::ExplorerClickRow { row } => {
                let tree = self.state.files.tree();
                self.state.explorer.click_row(tree, row)
            }
            _ => {
                return super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: false,
                };
            }
        };

        let mut state_changed = self.state.ui.focus != FocusTarget::Explorer
            || self.state.ui.sidebar_tab != SidebarTab::Explorer;
        self.state.ui.focus = FocusTarget::Explorer;
        self.state.ui.sidebar_tab = SidebarTab::Explorer;

        match activation {
            ExplorerActivation::Nothing => {}
            ExplorerActivation::Toggled => state_changed = true,
            ExplorerActivation::OpenFile(path) => {
                let result = self.dispatch(Action::OpenFile(path));
                state_changed |= result.state_changed;
            }
        }

        super::DispatchResult {
            effects: Vec::new(),
            state_changed,
        }
    }
}
