use crate::models::SeedTree;

use super::chat::ChatState;
use super::explorer::ExplorerState;
use super::files::VirtualFileStore;
use super::fix::FixTooltipState;
use super::palette::InlinePaletteState;
use super::problems::ProblemsState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Explorer,
    Editor,
    CommandPalette,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarTab {
    #[default]
    Explorer,
    Chat,
}

#[derive(Debug)]
pub struct UiState {
    pub focus: FocusTarget,
    pub sidebar_tab: SidebarTab,
    pub palette: InlinePaletteState,
    pub fix: FixTooltipState,
    /// Text currently selected in the editor; the palette works on it.
    pub selection: String,
    pub should_quit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            focus: FocusTarget::Editor,
            sidebar_tab: SidebarTab::Explorer,
            palette: InlinePaletteState::default(),
            fix: FixTooltipState::default(),
            selection: String::new(),
            should_quit: false,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub files: VirtualFileStore,
    pub explorer: ExplorerState,
    pub problems: ProblemsState,
    pub chat: ChatState,
    pub ui: UiState,
    next_request_id: u64,
}

impl AppState {
    pub fn new(tree: SeedTree, default_file: &str) -> Self {
        let files = VirtualFileStore::new(tree, default_file);
        let explorer = ExplorerState::new(files.tree());
        Self {
            files,
            explorer,
            problems: ProblemsState::seeded(),
            chat: ChatState::new(),
            ui: UiState::default(),
            next_request_id: 1,
        }
    }

    /// Ids are unique for the session across all assistant channels.
    pub fn alloc_request_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }
}
