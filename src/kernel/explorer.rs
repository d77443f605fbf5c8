use rustc_hash::FxHashSet;

use crate::models::{NodeId, SeedTree, SeedTreeRow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerActivation {
    Nothing,
    Toggled,
    OpenFile(String),
}

/// File tree sidebar. Reads the seed tree only; expansion and selection are
/// view state.
#[derive(Debug)]
pub struct ExplorerState {
    expanded: FxHashSet<NodeId>,
    rows: Vec<SeedTreeRow>,
    selected: usize,
}

impl ExplorerState {
    pub fn new(tree: &SeedTree) -> Self {
        let mut state = Self {
            expanded: FxHashSet::default(),
            rows: Vec::new(),
            selected: 0,
        };
        if let Some(src) = tree.lookup("src") {
            state.expanded.insert(src);
        }
        state.refresh_rows(tree);
        state
    }

    pub fn rows(&self) -> &[SeedTreeRow] {
        &self.rows
    }

    pub fn selected(&self) -> Option<&SeedTreeRow> {
        self.rows.get(self.selected)
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.contains(&id)
    }

    fn refresh_rows(&mut self, tree: &SeedTree) {
        let selected_id = self.selected().map(|row| row.id);
        self.rows = tree.flatten_for_view(&self.expanded);
        self.selected = selected_id
            .and_then(|id| self.rows.iter().position(|row| row.id == id))
            .unwrap_or(0)
            .min(self.rows.len().saturating_sub(1));
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.rows.is_empty() || delta == 0 {
            return false;
        }
        let prev = self.selected;
        let max = self.rows.len() as isize - 1;
        self.selected = (self.selected as isize + delta).clamp(0, max) as usize;
        self.selected != prev
    }

    pub fn toggle(&mut self, tree: &SeedTree, id: NodeId) -> bool {
        if !tree.is_folder(id) {
            return false;
        }
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
        self.refresh_rows(tree);
        true
    }

    pub fn activate_selected(&mut self, tree: &SeedTree) -> ExplorerActivation {
        let Some(row) = self.selected().cloned() else {
            return ExplorerActivation::Nothing;
        };
        if row.is_folder {
            self.toggle(tree, row.id);
            ExplorerActivation::Toggled
        } else {
            ExplorerActivation::OpenFile(row.path)
        }
    }

    pub fn click_row(&mut self, tree: &SeedTree, row: usize) -> ExplorerActivation {
        if row >= self.rows.len() {
            return ExplorerActivation::Nothing;
        }
        self.selected = row;
        self.activate_selected(tree)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/explorer.rs"]
mod tests;
