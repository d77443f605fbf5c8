//! Inline AI command palette: prompt entry, pending generation, diff preview.

use super::diff::DiffPreview;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PalettePhase {
    #[default]
    Closed,
    Editing,
    Pending {
        request_id: u64,
        target: PaletteTarget,
    },
    Preview {
        diff: DiffPreview,
        target: PaletteTarget,
    },
}

/// What a generation request was made against, captured at submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteTarget {
    pub path: String,
    /// Code sent to the assistant.
    pub original: String,
    /// Nothing was selected, so `original` is the whole file.
    pub whole_file: bool,
}

impl PaletteTarget {
    /// Writes `generated` into `text`, the current contents of `path`.
    pub fn apply(&self, text: &str, generated: &str) -> String {
        let selection = if self.whole_file { "" } else { self.original.as_str() };
        merge_generated(text, selection, generated)
    }
}

#[derive(Debug, Default)]
pub struct InlinePaletteState {
    pub phase: PalettePhase,
    pub prompt: String,
    /// Snippet the palette was opened on; empty means the whole file.
    pub selection: String,
}

impl InlinePaletteState {
    pub fn is_open(&self) -> bool {
        self.phase != PalettePhase::Closed
    }

    pub fn pending_request(&self) -> Option<u64> {
        match self.phase {
            PalettePhase::Pending { request_id, .. } => Some(request_id),
            _ => None,
        }
    }

    pub fn preview(&self) -> Option<&DiffPreview> {
        match &self.phase {
            PalettePhase::Preview { diff, .. } => Some(diff),
            _ => None,
        }
    }

    pub fn target(&self) -> Option<&PaletteTarget> {
        match &self.phase {
            PalettePhase::Pending { target, .. } | PalettePhase::Preview { target, .. } => {
                Some(target)
            }
            _ => None,
        }
    }

    pub fn open(&mut self, selection: String) -> bool {
        if self.is_open() {
            return false;
        }
        self.phase = PalettePhase::Editing;
        self.prompt.clear();
        self.selection = selection;
        true
    }

    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        *self = Self::default();
        true
    }

    pub fn set_prompt(&mut self, prompt: String) -> bool {
        if self.phase != PalettePhase::Editing || self.prompt == prompt {
            return false;
        }
        self.prompt = prompt;
        true
    }

    /// Whether a submit would start a request: editing, with a non-blank prompt.
    pub fn can_submit(&self) -> bool {
        self.phase == PalettePhase::Editing && !self.prompt.trim().is_empty()
    }

    pub fn begin(&mut self, request_id: u64, target: PaletteTarget) {
        self.phase = PalettePhase::Pending { request_id, target };
    }

    /// Moves to preview if `request_id` is the one being waited on. The diff
    /// is against the code captured at submit.
    pub fn complete(&mut self, request_id: u64, generated: String) -> bool {
        if self.pending_request() != Some(request_id) {
            return false;
        }
        let PalettePhase::Pending { target, .. } = std::mem::take(&mut self.phase) else {
            return false;
        };
        self.phase = PalettePhase::Preview {
            diff: DiffPreview::new("Code Changes Preview", target.original.clone(), generated),
            target,
        };
        true
    }

    /// Drops the preview and returns to prompt entry, keeping the prompt.
    pub fn reject(&mut self) -> bool {
        if self.preview().is_none() {
            return false;
        }
        self.phase = PalettePhase::Editing;
        true
    }

    /// Takes the preview and the target it applies to, closing the palette.
    pub fn accept(&mut self) -> Option<(DiffPreview, PaletteTarget)> {
        self.preview()?;
        match std::mem::take(self).phase {
            PalettePhase::Preview { diff, target } => Some((diff, target)),
            _ => None,
        }
    }
}

/// Writes accepted code into `text`: over the first occurrence of `selection`
/// when there is one, otherwise after the existing text. An empty selection
/// means the code is a rewrite of the whole text.
pub fn merge_generated(text: &str, selection: &str, generated: &str) -> String {
    if selection.is_empty() {
        return generated.to_string();
    }
    if text.contains(selection) {
        return text.replacen(selection, generated, 1);
    }
    if text.is_empty() {
        generated.to_string()
    } else if text.ends_with('\n') {
        format!("{text}{generated}")
    } else {
        format!("{text}\n{generated}")
    }
}
