//! Error-correction tooltip: shows a problem, requests a suggested fix, and
//! previews it before it is applied.

use super::diff::DiffPreview;
use super::problems::ProblemItem;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FixPhase {
    #[default]
    Hidden,
    Shown,
    Pending {
        request_id: u64,
    },
    Preview {
        suggestion: String,
        diff: DiffPreview,
    },
}

#[derive(Debug, Default)]
pub struct FixTooltipState {
    pub phase: FixPhase,
    pub target: Option<ProblemItem>,
}

impl FixTooltipState {
    pub fn is_visible(&self) -> bool {
        self.phase != FixPhase::Hidden
    }

    pub fn pending_request(&self) -> Option<u64> {
        match self.phase {
            FixPhase::Pending { request_id } => Some(request_id),
            _ => None,
        }
    }

    pub fn show(&mut self, target: ProblemItem) -> bool {
        if self.pending_request().is_some() {
            return false;
        }
        let changed = self.phase != FixPhase::Shown || self.target.as_ref() != Some(&target);
        self.phase = FixPhase::Shown;
        self.target = Some(target);
        changed
    }

    pub fn dismiss(&mut self) -> bool {
        if !self.is_visible() {
            return false;
        }
        *self = Self::default();
        true
    }

    pub fn begin(&mut self, request_id: u64) -> bool {
        if self.phase != FixPhase::Shown || self.target.is_none() {
            return false;
        }
        self.phase = FixPhase::Pending { request_id };
        true
    }

    pub fn complete(&mut self, request_id: u64, suggestion: String) -> bool {
        if self.pending_request() != Some(request_id) {
            return false;
        }
        let Some(target) = self.target.as_ref() else {
            return false;
        };
        let diff = DiffPreview::new(target.message.clone(), target.code.clone(), suggestion.clone());
        self.phase = FixPhase::Preview { suggestion, diff };
        true
    }

    /// Takes the previewed fix and its problem, hiding the tooltip.
    pub fn accept(&mut self) -> Option<(ProblemItem, String)> {
        if !matches!(self.phase, FixPhase::Preview { .. }) {
            return None;
        }
        match std::mem::take(self) {
            Self {
                phase: FixPhase::Preview { suggestion, .. },
                target: Some(target),
            } => Some((target, suggestion)),
            _ => None,
        }
    }
}

/// Replaces the first occurrence of `snippet` in `text`. An empty replacement
/// for a snippet that fills a whole line drops the line. `None` if the snippet
/// is not present.
pub fn replace_snippet(text: &str, snippet: &str, replacement: &str) -> Option<String> {
    if snippet.is_empty() || !text.contains(snippet) {
        return None;
    }
    if replacement.trim().is_empty() {
        let lines: Vec<&str> = text.split('\n').collect();
        if let Some(index) = lines.iter().position(|line| line.trim() == snippet.trim()) {
            let kept: Vec<&str> = lines
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, line)| *line)
                .collect();
            return Some(kept.join("\n"));
        }
    }
    Some(text.replacen(snippet, replacement, 1))
}
