//! Palette, fix tooltip and chat: each channel has at most one request in
//! flight, and a result whose id is no longer awaited is dropped.

use crate::kernel::fix::{replace_snippet, FixPhase};
use crate::kernel::palette::PaletteTarget;
use crate::kernel::{Action, Effect, FocusTarget};

impl super::Store {
    pub(super) fn reduce_assist_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::PaletteOpen => {
                let selection = self.state.ui.selection.clone();
                if !self.state.ui.palette.open(selection) {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                self.state.ui.focus = FocusTarget::CommandPalette;
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::PaletteSetPrompt(prompt) => super::DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.ui.palette.set_prompt(prompt),
            },
            Action::PaletteSubmit => {
                let Some(path) = self.state.files.active_path().map(str::to_string) else {
                    tracing::warn!("generation not requested: no active file");
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };
                if !self.state.ui.palette.can_submit() {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                let request_id = self.state.alloc_request_id();
                let prompt = self.state.ui.palette.prompt.clone();
                let target = self.palette_target(path);
                let code = target.original.clone();
                tracing::info!(request_id, path = %target.path, prompt = %prompt, "generation requested");
                self.state.ui.palette.begin(request_id, target);
                super::DispatchResult {
                    effects: vec![Effect::GenerateCode {
                        request_id,
                        prompt,
                        code,
                    }],
                    state_changed: true,
                }
            }
            Action::GenerationReady { request_id, code } => {
                let accepted = self.state.ui.palette.complete(request_id, code);
                if !accepted {
                    tracing::debug!(request_id, "stale generation dropped");
                }
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: accepted,
                }
            }
            Action::PaletteAccept => {
                let Some((diff, target)) = self.state.ui.palette.accept() else {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };
                self.state.ui.focus = FocusTarget::Editor;

                if !self.state.files.is_open(&target.path) {
                    self.state.files.open(&target.path);
                }
                let merged = self
                    .state
                    .files
                    .contents(&target.path)
                    .map(|current| target.apply(current, &diff.proposed));
                match merged {
                    Some(text) => match self.state.files.edit(&target.path, text) {
                        Ok(()) => tracing::info!(path = %target.path, "generated code applied"),
                        Err(e) => tracing::warn!(error = %e, "generated code not applied"),
                    },
                    None => tracing::warn!(path = %target.path, "generated code discarded: file gone"),
                }
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::PaletteReject => super::DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.ui.palette.reject(),
            },
            Action::PaletteClose => {
                let closed = self.state.ui.palette.close();
                if self.state.ui.focus == FocusTarget::CommandPalette {
                    self.state.ui.focus = FocusTarget::Editor;
                }
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: closed,
                }
            }
            Action::FixShow { line } => {
                let Some(path) = self.state.files.active_path() else {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };
                let target = match line {
                    Some(line) => self.state.problems.at_line(path, line),
                    None => self.state.problems.first_for(path).map(|(_, item)| item),
                };
                let Some(target) = target.cloned() else {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: self.state.ui.fix.show(target),
                }
            }
            Action::FixRequest => {
                let target = match (&self.state.ui.fix.phase, &self.state.ui.fix.target) {
                    (FixPhase::Shown, Some(target)) => target.clone(),
                    _ => {
                        return super::DispatchResult {
                            effects: Vec::new(),
                            state_changed: false,
                        };
                    }
                };
                let request_id = self.state.alloc_request_id();
                self.state.ui.fix.begin(request_id);
                tracing::info!(request_id, line = target.line, "fix requested");
                super::DispatchResult {
                    effects: vec![Effect::SuggestFix {
                        request_id,
                        message: target.message,
                        code: target.code,
                    }],
                    state_changed: true,
                }
            }
            Action::FixReady {
                request_id,
                suggestion,
            } => {
                let accepted = self.state.ui.fix.complete(request_id, suggestion);
                if !accepted {
                    tracing::debug!(request_id, "stale fix dropped");
                }
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: accepted,
                }
            }
            Action::FixApply => {
                let Some((problem, suggestion)) = self.state.ui.fix.accept() else {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };

                if !self.state.files.is_open(&problem.path) {
                    self.state.files.open(&problem.path);
                }
                let replaced = self
                    .state
                    .files
                    .contents(&problem.path)
                    .and_then(|text| replace_snippet(text, &problem.code, &suggestion));
                match replaced {
                    Some(text) => {
                        if let Err(e) = self.state.files.edit(&problem.path, text) {
                            tracing::warn!(error = %e, "fix not applied");
                        }
                    }
                    None => {
                        tracing::warn!(path = %problem.path, line = problem.line, "problem code not found; file left unchanged");
                    }
                }

                if let Some(index) = self
                    .state
                    .problems
                    .items()
                    .iter()
                    .position(|item| *item == problem)
                {
                    self.state.problems.resolve(index);
                }
                tracing::info!(path = %problem.path, line = problem.line, "problem resolved");

                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::FixDismiss => super::DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.ui.fix.dismiss(),
            },
            Action::ChatSend(content) => {
                if self.state.chat.pending_request().is_some() || content.trim().is_empty() {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                let request_id = self.state.alloc_request_id();
                self.state.chat.send(&content, request_id);
                super::DispatchResult {
                    effects: vec![Effect::ChatReply {
                        request_id,
                        query: content,
                    }],
                    state_changed: true,
                }
            }
            Action::ChatReplyReady {
                request_id,
                content,
            } => {
                let accepted = self.state.chat.receive(request_id, content);
                if !accepted {
                    tracing::debug!(request_id, "stale chat reply dropped");
                }
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: accepted,
                }
            }
            other => {
                tracing::debug!(action = ?other, "action not handled");
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: false,
                }
            }
        }
    }

    /// Pins a request to `path`: the selection, or the whole file when nothing
    /// is selected.
    fn palette_target(&self, path: String) -> PaletteTarget {
        let selection = &self.state.ui.palette.selection;
        if !selection.is_empty() {
            return PaletteTarget {
                path,
                original: selection.clone(),
                whole_file: false,
            };
        }
        PaletteTarget {
            original: self.state.files.contents(&path).unwrap_or_default().to_string(),
            path,
            whole_file: true,
        }
    }
}
