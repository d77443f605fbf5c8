//! Headless application core (state/action/effect).

pub mod action;
pub mod assist;
pub mod chat;
pub mod diff;
pub mod effect;
pub mod explorer;
pub mod files;
pub mod fix;
pub mod palette;
pub mod problems;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use assist::{AssistKind, Assistant, CannedAssistant};
pub use chat::{ChatMessage, ChatSender, ChatState};
pub use diff::{DiffLine, DiffLineKind, DiffPreview};
pub use effect::Effect;
pub use explorer::{ExplorerActivation, ExplorerState};
pub use files::{FileStoreError, TabItem, VirtualFileStore};
pub use fix::{FixPhase, FixTooltipState};
pub use palette::{InlinePaletteState, PalettePhase, PaletteTarget};
pub use problems::{ProblemCategory, ProblemItem, ProblemSeverity, ProblemsState};
pub use state::{AppState, FocusTarget, SidebarTab, UiState};
pub use store::{DispatchResult, Store};
