use crate::kernel::Action;

#[derive(Debug)]
pub enum AppMessage {
    GenerationReady { request_id: u64, code: String },
    FixReady { request_id: u64, suggestion: String },
    ChatReplyReady { request_id: u64, content: String },
}

impl AppMessage {
    pub fn request_id(&self) -> u64 {
        match self {
            AppMessage::GenerationReady { request_id, .. }
            | AppMessage::FixReady { request_id, .. }
            | AppMessage::ChatReplyReady { request_id, .. } => *request_id,
        }
    }

    pub fn into_action(self) -> Action {
        match self {
            AppMessage::GenerationReady { request_id, code } => {
                Action::GenerationReady { request_id, code }
            }
            AppMessage::FixReady {
                request_id,
                suggestion,
            } => Action::FixReady {
                request_id,
                suggestion,
            },
            AppMessage::ChatReplyReady {
                request_id,
                content,
            } => Action::ChatReplyReady {
                request_id,
                content,
            },
        }
    }
}
