#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    GenerateCode {
        request_id: u64,
        prompt: String,
        code: String,
    },
    SuggestFix {
        request_id: u64,
        message: String,
        code: String,
    },
    ChatReply {
        request_id: u64,
        query: String,
    },
}

impl Effect {
    pub fn request_id(&self) -> u64 {
        match self {
            Effect::GenerateCode { request_id, .. }
            | Effect::SuggestFix { request_id, .. }
            | Effect::ChatReply { request_id, .. } => *request_id,
        }
    }
}
