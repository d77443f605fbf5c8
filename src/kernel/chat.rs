use std::time::SystemTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: ChatSender,
    pub content: String,
    pub timestamp: SystemTime,
}

#[derive(Debug)]
pub struct ChatState {
    messages: Vec<ChatMessage>,
    pending: Option<u64>,
    next_id: u64,
}

const GREETING: &str = "Hello! I'm Nexus AI. How can I help you with your project today?";

impl ChatState {
    pub fn new() -> Self {
        let mut state = Self {
            messages: Vec::new(),
            pending: None,
            next_id: 1,
        };
        state.push(ChatSender::Assistant, GREETING.to_string());
        state
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn pending_request(&self) -> Option<u64> {
        self.pending
    }

    /// Records the user's message and marks `request_id` as the reply being
    /// waited on. Refused while another reply is pending or for blank input.
    pub fn send(&mut self, content: &str, request_id: u64) -> bool {
        if self.pending.is_some() || content.trim().is_empty() {
            return false;
        }
        self.push(ChatSender::User, content.to_string());
        self.pending = Some(request_id);
        true
    }

    pub fn receive(&mut self, request_id: u64, content: String) -> bool {
        if self.pending != Some(request_id) {
            return false;
        }
        self.pending = None;
        self.push(ChatSender::Assistant, content);
        true
    }

    fn push(&mut self, sender: ChatSender, content: String) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            sender,
            content,
            timestamp: SystemTime::now(),
        });
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}
