//! Simulated AI assistant.
//!
//! Responses are pure functions of their inputs so a real backend can replace
//! [`CannedAssistant`] without touching the editor state machine.

use regex::Regex;
use std::sync::OnceLock;

mod correct;
mod generate;
mod reply;

pub use correct::suggest_fix;
pub use generate::generate_code;
pub use reply::chat_reply;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssistKind {
    Generate,
    Fix,
    Chat,
}

impl AssistKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Generate => "generate",
            Self::Fix => "fix",
            Self::Chat => "chat",
        }
    }
}

pub trait Assistant: Send + Sync {
    /// Code for the inline palette, from the user's prompt and the selected code.
    fn generate(&self, prompt: &str, code: &str) -> String;
    /// Replacement for `code` that addresses the diagnostic `message`.
    fn suggest_fix(&self, message: &str, code: &str) -> String;
    fn reply(&self, query: &str) -> String;
}

/// Keyword-matching responder with fixed templates.
#[derive(Debug, Default, Clone, Copy)]
pub struct CannedAssistant;

impl Assistant for CannedAssistant {
    fn generate(&self, prompt: &str, code: &str) -> String {
        generate_code(prompt, code)
    }

    fn suggest_fix(&self, message: &str, code: &str) -> String {
        suggest_fix(message, code)
    }

    fn reply(&self, query: &str) -> String {
        chat_reply(query)
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Compiles `pattern` once. The patterns are literals, so a failed compile only
/// disables the extraction that uses it.
fn cached_regex(cell: &'static OnceLock<Option<Regex>>, pattern: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::error!(pattern, error = %e, "invalid assistant pattern");
            None
        }
    })
    .as_ref()
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/assist.rs"]
mod tests;
