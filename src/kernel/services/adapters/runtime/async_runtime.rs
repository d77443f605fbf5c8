use super::message::AppMessage;
use crate::kernel::assist::{AssistKind, Assistant};
use crate::kernel::services::ports::LatencySettings;
use crate::kernel::Effect;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::io;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
    assistant: Arc<dyn Assistant>,
    latency: LatencySettings,
}

impl AsyncRuntime {
    pub fn new(
        tx: Sender<AppMessage>,
        assistant: Arc<dyn Assistant>,
        latency: LatencySettings,
    ) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self {
            runtime,
            tx,
            assistant,
            latency,
        })
    }

    /// How long the assistant takes to answer `request_id`.
    pub fn delay_for(&self, kind: AssistKind, request_id: u64) -> Duration {
        self.latency.profile(kind).delay(jitter_seed(request_id))
    }

    pub fn execute(&self, effect: Effect) {
        match effect {
            Effect::GenerateCode {
                request_id,
                prompt,
                code,
            } => self.respond(AssistKind::Generate, request_id, move |assistant| {
                AppMessage::GenerationReady {
                    request_id,
                    code: assistant.generate(&prompt, &code),
                }
            }),
            Effect::SuggestFix {
                request_id,
                message,
                code,
            } => self.respond(AssistKind::Fix, request_id, move |assistant| {
                AppMessage::FixReady {
                    request_id,
                    suggestion: assistant.suggest_fix(&message, &code),
                }
            }),
            Effect::ChatReply { request_id, query } => {
                self.respond(AssistKind::Chat, request_id, move |assistant| {
                    AppMessage::ChatReplyReady {
                        request_id,
                        content: assistant.reply(&query),
                    }
                })
            }
        }
    }

    fn respond<F>(&self, kind: AssistKind, request_id: u64, answer: F)
    where
        F: FnOnce(&dyn Assistant) -> AppMessage + Send + 'static,
    {
        let delay = self.delay_for(kind, request_id);
        let assistant = Arc::clone(&self.assistant);
        let tx = self.tx.clone();
        tracing::debug!(
            kind = kind.label(),
            request_id,
            delay_ms = delay.as_millis() as u64,
            "assistant request scheduled"
        );
        self.runtime.spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let message = answer(assistant.as_ref());
            if tx.send(message).is_err() {
                tracing::debug!(request_id, "receiver gone; assistant response dropped");
            }
        });
    }
}

fn jitter_seed(request_id: u64) -> u64 {
    let mut hasher = FxHasher::default();
    request_id.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/async_runtime.rs"]
mod tests;
