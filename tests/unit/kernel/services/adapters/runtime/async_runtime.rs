use super::*;
use crate::kernel::assist::{chat_reply, suggest_fix, CannedAssistant};
use crate::kernel::services::ports::LatencyProfile;
use crate::kernel::Action;
use std::sync::mpsc;

fn instant_runtime() -> (AsyncRuntime, mpsc::Receiver<AppMessage>) {
    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx, Arc::new(CannedAssistant), LatencySettings::instant())
        .expect("create runtime");
    (runtime, rx)
}

#[test]
fn chat_effect_posts_reply() {
    let (runtime, rx) = instant_runtime();
    runtime.execute(Effect::ChatReply {
        request_id: 4,
        query: "how do I save?".to_string(),
    });
    let message = rx.recv_timeout(Duration::from_secs(5)).expect("reply");
    assert_eq!(message.request_id(), 4);
    match message.into_action() {
        Action::ChatReplyReady {
            request_id,
            content,
        } => {
            assert_eq!(request_id, 4);
            assert_eq!(content, chat_reply("how do I save?"));
        }
        other => panic!("unexpected action {other:?}"),
    }
}

#[test]
fn fix_effect_posts_suggestion() {
    let (runtime, rx) = instant_runtime();
    runtime.execute(Effect::SuggestFix {
        request_id: 9,
        message: "Missing semicolon.".to_string(),
        code: "let a = 1".to_string(),
    });
    let message = rx.recv_timeout(Duration::from_secs(5)).expect("suggestion");
    match message {
        AppMessage::FixReady {
            request_id,
            suggestion,
        } => {
            assert_eq!(request_id, 9);
            assert_eq!(suggestion, suggest_fix("Missing semicolon.", "let a = 1"));
        }
        other => panic!("unexpected message {other:?}"),
    }
}

#[test]
fn delay_is_deterministic_per_request() {
    let (tx, _rx) = mpsc::channel();
    let latency = LatencySettings {
        generate: LatencyProfile::new(1200, 800),
        ..LatencySettings::instant()
    };
    let runtime = AsyncRuntime::new(tx, Arc::new(CannedAssistant), latency).expect("runtime");

    let a = runtime.delay_for(AssistKind::Generate, 1);
    assert_eq!(a, runtime.delay_for(AssistKind::Generate, 1));
    assert!(a >= Duration::from_millis(1200) && a <= Duration::from_millis(2000));
    assert_eq!(runtime.delay_for(AssistKind::Chat, 1), Duration::ZERO);
}
