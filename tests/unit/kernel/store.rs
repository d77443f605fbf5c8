use super::*;
use crate::kernel::{ChatSender, FixPhase, PalettePhase};
use crate::models::{default_workspace, DEFAULT_FILE};

fn new_store() -> Store {
    Store::new(AppState::new(default_workspace().unwrap(), DEFAULT_FILE))
}

fn only_effect(result: DispatchResult) -> Effect {
    assert_eq!(result.effects.len(), 1, "{:?}", result.effects);
    result.effects.into_iter().next().unwrap()
}

fn submit_prompt(store: &mut Store, prompt: &str) -> Effect {
    store.dispatch(Action::PaletteOpen);
    store.dispatch(Action::PaletteSetPrompt(prompt.to_string()));
    only_effect(store.dispatch(Action::PaletteSubmit))
}

#[test]
fn starts_on_default_file() {
    let store = new_store();
    assert_eq!(store.state().files.active_path(), Some(DEFAULT_FILE));
    assert_eq!(store.state().problems.items().len(), 3);
    assert_eq!(store.state().ui.focus, FocusTarget::Editor);
}

#[test]
fn palette_rewrites_whole_file_as_previewed() {
    let mut store = new_store();
    let original = store.state().files.active_text().to_string();

    let effect = submit_prompt(&mut store, "add typescript types");
    let Effect::GenerateCode {
        request_id,
        prompt,
        code,
    } = effect
    else {
        panic!("unexpected effect");
    };
    assert_eq!(code, original);
    assert_eq!(store.state().ui.focus, FocusTarget::CommandPalette);

    let stale = store.dispatch(Action::GenerationReady {
        request_id: request_id + 100,
        code: "nope".into(),
    });
    assert!(!stale.state_changed);

    let generated = crate::kernel::assist::generate_code(&prompt, &code);
    let ready = store.dispatch(Action::GenerationReady {
        request_id,
        code: generated.clone(),
    });
    assert!(ready.state_changed);
    let proposed = {
        let diff = store.state().ui.palette.preview().unwrap();
        assert_eq!(diff.original, original);
        diff.proposed.clone()
    };
    assert_eq!(proposed, generated);

    assert!(store.dispatch(Action::PaletteAccept).state_changed);
    assert!(!store.state().ui.palette.is_open());
    let text = store.state().files.active_text();
    assert_eq!(text, proposed);
    assert_eq!(text.matches("function fetchData").count(), 1);
    assert!(store.state().files.is_dirty(DEFAULT_FILE));
}

#[test]
fn palette_result_lands_in_the_file_it_was_asked_about() {
    let mut store = new_store();
    let home = store.state().files.active_text().to_string();
    let helpers_path = "src/utils/helpers.ts";

    let request_id = submit_prompt(&mut store, "refactor").request_id();
    store.dispatch(Action::OpenFile(helpers_path.into()));
    let helpers = store.state().files.active_text().to_string();

    store.dispatch(Action::GenerationReady {
        request_id,
        code: "// rewritten home".into(),
    });
    assert_eq!(store.state().ui.palette.preview().unwrap().original, home);
    assert_eq!(
        store.state().ui.palette.target().map(|t| t.path.as_str()),
        Some(DEFAULT_FILE)
    );

    store.dispatch(Action::PaletteAccept);
    assert_eq!(store.state().files.contents(helpers_path), Some(helpers.as_str()));
    assert!(!store.state().files.is_dirty(helpers_path));
    assert_eq!(store.state().files.contents(DEFAULT_FILE), Some("// rewritten home"));
    assert!(store.state().files.is_dirty(DEFAULT_FILE));
}

#[test]
fn palette_result_reopens_a_closed_target() {
    let mut store = new_store();
    let request_id = submit_prompt(&mut store, "refactor").request_id();
    store.dispatch(Action::OpenFile("package.json".into()));
    store.dispatch(Action::CloseFile(DEFAULT_FILE.into()));

    store.dispatch(Action::GenerationReady {
        request_id,
        code: "// rewritten home".into(),
    });
    store.dispatch(Action::PaletteAccept);
    assert!(store.state().files.is_open(DEFAULT_FILE));
    assert_eq!(store.state().files.contents(DEFAULT_FILE), Some("// rewritten home"));
    assert!(!store.state().files.is_dirty("package.json"));
}

#[test]
fn palette_replaces_selection() {
    let mut store = new_store();
    let selection = "const unusedVar = 'This variable is never used';";
    store.dispatch(Action::SetSelection(selection.to_string()));

    let effect = submit_prompt(&mut store, "wrap in try catch");
    let Effect::GenerateCode {
        request_id, code, ..
    } = effect
    else {
        panic!("unexpected effect");
    };
    assert_eq!(code, selection);

    store.dispatch(Action::GenerationReady {
        request_id,
        code: "let used = 1;".into(),
    });
    store.dispatch(Action::PaletteAccept);

    let text = store.state().files.active_text();
    assert!(text.contains("  let used = 1;\n"));
    assert!(!text.contains("unusedVar"));
}

#[test]
fn blank_prompt_does_not_submit() {
    let mut store = new_store();
    store.dispatch(Action::PaletteOpen);
    store.dispatch(Action::PaletteSetPrompt("   ".into()));
    let result = store.dispatch(Action::PaletteSubmit);
    assert!(result.effects.is_empty());
    assert!(!result.state_changed);
    assert_eq!(store.state().ui.palette.phase, PalettePhase::Editing);
}

#[test]
fn escape_forgets_pending_generation() {
    let mut store = new_store();
    let request_id = submit_prompt(&mut store, "add types").request_id();

    assert!(store.dispatch(Action::RunCommand(Command::Escape)).state_changed);
    assert!(!store.state().ui.palette.is_open());
    assert_eq!(store.state().ui.focus, FocusTarget::Editor);

    let late = store.dispatch(Action::GenerationReady {
        request_id,
        code: "x".into(),
    });
    assert!(!late.state_changed);
    assert!(!store.state().ui.palette.is_open());
}

#[test]
fn reject_keeps_prompt() {
    let mut store = new_store();
    let request_id = submit_prompt(&mut store, "add types").request_id();
    store.dispatch(Action::GenerationReady {
        request_id,
        code: "x".into(),
    });
    assert!(store.dispatch(Action::PaletteReject).state_changed);
    assert_eq!(store.state().ui.palette.phase, PalettePhase::Editing);
    assert_eq!(store.state().ui.palette.prompt, "add types");
    assert!(!store.state().files.is_dirty(DEFAULT_FILE));
}

#[test]
fn fix_flow_removes_unused_variable() {
    let mut store = new_store();
    assert!(store.dispatch(Action::FixShow { line: None }).state_changed);
    assert_eq!(store.state().ui.fix.target.as_ref().map(|p| p.line), Some(15));

    let effect = only_effect(store.dispatch(Action::FixRequest));
    let Effect::SuggestFix {
        request_id,
        message,
        code,
    } = effect
    else {
        panic!("unexpected effect");
    };
    assert!(message.contains("unusedVar"));
    assert_eq!(code, "const unusedVar = 'This variable is never used';");

    assert!(store.dispatch(Action::FixRequest).effects.is_empty());

    let suggestion = crate::kernel::assist::suggest_fix(&message, &code);
    assert!(store
        .dispatch(Action::FixReady {
            request_id,
            suggestion
        })
        .state_changed);
    assert!(matches!(store.state().ui.fix.phase, FixPhase::Preview { .. }));

    let before_lines = store.state().files.active_text().lines().count();
    assert!(store.dispatch(Action::FixApply).state_changed);

    let text = store.state().files.active_text();
    assert!(!text.contains("unusedVar"));
    assert_eq!(text.lines().count(), before_lines - 1);
    assert!(store.state().files.is_dirty(DEFAULT_FILE));
    assert!(!store.state().ui.fix.is_visible());

    let lines: Vec<u32> = store.state().problems.items().iter().map(|p| p.line).collect();
    assert_eq!(lines, vec![8, 3]);
}

#[test]
fn fix_with_missing_code_still_resolves_problem() {
    let mut store = new_store();
    store.dispatch(Action::FixShow { line: Some(8) });
    let request_id = only_effect(store.dispatch(Action::FixRequest)).request_id();
    store.dispatch(Action::FixReady {
        request_id,
        suggestion: "console.log(`x`);".into(),
    });
    let before = store.state().files.active_text().to_string();

    store.dispatch(Action::FixApply);
    assert_eq!(store.state().files.active_text(), before);
    assert_eq!(store.state().problems.items().len(), 2);
    assert!(store.state().problems.at_line(DEFAULT_FILE, 8).is_none());
}

#[test]
fn fix_show_needs_a_problem_in_active_file() {
    let mut store = new_store();
    store.dispatch(Action::OpenFile("package.json".into()));
    assert!(!store.dispatch(Action::FixShow { line: None }).state_changed);
    assert!(!store.state().ui.fix.is_visible());
}

#[test]
fn chat_allows_one_reply_in_flight() {
    let mut store = new_store();
    assert!(store.dispatch(Action::ChatSend("  ".into())).effects.is_empty());

    let effect = only_effect(store.dispatch(Action::ChatSend("how do I save?".into())));
    let Effect::ChatReply { request_id, query } = effect else {
        panic!("unexpected effect");
    };
    assert_eq!(query, "how do I save?");

    let busy = store.dispatch(Action::ChatSend("again".into()));
    assert!(busy.effects.is_empty());
    assert!(!busy.state_changed);

    assert!(!store
        .dispatch(Action::ChatReplyReady {
            request_id: request_id + 1,
            content: "stale".into()
        })
        .state_changed);
    assert!(store
        .dispatch(Action::ChatReplyReady {
            request_id,
            content: "Press Ctrl+S".into()
        })
        .state_changed);

    let messages = store.state().chat.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2].sender, ChatSender::Assistant);
    assert_eq!(messages[2].content, "Press Ctrl+S");
}

#[test]
fn request_ids_are_unique_across_channels() {
    let mut store = new_store();
    let a = submit_prompt(&mut store, "add types").request_id();
    let b = only_effect(store.dispatch(Action::ChatSend("hi".into()))).request_id();
    store.dispatch(Action::FixShow { line: None });
    let c = only_effect(store.dispatch(Action::FixRequest)).request_id();
    assert!(a != b && b != c && a != c);
}

#[test]
fn tab_commands() {
    let mut store = new_store();
    store.dispatch(Action::OpenFile("README.md".into()));
    store.dispatch(Action::OpenFile("package.json".into()));

    assert!(store.dispatch(Action::RunCommand(Command::NextTab)).state_changed);
    assert_eq!(store.state().files.active_path(), Some(DEFAULT_FILE));
    store.dispatch(Action::RunCommand(Command::PrevTab));
    assert_eq!(store.state().files.active_path(), Some("package.json"));

    store.dispatch(Action::RunCommand(Command::CloseTab));
    assert_eq!(store.state().files.active_path(), Some(DEFAULT_FILE));
    assert_eq!(store.state().files.open_paths().len(), 2);
}

#[test]
fn save_command_clears_dirty() {
    let mut store = new_store();
    store.dispatch(Action::EditFile {
        path: DEFAULT_FILE.into(),
        text: "x".into(),
    });
    assert!(store.state().files.is_dirty(DEFAULT_FILE));
    assert!(store.dispatch(Action::RunCommand(Command::Save)).state_changed);
    assert!(!store.state().files.is_dirty(DEFAULT_FILE));
    assert_eq!(store.state().files.saved_contents(DEFAULT_FILE), Some("x"));
    assert!(!store.dispatch(Action::RunCommand(Command::Save)).state_changed);
}

#[test]
fn edit_of_closed_file_is_rejected() {
    let mut store = new_store();
    let result = store.dispatch(Action::EditFile {
        path: "README.md".into(),
        text: "x".into(),
    });
    assert!(!result.state_changed);
    assert!(!store.state().files.is_dirty("README.md"));
}

#[test]
fn submit_routes_by_state() {
    let mut store = new_store();
    store.dispatch(Action::RunCommand(Command::FixProblem));
    assert_eq!(store.state().ui.fix.phase, FixPhase::Shown);

    let effect = only_effect(store.dispatch(Action::RunCommand(Command::Submit)));
    assert!(matches!(effect, Effect::SuggestFix { .. }));

    store.dispatch(Action::RunCommand(Command::Escape));
    assert!(!store.state().ui.fix.is_visible());
}

#[test]
fn toggle_chat_moves_focus() {
    let mut store = new_store();
    store.dispatch(Action::RunCommand(Command::ToggleChat));
    assert_eq!(store.state().ui.sidebar_tab, SidebarTab::Chat);
    assert_eq!(store.state().ui.focus, FocusTarget::Chat);
    store.dispatch(Action::RunCommand(Command::ToggleChat));
    assert_eq!(store.state().ui.sidebar_tab, SidebarTab::Explorer);
}

#[test]
fn explorer_click_opens_file() {
    let mut store = new_store();
    let result = store.dispatch(Action::ExplorerClickRow { row: 3 });
    assert!(result.state_changed);
    assert_eq!(store.state().files.active_path(), Some("package.json"));
    assert_eq!(store.state().ui.focus, FocusTarget::Editor);

    store.dispatch(Action::ExplorerClickRow { row: 0 });
    assert_eq!(store.state().explorer.rows().len(), 3);
    assert_eq!(store.state().ui.focus, FocusTarget::Explorer);
}

#[test]
fn quit_sets_flag() {
    let mut store = new_store();
    assert!(store.dispatch(Action::RunCommand(Command::Quit)).state_changed);
    assert!(store.state().ui.should_quit);
}

#[test]
fn palette_needs_an_open_file() {
    let mut store = new_store();
    store.dispatch(Action::RunCommand(Command::CloseTab));
    assert_eq!(store.state().files.active_path(), None);
    store.dispatch(Action::PaletteOpen);
    store.dispatch(Action::PaletteSetPrompt("add types".into()));
    let result = store.dispatch(Action::PaletteSubmit);
    assert!(result.effects.is_empty());
    assert_eq!(store.state().ui.palette.phase, PalettePhase::Editing);
}
