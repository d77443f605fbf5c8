//! nexus: line-driven front end for the headless editor core.
//!
//! Reads one command per line from stdin; `help` lists them.

mod logging;

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

use nexus::core::Service;
use nexus::kernel::services::adapters::{
    ensure_settings_file, load_settings, parse_keybinding, AppMessage, AsyncRuntime,
    ConfigService, KeybindingContext, KeybindingService,
};
use nexus::kernel::{Action, AppState, CannedAssistant, ChatSender, FixPhase, Store};
use nexus::models::default_workspace;

const REPLY_TIMEOUT: Duration = Duration::from_secs(30);

const HELP: &str = "\
commands:
  tree                 explorer rows
  click <row>          click an explorer row
  tabs                 open tabs
  open <path>          open a file
  close [path]         close a tab (active tab by default)
  show [path]          print a file (active file by default)
  edit <text>          replace the active file's text (\\n for newlines)
  select <text>        set the editor selection (\\n for newlines)
  save                 save the active file
  key <binding>        press a key, e.g. ctrl+s, cmd+k, ctrl+enter
  palette <prompt>     ask the assistant to generate code
  accept | reject      resolve the palette preview
  problems             list diagnostics
  fix [line]           request a fix for a problem in the active file
  apply                apply the previewed fix
  chat <message>       talk to the assistant
  wait                 wait for pending assistant replies
  status               focus and panel state
  quit";

struct Driver {
    store: Store,
    keybindings: KeybindingService,
    runtime: AsyncRuntime,
    rx: Receiver<AppMessage>,
    outstanding: usize,
}

impl Driver {
    fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.outstanding += 1;
            self.runtime.execute(effect);
        }
        result.state_changed
    }

    fn handle_message(&mut self, message: AppMessage) -> bool {
        self.outstanding = self.outstanding.saturating_sub(1);
        tracing::debug!(request_id = message.request_id(), "assistant response received");
        self.dispatch(message.into_action())
    }

    fn poll(&mut self) -> bool {
        let mut changed = false;
        loop {
            match self.rx.try_recv() {
                Ok(message) => changed |= self.handle_message(message),
                Err(_) => break,
            }
        }
        changed
    }

    fn wait(&mut self) -> bool {
        let mut changed = false;
        while self.outstanding > 0 {
            match self.rx.recv_timeout(REPLY_TIMEOUT) {
                Ok(message) => changed |= self.handle_message(message),
                Err(RecvTimeoutError::Timeout) => {
                    tracing::warn!(outstanding = self.outstanding, "assistant reply timed out");
                    break;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    self.outstanding = 0;
                    break;
                }
            }
        }
        changed
    }

    /// Runs one input line; `Ok(false)` ends the session.
    fn run_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        self.poll();

        let line = line.trim();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match cmd {
            "" => {}
            "help" => writeln!(out, "{HELP}")?,
            "tree" => self.print_tree(out)?,
            "click" => match rest.parse::<usize>() {
                Ok(row) => {
                    self.dispatch(Action::ExplorerClickRow { row });
                    self.print_tree(out)?;
                }
                Err(_) => writeln!(out, "usage: click <row>")?,
            },
            "tabs" => self.print_tabs(out)?,
            "open" => {
                if !self.dispatch(Action::OpenFile(rest.to_string()))
                    && !self.store.state().files.is_open(rest)
                {
                    writeln!(out, "no file at {rest}")?;
                }
                self.print_tabs(out)?;
            }
            "close" => {
                let path = if rest.is_empty() {
                    self.store.state().files.active_path().map(str::to_string)
                } else {
                    Some(rest.to_string())
                };
                if let Some(path) = path {
                    self.dispatch(Action::CloseFile(path));
                }
                self.print_tabs(out)?;
            }
            "show" => self.print_file(rest, out)?,
            "edit" => match self.store.state().files.active_path().map(str::to_string) {
                Some(path) => {
                    self.dispatch(Action::EditFile {
                        path,
                        text: unescape(rest),
                    });
                    self.print_tabs(out)?;
                }
                None => writeln!(out, "no file is open")?,
            },
            "select" => {
                self.dispatch(Action::SetSelection(unescape(rest)));
            }
            "save" => {
                self.dispatch(Action::SaveFile);
                self.print_tabs(out)?;
            }
            "key" => self.press(rest, out)?,
            "palette" => {
                if !self.store.state().ui.palette.is_open() {
                    self.dispatch(Action::PaletteOpen);
                }
                self.dispatch(Action::PaletteSetPrompt(rest.to_string()));
                self.dispatch(Action::PaletteSubmit);
                if self.store.state().ui.palette.pending_request().is_none() {
                    writeln!(out, "nothing to submit")?;
                }
            }
            "accept" => {
                self.dispatch(Action::PaletteAccept);
                self.print_tabs(out)?;
            }
            "reject" => {
                self.dispatch(Action::PaletteReject);
            }
            "problems" => self.print_problems(out)?,
            "fix" => {
                let line = rest.parse::<u32>().ok();
                self.dispatch(Action::FixShow { line });
                let target = self
                    .store
                    .state()
                    .ui
                    .fix
                    .target
                    .as_ref()
                    .map(|target| format!("line {}: {}", target.line, target.message));
                match target {
                    Some(target) => {
                        writeln!(out, "{target}")?;
                        self.dispatch(Action::FixRequest);
                    }
                    None => writeln!(out, "no problem to fix")?,
                }
            }
            "apply" => {
                self.dispatch(Action::FixApply);
                self.print_problems(out)?;
            }
            "chat" => {
                if !self.dispatch(Action::ChatSend(rest.to_string())) {
                    writeln!(out, "chat is busy or the message is empty")?;
                }
            }
            "wait" => {
                self.wait();
                self.print_replies(out)?;
            }
            "status" => self.print_status(out)?,
            "quit" | "exit" => return Ok(false),
            other => writeln!(out, "unknown command: {other} (try help)")?,
        }

        Ok(!self.store.state().ui.should_quit)
    }

    fn press(&mut self, binding: &str, out: &mut impl Write) -> io::Result<()> {
        let Some(key) = parse_keybinding(binding) else {
            return writeln!(out, "unknown key: {binding}");
        };
        let context = KeybindingContext::for_focus(self.store.state().ui.focus);
        match self.keybindings.resolve(context, &key).cloned() {
            Some(command) => {
                tracing::debug!(key = %key, command = command.name(), "key resolved");
                self.dispatch(Action::RunCommand(command));
                Ok(())
            }
            None => writeln!(out, "{key} is not bound"),
        }
    }

    fn print_tree(&self, out: &mut impl Write) -> io::Result<()> {
        let explorer = &self.store.state().explorer;
        let selected = explorer.selected().map(|row| row.id);
        for (i, row) in explorer.rows().iter().enumerate() {
            let marker = if Some(row.id) == selected { '>' } else { ' ' };
            let icon = match (row.is_folder, row.is_expanded) {
                (true, true) => "v ",
                (true, false) => "> ",
                (false, _) => "  ",
            };
            let indent = "  ".repeat(row.depth as usize);
            writeln!(out, "{marker}{i:>3} {indent}{icon}{}", row.name)?;
        }
        Ok(())
    }

    fn print_tabs(&self, out: &mut impl Write) -> io::Result<()> {
        let tabs = self.store.state().files.tabs();
        if tabs.is_empty() {
            return writeln!(out, "(no tabs)");
        }
        for tab in tabs {
            let active = if tab.active { '*' } else { ' ' };
            let dirty = if tab.dirty { " [+]" } else { "" };
            writeln!(out, "{active} {}{dirty}  {}", tab.title, tab.path)?;
        }
        Ok(())
    }

    fn print_file(&self, path: &str, out: &mut impl Write) -> io::Result<()> {
        let files = &self.store.state().files;
        let text = if path.is_empty() {
            Some(files.active_text())
        } else {
            files.contents(path).or_else(|| files.tree().file_body(path))
        };
        let Some(text) = text else {
            return writeln!(out, "no file at {path}");
        };
        for (i, line) in text.lines().enumerate() {
            writeln!(out, "{:>4} | {line}", i + 1)?;
        }
        Ok(())
    }

    fn print_problems(&self, out: &mut impl Write) -> io::Result<()> {
        let items = self.store.state().problems.items();
        if items.is_empty() {
            return writeln!(out, "no problems");
        }
        for item in items {
            writeln!(
                out,
                "{}:{} {} [{}] {}",
                item.path,
                item.line,
                item.severity.label(),
                item.category.label(),
                item.message
            )?;
        }
        Ok(())
    }

    fn print_replies(&self, out: &mut impl Write) -> io::Result<()> {
        let state = self.store.state();
        if let Some(diff) = state.ui.palette.preview() {
            write!(out, "{}", diff.render())?;
        }
        if let FixPhase::Preview { diff, .. } = &state.ui.fix.phase {
            write!(out, "{}", diff.render())?;
        }
        if let Some(message) = state.chat.messages().last() {
            if message.sender == ChatSender::Assistant {
                writeln!(out, "assistant: {}", message.content)?;
            }
        }
        Ok(())
    }

    fn print_status(&self, out: &mut impl Write) -> io::Result<()> {
        let ui = &self.store.state().ui;
        writeln!(out, "focus: {:?}", ui.focus)?;
        writeln!(out, "sidebar: {:?}", ui.sidebar_tab)?;
        writeln!(out, "palette: {:?}", ui.palette.phase)?;
        writeln!(out, "fix: {:?}", ui.fix.phase)?;
        writeln!(out, "pending replies: {}", self.outstanding)
    }
}

fn unescape(text: &str) -> String {
    text.replace("\\n", "\n").replace("\\t", "\t")
}

fn main() -> io::Result<()> {
    let _logging = logging::init();

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "settings file unavailable");
    }
    let config = ConfigService::with_settings(load_settings().unwrap_or_default());

    let mut keybindings = KeybindingService::with_defaults();
    let applied = keybindings.apply_rules(&config.settings().keybindings);
    tracing::info!(
        config = config.name(),
        keybindings = keybindings.name(),
        applied,
        "services ready"
    );

    let tree = default_workspace().map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let store = Store::new(AppState::new(tree, config.default_file()));

    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx, Arc::new(CannedAssistant), config.settings().latency)?;

    let mut driver = Driver {
        store,
        keybindings,
        runtime,
        rx,
        outstanding: 0,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "nexus: type `help` for commands")?;
    driver.print_tabs(&mut out)?;

    for line in stdin.lock().lines() {
        let line = line?;
        if !driver.run_line(&line, &mut out)? {
            break;
        }
        out.flush()?;
    }

    tracing::info!("session ended");
    Ok(())
}
