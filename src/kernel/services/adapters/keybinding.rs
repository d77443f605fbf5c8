//! Keybindings: key -> command, per focus context.

use crate::core::event::{Key, KeyCode};
use crate::core::Command;
use crate::core::Service;
use crate::kernel::services::ports::KeybindingRule;
use crate::kernel::FocusTarget;
use rustc_hash::FxHashMap;

use super::settings::{parse_command, parse_keybinding};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    Editor,
    Explorer,
    CommandPalette,
    Chat,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "global" => Some(Self::Global),
            "editor" => Some(Self::Editor),
            "explorer" | "sidebarexplorer" | "sidebar.explorer" => Some(Self::Explorer),
            "palette" | "commandpalette" | "command_palette" => Some(Self::CommandPalette),
            "chat" | "sidebarchat" | "sidebar.chat" => Some(Self::Chat),
            _ => None,
        }
    }

    pub fn for_focus(focus: FocusTarget) -> Self {
        match focus {
            FocusTarget::Editor => Self::Editor,
            FocusTarget::Explorer => Self::Explorer,
            FocusTarget::CommandPalette => Self::CommandPalette,
            FocusTarget::Chat => Self::Chat,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    editor: FxHashMap<Key, Command>,
    explorer: FxHashMap<Key, Command>,
    command_palette: FxHashMap<Key, Command>,
    chat: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            editor: default_editor_keybindings(),
            explorer: default_explorer_keybindings(),
            command_palette: default_command_palette_keybindings(),
            chat: FxHashMap::default(),
        }
    }

    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            _ => self.map(context).get(key).or_else(|| self.global.get(key)),
        }
    }

    pub fn bindings(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        self.map(context)
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    /// Layers user rules over the defaults. Rules with an unparsable key or
    /// context are skipped; returns how many were applied.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) -> usize {
        let mut applied = 0;
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "invalid keybinding");
                continue;
            };
            let context = match rule.context.as_deref() {
                None => KeybindingContext::Global,
                Some(name) => match KeybindingContext::parse(name) {
                    Some(context) => context,
                    None => {
                        tracing::warn!(context = %name, "unknown keybinding context");
                        continue;
                    }
                },
            };
            self.bind(context, key, parse_command(&rule.command));
            applied += 1;
        }
        applied
    }

    fn map(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &self.global,
            KeybindingContext::Editor => &self.editor,
            KeybindingContext::Explorer => &self.explorer,
            KeybindingContext::CommandPalette => &self.command_palette,
            KeybindingContext::Chat => &self.chat,
        }
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Editor => &mut self.editor,
            KeybindingContext::Explorer => &mut self.explorer,
            KeybindingContext::CommandPalette => &mut self.command_palette,
            KeybindingContext::Chat => &mut self.chat,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service for KeybindingService {
    fn name(&self) -> &'static str {
        "KeybindingService"
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(20);

    bindings.insert(Key::simple(KeyCode::Esc), Command::Escape);
    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);

    // Ctrl on Linux/Windows, Cmd on macOS
    for (ch, command) in [
        ('s', Command::Save),
        ('w', Command::CloseTab),
        ('l', Command::CommandPalette),
        ('k', Command::ToggleChat),
    ] {
        bindings.insert(Key::ctrl(KeyCode::Char(ch)), command.clone());
        bindings.insert(Key::super_key(KeyCode::Char(ch)), command);
    }

    bindings.insert(Key::ctrl(KeyCode::Tab), Command::NextTab);
    bindings.insert(Key::ctrl_shift(KeyCode::Tab), Command::PrevTab);
    bindings.insert(Key::ctrl_shift(KeyCode::Char('e')), Command::FocusExplorer);
    bindings.insert(Key::ctrl(KeyCode::Char('.')), Command::FixProblem);

    bindings
}

fn default_editor_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.insert(Key::ctrl(KeyCode::Enter), Command::Submit);
    bindings.insert(Key::super_key(KeyCode::Enter), Command::Submit);
    bindings
}

fn default_explorer_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(4);

    bindings.insert(Key::simple(KeyCode::Up), Command::ExplorerUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::ExplorerDown);
    bindings.insert(Key::simple(KeyCode::Enter), Command::ExplorerActivate);

    bindings
}

fn default_command_palette_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.insert(Key::ctrl(KeyCode::Enter), Command::Submit);
    bindings.insert(Key::super_key(KeyCode::Enter), Command::Submit);
    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
