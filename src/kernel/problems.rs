use crate::models::DEFAULT_FILE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemSeverity {
    Error,
    Warning,
    Information,
}

impl ProblemSeverity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Information => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemCategory {
    UnusedVariable,
    Style,
    TypeScript,
}

impl ProblemCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::UnusedVariable => "unused-variable",
            Self::Style => "style",
            Self::TypeScript => "typescript",
        }
    }
}

/// Mock diagnostic: `code` is the offending snippet, matched verbatim when a fix
/// is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemItem {
    pub path: String,
    pub line: u32,
    pub message: String,
    pub code: String,
    pub severity: ProblemSeverity,
    pub category: ProblemCategory,
}

#[derive(Debug, Default)]
pub struct ProblemsState {
    items: Vec<ProblemItem>,
    selected_index: usize,
}

impl ProblemsState {
    /// Diagnostics shipped with the default workspace.
    pub fn seeded() -> Self {
        let item = |line: u32,
                    message: &str,
                    code: &str,
                    severity: ProblemSeverity,
                    category: ProblemCategory| ProblemItem {
            path: DEFAULT_FILE.to_string(),
            line,
            message: message.to_string(),
            code: code.to_string(),
            severity,
            category,
        };
        Self {
            items: vec![
                item(
                    15,
                    "'unusedVar' is declared but its value is never read.",
                    "const unusedVar = 'This variable is never used';",
                    ProblemSeverity::Warning,
                    ProblemCategory::UnusedVariable,
                ),
                item(
                    8,
                    "Consider using template literals instead of string concatenation.",
                    "console.log('Error fetching data:' + error);",
                    ProblemSeverity::Information,
                    ProblemCategory::Style,
                ),
                item(
                    3,
                    "Missing return type annotation.",
                    "function fetchData() {",
                    ProblemSeverity::Warning,
                    ProblemCategory::TypeScript,
                ),
            ],
            selected_index: 0,
        }
    }

    pub fn items(&self) -> &[ProblemItem] {
        &self.items
    }

    pub fn push(&mut self, item: ProblemItem) {
        self.items.push(item);
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn for_path<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a ProblemItem> + 'a {
        self.items.iter().filter(move |item| item.path == path)
    }

    pub fn first_for(&self, path: &str) -> Option<(usize, &ProblemItem)> {
        self.items
            .iter()
            .enumerate()
            .find(|(_, item)| item.path == path)
    }

    pub fn at_line(&self, path: &str, line: u32) -> Option<&ProblemItem> {
        self.items
            .iter()
            .find(|item| item.path == path && item.line == line)
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.items.is_empty() || delta == 0 {
            return false;
        }

        let prev = self.selected_index;
        let len = self.items.len();

        if delta < 0 {
            if self.selected_index > 0 {
                self.selected_index -= 1;
            } else {
                self.selected_index = len - 1;
            }
        } else if self.selected_index + 1 < len {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }

        self.selected_index != prev
    }

    /// Removes a fixed problem. The fix is assumed to drop one line, so later
    /// problems in the same file move up by one.
    pub fn resolve(&mut self, index: usize) -> Option<ProblemItem> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        for item in self.items.iter_mut() {
            if item.path == removed.path && item.line > removed.line {
                item.line -= 1;
            }
        }
        if self.selected_index >= self.items.len() {
            self.selected_index = self.items.len().saturating_sub(1);
        }
        Some(removed)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/problems.rs"]
mod tests;
