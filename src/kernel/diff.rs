//! Before/after preview for a suggested change. The two texts are shown whole:
//! every original line as a deletion, then every proposed line as an addition.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLineKind {
    Deletion,
    Addition,
}

impl DiffLineKind {
    pub fn marker(self) -> char {
        match self {
            Self::Deletion => '-',
            Self::Addition => '+',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine<'a> {
    pub kind: DiffLineKind,
    pub line_number: usize,
    pub content: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffPreview {
    pub title: String,
    pub original: String,
    pub proposed: String,
}

impl DiffPreview {
    pub fn new(
        title: impl Into<String>,
        original: impl Into<String>,
        proposed: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            original: original.into(),
            proposed: proposed.into(),
        }
    }

    pub fn lines(&self) -> Vec<DiffLine<'_>> {
        let deletions = self.original.lines().enumerate().map(|(i, content)| DiffLine {
            kind: DiffLineKind::Deletion,
            line_number: i + 1,
            content,
        });
        let additions = self.proposed.lines().enumerate().map(|(i, content)| DiffLine {
            kind: DiffLineKind::Addition,
            line_number: i + 1,
            content,
        });
        deletions.chain(additions).collect()
    }

    pub fn is_noop(&self) -> bool {
        self.original == self.proposed
    }

    pub fn render(&self) -> String {
        let mut out = format!("{}\n", self.title);
        for line in self.lines() {
            out.push_str(&format!(
                "{:>4} {} {}\n",
                line.line_number,
                line.kind.marker(),
                line.content
            ));
        }
        out
    }
}
