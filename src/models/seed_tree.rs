//! Seed tree: the read-only virtual directory structure.
//!
//! Built once at session start and never mutated; edits live in the
//! `VirtualFileStore` overlay.

use compact_str::CompactString;
use rustc_hash::FxHashSet;
use slotmap::{new_key_type, SlotMap};
use std::fmt;

new_key_type! { pub struct NodeId; }

/// Folder children keep insertion order; that order is what the explorer shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileNode {
    Folder(Vec<NodeId>),
    File(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedTreeError {
    ParentNotFolder,
    NameExists,
    InvalidName,
    InvalidNodeId,
}

impl fmt::Display for SeedTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedTreeError::ParentNotFolder => write!(f, "parent is not a folder"),
            SeedTreeError::NameExists => write!(f, "name already exists in parent"),
            SeedTreeError::InvalidName => write!(f, "name is empty or contains '/'"),
            SeedTreeError::InvalidNodeId => write!(f, "invalid node id"),
        }
    }
}

impl std::error::Error for SeedTreeError {}

#[derive(Debug, Clone)]
struct Node {
    name: CompactString,
    parent: Option<NodeId>,
    kind: FileNode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedTreeRow {
    pub id: NodeId,
    pub depth: u16,
    pub name: CompactString,
    pub path: String,
    pub is_folder: bool,
    pub is_expanded: bool,
}

#[derive(Debug, Clone)]
pub struct SeedTree {
    arena: SlotMap<NodeId, Node>,
    root: NodeId,
}

impl SeedTree {
    pub fn new() -> Self {
        let mut arena = SlotMap::with_key();
        let root = arena.insert(Node {
            name: CompactString::default(),
            parent: None,
            kind: FileNode::Folder(Vec::new()),
        });
        Self { arena, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.arena.get(id).map(|n| n.name.as_str())
    }

    pub fn node(&self, id: NodeId) -> Option<&FileNode> {
        self.arena.get(id).map(|n| &n.kind)
    }

    pub fn is_folder(&self, id: NodeId) -> bool {
        matches!(self.node(id), Some(FileNode::Folder(_)))
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.node(id) {
            Some(FileNode::Folder(children)) => children,
            _ => &[],
        }
    }

    pub fn body(&self, id: NodeId) -> Option<&str> {
        match self.node(id) {
            Some(FileNode::File(body)) => Some(body),
            _ => None,
        }
    }

    pub fn insert_folder(
        &mut self,
        parent: NodeId,
        name: &str,
    ) -> Result<NodeId, SeedTreeError> {
        self.insert_child(parent, name, FileNode::Folder(Vec::new()))
    }

    pub fn insert_file(
        &mut self,
        parent: NodeId,
        name: &str,
        body: impl Into<String>,
    ) -> Result<NodeId, SeedTreeError> {
        self.insert_child(parent, name, FileNode::File(body.into()))
    }

    /// Inserts a file at `path`, creating missing intermediate folders.
    pub fn add_file(&mut self, path: &str, body: impl Into<String>) -> Result<NodeId, SeedTreeError> {
        let mut segments: Vec<&str> = path.split('/').collect();
        let file_name = segments.pop().ok_or(SeedTreeError::InvalidName)?;

        let mut parent = self.root;
        for segment in segments {
            parent = match self.child_named(parent, segment) {
                Some(id) if self.is_folder(id) => id,
                Some(_) => return Err(SeedTreeError::ParentNotFolder),
                None => self.insert_folder(parent, segment)?,
            };
        }
        self.insert_file(parent, file_name, body)
    }

    fn insert_child(
        &mut self,
        parent: NodeId,
        name: &str,
        kind: FileNode,
    ) -> Result<NodeId, SeedTreeError> {
        if name.is_empty() || name.contains('/') {
            return Err(SeedTreeError::InvalidName);
        }
        {
            let parent_ro = self.arena.get(parent).ok_or(SeedTreeError::InvalidNodeId)?;
            if !matches!(parent_ro.kind, FileNode::Folder(_)) {
                return Err(SeedTreeError::ParentNotFolder);
            }
            if self.child_named(parent, name).is_some() {
                return Err(SeedTreeError::NameExists);
            }
        }

        let id = self.arena.insert(Node {
            name: CompactString::from(name),
            parent: Some(parent),
            kind,
        });

        match self.arena.get_mut(parent).map(|n| &mut n.kind) {
            Some(FileNode::Folder(children)) => {
                children.push(id);
                Ok(id)
            }
            _ => Err(SeedTreeError::ParentNotFolder),
        }
    }

    fn child_named(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|&child| self.name(child) == Some(name))
    }

    /// Walks `path` segment by segment from the root. A file reached before the
    /// last segment ends the walk, since files have no children.
    pub fn lookup(&self, path: &str) -> Option<NodeId> {
        let mut current = self.root;
        for segment in path.split('/') {
            match self.node(current)? {
                FileNode::Folder(_) => current = self.child_named(current, segment)?,
                FileNode::File(_) => return None,
            }
        }
        Some(current)
    }

    /// Seed body of the file at `path`; `None` for folders and unknown paths.
    pub fn file_body(&self, path: &str) -> Option<&str> {
        self.lookup(path).and_then(|id| self.body(id))
    }

    pub fn path_of(&self, id: NodeId) -> Option<String> {
        let mut names = Vec::new();
        let mut current = id;
        loop {
            let node = self.arena.get(current)?;
            match node.parent {
                Some(parent) => {
                    names.push(node.name.as_str());
                    current = parent;
                }
                None => break,
            }
        }
        names.reverse();
        Some(names.join("/"))
    }

    /// Every file path in depth-first, insertion order.
    pub fn file_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut stack = vec![(self.root, String::new())];
        while let Some((id, path)) = stack.pop() {
            match self.node(id) {
                Some(FileNode::File(_)) => out.push(path),
                Some(FileNode::Folder(children)) => {
                    for &child in children.iter().rev() {
                        let name = self.name(child).unwrap_or_default();
                        let child_path = if path.is_empty() {
                            name.to_string()
                        } else {
                            format!("{path}/{name}")
                        };
                        stack.push((child, child_path));
                    }
                }
                None => {}
            }
        }
        out
    }

    /// Visible rows for the explorer: folders before files at each level, each
    /// group in insertion order. Children of collapsed folders are skipped.
    pub fn flatten_for_view(&self, expanded: &FxHashSet<NodeId>) -> Vec<SeedTreeRow> {
        let mut result = Vec::new();
        let mut stack: Vec<(NodeId, u16, String)> = vec![(self.root, 0, String::new())];

        while let Some((id, depth, path)) = stack.pop() {
            let Some(node) = self.arena.get(id) else {
                continue;
            };

            if id != self.root {
                result.push(SeedTreeRow {
                    id,
                    depth,
                    name: node.name.clone(),
                    path: path.clone(),
                    is_folder: matches!(node.kind, FileNode::Folder(_)),
                    is_expanded: expanded.contains(&id),
                });
            }

            if id != self.root && !expanded.contains(&id) {
                continue;
            }

            if let FileNode::Folder(children) = &node.kind {
                let (folders, files): (Vec<NodeId>, Vec<NodeId>) =
                    children.iter().partition(|&&c| self.is_folder(c));
                let child_depth = if id == self.root { 0 } else { depth + 1 };

                for &child in folders.iter().chain(files.iter()).rev() {
                    let name = self.name(child).unwrap_or_default();
                    let child_path = if path.is_empty() {
                        name.to_string()
                    } else {
                        format!("{path}/{name}")
                    };
                    stack.push((child, child_depth, child_path));
                }
            }
        }

        result
    }
}

impl Default for SeedTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/seed_tree.rs"]
mod tests;
