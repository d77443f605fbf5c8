//! Data models.

pub mod seed;
pub mod seed_tree;

pub use seed::{default_workspace, DEFAULT_FILE};
pub use seed_tree::{FileNode, NodeId, SeedTree, SeedTreeError, SeedTreeRow};
