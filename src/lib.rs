//! nexus - headless core of an AI-assisted editor prototype
//!
//! Modules:
//! - core: commands and keys (Command, Key, Service)
//! - models: the read-only SeedTree and the default workspace
//! - kernel: state/action/effect (VirtualFileStore, Store, simulated assistant)

pub mod core;
pub mod kernel;
pub mod models;
