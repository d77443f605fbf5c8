//! Core framework types.
//!
//! - Command: semantic commands
//! - Event: key definitions
//! - Service: session-level services

pub mod command;
pub mod event;
pub mod service;

pub use command::Command;
pub use event::Key;
pub use service::Service;
