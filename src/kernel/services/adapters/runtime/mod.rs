//! Async runtime adapter: executes assistant effects and sends the answers back
//! to the driver loop.

mod async_runtime;
mod message;

pub use async_runtime::AsyncRuntime;
pub use message::AppMessage;
