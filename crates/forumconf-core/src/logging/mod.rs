//! Logging abstractions for runtime-agnostic logging

mod console;
mod noop;
mod traits;

pub use console::ConsoleLogger;
pub use noop::NoOpLogger;
pub use traits::{BoxedLogger, Logger, SharedLogger};
