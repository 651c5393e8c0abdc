pub use command::{Launch, executable_name, executable_path};
pub use error::{Error, Result};
pub use shortcut::{Shortcut, ShortcutOutcome};

pub mod command;
pub mod dir;
mod error;
pub mod shortcut;
