mod common;
mod listeners;
mod memory;
mod system;
mod watcher;

pub use memory::InMemoryClipboard;
pub use system::SystemClipboard;
