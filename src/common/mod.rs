pub mod commands;
pub mod types;

pub use commands::FeedCommand;
pub use types::{Message, MessageSequence};
