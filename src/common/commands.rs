use super::types::Message;

/// Commands the UI sends down to the feed.
#[derive(Debug, Clone)]
pub enum FeedCommand {
    /// Append a record composed locally.
    Send(Message),
    /// Append a message coming from someone else.
    Deliver(String),
}
