use tokio::sync::{mpsc, watch};

use crate::common::{FeedCommand, Message, MessageSequence};

use super::error::FeedError;

/// What the chat view gets to see of the feed: the current sequence and a
/// way to append to it.
#[derive(Clone)]
pub struct FeedHandle {
    command_sender: mpsc::Sender<FeedCommand>,
    sequence: watch::Receiver<MessageSequence>,
}

impl FeedHandle {
    pub(super) fn new(
        command_sender: mpsc::Sender<FeedCommand>,
        sequence: watch::Receiver<MessageSequence>,
    ) -> Self {
        Self {
            command_sender,
            sequence,
        }
    }

    /// Latest snapshot of the message sequence.
    pub fn messages(&self) -> MessageSequence {
        self.sequence.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<MessageSequence> {
        self.sequence.clone()
    }

    /// Queues a locally composed record. Never blocks.
    pub fn send_message(&self, message: Message) -> Result<(), FeedError> {
        self.command_sender.try_send(FeedCommand::Send(message))?;
        Ok(())
    }

    /// Queues a message from another participant.
    pub fn deliver(&self, text: impl Into<String>) -> Result<(), FeedError> {
        self.command_sender
            .try_send(FeedCommand::Deliver(text.into()))?;
        Ok(())
    }

    /// Runs `on_change` every time the sequence changes, until the feed stops.
    ///
    /// Must be called from inside a tokio runtime.
    pub fn notify_on_change<F>(&self, on_change: F) -> tokio::task::JoinHandle<()>
    where
        F: Fn() + Send + 'static,
    {
        let mut receiver = self.subscribe();
        receiver.mark_unchanged();
        tokio::spawn(async move {
            while receiver.changed().await.is_ok() {
                on_change();
            }
            log::debug!("Sequence subscription ended");
        })
    }
}
