use std::time::Duration;

use chrono::Utc;
use tokio::sync::{mpsc, watch};

use crate::common::{FeedCommand, Message, MessageSequence};
use crate::config::EchoConfig;

use super::handle::FeedHandle;

const COMMAND_QUEUE_SIZE: usize = 100;

/// In-process owner of the message sequence.
///
/// The feed is the only writer: it appends in the order commands arrive and
/// publishes a fresh snapshot after every append.
pub struct ChatFeed {
    command_receiver: mpsc::Receiver<FeedCommand>,
    // Weak so that pending echo replies don't keep the loop alive.
    command_sender: mpsc::WeakSender<FeedCommand>,
    sequence: watch::Sender<MessageSequence>,
    echo: EchoConfig,
}

impl ChatFeed {
    pub fn new(initial: MessageSequence, echo: EchoConfig) -> (Self, FeedHandle) {
        let (command_sender, command_receiver) = mpsc::channel(COMMAND_QUEUE_SIZE);
        let (sequence, sequence_receiver) = watch::channel(initial);

        let feed = Self {
            command_receiver,
            command_sender: command_sender.downgrade(),
            sequence,
            echo,
        };
        let handle = FeedHandle::new(command_sender, sequence_receiver);
        (feed, handle)
    }

    /// Processes commands until every [`FeedHandle`] is dropped.
    pub async fn run(mut self) {
        log::info!(
            "Message feed started with {} messages (echo {})",
            self.sequence.borrow().len(),
            if self.echo.enabled { "on" } else { "off" }
        );

        while let Some(command) = self.command_receiver.recv().await {
            self.handle_command(command);
        }

        log::info!("Message feed stopped");
    }

    fn handle_command(&mut self, command: FeedCommand) {
        match command {
            FeedCommand::Send(message) => {
                let text = message.text.clone();
                self.append_local(message);
                if self.echo.enabled {
                    self.schedule_echo(text);
                }
            }
            FeedCommand::Deliver(text) => {
                let Some(id) = self.sequence.borrow().next_id() else {
                    log::warn!("Message ids exhausted; dropping delivered message");
                    return;
                };
                self.publish(Message::remote(id, text, Utc::now()));
            }
        }
    }

    fn append_local(&mut self, mut message: Message) {
        let Some(next_id) = self.sequence.borrow().next_id() else {
            log::warn!("Message ids exhausted; dropping local message {}", message.id);
            return;
        };
        if message.id < next_id {
            log::debug!("Re-stamping local message id {} -> {next_id}", message.id);
            message.id = next_id;
        }
        message.sent_by_local_user = true;
        self.publish(message);
    }

    fn publish(&mut self, message: Message) {
        log::debug!(
            "Appending message {} ({})",
            message.id,
            if message.sent_by_local_user {
                "local"
            } else {
                "remote"
            }
        );
        self.sequence
            .send_modify(|sequence| *sequence = sequence.appended(message));
    }

    fn schedule_echo(&self, text: String) {
        let sender = self.command_sender.clone();
        let delay = Duration::from_millis(self.echo.delay_ms);
        let reply = format!("{}{}", self.echo.prefix, text);

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let Some(sender) = sender.upgrade() else {
                return;
            };
            if let Err(err) = sender.send(FeedCommand::Deliver(reply)).await {
                log::debug!("Dropping echo reply, feed is gone: {err}");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> EchoConfig {
        EchoConfig {
            enabled: false,
            ..EchoConfig::default()
        }
    }

    #[tokio::test]
    async fn local_send_is_appended_as_is() {
        let (feed, handle) = ChatFeed::new(MessageSequence::default(), quiet());
        let task = tokio::spawn(feed.run());
        let mut updates = handle.subscribe();

        handle
            .send_message(Message::local(1, "hello", Utc::now()))
            .unwrap();
        updates.changed().await.unwrap();

        let messages = handle.messages();
        assert_eq!(messages.len(), 1);
        let latest = messages.latest().unwrap();
        assert_eq!(latest.id, 1);
        assert_eq!(latest.text, "hello");
        assert!(latest.sent_by_local_user);

        drop(updates);
        drop(handle);
        task.await.unwrap();
    }

    #[tokio::test]
    async fn stale_local_id_is_restamped() {
        let initial = MessageSequence::new(vec![Message::remote(7, "first", Utc::now())]);
        let (feed, handle) = ChatFeed::new(initial, quiet());
        tokio::spawn(feed.run());
        let mut updates = handle.subscribe();

        handle
            .send_message(Message::local(2, "second", Utc::now()))
            .unwrap();
        updates.changed().await.unwrap();

        let ids: Vec<u64> = handle.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![7, 8]);
    }

    #[tokio::test]
    async fn run_returns_once_handles_are_dropped() {
        let (feed, handle) = ChatFeed::new(MessageSequence::default(), quiet());
        let task = tokio::spawn(feed.run());
        drop(handle);
        task.await.unwrap();
    }

    #[tokio::test]
    async fn exhausted_ids_drop_appends_without_stopping_the_feed() {
        let (feed, handle) = ChatFeed::new(MessageSequence::default(), quiet());
        let task = tokio::spawn(feed.run());
        let mut updates = handle.subscribe();

        handle
            .send_message(Message::local(u64::MAX, "last", Utc::now()))
            .unwrap();
        updates.changed().await.unwrap();

        handle.deliver("one too many").unwrap();
        handle
            .send_message(Message::local(1, "and another", Utc::now()))
            .unwrap();
        drop(handle);
        task.await.unwrap();

        let messages = updates.borrow().clone();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages.latest().map(|m| m.id), Some(u64::MAX));
    }

    #[tokio::test(start_paused = true)]
    async fn echo_reply_follows_local_message() {
        let echo = EchoConfig {
            enabled: true,
            delay_ms: 250,
            prefix: "bot: ".to_string(),
        };
        let (feed, handle) = ChatFeed::new(MessageSequence::default(), echo);
        tokio::spawn(feed.run());
        let mut updates = handle.subscribe();

        handle.send_message(Message::local(1, "ping", Utc::now())).unwrap();
        updates.changed().await.unwrap();
        assert_eq!(handle.messages().len(), 1);

        updates.changed().await.unwrap();
        let messages = handle.messages();
        assert_eq!(messages.len(), 2);
        let reply = messages.latest().unwrap();
        assert_eq!(reply.id, 2);
        assert_eq!(reply.text, "bot: ping");
        assert!(!reply.sent_by_local_user);
    }
}
