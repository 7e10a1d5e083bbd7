use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single chat message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub sent_by_local_user: bool,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Record composed on this client.
    pub fn local(id: u64, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            sent_by_local_user: true,
            timestamp,
        }
    }

    /// Record that arrived from somebody else.
    pub fn remote(id: u64, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            sent_by_local_user: false,
            timestamp,
        }
    }
}

/// Snapshot of the ordered message sequence.
///
/// Cloning is cheap: snapshots share the underlying slice, and the feed
/// builds a new one on every append.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageSequence {
    messages: Arc<[Message]>,
}

impl MessageSequence {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages: messages.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn latest(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn get(&self, id: u64) -> Option<&Message> {
        self.messages.iter().find(|message| message.id == id)
    }

    /// Id the next appended message should carry: last id + 1, or 1 when
    /// empty. `None` once the last id is `u64::MAX`.
    pub fn next_id(&self) -> Option<u64> {
        match self.latest() {
            Some(message) => message.id.checked_add(1),
            None => Some(1),
        }
    }

    /// Returns a new snapshot with `message` appended; `self` is untouched.
    pub fn appended(&self, message: Message) -> Self {
        let mut messages = Vec::with_capacity(self.messages.len() + 1);
        messages.extend_from_slice(&self.messages);
        messages.push(message);
        Self::new(messages)
    }
}

impl<'a> IntoIterator for &'a MessageSequence {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(MessageSequence::default().next_id(), Some(1));
    }

    #[test]
    fn next_id_follows_last_message() {
        let sequence = MessageSequence::new(vec![
            Message::remote(4, "hi", at(0)),
            Message::local(9, "yo", at(1)),
        ]);
        assert_eq!(sequence.next_id(), Some(10));
        assert_eq!(sequence.latest().map(|m| m.id), Some(9));
    }

    #[test]
    fn next_id_runs_out_at_max() {
        let sequence = MessageSequence::new(vec![Message::remote(u64::MAX, "last", at(0))]);
        assert_eq!(sequence.next_id(), None);
    }

    #[test]
    fn appended_leaves_original_snapshot_alone() {
        let before = MessageSequence::new(vec![Message::remote(1, "a", at(0))]);
        let after = before.appended(Message::local(2, "b", at(1)));

        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
        assert_eq!(after.get(2).map(|m| m.text.as_str()), Some("b"));
    }

    #[test]
    fn json_uses_camel_case_fields() {
        let json = serde_json::to_value(Message::local(1, "hello", at(0))).unwrap();
        assert_eq!(json["sentByLocalUser"], true);
        assert_eq!(json["text"], "hello");
    }
}
