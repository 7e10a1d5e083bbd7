use crate::common::MessageSequence;

/// Remembers what the list looked like last frame so a change can be turned
/// into exactly one scroll-to-latest request.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    seen_len: usize,
    seen_tail: Option<u64>,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the message to bring into view, if the sequence changed since
    /// the previous call.
    pub fn observe(&mut self, sequence: &MessageSequence) -> Option<u64> {
        let tail = sequence.latest().map(|message| message.id);
        if sequence.len() == self.seen_len && tail == self.seen_tail {
            return None;
        }

        self.seen_len = sequence.len();
        self.seen_tail = tail;
        tail
    }
}
