use chrono::{DateTime, Utc};

use crate::common::Message;

/// Sends the draft through `send` if it holds anything but whitespace.
///
/// Returns `Ok(false)` for a blank draft, which is left untouched. On
/// success the draft is cleared; on error it is kept so nothing typed is
/// lost.
pub fn submit_draft<F, E>(
    draft: &mut String,
    next_id: u64,
    now: DateTime<Utc>,
    send: F,
) -> Result<bool, E>
where
    F: FnOnce(Message) -> Result<(), E>,
{
    let text = draft.trim();
    if text.is_empty() {
        return Ok(false);
    }

    send(Message::local(next_id, text, now))?;
    draft.clear();
    Ok(true)
}
