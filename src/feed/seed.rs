use std::fs;

use crate::common::{Message, MessageSequence};

use super::error::FeedError;

/// Loads an initial sequence from a JSON array of messages.
///
/// File order is kept. Ids that don't increase are renumbered so the
/// sequence stays unique.
pub fn load_seed(path: &str) -> Result<MessageSequence, FeedError> {
    let content = fs::read_to_string(path).map_err(|source| FeedError::SeedIo {
        path: path.to_string(),
        source,
    })?;
    let messages: Vec<Message> =
        serde_json::from_str(&content).map_err(|source| FeedError::SeedJson {
            path: path.to_string(),
            source,
        })?;

    let sequence = normalize_ids(messages)?;
    log::info!("Loaded {} seed messages from {path}", sequence.len());
    Ok(sequence)
}

/// Fails with [`FeedError::IdsExhausted`] when no id would be left for the
/// next message.
fn normalize_ids(messages: Vec<Message>) -> Result<MessageSequence, FeedError> {
    let mut last_id = 0u64;
    let messages = messages
        .into_iter()
        .map(|mut message| {
            if message.id <= last_id {
                log::warn!("Seed message id {} reused; renumbering", message.id);
                message.id = last_id.checked_add(1).ok_or(FeedError::IdsExhausted)?;
            }
            last_id = message.id;
            Ok(message)
        })
        .collect::<Result<Vec<_>, FeedError>>()?;

    let sequence = MessageSequence::new(messages);
    if sequence.next_id().is_none() {
        return Err(FeedError::IdsExhausted);
    }
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_messages_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        fs::write(
            &path,
            r#"[
                {"id": 1, "text": "hi", "sentByLocalUser": false, "timestamp": "2024-05-01T10:00:00Z"},
                {"id": 2, "text": "hey", "sentByLocalUser": true, "timestamp": "2024-05-01T10:01:00Z"}
            ]"#,
        )
        .unwrap();

        let sequence = load_seed(path.to_str().unwrap()).unwrap();
        let texts: Vec<&str> = sequence.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["hi", "hey"]);
        assert!(sequence.latest().unwrap().sent_by_local_user);
    }

    #[test]
    fn duplicate_ids_are_renumbered() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        fs::write(
            &path,
            r#"[
                {"id": 3, "text": "a", "sentByLocalUser": false, "timestamp": "2024-05-01T10:00:00Z"},
                {"id": 3, "text": "b", "sentByLocalUser": false, "timestamp": "2024-05-01T10:00:01Z"},
                {"id": 1, "text": "c", "sentByLocalUser": true, "timestamp": "2024-05-01T10:00:02Z"}
            ]"#,
        )
        .unwrap();

        let sequence = load_seed(path.to_str().unwrap()).unwrap();
        let ids: Vec<u64> = sequence.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 4, 5]);
    }

    #[test]
    fn max_id_leaves_no_room_and_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        fs::write(
            &path,
            r#"[
                {"id": 18446744073709551615, "text": "a", "sentByLocalUser": false, "timestamp": "2024-05-01T10:00:00Z"}
            ]"#,
        )
        .unwrap();

        let err = load_seed(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, FeedError::IdsExhausted));
    }

    #[test]
    fn renumbering_past_max_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        fs::write(
            &path,
            r#"[
                {"id": 18446744073709551614, "text": "a", "sentByLocalUser": false, "timestamp": "2024-05-01T10:00:00Z"},
                {"id": 1, "text": "b", "sentByLocalUser": false, "timestamp": "2024-05-01T10:00:01Z"}
            ]"#,
        )
        .unwrap();

        let err = load_seed(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, FeedError::IdsExhausted));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_seed("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, FeedError::SeedIo { .. }));
    }

    #[test]
    fn bad_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        fs::write(&path, "[{").unwrap();

        let err = load_seed(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, FeedError::SeedJson { .. }));
    }
}
