use crate::{Error, Result};

/// Splits a key into everything before its final character and the final character.
///
/// The head is walked creating interior nodes; the last character is where the
/// payload lands. Fails with [`Error::EmptyKey`] for a zero-length key.
pub fn split_last_char(key: &str) -> Result<(&str, char)> {
    match key.char_indices().next_back() {
        Some((idx, last)) => Ok((&key[..idx], last)),
        None => Err(Error::EmptyKey),
    }
}

/// Rejects zero-length keys before a walk starts.
pub fn non_empty(key: &str) -> Result<&str> {
    if key.is_empty() {
        Err(Error::EmptyKey)
    } else {
        Ok(key)
    }
}
