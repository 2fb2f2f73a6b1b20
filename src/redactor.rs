//! Character-stream redaction.
//!
//! A two-state scan over the input: content between [`OPEN_DELIMITER`] and
//! the next [`CLOSE_DELIMITER`] is replaced one-for-one with [`MASK_CHAR`].
//! Delimiters never nest and are never emitted. Unbalanced delimiters are not
//! an error: a trailing open span runs to the end of input and a stray close
//! is a no-op.

use crate::constants::{CLOSE_DELIMITER, MASK_CHAR, OPEN_DELIMITER};

/// Scan state of the redactor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RedactState {
    /// Content is emitted unchanged
    #[default]
    Passing,
    /// Content is masked (when redaction is enabled)
    Redacting,
}

impl RedactState {
    /// State after consuming `ch`, or `None` if `ch` is a content character.
    pub fn transition(ch: char) -> Option<RedactState> {
        match ch {
            OPEN_DELIMITER => Some(RedactState::Redacting),
            CLOSE_DELIMITER => Some(RedactState::Passing),
            _ => None,
        }
    }
}

/// Redact `text`, masking delimited spans when `enabled` is true.
///
/// With `enabled == false` the delimiters are still consumed but every content
/// character passes through unchanged. The output always holds
/// `text.chars().count()` minus the number of delimiter characters.
pub fn redact(text: &str, enabled: bool) -> String {
    redact_counted(text, enabled).0
}

/// Like [`redact`], also returning how many content characters were masked.
///
/// The count is taken in the same scan and is 0 when `enabled` is false.
pub fn redact_counted(text: &str, enabled: bool) -> (String, usize) {
    let mut output = String::with_capacity(text.len());
    let mut state = RedactState::default();
    let mut masked = 0;

    for ch in text.chars() {
        if let Some(next) = RedactState::transition(ch) {
            state = next;
            continue;
        }

        if enabled && state == RedactState::Redacting {
            output.push(MASK_CHAR);
            masked += 1;
        } else {
            output.push(ch);
        }
    }

    (output, masked)
}
