//! Splits text into utterances that fit an engine's input limit.
//!
//! Lengths are counted in `char`s. Splits prefer the last space at or before
//! the limit; the space itself is dropped. Without a usable space the text is
//! hard-cut to `max_length - 1` characters and the character at the cut point
//! is dropped as well.

use crate::error::{TtsError, TtsResult};
use std::borrow::Cow;

const SPLIT_CHAR: char = ' ';

/// Smallest limit for which every emitted segment is non-empty
pub const MIN_MAX_LENGTH: usize = 2;

/// Segmenter bound to a fixed maximum length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSegmenter {
    max_length: usize,
}

impl TextSegmenter {
    pub fn new(max_length: usize) -> TtsResult<Self> {
        if max_length < MIN_MAX_LENGTH {
            return Err(TtsError::invalid_input(
                format!("max_length must be at least {MIN_MAX_LENGTH}, got {max_length}"),
                "Use the engine's reported maximum input length",
            ));
        }
        Ok(Self { max_length })
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn segment(&self, text: &str) -> Vec<String> {
        split(&unescape(text), self.max_length)
    }
}

/// Decode HTML entities (`&amp;`, `&#39;`, ...) in `text`.
pub fn unescape(text: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(text)
}

/// Unescape `text` and split it into segments shorter than `max_length`.
///
/// `max_length` is raised to [`MIN_MAX_LENGTH`] if smaller.
pub fn segment(text: &str, max_length: usize) -> Vec<String> {
    split(&unescape(text), max_length.max(MIN_MAX_LENGTH))
}

fn split(text: &str, max_length: usize) -> Vec<String> {
    let mut rest: Vec<char> = text.chars().collect();
    if rest.len() < max_length {
        return vec![text.to_string()];
    }

    let mut segments = Vec::new();
    while rest.len() > max_length {
        let split_at = (1..=max_length).rev().find(|&idx| rest[idx] == SPLIT_CHAR);

        let (head, tail_start) = match split_at {
            Some(idx) => (idx, idx + 1),
            None => (max_length - 1, max_length),
        };
        segments.push(rest[..head].iter().collect());
        rest = rest.split_off(tail_start);
    }
    segments.push(rest.into_iter().collect());

    segments
}
