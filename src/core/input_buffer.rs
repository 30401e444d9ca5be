use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

pub const DEFAULT_INPUT_CAPACITY: usize = 256;

/// Text shown for an empty buffer.
pub const EMPTY_DISPLAY: &str = "0";

/// In-progress expression text.
///
/// Invariant: `len() < capacity()`. Appends that would break it are rejected
/// with [`CalcError::BufferFull`] and leave the content unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBuffer {
    text: String,
    capacity: usize,
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_INPUT_CAPACITY)
    }
}

impl InputBuffer {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::new(),
            capacity,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Content, or `"0"` when empty.
    #[must_use]
    pub fn display_text(&self) -> &str {
        if self.text.is_empty() {
            EMPTY_DISPLAY
        } else {
            &self.text
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn append(&mut self, fragment: &str) -> CalcResult<()> {
        if self.text.len() + fragment.len() >= self.capacity {
            return Err(CalcError::BufferFull {
                capacity: self.capacity,
            });
        }
        self.text.push_str(fragment);
        Ok(())
    }

    /// Removes the last character and returns it.
    pub fn delete_last(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Replaces the whole content, e.g. with an evaluated result.
    pub fn replace(&mut self, text: &str) -> CalcResult<()> {
        if text.len() >= self.capacity {
            return Err(CalcError::BufferFull {
                capacity: self.capacity,
            });
        }
        self.text.clear();
        self.text.push_str(text);
        Ok(())
    }
}
