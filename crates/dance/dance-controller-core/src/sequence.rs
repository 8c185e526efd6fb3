//! Ordered pose list with a wrapping cursor.

use serde::{Deserialize, Serialize};

use crate::error::ControllerError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoseSequence {
    names: Vec<String>,
    index: usize,
}

impl PoseSequence {
    pub fn new(names: Vec<String>) -> Result<Self, ControllerError> {
        if names.is_empty() {
            return Err(ControllerError::EmptySequence);
        }
        Ok(Self { names, index: 0 })
    }

    #[inline]
    pub fn current(&self) -> &str {
        &self.names[self.index]
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false; construction rejects empty lists.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Step to the next pose, wrapping to the first after the last.
    pub fn advance(&mut self) -> &str {
        self.index = (self.index + 1) % self.names.len();
        self.current()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Move the cursor to `index`; out-of-range indices are ignored.
    pub fn set_index(&mut self, index: usize) -> bool {
        if index < self.names.len() {
            self.index = index;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}
