//! Circular turn order with a "current" cursor.
//!
//! ## Cursor rules
//!
//! - `append` on an empty queue makes the new element current.
//! - `next` advances modulo `len`.
//! - `remove` keeps the relative order of the survivors. Removing an element
//!   before the cursor shifts the cursor left so it keeps pointing at the
//!   same element. Removing the current element hands the turn to its
//!   successor (wrapping to the front). Removing after the cursor leaves
//!   it alone.
//!
//! ```
//! use gamecenter_engine::core::TurnQueue;
//!
//! let mut queue = TurnQueue::new();
//! queue.append("a");
//! queue.append("b");
//! queue.append("c");
//!
//! assert_eq!(queue.next().unwrap(), &"b");
//! queue.remove(&"a");
//! assert_eq!(queue.current().unwrap(), &"b");
//! assert_eq!(queue.to_string(), "[b] c");
//! ```

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// Ordered ring of turn holders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnQueue<T> {
    items: Vec<T>,
    current: usize,
}

impl<T> Default for TurnQueue<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: 0,
        }
    }
}

impl<T: PartialEq> TurnQueue<T> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add at the end.
    pub fn append(&mut self, value: T) {
        if self.items.is_empty() {
            self.current = 0;
        }
        self.items.push(value);
    }

    /// Advance the cursor and return the new current element.
    pub fn next(&mut self) -> Result<&T> {
        if self.items.is_empty() {
            return Err(EngineError::EmptyCollection);
        }
        self.current = (self.current + 1) % self.items.len();
        Ok(&self.items[self.current])
    }

    /// The element whose turn it is.
    pub fn current(&self) -> Result<&T> {
        self.items.get(self.current).ok_or(EngineError::EmptyCollection)
    }

    /// The element that `next` would make current.
    pub fn peek_next(&self) -> Result<&T> {
        if self.items.is_empty() {
            return Err(EngineError::EmptyCollection);
        }
        Ok(&self.items[(self.current + 1) % self.items.len()])
    }

    /// The element that held the turn before the current one.
    pub fn peek_previous(&self) -> Result<&T> {
        if self.items.is_empty() {
            return Err(EngineError::EmptyCollection);
        }
        let len = self.items.len();
        Ok(&self.items[(self.current + len - 1) % len])
    }

    /// Cursor position.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Move the cursor back to the first element.
    pub fn rewind(&mut self) {
        self.current = 0;
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Position of `value`, if present.
    #[must_use]
    pub fn position(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|v| v == value)
    }

    /// Remove the first occurrence of `value`. Returns whether one was found.
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(index) = self.position(value) else {
            return false;
        };
        self.items.remove(index);

        if index < self.current {
            self.current -= 1;
        }
        if self.current >= self.items.len() {
            self.current = 0;
        }
        true
    }

    /// Direct indexed access.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or(EngineError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.current = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Elements in queue order, starting from index 0.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for TurnQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if i == self.current {
                write!(f, "[{}]", item)?;
            } else {
                write!(f, "{}", item)?;
            }
        }
        Ok(())
    }
}
