// SPDX-License-Identifier: MPL-2.0
//! Settle-once result slot.
//!
//! A slot starts [`Slot::Pending`] and moves to [`Slot::Failed`] or
//! [`Slot::Ready`] exactly once. Later settle attempts are rejected so a
//! settled slot can never go back to loading or change its content.

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Slot<T> {
    #[default]
    Pending,
    /// Human-readable failure message, shown verbatim.
    Failed(String),
    Ready(T),
}

impl<T> Slot<T> {
    /// Stores the outcome if the slot is still pending.
    ///
    /// Returns `false` (and leaves the slot untouched) when already settled.
    pub fn settle(&mut self, outcome: Result<T>) -> bool {
        if self.is_settled() {
            return false;
        }
        *self = match outcome {
            Ok(value) => Slot::Ready(value),
            Err(err) => Slot::Failed(err.to_string()),
        };
        true
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Slot::Pending)
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.is_pending()
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Slot::Ready(value) => Some(value),
            Slot::Pending | Slot::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Slot::Failed(message) => Some(message),
            Slot::Pending | Slot::Ready(_) => None,
        }
    }
}
