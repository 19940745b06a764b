//! The text batch under display plus its loading status.
//!
//! DESIGN
//! ======
//! A reload replaces `items` wholesale. Views keyed on the previous batch
//! unmount, which releases their frames and viewer handles. Each load holds
//! a ticket so a slow response cannot overwrite a newer one.

#[cfg(test)]
#[path = "texts_test.rs"]
mod texts_test;

use crate::net::types::Item;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextsState {
    pub items: Vec<Item>,
    pub is_loading: bool,
    /// Last load failure, cleared when a new load starts.
    pub error: Option<String>,
    /// Ticket of the most recent load; older responses are dropped.
    pub generation: u64,
}

impl TextsState {
    /// Start a load and return its ticket.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.is_loading = true;
        self.error = None;
        self.generation
    }

    /// Install a loaded batch unless a newer load has started since.
    pub fn finish_load(&mut self, ticket: u64, items: Vec<Item>) -> bool {
        if ticket != self.generation {
            return false;
        }
        self.items = items;
        self.is_loading = false;
        true
    }

    /// Record a failed load; the previous batch stays visible.
    pub fn fail_load(&mut self, ticket: u64, message: impl Into<String>) -> bool {
        if ticket != self.generation {
            return false;
        }
        self.is_loading = false;
        self.error = Some(message.into());
        true
    }
}
