//! Route-level page components.

pub mod texts;
