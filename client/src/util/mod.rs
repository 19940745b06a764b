//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser resources (viewer instances, object URLs)
//! from component logic. Browser-only code sits behind the `hydrate` feature
//! and degrades to inert values during SSR and native tests.

pub mod molecule_viewer;
pub mod object_url;
