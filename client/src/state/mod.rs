//! Reactive application state modules.
//!
//! DESIGN
//! ======
//! State structs are plain data wrapped in `RwSignal`s and provided through
//! Leptos context, so their transitions are testable without a runtime.

pub mod texts;
