//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components map render plans onto views. They read `RenderConfig` from
//! context and own the browser resources (frames, viewer handles) for the
//! items they show.

pub mod fallback_list;
pub mod full_screen;
pub mod molecule_block;
pub mod rich_item;
pub mod sandboxed_frame;
pub mod table_grid;
pub mod texts_visualizer;
