//! Rendering decisions that do not need the reactive runtime.
//!
//! ARCHITECTURE
//! ============
//! `plan` turns a batch into per-item blocks, `cell` resolves nested data URIs
//! inside table cells, and `document` builds the self-contained HTML that is
//! loaded into sandboxed frames. Components in `crate::components` only map
//! these values onto views.

pub mod cell;
pub mod document;
pub mod plan;

pub use cell::CellContent;
pub use plan::{BatchPlan, Block, ItemPlan, RenderError, SurfaceKind, TableStrategy, plan_batch, plan_item};

/// `sandbox` policy for every frame that shows experiment-supplied markup.
///
/// Scripts may run, but without `allow-same-origin` the frame gets an opaque
/// origin: no access to host cookies, storage or DOM. Top navigation, popups
/// and forms stay blocked.
pub const SANDBOX_POLICY: &str = "allow-scripts";
