//! One item of a rich batch: its step header plus exactly one block.

#[cfg(test)]
#[path = "rich_item_test.rs"]
mod rich_item_test;

use leptos::prelude::*;

use crate::components::full_screen::FullScreen;
use crate::components::molecule_block::MoleculeBlock;
use crate::components::sandboxed_frame::SandboxedFrame;
use crate::components::table_grid::TableGrid;
use crate::config::{RenderConfig, use_render_config};
use crate::render::{Block, ItemPlan, RenderError, SurfaceKind};

/// Full-page tables take most of the viewport instead of the fixed height.
pub const FULL_PAGE_TABLE_STYLE: &str = "height: 80vh; position: relative;";

#[must_use]
pub fn surface_style(kind: SurfaceKind, config: &RenderConfig) -> String {
    match kind {
        SurfaceKind::Table => FULL_PAGE_TABLE_STYLE.to_owned(),
        SurfaceKind::Html => config.frame_height_style(),
    }
}

#[must_use]
pub fn surface_modifier(kind: SurfaceKind) -> &'static str {
    match kind {
        SurfaceKind::Table => "table",
        SurfaceKind::Html => "html",
    }
}

#[component]
fn RenderErrorNotice(error: RenderError) -> impl IntoView {
    view! {
        <div class="render-error" role="alert">
            <strong>{format!("Could not render {} value", error.kind)}</strong>
            <pre>{error.message}</pre>
        </div>
    }
}

#[component]
pub fn RichItem(plan: ItemPlan) -> impl IntoView {
    let config = use_render_config();
    let ItemPlan { step, kind, block, .. } = plan;

    let body = match block {
        Block::Grid(table) => view! { <TableGrid table=table/> }.into_any(),
        Block::Surface { kind: surface, document } => view! {
            <div
                class=format!("rich-item__surface rich-item__surface--{}", surface_modifier(surface))
                style=move || surface_style(surface, &config.get())
            >
                <FullScreen>
                    <SandboxedFrame document=document title=format!("step {step}")/>
                </FullScreen>
            </div>
        }
        .into_any(),
        Block::Molecule(payload) => view! { <MoleculeBlock payload=payload/> }.into_any(),
        Block::Text(text) => view! { <pre class="rich-item__text">{text}</pre> }.into_any(),
        Block::Error(error) => view! { <RenderErrorNotice error=error/> }.into_any(),
    };

    view! {
        <div class=format!("rich-item rich-item--{}", kind.as_str())>
            <span class="rich-item__step">{step}</span>
            {body}
        </div>
    }
}
