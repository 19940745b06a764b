//! Top-level view for a batch of text values.
//!
//! The batch plan is memoized and items are keyed on position plus contents,
//! so a reload only mounts items that changed. Items that disappear unmount
//! and release their frames and viewer handles.

use leptos::prelude::*;

use crate::components::fallback_list::FallbackList;
use crate::components::rich_item::RichItem;
use crate::config::use_render_config;
use crate::net::types::Item;
use crate::render::{BatchPlan, plan_batch};

#[component]
pub fn TextsVisualizer(#[prop(into)] items: Signal<Vec<Item>>, #[prop(into)] is_loading: Signal<bool>) -> impl IntoView {
    let config = use_render_config();
    let plan = Memo::new(move |_| {
        let config = config.get();
        items.with(|items| plan_batch(items, &config))
    });
    let is_rich = Memo::new(move |_| plan.with(|p| matches!(p, BatchPlan::Rich(_))));
    let rich_plans = move || match plan.get() {
        BatchPlan::Rich(plans) => plans,
        BatchPlan::Fallback => Vec::new(),
    };

    view! {
        <div class="texts-visualizer">
            <Show
                when=move || is_rich.get()
                fallback=move || view! { <FallbackList items=items is_loading=is_loading/> }
            >
                <div class="texts-visualizer__items">
                    <For
                        each=rich_plans
                        key=|plan| plan.key
                        children=|plan| view! { <RichItem plan=plan/> }
                    />
                </div>
            </Show>
        </div>
    }
}
