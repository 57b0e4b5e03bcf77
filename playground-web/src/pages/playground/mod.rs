//! Interactive catalog of reactive UI patterns, one demo per card.

mod conditional_demo;
mod dynamic_demo;
mod error_boundary_demo;
mod event_demo;
mod list_demo;
mod nested_effects_demo;
mod resource_demo;
mod store_demo;

use conditional_demo::ConditionalDemo;
use dynamic_demo::DynamicDemo;
use error_boundary_demo::ErrorBoundaryDemo;
use event_demo::EventDemo;
use list_demo::ListRenderingDemo;
use nested_effects_demo::NestedEffectsDemo;
use resource_demo::ResourceDemo;
use store_demo::StoreDemo;
use yew::{Html, function_component, html};

/// Shared look for the small action buttons inside the demos.
pub(crate) fn action_button(color: &'static str) -> yew::Classes {
    yew::classes!(
        "rounded",
        "px-3",
        "py-1",
        "text-xs",
        "font-medium",
        "text-white",
        "disabled:opacity-50",
        color
    )
}

#[function_component(PlaygroundPage)]
pub fn playground_page() -> Html {
    html! {
        <div class="space-y-8">
            <div>
                <p class="text-xs uppercase tracking-[0.2em] text-emerald-500">{"Reactive concepts"}</p>
                <h1 class="text-2xl font-semibold text-slate-900 dark:text-slate-50">{"Playground"}</h1>
                <p class="mt-1 text-sm text-slate-600 dark:text-slate-400">
                    {"Interactive examples of stores, control flow, effects and data fetching."}
                </p>
            </div>

            <StoreDemo />
            <ConditionalDemo />
            <DynamicDemo />
            <ListRenderingDemo />
            <ErrorBoundaryDemo />
            <NestedEffectsDemo />
            <ResourceDemo />
            <EventDemo />
        </div>
    }
}
