use super::action_button;
use crate::components::{BoundaryFallback, CodeBlock, ErrorBoundary, SectionCard};
use shared::playground::boundary;
use yew::prelude::*;

const CODE: &str = r#"<ErrorBoundary
    render={Callback::from(move |()| buggy_render(should_fail).map(...))}
    fallback={Callback::from(|fallback: BoundaryFallback| html! {
        <div>
            <p>{format!("Error: {}", fallback.message)}</p>
            <button onclick={move |_| fallback.reset.emit(())}>{"Reset"}</button>
        </div>
    })}
/>"#;

fn render_fallback(fallback: BoundaryFallback) -> Html {
    let BoundaryFallback { message, reset } = fallback;
    html! {
        <div class="space-y-2">
            <p class="text-sm text-rose-600 dark:text-rose-400">{format!("Error caught: {message}")}</p>
            <button
                type="button"
                class={action_button("bg-slate-600")}
                onclick={Callback::from(move |_: MouseEvent| reset.emit(()))}
            >
                {"Reset boundary"}
            </button>
        </div>
    }
}

#[function_component(ErrorBoundaryDemo)]
pub fn error_boundary_demo() -> Html {
    let should_fail = use_state(|| false);

    let toggle = {
        let should_fail = should_fail.clone();
        Callback::from(move |_: MouseEvent| should_fail.set(!*should_fail))
    };
    let on_reset = {
        let should_fail = should_fail.clone();
        Callback::from(move |()| should_fail.set(false))
    };
    let render = {
        let failing = *should_fail;
        Callback::from(move |()| {
            boundary::buggy_render(failing)
                .map(|text| {
                    html! { <p class="text-sm text-emerald-600 dark:text-emerald-400">{text}</p> }
                })
                .map_err(|err| err.to_string())
        })
    };

    html! {
        <SectionCard title="5. Error boundary" description="Catch errors in child components and render a fallback UI.">
            <div class="space-y-4">
                <button type="button" class={action_button("bg-rose-500")} onclick={toggle}>
                    {if *should_fail { "Reset (stop failing)" } else { "Trigger error" }}
                </button>
                <div class="rounded-lg border border-slate-200 bg-slate-50 p-4 dark:border-slate-700 dark:bg-slate-800">
                    <ErrorBoundary {render} fallback={Callback::from(render_fallback)} {on_reset} />
                </div>
                <CodeBlock code={CODE} />
            </div>
        </SectionCard>
    }
}
