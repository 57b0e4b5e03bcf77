use crate::components::{CodeBlock, DynamicAlert, SectionCard};
use shared::playground::alerts::AlertKind;
use yew::prelude::*;

const CODE: &str = r#"// One component per kind, picked at runtime
match props.kind {
    AlertKind::Success => html! { <AlertSuccess {message} /> },
    AlertKind::Warning => html! { <AlertWarning {message} /> },
    AlertKind::Error => html! { <AlertError {message} /> },
    AlertKind::Info => html! { <AlertInfo {message} /> },
}

<DynamicAlert kind={*alert_kind} />"#;

#[function_component(DynamicDemo)]
pub fn dynamic_demo() -> Html {
    let alert_kind = use_state(AlertKind::default);

    html! {
        <SectionCard
            title="3. Dynamic component"
            description="Render a different component based on a runtime value without conditional chains."
        >
            <div class="space-y-4">
                <div class="flex flex-wrap gap-2">
                    { for AlertKind::all().into_iter().map(|kind| {
                        let alert_kind = alert_kind.clone();
                        let selected = *alert_kind == kind;
                        html! {
                            <button
                                type="button"
                                class={classes!(
                                    "rounded", "px-3", "py-1", "text-xs", "font-medium", "transition",
                                    if selected {
                                        "bg-emerald-500 text-white"
                                    } else {
                                        "bg-slate-200 text-slate-700 hover:bg-slate-300 dark:bg-slate-700 dark:text-slate-200"
                                    }
                                )}
                                onclick={Callback::from(move |_: MouseEvent| alert_kind.set(kind))}
                            >
                                {kind.to_string()}
                            </button>
                        }
                    }) }
                </div>

                <DynamicAlert kind={*alert_kind} />

                <CodeBlock code={CODE} />
            </div>
        </SectionCard>
    }
}
