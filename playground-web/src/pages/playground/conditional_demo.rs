use super::action_button;
use crate::components::{CodeBlock, SectionCard};
use shared::playground::conditional::FetchStatus;
use yew::prelude::*;

const CODE: &str = r#"// Plain `if` renders children only when the condition holds
if *show_details {
    <p>{"Visible content"}</p>
} else {
    <p>{"Hidden"}</p>
}

// `match` picks exactly one branch per status
match *status {
    FetchStatus::Loading => html! { "Loading..." },
    FetchStatus::Success => html! { "Done!" },
    FetchStatus::Error => html! { "Failed" },
    FetchStatus::Idle => html! {},
}"#;

fn status_button_color(status: FetchStatus) -> &'static str {
    match status {
        FetchStatus::Idle => "bg-slate-500",
        FetchStatus::Loading => "bg-blue-500",
        FetchStatus::Success => "bg-emerald-500",
        FetchStatus::Error => "bg-rose-500",
    }
}

fn status_text_class(status: FetchStatus) -> &'static str {
    match status {
        FetchStatus::Idle => "text-sm text-slate-600 dark:text-slate-300",
        FetchStatus::Loading => "text-sm text-blue-600 dark:text-blue-400",
        FetchStatus::Success => "text-sm text-emerald-600 dark:text-emerald-400",
        FetchStatus::Error => "text-sm text-rose-600 dark:text-rose-400",
    }
}

#[function_component(ConditionalDemo)]
pub fn conditional_demo() -> Html {
    let status = use_state(FetchStatus::default);
    let show_details = use_state(|| false);

    let toggle_details = {
        let show_details = show_details.clone();
        Callback::from(move |_: MouseEvent| show_details.set(!*show_details))
    };

    html! {
        <SectionCard
            title="2. Conditional rendering: if and match"
            description="Control flow inside html! decides which subtree exists at all."
        >
            <div class="space-y-4">
                <div class="space-y-2">
                    <p class="text-sm font-medium text-slate-700 dark:text-slate-200">{"if / else with a fallback"}</p>
                    <button type="button" class={action_button("bg-emerald-500")} onclick={toggle_details}>
                        {"Toggle details"}
                    </button>
                    <div class="rounded-lg border border-slate-200 bg-slate-50 p-3 dark:border-slate-700 dark:bg-slate-800">
                        if *show_details {
                            <p class="text-sm text-emerald-600 dark:text-emerald-400">
                                {"🎉 Details are now visible! This content only renders while the toggle is on."}
                            </p>
                        } else {
                            <p class="text-sm text-slate-500">{"Details hidden. Click to reveal."}</p>
                        }
                    </div>
                </div>

                <div class="space-y-2">
                    <p class="text-sm font-medium text-slate-700 dark:text-slate-200">{"match on a status enum"}</p>
                    <div class="flex flex-wrap gap-2">
                        { for FetchStatus::ALL.into_iter().map(|option| {
                            let status = status.clone();
                            html! {
                                <button
                                    type="button"
                                    class={action_button(status_button_color(option))}
                                    onclick={Callback::from(move |_: MouseEvent| status.set(option))}
                                >
                                    {option.label()}
                                </button>
                            }
                        }) }
                    </div>
                    <div class="rounded-lg border border-slate-200 bg-slate-50 p-3 dark:border-slate-700 dark:bg-slate-800">
                        <p class={status_text_class(*status)}>{status.message()}</p>
                    </div>
                </div>

                <CodeBlock code={CODE} />
            </div>
        </SectionCard>
    }
}
