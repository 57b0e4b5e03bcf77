use crate::components::{CodeBlock, SectionCard};
use shared::playground::activity::BoundedLog;
use shared::playground::events::{EVENT_ITEMS, EventCounters, ITEM_ATTRIBUTE};
use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

const BUBBLES_LABEL: &str = "Native (bubbles)";
const STOPS_LABEL: &str = "Native (stop_propagation)";

const CODE: &str = r#"// Delegated: one listener on the container, children identified by data-item
<div onclick={on_container_click}>
    <button data-item="Primary">{"Primary"}</button>
    <button data-item="Secondary">{"Secondary"}</button>
</div>

// Per-element listeners: stop_propagation keeps the parent from hearing about it
<div onclick={on_parent_click}>
    <button onclick={|_| log("bubbles")}>{"Bubbles"}</button>
    <button onclick={|e: MouseEvent| { e.stop_propagation(); log("stops") }}>{"Stops"}</button>
</div>"#;

#[derive(Debug, PartialEq)]
struct EventActivity {
    counters: EventCounters,
    log: BoundedLog,
}

impl Default for EventActivity {
    fn default() -> Self {
        Self {
            counters: EventCounters::default(),
            log: BoundedLog::for_events(),
        }
    }
}

enum Hit {
    Delegated(String),
    Native { label: &'static str, stopped: bool },
    Bubbled,
}

impl Reducible for EventActivity {
    type Action = Hit;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut counters = self.counters;
        let mut log = self.log.clone();
        let message = match action {
            Hit::Delegated(label) => counters.delegated_hit(&label),
            Hit::Native { label, stopped } => counters.native_hit(label, stopped),
            Hit::Bubbled => counters.bubbled_hit(),
        };
        log.push(message);
        Rc::new(Self { counters, log })
    }
}

/// Label of the `data-item` element the click landed in, if any.
fn delegated_item(event: &MouseEvent) -> Option<String> {
    let target: Element = event.target_dyn_into()?;
    let item = target.closest(&format!("[{ITEM_ATTRIBUTE}]")).ok()??;
    item.get_attribute(ITEM_ATTRIBUTE)
}

#[function_component(EventDemo)]
pub fn event_demo() -> Html {
    let activity = use_reducer(EventActivity::default);

    let on_delegated_click = {
        let dispatcher = activity.dispatcher();
        Callback::from(move |event: MouseEvent| {
            if let Some(label) = delegated_item(&event) {
                dispatcher.dispatch(Hit::Delegated(label));
            }
        })
    };
    let on_parent_click = {
        let dispatcher = activity.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(Hit::Bubbled))
    };
    let native_click = |label: &'static str, stopped: bool| {
        let dispatcher = activity.dispatcher();
        Callback::from(move |event: MouseEvent| {
            if stopped {
                event.stop_propagation();
            }
            dispatcher.dispatch(Hit::Native { label, stopped });
        })
    };

    let counters = activity.counters;

    html! {
        <SectionCard
            title="8. Event handling: delegation vs direct listeners"
            description="Compare one delegated listener against per-element handlers and see how propagation changes."
        >
            <div class="space-y-6">
                <div class="grid gap-3 sm:grid-cols-3">
                    <div class="rounded-xl border border-slate-200 bg-white/80 p-3 text-sm shadow-sm dark:border-slate-800 dark:bg-slate-900/60">
                        <p class="text-xs uppercase tracking-[0.2em] text-emerald-500">{"Delegated"}</p>
                        <p class="mt-1 font-semibold text-slate-900 dark:text-slate-100">{"1 listener on the container"}</p>
                        <p class="text-xs text-slate-500">{"Children are told apart by their data-item attribute."}</p>
                    </div>
                    <div class="rounded-xl border border-slate-200 bg-white/80 p-3 text-sm shadow-sm dark:border-slate-800 dark:bg-slate-900/60">
                        <p class="text-xs uppercase tracking-[0.2em] text-amber-500">{"Direct"}</p>
                        <p class="mt-1 font-semibold text-slate-900 dark:text-slate-100">{"Per-element listeners"}</p>
                        <p class="text-xs text-slate-500">{"Attached to each button; stop_propagation works as expected."}</p>
                    </div>
                    <div class="rounded-xl border border-slate-200 bg-white/80 p-3 text-sm shadow-sm dark:border-slate-800 dark:bg-slate-900/60">
                        <p class="text-xs uppercase tracking-[0.2em] text-sky-500">{"Counts"}</p>
                        <p class="mt-1 text-xs text-slate-600 dark:text-slate-300">{format!("Delegated hits: {}", counters.delegated)}</p>
                        <p class="text-xs text-slate-600 dark:text-slate-300">{format!("Native hits: {}", counters.native)}</p>
                        <p class="text-xs text-slate-600 dark:text-slate-300">{format!("Parent bubbles: {}", counters.bubbled)}</p>
                    </div>
                </div>

                <div class="space-y-2">
                    <p class="text-sm font-medium text-slate-700 dark:text-slate-200">{"Delegated handler"}</p>
                    <p class="text-xs text-slate-500">
                        {"One container listener handles every child click. Changing the children keeps the single handler."}
                    </p>
                    <div
                        class="flex flex-wrap gap-2 rounded-2xl border border-slate-200 bg-white/80 p-4 shadow-sm dark:border-slate-800 dark:bg-slate-900/50"
                        onclick={on_delegated_click}
                    >
                        { for EVENT_ITEMS.iter().map(|item| html! {
                            <button
                                type="button"
                                key={item.label}
                                data-item={item.label}
                                title={item.detail}
                                class="rounded-lg border border-slate-200 px-3 py-2 text-xs font-medium text-slate-700 shadow-sm transition hover:border-emerald-300 dark:border-slate-700 dark:bg-slate-900/60 dark:text-slate-200"
                            >
                                {item.label}
                            </button>
                        }) }
                    </div>
                </div>

                <div class="space-y-2">
                    <p class="text-sm font-medium text-slate-700 dark:text-slate-200">{"Direct handlers and propagation"}</p>
                    <p class="text-xs text-slate-500">
                        {"Each button owns its handler. The outer container logs bubbled clicks unless a child calls "}
                        <code>{"stop_propagation"}</code>
                        {"."}
                    </p>
                    <div
                        class="space-y-2 rounded-2xl border border-slate-200 bg-white/80 p-4 shadow-sm dark:border-slate-800 dark:bg-slate-900/50"
                        onclick={on_parent_click}
                    >
                        <div class="flex flex-wrap gap-2">
                            <button
                                type="button"
                                class="rounded-lg border border-slate-200 bg-white px-3 py-2 text-xs font-medium text-slate-700 shadow-sm transition hover:border-amber-300 dark:border-slate-700 dark:bg-slate-900/60 dark:text-slate-200"
                                onclick={native_click(BUBBLES_LABEL, false)}
                            >
                                {BUBBLES_LABEL}
                            </button>
                            <button
                                type="button"
                                class="rounded-lg border border-rose-200 bg-rose-50 px-3 py-2 text-xs font-medium text-rose-600 shadow-sm transition hover:bg-rose-100"
                                onclick={native_click(STOPS_LABEL, true)}
                            >
                                {STOPS_LABEL}
                            </button>
                        </div>
                        <p class="text-[0.7rem] text-slate-500">{"Notice the parent log only when bubbling is allowed."}</p>
                    </div>
                </div>

                <div class="rounded-2xl border border-slate-200 bg-slate-50 p-4 text-xs text-slate-700 shadow-sm dark:border-slate-800 dark:bg-slate-900/60 dark:text-slate-200">
                    <p class="text-[0.65rem] uppercase tracking-[0.2em] text-slate-500">{"Event log"}</p>
                    <ul class="mt-2 space-y-1">
                        if activity.log.is_empty() {
                            <li class="text-[0.68rem] text-slate-400">{"Click the buttons to see propagation differences."}</li>
                        } else {
                            { for activity.log.iter().map(|entry| html! { <li class="text-[0.68rem]">{entry.to_string()}</li> }) }
                        }
                    </ul>
                </div>

                <CodeBlock code={CODE} />
            </div>
        </SectionCard>
    }
}
