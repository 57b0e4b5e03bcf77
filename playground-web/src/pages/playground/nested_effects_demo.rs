use super::action_button;
use crate::components::{CodeBlock, SectionCard};
use shared::playground::activity::{BoundedLog, effect_messages};
use std::rc::Rc;
use yew::prelude::*;

const CODE: &str = r#"// Outer effect re-runs whenever its dependencies change
use_effect_with((outer, enabled), move |(outer, _)| {
    log.dispatch(Entry::Push(format!("[Outer] {outer}")));
    || ()
});

// Inner effect lives in a child that is only mounted while enabled;
// its cleanup runs before every re-run and on unmount
use_effect_with(props.outer, move |outer| {
    log.dispatch(Entry::Push(format!("[Inner] run {outer}")));
    move || log.dispatch(Entry::Push(format!("[Inner] cleanup {outer}")))
});"#;

#[derive(Debug, PartialEq)]
struct EffectLog(BoundedLog);

impl Default for EffectLog {
    fn default() -> Self {
        Self(BoundedLog::for_effects())
    }
}

enum Entry {
    Push(String),
    Clear,
}

impl Reducible for EffectLog {
    type Action = Entry;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            Entry::Push(message) => next.push(message),
            Entry::Clear => next.clear(),
        }
        Rc::new(Self(next))
    }
}

#[derive(Properties, PartialEq)]
struct InnerEffectProps {
    outer: u32,
    log: UseReducerDispatcher<EffectLog>,
}

#[function_component(InnerEffect)]
fn inner_effect(props: &InnerEffectProps) -> Html {
    let log = props.log.clone();
    use_effect_with(props.outer, move |outer| {
        let outer = *outer;
        log.dispatch(Entry::Push(effect_messages::inner_run(outer)));
        move || log.dispatch(Entry::Push(effect_messages::inner_cleanup(outer)))
    });
    html! {}
}

#[function_component(NestedEffectsDemo)]
pub fn nested_effects_demo() -> Html {
    let outer_count = use_state(|| 0_u32);
    let inner_enabled = use_state(|| true);
    let log = use_reducer(EffectLog::default);

    {
        let dispatcher = log.dispatcher();
        use_effect_with((*outer_count, *inner_enabled), move |(count, _)| {
            dispatcher.dispatch(Entry::Push(effect_messages::outer(*count)));
            || ()
        });
    }

    let increment = {
        let outer_count = outer_count.clone();
        Callback::from(move |_: MouseEvent| outer_count.set(*outer_count + 1))
    };
    let toggle_inner = {
        let inner_enabled = inner_enabled.clone();
        Callback::from(move |_: MouseEvent| inner_enabled.set(!*inner_enabled))
    };
    let clear = {
        let dispatcher = log.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(Entry::Clear))
    };

    html! {
        <SectionCard
            title="6. Nested effects"
            description="Inner effects are cleaned up when the outer state changes or when they are switched off."
        >
            <div class="space-y-4">
                <div class="flex flex-wrap gap-2">
                    <button type="button" class={action_button("bg-emerald-500")} onclick={increment}>
                        {format!("Increment outer ({})", *outer_count)}
                    </button>
                    <button
                        type="button"
                        class={action_button(if *inner_enabled { "bg-blue-500" } else { "bg-slate-500" })}
                        onclick={toggle_inner}
                    >
                        {format!("Inner effect: {}", if *inner_enabled { "ON" } else { "OFF" })}
                    </button>
                    <button type="button" class={action_button("bg-slate-400")} onclick={clear}>
                        {"Clear logs"}
                    </button>
                </div>
                if *inner_enabled {
                    <InnerEffect outer={*outer_count} log={log.dispatcher()} />
                }
                <div class="max-h-48 overflow-y-auto rounded-lg bg-slate-900 p-3 font-mono text-xs text-slate-300 dark:bg-slate-950">
                    if log.0.is_empty() {
                        <p class="text-slate-500">{"No logs yet..."}</p>
                    } else {
                        { for log.0.iter().map(|entry| html! { <p class="whitespace-pre">{entry.to_string()}</p> }) }
                    }
                </div>
                <CodeBlock code={CODE} />
            </div>
        </SectionCard>
    }
}
