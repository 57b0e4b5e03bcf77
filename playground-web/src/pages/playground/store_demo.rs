use super::action_button;
use crate::components::{CodeBlock, SectionCard};
use shared::playground::store_demo::{PlaygroundStore, ProfileTheme, StorePatch};
use std::rc::Rc;
use yew::prelude::*;

const CODE: &str = r#"// Each patch touches exactly one path of the nested store
dispatch(StorePatch::SetFirstName("John".into()));
dispatch(StorePatch::SetProfileTheme(ProfileTheme::Dark));
dispatch(StorePatch::BumpScore { index: 0, by: 5 });

// Predicate: flip every item whose id matches
dispatch(StorePatch::ToggleItem { id: 2 });

// Structural change; the id is one past the largest in use
dispatch(StorePatch::AddItem);"#;

#[derive(Debug, Default, PartialEq)]
struct StoreDemoState(PlaygroundStore);

impl Reducible for StoreDemoState {
    type Action = StorePatch;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        Rc::new(Self(next))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn random_score() -> i64 {
    (js_sys::Math::random() * 100.0).floor() as i64
}

fn patch_button(
    store: &UseReducerHandle<StoreDemoState>,
    color: &'static str,
    label: &'static str,
    patch: impl Fn() -> StorePatch + 'static,
) -> Html {
    let store = store.clone();
    let onclick = Callback::from(move |_: MouseEvent| store.dispatch(patch()));
    html! {
        <button type="button" class={action_button(color)} {onclick}>{label}</button>
    }
}

#[function_component(StoreDemo)]
pub fn store_demo() -> Html {
    let store = use_reducer(StoreDemoState::default);
    let state = &store.0;
    let settings = &state.user.profile.settings;

    html! {
        <SectionCard
            title="1. Global store: path updates"
            description="Typed patches update one nested field at a time, leaving the rest of the store untouched."
        >
            <div class="space-y-4">
                <div class="grid gap-4 sm:grid-cols-2">
                    <div class="space-y-2">
                        <p class="text-sm font-medium text-slate-700 dark:text-slate-200">{"User profile"}</p>
                        <div class="rounded-lg border border-slate-200 bg-slate-50 p-3 text-sm dark:border-slate-700 dark:bg-slate-800">
                            <p>
                                <span class="text-slate-500">{"Name: "}</span>
                                <span class="font-medium">{state.full_name()}</span>
                            </p>
                            <p>
                                <span class="text-slate-500">{"Theme: "}</span>
                                <span class="font-medium capitalize">{settings.theme.as_str()}</span>
                            </p>
                            <p>
                                <span class="text-slate-500">{"Notifications: "}</span>
                                <span class="font-medium">{if settings.notifications { "On" } else { "Off" }}</span>
                            </p>
                        </div>
                        <div class="flex flex-wrap gap-2">
                            {patch_button(&store, "bg-emerald-500", "Set first name → \"John\"", || {
                                StorePatch::SetFirstName("John".to_string())
                            })}
                            {patch_button(&store, "bg-emerald-500", "Set theme → \"dark\"", || {
                                StorePatch::SetProfileTheme(ProfileTheme::Dark)
                            })}
                            {patch_button(&store, "bg-emerald-500", "Toggle notifications", || {
                                StorePatch::ToggleNotifications
                            })}
                        </div>
                    </div>

                    <div class="space-y-2">
                        <p class="text-sm font-medium text-slate-700 dark:text-slate-200">{"Scores"}</p>
                        <div class="flex flex-wrap gap-2">
                            { for state.user.scores.iter().enumerate().map(|(index, score)| html! {
                                <span class="rounded bg-slate-200 px-2 py-1 font-mono text-sm dark:bg-slate-700">
                                    {format!("[{index}]: {score}")}
                                </span>
                            }) }
                        </div>
                        <div class="flex flex-wrap gap-2">
                            {patch_button(&store, "bg-blue-500", "scores[0] += 5", || {
                                StorePatch::BumpScore { index: 0, by: 5 }
                            })}
                            {patch_button(&store, "bg-blue-500", "Push random", || {
                                StorePatch::PushScore(random_score())
                            })}
                        </div>
                    </div>
                </div>

                <div class="space-y-2">
                    <p class="text-sm font-medium text-slate-700 dark:text-slate-200">{"Items"}</p>
                    <div class="flex flex-wrap gap-2">
                        { for state.items.iter().map(|item| html! {
                            <span key={item.id} class={classes!(
                                "rounded", "px-2", "py-1", "text-xs", "font-medium",
                                if item.active {
                                    "bg-emerald-100 text-emerald-700 dark:bg-emerald-900/50 dark:text-emerald-200"
                                } else {
                                    "bg-slate-200 text-slate-600 dark:bg-slate-700 dark:text-slate-300"
                                }
                            )}>
                                {format!("{} ({})", item.name, if item.active { "active" } else { "inactive" })}
                            </span>
                        }) }
                    </div>
                    <div class="flex flex-wrap gap-2">
                        {patch_button(&store, "bg-amber-500", "Toggle Item B (predicate)", || {
                            StorePatch::ToggleItem { id: 2 }
                        })}
                        {patch_button(&store, "bg-amber-500", "Add item", || StorePatch::AddItem)}
                    </div>
                </div>

                <CodeBlock code={CODE} />
            </div>
        </SectionCard>
    }
}
