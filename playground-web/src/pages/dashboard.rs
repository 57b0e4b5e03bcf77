use crate::api::PlaceholderClient;
use crate::components::{Loading, StatCard};
use crate::config::FrontendConfig;
use crate::models::{auth_store::AuthStore, ui_store::UiStore};
use shared::models::remote::completed_count;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::{use_selector, use_store};

const OUTLINE_BUTTON: &str = "rounded-lg border border-slate-200 px-3 py-2 text-sm font-medium text-slate-900 shadow-sm transition hover:-translate-y-px hover:border-emerald-200 hover:bg-emerald-50 dark:border-slate-800 dark:bg-slate-950 dark:text-slate-50 dark:hover:border-emerald-700 dark:hover:bg-emerald-950/60";

fn count_or_loading<T>(loading: bool, data: Option<&Vec<T>>) -> String {
    if loading {
        "Loading…".to_string()
    } else {
        data.map_or(0, Vec::len).to_string()
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let user_name = use_selector(|state: &AuthStore| {
        state.session.user.as_ref().map(|user| user.name.clone())
    });
    let (ui, ui_dispatch) = use_store::<UiStore>();

    let users = use_async_with_options(
        async move { PlaceholderClient::shared().get_users().await },
        UseAsyncOptions::enable_auto(),
    );
    let todos = use_async_with_options(
        async move { PlaceholderClient::shared().get_todos(None).await },
        UseAsyncOptions::enable_auto(),
    );

    use_effect_with(ui.prefs.theme, |theme| {
        log::info!("Theme changed to {theme}");
        || ()
    });

    let toggle_theme: Callback<MouseEvent> =
        ui_dispatch.reduce_mut_callback(|state| state.toggle_theme());
    let toggle_hints: Callback<MouseEvent> =
        ui_dispatch.reduce_mut_callback(|state| state.toggle_hints());
    let increment: Callback<MouseEvent> =
        ui_dispatch.reduce_mut_callback(|state| state.increment_clicks());

    let completed = todos.data.as_deref().map_or(0, completed_count);
    let documentation_url = FrontendConfig::new().documentation_url().to_string();

    html! {
        <div class="space-y-6">
            <div class="flex flex-col gap-3 rounded-2xl border border-slate-200 bg-white/70 p-6 shadow-sm dark:border-slate-800 dark:bg-slate-900/70">
                <div class="flex items-center justify-between">
                    <div>
                        <p class="text-xs uppercase tracking-[0.2em] text-emerald-500">{"Welcome"}</p>
                        <h1 class="text-2xl font-semibold text-slate-900 dark:text-slate-50">
                            {(*user_name).clone().unwrap_or_default()}
                        </h1>
                        <p class="text-sm text-slate-600 dark:text-slate-400">{"This page is protected by the auth layout."}</p>
                    </div>
                    <div class="flex gap-2">
                        <button type="button" class={OUTLINE_BUTTON} onclick={toggle_theme.clone()}>
                            {"Toggle theme"}
                        </button>
                        <button
                            type="button"
                            class="rounded-lg bg-emerald-500 px-3 py-2 text-sm font-semibold text-white shadow-sm transition hover:-translate-y-px hover:bg-emerald-400"
                            onclick={increment.clone()}
                        >
                            {"Global click +1"}
                        </button>
                    </div>
                </div>
                <p class="text-sm text-slate-600 dark:text-slate-400">
                    {"Global clicks persist across routes: "}
                    <span class="font-semibold text-slate-900 dark:text-slate-100">{ui.prefs.global_clicks}</span>
                </p>
                if ui.prefs.show_hints {
                    <p class="flex items-center gap-2 text-xs text-slate-500">
                        <Icon icon_id={IconId::HeroiconsOutlineLightBulb} class="h-4 w-4" />
                        {"Hint: the playground tab walks through every store and effect pattern. "}
                        <a class="text-emerald-600 underline" href={documentation_url} target="_blank" rel="noreferrer">
                            {"Read the docs"}
                        </a>
                    </p>
                }
            </div>

            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                <StatCard
                    title="Team members"
                    value={count_or_loading(users.loading, users.data.as_ref())}
                    helper="Fetched from jsonplaceholder"
                />
                <StatCard
                    title="Todos fetched"
                    value={count_or_loading(todos.loading, todos.data.as_ref())}
                    helper="Using use_async"
                />
                <StatCard title="Completed" value={completed.to_string()} helper="Derived from fetched todos" />
            </div>

            <div class="grid gap-4 lg:grid-cols-3">
                <div class="space-y-3 rounded-2xl border border-slate-200 bg-white/80 p-5 shadow-sm dark:border-slate-800 dark:bg-slate-900/80 lg:col-span-2">
                    <div class="flex items-center justify-between">
                        <div>
                            <p class="text-xs uppercase tracking-[0.2em] text-emerald-500">{"Effect demo"}</p>
                            <p class="text-lg font-semibold text-slate-900 dark:text-slate-50">{"Todo list (live data)"}</p>
                        </div>
                        if todos.loading {
                            <Loading />
                        }
                    </div>
                    if let Some(err) = &todos.error {
                        <p class="text-sm text-rose-500">{err.to_string()}</p>
                    }
                    <div class="space-y-2">
                        { for todos.data.iter().flatten().map(|item| html! {
                            <div key={item.id} class="flex items-center justify-between rounded-xl border border-slate-200 bg-white px-4 py-3 text-sm shadow-sm transition hover:-translate-y-px dark:border-slate-800 dark:bg-slate-950">
                                <div class="space-y-1">
                                    <p class="font-medium text-slate-900 dark:text-slate-100">{item.title.clone()}</p>
                                    <p class="text-xs text-slate-500">{format!("Task #{}", item.id)}</p>
                                </div>
                                <span class={classes!(
                                    "rounded-full", "px-3", "py-1", "text-xs", "font-semibold",
                                    if item.completed {
                                        "bg-emerald-100 text-emerald-700 dark:bg-emerald-900/50 dark:text-emerald-200"
                                    } else {
                                        "bg-amber-100 text-amber-700 dark:bg-amber-900/50 dark:text-amber-200"
                                    }
                                )}>
                                    {if item.completed { "Done" } else { "In progress" }}
                                </span>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="space-y-3 rounded-2xl border border-slate-200 bg-white/80 p-5 shadow-sm dark:border-slate-800 dark:bg-slate-900/80">
                    <p class="text-xs uppercase tracking-[0.2em] text-emerald-500">{"Global store"}</p>
                    <p class="text-lg font-semibold text-slate-900 dark:text-slate-50">{"UI preferences"}</p>
                    <ul class="space-y-2 text-sm text-slate-700 dark:text-slate-200">
                        <li class="flex items-center justify-between rounded-lg border border-slate-200 bg-white px-3 py-2 shadow-sm dark:border-slate-800 dark:bg-slate-950">
                            <span>{"Theme"}</span>
                            <span class="font-semibold capitalize">{ui.prefs.theme.as_str()}</span>
                        </li>
                        <li class="flex items-center justify-between rounded-lg border border-slate-200 bg-white px-3 py-2 shadow-sm dark:border-slate-800 dark:bg-slate-950">
                            <span>{"Show hints"}</span>
                            <span class="font-semibold">{if ui.prefs.show_hints { "On" } else { "Off" }}</span>
                        </li>
                        <li class="flex items-center justify-between rounded-lg border border-slate-200 bg-white px-3 py-2 shadow-sm dark:border-slate-800 dark:bg-slate-950">
                            <span>{"Global clicks"}</span>
                            <span class="font-semibold">{ui.prefs.global_clicks}</span>
                        </li>
                    </ul>
                    <div class="space-y-2 text-sm">
                        <button type="button" class={classes!("w-full", OUTLINE_BUTTON)} onclick={toggle_theme}>
                            {"Toggle theme"}
                        </button>
                        <button type="button" class={classes!("w-full", OUTLINE_BUTTON)} onclick={toggle_hints}>
                            {"Toggle hints"}
                        </button>
                        <button type="button" class={classes!("w-full", OUTLINE_BUTTON)} onclick={increment}>
                            {"Add click"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
