use crate::config::FrontendConfig;
use crate::models::{auth_store, ui_store::UiStore};
use shared::auth::{self, Credentials, LOGIN_DELAY_MS};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::use_dispatch;

const INPUT_CLASS: &str = "w-full rounded-lg border border-slate-200 bg-white px-4 py-2 text-base text-slate-900 shadow-sm outline-none transition focus:border-emerald-400 focus:ring-2 focus:ring-emerald-100 dark:border-slate-800 dark:bg-slate-900 dark:text-slate-50 dark:focus:border-emerald-500";

/// Login form. Navigation after a successful sign-in is left to the guest
/// layout, which reacts to the session change.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let submitted = use_state(|| false);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let auth_dispatch = use_dispatch::<auth_store::AuthStore>();
    let ui_dispatch = use_dispatch::<UiStore>();

    let email_error = auth::validate_email_field(&email).filter(|_| *submitted);
    let password_error = auth::validate_password_field(&password).filter(|_| *submitted);

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let submitted_handle = submitted.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            submitted_handle.set(true);
            if auth::validate_email_field(&email_handle).is_some()
                || auth::validate_password_field(&password_handle).is_some()
            {
                return;
            }

            let credentials = Credentials::new((*email_handle).clone(), (*password_handle).clone());
            let delay_ms = if FrontendConfig::new().simulate_latency() {
                LOGIN_DELAY_MS
            } else {
                0
            };
            loading_handle.set(true);
            error_handle.set(None);
            let dispatch = auth_dispatch.clone();
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            spawn_local(async move {
                if let Err(err) = auth_store::login(dispatch, credentials, delay_ms).await {
                    error_ref.set(Some(err.to_string()));
                }
                loading_ref.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let on_increment: Callback<MouseEvent> =
        ui_dispatch.reduce_mut_callback(|state| state.increment_clicks());
    let is_busy = *loading;

    html! {
        <div class="space-y-6">
            <div class="rounded-xl bg-slate-900 px-4 py-3 text-sm text-white shadow-sm dark:bg-slate-800">
                <p class="font-semibold">{"Demo credentials"}</p>
                <p class="text-slate-200">{"Any email + any password with at least 4 characters."}</p>
            </div>

            <form class="space-y-4" {onsubmit} novalidate=true>
                <label class="block space-y-1 text-sm font-medium text-slate-700 dark:text-slate-200" for="email">
                    <div>{"Email"}</div>
                    <input
                        id="email"
                        class={INPUT_CLASS}
                        type="email"
                        placeholder="you@example.com"
                        value={(*email).clone()}
                        oninput={on_email_change}
                    />
                    if let Some(message) = email_error {
                        <p class="text-xs text-rose-500">{message}</p>
                    }
                </label>
                <label class="block space-y-1 text-sm font-medium text-slate-700 dark:text-slate-200" for="password">
                    <div>{"Password"}</div>
                    <input
                        id="password"
                        class={INPUT_CLASS}
                        type="password"
                        placeholder="••••••"
                        value={(*password).clone()}
                        oninput={on_password_change}
                    />
                    if let Some(message) = password_error {
                        <p class="text-xs text-rose-500">{message}</p>
                    }
                </label>

                if let Some(message) = &*error {
                    <div class="rounded-lg border border-rose-200 bg-rose-50 px-3 py-2 text-sm text-rose-700 dark:border-rose-900/60 dark:bg-rose-950/60 dark:text-rose-200">
                        {message.clone()}
                    </div>
                }

                <button
                    type="submit"
                    disabled={is_busy}
                    class="mt-2 flex w-full items-center justify-center gap-2 rounded-lg bg-emerald-500 px-4 py-2 text-center text-sm font-semibold text-white shadow-sm transition hover:-translate-y-px hover:bg-emerald-400 disabled:cursor-not-allowed disabled:opacity-60"
                >
                    {if is_busy { "Signing in…" } else { "Sign in" }}
                </button>
            </form>

            <div class="rounded-xl border border-slate-200 bg-slate-50 px-4 py-3 text-sm text-slate-700 shadow-inner dark:border-slate-800 dark:bg-slate-900 dark:text-slate-200">
                <p class="font-semibold">{"Global store demo"}</p>
                <p class="text-sm text-slate-600 dark:text-slate-400">
                    {"Clicks are tracked in a global store and reused across the app."}
                </p>
                <button
                    type="button"
                    class="mt-2 rounded-lg border border-slate-200 bg-white px-3 py-2 text-sm font-medium text-slate-900 shadow-sm transition hover:-translate-y-px hover:border-emerald-200 hover:bg-emerald-50 dark:border-slate-800 dark:bg-slate-950 dark:text-slate-50"
                    onclick={on_increment}
                >
                    {"Increment global counter"}
                </button>
            </div>
        </div>
    }
}
