use crate::models::auth_store::{self, AuthStore};
use yew::prelude::*;
use yewdux::prelude::use_store;

/// Signed-in identity and the sign-out action.
#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let (auth, dispatch) = use_store::<AuthStore>();
    let Some(user) = auth.session.user.clone() else {
        return html! {};
    };

    let on_logout = Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        // The auth layout notices the idle session and redirects to the login view.
        auth_store::logout(&dispatch);
    });

    html! {
        <div class="flex items-center gap-3">
            <div class="hidden text-left md:block">
                <p class="text-xs text-slate-500">{"Signed in as"}</p>
                <p class="font-medium">{ user.name.clone() }</p>
                <p class="text-xs text-slate-500">{ user.email.clone() }</p>
            </div>
            <button
                type="button"
                class="rounded-lg bg-slate-900 px-3 py-2 text-sm font-semibold text-white shadow-sm transition hover:-translate-y-px hover:bg-slate-800 dark:bg-emerald-500 dark:hover:bg-emerald-400"
                onclick={on_logout}
            >
                {"Sign out"}
            </button>
        </div>
    }
}
