use crate::models::auth_store::AuthStore;
use crate::routes::Route;
use shared::guard::{self, GuardDecision, LoginRedirect, RouteAccess};
use yew::{Children, Html, Properties, function_component, html};
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct GuestLayoutProps {
    pub children: Children,
}

/// Shell for the login view. Signed-in users are sent on to the page they
/// originally asked for, or the dashboard.
#[function_component(GuestLayout)]
pub fn guest_layout(props: &GuestLayoutProps) -> Html {
    let authenticated = use_selector(|state: &AuthStore| state.is_authenticated());
    let location = use_location();
    let redirect = location
        .as_ref()
        .and_then(|location| location.query::<LoginRedirect>().ok())
        .unwrap_or_default();

    if guard::guard(RouteAccess::GuestOnly, *authenticated, guard::LOGIN_PATH)
        == GuardDecision::RedirectToHome
    {
        let target = Route::from_path_or_home(guard::post_login_path(redirect.from.as_deref()));
        return html! { <Redirect<Route> to={target} /> };
    }

    html! {
        <div class="flex min-h-screen items-center justify-center bg-gradient-to-br from-slate-50 via-emerald-50 to-slate-100 px-6 dark:from-slate-900 dark:via-slate-900 dark:to-slate-950">
            <div class="w-full max-w-lg space-y-8 rounded-2xl border border-slate-200/70 bg-white/90 p-8 shadow-xl backdrop-blur dark:border-slate-800 dark:bg-slate-900/80">
                <div class="space-y-2 text-center">
                    <p class="text-xs uppercase tracking-[0.3em] text-emerald-500">{"Reactive playground"}</p>
                    <h1 class="text-2xl font-semibold text-slate-900 dark:text-slate-50">{"Welcome back"}</h1>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}
