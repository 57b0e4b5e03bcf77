use crate::containers::header::Header;
use crate::models::auth_store::AuthStore;
use crate::routes::{RedirectToLogin, Route};
use shared::guard::{self, GuardDecision, RouteAccess};
use yew::{Children, Html, Properties, classes, function_component, html};
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct AuthLayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<Route>,
}

/// Shell for signed-in views. Anonymous visitors are sent to the login view
/// with the path they asked for.
#[function_component(AuthLayout)]
pub fn auth_layout(props: &AuthLayoutProps) -> Html {
    let authenticated = use_selector(|state: &AuthStore| state.is_authenticated());
    let location = use_location();
    let requested_path = location
        .as_ref()
        .map_or_else(|| "/".to_string(), |location| location.path().to_string());

    match guard::guard(RouteAccess::AuthOnly, *authenticated, &requested_path) {
        GuardDecision::RedirectToLogin { from } => {
            return html! { <RedirectToLogin from={from} /> };
        }
        GuardDecision::RedirectToHome => {
            return html! { <Redirect<Route> to={Route::Home} /> };
        }
        GuardDecision::Render => {}
    }

    html! {
        <div class="min-h-screen bg-slate-50 text-slate-900 transition-colors dark:bg-slate-950 dark:text-slate-100">
            <Header current_route={props.current_route.clone()} />
            <main class={classes!(
                "mx-auto",
                "max-w-6xl",
                "space-y-8",
                "px-6",
                "pb-16",
                "pt-10"
            )}>
                {props.children.clone()}
            </main>
            <footer class="border-t border-slate-200 py-4 text-center text-xs text-slate-500 dark:border-slate-800">
                <p>{"Reactive Playground · Powered by Rust, Yew and yewdux"}</p>
            </footer>
        </div>
    }
}
