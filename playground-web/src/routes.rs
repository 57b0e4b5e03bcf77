use crate::containers::{guest_layout::GuestLayout, layout::AuthLayout};
use crate::models::auth_store::AuthStore;
use crate::pages::*;
use shared::guard::{self, LoginRedirect, RouteAccess};
use strum::{EnumIter, IntoEnumIterator};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// The app routes
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/playground")]
    Playground,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Who may see the route; `None` for the fallback.
    pub fn access(&self) -> Option<RouteAccess> {
        match self {
            Route::Home | Route::Playground => Some(RouteAccess::AuthOnly),
            Route::Login => Some(RouteAccess::GuestOnly),
            Route::NotFound => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Playground => "Playground",
            Route::Login => "Sign in",
            Route::NotFound => "Not found",
        }
    }

    /// Routes listed in the signed-in header.
    pub fn nav_routes() -> Vec<Route> {
        Route::iter()
            .filter(|route| route.access() == Some(RouteAccess::AuthOnly))
            .collect()
    }

    /// Resolve an in-app path, defaulting to the dashboard.
    pub fn from_path_or_home(path: &str) -> Route {
        match Route::recognize(path) {
            Some(Route::NotFound) | None => Route::Home,
            Some(route) => route,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RedirectToLoginProps {
    pub from: AttrValue,
}

/// Replace the current entry with `/login?from=<path>`.
#[function_component(RedirectToLogin)]
pub fn redirect_to_login(props: &RedirectToLoginProps) -> Html {
    let navigator = use_navigator();
    use_effect_with(props.from.clone(), move |from| {
        if let Some(navigator) = navigator {
            let query = LoginRedirect::from_path(from.to_string());
            if let Err(err) = navigator.replace_with_query(&Route::Login, &query) {
                log::warn!("redirect to login failed: {err}");
            }
        }
        || ()
    });
    html! {}
}

/// Unknown paths go home or to the login view depending on the session.
#[function_component(FallbackRedirect)]
fn fallback_redirect() -> Html {
    let authenticated = use_selector(|state: &AuthStore| state.is_authenticated());
    let target = Route::recognize(guard::fallback_path(*authenticated)).unwrap_or(Route::Login);
    html! { <Redirect<Route> to={target} /> }
}

#[derive(Properties, PartialEq)]
pub struct RouteViewProps {
    pub route: Route,
}

#[function_component(RouteView)]
fn route_view(props: &RouteViewProps) -> Html {
    match props.route.clone() {
        Route::Login => html! {
            <GuestLayout>
                <LoginPage />
            </GuestLayout>
        },
        Route::Home => html! {
            <AuthLayout current_route={Route::Home}>
                <DashboardPage />
            </AuthLayout>
        },
        Route::Playground => html! {
            <AuthLayout current_route={Route::Playground}>
                <PlaygroundPage />
            </AuthLayout>
        },
        Route::NotFound => html! { <FallbackRedirect /> },
    }
}

/// Switch function for the app routes.
pub fn switch(route: Route) -> Html {
    log::debug!("Switching to route: {route:?}");
    html! { <RouteView {route} /> }
}
