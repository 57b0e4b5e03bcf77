use crate::models::{auth_store::use_session_persistence, ui_store::use_document_theme};
use crate::routes::{Route, switch};
use yew::{Html, function_component, html};
use yew_router::prelude::*;
use yewdux::YewduxRoot;

/// Installs the store side effects: session persistence and the theme class.
#[function_component(StoreEffects)]
fn store_effects() -> Html {
    use_session_persistence();
    use_document_theme();
    html! {}
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <YewduxRoot>
            <BrowserRouter>
                <StoreEffects />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </YewduxRoot>
    }
}
